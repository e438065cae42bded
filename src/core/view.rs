//! Attendance view engine - display-ready projections of the ledger.
//!
//! Every function here is a pure read of `(directory, ledger, reference date)`
//! and is recomputed on each render; nothing is cached or mutated.

use crate::{
    core::{
        calendar::{WeekendCalendar, YearMonth},
        directory::Directory,
        ledger::Ledger,
    },
    entities::{AttendanceRecord, AttendanceStatus, Teacher},
};
use chrono::NaiveDate;

/// One row of the daily view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyEntry<'a> {
    /// Directory entry for the row
    pub teacher: &'a Teacher,
    /// The day's record, or `None` for "no status"
    pub record: Option<&'a AttendanceRecord>,
}

/// Classification of one teacher on one day of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayMark {
    /// Weekend day; hides any stored status
    Weekend,
    /// Working day with a recorded status
    Recorded(AttendanceStatus),
    /// Working day with nothing recorded
    Unmarked,
}

impl DayMark {
    /// Grid letter: `P`, `A`, `L`, `E`, or `None` for a blank cell.
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Recorded(status) => Some(status.letter()),
            Self::Weekend | Self::Unmarked => None,
        }
    }

    /// Style class for the cell (`"weekend"`, `"present"`, ..., `"none"`).
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Weekend => "weekend",
            Self::Recorded(status) => status.as_str(),
            Self::Unmarked => "none",
        }
    }
}

/// Column header of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDay {
    /// Calendar day
    pub date: NaiveDate,
    /// Whether the day is a weekend under the supplied calendar
    pub is_weekend: bool,
    /// Whether the day equals the caller's "today"
    pub is_today: bool,
}

/// One teacher's row of the month grid; `marks[i]` belongs to `days[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow<'a> {
    /// Directory entry for the row
    pub teacher: &'a Teacher,
    /// One mark per day of the month
    pub marks: Vec<DayMark>,
}

/// Calendar-shaped classification of a whole month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid<'a> {
    /// Month being shown
    pub month: YearMonth,
    /// Every day of the month in order
    pub days: Vec<GridDay>,
    /// One row per teacher in directory order
    pub rows: Vec<GridRow<'a>>,
}

/// One row of the records listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEntry<'a> {
    /// Directory entry of the record's teacher
    pub teacher: &'a Teacher,
    /// The ledger record
    pub record: &'a AttendanceRecord,
}

/// Per-teacher attendance for one day, in directory order.
#[must_use]
pub fn daily_view<'a>(
    teachers: impl IntoIterator<Item = &'a Teacher>,
    ledger: &'a Ledger,
    date: NaiveDate,
) -> Vec<DailyEntry<'a>> {
    teachers
        .into_iter()
        .map(|teacher| DailyEntry {
            teacher,
            record: ledger.get_record(&teacher.id, date),
        })
        .collect()
}

/// Classifies every day of `month` for every teacher.
///
/// `today` marks the matching column, if it lies in the month. Weekend days are
/// always [`DayMark::Weekend`], whatever the ledger holds for them.
#[must_use]
pub fn month_grid<'a>(
    teachers: impl IntoIterator<Item = &'a Teacher>,
    ledger: &Ledger,
    month: YearMonth,
    today: NaiveDate,
    weekends: &WeekendCalendar,
) -> MonthGrid<'a> {
    let days: Vec<GridDay> = month
        .days()
        .map(|date| GridDay {
            date,
            is_weekend: weekends.is_weekend(date),
            is_today: date == today,
        })
        .collect();

    let rows = teachers
        .into_iter()
        .map(|teacher| GridRow {
            teacher,
            marks: days
                .iter()
                .map(|day| classify_day(ledger, &teacher.id, day))
                .collect(),
        })
        .collect();

    MonthGrid { month, days, rows }
}

fn classify_day(ledger: &Ledger, teacher_id: &str, day: &GridDay) -> DayMark {
    if day.is_weekend {
        return DayMark::Weekend;
    }
    ledger
        .get_record(teacher_id, day.date)
        .map_or(DayMark::Unmarked, |record| DayMark::Recorded(record.status))
}

/// Every ledger record joined with its teacher, filtered by `query`.
///
/// Records whose teacher is missing from the directory are never listed. The
/// query matches teacher name, email or notes, ignoring case; a blank query
/// matches every remaining record.
#[must_use]
pub fn records_view<'a>(
    directory: &'a Directory,
    ledger: &'a Ledger,
    query: &str,
) -> Vec<RecordEntry<'a>> {
    let needle = query.trim().to_lowercase();
    ledger
        .records()
        .filter_map(|record| {
            let teacher = directory.get(&record.teacher_id)?;
            Some(RecordEntry { teacher, record })
        })
        .filter(|entry| {
            needle.is_empty()
                || entry.teacher.matches_lowercase(&needle)
                || entry
                    .record
                    .notes
                    .as_deref()
                    .is_some_and(|notes| notes.to_lowercase().contains(&needle))
        })
        .collect()
}
