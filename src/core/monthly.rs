//! Monthly attendance aggregation.
//!
//! Percentages are computed over working (non-weekend) days only and are
//! returned unrounded; rounding for display happens in `core::report`.
//! A record only counts if its status is present or late and its day is a
//! working day, so with one record per day the result never exceeds 100.

use crate::{
    core::{
        calendar::{WeekendCalendar, YearMonth},
        ledger::Ledger,
    },
    entities::Teacher,
};

/// One teacher's share of the monthly summary.
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherPercentage {
    /// Teacher id
    pub teacher_id: String,
    /// Teacher display name
    pub name: String,
    /// Attendance percentage in `[0, 100]`, unrounded
    pub percentage: f64,
}

/// Summary card for the monthly view.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    /// Month summarized
    pub month: YearMonth,
    /// Number of teachers included
    pub total_teachers: usize,
    /// Non-weekend days in the month
    pub working_days: usize,
    /// Mean of the per-teacher percentages (0 with no teachers)
    pub average_percentage: f64,
    /// Per-teacher figures in directory order
    pub per_teacher: Vec<TeacherPercentage>,
}

/// Counts the non-weekend days of `month`.
#[must_use]
pub fn working_days(month: YearMonth, weekends: &WeekendCalendar) -> usize {
    month.days().filter(|date| !weekends.is_weekend(*date)).count()
}

/// Attendance rate of one teacher over the working days of `month`.
///
/// `100 × (present or late records on working days) / (working days)`, and
/// exactly 0 when the month has no working days.
#[must_use]
#[allow(clippy::cast_precision_loss)] // both counts are bounded by 31
pub fn monthly_percentage(
    teacher_id: &str,
    ledger: &Ledger,
    month: YearMonth,
    weekends: &WeekendCalendar,
) -> f64 {
    let days = working_days(month, weekends);
    if days == 0 {
        return 0.0;
    }

    let attended = ledger
        .records_for_teacher_in_month(teacher_id, month)
        .filter(|record| record.status.counts_as_attended() && !weekends.is_weekend(record.date))
        .count();

    100.0 * attended as f64 / days as f64
}

/// Mean of [`monthly_percentage`] over `teachers`; exactly 0 for no teachers.
#[must_use]
pub fn aggregate_average_percentage<'a>(
    teachers: impl IntoIterator<Item = &'a Teacher>,
    ledger: &Ledger,
    month: YearMonth,
    weekends: &WeekendCalendar,
) -> f64 {
    let (sum, count) = teachers
        .into_iter()
        .map(|teacher| monthly_percentage(&teacher.id, ledger, month, weekends))
        .fold((0.0, 0_u32), |(sum, count), pct| (sum + pct, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}

/// Builds the summary card: teacher count, working days, average and the
/// per-teacher percentages.
#[must_use]
pub fn monthly_summary<'a>(
    teachers: impl IntoIterator<Item = &'a Teacher>,
    ledger: &Ledger,
    month: YearMonth,
    weekends: &WeekendCalendar,
) -> MonthlySummary {
    let per_teacher: Vec<TeacherPercentage> = teachers
        .into_iter()
        .map(|teacher| TeacherPercentage {
            teacher_id: teacher.id.clone(),
            name: teacher.name.clone(),
            percentage: monthly_percentage(&teacher.id, ledger, month, weekends),
        })
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let average_percentage = if per_teacher.is_empty() {
        0.0
    } else {
        per_teacher.iter().map(|p| p.percentage).sum::<f64>() / per_teacher.len() as f64
    };

    MonthlySummary {
        month,
        total_teachers: per_teacher.len(),
        working_days: working_days(month, weekends),
        average_percentage,
        per_teacher,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::{core::directory::Directory, entities::AttendanceStatus, test_utils::*};
    use chrono::Weekday;

    fn april() -> YearMonth {
        YearMonth::new(2025, 4).unwrap()
    }

    #[test]
    fn test_working_days_april_2025() {
        assert_eq!(working_days(april(), &WeekendCalendar::default()), 22);
        assert_eq!(working_days(april(), &WeekendCalendar::new([])), 30);
    }

    #[test]
    fn test_monthly_percentage_three_of_twenty_two() {
        let mut ledger = Ledger::new();
        ledger.set_status("T1", day(2025, 4, 1), AttendanceStatus::Present);
        ledger.set_status("T1", day(2025, 4, 2), AttendanceStatus::Present);
        ledger.set_status("T1", day(2025, 4, 3), AttendanceStatus::Late);

        let pct = monthly_percentage("T1", &ledger, april(), &WeekendCalendar::default());
        assert!((pct - 300.0 / 22.0).abs() < 1e-9);
        assert_eq!(pct.round(), 14.0);
    }

    #[test]
    fn test_absent_and_excused_do_not_count() {
        let mut ledger = Ledger::new();
        ledger.set_status("T1", day(2025, 4, 1), AttendanceStatus::Absent);
        ledger.set_status("T1", day(2025, 4, 2), AttendanceStatus::Excused);

        assert_eq!(
            monthly_percentage("T1", &ledger, april(), &WeekendCalendar::default()),
            0.0
        );
    }

    #[test]
    fn test_weekend_and_other_month_records_are_ignored() {
        let mut ledger = Ledger::new();
        ledger.set_status("T1", day(2025, 4, 5), AttendanceStatus::Present); // Saturday
        ledger.set_status("T1", day(2025, 3, 31), AttendanceStatus::Present);
        ledger.set_status("T1", day(2025, 5, 1), AttendanceStatus::Present);

        assert_eq!(
            monthly_percentage("T1", &ledger, april(), &WeekendCalendar::default()),
            0.0
        );
    }

    #[test]
    fn test_full_attendance_is_exactly_one_hundred() {
        let weekends = WeekendCalendar::default();
        let mut ledger = Ledger::new();
        for date in april().days() {
            ledger.set_status("T1", date, AttendanceStatus::Present);
        }
        assert_eq!(monthly_percentage("T1", &ledger, april(), &weekends), 100.0);
    }

    #[test]
    fn test_month_without_working_days_is_zero() {
        let every_day = WeekendCalendar::new([
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]);
        let mut ledger = Ledger::new();
        ledger.set_status("T1", day(2025, 4, 1), AttendanceStatus::Present);

        assert_eq!(working_days(april(), &every_day), 0);
        assert_eq!(monthly_percentage("T1", &ledger, april(), &every_day), 0.0);
    }

    #[test]
    fn test_percentage_stays_in_bounds_for_mixed_ledger() {
        let weekends = WeekendCalendar::default();
        let mut ledger = Ledger::new();
        for (i, date) in april().days().enumerate() {
            ledger.set_status("T1", date, AttendanceStatus::ALL[i % 4]);
        }
        let pct = monthly_percentage("T1", &ledger, april(), &weekends);
        assert!((0.0..=100.0).contains(&pct));
    }

    #[test]
    fn test_aggregate_average_empty_is_zero() {
        let ledger = seed_ledger();
        let empty = Directory::default();
        assert_eq!(
            aggregate_average_percentage(&empty, &ledger, april(), &WeekendCalendar::default()),
            0.0
        );
    }

    #[test]
    fn test_aggregate_average_is_mean_of_percentages() {
        let directory = seed_directory();
        let mut ledger = Ledger::new();
        // Teacher 1 attends all 22 working days, teacher 2 attends 11, others none.
        for (i, date) in april()
            .days()
            .filter(|d| !WeekendCalendar::default().is_weekend(*d))
            .enumerate()
        {
            ledger.set_status("1", date, AttendanceStatus::Present);
            if i % 2 == 0 {
                ledger.set_status("2", date, AttendanceStatus::Late);
            }
        }

        let avg = aggregate_average_percentage(
            &directory,
            &ledger,
            april(),
            &WeekendCalendar::default(),
        );
        assert!((avg - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_summary() {
        let directory = seed_directory();
        let mut ledger = seed_ledger();
        ledger.set_status("4", day(2025, 4, 7), AttendanceStatus::Present);

        let weekends = WeekendCalendar::default();
        let summary = monthly_summary(&directory, &ledger, april(), &weekends);

        assert_eq!(summary.month, april());
        assert_eq!(summary.total_teachers, 5);
        assert_eq!(summary.working_days, 22);
        assert_eq!(summary.per_teacher.len(), 5);
        assert_eq!(summary.per_teacher[3].teacher_id, "4");
        assert!((summary.per_teacher[3].percentage - 100.0 / 22.0).abs() < 1e-9);
        assert!(
            (summary.average_percentage
                - aggregate_average_percentage(&directory, &ledger, april(), &weekends))
            .abs()
                < 1e-9
        );
    }
}
