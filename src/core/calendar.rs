//! Calendar primitives for the month views.
//!
//! `YearMonth` is the navigation state of the monthly view: only the year and
//! month are tracked, so moving forward or back never has to clamp a day of
//! month. `WeekendCalendar` is the caller-supplied convention for which days
//! of the week are not working days.

use crate::errors::{Error, Result};
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use std::{fmt, str::FromStr};

/// A calendar month, stored as its first day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// Builds a month from a year and a 1-based month number.
    ///
    /// # Errors
    /// Returns `Error::InvalidMonth` if `month` is outside `1..=12` or the year
    /// is outside the supported date range.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or_else(|| Error::InvalidMonth {
                value: format!("{year:04}-{month:02}"),
            })
    }

    /// The month containing `date`.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        // Day 1 of any valid date's month is always representable.
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// Calendar year.
    #[must_use]
    pub fn year(self) -> i32 {
        self.first.year()
    }

    /// Month number, 1-based.
    #[must_use]
    pub fn month(self) -> u32 {
        self.first.month()
    }

    /// First day of the month.
    #[must_use]
    pub const fn first_day(self) -> NaiveDate {
        self.first
    }

    /// Last day of the month.
    #[must_use]
    pub fn last_day(self) -> NaiveDate {
        self.first
            .checked_add_days(Days::new(u64::from(self.day_count() - 1)))
            .unwrap_or(self.first)
    }

    /// Number of calendar days in the month.
    #[must_use]
    pub fn day_count(self) -> u32 {
        let year = self.year();
        let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
        match self.month() {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ if leap => 29,
            _ => 28,
        }
    }

    /// Every day from the first to the last of the month, in order.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        self.first.iter_days().take(self.day_count() as usize)
    }

    /// Whether `date` falls within this month.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// The following month, rolling December over into January.
    ///
    /// Saturates at the last month chrono can represent.
    #[must_use]
    pub fn next(self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map_or(self, |first| Self { first })
    }

    /// The preceding month, rolling January back into December.
    ///
    /// Saturates at the first month chrono can represent.
    #[must_use]
    pub fn previous(self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map_or(self, |first| Self { first })
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first.format("%B %Y"))
    }
}

impl FromStr for YearMonth {
    type Err = Error;

    /// Parses a `YYYY-MM` month key.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidMonth {
            value: s.to_string(),
        };
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

/// Which days of the week count as weekend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekendCalendar {
    // Indexed by `Weekday::num_days_from_monday`.
    weekend: [bool; 7],
}

impl Default for WeekendCalendar {
    /// Saturday and Sunday.
    fn default() -> Self {
        Self::new([Weekday::Sat, Weekday::Sun])
    }
}

impl WeekendCalendar {
    /// A calendar whose weekend is exactly `days`.
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mut weekend = [false; 7];
        for day in days {
            weekend[day.num_days_from_monday() as usize] = true;
        }
        Self { weekend }
    }

    /// Parses weekday names such as `"Sat"` or `"friday"`.
    ///
    /// # Errors
    /// Returns `Error::InvalidWeekday` for the first name chrono does not recognise.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let days = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                Weekday::from_str(name.trim()).map_err(|_| Error::InvalidWeekday {
                    value: name.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(days))
    }

    /// Whether `date` falls on a weekend day.
    #[must_use]
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend[date.weekday().num_days_from_monday() as usize]
    }

    /// The weekend days, Monday-first.
    pub fn weekend_days(&self) -> impl Iterator<Item = Weekday> + '_ {
        (0u8..7)
            .filter_map(|i| Weekday::try_from(i).ok())
            .filter(|day| self.weekend[day.num_days_from_monday() as usize])
    }
}
