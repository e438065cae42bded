//! Attendance record entity - One teacher's attendance on one calendar day.
//!
//! Records are keyed by `(teacher_id, date)`. The status is a closed set of
//! four values; the check-in/out times and notes are free-form and are not
//! checked against the status.

use crate::errors::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Attendance status for a single day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    /// Teacher was in school on time
    Present,
    /// Teacher did not attend
    Absent,
    /// Teacher attended but checked in late
    Late,
    /// Absence that was approved in advance
    Excused,
}

impl AttendanceStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 4] = [Self::Present, Self::Absent, Self::Late, Self::Excused];

    /// Lowercase identifier used in seed files (`"present"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Late => "late",
            Self::Excused => "excused",
        }
    }

    /// Capitalized label for badges and tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Late => "Late",
            Self::Excused => "Excused",
        }
    }

    /// One-letter code shown in the month grid.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Present => 'P',
            Self::Absent => 'A',
            Self::Late => 'L',
            Self::Excused => 'E',
        }
    }

    /// Whether the day counts toward the monthly attendance percentage.
    #[must_use]
    pub const fn counts_as_attended(self) -> bool {
        matches!(self, Self::Present | Self::Late)
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            "late" => Ok(Self::Late),
            "excused" => Ok(Self::Excused),
            _ => Err(Error::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// Attendance ledger entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Teacher this record belongs to
    pub teacher_id: String,
    /// Calendar day, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Attendance status for the day
    pub status: AttendanceStatus,
    /// Free-form check-in time ("HH:MM")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in_time: Option<String>,
    /// Free-form check-out time ("HH:MM")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<String>,
    /// Optional remark such as "Sick leave"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AttendanceRecord {
    /// A record with only its key and status set.
    #[must_use]
    pub fn new(teacher_id: impl Into<String>, date: NaiveDate, status: AttendanceStatus) -> Self {
        Self {
            teacher_id: teacher_id.into(),
            date,
            status,
            check_in_time: None,
            check_out_time: None,
            notes: None,
        }
    }

    /// The `(teacher_id, date)` key the ledger stores this record under.
    #[must_use]
    pub fn key(&self) -> (String, NaiveDate) {
        (self.teacher_id.clone(), self.date)
    }
}

/// Parses an ISO `YYYY-MM-DD` date.
///
/// # Errors
/// Returns `Error::InvalidDate` when the text is not a real calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidDate {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_status_parses_case_insensitively() {
        assert_eq!("present".parse::<AttendanceStatus>().unwrap(), AttendanceStatus::Present);
        assert_eq!(" Late ".parse::<AttendanceStatus>().unwrap(), AttendanceStatus::Late);
        assert_eq!("EXCUSED".parse::<AttendanceStatus>().unwrap(), AttendanceStatus::Excused);
    }

    #[test]
    fn test_status_rejects_unknown_value() {
        let err = "sick".parse::<AttendanceStatus>().unwrap_err();
        assert!(matches!(err, Error::InvalidStatus { ref value } if value == "sick"));
    }

    #[test]
    fn test_status_letters_and_labels() {
        let letters: String = AttendanceStatus::ALL.iter().map(|s| s.letter()).collect();
        assert_eq!(letters, "PALE");
        assert_eq!(AttendanceStatus::Excused.label(), "Excused");
        assert_eq!(AttendanceStatus::Absent.to_string(), "absent");
    }

    #[test]
    fn test_only_present_and_late_count_as_attended() {
        assert!(AttendanceStatus::Present.counts_as_attended());
        assert!(AttendanceStatus::Late.counts_as_attended());
        assert!(!AttendanceStatus::Absent.counts_as_attended());
        assert!(!AttendanceStatus::Excused.counts_as_attended());
    }

    #[test]
    fn test_new_record_leaves_optional_fields_unset() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 5).unwrap();
        let record = AttendanceRecord::new("1", date, AttendanceStatus::Absent);
        assert!(record.check_in_time.is_none());
        assert!(record.check_out_time.is_none());
        assert!(record.notes.is_none());
        assert_eq!(record.key(), ("1".to_string(), date));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-04-05").unwrap(),
            NaiveDate::from_ymd_opt(2025, 4, 5).unwrap()
        );
        assert!(matches!(parse_date("2025-02-30"), Err(Error::InvalidDate { .. })));
        assert!(matches!(parse_date("05/04/2025"), Err(Error::InvalidDate { .. })));
    }
}
