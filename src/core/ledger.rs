//! Attendance ledger - Owns every attendance record, one per (teacher, date).
//!
//! The ledger is an explicit value that callers pass by reference to the view
//! functions and mutate through `set_status`. Writes for a key that already has
//! a record replace in place; nothing in here ever produces a second record for
//! the same teacher and day.

use crate::{
    core::calendar::YearMonth,
    entities::{AttendanceRecord, AttendanceStatus},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, btree_map::Entry};
use tracing::{debug, info, instrument, warn};

/// In-memory mapping of `(teacher_id, date)` to attendance record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ledger {
    records: BTreeMap<String, BTreeMap<NaiveDate, AttendanceRecord>>,
}

/// TOML shape of a ledger: a flat `[[records]]` array.
#[derive(Debug, Default, Serialize, Deserialize)]
struct LedgerFile {
    #[serde(default)]
    records: Vec<AttendanceRecord>,
}

impl Ledger {
    /// An empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from complete records. A later record with the same key
    /// replaces an earlier one.
    pub fn from_records(records: impl IntoIterator<Item = AttendanceRecord>) -> Self {
        let mut ledger = Self::new();
        for record in records {
            ledger.upsert(record);
        }
        ledger
    }

    /// Returns the record for the pair, or `None` if nothing was recorded.
    #[must_use]
    pub fn get_record(&self, teacher_id: &str, date: NaiveDate) -> Option<&AttendanceRecord> {
        let record = self.records.get(teacher_id)?.get(&date);
        debug!(teacher_id, %date, found = record.is_some(), "Ledger lookup");
        record
    }

    /// Sets the status for a teacher on a day.
    ///
    /// An existing record only has its status overwritten; check-in/out times and
    /// notes are kept. Otherwise a new record with just the key and status is
    /// created. Setting the same status twice leaves the same record.
    #[instrument(skip(self))]
    pub fn set_status(
        &mut self,
        teacher_id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> &AttendanceRecord {
        let by_date = self.records.entry(teacher_id.to_string()).or_default();
        match by_date.entry(date) {
            Entry::Occupied(entry) => {
                let record = entry.into_mut();
                if record.status != status {
                    info!(previous = %record.status, "Attendance status updated");
                }
                record.status = status;
                record
            }
            Entry::Vacant(entry) => {
                info!("Attendance record created");
                entry.insert(AttendanceRecord::new(teacher_id, date, status))
            }
        }
    }

    /// Validates a raw status string, then behaves like [`Ledger::set_status`].
    ///
    /// # Errors
    /// Returns `Error::InvalidStatus` when `raw` is not one of the four statuses.
    /// The ledger is left untouched in that case.
    pub fn set_status_str(
        &mut self,
        teacher_id: &str,
        date: NaiveDate,
        raw: &str,
    ) -> Result<&AttendanceRecord> {
        let status = raw.parse::<AttendanceStatus>().inspect_err(|e| {
            warn!(teacher_id, %date, "Rejected status change: {}", e);
        })?;
        Ok(self.set_status(teacher_id, date, status))
    }

    /// Inserts a complete record, replacing any record with the same key.
    ///
    /// Returns the record that was replaced, if any.
    pub fn upsert(&mut self, record: AttendanceRecord) -> Option<AttendanceRecord> {
        let replaced = self
            .records
            .entry(record.teacher_id.clone())
            .or_default()
            .insert(record.date, record);
        if let Some(old) = &replaced {
            warn!(
                teacher_id = %old.teacher_id,
                date = %old.date,
                "Replaced an existing attendance record"
            );
        }
        replaced
    }

    /// Overwrites the check-in and check-out times of an existing record.
    ///
    /// Returns `None` when there is no record for the pair; times alone never
    /// create a record.
    pub fn set_check_times(
        &mut self,
        teacher_id: &str,
        date: NaiveDate,
        check_in_time: Option<String>,
        check_out_time: Option<String>,
    ) -> Option<&AttendanceRecord> {
        let record = self.records.get_mut(teacher_id)?.get_mut(&date)?;
        record.check_in_time = check_in_time;
        record.check_out_time = check_out_time;
        Some(record)
    }

    /// Overwrites the notes of an existing record. Returns `None` when there is no
    /// record for the pair.
    pub fn set_notes(
        &mut self,
        teacher_id: &str,
        date: NaiveDate,
        notes: Option<String>,
    ) -> Option<&AttendanceRecord> {
        let record = self.records.get_mut(teacher_id)?.get_mut(&date)?;
        record.notes = notes;
        Some(record)
    }

    /// All records, ordered by teacher id then date.
    pub fn records(&self) -> impl Iterator<Item = &AttendanceRecord> {
        self.records.values().flat_map(BTreeMap::values)
    }

    /// One teacher's records within `month`, in date order.
    pub fn records_for_teacher_in_month(
        &self,
        teacher_id: &str,
        month: YearMonth,
    ) -> impl Iterator<Item = &AttendanceRecord> {
        self.records
            .get(teacher_id)
            .into_iter()
            .flat_map(move |by_date| by_date.range(month.first_day()..=month.last_day()))
            .map(|(_, record)| record)
    }

    /// Total number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.values().map(BTreeMap::len).sum()
    }

    /// Whether the ledger holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serializes the ledger as a TOML `[[records]]` array.
    ///
    /// # Errors
    /// Returns `Error::Serialization` if the TOML encoder fails.
    pub fn to_toml_string(&self) -> Result<String> {
        let file = LedgerFile {
            records: self.records().cloned().collect(),
        };
        toml::to_string(&file).map_err(|e| Error::Serialization {
            message: e.to_string(),
        })
    }

    /// Parses a ledger previously written by [`Ledger::to_toml_string`].
    ///
    /// # Errors
    /// Returns `Error::Serialization` if the text is not valid ledger TOML.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: LedgerFile = toml::from_str(text).map_err(|e| Error::Serialization {
            message: e.to_string(),
        })?;
        Ok(Self::from_records(file.records))
    }
}
