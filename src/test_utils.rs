//! Shared test utilities for the attendance crate.
//!
//! This module provides the seed directory and ledger used across the unit
//! tests: five teachers of school "1" and one record each on Saturday
//! 2025-04-05.

#![allow(clippy::unwrap_used)]

use crate::{
    core::{directory::Directory, ledger::Ledger},
    entities::{AttendanceRecord, AttendanceStatus, Teacher},
};
use chrono::NaiveDate;
use std::{
    io,
    sync::{Arc, Mutex},
};
use tracing_subscriber::EnvFilter;

/// Shorthand for a calendar date; panics on an invalid date.
#[allow(clippy::unwrap_used)]
pub fn day(year: i32, month: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, d).unwrap()
}

/// The day every seed record is on.
pub fn seed_day() -> NaiveDate {
    day(2025, 4, 5)
}

/// The five seed teachers, in directory order.
pub fn seed_teachers() -> Vec<Teacher> {
    [
        ("1", "Marie Dupont", "marie.dupont@school.com"),
        ("2", "Jean Martin", "jean.martin@school.com"),
        ("3", "Sophie Bernard", "sophie.bernard@school.com"),
        ("4", "Lucas Petit", "lucas.petit@school.com"),
        ("5", "Emma Leroy", "emma.leroy@school.com"),
    ]
    .into_iter()
    .map(|(id, name, email)| Teacher::new(id, name, email, "1"))
    .collect()
}

/// Directory built from [`seed_teachers`].
#[allow(clippy::unwrap_used)]
pub fn seed_directory() -> Directory {
    Directory::new(seed_teachers()).unwrap()
}

fn seed_record(
    teacher_id: &str,
    status: AttendanceStatus,
    times: Option<(&str, &str)>,
    notes: Option<&str>,
) -> AttendanceRecord {
    let mut record = AttendanceRecord::new(teacher_id, seed_day(), status);
    record.check_in_time = times.map(|(check_in, _)| check_in.to_string());
    record.check_out_time = times.map(|(_, check_out)| check_out.to_string());
    record.notes = notes.map(str::to_string);
    record
}

/// The five seed records on [`seed_day`].
///
/// * `1` - present, 08:30-16:30
/// * `2` - late, 09:15-16:30, "Traffic delay"
/// * `3` - absent, "Sick leave"
/// * `4` - present, 08:15-16:00
/// * `5` - excused, "Professional development day"
pub fn seed_records() -> Vec<AttendanceRecord> {
    vec![
        seed_record("1", AttendanceStatus::Present, Some(("08:30", "16:30")), None),
        seed_record(
            "2",
            AttendanceStatus::Late,
            Some(("09:15", "16:30")),
            Some("Traffic delay"),
        ),
        seed_record("3", AttendanceStatus::Absent, None, Some("Sick leave")),
        seed_record("4", AttendanceStatus::Present, Some(("08:15", "16:00")), None),
        seed_record(
            "5",
            AttendanceStatus::Excused,
            None,
            Some("Professional development day"),
        ),
    ]
}

/// Ledger built from [`seed_records`].
pub fn seed_ledger() -> Ledger {
    Ledger::from_records(seed_records())
}

/// Shared buffer the log-capturing subscriber writes into.
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` under a scoped subscriber filtered by `directive` (e.g. `"warn"`)
/// and returns what it logged.
pub fn capture_logs(directive: &str, f: impl FnOnce()) -> String {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&buffer);
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_ansi(false)
        .with_writer(move || LogBuffer(Arc::clone(&sink)))
        .finish();
    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}
