//! Seed data loading from config.toml
//!
//! The seed file stands in for the data-loading layer: it supplies the teacher
//! directory snapshot, the initial attendance records and the weekend
//! convention. Everything is validated while converting into an
//! [`AttendanceState`].

use crate::{
    core::{calendar::WeekendCalendar, directory::Directory, ledger::Ledger},
    entities::{AttendanceRecord, Teacher},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, warn};

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct SeedConfig {
    /// Weekday names treated as weekend (defaults to Saturday and Sunday)
    #[serde(default = "default_weekend")]
    pub weekend: Vec<String>,
    /// Teacher directory, in display order
    #[serde(default)]
    pub teachers: Vec<Teacher>,
    /// Initial attendance records
    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
}

fn default_weekend() -> Vec<String> {
    vec!["Sat".to_string(), "Sun".to_string()]
}

/// Validated in-memory state built from a [`SeedConfig`].
#[derive(Debug, Clone)]
pub struct AttendanceState {
    /// Teacher directory
    pub directory: Directory,
    /// Attendance ledger
    pub ledger: Ledger,
    /// Weekend convention for the month views
    pub weekends: WeekendCalendar,
}

impl SeedConfig {
    /// Validates the seed and builds the directory, ledger and weekend calendar.
    ///
    /// Records whose teacher is missing from the directory are kept in the
    /// ledger and logged; the records listing leaves them out.
    ///
    /// # Errors
    /// Returns an error if:
    /// - a weekend entry is not a weekday name
    /// - teacher ids or per-school emails are not unique
    pub fn into_state(self) -> Result<AttendanceState> {
        let weekends = WeekendCalendar::from_names(self.weekend.as_slice())?;
        let directory = Directory::new(self.teachers)?;

        for record in &self.records {
            if directory.get(&record.teacher_id).is_none() {
                warn!(
                    teacher_id = %record.teacher_id,
                    date = %record.date,
                    "Seed record references a teacher missing from the directory"
                );
            }
        }
        let ledger = Ledger::from_records(self.records);

        info!(
            "Loaded {} teachers and {} attendance records",
            directory.len(),
            ledger.len()
        );
        Ok(AttendanceState {
            directory,
            ledger,
            weekends,
        })
    }
}

/// Parses seed TOML text.
///
/// # Errors
/// Returns `Error::Config` if the TOML syntax is invalid, a field has the wrong
/// type, or a record status is not one of the four statuses.
pub fn parse_config(contents: &str) -> Result<SeedConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads seed configuration from a TOML file
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read (`Error::Io`)
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load seed data from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref)
        .inspect_err(|e| warn!("Failed to read seed file {:?}: {}", path_ref, e))?;
    parse_config(&contents)
}
