//! Runtime settings from environment variables.
//!
//! Every setting is optional. `.env` is loaded by the binary before these are
//! read, so the same keys can live there.

use crate::{
    core::calendar::YearMonth,
    entities::attendance_record::parse_date,
    errors::{Error, Result},
};
use chrono::{Local, NaiveDate};
use std::{env::VarError, path::PathBuf};

/// Path of the seed file.
pub const CONFIG_PATH_VAR: &str = "ATTENDANCE_CONFIG";
/// Reference "today" as `YYYY-MM-DD`.
pub const TODAY_VAR: &str = "ATTENDANCE_TODAY";
/// Month shown in the monthly view as `YYYY-MM`.
pub const MONTH_VAR: &str = "ATTENDANCE_MONTH";
/// Optional teacher/record search query.
pub const SEARCH_VAR: &str = "ATTENDANCE_SEARCH";

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Settings for one run of the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Seed file to load
    pub config_path: PathBuf,
    /// Day shown in the daily view and highlighted in the grid
    pub today: NaiveDate,
    /// Month shown in the monthly view
    pub month: YearMonth,
    /// Search query applied to the views, if any
    pub search: Option<String>,
}

impl Settings {
    /// Reads the settings from the process environment, using the local date
    /// as "today" when `ATTENDANCE_TODAY` is unset.
    ///
    /// # Errors
    /// Returns an error if a variable is not valid unicode or does not parse.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(
            |key| match std::env::var(key) {
                Ok(value) => Ok(Some(value)),
                Err(VarError::NotPresent) => Ok(None),
                Err(e) => Err(Error::EnvVar(e)),
            },
            Local::now().date_naive(),
        )
    }

    /// Builds settings from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset. The month defaults to the month of
    /// the resolved "today".
    ///
    /// # Errors
    /// Returns an error if the lookup fails or a date/month does not parse.
    pub fn from_lookup<F>(lookup: F, fallback_today: NaiveDate) -> Result<Self>
    where
        F: Fn(&str) -> Result<Option<String>>,
    {
        let get = |key: &str| -> Result<Option<String>> {
            Ok(lookup(key)?
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()))
        };

        let config_path = get(CONFIG_PATH_VAR)?
            .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
        let today = get(TODAY_VAR)?
            .map(|v| parse_date(&v))
            .transpose()?
            .unwrap_or(fallback_today);
        let month = get(MONTH_VAR)?
            .map(|v| v.parse::<YearMonth>())
            .transpose()?
            .unwrap_or_else(|| YearMonth::of(today));
        let search = get(SEARCH_VAR)?;

        Ok(Self {
            config_path,
            today,
            month,
            search,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::day;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Settings::from_lookup(|key| Ok(vars.get(key).cloned()), day(2025, 4, 17))
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let settings = settings_from(&[]).unwrap();
        assert_eq!(settings.config_path, PathBuf::from("config.toml"));
        assert_eq!(settings.today, day(2025, 4, 17));
        assert_eq!(settings.month, YearMonth::new(2025, 4).unwrap());
        assert!(settings.search.is_none());
    }

    #[test]
    fn test_explicit_values() {
        let settings = settings_from(&[
            (CONFIG_PATH_VAR, "seed/school.toml"),
            (TODAY_VAR, "2025-04-05"),
            (MONTH_VAR, "2025-03"),
            (SEARCH_VAR, " dupont "),
        ])
        .unwrap();
        assert_eq!(settings.config_path, PathBuf::from("seed/school.toml"));
        assert_eq!(settings.today, day(2025, 4, 5));
        assert_eq!(settings.month, YearMonth::new(2025, 3).unwrap());
        assert_eq!(settings.search.as_deref(), Some("dupont"));
    }

    #[test]
    fn test_month_follows_today_override() {
        let settings = settings_from(&[(TODAY_VAR, "2024-12-31")]).unwrap();
        assert_eq!(settings.month, YearMonth::new(2024, 12).unwrap());
    }

    #[test]
    fn test_blank_values_are_unset() {
        let settings = settings_from(&[(SEARCH_VAR, "   "), (MONTH_VAR, "")]).unwrap();
        assert!(settings.search.is_none());
        assert_eq!(settings.month, YearMonth::new(2025, 4).unwrap());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            settings_from(&[(TODAY_VAR, "yesterday")]),
            Err(Error::InvalidDate { .. })
        ));
        assert!(matches!(
            settings_from(&[(MONTH_VAR, "2025-00")]),
            Err(Error::InvalidMonth { .. })
        ));
    }
}
