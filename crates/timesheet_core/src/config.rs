//! Runtime configuration for the executable shells.
//!
//! # Responsibility
//! - Resolve log level and log directory from `TIMESHEET_*` variables.
//!
//! # Invariants
//! - Resolution never fails; unset or blank values fall back to defaults.
//! - The store and session never read configuration themselves.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const LOG_LEVEL_ENV: &str = "TIMESHEET_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "TIMESHEET_LOG_DIR";
const DEFAULT_LOG_DIR_NAME: &str = "timesheet-logs";

/// Settings consumed by `init_logging`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl RuntimeConfig {
    /// Reads the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through `lookup`, so callers can inject values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            log_level: non_blank(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: non_blank(LOG_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME)),
        }
    }

    /// Log directory as UTF-8, as `init_logging` expects.
    pub fn log_dir_str(&self) -> Option<&str> {
        self.log_dir.to_str()
    }
}
