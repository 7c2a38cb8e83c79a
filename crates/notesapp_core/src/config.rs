//! Runtime configuration resolved from the environment.
//!
//! # Responsibility
//! - Resolve database path and logging settings for hosts (FFI, CLI).
//!
//! # Invariants
//! - Blank environment values are treated as unset.
//! - Resolution never fails; every field has a default.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "NOTESAPP_DB_PATH";
pub const LOG_DIR_ENV: &str = "NOTESAPP_LOG_DIR";
pub const LOG_LEVEL_ENV: &str = "NOTESAPP_LOG_LEVEL";

const DEFAULT_DB_FILE_NAME: &str = "notesapp.sqlite3";
const DEFAULT_LOG_DIR_NAME: &str = "notesapp-logs";

/// Host configuration for the notes core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl AppConfig {
    /// Resolves configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let temp_dir = std::env::temp_dir();
        Self {
            db_path: non_blank(DB_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| temp_dir.join(DEFAULT_DB_FILE_NAME)),
            log_dir: non_blank(LOG_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| temp_dir.join(DEFAULT_LOG_DIR_NAME)),
            log_level: non_blank(LOG_LEVEL_ENV)
                .unwrap_or_else(|| default_log_level().to_string()),
        }
    }
}
