//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `notesapp_core` linkage.
//! - Print the notes stored in the configured database.
//!
//! Logging failures are reported on stderr and never stop the listing.

use notesapp_core::db::open_db;
use notesapp_core::format::due_date_label;
use notesapp_core::{AppConfig, NoteListQuery, NoteStore, SqliteNoteRepository};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("notesapp_core ping={}", notesapp_core::ping());
    println!("notesapp_core version={}", notesapp_core::core_version());

    let config = AppConfig::from_env();
    println!("notesapp_core db_path={}", config.db_path.display());
    match init_cli_logging(&config) {
        Ok(()) => println!("notesapp_core log_dir={}", config.log_dir.display()),
        Err(err) => eprintln!("notesapp_core logging_error={err}"),
    }

    match print_notes(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("notesapp_core error={err}");
            ExitCode::FAILURE
        }
    }
}

fn init_cli_logging(config: &AppConfig) -> Result<(), String> {
    notesapp_core::init_logging(&config.log_level, &config.log_dir.to_string_lossy())
}

fn print_notes(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_db(&config.db_path)?;
    let repo = SqliteNoteRepository::try_new(&conn)?;
    let notes = repo.list(&NoteListQuery::default())?;

    println!("notesapp_core notes={}", notes.len());
    for note in notes {
        println!(
            "  - {}: {} (due {})",
            note.id.unwrap_or_default(),
            note.title,
            due_date_label(Some(note.due_date))
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::init_cli_logging;
    use notesapp_core::config::{LOG_DIR_ENV, LOG_LEVEL_ENV};
    use notesapp_core::{logging_status, AppConfig};

    fn config_with(level: &str, log_dir: &str) -> AppConfig {
        AppConfig::from_lookup(|key| match key {
            LOG_LEVEL_ENV => Some(level.to_string()),
            LOG_DIR_ENV => Some(log_dir.to_string()),
            _ => None,
        })
    }

    #[test]
    fn logging_follows_configured_level_and_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let log_dir = dir.path().join("logs");
        let log_dir_str = log_dir.to_string_lossy().into_owned();

        let rejected = init_cli_logging(&config_with("verbose", &log_dir_str))
            .expect_err("unknown level must be rejected");
        assert!(rejected.contains("verbose"));
        assert!(logging_status().is_none());

        init_cli_logging(&config_with("WARN", &log_dir_str)).expect("logging init");
        let (level, active_dir) = logging_status().expect("logging active");
        assert_eq!(level, "warn");
        assert_eq!(active_dir, log_dir);
        assert!(log_dir.is_dir());
    }
}
