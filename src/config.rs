//! Runtime configuration for the `slate` binary.
//!
//! Values come from the process environment, after a `.env` file in the
//! working directory (if any) has been merged into it by `dotenvy`. The CLI
//! flags override whatever is found here through the `with_*` setters.
//!
//! - `SLATE_DB_FILE`: table file to open, unset or empty means in-memory
//! - `SLATE_LOG`: log filter used when `RUST_LOG` is not set (default `warn`)
//! - `SLATE_ARCHIVE_ON_EXIT`: archive before quitting the REPL (default on)

use std::path::PathBuf;

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Clone, Debug, PartialEq)]
pub struct SlateConfig {
    pub db_file: Option<PathBuf>,
    pub log_filter: String,
    pub archive_on_exit: bool,
}

impl Default for SlateConfig {
    fn default() -> Self {
        Self {
            db_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            archive_on_exit: true,
        }
    }
}

impl SlateConfig {
    pub fn load() -> Self {
        //! Merge `.env` into the environment, then read it.
        //!
        //! Runs before the logger exists, so a missing or unreadable `.env`
        //! is skipped silently.

        dotenvy::dotenv().ok();
        Self::from_env()
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup("SLATE_DB_FILE") {
            let s = v.trim();
            if !s.is_empty() {
                cfg.db_file = Some(PathBuf::from(s));
            }
        }

        if let Some(v) = lookup("SLATE_LOG") {
            let s = v.trim();
            if !s.is_empty() {
                cfg.log_filter = s.to_string();
            }
        }

        if let Some(v) = lookup("SLATE_ARCHIVE_ON_EXIT") {
            let s = v.trim().to_ascii_lowercase();
            cfg.archive_on_exit = s == "1" || s == "true" || s == "yes" || s == "on";
        }

        cfg
    }

    pub fn with_db_file(mut self, db_file: Option<PathBuf>) -> Self {
        self.db_file = db_file;
        self
    }

    pub fn with_archive_on_exit(mut self, on: bool) -> Self {
        self.archive_on_exit = on;
        self
    }
}
