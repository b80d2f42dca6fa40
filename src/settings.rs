//! Runtime settings of the demo binary, read from environment variables.

use std::env;
use std::path::PathBuf;

use log::LevelFilter;

use crate::resource::DATA_DIR;

pub const DATA_DIR_VAR: &str = "GAME_DATA_DIR";
pub const LOG_LEVEL_VAR: &str = "GAME_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub log_level: LevelFilter,
    /// Set when `GAME_LOG_LEVEL` held something other than a level name.
    pub rejected_log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            data_dir: PathBuf::from(DATA_DIR),
            log_level: LevelFilter::Info,
            rejected_log_level: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable source; unset variables keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        if let Some(dir) = lookup(DATA_DIR_VAR).filter(|d| !d.is_empty()) {
            settings.data_dir = PathBuf::from(dir);
        }
        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            match parse_level(&level) {
                Some(parsed) => settings.log_level = parsed,
                None => settings.rejected_log_level = Some(level),
            }
        }
        settings
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "trace" => Some(LevelFilter::Trace),
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        _ => None,
    }
}
