use chrono::Local;
use once_cell::sync::Lazy;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::LoggingConfig;
use crate::constants::LOG_BUFFER_CAPACITY;

static LOG_FILE_PATH: Lazy<Option<PathBuf>> =
    Lazy::new(|| dirs::data_local_dir().map(|dir| dir.join("focusdeck").join("focusdeck.log")));

/// Shared in-memory log shown in the logs dialog.
///
/// Messages also go through the `log` facade; when file logging is enabled,
/// `fern` writes them to [`Logger::get_log_file_path`].
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    file_logging: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            file_logging: false,
        }
    }

    /// Create a logger and, if enabled, install the file dispatcher
    pub fn from_config(config: &LoggingConfig) -> anyhow::Result<Self> {
        let mut logger = Self::new();
        if config.enabled {
            logger.file_logging = Self::init_file_logging(config.level_filter())?;
        }
        Ok(logger)
    }

    fn init_file_logging(level: log::LevelFilter) -> anyhow::Result<bool> {
        let Some(path) = Self::get_log_file_path() else {
            return Ok(false);
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(level)
            .level_for("sqlx", log::LevelFilter::Warn)
            .level_for("sea_orm", log::LevelFilter::Warn)
            .chain(fern::log_file(&path)?);

        // A global logger may already be installed (e.g. by a test harness)
        Ok(dispatch.apply().is_ok())
    }

    /// Path of the log file, if a data directory exists on this platform
    pub fn get_log_file_path() -> Option<PathBuf> {
        LOG_FILE_PATH.clone()
    }

    pub fn has_file_logging(&self) -> bool {
        self.file_logging
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        log::info!("{}", message);

        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= LOG_BUFFER_CAPACITY {
                logs.remove(0);
            }
            logs.push(formatted_message);
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
