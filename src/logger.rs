//! Logging setup.
//!
//! Everything logs through the `log` macros. [`init`] installs a `fern`
//! dispatch that always feeds the in-memory [`Logger`] (shown in the log
//! dialog) and, when enabled in the configuration, appends to a file in the
//! user's data directory.

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_BUFFER_CAPACITY, LOG_FILE_NAME, LOG_TIMESTAMP_FORMAT};
use log::LevelFilter;
use once_cell::sync::OnceCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

static LOG_FILE: OnceCell<PathBuf> = OnceCell::new();

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("Could not determine data directory")]
    NoDataDir,

    #[error("Failed to open log file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("A global logger is already installed")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

/// Shared in-memory log buffer that can be used across the application
#[derive(Clone, Debug)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl Logger {
    pub fn new() -> Self {
        Self::with_capacity(LOG_BUFFER_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Append an already formatted line, dropping the oldest one when full
    pub fn push(&self, line: String) {
        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() == self.capacity {
                logs.pop_front();
            }
            logs.push_back(line);
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

    pub fn len(&self) -> usize {
        self.logs.lock().map(|logs| logs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

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

/// Path of the log file inside the user's data directory
pub fn get_log_file_path() -> Result<PathBuf, LoggerError> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
        .ok_or(LoggerError::NoDataDir)
}

/// Log file of the installed dispatch, if file logging is on
pub fn log_file_path() -> Option<&'static Path> {
    LOG_FILE.get().map(PathBuf::as_path)
}

/// Build the dispatch without installing it
pub fn build_dispatch(
    config: &LoggingConfig,
    logger: &Logger,
    log_file: Option<&Path>,
) -> Result<fern::Dispatch, LoggerError> {
    let level = config.level_filter().unwrap_or(LevelFilter::Info);
    let memory = logger.clone();

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                chrono::Local::now().format(LOG_TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(fern::Output::call(move |record| memory.push(record.args().to_string())));

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| LoggerError::OpenFile {
                path: path.to_path_buf(),
                source,
            })?;
        }
        let file = fern::log_file(path).map_err(|source| LoggerError::OpenFile {
            path: path.to_path_buf(),
            source,
        })?;
        dispatch = dispatch.chain(file);
    }

    Ok(dispatch)
}

/// Install the global logger
pub fn init(config: &LoggingConfig, logger: &Logger) -> Result<(), LoggerError> {
    let log_file = if config.enabled {
        Some(get_log_file_path()?)
    } else {
        None
    };

    build_dispatch(config, logger, log_file.as_deref())?.apply()?;

    if let Some(path) = log_file {
        let _ = LOG_FILE.set(path);
    }
    Ok(())
}
