//! Logging bootstrap.
//!
//! # Responsibility
//! - Start the `log` backend exactly once per process.
//! - Debug mode logs to stderr; otherwise a rotating `fyyur` log file
//!   in the configured directory, with warnings and errors mirrored to stderr.
//!
//! # Invariants
//! - Initialization never panics.
//! - Re-initialization with different settings is rejected.

use std::path::PathBuf;

use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming, WriteMode,
};
use log::info;
use once_cell::sync::OnceCell;

use crate::error::{AppError, AppResult};

const LOG_FILE_BASENAME: &str = "fyyur";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub debug: bool,
    pub log_dir: PathBuf,
}

struct LoggingState {
    settings: LogSettings,
    _logger: LoggerHandle,
}

/// Start logging. Calling again with identical settings is a no-op.
pub fn init_logging(settings: &LogSettings) -> AppResult<()> {
    let level = normalize_level(&settings.level)?;
    let normalized = LogSettings {
        level: level.to_string(),
        ..settings.clone()
    };

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(&normalized))?;

    if state.settings != normalized {
        return Err(AppError::Config(format!(
            "logging already initialized with level `{}` at `{}`; refusing to switch",
            state.settings.level,
            state.settings.log_dir.display()
        )));
    }

    Ok(())
}

fn start_logger(settings: &LogSettings) -> AppResult<LoggingState> {
    let logger = Logger::try_with_str(&settings.level)
        .map_err(|err| AppError::Config(format!("invalid log level `{}`: {}", settings.level, err)))?;

    let logger = if settings.debug {
        logger.log_to_stderr()
    } else {
        std::fs::create_dir_all(&settings.log_dir)?;
        logger
            .log_to_file(
                FileSpec::default()
                    .directory(settings.log_dir.as_path())
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .duplicate_to_stderr(Duplicate::Warn)
            .format_for_files(flexi_logger::detailed_format)
    };

    let handle = logger
        .start()
        .map_err(|err| AppError::Config(format!("failed to start logger: {}", err)))?;

    info!(
        "event=logging_init status=ok level={} debug={} log_dir={} version={}",
        settings.level,
        settings.debug,
        settings.log_dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(LoggingState {
        settings: settings.clone(),
        _logger: handle,
    })
}

/// `debug` builds -> `debug`, release builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn normalize_level(level: &str) -> AppResult<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(AppError::Config(format!(
            "unsupported log level `{}`; expected trace|debug|info|warn|error",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_level() {
        assert_eq!(normalize_level(" INFO ").unwrap(), "info");
        assert_eq!(normalize_level("warning").unwrap(), "warn");
        assert!(matches!(normalize_level("loud"), Err(AppError::Config(_))));
    }

    #[test]
    fn test_invalid_level_is_rejected_before_starting() {
        let settings = LogSettings {
            level: "verbose".into(),
            debug: true,
            log_dir: PathBuf::from("/tmp"),
        };
        assert!(init_logging(&settings).is_err());
        assert!(LOGGING_STATE.get().is_none());
    }
}
