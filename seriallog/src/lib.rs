//! # seriallog
//! Thread-safe logger writing serialized lines to stdout and an append-only file.
//!
//! Every accepted message becomes one line `[YYYY-MM-DD HH:MM:SS][LEVEL]message`,
//! written to stdout and to the log file as a single unit: lines from
//! concurrent callers never interleave.
//!
//! ## Usage
//! ```rust
//! use seriallog::{SerializedLogger, Severity};
//!
//! let path = std::env::temp_dir().join("seriallog_usage.log");
//! let logger = SerializedLogger::new(&path, Severity::Info);
//! logger.info("Hello, world!");
//! logger.debug("filtered out");
//! // dropping the logger flushes and closes the file
//! ```
//!
//! ## Multi-threaded logging
//! ```rust
//! use std::sync::Arc;
//! use seriallog::logger_config;
//!
//! let logger = Arc::new(
//!     logger_config()
//!         .with_log_file(std::env::temp_dir().join("seriallog_threads.log"))
//!         .build(),
//! );
//! let handles: Vec<_> = (0..5).map(|i| {
//!     let logger = Arc::clone(&logger);
//!     std::thread::spawn(move || logger.warning(format!("Hello, world from thread {i}!")))
//! }).collect();
//! for h in handles { h.join().unwrap(); }
//! ```
//!
//! ## Logging to files
//! The log file is created if it does not exist and appended to if it does.
//! If it cannot be opened, a diagnostic is printed on stderr and the logger
//! keeps logging to stdout only.
//!
//! ```rust
//! use seriallog::{SinkState, logger_config};
//!
//! let logger = logger_config()
//!     .with_log_file("/nonexistent/dir/app.log")
//!     .build();
//! assert_eq!(logger.state(), SinkState::FileUnavailable);
//! logger.error("still printed on stdout");
//! ```
//!
//! ## `log` facade
//! ```rust
//! use seriallog::{Severity, logger_config};
//!
//! logger_config()
//!     .with_level(Severity::Debug)
//!     .no_file()
//!     .init_global()
//!     .ok(); // fails only if another logger is already installed
//! log::warn!("Low memory condition detected");
//! ```

pub mod demo;
mod logger;

pub use logger::{SerializedLogger, SinkState};
pub use seriallog_core::{LogFile, LogStdout, LogWriter, ParseSeverityError, Severity};

use std::path::{Path, PathBuf};

use log::SetLoggerError;
use seriallog_core::SERIALLOG_CONFIG;

/// Builder for configuring and creating a [`SerializedLogger`].
///
/// Building never fails: an unopenable log file degrades the logger to
/// console-only.
#[derive(Default)]
pub struct ConfigBuilder {
    log_file: Option<PathBuf>,
    level: Option<Severity>,
}

impl ConfigBuilder {
    /// Sets the log file. It is opened when the logger is built.
    pub fn with_log_file<P: AsRef<Path>>(self, path: P) -> Self {
        Self {
            log_file: Some(path.as_ref().to_path_buf()),
            ..self
        }
    }
    /// Maybe sets a log file.
    pub fn maybe_with_log_file<P: AsRef<Path>>(self, path: Option<P>) -> Self {
        Self {
            log_file: path.map(|p| p.as_ref().to_path_buf()),
            ..self
        }
    }
    /// Ignore file logging
    pub fn no_file(self) -> Self {
        Self {
            log_file: None,
            ..self
        }
    }
    /// Sets the minimum severity. Defaults to `SERIALLOG_DEFAULT_LEVEL`, or `INFO`.
    pub fn with_level(self, level: Severity) -> Self {
        Self {
            level: Some(level),
            ..self
        }
    }

    pub fn build(self) -> SerializedLogger {
        self.build_with_console(LogStdout)
    }

    /// Builds a logger writing to `console` instead of stdout.
    pub fn build_with_console<C: LogWriter>(self, console: C) -> SerializedLogger<C> {
        let level = self
            .level
            .unwrap_or_else(|| SERIALLOG_CONFIG.default_level());
        match self.log_file {
            Some(path) => SerializedLogger::with_console(console, path, level),
            None => SerializedLogger::console_only(console, level),
        }
    }

    /// Installs the logger as the `log` crate backend for the rest of the process.
    pub fn init_global(self) -> Result<(), SetLoggerError> {
        let logger = self.build();
        let filter = logger.level().level_filter();
        log::set_boxed_logger(Box::new(logger))?;
        log::set_max_level(filter);
        Ok(())
    }
}

/// Returns a default ConfigBuilder for configuring the logger.
pub fn logger_config() -> ConfigBuilder {
    ConfigBuilder::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_with_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("builder.log");
        let logger = logger_config()
            .with_log_file(&path)
            .with_level(Severity::Warning)
            .build();
        assert_eq!(logger.state(), SinkState::FileOpen);
        assert_eq!(logger.level(), Severity::Warning);
        logger.info("dropped");
        logger.error("kept");
        drop(logger);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.ends_with("][ERROR]kept\n"));
    }

    #[test]
    fn test_builder_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never.log");
        let logger = logger_config().with_log_file(&path).no_file().build();
        assert_eq!(logger.state(), SinkState::FileUnavailable);
        logger.critical("stdout only");
        assert!(!path.exists());
    }

    #[test]
    fn test_builder_maybe_with_log_file() {
        let logger = logger_config().maybe_with_log_file(None::<&str>).build();
        assert_eq!(logger.state(), SinkState::FileUnavailable);
        let dir = tempfile::tempdir().unwrap();
        let logger = logger_config()
            .maybe_with_log_file(Some(dir.path().join("maybe.log")))
            .build();
        assert_eq!(logger.state(), SinkState::FileOpen);
    }

    #[test]
    fn test_builder_default_level() {
        let logger = logger_config().build();
        assert_eq!(logger.level(), SERIALLOG_CONFIG.default_level());
    }
}
