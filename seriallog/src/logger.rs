use std::{
    path::Path,
    sync::{Mutex, MutexGuard, PoisonError},
};

use log::{Log, Metadata, Record};
use seriallog_core::{
    LogFile, LogStdout, LogWriter, SERIALLOG_CONFIG, Severity, format_log, report_open_failure,
};

/// Whether the file sink is in use. Decided once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkState {
    FileOpen,
    FileUnavailable,
}

struct Sinks<C> {
    console: C,
    file: Option<LogFile>,
}

/// Logger writing every accepted message to a console sink and an
/// append-only log file.
///
/// Formatting and both writes of a message happen under one lock, so lines
/// from concurrent callers never interleave in either sink. Messages below the
/// threshold return before the lock is taken.
///
/// If the log file cannot be opened the logger still works and writes to the
/// console only; the failure is reported once on stderr.
///
/// ```rust
/// use seriallog::{SerializedLogger, Severity};
///
/// let path = std::env::temp_dir().join("seriallog_doc.log");
/// let logger = SerializedLogger::new(&path, Severity::Debug);
/// logger.info("boot");
/// logger.debug("details");
/// assert!(std::fs::read_to_string(&path).unwrap().ends_with("][DEBUG]details\n"));
/// ```
pub struct SerializedLogger<C: LogWriter = LogStdout> {
    level: Severity,
    state: SinkState,
    sinks: Mutex<Sinks<C>>,
}

impl SerializedLogger<LogStdout> {
    /// Logs to stdout and appends to the file at `path`.
    pub fn new<P: AsRef<Path>>(path: P, level: Severity) -> Self {
        Self::with_console(LogStdout, path, level)
    }

    /// Same as [`SerializedLogger::new`] with the threshold taken from
    /// `SERIALLOG_DEFAULT_LEVEL` (`INFO` when unset).
    pub fn with_default_level<P: AsRef<Path>>(path: P) -> Self {
        Self::new(path, SERIALLOG_CONFIG.default_level())
    }
}

impl<C: LogWriter> SerializedLogger<C> {
    /// Logs to `console` and appends to the file at `path`.
    pub fn with_console<P: AsRef<Path>>(console: C, path: P, level: Severity) -> Self {
        Self::from_sinks(console, open_log_file(path.as_ref()), level)
    }

    /// Logs to `console` only. No diagnostic is emitted since no file was requested.
    pub fn console_only(console: C, level: Severity) -> Self {
        Self::from_sinks(console, None, level)
    }

    fn from_sinks(console: C, file: Option<LogFile>, level: Severity) -> Self {
        let state = if file.is_some() {
            SinkState::FileOpen
        } else {
            SinkState::FileUnavailable
        };
        Self {
            level,
            state,
            sinks: Mutex::new(Sinks { console, file }),
        }
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    pub fn state(&self) -> SinkState {
        self.state
    }

    /// Whether a message of `severity` passes the threshold.
    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity >= self.level
    }

    /// Writes `[<time>][<LEVEL>]<message>` to the console and, if open, to the file.
    pub fn log(&self, severity: Severity, message: impl AsRef<str>) {
        // threshold is immutable, no lock needed to read it
        if !self.is_enabled(severity) {
            return;
        }
        let mut sinks = self.lock_sinks();
        let line = format_log(severity, message.as_ref());
        let Sinks { console, file } = &mut *sinks;
        console.regular(&line);
        if let Some(file) = file {
            file.regular(&line);
        }
    }

    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(Severity::Debug, message)
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.log(Severity::Info, message)
    }

    pub fn warning(&self, message: impl AsRef<str>) {
        self.log(Severity::Warning, message)
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.log(Severity::Error, message)
    }

    pub fn critical(&self, message: impl AsRef<str>) {
        self.log(Severity::Critical, message)
    }

    pub fn flush(&self) {
        let mut sinks = self.lock_sinks();
        sinks.console.flush();
        if let Some(file) = &mut sinks.file {
            file.flush();
        }
    }

    // A panicking console writer must not disable logging for every other caller.
    fn lock_sinks(&self) -> MutexGuard<'_, Sinks<C>> {
        self.sinks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: LogWriter> Drop for SerializedLogger<C> {
    fn drop(&mut self) {
        let sinks = self.sinks.get_mut().unwrap_or_else(PoisonError::into_inner);
        sinks.console.flush();
        // LogFile flushes and closes on drop
        sinks.file.take();
    }
}

impl<C: LogWriter + Send> Log for SerializedLogger<C> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.is_enabled(metadata.level().into())
    }

    fn log(&self, record: &Record) {
        SerializedLogger::log(self, record.level().into(), record.args().to_string());
    }

    fn flush(&self) {
        SerializedLogger::flush(self);
    }
}

fn open_log_file(path: &Path) -> Option<LogFile> {
    LogFile::new(path)
        .inspect_err(|err| report_open_failure(path, err))
        .ok()
}
