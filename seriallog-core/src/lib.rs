//! # seriallog-core
//! Core utilities for seriallog - severities, sinks and line formatting.

mod config;
mod log_writer;
mod severity;
mod utils;

pub use config::{SERIALLOG_CONFIG, SeriallogConfig};
pub use log_writer::{LogFile, LogStdout, LogWriter};
pub use severity::{ParseSeverityError, Severity};
pub use utils::{TIME_FORMAT, format_line, format_log, open_failure_message, report_open_failure};
