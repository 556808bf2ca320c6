use std::{fmt::Display, path::Path};

use chrono::Local;
use colored::Colorize;

use crate::severity::Severity;

/// strftime pattern of the timestamp tag, local time to the second.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Builds `[<time>][<LEVEL>]<message>`, without line terminator.
pub fn format_line(time: impl Display, severity: Severity, message: &str) -> String {
    format!("[{time}][{severity}]{message}")
}

/// Formats `message` with the current local time.
pub fn format_log(severity: Severity, message: &str) -> String {
    format_line(Local::now().format(TIME_FORMAT), severity, message)
}

/// Text of the diagnostic for a log file that could not be opened.
pub fn open_failure_message(path: &Path, err: &std::io::Error) -> String {
    format!("Failed to open the log file : {} ({err})", path.display())
}

/// One-time stderr diagnostic for a log file that could not be opened.
pub fn report_open_failure(path: &Path, err: &std::io::Error) {
    eprintln!("{}", open_failure_message(path, err).red());
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_line() {
        let time = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 1)
            .unwrap();
        assert_eq!(
            format_line(time.format(TIME_FORMAT), Severity::Info, "boot"),
            "[2024-03-07 09:05:01][INFO]boot"
        );
        assert_eq!(
            format_line(time.format(TIME_FORMAT), Severity::Critical, ""),
            "[2024-03-07 09:05:01][CRITICAL]"
        );
        assert_eq!(
            format_line(time.format(TIME_FORMAT), Severity::Warning, " spaced [x]"),
            "[2024-03-07 09:05:01][WARNING] spaced [x]"
        );
    }

    #[test]
    fn test_format_log_shape() {
        let line = format_log(Severity::Error, "Failed some where");
        assert!(line.starts_with('['));
        assert!(line.ends_with("][ERROR]Failed some where"));
        // "[YYYY-MM-DD HH:MM:SS]" is 21 bytes
        assert_eq!(&line[20..21], "]");
        assert_eq!(&line[11..12], " ");
    }

    #[test]
    fn test_open_failure_message() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let path = Path::new("/nonexistent/app.log");
        assert_eq!(
            open_failure_message(path, &err),
            "Failed to open the log file : /nonexistent/app.log (no such directory)"
        );
        report_open_failure(path, &err);
    }
}
