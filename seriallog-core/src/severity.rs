use std::{fmt, str::FromStr};

use log::{Level, LevelFilter};

/// Importance of a log message.
///
/// Ordered by rank: `Debug < Info < Warning < Error < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
    Critical = 4,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Upper-case name as written in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Closest `log` filter for this threshold. `Critical` has no `log`
    /// counterpart and maps to `Error`.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Severity::Debug => LevelFilter::Trace,
            Severity::Info => LevelFilter::Info,
            Severity::Warning => LevelFilter::Warn,
            Severity::Error | Severity::Critical => LevelFilter::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace | Level::Debug => Severity::Debug,
            Level::Info => Severity::Info,
            Level::Warn => Severity::Warning,
            Level::Error => Severity::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity: {:?}", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            "CRITICAL" => Ok(Severity::Critical),
            _ => Err(ParseSeverityError(s.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        for pair in Severity::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].rank() < pair[1].rank());
        }
        assert_eq!(Severity::ALL.iter().max(), Some(&Severity::Critical));
    }

    #[test]
    fn test_severity_names() {
        let names: Vec<_> = Severity::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"]);
    }

    #[test]
    fn test_severity_from_str() {
        for severity in Severity::ALL {
            assert_eq!(severity.as_str().parse::<Severity>(), Ok(severity));
        }
        assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!(" Critical ".parse::<Severity>(), Ok(Severity::Critical));
        let err = "trace".parse::<Severity>().unwrap_err();
        assert_eq!(err.to_string(), "unknown severity: \"trace\"");
    }

    #[test]
    fn test_severity_from_log_level() {
        assert_eq!(Severity::from(Level::Trace), Severity::Debug);
        assert_eq!(Severity::from(Level::Debug), Severity::Debug);
        assert_eq!(Severity::from(Level::Info), Severity::Info);
        assert_eq!(Severity::from(Level::Warn), Severity::Warning);
        assert_eq!(Severity::from(Level::Error), Severity::Error);
        assert_eq!(Severity::Critical.level_filter(), LevelFilter::Error);
        assert_eq!(Severity::Debug.level_filter(), LevelFilter::Trace);
    }
}
