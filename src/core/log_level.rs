//! Log level definitions

use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log line, ordered by declaration.
///
/// `None` is the "no styling" sentinel: it sorts below every real level, so a
/// flush threshold of `None` flushes everything, and console sinks use it to
/// reset colors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    None = 0,
    Trace = 1,
    Info = 2,
    Debug = 3,
    Warning = 4,
    Error = 5,
    Critical = 6,
}

impl LogLevel {
    /// Every level in ascending order
    pub const ALL: [LogLevel; 7] = [
        LogLevel::None,
        LogLevel::Trace,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    /// Lowercase name, as substituted for `%L` in patterns
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::None => "none",
            LogLevel::Trace => "trace",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Critical => "critical",
        }
    }

    /// Console styling for this level as (foreground, background).
    ///
    /// Returns `None` for [`LogLevel::None`], which means "reset to neutral".
    pub fn palette(&self) -> Option<(Color, Option<Color>)> {
        use colored::Color::*;
        match self {
            LogLevel::None => None,
            LogLevel::Trace => Some((BrightBlack, None)),
            LogLevel::Info => Some((Green, None)),
            LogLevel::Debug => Some((Blue, None)),
            LogLevel::Warning => Some((Yellow, None)),
            LogLevel::Error => Some((Red, None)),
            LogLevel::Critical => Some((Red, Some(White))),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(LogLevel::None),
            "trace" => Ok(LogLevel::Trace),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            "critical" => Ok(LogLevel::Critical),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
