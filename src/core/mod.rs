//! Core logger types and traits

pub mod error;
pub mod format;
pub mod log_level;
pub mod logger;
pub mod pattern;
pub mod sink;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use format::{format, Arg, FormatSpec, Notation, Radix};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, DEFAULT_LOGGER_NAME};
pub use pattern::{render, DEFAULT_PATTERN};
pub use sink::{FlushThreshold, Sink};
pub use timestamp::TimeSnapshot;
