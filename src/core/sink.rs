//! Sink trait for log output destinations

use super::{error::Result, log_level::LogLevel};
use parking_lot::RwLock;

/// A destination for fully rendered log lines.
///
/// Sinks are shared between threads (and possibly between loggers) behind an
/// `Arc`, so every method takes `&self` and implementations serialize their
/// own writes: a write and its optional flush happen under one lock.
pub trait Sink: Send + Sync {
    /// Write `line` and flush if `level` meets the flush threshold
    fn log(&self, line: &str, level: LogLevel) -> Result<()>;

    /// Force buffered output to its destination
    fn flush(&self) -> Result<()>;

    /// Set the minimum level that triggers an immediate flush
    fn flush_on(&self, level: LogLevel);

    /// Current flush threshold
    fn flush_level(&self) -> LogLevel;

    fn should_flush(&self, level: LogLevel) -> bool {
        level >= self.flush_level()
    }

    fn name(&self) -> &str;
}

/// Flush threshold shared by the built-in sinks.
///
/// Defaults to the lowest level, so every line is flushed.
#[derive(Debug, Default)]
pub struct FlushThreshold {
    level: RwLock<LogLevel>,
}

impl FlushThreshold {
    #[must_use]
    pub fn new(level: LogLevel) -> Self {
        Self {
            level: RwLock::new(level),
        }
    }

    pub fn set(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    #[must_use]
    pub fn get(&self) -> LogLevel {
        *self.level.read()
    }

    #[must_use]
    pub fn is_met_by(&self, level: LogLevel) -> bool {
        level >= self.get()
    }
}
