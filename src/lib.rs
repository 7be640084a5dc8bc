//! # Rust Pattern Logger
//!
//! A small synchronous logging library: messages are formatted with a
//! brace-style template, laid out with a `%`-token pattern and written to
//! one or more sinks.
//!
//! ## Features
//!
//! - **Message templates**: `{}`, `{1}`, `{:08.3f}` and `{:04X}` placeholders
//! - **Patterns**: timestamps, level and logger name via `%R`, `%L`, `%N`, ...
//! - **Sinks**: colored console, plain file and size-rotated files
//! - **Thread Safe**: loggers and sinks can be shared across threads
//!
//! ```
//! use rust_pattern_logger::prelude::*;
//! use std::sync::Arc;
//!
//! let logger = Logger::new("app", "[%T] [%L] %N: %V%n");
//! logger.add_sink(Arc::new(ConsoleSink::stdout()));
//! rust_pattern_logger::info!(logger, "{} workers ready", 4).unwrap();
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Arg, LogLevel, Logger, LoggerBuilder, LoggerError, Result, Sink, TimeSnapshot,
    };
    pub use crate::sinks::{ConsoleSink, FileSink, RotatingFileSink, RotationPolicy};
}

pub use crate::core::{
    format, render, Arg, FlushThreshold, FormatSpec, LogLevel, Logger, LoggerBuilder,
    LoggerError, Result, Sink, TimeSnapshot, DEFAULT_LOGGER_NAME, DEFAULT_PATTERN,
};
pub use sinks::{ConsoleSink, ConsoleTarget, FileSink, RotatingFileSink, RotationPolicy};
