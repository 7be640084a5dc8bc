//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    format::{format, Arg},
    log_level::LogLevel,
    pattern::{render, DEFAULT_PATTERN},
    sink::Sink,
    timestamp::TimeSnapshot,
};
use parking_lot::RwLock;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Name given to loggers that are not named explicitly
pub const DEFAULT_LOGGER_NAME: &str = "logger";

/// Formats messages, lays them out with a pattern and hands the line to every
/// attached sink in order.
///
/// A logger holds no global state; several loggers may even share sinks.
/// The sink list is copied under a read lock before each fan-out, so adding
/// sinks while other threads log is safe.
///
/// # Example
///
/// ```
/// use rust_pattern_logger::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::new("app", "[%L] %N: %V%n");
/// logger.add_sink(Arc::new(ConsoleSink::stdout()));
/// logger.info("listening on port {}", &[Arg::from(8080)]).unwrap();
/// ```
pub struct Logger {
    name: RwLock<String>,
    pattern: RwLock<String>,
    sinks: RwLock<Vec<Arc<dyn Sink>>>,
}

impl Logger {
    #[must_use]
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: RwLock::new(name.into()),
            pattern: RwLock::new(pattern.into()),
            sinks: RwLock::new(Vec::new()),
        }
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn name(&self) -> String {
        self.name.read().clone()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        *self.name.write() = name.into();
    }

    pub fn pattern(&self) -> String {
        self.pattern.read().clone()
    }

    pub fn set_pattern(&self, pattern: impl Into<String>) {
        *self.pattern.write() = pattern.into();
    }

    pub fn add_sink(&self, sink: Arc<dyn Sink>) {
        self.sinks.write().push(sink);
    }

    /// Snapshot of the attached sinks
    pub fn sinks(&self) -> Vec<Arc<dyn Sink>> {
        self.sinks.read().clone()
    }

    /// Set the flush threshold of every attached sink
    pub fn flush_on(&self, level: LogLevel) {
        for sink in self.sinks().iter() {
            sink.flush_on(level);
        }
    }

    /// Format `template` with `args`, apply the pattern and write to all sinks.
    ///
    /// Every sink is attempted even if an earlier one fails.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::SinkFanout`] carrying the first failure when any
    /// sink fails or panics
    pub fn log(&self, level: LogLevel, template: &str, args: &[Arg<'_>]) -> Result<()> {
        let message = format(template, args);
        let now = TimeSnapshot::now();
        let line = {
            let name = self.name.read();
            let pattern = self.pattern.read();
            render(&pattern, &message, &name, level, &now)
        };

        let sinks = self.sinks();
        Self::dispatch(&sinks, &line, level)
    }

    /// Hand `line` to each sink, isolating errors and panics per sink
    fn dispatch(sinks: &[Arc<dyn Sink>], line: &str, level: LogLevel) -> Result<()> {
        let mut first_error = None;
        let mut failed = 0;

        for sink in sinks {
            let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                sink.log(line, level)
            }));

            let error = match outcome {
                Ok(Ok(())) => continue,
                Ok(Err(e)) => e,
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Sink '{}' panicked: {}. \
                         Other sinks continue to function.",
                        sink.name(),
                        panic_msg
                    );
                    LoggerError::sink_panicked(sink.name(), panic_msg)
                }
            };

            failed += 1;
            first_error.get_or_insert(error);
        }

        match first_error {
            Some(first) => Err(LoggerError::sink_fanout(failed, sinks.len(), first)),
            None => Ok(()),
        }
    }

    /// Flush every sink, even after one of them fails
    ///
    /// # Errors
    ///
    /// Returns the first flush failure
    pub fn flush(&self) -> Result<()> {
        let mut first_error = None;
        for sink in self.sinks().iter() {
            if let Err(e) = sink.flush() {
                eprintln!("[LOGGER ERROR] Failed to flush sink '{}': {}", sink.name(), e);
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Append the formatted message, without the pattern, to `path`.
    ///
    /// The file is opened for this single write and closed again; it does not
    /// need to be attached as a sink.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::Open`] if the file cannot be opened, or an IO
    /// error if the write fails
    pub fn log_to_file(
        &self,
        path: impl AsRef<Path>,
        template: &str,
        args: &[Arg<'_>],
    ) -> Result<()> {
        let path = path.as_ref();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LoggerError::open(path.display().to_string(), e))?;
        file.write_all(format(template, args).as_bytes())?;
        file.flush()?;
        Ok(())
    }

    #[inline]
    pub fn trace(&self, template: &str, args: &[Arg<'_>]) -> Result<()> {
        self.log(LogLevel::Trace, template, args)
    }

    #[inline]
    pub fn info(&self, template: &str, args: &[Arg<'_>]) -> Result<()> {
        self.log(LogLevel::Info, template, args)
    }

    #[inline]
    pub fn debug(&self, template: &str, args: &[Arg<'_>]) -> Result<()> {
        self.log(LogLevel::Debug, template, args)
    }

    #[inline]
    pub fn warning(&self, template: &str, args: &[Arg<'_>]) -> Result<()> {
        self.log(LogLevel::Warning, template, args)
    }

    #[inline]
    pub fn error(&self, template: &str, args: &[Arg<'_>]) -> Result<()> {
        self.log(LogLevel::Error, template, args)
    }

    #[inline]
    pub fn critical(&self, template: &str, args: &[Arg<'_>]) -> Result<()> {
        self.log(LogLevel::Critical, template, args)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(DEFAULT_LOGGER_NAME, DEFAULT_PATTERN)
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_pattern_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .name("worker")
///     .pattern("%T [%L] %V%n")
///     .sink(ConsoleSink::stderr())
///     .flush_on(LogLevel::Warning)
///     .build();
/// assert_eq!(logger.name(), "worker");
/// ```
pub struct LoggerBuilder {
    name: String,
    pattern: String,
    sinks: Vec<Arc<dyn Sink>>,
    flush_level: Option<LogLevel>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            name: DEFAULT_LOGGER_NAME.to_string(),
            pattern: DEFAULT_PATTERN.to_string(),
            sinks: Vec::new(),
            flush_level: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Attach a sink owned by this logger alone
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sinks.push(Arc::new(sink));
        self
    }

    /// Attach a sink that may also be attached elsewhere
    #[must_use = "builder methods return a new value"]
    pub fn shared_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Applied to every sink when the logger is built
    #[must_use = "builder methods return a new value"]
    pub fn flush_on(mut self, level: LogLevel) -> Self {
        self.flush_level = Some(level);
        self
    }

    pub fn build(self) -> Logger {
        let logger = Logger::new(self.name, self.pattern);
        for sink in self.sinks {
            logger.add_sink(sink);
        }
        if let Some(level) = self.flush_level {
            logger.flush_on(level);
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
