//! Console sink implementation

use crate::core::{FlushThreshold, LogLevel, Result, Sink};
use colored::Colorize;
use parking_lot::Mutex;
use std::io::{self, Write};

/// Which standard stream a [`ConsoleSink`] writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleTarget {
    Stdout,
    Stderr,
}

/// Writes lines to stdout or stderr, colored by level.
///
/// Console output is always flushed after each line; the flush threshold is
/// kept only so the sink honours the common [`Sink`] interface.
///
/// # Examples
///
/// ```
/// use rust_pattern_logger::sinks::ConsoleSink;
///
/// let out = ConsoleSink::stdout();
/// let err = ConsoleSink::stderr().with_colors(false);
/// ```
pub struct ConsoleSink {
    target: ConsoleTarget,
    use_colors: bool,
    flush_threshold: FlushThreshold,
    write_lock: Mutex<()>,
}

impl ConsoleSink {
    pub fn new(target: ConsoleTarget) -> Self {
        Self {
            target,
            use_colors: true,
            flush_threshold: FlushThreshold::default(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn stdout() -> Self {
        Self::new(ConsoleTarget::Stdout)
    }

    /// The error-console variant
    pub fn stderr() -> Self {
        Self::new(ConsoleTarget::Stderr)
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }

    fn write_line(&self, out: &mut dyn Write, line: &str, level: LogLevel) -> io::Result<()> {
        if self.use_colors {
            out.write_all(paint(line, level).as_bytes())?;
        } else {
            out.write_all(line.as_bytes())?;
        }
        out.flush()
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Sink for ConsoleSink {
    fn log(&self, line: &str, level: LogLevel) -> Result<()> {
        let _guard = self.write_lock.lock();
        match self.target {
            ConsoleTarget::Stdout => self.write_line(&mut io::stdout().lock(), line, level)?,
            ConsoleTarget::Stderr => self.write_line(&mut io::stderr().lock(), line, level)?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let _guard = self.write_lock.lock();
        match self.target {
            ConsoleTarget::Stdout => io::stdout().flush()?,
            ConsoleTarget::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }

    fn flush_on(&self, level: LogLevel) {
        self.flush_threshold.set(level);
    }

    fn flush_level(&self) -> LogLevel {
        self.flush_threshold.get()
    }

    fn name(&self) -> &str {
        match self.target {
            ConsoleTarget::Stdout => "console",
            ConsoleTarget::Stderr => "error_console",
        }
    }
}

/// Bracket `line` with the level's color and a reset.
///
/// A trailing newline stays outside the colored span so the reset lands on
/// the same terminal line.
pub fn paint(line: &str, level: LogLevel) -> String {
    let Some((fg, bg)) = level.palette() else {
        return line.to_string();
    };

    let (body, newline) = match line.strip_suffix('\n') {
        Some(body) => (body, "\n"),
        None => (line, ""),
    };

    let styled = body.color(fg);
    let styled = match bg {
        Some(bg) => styled.on_color(bg),
        None => styled,
    };
    format!("{}{}", styled, newline)
}
