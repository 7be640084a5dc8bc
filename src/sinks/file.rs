//! File sink implementation

use crate::core::{FlushThreshold, LogLevel, LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends lines to a single file.
///
/// # Examples
///
/// ```no_run
/// use rust_pattern_logger::sinks::FileSink;
/// use rust_pattern_logger::{LogLevel, Sink};
///
/// let sink = FileSink::new("/var/log/app.log").unwrap();
/// // keep lines buffered until something important arrives
/// sink.flush_on(LogLevel::Warning);
/// ```
pub struct FileSink {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
    flush_threshold: FlushThreshold,
}

impl FileSink {
    /// Open `path` for appending, creating it if needed
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::Open`] if the file cannot be opened
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::open(path.display().to_string(), e))?;

        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
            flush_threshold: FlushThreshold::default(),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn log(&self, line: &str, level: LogLevel) -> Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes()).map_err(|e| {
            LoggerError::io_operation(
                "writing log file",
                format!("Failed to append to '{}'", self.path.display()),
                e,
            )
        })?;
        if self.flush_threshold.is_met_by(level) {
            writer.flush()?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn flush_on(&self, level: LogLevel) {
        self.flush_threshold.set(level);
    }

    fn flush_level(&self) -> LogLevel {
        self.flush_threshold.get()
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        if let Err(e) = self.writer.get_mut().flush() {
            eprintln!(
                "[LOGGER ERROR] Failed to flush '{}' on close: {}",
                self.path.display(),
                e
            );
        }
    }
}
