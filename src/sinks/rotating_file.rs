//! Size-based rotating file sink
//!
//! The active file is always the configured path. When a write would push it
//! past `max_size` bytes, the sink shifts the numbered backups up by one
//! generation, evicting the oldest, and starts a fresh active file:
//!
//! ```text
//! app.log      -> app.1.log
//! app.1.log    -> app.2.log
//! ...
//! app.{N-1}.log -> app.{N}.log
//! app.{N}.log  -> deleted
//! ```

use crate::core::{FlushThreshold, LogLevel, LoggerError, Result, Sink};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Limits for a [`RotatingFileSink`]
///
/// # Examples
///
/// ```
/// use rust_pattern_logger::sinks::RotationPolicy;
///
/// let policy = RotationPolicy::new()
///     .with_max_size(50 * 1024 * 1024)
///     .with_max_backups(7);
/// assert!(policy.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationPolicy {
    /// Largest size in bytes the active file may reach before rotating
    pub max_size: u64,
    /// Number of numbered backups kept on disk
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            max_size: 10 * 1024 * 1024, // 10 MB
            max_backups: 5,
        }
    }
}

impl RotationPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_size(mut self, bytes: u64) -> Self {
        self.max_size = bytes;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_backups(mut self, count: usize) -> Self {
        self.max_backups = count;
        self
    }

    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidConfiguration`] for a zero size or zero backups
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(LoggerError::config(
                "RotatingFileSink",
                "max_size must be a positive byte count",
            ));
        }
        if self.max_backups == 0 {
            return Err(LoggerError::config(
                "RotatingFileSink",
                "max_backups must be at least 1",
            ));
        }
        Ok(())
    }
}

struct RotatingState {
    /// `None` only after a failed rotation; the next write reopens the file
    writer: Option<BufWriter<File>>,
    /// Bytes in the active file
    current_size: u64,
}

/// File sink that rotates by size, keeping a bounded set of numbered backups.
///
/// Size check, rotation, write and flush all run under one lock, so threads
/// sharing the sink never race to rotate or interleave partial lines.
///
/// # Examples
///
/// ```no_run
/// use rust_pattern_logger::sinks::RotatingFileSink;
/// use rust_pattern_logger::{LogLevel, Sink};
///
/// // 1 MB per file, app.1.log .. app.3.log kept
/// let sink = RotatingFileSink::new("/var/log/app.log", 1024 * 1024, 3).unwrap();
/// sink.log("started\n", LogLevel::Info).unwrap();
/// ```
pub struct RotatingFileSink {
    base_path: PathBuf,
    policy: RotationPolicy,
    state: Mutex<RotatingState>,
    flush_threshold: FlushThreshold,
}

impl RotatingFileSink {
    /// Create a sink rotating at `max_size` bytes and keeping `max_backups` backups
    ///
    /// # Errors
    ///
    /// Returns error if the limits are invalid or the file cannot be opened
    pub fn new<P: AsRef<Path>>(path: P, max_size: u64, max_backups: usize) -> Result<Self> {
        let policy = RotationPolicy::new()
            .with_max_size(max_size)
            .with_max_backups(max_backups);
        Self::with_policy(path, policy)
    }

    /// Create a sink from a [`RotationPolicy`]
    ///
    /// Missing parent directories are created. Size accounting continues from
    /// the file's current length, so a restarted process picks up where the
    /// previous one stopped.
    ///
    /// # Errors
    ///
    /// Returns error if the policy is invalid, the directory cannot be created
    /// or the file cannot be opened
    pub fn with_policy<P: AsRef<Path>>(path: P, policy: RotationPolicy) -> Result<Self> {
        policy.validate()?;
        let base_path = path.as_ref().to_path_buf();

        if let Some(parent) = base_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                LoggerError::io_operation(
                    "create log directory",
                    format!("Failed to create directory '{}'", parent.display()),
                    e,
                )
            })?;
        }

        let (file, current_size) = open_append(&base_path)
            .map_err(|e| LoggerError::open(base_path.display().to_string(), e))?;

        Ok(Self {
            base_path,
            policy,
            state: Mutex::new(RotatingState {
                writer: Some(BufWriter::new(file)),
                current_size,
            }),
            flush_threshold: FlushThreshold::default(),
        })
    }

    /// Rotate now, regardless of the current size
    ///
    /// # Errors
    ///
    /// Returns error if a backup cannot be removed or renamed, or the fresh
    /// active file cannot be created
    pub fn rotate(&self) -> Result<()> {
        let mut state = self.state.lock();
        self.rotate_locked(&mut state)
    }

    fn rotate_locked(&self, state: &mut RotatingState) -> Result<()> {
        if let Some(mut writer) = state.writer.take() {
            writer.flush().map_err(|e| {
                LoggerError::file_rotation(
                    self.base_path.display().to_string(),
                    format!("Failed to flush before rotation: {}", e),
                )
            })?;
        }

        let oldest = self.backup_path(self.policy.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest).map_err(|e| {
                LoggerError::file_rotation(
                    oldest.display().to_string(),
                    format!("Failed to remove oldest backup: {}", e),
                )
            })?;
        }

        // highest generation first, so no rename lands on a file not yet moved
        for i in (1..self.policy.max_backups).rev() {
            let from = self.backup_path(i);
            if from.exists() {
                rename_replacing(&from, &self.backup_path(i + 1)).map_err(|e| {
                    LoggerError::file_rotation(
                        from.display().to_string(),
                        format!("Failed to shift backup: {}", e),
                    )
                })?;
            }
        }

        if self.base_path.exists() {
            rename_replacing(&self.base_path, &self.backup_path(1)).map_err(|e| {
                LoggerError::file_rotation(
                    self.base_path.display().to_string(),
                    format!("Failed to rotate current log file: {}", e),
                )
            })?;
        }

        let (file, _) = open_append(&self.base_path).map_err(|e| {
            LoggerError::file_rotation(
                self.base_path.display().to_string(),
                format!("Failed to create new log file: {}", e),
            )
        })?;
        state.writer = Some(BufWriter::new(file));
        state.current_size = 0;

        Ok(())
    }

    /// Reopen the active file after a failed rotation left the sink without one
    fn recover(&self, state: &mut RotatingState) -> Result<()> {
        let (file, size) = open_append(&self.base_path)
            .map_err(|e| LoggerError::open(self.base_path.display().to_string(), e))?;
        state.writer = Some(BufWriter::new(file));
        state.current_size = size;
        Ok(())
    }

    /// Path of backup generation `index` (1 is the newest)
    #[must_use]
    pub fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self
            .base_path
            .file_stem()
            .map(OsStr::to_os_string)
            .unwrap_or_default();
        name.push(format!(".{}", index));
        if let Some(ext) = self.base_path.extension() {
            name.push(".");
            name.push(ext);
        }
        self.base_path.with_file_name(name)
    }

    /// Bytes written to the active file
    #[must_use]
    pub fn current_size(&self) -> u64 {
        self.state.lock().current_size
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.base_path
    }

    #[must_use]
    pub fn policy(&self) -> &RotationPolicy {
        &self.policy
    }
}

impl Sink for RotatingFileSink {
    fn log(&self, line: &str, level: LogLevel) -> Result<()> {
        let mut guard = self.state.lock();
        let state = &mut *guard;

        if state.writer.is_none() {
            self.recover(state)?;
        }

        let len = line.len() as u64;
        let mut rotation_error = None;
        if state.current_size + len > self.policy.max_size {
            if let Err(e) = self.rotate_locked(state) {
                eprintln!(
                    "[LOGGER WARN] Log rotation failed: {}. Continuing with current file.",
                    e
                );
                if state.writer.is_none() {
                    self.recover(state)?;
                }
                rotation_error = Some(e);
            }
        }

        let writer = state
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer("Writer not initialized"))?;
        writer.write_all(line.as_bytes()).map_err(|e| {
            LoggerError::io_operation(
                "writing log file",
                format!("Failed to append to '{}'", self.base_path.display()),
                e,
            )
        })?;
        state.current_size += len;

        if self.flush_threshold.is_met_by(level) {
            writer.flush()?;
        }

        match rotation_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn flush(&self) -> Result<()> {
        if let Some(writer) = self.state.lock().writer.as_mut() {
            writer.flush().map_err(|e| {
                LoggerError::io_operation(
                    "flushing log file",
                    format!("Failed to flush '{}'", self.base_path.display()),
                    e,
                )
            })?;
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
        "rotating_file"
    }
}

impl Drop for RotatingFileSink {
    fn drop(&mut self) {
        if let Some(mut writer) = self.state.get_mut().writer.take() {
            if let Err(e) = writer.flush() {
                eprintln!(
                    "[LOGGER ERROR] Failed to flush '{}' on close: {}",
                    self.base_path.display(),
                    e
                );
            }
        }
    }
}

fn open_append(path: &Path) -> io::Result<(File, u64)> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let size = file.metadata()?.len();
    Ok((file, size))
}

/// Rename, replacing `to` on platforms where rename refuses an existing target
fn rename_replacing(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(_) if to.exists() => {
            fs::remove_file(to)?;
            fs::rename(from, to)
        }
        Err(e) => Err(e),
    }
}
