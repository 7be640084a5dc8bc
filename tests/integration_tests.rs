//! Integration tests for the logger system
//!
//! These tests verify:
//! - Template formatting through the full logger pipeline
//! - Pattern layout of emitted lines
//! - File and rotating sinks on disk
//! - Flush thresholds
//! - Serialization of configuration types

use rust_pattern_logger::core::format::format;
use rust_pattern_logger::prelude::*;
use rust_pattern_logger::{critical, info, warning};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn file_logger(dir: &TempDir, pattern: &str) -> (Logger, std::path::PathBuf) {
    let path = dir.path().join("app.log");
    let logger = Logger::new("App", pattern);
    logger.add_sink(Arc::new(FileSink::new(&path).expect("Failed to create sink")));
    (logger, path)
}

#[test]
fn test_formatter_reference_cases() {
    assert_eq!(format("{} {}", &[Arg::from(10), Arg::from(20)]), "10 20");
    assert_eq!(
        format("{1} {0}!", &[Arg::from("World"), Arg::from("Hello")]),
        "Hello World!"
    );
    assert_eq!(format("Pi: {:.2f}", &[Arg::from(3.14159)]), "Pi: 3.14");
    assert_eq!(format("Hex: 0x{:04X}", &[Arg::from(255)]), "Hex: 0x00FF");
    assert_eq!(format("No args {}", &[]), "No args {}");
    assert_eq!(format("{5}", &[Arg::from(1), Arg::from(2)]), "");
    assert_eq!(format("{{literal}}", &[]), "{literal}");
}

#[test]
fn test_pattern_reaches_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (logger, path) = file_logger(&temp_dir, "[%L] %N: %V%n");

    info!(logger, "hi").unwrap();
    warning!(logger, "{} of {} retries used", 2, 5).unwrap();

    let content = fs::read_to_string(&path).expect("Failed to read log file");
    assert_eq!(content, "[info] App: hi\n[warning] App: 2 of 5 retries used\n");
}

#[test]
fn test_timestamp_tokens_are_consistent() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (logger, path) = file_logger(&temp_dir, "%T|%H:%M:%S|%Y|%V%n");

    logger.info("tick", &[]).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let fields: Vec<&str> = content.trim_end().split('|').collect();
    assert_eq!(fields.len(), 4);
    assert_eq!(fields[0], fields[1]);
    assert_eq!(fields[2].len(), 4);
    assert_eq!(fields[3], "tick");
}

#[test]
fn test_default_pattern_layout() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("default.log");
    let logger = Logger::builder()
        .name("svc")
        .sink(FileSink::new(&path).unwrap())
        .build();

    logger.error("boom", &[]).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with('['));
    assert!(content.ends_with("] svc: boom\n"));
}

#[test]
fn test_multiple_sinks_receive_same_line() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.log");
    let second = temp_dir.path().join("second.log");

    let logger = Logger::builder()
        .pattern("%N %V%n")
        .sink(FileSink::new(&first).unwrap())
        .sink(RotatingFileSink::new(&second, 1024, 2).unwrap())
        .build();

    critical!(logger, "{:b}", false).unwrap();

    assert_eq!(fs::read_to_string(&first).unwrap(), "logger false\n");
    assert_eq!(fs::read_to_string(&second).unwrap(), "logger false\n");
}

#[test]
fn test_logger_drives_rotation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("logs").join("rotating.log");
    let sink = Arc::new(RotatingFileSink::new(&path, 100, 3).unwrap());

    let logger = Logger::new("r", "%V%n");
    logger.add_sink(sink.clone());

    // 20 bytes per line: five fit, the sixth rotates
    for i in 0..5 {
        logger.info("line number {:05}..", &[Arg::from(i)]).unwrap();
    }
    assert!(!sink.backup_path(1).exists());
    logger.info("line number {:05}..", &[Arg::from(5)]).unwrap();

    assert!(sink.backup_path(1).exists());
    assert_eq!(fs::metadata(sink.backup_path(1)).unwrap().len(), 100);
    assert_eq!(fs::read_to_string(&path).unwrap(), "line number 00005..\n");
    assert_eq!(sink.current_size(), 20);
}

#[test]
fn test_restart_continues_size_accounting() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("restart.log");

    {
        let sink = RotatingFileSink::new(&path, 50, 2).unwrap();
        sink.log("0123456789012345678901234567890123456789\n", LogLevel::Info)
            .unwrap();
    }

    let sink = RotatingFileSink::new(&path, 50, 2).unwrap();
    assert_eq!(sink.current_size(), 41);
    sink.log("0123456789\n", LogLevel::Info).unwrap();
    assert!(sink.backup_path(1).exists());
    assert_eq!(sink.current_size(), 11);
}

#[test]
fn test_retention_window() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("keep.log");
    let sink = RotatingFileSink::new(&path, 10, 2).unwrap();

    for i in 0..6 {
        sink.log(&format!("gen-{:04}\n", i), LogLevel::Info).unwrap();
    }

    let log_files = fs::read_dir(temp_dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with("keep"))
        .count();
    assert_eq!(log_files, 3);

    assert_eq!(fs::read_to_string(&path).unwrap(), "gen-0005\n");
    assert_eq!(fs::read_to_string(sink.backup_path(1)).unwrap(), "gen-0004\n");
    assert_eq!(fs::read_to_string(sink.backup_path(2)).unwrap(), "gen-0003\n");
}

#[test]
fn test_logger_flush_on_and_flush() {
    let temp_dir = TempDir::new().unwrap();
    let (logger, path) = file_logger(&temp_dir, "%V%n");
    logger.flush_on(LogLevel::Error);

    logger.info("held back", &[]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");

    logger.flush().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "held back\n");

    logger.info("again", &[]).unwrap();
    logger.critical("now", &[]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "held back\nagain\nnow\n");
}

#[test]
fn test_console_sinks_accept_lines() {
    let logger = Logger::builder()
        .pattern("[%L] %V%n")
        .sink(ConsoleSink::stdout())
        .sink(ConsoleSink::stderr().with_colors(false))
        .build();

    for level in LogLevel::ALL {
        logger.log(level, "console level check", &[]).unwrap();
    }
}

#[test]
fn test_open_error_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    // a directory cannot be opened as a log file
    let err = FileSink::new(temp_dir.path()).err().expect("should fail");
    assert!(matches!(err, LoggerError::Open { .. }));
}

#[test]
fn test_configuration_serialization() {
    let json = serde_json::to_string(&LogLevel::Warning).unwrap();
    assert_eq!(json, "\"warning\"");
    let level: LogLevel = serde_json::from_str("\"critical\"").unwrap();
    assert_eq!(level, LogLevel::Critical);

    let policy = RotationPolicy::new().with_max_size(2048).with_max_backups(4);
    let json = serde_json::to_string(&policy).unwrap();
    assert_eq!(json, r#"{"max_size":2048,"max_backups":4}"#);
    let back: RotationPolicy = serde_json::from_str(&json).unwrap();
    assert_eq!(back, policy);
}
