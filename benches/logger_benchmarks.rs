//! Criterion benchmarks for rust_pattern_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_pattern_logger::core::format::format;
use rust_pattern_logger::core::pattern::render;
use rust_pattern_logger::prelude::*;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

// ============================================================================
// Formatter Benchmarks
// ============================================================================

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    group.throughput(Throughput::Elements(1));

    group.bench_function("literal", |b| {
        b.iter(|| black_box(format(black_box("Server started"), &[])));
    });

    group.bench_function("implicit", |b| {
        b.iter(|| {
            black_box(format(
                black_box("{} requests from {} in {}ms"),
                &[Arg::from(1200), Arg::from("10.0.0.1"), Arg::from(35)],
            ))
        });
    });

    group.bench_function("specifiers", |b| {
        b.iter(|| {
            black_box(format(
                black_box("0x{:08X} {:.3f} {:e} {:b}"),
                &[
                    Arg::from(0xBEEFu32),
                    Arg::from(3.14159),
                    Arg::from(6.02e23),
                    Arg::from(true),
                ],
            ))
        });
    });

    group.finish();
}

// ============================================================================
// Pattern Benchmarks
// ============================================================================

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Elements(1));
    let time = TimeSnapshot::now();

    group.bench_function("default_pattern", |b| {
        b.iter(|| {
            black_box(render(
                black_box(rust_pattern_logger::DEFAULT_PATTERN),
                "message",
                "bench",
                LogLevel::Info,
                &time,
            ))
        });
    });

    group.bench_function("full_pattern", |b| {
        b.iter(|| {
            black_box(render(
                black_box("%A, %B %d %Y %x [%L] %N: %V%n"),
                "message",
                "bench",
                LogLevel::Warning,
                &time,
            ))
        });
    });

    group.finish();
}

// ============================================================================
// Sink Benchmarks
// ============================================================================

fn bench_file_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_logging");
    group.throughput(Throughput::Elements(1));
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let buffered = Logger::builder()
        .sink(FileSink::new(temp_dir.path().join("buffered.log")).unwrap())
        .flush_on(LogLevel::Critical)
        .build();
    group.bench_function("file_buffered", |b| {
        b.iter(|| buffered.info(black_box("value {}"), &[Arg::from(42)]).unwrap());
    });

    let flushing = Logger::builder()
        .sink(FileSink::new(temp_dir.path().join("flushing.log")).unwrap())
        .build();
    group.bench_function("file_flush_every_line", |b| {
        b.iter(|| flushing.info(black_box("value {}"), &[Arg::from(42)]).unwrap());
    });

    let rotating = Logger::builder()
        .sink(RotatingFileSink::new(temp_dir.path().join("rotating.log"), 64 * 1024, 3).unwrap())
        .flush_on(LogLevel::Critical)
        .build();
    group.bench_function("rotating", |b| {
        b.iter(|| rotating.info(black_box("value {}"), &[Arg::from(42)]).unwrap());
    });

    group.finish();
}

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let logger = Arc::new(
        Logger::builder()
            .sink(RotatingFileSink::new(temp_dir.path().join("shared.log"), 256 * 1024, 2).unwrap())
            .flush_on(LogLevel::Critical)
            .build(),
    );

    for threads in [2usize, 4, 8] {
        group.throughput(Throughput::Elements((threads * 100) as u64));
        group.bench_function(format!("threads_{}", threads).as_str(), |b| {
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|id| {
                        let logger = Arc::clone(&logger);
                        thread::spawn(move || {
                            for i in 0..100 {
                                logger
                                    .info("thread {} message {}", &[Arg::from(id), Arg::from(i)])
                                    .unwrap();
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_format,
    bench_render,
    bench_file_logging,
    bench_concurrent_logging
);
criterion_main!(benches);
