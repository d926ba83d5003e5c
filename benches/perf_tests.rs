use criterion::{black_box, criterion_group, criterion_main, Criterion};
use log::{info, LevelFilter};
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use spinlog::sink::ConsoleSink;
use spinlog::spinlock::Spinlock;
use spinlog::{log_record, Log, LogConfig, Priority};
use std::sync::{Arc, Once};
use std::thread;
use tempfile::tempdir;

const THREADS: usize = 4;
const ITERATIONS: usize = 10_000;

static LOGGER_INIT: Once = Once::new();

// Console sink that does nothing - for measuring formatting and history cost only
struct NullConsole;

impl ConsoleSink for NullConsole {
    fn write_line(&mut self, line: &str) {
        black_box(line);
    }
}

fn setup_log4rs(log_file: &str) {
    LOGGER_INIT.call_once(|| {
        let logfile = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new("{d} - {m}{n}")))
            .append(true)
            .build(log_file)
            .unwrap();

        let config = Config::builder()
            .appender(Appender::builder().build("logfile", Box::new(logfile)))
            .build(Root::builder().appender("logfile").build(LevelFilter::Info))
            .unwrap();

        log4rs::init_config(config).unwrap();
    });
}

fn contended<L, F>(lock: Arc<L>, op: F)
where
    L: Send + Sync + 'static,
    F: Fn(&L) + Send + Sync + Copy + 'static,
{
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let lock = Arc::clone(&lock);
            thread::spawn(move || {
                for _ in 0..ITERATIONS {
                    op(&lock);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

fn bench_locks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Short critical section");
    group.sample_size(20);

    group.bench_function("spinlock", |b| {
        b.iter(|| {
            let lock = Arc::new(Spinlock::new(Vec::<u64>::with_capacity(64)));
            contended(lock, |l| {
                let mut v = l.lock();
                v.push(1);
                if v.len() == 64 {
                    v.clear();
                }
            });
        });
    });

    group.bench_function("parking_lot_mutex", |b| {
        b.iter(|| {
            let lock = Arc::new(parking_lot::Mutex::new(Vec::<u64>::with_capacity(64)));
            contended(lock, |l| {
                let mut v = l.lock();
                v.push(1);
                if v.len() == 64 {
                    v.clear();
                }
            });
        });
    });

    group.finish();
}

fn bench_logging_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Logging Comparison");
    group.sample_size(10); // Fewer samples due to I/O operations

    let dir = tempdir().unwrap();

    group.bench_function("spinlog_memory", |b| {
        let log = Log::with_parts(
            LogConfig::default().with_verbosity(Priority::None),
            NullConsole,
            spinlog::clock::LocalClock,
        );
        b.iter(|| {
            for i in 0..ITERATIONS {
                log_record!(log, Priority::Message, "Test perf: iteration=", i, " value=", 25.5);
            }
            black_box(log.get_new_logs().len())
        });
    });

    let spinlog_file = dir.path().join("spinlog.log");
    group.bench_function("spinlog_file", |b| {
        let log = Log::with_parts(
            LogConfig::default()
                .with_verbosity(Priority::None)
                .with_file_path(&spinlog_file)
                .with_log_to_file(true),
            NullConsole,
            spinlog::clock::LocalClock,
        );
        b.iter(|| {
            for i in 0..ITERATIONS / 10 {
                log_record!(log, Priority::Message, "Test perf: iteration=", i, " value=", 25.5);
            }
        });
    });

    let traditional_log_file = dir.path().join("traditional.log").to_str().unwrap().to_string();
    setup_log4rs(&traditional_log_file);
    group.bench_function("log4rs_file", |b| {
        b.iter(|| {
            for i in 0..ITERATIONS / 10 {
                info!("Test perf: iteration={} value={}", i, 25.5);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_locks, bench_logging_comparison);
criterion_main!(benches);
