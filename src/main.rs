use std::env;
use std::thread;
use std::time::Duration;

use spinlog::{log_message, Log, LogBridge, Priority};

/// Spawns a few producer threads and polls the facility the way a monitoring
/// UI would, printing how many new entries each poll picked up.
fn main() {
    let producers = env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(4);

    if let Err(err) = LogBridge::global().install_with_tracing(log::LevelFilter::Debug) {
        eprintln!("log crate bridge not installed: {}", err);
    }
    let log = Log::get();

    let handles: Vec<_> = (0..producers)
        .map(|id| {
            thread::spawn(move || {
                for frame in 0..25u32 {
                    let priority = match frame % 10 {
                        9 => Priority::Warning,
                        0 => Priority::Debugging,
                        _ => Priority::Message,
                    };
                    log_message!(priority, "producer ", id, " frame ", frame);
                    thread::sleep(Duration::from_millis(2));
                }
                log::info!("producer {} done", id);
            })
        })
        .collect();

    let mut received = 0;
    while handles.iter().any(|h| !h.is_finished()) {
        received += log.get_new_logs().len();
        thread::sleep(Duration::from_millis(20));
    }
    for handle in handles {
        if handle.join().is_err() {
            tracing::error!("producer thread panicked");
        }
    }
    received += log.get_new_logs().len();

    tracing::info!(
        received,
        retained = log.get_full_logs().len(),
        warnings = log.get_logs(&[Priority::Warning]).len(),
        "monitor finished"
    );
}
