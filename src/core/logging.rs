//! File-backed logging for TUI mode.
//!
//! The terminal belongs to ratatui while the dashboard runs, so every log
//! line goes to a daily-rolling JSON file under the app data directory.
//! Standard `log` macros are bridged into `tracing`.

use std::fs;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "water-tests.log";

/// Directory holding the rolling log files.
pub fn log_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("water-tests").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Initialize file-only logging.
///
/// Returns a `WorkerGuard` that must live until shutdown so buffered lines
/// are flushed.
pub fn init_tui() -> WorkerGuard {
    let log_dir = log_dir();

    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(true)
        .with_filter(env_filter);

    // No stdout layer: the TUI owns the terminal
    tracing_subscriber::registry().with(file_layer).init();

    // No-op when tracing-subscriber's own `tracing-log` feature already
    // installed the bridge
    let _ = tracing_log::LogTracer::init();

    let log_dir_clone = log_dir.clone();
    std::thread::spawn(move || {
        compress_old_logs(&log_dir_clone);
    });

    log::info!(
        "Logging initialized. Writing to: {:?} (daily rolling)",
        log_dir.join(LOG_FILE_PREFIX)
    );

    guard
}

/// Rolled files from earlier days that haven't been gzipped yet.
fn should_compress(file_name: &str, today_suffix: &str) -> bool {
    file_name
        .strip_prefix(LOG_FILE_PREFIX)
        .and_then(|rest| rest.strip_prefix('.'))
        .is_some_and(|date| date != today_suffix && !date.ends_with(".gz"))
}

/// Date suffix of the file the appender is writing right now.
///
/// `rolling::daily` names files by UTC date, so this must too.
fn today_suffix() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

fn compress_old_logs(log_dir: &Path) {
    let today_suffix = today_suffix();

    let Ok(entries) = fs::read_dir(log_dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !should_compress(name, &today_suffix) {
            continue;
        }
        match compress_file(&path) {
            Ok(CompressOutcome::Compressed) => log::info!("Compressed old log: {:?}", path),
            Ok(CompressOutcome::ArchiveExists) => log::warn!(
                "Archive for {:?} already exists; leaving the uncompressed log in place",
                path
            ),
            Err(e) => log::warn!("Failed to compress old log {:?}: {}", path, e),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompressOutcome {
    Compressed,
    /// A `.gz` with the same name is already there; nothing was touched.
    ArchiveExists,
}

fn compress_file(path: &Path) -> std::io::Result<CompressOutcome> {
    let mut gz_path = path.as_os_str().to_os_string();
    gz_path.push(".gz");
    let gz_path = PathBuf::from(gz_path);

    if gz_path.exists() {
        return Ok(CompressOutcome::ArchiveExists);
    }

    let file = fs::File::open(path)?;
    let mut reader = std::io::BufReader::new(file);

    let output = fs::File::create(&gz_path)?;
    let mut encoder = GzEncoder::new(output, Compression::default());
    std::io::copy(&mut reader, &mut encoder)?;
    encoder.finish()?;

    fs::remove_file(path)?;
    Ok(CompressOutcome::Compressed)
}
