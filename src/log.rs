use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use once_cell::sync::Lazy;
use chrono::Local;

static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// Directory log files are written to
pub fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".rowpick")
        .join("logs")
}

/// Initialize logging to a file
pub fn init() -> std::io::Result<PathBuf> {
    init_in(&log_dir())
}

/// Initialize logging to a timestamped file inside `dir`
pub fn init_in(dir: &std::path::Path) -> std::io::Result<PathBuf> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");

    std::fs::create_dir_all(dir)?;

    let log_path = dir.join(format!("rowpick_{}.log", timestamp));

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)?;

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(file);
    }

    log("=== rowpick started ===");

    Ok(log_path)
}

/// Whether a log file is currently open
pub fn is_enabled() -> bool {
    LOG_FILE.lock().map(|guard| guard.is_some()).unwrap_or(false)
}

/// Log a message with timestamp
pub fn log(msg: &str) {
    let timestamp = Local::now().format("%H:%M:%S%.3f");
    let line = format!("[{}] {}\n", timestamp, msg);

    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }
}

/// Log a navigation event
pub fn log_event(event: &str) {
    log(&format!("[NAV] {}", event));
}
