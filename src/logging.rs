//! FILENAME: src/logging.rs
// PURPOSE: Unified logging system shared by the backend and the webview.
// FORMAT: seq|level|category|message

use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use once_cell::sync::Lazy;

/// Global sequence counter shared between frontend and backend
static LOG_SEQ: AtomicU64 = AtomicU64::new(0);

/// Global log file handle
static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// Get next sequence number
pub fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst) + 1
}

/// Initialize the unified log file inside `log_dir`, creating the
/// directory if needed. A previous log from the same location is truncated.
pub fn init_log_file(log_dir: &Path) -> Result<PathBuf, String> {
    if !log_dir.exists() {
        std::fs::create_dir_all(log_dir)
            .map_err(|e| format!("Failed to create log dir at {:?}: {}", log_dir, e))?;
    }

    let log_path = log_dir.join("taskdesk.log");

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&log_path)
        .map_err(|e| format!("Failed to create log file {:?}: {}", log_path, e))?;

    let mut log_file = LOG_FILE
        .lock()
        .map_err(|e| format!("Lock error: {}", e))?;
    *log_file = Some(file);

    Ok(log_path)
}

/// Write a log line in unified format
pub fn write_log(level: &str, category: &str, message: &str) {
    let seq = next_seq();
    let line = format!("{}|{}|{}|{}", seq, level, category, message);

    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            if let Err(e) = writeln!(file, "{}", line) {
                eprintln!("[LOG_ERROR] Failed to write: {}", e);
            }
            let _ = file.flush();
        }
    }

    println!("{}", line);
}

/// Write raw message (already carries its own sequence number)
pub fn write_log_raw(message: &str) {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            if let Err(e) = writeln!(file, "{}", message) {
                eprintln!("[LOG_ERROR] Failed to write: {}", e);
            }
            let _ = file.flush();
        }
    }
    println!("{}", message);
}

// ============================================================================
// TAURI COMMAND HANDLERS FOR LOGGING
// ============================================================================

/// Get next sequence number for frontend logging
#[tauri::command]
pub fn get_next_seq() -> u64 {
    next_seq()
}

/// Write a frontend log message (already formatted with seq)
#[tauri::command]
pub fn log_frontend(message: String) -> Result<(), String> {
    write_log_raw(&message);
    Ok(())
}

/// Write a frontend log message atomically (seq assigned and written together)
#[tauri::command]
pub fn log_frontend_atomic(level: String, category: String, message: String) -> Result<(), String> {
    write_log(&level, &category, &message);
    Ok(())
}

// ============================================================================
// MACRO DEFINITIONS & EXPORTS
// ============================================================================

#[macro_export]
macro_rules! log_debug {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log("D", $cat, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log("I", $cat, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log("W", $cat, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::write_log("E", $cat, &format!($($arg)*))
    };
}

// Re-export the macros so they can be imported via `use crate::logging::log_info;`
pub use log_debug;
pub use log_error;
pub use log_info;
pub use log_warn;
