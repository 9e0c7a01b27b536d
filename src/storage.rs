//! FILENAME: src/storage.rs
// PURPOSE: File access bridge between the privileged process and the webview.
// CONTEXT: All file names resolve root-relative against a single storage root.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tauri::State;

use crate::{log_debug, log_error};

/// Where task files live. Resolved once at startup, immutable afterward.
pub struct StorageState {
    pub root: PathBuf,
}

impl StorageState {
    pub fn new(root: PathBuf) -> Self {
        StorageState { root }
    }
}

/// Default storage root: `.tasks` under the user's home directory.
pub fn default_storage_root(home: &Path) -> PathBuf {
    home.join(".tasks")
}

/// Joins a caller-supplied file name against the storage root.
/// Every bridge operation resolves its target through here; names are
/// root-relative, never taken verbatim.
pub fn resolve_path(root: &Path, file_name: &str) -> PathBuf {
    root.join(file_name)
}

/// Reads the full contents of a file under `root` as UTF-8 text.
pub fn read_text(root: &Path, file_name: &str) -> io::Result<String> {
    fs::read_to_string(resolve_path(root, file_name))
}

/// Writes `data` as UTF-8 text to a file under `root`, creating the root
/// (and any missing intermediate directories) first. An existing file at
/// the target path is overwritten in full.
pub fn write_text(root: &Path, file_name: &str, data: &str) -> io::Result<()> {
    fs::create_dir_all(root)?;
    fs::write(resolve_path(root, file_name), data)
}

// ============================================================================
// TAURI COMMAND HANDLERS
// ============================================================================

#[tauri::command]
pub fn read_file(storage: State<StorageState>, file_name: String) -> Result<String, String> {
    log_debug!("FS", "read_file name={}", file_name);
    read_text(&storage.root, &file_name).map_err(|e| {
        log_error!("FS", "read_file {} failed: {}", file_name, e);
        e.to_string()
    })
}

#[tauri::command]
pub fn write_file(
    storage: State<StorageState>,
    file_name: String,
    data: String,
) -> Result<(), String> {
    log_debug!("FS", "write_file name={} bytes={}", file_name, data.len());
    write_text(&storage.root, &file_name, &data).map_err(|e| {
        log_error!("FS", "write_file {} failed: {}", file_name, e);
        e.to_string()
    })
}
