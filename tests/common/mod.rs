//! FILENAME: tests/common/mod.rs
//! Shared test harness for the storage bridge integration tests.

use std::path::PathBuf;

use tempfile::TempDir;

/// Test harness owning a temporary directory with a storage root inside it.
/// The root itself is NOT created up front: the bridge is responsible for
/// creating it on the first write.
pub struct StorageHarness {
    _dir: TempDir,
    pub root: PathBuf,
}

impl StorageHarness {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let root = dir.path().join(".tasks");
        StorageHarness { _dir: dir, root }
    }

    /// Harness variant where the storage root already exists on disk.
    pub fn with_existing_root() -> Self {
        let harness = Self::new();
        std::fs::create_dir_all(&harness.root).expect("failed to create storage root");
        harness
    }
}
