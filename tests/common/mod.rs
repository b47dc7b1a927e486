// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helpers for building throwaway configuration directories.

use std::path::Path;
use std::sync::OnceLock;
use tempfile::TempDir;

static TRACING: OnceLock<()> = OnceLock::new();

/// Routes `tracing` output through the test harness, once per test binary.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// A temporary configuration directory, removed when dropped.
pub struct ConfDir {
    dir: TempDir,
}

#[allow(dead_code)]
impl ConfDir {
    /// Creates an empty configuration directory.
    pub fn new() -> Self {
        init_tracing();
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Writes a file relative to the directory, creating parent directories.
    pub fn with_file(self, name: &str, content: &str) -> Self {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
        self
    }

    /// Returns the directory path.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
