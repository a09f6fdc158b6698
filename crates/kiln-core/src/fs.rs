//! File-system seam.
//!
//! The front end only ever asks one question of the file system - whether a
//! script candidate exists - so that is the whole interface. The task-graph
//! engine behind the [`crate::engine`] seam brings its own richer
//! abstraction.

use std::path::Path;

/// Existence checks for build script discovery.
pub trait FileSystem: Send + Sync {
    fn file_exists(&self, path: &Path) -> bool;
}

/// The process's real file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFileSystem;

impl FileSystem for NativeFileSystem {
    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_file_system_checks_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("build.kiln");

        let fs = NativeFileSystem;
        assert!(!fs.file_exists(&file));

        std::fs::write(&file, "").unwrap();
        assert!(fs.file_exists(&file));

        // Directories are not scripts.
        assert!(!fs.file_exists(dir.path()));
    }
}
