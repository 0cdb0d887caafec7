//! Local filesystem adapter using std::fs.

use std::fs;
use std::io;
use std::path::Path;

use stackup_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{StackupError, StackupResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir(&self, path: &Path) -> StackupResult<()> {
        fs::create_dir(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn create_dir_all(&self, path: &Path) -> StackupResult<()> {
        fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StackupResult<()> {
        fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> StackupResult<()> {
        fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| map_io_error(from, e, "copy file"))
    }

    fn remove_dir_all(&self, path: &Path) -> StackupResult<()> {
        fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_dir(&self, path: &Path) -> StackupResult<Vec<String>> {
        let entries = fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory"))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn clear_dir(&self, path: &Path) -> StackupResult<()> {
        let entries = fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;

        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory"))?;
            let target = entry.path();
            let is_dir = entry
                .file_type()
                .map_err(|e| map_io_error(&target, e, "inspect entry"))?
                .is_dir();

            if is_dir {
                fs::remove_dir_all(&target)
                    .map_err(|e| map_io_error(&target, e, "remove directory"))?;
            } else {
                fs::remove_file(&target).map_err(|e| map_io_error(&target, e, "remove file"))?;
            }
        }
        Ok(())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> StackupError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
