//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use stackup_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{StackupError, StackupResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same state, so a test can hand one clone to a service
/// and inspect another afterwards.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.directories.contains(path)
    }

    fn require_parent(&self, path: &Path) -> StackupResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.directories.contains(parent) => {
                Err(fs_error(path, "Parent directory does not exist"))
            }
            _ => Ok(()),
        }
    }

    fn require_dir(&self, path: &Path) -> StackupResult<()> {
        if self.directories.contains(path) {
            Ok(())
        } else {
            Err(fs_error(path, "Not a directory"))
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Write a file, creating any missing parent directories.
    pub fn seed_file(&self, path: &Path, content: &str) -> StackupResult<()> {
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }
        self.write_file(path, content)
    }

    fn write(&self) -> StackupResult<std::sync::RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }

    fn read(&self) -> StackupResult<std::sync::RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir(&self, path: &Path) -> StackupResult<()> {
        let mut inner = self.write()?;

        if inner.exists(path) {
            return Err(fs_error(path, "Already exists"));
        }
        inner.require_parent(path)?;
        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> StackupResult<()> {
        let mut inner = self.write()?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(fs_error(&current, "A file is in the way"));
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> StackupResult<()> {
        let mut inner = self.write()?;

        inner.require_parent(path)?;
        if inner.directories.contains(path) {
            return Err(fs_error(path, "Is a directory"));
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> StackupResult<()> {
        let mut inner = self.write()?;

        let content = inner
            .files
            .get(from)
            .cloned()
            .ok_or_else(|| fs_error(from, "Source file does not exist"))?;
        inner.require_parent(to)?;
        inner.files.insert(to.to_path_buf(), content);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> StackupResult<()> {
        let mut inner = self.write()?;

        inner.require_dir(path)?;
        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.exists(path))
            .unwrap_or(false)
    }

    fn read_dir(&self, path: &Path) -> StackupResult<Vec<String>> {
        let inner = self.read()?;

        inner.require_dir(path)?;
        let names: BTreeSet<String> = inner
            .directories
            .iter()
            .chain(inner.files.keys())
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        Ok(names.into_iter().collect())
    }

    fn clear_dir(&self, path: &Path) -> StackupResult<()> {
        let mut inner = self.write()?;

        inner.require_dir(path)?;
        inner
            .directories
            .retain(|p| p == path || !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}

fn fs_error(path: &Path, reason: &str) -> StackupError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
    .into()
}
