//! In-memory filesystem adapter for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use modelgen_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::FileMode,
    error::ModelgenResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to the writer and keep
/// another for assertions.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug)]
struct MemoryFilesystemInner {
    cwd: PathBuf,
    files: HashMap<PathBuf, String>,
    modes: HashMap<PathBuf, FileMode>,
    writes: usize,
}

impl MemoryFilesystem {
    /// Create an empty filesystem whose current directory is `/work`.
    pub fn new() -> Self {
        Self::with_current_dir("/work")
    }

    /// Create an empty filesystem with the given current directory.
    pub fn with_current_dir(cwd: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner {
                cwd: cwd.into(),
                files: HashMap::new(),
                modes: HashMap::new(),
                writes: 0,
            })),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Mode last applied to `path`.
    pub fn mode_of(&self, path: &Path) -> Option<FileMode> {
        let inner = self.inner.read().ok()?;
        inner.modes.get(path).copied()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of `write_file` calls that succeeded.
    pub fn write_count(&self) -> usize {
        self.inner.read().map(|inner| inner.writes).unwrap_or(0)
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn current_dir(&self) -> ModelgenResult<PathBuf> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StateLockError)?;
        Ok(inner.cwd.clone())
    }

    fn write_file(&self, path: &Path, content: &str) -> ModelgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StateLockError)?;

        // Replacing a file resets its mode, like creating it afresh.
        inner.modes.remove(path);
        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.writes += 1;
        Ok(())
    }

    fn set_mode(&self, path: &Path, mode: FileMode) -> ModelgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StateLockError)?;

        if !inner.files.contains_key(path) {
            return Err(ApplicationError::Io {
                path: path.to_path_buf(),
                operation: "set permissions on",
                kind: std::io::ErrorKind::NotFound,
                reason: "No such file".into(),
            }
            .into());
        }

        inner.modes.insert(path.to_path_buf(), mode);
        Ok(())
    }
}
