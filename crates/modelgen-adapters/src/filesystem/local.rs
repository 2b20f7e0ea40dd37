//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use modelgen_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::FileMode,
    error::{ModelgenError, ModelgenResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
///
/// Output goes to the process working directory unless the adapter was
/// created with [`LocalFilesystem::rooted_at`].
#[derive(Debug, Clone, Default)]
pub struct LocalFilesystem {
    root: Option<PathBuf>,
}

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Treat `root` as the current directory instead of the process cwd.
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// Permission bits of an existing file.
    pub fn mode_of(&self, path: &Path) -> ModelgenResult<FileMode> {
        let metadata = std::fs::metadata(path).map_err(|e| map_io_error(path, e, "read metadata of"))?;
        Ok(mode_from_metadata(&metadata))
    }
}

impl Filesystem for LocalFilesystem {
    fn current_dir(&self) -> ModelgenResult<PathBuf> {
        if let Some(root) = &self.root {
            return Ok(root.clone());
        }
        std::env::current_dir().map_err(|e| {
            ApplicationError::CurrentDir {
                kind: e.kind(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> ModelgenResult<()> {
        trace!(path = %path.display(), "Writing file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write"))
    }

    fn set_mode(&self, path: &Path, mode: FileMode) -> ModelgenResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode.bits()))
                .map_err(|e| map_io_error(path, e, "set permissions on"))?;
        }
        #[cfg(not(unix))]
        {
            // Only the read-only flag exists here; a writable mode clears it.
            let metadata =
                std::fs::metadata(path).map_err(|e| map_io_error(path, e, "read metadata of"))?;
            let mut perms = metadata.permissions();
            perms.set_readonly(mode.bits() & 0o200 == 0);
            std::fs::set_permissions(path, perms)
                .map_err(|e| map_io_error(path, e, "set permissions on"))?;
        }
        Ok(())
    }
}

#[cfg(unix)]
fn mode_from_metadata(metadata: &std::fs::Metadata) -> FileMode {
    use std::os::unix::fs::PermissionsExt;
    FileMode::from_bits(metadata.permissions().mode())
}

#[cfg(not(unix))]
fn mode_from_metadata(metadata: &std::fs::Metadata) -> FileMode {
    if metadata.permissions().readonly() {
        FileMode::from_bits(0o444)
    } else {
        FileMode::WORLD_READ_WRITE
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &'static str) -> ModelgenError {
    ApplicationError::io(path, operation, &e).into()
}
