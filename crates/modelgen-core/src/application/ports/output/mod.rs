//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the template writer needs from external systems.
//! The `modelgen-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::FileMode;
use crate::error::ModelgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `modelgen_adapters::filesystem::LocalFilesystem` (production)
/// - `modelgen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Directory output files are written into.
    fn current_dir(&self) -> ModelgenResult<PathBuf>;

    /// Write content to a file, replacing any existing file.
    fn write_file(&self, path: &Path, content: &str) -> ModelgenResult<()>;

    /// Set the file's permission bits.
    fn set_mode(&self, path: &Path, mode: FileMode) -> ModelgenResult<()>;
}

/// Port deriving an output file name from a model name.
///
/// An empty return value means "write nothing for this model".
pub trait NameFormatter: Send + Sync {
    fn format_name(&self, model_name: &str) -> String;
}

/// Advisory diagnostics sink.
///
/// Receives phase messages tagged with the emitting component. Implementations
/// must not fail and must not influence what the writer does.
pub trait DiagnosticSink: Send + Sync {
    fn verbose_message(&self, tag: &str, enabled: bool, parts: &[&str]);
}
