//! Application layer errors.
//!
//! These errors represent failures at the ports (file system, locks), not
//! request validation. Validation errors are `DomainError` from `crate::domain`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while the writer talks to its collaborators.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A file system operation failed.
    #[error("Failed to {operation} {path}: {reason}")]
    Io {
        path: PathBuf,
        operation: &'static str,
        kind: io::ErrorKind,
        reason: String,
    },

    /// The current working directory could not be determined.
    #[error("Cannot determine current directory: {reason}")]
    CurrentDir { kind: io::ErrorKind, reason: String },

    /// Adapter state access failed (lock poisoned).
    #[error("Adapter state is unavailable")]
    StateLockError,
}

impl ApplicationError {
    /// Wrap an `io::Error` raised while performing `operation` on `path`.
    pub fn io(path: impl Into<PathBuf>, operation: &'static str, err: &io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation,
            kind: err.kind(),
            reason: err.to_string(),
        }
    }

    /// The underlying I/O error kind, if this error came from I/O.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Io { kind, .. } | Self::CurrentDir { kind, .. } => Some(*kind),
            Self::StateLockError => None,
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Io { path, kind, .. } => {
                let mut out = vec![format!("Failed to access: {}", path.display())];
                if *kind == io::ErrorKind::PermissionDenied {
                    out.push("Check that you have write permissions".into());
                } else {
                    out.push("Check that the working directory is writable".into());
                }
                out
            }
            Self::CurrentDir { .. } => vec![
                "The working directory may have been removed".into(),
                "cd into an existing directory and try again".into(),
            ],
            Self::StateLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Internal
    }
}
