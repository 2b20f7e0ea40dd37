//! Unified error handling for modelgen Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for modelgen Core operations.
#[derive(Debug, Error, Clone)]
pub enum ModelgenError {
    /// Invalid request or template.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Failures reported by adapters (file system).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl ModelgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Template => ErrorCategory::Template,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
    Internal,
}

/// Convenient result type alias.
pub type ModelgenResult<T> = Result<T, ModelgenError>;
