// ============================================================================
// domain/error.rs - REQUEST AND TEMPLATE ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so callers can keep the last failure around)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    /// A required argument was missing or empty.
    #[error("Invalid argument '{argument}': {message}")]
    InvalidArgument {
        argument: &'static str,
        message: String,
    },

    /// An argument was present but not of the expected kind (e.g. not UTF-8 text).
    #[error("Type mismatch for '{argument}': expected {expected}")]
    TypeMismatch {
        argument: &'static str,
        expected: &'static str,
    },

    /// A `$` in the template did not start a valid placeholder.
    #[error("Invalid placeholder in template: line {line}, column {column}")]
    MalformedPlaceholder { line: usize, column: usize },

    /// The formatted output name would leave the current directory.
    #[error("Output file name '{name}' must stay inside the current directory")]
    UnsafeFileName { name: String },
}

impl DomainError {
    pub(crate) fn missing(argument: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            message: message.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidArgument { argument, .. } => vec![
                format!("Provide a non-empty value for '{}'", argument),
                "Empty templates and empty model names are rejected".into(),
            ],
            Self::TypeMismatch { argument, expected } => vec![
                format!("'{}' must be {}", argument, expected),
                "Convert the template file to UTF-8 and try again".into(),
            ],
            Self::MalformedPlaceholder { line, column } => vec![
                format!("Check the '$' at line {}, column {}", line, column),
                "Placeholders look like $mod, $modlc, $date, $year or ${mod}".into(),
                "Write $$ for a literal dollar sign".into(),
            ],
            Self::UnsafeFileName { name } => vec![
                format!("'{}' is absolute or contains '.' / '..' segments", name),
                "The name formatter must return a path relative to the current directory".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. }
            | Self::TypeMismatch { .. }
            | Self::UnsafeFileName { .. } => ErrorCategory::Validation,
            Self::MalformedPlaceholder { .. } => ErrorCategory::Template,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
}
