//! Application layer for modelgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (TemplateWriter)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Request validation and substitution rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{RenderedModel, TemplateWriter, WriteOutcome};

// Re-export port traits (for adapter implementation)
pub use ports::{DiagnosticSink, Filesystem, NameFormatter};

pub use error::ApplicationError;
