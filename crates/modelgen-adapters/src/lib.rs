//! Infrastructure adapters for modelgen.
//!
//! This crate implements the ports defined in `modelgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod diagnostics;
pub mod filesystem;
pub mod formatter;

// Re-export commonly used adapters
pub use diagnostics::{RecordedMessage, RecordingSink, TracingSink};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use formatter::SnakeCaseFormatter;
