// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for modelgen.
//!
//! This module contains pure logic with no I/O. File system access, name
//! formatting and diagnostics are reached through ports defined in the
//! application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: requests and contexts are built once and read
pub mod error;
pub mod permissions;
pub mod request;
pub mod substitution;

pub use error::{DomainError, ErrorCategory};
pub use permissions::FileMode;
pub use request::TemplateRequest;
pub use substitution::SubstitutionContext;
