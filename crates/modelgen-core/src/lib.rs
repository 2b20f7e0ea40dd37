//! modelgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the modelgen
//! template writer, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          modelgen-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Service             │
//! │            (TemplateWriter)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, NameFormatter, Diagnostic) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    modelgen-adapters (Infrastructure)   │
//! │ (LocalFilesystem, SnakeCaseFormatter..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (TemplateRequest, SubstitutionContext)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use modelgen_core::application::TemplateWriter;
//!
//! let mut writer = TemplateWriter::new(formatter, filesystem, sink, false);
//! writer.write("class $mod:\n    pass\n", "Invoice", false).unwrap();
//! assert!(writer.check_status());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        RenderedModel, TemplateWriter, WriteOutcome,
        ports::{DiagnosticSink, Filesystem, NameFormatter},
    };
    pub use crate::domain::{FileMode, SubstitutionContext, TemplateRequest};
    pub use crate::error::{ModelgenError, ModelgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
