//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `modelgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `NameFormatter`: Model name → output file name
//!   - `DiagnosticSink`: Verbose phase messages
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (The CLI calls `TemplateWriter` directly)

pub mod output;

pub use output::{DiagnosticSink, Filesystem, NameFormatter};
