//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports. There is one use case:
//! "write this template for this model".

pub mod template_writer;

pub use template_writer::{RenderedModel, TemplateWriter, WriteOutcome};
