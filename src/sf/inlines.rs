//! Inline bold/italic/underline resolution
//!
//! Textual payloads carry `\B`, `\I`, `\U` escape markers used as paired
//! open/close toggles; the resolver turns such text into a nested tree of
//! styled runs.

pub mod resolver;

pub use resolver::{resolve_inline, ResolveError, MAX_FRAGMENTS};
