//! Element tree building
//!
//! Groups the flat command sequence into top-level commands and one-level
//! named containers, enforcing the document-size ceiling.

pub mod builder;

pub use builder::{build_elements, CompileError, CONTAINER_END_TAG, CONTAINER_START_TAG, MAX_COMMANDS};
