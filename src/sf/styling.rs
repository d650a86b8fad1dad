//! Declarative option-to-style binding
//!
//! Fixed tables map option keys to one or more target style attributes,
//! gated by accepted value types and optionally passed through a transform.
//! Tag families compose the shared base table with tag-specific extensions.

pub mod binder;
pub mod bindings;

pub use binder::StyleBinder;
pub use bindings::{Binding, TypeSet};
