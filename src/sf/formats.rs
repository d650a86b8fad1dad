//! Output formats for compiled documents
//!
//! Two inspection formats: JSON (stable, machine-readable) and treeviz (a
//! one-line-per-node indented listing for quick scanning).

pub mod json;
pub mod treeviz;

pub use json::{elements_to_json, nodes_to_json};
pub use treeviz::render_tree;
