//! JSON output format
//!
//! Pretty-printed serialization of the element sequence or a resolved inline
//! tree. Option maps serialize in insertion order and NaN option values as
//! null, so the output is a deterministic function of the source text.

use crate::sf::ast::{Element, FormatNode};

/// Serialize an element sequence as pretty JSON.
pub fn elements_to_json(elements: &[Element]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(elements)
}

/// Serialize a resolved inline tree as pretty JSON.
pub fn nodes_to_json(nodes: &[FormatNode]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(nodes)
}
