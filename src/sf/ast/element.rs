//! Element tree produced by the builder

use super::command::{Command, ValueMap};
use serde::Serialize;
use std::fmt;

/// One node of the grouped document tree.
///
/// Containers nest only one level deep: a `ContainerStart` marks where a
/// container opened (carrying its style options), and the matching
/// `Container` carries the member commands accumulated until it closed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    Command(Command),
    ContainerStart { name: String, style: ValueMap },
    Container { name: String, children: Vec<Command> },
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Command(command) => write!(f, "{}", command),
            Element::ContainerStart { name, .. } => write!(f, "ContainerStart('{}')", name),
            Element::Container { name, children } => {
                write!(f, "Container('{}', {} children)", name, children.len())
            }
        }
    }
}
