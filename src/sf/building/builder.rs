//! Element tree builder
//!
//! Walks the command sequence with at-most-one-container-open state. While a
//! container is open, further `cstart` statements become ordinary member
//! commands rather than nested containers; a `cend` carrying the open
//! container's name closes it. An unclosed container is force-closed at end
//! of input with whatever members accumulated.

use crate::sf::ast::{Command, Element};
use std::fmt;

/// Tag opening a container; its data is the container name, its options the
/// container style.
pub const CONTAINER_START_TAG: &str = "cstart";

/// Tag closing the container whose name matches its data.
pub const CONTAINER_END_TAG: &str = "cend";

/// Ceiling on commands processed in one parse.
pub const MAX_COMMANDS: usize = 100;

/// Fatal compile errors. Everything else in the compiler degrades
/// tolerantly; only the resource ceilings propagate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    DocumentTooLarge { commands: usize },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::DocumentTooLarge { commands } => write!(
                f,
                "document too large: {} commands exceed the limit of {}",
                commands, MAX_COMMANDS
            ),
        }
    }
}

impl std::error::Error for CompileError {}

/// Group commands into an ordered element sequence.
///
/// Also the entry point for externally supplied pre-parsed command
/// sequences, as used for recursive container rendering.
pub fn build_elements(
    commands: impl IntoIterator<Item = Command>,
) -> Result<Vec<Element>, CompileError> {
    let mut elements = Vec::new();
    let mut open: Option<(String, Vec<Command>)> = None;
    let mut seen = 0usize;

    for command in commands {
        seen += 1;
        if seen > MAX_COMMANDS {
            return Err(CompileError::DocumentTooLarge { commands: seen });
        }

        let closes_open = matches!(&open, Some((name, _))
            if command.tag == CONTAINER_END_TAG && command.data == *name);

        if closes_open {
            if let Some((name, children)) = open.take() {
                elements.push(Element::Container { name, children });
            }
        } else if let Some((_, members)) = open.as_mut() {
            members.push(command);
        } else if command.tag == CONTAINER_START_TAG {
            elements.push(Element::ContainerStart {
                name: command.data.clone(),
                style: command.options,
            });
            open = Some((command.data, Vec::new()));
        } else {
            elements.push(Element::Command(command));
        }
    }

    if let Some((name, children)) = open {
        elements.push(Element::Container { name, children });
    }

    Ok(elements)
}
