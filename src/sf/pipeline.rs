//! End-to-end compile pipeline
//!
//! Ties the stages together: scan source into statements, parse statements
//! into commands (routing `bg` statements to the background-color callback),
//! and group commands into the element tree. Parsing is a pure function of
//! the source text; the callback is the only side effect.

use crate::sf::ast::{Command, Element};
use crate::sf::building::{build_elements, CompileError};
use crate::sf::scanning::{parse_statement, scan};

/// Compile source text into an element sequence, discarding background
/// reports.
pub fn compile(source: &str) -> Result<Vec<Element>, CompileError> {
    compile_with(source, |_| {})
}

/// Compile source text, invoking `on_background` once per `bg` statement.
pub fn compile_with<F: FnMut(&str)>(
    source: &str,
    on_background: F,
) -> Result<Vec<Element>, CompileError> {
    build_elements(parse_commands(source, on_background))
}

/// Scan and parse only; tolerant, never fails. Useful when the caller wants
/// the flat command sequence (the builder's size guard applies only when the
/// commands are grouped).
pub fn parse_commands<F: FnMut(&str)>(source: &str, mut on_background: F) -> Vec<Command> {
    scan(source)
        .filter_map(|statement| parse_statement(statement, &mut on_background))
        .collect()
}
