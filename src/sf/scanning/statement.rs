//! Statement parser
//!
//! Extracts tag, quoted data literal, and raw option-list from one statement
//! substring with a single anchored match. A statement whose shape does not
//! match is dropped silently, consistent with the tolerant compiler policy.

use super::escapes::decode_data;
use super::options::parse_options;
use crate::sf::ast::Command;
use once_cell::sync::Lazy;
use regex::Regex;

/// Tag used when a statement has no leading tag token.
pub const DEFAULT_TAG: &str = "format";

/// Reserved tag whose data names the document background color. The
/// statement is reported through the side channel and yields no command.
pub const BACKGROUND_TAG: &str = "bg";

/// Anchored statement shape: optional indentation, optional tag token,
/// quoted literal (line-continuation backslashes tolerated before it),
/// optional single-line option list, terminating semicolon.
static STATEMENT_PARTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^[\s\\]*(\S*?)[\s\\]*"((?:[^"\\]|\\.)*)"(?:[\s\\]*(.*))?;"#).unwrap()
});

/// Parse one statement substring into a `Command`.
///
/// Returns `None` when the statement does not match the anchored shape, and
/// for `bg` statements, which are routed to `on_background` instead.
pub fn parse_statement(statement: &str, on_background: &mut dyn FnMut(&str)) -> Option<Command> {
    let caps = STATEMENT_PARTS.captures(statement)?;

    let tag = match &caps[1] {
        "" => DEFAULT_TAG,
        tag => tag,
    };
    let data = decode_data(&caps[2]);

    if tag == BACKGROUND_TAG {
        on_background(&data);
        return None;
    }

    let options = caps
        .get(3)
        .map(|m| parse_options(m.as_str()))
        .unwrap_or_default();

    Some(Command {
        tag: tag.to_string(),
        data,
        options,
    })
}
