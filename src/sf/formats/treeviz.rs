//! Treeviz output format
//!
//! One line per node, structure encoded as 2-space indentation, an icon per
//! node kind, labels truncated for quick scanning:
//!
//!   ¶ big 'SF'
//!   ⊤ title (2 style options)
//!   § title
//!     ¶ img './react.png'
//!     ¶ format 'Quaestio VIII...'
//!       ◦ plain 'Quaestio '
//!       𝐁 bold
//!         ◦ bold 'VIII'
//!
//! Icons: command ¶, container start ⊤, container §, run ◦, groups 𝐁 / 𝐼 /
//! and U for underline-bearing flag sets (first set flag wins).

use crate::sf::ast::{Command, Element, FormatFlags, FormatNode};
use crate::sf::inlines::{resolve_inline, ResolveError};
use crate::sf::scanning::DEFAULT_TAG;

const LABEL_MAX_CHARS: usize = 30;

/// Render an element sequence as indented tree text.
///
/// Textual (`format`) payloads are resolved inline, so the fragment ceiling
/// can surface here.
pub fn render_tree(elements: &[Element]) -> Result<String, ResolveError> {
    let mut out = String::new();
    for element in elements {
        match element {
            Element::Command(command) => render_command(&mut out, command, 0)?,
            Element::ContainerStart { name, style } => {
                push_line(
                    &mut out,
                    0,
                    '⊤',
                    &format!("{} ({} style options)", name, style.len()),
                );
            }
            Element::Container { name, children } => {
                push_line(&mut out, 0, '§', name);
                for child in children {
                    render_command(&mut out, child, 1)?;
                }
            }
        }
    }
    Ok(out)
}

fn render_command(out: &mut String, command: &Command, depth: usize) -> Result<(), ResolveError> {
    push_line(out, depth, '¶', &format!("{} '{}'", command.tag, command.data));
    if command.tag == DEFAULT_TAG {
        for node in resolve_inline(&command.data)? {
            render_node(out, &node, depth + 1);
        }
    }
    Ok(())
}

fn render_node(out: &mut String, node: &FormatNode, depth: usize) {
    match node {
        FormatNode::Run(run) => {
            push_line(out, depth, '◦', &format!("{} '{}'", run.flags, run.text));
        }
        FormatNode::Group(group) => {
            push_line(out, depth, group_icon(group.flags), &group.flags.to_string());
            for child in &group.children {
                render_node(out, child, depth + 1);
            }
        }
    }
}

fn group_icon(flags: FormatFlags) -> char {
    if flags.contains(FormatFlags::BOLD) {
        '𝐁'
    } else if flags.contains(FormatFlags::ITALIC) {
        '𝐼'
    } else {
        'U'
    }
}

fn push_line(out: &mut String, depth: usize, icon: char, label: &str) {
    let flat: String = label
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push(icon);
    out.push(' ');
    out.push_str(&truncate(&flat, LABEL_MAX_CHARS));
    out.push('\n');
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated: String = s.chars().take(max_chars).collect();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}
