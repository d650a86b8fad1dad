//! Inline format resolution tests
//!
//! Pins the resolved run sequences for flat and nested marker use, the
//! escape-parity rules, and the fragment ceiling. A single space just inside
//! a delimiter is padding and never part of the styled text.

use sf::sf::ast::{FormatFlags, FormatGroup, FormatNode};
use sf::sf::inlines::{resolve_inline, ResolveError};
use sf::sf::pipeline::parse_commands;

fn run(text: &str, flags: FormatFlags) -> FormatNode {
    FormatNode::run(text, flags)
}

fn group(flags: FormatFlags, children: Vec<FormatNode>) -> FormatNode {
    FormatNode::Group(FormatGroup { flags, children })
}

#[test]
fn flat_bold_then_italic() {
    // only the single space just inside a delimiter is padding; the space
    // after a closing delimiter stays with the following plain run, so the
    // middle and trailing runs carry their leading space
    let nodes = resolve_inline(r"plain \B bold \B plain \I it \I end").unwrap();
    assert_eq!(
        nodes,
        vec![
            run("plain ", FormatFlags::NONE),
            group(FormatFlags::BOLD, vec![run("bold", FormatFlags::BOLD)]),
            run(" plain ", FormatFlags::NONE),
            group(FormatFlags::ITALIC, vec![run("it", FormatFlags::ITALIC)]),
            run(" end", FormatFlags::NONE),
        ]
    );
}

#[test]
fn nested_italic_inside_bold() {
    let nodes = resolve_inline(r"\B outer \I inner \I still-bold \B").unwrap();
    let bold_italic = FormatFlags::BOLD | FormatFlags::ITALIC;
    assert_eq!(
        nodes,
        vec![group(
            FormatFlags::BOLD,
            vec![
                run("outer ", FormatFlags::BOLD),
                group(bold_italic, vec![run("inner", bold_italic)]),
                run(" still-bold", FormatFlags::BOLD),
            ],
        )]
    );
}

#[test]
fn tie_breaks_prefer_bold_then_italic_then_underline() {
    // all three types have pairs; bold opens first in the text
    let nodes = resolve_inline(r"\B b \B\I i \I\U u \U").unwrap();
    assert_eq!(nodes.len(), 3);
    assert!(matches!(&nodes[0], FormatNode::Group(g) if g.flags == FormatFlags::BOLD));
    assert!(matches!(&nodes[1], FormatNode::Group(g) if g.flags == FormatFlags::ITALIC));
    assert!(matches!(&nodes[2], FormatNode::Group(g) if g.flags == FormatFlags::UNDERLINE));
}

#[test]
fn underline_markers_resolve() {
    let nodes = resolve_inline(r"a \U u \U b").unwrap();
    assert_eq!(
        nodes,
        vec![
            run("a ", FormatFlags::NONE),
            group(FormatFlags::UNDERLINE, vec![run("u", FormatFlags::UNDERLINE)]),
            run(" b", FormatFlags::NONE),
        ]
    );
}

#[test]
fn escape_parity_controls_marker_activation() {
    // \\B is a literal backslash then B; no pair forms
    assert_eq!(
        resolve_inline(r"x \\B y \\B z").unwrap(),
        vec![run(r"x \B y \B z", FormatFlags::NONE)]
    );

    // \\\B is a literal backslash then an active marker
    let nodes = resolve_inline(r"\\\B y \\\B").unwrap();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0], run(r"\", FormatFlags::NONE));
    assert!(matches!(&nodes[1], FormatNode::Group(g) if g.flags == FormatFlags::BOLD));
}

#[test]
fn doubled_backslashes_collapse_in_leaves() {
    assert_eq!(
        resolve_inline(r"a \\ b").unwrap(),
        vec![run(r"a \ b", FormatFlags::NONE)]
    );
}

#[test]
fn fragment_ceiling_is_fatal_above_100() {
    // each repetition yields a group, its inner run, and a separator run
    let over = r"\B x \B ".repeat(34);
    assert_eq!(resolve_inline(&over), Err(ResolveError::TooManyFragments));

    let within = r"\B x \B ".repeat(33);
    assert!(resolve_inline(&within).is_ok());
}

#[test]
fn user_escaped_markers_stay_literal_through_the_pipeline() {
    // a doubled backslash in the source literal shields the marker letter:
    // the parser keeps the pair doubled, resolution sees an odd backslash
    // count and leaves the marker inactive, and the pair collapses in the
    // emitted leaf
    let commands = parse_commands(r#""x \\B y \\B z";"#, |_| {});
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].data, r"x \\B y \\B z");

    let nodes = resolve_inline(&commands[0].data).unwrap();
    assert_eq!(nodes, vec![run(r"x \B y \B z", FormatFlags::NONE)]);
}

#[test]
fn resolution_is_deterministic() {
    let text = r"mix \B b \I i \I \B \U u \U tail";
    assert_eq!(resolve_inline(text).unwrap(), resolve_inline(text).unwrap());
}
