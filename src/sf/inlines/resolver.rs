//! Inline delimiter resolver
//!
//! Markers `\B`, `\I`, `\U` toggle bold, italic, and underline. A marker
//! occurrence is active exactly when preceded by an even number of
//! consecutive backslashes: `\B` is a marker, `\\B` a literal backslash then
//! the letter B, `\\\B` a literal backslash then a marker, and so on by
//! parity.
//!
//! Resolution scans for the earliest open/close pair among the three marker
//! types (ties break Bold, Italic, Underline), emits the text before it as a
//! plain leaf, recurses into the pair's inner text with the flag set
//! extended, and continues past the closing marker. Candidates for the other
//! types that fell entirely inside the consumed span belong to the recursive
//! call and are re-searched from just past it. A single space immediately
//! inside a delimiter is padding, not content.
//!
//! Search offsets only move forward, so the work is bounded by the number of
//! delimiters rather than the square of the input length.

use crate::sf::ast::{FormatFlags, FormatGroup, FormatNode, FormatRun};
use std::fmt;

/// Ceiling on runs and groups produced for one payload.
pub const MAX_FRAGMENTS: usize = 100;

/// Fatal resolver error: the fragment ceiling converts pathological input
/// into a reported condition instead of unbounded growth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    TooManyFragments,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::TooManyFragments => write!(
                f,
                "inline format produced more than {} fragments",
                MAX_FRAGMENTS
            ),
        }
    }
}

impl std::error::Error for ResolveError {}

/// The three marker types, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Bold,
    Italic,
    Underline,
}

impl Marker {
    const ALL: [Marker; 3] = [Marker::Bold, Marker::Italic, Marker::Underline];

    fn letter(self) -> u8 {
        match self {
            Marker::Bold => b'B',
            Marker::Italic => b'I',
            Marker::Underline => b'U',
        }
    }

    fn flag(self) -> FormatFlags {
        match self {
            Marker::Bold => FormatFlags::BOLD,
            Marker::Italic => FormatFlags::ITALIC,
            Marker::Underline => FormatFlags::UNDERLINE,
        }
    }
}

/// A well-formed open/close marker pair. Offsets are bytes into the scanned
/// text; marker and padding bytes are ASCII, so all of them sit on character
/// boundaries.
#[derive(Debug, Clone, Copy)]
struct Region {
    start: usize,
    inner_start: usize,
    inner_end: usize,
    end: usize,
}

/// Resolve a textual payload into an ordered run/group sequence.
pub fn resolve_inline(text: &str) -> Result<Vec<FormatNode>, ResolveError> {
    let mut produced = 0;
    resolve(text, FormatFlags::NONE, &mut produced)
}

fn resolve(
    text: &str,
    flags: FormatFlags,
    produced: &mut usize,
) -> Result<Vec<FormatNode>, ResolveError> {
    let mut nodes = Vec::new();
    let mut cursor = 0;
    let mut candidates: [Option<Region>; 3] = [None; 3];
    let mut reload = [true; 3];
    let mut reload_from = [0usize; 3];

    loop {
        for (slot, marker) in Marker::ALL.iter().enumerate() {
            if reload[slot] {
                candidates[slot] = find_region(text, *marker, reload_from[slot]);
                reload[slot] = false;
            }
        }

        let mut selected: Option<(usize, Region, Marker)> = None;
        for (slot, marker) in Marker::ALL.iter().enumerate() {
            if let Some(region) = candidates[slot] {
                let earlier = selected
                    .map_or(true, |(_, best, _)| region.start < best.start);
                if earlier {
                    selected = Some((slot, region, *marker));
                }
            }
        }

        let Some((slot, region, marker)) = selected else {
            if cursor < text.len() {
                push_leaf(&mut nodes, &text[cursor..], flags, produced)?;
            }
            return Ok(nodes);
        };

        if region.start > cursor {
            push_leaf(&mut nodes, &text[cursor..region.start], flags, produced)?;
        }

        let group_flags = flags.with(marker.flag());
        *produced += 1;
        if *produced > MAX_FRAGMENTS {
            return Err(ResolveError::TooManyFragments);
        }
        let inner = &text[region.inner_start..region.inner_end];
        let children = resolve(inner, group_flags, produced)?;
        nodes.push(FormatNode::Group(FormatGroup {
            flags: group_flags,
            children,
        }));

        cursor = region.end;
        reload[slot] = true;
        reload_from[slot] = cursor;

        // A candidate swallowed by the recursion belongs to it, not to this
        // scan; look for that type again past the consumed span.
        for other in 0..Marker::ALL.len() {
            if other == slot {
                continue;
            }
            if let Some(candidate) = candidates[other] {
                if candidate.end <= cursor {
                    reload[other] = true;
                    reload_from[other] = cursor;
                }
            }
        }
    }
}

fn push_leaf(
    nodes: &mut Vec<FormatNode>,
    raw: &str,
    flags: FormatFlags,
    produced: &mut usize,
) -> Result<(), ResolveError> {
    if raw.is_empty() {
        return Ok(());
    }
    *produced += 1;
    if *produced > MAX_FRAGMENTS {
        return Err(ResolveError::TooManyFragments);
    }
    nodes.push(FormatNode::Run(FormatRun {
        // doubled backslashes collapse in plain text
        text: raw.replace("\\\\", "\\"),
        flags,
    }));
    Ok(())
}

/// Find the first well-formed open/close pair of `marker` at or after
/// `from`. Inner offsets exclude the markers and one optional space of
/// padding just inside each of them.
fn find_region(text: &str, marker: Marker, from: usize) -> Option<Region> {
    let open = find_marker(text, marker.letter(), from)?;
    let close = find_marker(text, marker.letter(), open + 2)?;

    let bytes = text.as_bytes();
    let mut inner_start = open + 2;
    let mut inner_end = close;
    if inner_start < inner_end && bytes[inner_start] == b' ' {
        inner_start += 1;
    }
    if inner_end > inner_start && bytes[inner_end - 1] == b' ' {
        inner_end -= 1;
    }

    Some(Region {
        start: open,
        inner_start,
        inner_end,
        end: close + 2,
    })
}

/// Find the next active marker occurrence at or after `from`: a backslash
/// followed by the marker letter, preceded by an even number of consecutive
/// backslashes.
fn find_marker(text: &str, letter: u8, from: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = from;
    while i + 1 < bytes.len() {
        if bytes[i] == b'\\' && bytes[i + 1] == letter {
            let mut preceding = 0;
            while preceding < i && bytes[i - 1 - preceding] == b'\\' {
                preceding += 1;
            }
            if preceding % 2 == 0 {
                return Some(i);
            }
        }
        i += 1;
    }
    None
}
