//! Resolved inline-format tree
//!
//! Textual payloads resolve into an ordered sequence of leaf runs and nested
//! groups. A run carries the full flag set in effect for its text; a group
//! carries the flag set its delimiter introduced plus everything inherited
//! from enclosing groups.

use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;
use std::fmt;
use std::ops::BitOr;

/// Bitset over the three inline styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatFlags(u8);

impl FormatFlags {
    pub const NONE: FormatFlags = FormatFlags(0);
    pub const BOLD: FormatFlags = FormatFlags(1);
    pub const ITALIC: FormatFlags = FormatFlags(1 << 1);
    pub const UNDERLINE: FormatFlags = FormatFlags(1 << 2);

    pub fn contains(self, other: FormatFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn with(self, other: FormatFlags) -> FormatFlags {
        FormatFlags(self.0 | other.0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Names of the set flags, in Bold/Italic/Underline order.
    pub fn names(self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.contains(FormatFlags::BOLD) {
            names.push("bold");
        }
        if self.contains(FormatFlags::ITALIC) {
            names.push("italic");
        }
        if self.contains(FormatFlags::UNDERLINE) {
            names.push("underline");
        }
        names
    }
}

impl BitOr for FormatFlags {
    type Output = FormatFlags;

    fn bitor(self, rhs: FormatFlags) -> FormatFlags {
        self.with(rhs)
    }
}

impl Serialize for FormatFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let names = self.names();
        let mut seq = serializer.serialize_seq(Some(names.len()))?;
        for name in names {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

impl fmt::Display for FormatFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "plain")
        } else {
            write!(f, "{}", self.names().join("+"))
        }
    }
}

/// A leaf run of text with the flag set in effect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatRun {
    pub text: String,
    pub flags: FormatFlags,
}

/// A delimiter-introduced group of runs and nested groups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatGroup {
    pub flags: FormatFlags,
    pub children: Vec<FormatNode>,
}

/// One node of the resolved inline tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormatNode {
    Run(FormatRun),
    Group(FormatGroup),
}

impl FormatNode {
    pub fn run(text: &str, flags: FormatFlags) -> FormatNode {
        FormatNode::Run(FormatRun {
            text: text.to_string(),
            flags,
        })
    }
}
