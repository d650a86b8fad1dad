//! AST types produced by the SF compiler
//!
//! `Command` is one parsed statement; `Element` is the grouped document tree;
//! the format-run types describe resolved inline styling for textual
//! payloads.

pub mod command;
pub mod element;
pub mod inline;

pub use command::{Command, Value, ValueMap};
pub use element::Element;
pub use inline::{FormatFlags, FormatGroup, FormatNode, FormatRun};
