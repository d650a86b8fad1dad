//! Main module for the SF compiler
//!
//! Compilation stages, in dependency order:
//! 1. scanning — statement scanner, statement parser, option parser
//! 2. styling — declarative option-key to style-attribute binding
//! 3. building — grouping the flat command sequence into an element tree
//! 4. inlines — resolving bold/italic/underline markers in textual payloads
//!
//! The `pipeline` module ties the stages together; `formats` renders the
//! resulting trees as JSON or an indented tree listing for inspection.

pub mod ast;
pub mod building;
pub mod formats;
pub mod inlines;
pub mod pipeline;
pub mod scanning;
pub mod styling;

pub use ast::{Command, Element, FormatFlags, FormatGroup, FormatNode, FormatRun, Value, ValueMap};
pub use building::{build_elements, CompileError};
pub use inlines::{resolve_inline, ResolveError};
pub use pipeline::{compile, compile_with, parse_commands};
