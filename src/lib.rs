//! # sf
//!
//! A compiler for the SF simple-format markup language.
//!
//! SF source text is a sequence of `tag "data" key=value,...;` statements.
//! The compiler turns it into an ordered tree of tagged content elements,
//! with optional one-level named containers and inline bold/italic/underline
//! styling resolved from `\B` / `\I` / `\U` escape markers. Rendering the
//! resulting tree to visible output is left to a separate backend.

pub mod sf;
