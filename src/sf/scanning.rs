//! Lexical stage of the SF compiler
//!
//! Splits source text into statement substrings, parses each statement into a
//! `Command`, and types the raw option list. The whole stage is tolerant:
//! text that does not form a complete statement is dropped silently.

pub mod escapes;
pub mod options;
pub mod scanner;
pub mod statement;

pub use options::parse_options;
pub use scanner::scan;
pub use statement::{parse_statement, BACKGROUND_TAG, DEFAULT_TAG};
