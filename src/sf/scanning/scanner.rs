//! Statement scanner
//!
//! Splits source text into statement substrings. A statement ends at the
//! first semicolon that follows a complete double-quoted literal; escaped
//! quotes and backslashes, and raw semicolons, are allowed inside the
//! literal, and statements may span lines. Trailing text with no further
//! complete literal is dropped silently.

use once_cell::sync::Lazy;
use regex::Regex;

/// One statement: anything up to a complete quoted literal (escapes and raw
/// semicolons allowed inside), then anything up to the terminating semicolon.
/// A line-continuation backslash before the quote falls under the `\\.` arm.
static STATEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:[^\n]|\\\n)*?"(?:[^"\\]|\\.|;)*"[^;]*;"#).unwrap());

/// Scan source text into statement substrings.
///
/// The scan is stateless and restartable: it borrows the source and can be
/// re-run on the same input with identical results.
pub fn scan(source: &str) -> impl Iterator<Item = &str> {
    STATEMENT.find_iter(source).map(|m| m.as_str())
}
