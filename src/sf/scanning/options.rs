//! Option parser
//!
//! Turns the raw option-list of a statement (comma-separated `key=value`,
//! whitespace-insensitive) into a typed, insertion-ordered map. Keys are
//! case-sensitive; later duplicates overwrite earlier values.

use super::escapes::decode_quoted_value;
use crate::sf::ast::{Value, ValueMap};
use once_cell::sync::Lazy;
use regex::Regex;

static OPTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"([^,\s=]*)\s*=\s*([^,]*)").unwrap());

static QUOTED_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""((?:[^"\\]|\\.)*)""#).unwrap());

/// Parse a raw option-list into a typed map.
pub fn parse_options(raw: &str) -> ValueMap {
    let mut options = ValueMap::new();
    for caps in OPTION.captures_iter(raw) {
        options.insert(&caps[1], parse_value(&caps[2]));
    }
    options
}

/// Type a single raw option value.
///
/// Quoted values are strings (escape-decoded). Bare tokens are booleans or
/// numbers; a token that parses as neither becomes the NaN sentinel, never a
/// string.
fn parse_value(raw: &str) -> Value {
    if let Some(caps) = QUOTED_VALUE.captures(raw) {
        return Value::Str(decode_quoted_value(&caps[1]));
    }
    match raw.trim() {
        "true" | "t" | "T" => Value::Bool(true),
        "false" | "f" | "F" => Value::Bool(false),
        "" => Value::Num(0.0),
        token => Value::Num(token.parse().unwrap_or(f64::NAN)),
    }
}
