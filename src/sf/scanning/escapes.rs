//! Escape decoding for quoted literals
//!
//! Data literals decode `\"` and `\n`; backslash pairs are recognized so an
//! escaped backslash shields the character after it, but they stay doubled
//! in the decoded data. Doubled backslashes travel through inline resolution
//! intact (the parity rules there depend on them) and collapse only when a
//! plain leaf is emitted. Quoted option values never reach the resolver, so
//! they collapse pairs immediately and skip the newline rule.

/// Decode a statement's quoted data literal. Backslash pairs are kept
/// doubled; they collapse at leaf emission after inline resolution.
pub fn decode_data(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.peek() {
            Some('"') => {
                out.push('"');
                chars.next();
            }
            Some('\\') => {
                out.push('\\');
                out.push('\\');
                chars.next();
            }
            Some('n') => {
                out.push('\n');
                chars.next();
            }
            // Unrecognized sequences (inline markers among them) pass through.
            _ => out.push('\\'),
        }
    }
    out
}

/// Decode a quoted option value: `\"` and `\\`, no newline substitution.
pub fn decode_quoted_value(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.peek() {
            Some('"') => {
                out.push('"');
                chars.next();
            }
            Some('\\') => {
                out.push('\\');
                chars.next();
            }
            _ => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_and_newline_decode_pairs_stay_doubled() {
        assert_eq!(decode_data(r#"a\"b\\c\nd"#), "a\"b\\\\c\nd");
    }

    #[test]
    fn escaped_backslash_shields_newline_sequence() {
        // `\\n` is a shielded backslash followed by the letter n
        assert_eq!(decode_data(r"a\\nb"), r"a\\nb");
        // `\\\n` is a shielded backslash followed by a real newline
        assert_eq!(decode_data(r"a\\\nb"), "a\\\\\nb");
    }

    #[test]
    fn inline_markers_survive_decoding() {
        assert_eq!(decode_data(r"x \B y \B z"), r"x \B y \B z");
        assert_eq!(decode_data(r"x \\B y"), r"x \\B y");
    }

    #[test]
    fn trailing_backslash_is_kept() {
        assert_eq!(decode_data(r"abc\"), "abc\\");
    }

    #[test]
    fn option_values_collapse_pairs_and_keep_newline_sequences() {
        assert_eq!(decode_quoted_value(r"a\nb"), r"a\nb");
        assert_eq!(decode_quoted_value(r#"a\"b\\c"#), "a\"b\\c");
    }
}
