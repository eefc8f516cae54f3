//! Quote-aware splitting of a single delimited text line
//!
//! A quote toggles delimiter handling unless the raw character before it is
//! a backslash. Toggling quotes are dropped from the field; a
//! backslash-preceded quote is kept verbatim together with its backslash.
//! There is no other escaping, so `\\"` also counts as an escaped quote.

use crate::constants::{DELIMITER, ESCAPE, QUOTE};

/// Split one line into trimmed fields.
///
/// Always returns at least one field: an empty line gives `[""]` and a
/// trailing delimiter gives a trailing empty field. Unbalanced quotes are
/// not an error; the line simply ends in the quoted state.
pub fn parse_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut previous = None;

    for c in line.chars() {
        if c == QUOTE && previous != Some(ESCAPE) {
            in_quotes = !in_quotes;
        } else if c == DELIMITER && !in_quotes {
            fields.push(trim_field(&current).to_string());
            current.clear();
        } else {
            current.push(c);
        }
        previous = Some(c);
    }

    fields.push(trim_field(&current).to_string());
    fields
}

/// Strip leading and trailing characters at or below U+0020.
///
/// This covers ASCII control characters as well as spaces, but leaves
/// non-ASCII whitespace such as U+00A0 in place.
pub fn trim_field(field: &str) -> &str {
    field.trim_matches(|c: char| c <= ' ')
}
