//! Escaping of user-supplied text placed inside SPARQL string literals.

/// Escape `text` for use between double quotes in a SPARQL query.
///
/// Handles the characters that can terminate or corrupt a `"..."` literal:
/// backslash, double quote, and the line/tab control characters.
pub fn escape_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}
