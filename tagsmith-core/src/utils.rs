//! Shared string utilities for code generation.

use std::cmp::Ordering;

/// Turn a registry name into an identifier by removing every space.
///
/// Nothing else is touched: punctuation and leading digits pass through,
/// so "2D Lights" becomes "2DLights". Callers that need a guaranteed valid
/// identifier validate the result separately.
pub fn sanitize_identifier(name: &str) -> String {
    name.replace(' ', "")
}

/// Case-insensitive ordering, falling back to ordinal order for names that
/// differ only by case so the result is deterministic.
pub fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Escape a value for use inside a double-quoted string literal.
pub fn escape_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}
