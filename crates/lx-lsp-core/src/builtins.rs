//! Static name tables for the Lx language
//!
//! The built-in function table ships as a bundled data file so it can be
//! regenerated from the runtime's native registry without touching code.
//! Keywords and literals are fixed by the grammar and live here directly.

use once_cell::sync::Lazy;

/// Built-in function names, in registration order.
pub static BUILTIN_NAMES: Lazy<Vec<&'static str>> =
    Lazy::new(|| parse_name_list(include_str!("../data/builtins.txt")));

/// Language keywords.
pub const KEYWORDS: &[&str] = &[
    "if",
    "else",
    "while",
    "do",
    "for",
    "foreach",
    "switch",
    "case",
    "default",
    "break",
    "continue",
    "return",
    "function",
    "global",
    "unset",
    "include",
    "include_once",
    "as",
];

/// Literal values, completed as constants.
pub const LITERALS: &[&str] = &["true", "false", "null", "undefined", "void"];

/// Parse a bundled name list: one name per line, `#` starts a comment,
/// blank lines are skipped.
fn parse_name_list(data: &'static str) -> Vec<&'static str> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}
