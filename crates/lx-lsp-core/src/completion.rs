//! Core completion data for the Lx language
//! Provides completion items that can be used by the LSP server

use once_cell::sync::Lazy;

use crate::builtins::{BUILTIN_NAMES, KEYWORDS, LITERALS};

/// A completion candidate offered to the editor
#[derive(Clone, Debug)]
pub struct CompletionEntry {
    pub label: String,
    pub kind: CompletionKind,
    pub insert_text: String,
}

/// The kind of completion item
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    Function,
    Keyword,
    Constant,
}

impl CompletionKind {
    /// Short description shown as the item detail
    pub fn detail(&self) -> &'static str {
        match self {
            CompletionKind::Function => "Lx built-in function",
            CompletionKind::Keyword => "Lx keyword",
            CompletionKind::Constant => "Lx literal",
        }
    }
}

/// All completion items cached at startup
pub static ALL_COMPLETIONS: Lazy<Vec<CompletionEntry>> = Lazy::new(build_all_completions);

/// Get all completion items
pub fn get_all_completions() -> &'static Vec<CompletionEntry> {
    &ALL_COMPLETIONS
}

/// Get only function completions
pub fn get_function_completions() -> Vec<&'static CompletionEntry> {
    ALL_COMPLETIONS
        .iter()
        .filter(|e| e.kind == CompletionKind::Function)
        .collect()
}

/// Get only keyword completions
pub fn get_keyword_completions() -> Vec<&'static CompletionEntry> {
    ALL_COMPLETIONS
        .iter()
        .filter(|e| e.kind == CompletionKind::Keyword)
        .collect()
}

/// Get only literal completions
pub fn get_literal_completions() -> Vec<&'static CompletionEntry> {
    ALL_COMPLETIONS
        .iter()
        .filter(|e| e.kind == CompletionKind::Constant)
        .collect()
}

fn build_all_completions() -> Vec<CompletionEntry> {
    let mut items = Vec::new();

    items.extend(build_function_completions());
    items.extend(build_keyword_completions());
    items.extend(build_literal_completions());

    items
}

fn build_function_completions() -> Vec<CompletionEntry> {
    BUILTIN_NAMES
        .iter()
        .map(|name| CompletionEntry {
            label: (*name).to_string(),
            kind: CompletionKind::Function,
            // snippet placeholder leaves the cursor between the parentheses
            insert_text: format!("{}($1)", name),
        })
        .collect()
}

fn build_keyword_completions() -> Vec<CompletionEntry> {
    KEYWORDS
        .iter()
        .map(|name| CompletionEntry {
            label: (*name).to_string(),
            kind: CompletionKind::Keyword,
            insert_text: (*name).to_string(),
        })
        .collect()
}

fn build_literal_completions() -> Vec<CompletionEntry> {
    LITERALS
        .iter()
        .map(|name| CompletionEntry {
            label: (*name).to_string(),
            kind: CompletionKind::Constant,
            insert_text: (*name).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_count() {
        let completions = get_all_completions();
        assert!(
            completions.len() >= 175,
            "Expected at least 175 completion items, got {}",
            completions.len()
        );
    }

    #[test]
    fn test_function_count() {
        let functions = get_function_completions();
        assert!(
            functions.len() >= 150,
            "Expected at least 150 functions, got {}",
            functions.len()
        );
    }

    #[test]
    fn test_keyword_count() {
        let keywords = get_keyword_completions();
        assert_eq!(keywords.len(), 18, "Expected 18 keywords");
    }

    #[test]
    fn test_literal_count() {
        let literals = get_literal_completions();
        assert_eq!(literals.len(), 5, "Expected 5 literals");
    }

    #[test]
    fn test_group_order() {
        let completions = get_all_completions();

        let first_keyword = completions
            .iter()
            .position(|e| e.kind == CompletionKind::Keyword)
            .expect("Should have keywords");
        let first_literal = completions
            .iter()
            .position(|e| e.kind == CompletionKind::Constant)
            .expect("Should have literals");

        assert!(
            completions[..first_keyword]
                .iter()
                .all(|e| e.kind == CompletionKind::Function),
            "Functions must come before keywords"
        );
        assert!(
            completions[first_keyword..first_literal]
                .iter()
                .all(|e| e.kind == CompletionKind::Keyword),
            "Keywords must come before literals"
        );
        assert!(
            completions[first_literal..]
                .iter()
                .all(|e| e.kind == CompletionKind::Constant),
            "Literals must come last"
        );
    }

    #[test]
    fn test_source_order_preserved() {
        let completions = get_all_completions();
        assert_eq!(completions[0].label, "print");

        let keywords = get_keyword_completions();
        assert_eq!(keywords[0].label, "if");

        let literals = get_literal_completions();
        assert_eq!(literals[0].label, "true");
    }

    #[test]
    fn test_function_insert_text_has_argument_placeholder() {
        for entry in get_function_completions() {
            assert_eq!(
                entry.insert_text,
                format!("{}($1)", entry.label),
                "Function {} should insert an empty call",
                entry.label
            );
        }
    }

    #[test]
    fn test_keyword_and_literal_insert_text_is_bare_name() {
        for entry in get_keyword_completions() {
            assert_eq!(entry.insert_text, entry.label);
        }
        for entry in get_literal_completions() {
            assert_eq!(entry.insert_text, entry.label);
        }
    }

    #[test]
    fn test_specific_functions_present() {
        let completions = get_all_completions();
        let names: Vec<&str> = completions.iter().map(|e| e.label.as_str()).collect();

        // Core natives
        assert!(names.contains(&"print"), "Missing print");
        assert!(names.contains(&"strlen"), "Missing strlen");
        assert!(names.contains(&"sqrt"), "Missing sqrt");
        assert!(names.contains(&"in_array"), "Missing in_array");

        // Extension natives
        assert!(names.contains(&"json_encode"), "Missing json_encode");
        assert!(names.contains(&"file_get_contents"), "Missing file_get_contents");
        assert!(names.contains(&"pdo_query"), "Missing pdo_query");
    }

    #[test]
    fn test_kind_detail() {
        assert_eq!(CompletionKind::Function.detail(), "Lx built-in function");
        assert_eq!(CompletionKind::Keyword.detail(), "Lx keyword");
        assert_eq!(CompletionKind::Constant.detail(), "Lx literal");
    }
}
