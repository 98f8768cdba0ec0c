use lx_lsp_core::{
    get_all_completions, offset_in_code_block, CompletionEntry as CoreCompletionEntry,
    CompletionKind,
};
use once_cell::sync::Lazy;
use tower_lsp::lsp_types::*;

use crate::document::Document;

/// Cached LSP completion items converted from core completion entries
static FUNCTION_COMPLETIONS: Lazy<Vec<CompletionItem>> = Lazy::new(|| {
    get_all_completions()
        .iter()
        .filter(|e| e.kind == CompletionKind::Function)
        .map(convert_to_lsp_completion)
        .collect()
});

static KEYWORD_COMPLETIONS: Lazy<Vec<CompletionItem>> = Lazy::new(|| {
    get_all_completions()
        .iter()
        .filter(|e| e.kind == CompletionKind::Keyword)
        .map(convert_to_lsp_completion)
        .collect()
});

static LITERAL_COMPLETIONS: Lazy<Vec<CompletionItem>> = Lazy::new(|| {
    get_all_completions()
        .iter()
        .filter(|e| e.kind == CompletionKind::Constant)
        .map(convert_to_lsp_completion)
        .collect()
});

/// Convert a core completion entry to an LSP completion item
fn convert_to_lsp_completion(entry: &CoreCompletionEntry) -> CompletionItem {
    let kind = match entry.kind {
        CompletionKind::Function => CompletionItemKind::FUNCTION,
        CompletionKind::Keyword => CompletionItemKind::KEYWORD,
        CompletionKind::Constant => CompletionItemKind::CONSTANT,
    };

    let insert_text_format = if entry.insert_text.contains('$') {
        InsertTextFormat::SNIPPET
    } else {
        InsertTextFormat::PLAIN_TEXT
    };

    CompletionItem {
        label: entry.label.clone(),
        kind: Some(kind),
        detail: Some(entry.kind.detail().to_string()),
        insert_text: Some(entry.insert_text.clone()),
        insert_text_format: Some(insert_text_format),
        ..Default::default()
    }
}

/// Get completion items for a position in the document
pub fn get_completions(doc: &Document, position: Position) -> Vec<CompletionItem> {
    let offset = doc.offset_from_position(position.line, position.character);

    if !offset_in_code_block(doc.text(), offset) {
        return vec![];
    }

    let mut items = Vec::new();
    items.extend(FUNCTION_COMPLETIONS.iter().cloned());
    items.extend(KEYWORD_COMPLETIONS.iter().cloned());
    items.extend(LITERAL_COMPLETIONS.iter().cloned());
    items
}
