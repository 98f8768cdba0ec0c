use tower_lsp::lsp_types::*;

/// Define the server capabilities for the Lx LSP
pub fn server_capabilities() -> ServerCapabilities {
    ServerCapabilities {
        // Full text sync - simplest to implement
        text_document_sync: Some(TextDocumentSyncCapability::Kind(
            TextDocumentSyncKind::FULL,
        )),

        // Static completion list; fires on identifier characters, so no
        // trigger characters are registered
        completion_provider: Some(CompletionOptions::default()),

        ..Default::default()
    }
}
