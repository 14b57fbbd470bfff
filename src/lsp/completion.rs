use tower_lsp::lsp_types::{
    CompletionItem, CompletionItemKind, Documentation, InsertTextFormat, MarkupContent, MarkupKind,
    Position,
};

use crate::completion::{
    CandidateKind, CompletionCandidate, CompletionResolver, DocumentContext, InsertFormat,
};

/// Bridges the resolver to LSP completion items
#[derive(Debug, Clone, Copy, Default)]
pub struct CompletionProvider {
    resolver: CompletionResolver,
}

impl CompletionProvider {
    pub fn new(resolver: CompletionResolver) -> Self {
        Self { resolver }
    }

    pub fn provide_completion(&self, text: &str, position: Position) -> Vec<CompletionItem> {
        let ctx = DocumentContext::at_line(text, position.line as usize);
        let candidates = self.resolver.resolve_context(&ctx);

        tracing::debug!(
            line = position.line,
            context = ?ctx.classify(),
            count = candidates.len(),
            "Resolved completion"
        );

        candidates.iter().map(to_completion_item).collect()
    }
}

pub fn to_completion_item(candidate: &CompletionCandidate) -> CompletionItem {
    CompletionItem {
        label: candidate.label.clone(),
        kind: Some(match candidate.kind {
            CandidateKind::Property => CompletionItemKind::PROPERTY,
            CandidateKind::Keyword => CompletionItemKind::KEYWORD,
        }),
        documentation: candidate.documentation.as_ref().map(|doc| {
            Documentation::MarkupContent(MarkupContent {
                kind: MarkupKind::Markdown,
                value: doc.clone(),
            })
        }),
        insert_text: Some(candidate.insert_text.clone()),
        insert_text_format: Some(match candidate.insert_format {
            InsertFormat::PlainText => InsertTextFormat::PLAIN_TEXT,
            InsertFormat::Snippet => InsertTextFormat::SNIPPET,
        }),
        ..Default::default()
    }
}
