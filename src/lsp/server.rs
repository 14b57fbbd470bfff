/*!
# Waypoint Docker Language Server

LSP backend offering completions inside the docker `build` block.

## Возможности
- Автодополнение атрибутов с документацией и сниппетами
- Значения `true`/`false` после `buildkit =`
- Скрытие атрибутов, уже присутствующих в документе
*/

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use super::completion::CompletionProvider;
use crate::config::ServerConfig;

pub struct WaypointLanguageServer {
    client: Client,
    config: Arc<RwLock<ServerConfig>>,
    /// Кэш открытых документов
    documents: Arc<RwLock<HashMap<Url, DocumentInfo>>>,
}

/// Информация об открытом документе
#[derive(Debug, Clone)]
struct DocumentInfo {
    version: i32,
    text: String,
}

impl WaypointLanguageServer {
    pub fn new(client: Client) -> Self {
        Self::with_config(client, ServerConfig::default())
    }

    pub fn with_config(client: Client, config: ServerConfig) -> Self {
        Self {
            client,
            config: Arc::new(RwLock::new(config)),
            documents: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Current effective configuration
    pub async fn config(&self) -> ServerConfig {
        self.config.read().await.clone()
    }

    async fn provider(&self) -> CompletionProvider {
        CompletionProvider::new(self.config.read().await.resolver())
    }
}

fn client_snippet_support(capabilities: &ClientCapabilities) -> Option<bool> {
    capabilities
        .text_document
        .as_ref()?
        .completion
        .as_ref()?
        .completion_item
        .as_ref()?
        .snippet_support
}

#[tower_lsp::async_trait]
impl LanguageServer for WaypointLanguageServer {
    async fn initialize(&self, params: InitializeParams) -> tower_lsp::jsonrpc::Result<InitializeResult> {
        tracing::info!("Initializing Waypoint Docker Language Server");

        {
            let mut config = self.config.write().await;

            if let Some(options) = params.initialization_options {
                if let Err(e) = config.merge_initialization_options(options) {
                    tracing::warn!("Ignoring initialization options: {}", e);
                }
            }

            // клиент явно отказался от сниппетов
            if client_snippet_support(&params.capabilities) == Some(false) {
                config.completion.snippets = false;
            }

            tracing::info!(
                duplicate_policy = %config.completion.duplicate_policy,
                snippets = config.completion.snippets,
                "Completion settings"
            );
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                completion_provider: Some(CompletionOptions {
                    resolve_provider: Some(false),
                    trigger_characters: Some(vec![" ".to_string(), "=".to_string()]),
                    ..Default::default()
                }),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "waypoint-docker-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _params: InitializedParams) {
        tracing::info!("Waypoint Docker Language Server initialized");

        self.client
            .log_message(MessageType::INFO, "Waypoint docker completion ready")
            .await;
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        tracing::debug!("Document opened: {}", params.text_document.uri);

        let doc_info = DocumentInfo {
            version: params.text_document.version,
            text: params.text_document.text,
        };
        self.documents
            .write()
            .await
            .insert(params.text_document.uri, doc_info);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // FULL sync: последнее изменение содержит весь текст
        let Some(change) = params.content_changes.into_iter().last() else {
            return;
        };
        let VersionedTextDocumentIdentifier { uri, version } = params.text_document;
        tracing::debug!("Document changed: {}", uri);

        self.documents.write().await.insert(
            uri,
            DocumentInfo {
                version,
                text: change.text,
            },
        );
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        tracing::debug!("Document closed: {}", params.text_document.uri);

        self.documents.write().await.remove(&params.text_document.uri);
    }

    async fn completion(&self, params: CompletionParams) -> tower_lsp::jsonrpc::Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        let documents = self.documents.read().await;
        let Some(doc_info) = documents.get(uri) else {
            tracing::debug!("Completion requested for unknown document: {}", uri);
            return Ok(None);
        };

        tracing::debug!(version = doc_info.version, "Completion for {}", uri);
        let items = self.provider().await.provide_completion(&doc_info.text, position);
        Ok(Some(CompletionResponse::Array(items)))
    }

    async fn shutdown(&self) -> tower_lsp::jsonrpc::Result<()> {
        tracing::info!("Waypoint Docker Language Server shutting down");
        Ok(())
    }
}
