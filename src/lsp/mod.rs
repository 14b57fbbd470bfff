/*!
# Language Server Protocol (LSP) implementation

Provides attribute completion for the Waypoint docker build block over LSP.
*/

use anyhow::Result;
use tower_lsp::{LspService, Server};

use crate::config::ServerConfig;

mod completion;
mod server;

pub use completion::{to_completion_item, CompletionProvider};
pub use server::WaypointLanguageServer;

/// Starts LSP server in stdio mode
pub async fn start_stdio_server(config: ServerConfig) -> Result<()> {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) =
        LspService::new(move |client| WaypointLanguageServer::with_config(client, config));

    tracing::info!("Waypoint Docker LSP Server starting...");

    Server::new(stdin, stdout, socket).serve(service).await;

    Ok(())
}
