use anyhow::{Context, Result};
/// LSP Server main entry point
///
/// Запускает сервер через stdio. Конфигурация ищется в каталоге пользователя.
///
/// Команда запуска: cargo run --bin lsp_server
use waypoint_docker_lsp::{cli_common, lsp, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::discover(None).context("Failed to load configuration")?;

    // Логи только в stderr, stdout используется для LSP протокола
    cli_common::init_logging(false, config.log_level()?)?;

    tracing::info!("Starting Waypoint Docker Language Server via stdio...");

    lsp::start_stdio_server(config).await?;

    Ok(())
}
