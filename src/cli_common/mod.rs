//! Общий модуль для CLI утилит
//!
//! Инициализация логирования, общая для обоих бинарников.

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Инициализирует логирование в stderr
///
/// `RUST_LOG` имеет приоритет, иначе используется `default_level`
/// (DEBUG при `verbose`). stdout остаётся свободным для LSP протокола.
pub fn init_logging(verbose: bool, default_level: LevelFilter) -> Result<()> {
    let level = if verbose { LevelFilter::DEBUG } else { default_level };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    Ok(())
}
