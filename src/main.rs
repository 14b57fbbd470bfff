/*!
# Waypoint Docker LSP CLI

Command-line interface: runs the language server or resolves completions offline.
*/

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::{style, Term};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing::level_filters::LevelFilter;
use waypoint_docker_lsp::completion::catalog;
use waypoint_docker_lsp::config::default_config_path;
use waypoint_docker_lsp::{cli_common, lsp, DocumentContext, DuplicatePolicy, ServerConfig};

#[derive(Parser)]
#[command(
    name = "waypoint-docker-lsp",
    version = env!("CARGO_PKG_VERSION"),
    about = "Completion language server for the Waypoint docker build block"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file (TOML or YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override duplicate handling (suppress, offer-all)
    #[arg(long, global = true)]
    policy: Option<DuplicatePolicy>,

    /// Insert plain text instead of snippet templates
    #[arg(long, global = true)]
    no_snippets: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start Language Server Protocol (LSP) server on stdio
    Lsp,

    /// Resolve completions for a line of a file
    Complete {
        /// HCL file to read
        #[arg(short, long)]
        file: PathBuf,

        /// Zero-based line of the cursor
        #[arg(short, long, default_value = "0")]
        line: usize,

        /// Print candidates as JSON
        #[arg(long)]
        json: bool,
    },

    /// List known attributes
    Catalog {
        /// Print catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration file commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write default configuration
    Init {
        /// Output path (defaults to the per-user config location)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate configuration file
    Validate {
        /// Path to configuration file
        #[arg(short = 'p', long)]
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let Cli {
        command,
        verbose,
        config: config_path,
        policy,
        no_snippets,
    } = Cli::parse();

    // config-команды работают без чтения конфигурации пользователя
    if let Commands::Config { command } = command {
        cli_common::init_logging(verbose, LevelFilter::INFO)?;
        return config_command(command);
    }

    let mut config = ServerConfig::discover(config_path.as_deref()).context("Failed to load configuration")?;
    if let Some(policy) = policy {
        config.completion.duplicate_policy = policy;
    }
    if no_snippets {
        config.completion.snippets = false;
    }

    cli_common::init_logging(verbose, config.log_level()?)?;

    match command {
        Commands::Lsp => lsp_command(config).await?,
        Commands::Complete { file, line, json } => complete_command(&config, &file, line, json)?,
        Commands::Catalog { json } => catalog_command(json)?,
        Commands::Config { command } => config_command(command)?,
    }

    Ok(())
}

async fn lsp_command(config: ServerConfig) -> Result<()> {
    info!("LSP server starting in stdio mode");
    lsp::start_stdio_server(config).await
}

fn complete_command(config: &ServerConfig, file: &Path, line: usize, json: bool) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let ctx = DocumentContext::at_line(&text, line);
    let candidates = config.resolver().resolve_context(&ctx);
    info!(
        context = ?ctx.classify(),
        count = candidates.len(),
        "Resolved completions for {}:{}", file.display(), line
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
        return Ok(());
    }

    let term = Term::stdout();
    if candidates.is_empty() {
        term.write_line(&format!("{}", style("No completions").yellow()))?;
    }
    for candidate in &candidates {
        term.write_line(&format!(
            "{:<20} {:<9} {}",
            style(&candidate.label).bold().green(),
            candidate.kind,
            candidate.insert_text.replace('\n', "\\n")
        ))?;
    }

    Ok(())
}

fn catalog_command(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog::CATALOG)?);
        return Ok(());
    }

    let term = Term::stdout();
    term.write_line(&format!("{}", style("Docker build attributes").bold().cyan()))?;
    for spec in catalog::CATALOG {
        term.write_line(&format!("  {:<20} {}", style(spec.key).green(), spec.summary()))?;
    }

    Ok(())
}

fn config_command(command: ConfigCommands) -> Result<()> {
    let term = Term::stdout();

    match command {
        ConfigCommands::Init { output } => {
            let output = output
                .or_else(default_config_path)
                .context("Cannot determine config directory, pass --output")?;

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            ServerConfig::default().save_to_file(&output)?;
            term.write_line(&format!("Configuration created: {}", style(output.display()).green()))?;
        }

        ConfigCommands::Validate { path } => {
            term.write_line(&format!("Validating configuration: {}", path.display()))?;

            match ServerConfig::load_from_file(&path) {
                Ok(config) => {
                    term.write_line(&format!("   {}", style("Configuration is valid").green()))?;
                    term.write_line(&format!(
                        "   duplicate_policy = {}, snippets = {}",
                        config.completion.duplicate_policy, config.completion.snippets
                    ))?;
                }
                Err(e) => {
                    term.write_line(&format!("   {}: {}", style("Configuration error").red(), e))?;
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
