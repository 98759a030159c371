use anyhow::Result;
use clap::{Parser, Subcommand};
use docquery::{
    api::{HttpDocumentApi, SelectedFile},
    config,
    form::{FileInput, SubmitEvent, TextInput},
    page::Page,
    screen::TerminalScreen,
    shell,
};
use std::{path::PathBuf, sync::Arc};
use tracing::info;

#[derive(Parser)]
#[command(name = "docquery")]
#[command(about = "Upload documents to and query a document search service")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL, overrides the configuration file
    #[arg(short, long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a document for ingestion
    Ingest {
        /// Path to the document
        path: PathBuf,
    },

    /// Search ingested documents
    Query {
        /// Query text
        text: String,
    },

    /// Read `ingest <path>` and `query <text>` lines from stdin
    Shell,
}

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (before logging setup)
    let mut config = match config::load(cli.config.as_deref()).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(base_url) = cli.base_url {
        config.backend.base_url = base_url;
    }

    // Environment variable overrides config
    let (log_level, filter) = match std::env::var("RUST_LOG") {
        Ok(directives) => {
            let filter = tracing_subscriber::EnvFilter::try_new(&directives)?;
            (directives, filter)
        }
        Err(_) => {
            let level = config.logs.level.clone();
            if let Err(e) = validate_log_level(&level) {
                eprintln!("{}", e);
                std::process::exit(1);
            }
            let filter = tracing_subscriber::EnvFilter::try_new(&level)?;
            (level, filter)
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(
        "Using backend {} with log level: {}",
        config.backend.base_url, log_level
    );

    let api = HttpDocumentApi::new(&config.backend)?;
    let page = Page::new(Arc::new(api), Arc::new(TerminalScreen::stdio()));

    match cli.command {
        Commands::Ingest { path } => {
            let input = FileInput::with_file(SelectedFile::from_path(&path).await?);
            page.submit_ingest(&mut SubmitEvent::new(), &input).await?;
        }
        Commands::Query { text } => {
            page.submit_query(&mut SubmitEvent::new(), &TextInput::new(text))
                .await?;
        }
        Commands::Shell => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let submitted = shell::run(page, stdin).await?;
            info!("Shell finished after {} submissions", submitted);
        }
    }

    Ok(())
}
