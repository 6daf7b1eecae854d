//! CLI binary for solace.

use clap::{Parser, Subcommand};
use solace::ServiceConfig;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Solace: supportive journaling and chat backend.
#[derive(Parser)]
#[command(name = "solace", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Start the HTTP API server.
    Serve,

    /// Classify a piece of text and print the result as JSON.
    Analyze {
        /// The text to classify.
        text: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing — override with RUST_LOG for more detail.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("solace=info,tower_http=warn")),
        )
        .init();

    let cli = Cli::parse();

    // Load config: explicit path, then the default location, then defaults.
    let config = if let Some(ref path) = cli.config {
        ServiceConfig::from_file(path)?
    } else {
        let default_path = ServiceConfig::default_config_path();
        if default_path.exists() {
            ServiceConfig::from_file(&default_path)?
        } else {
            ServiceConfig::default()
        }
    };

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => run_serve(config).await,
        Command::Analyze { text } => run_analyze(&text),
    }
}

async fn run_serve(config: ServiceConfig) -> anyhow::Result<()> {
    println!("Solace v{}", env!("CARGO_PKG_VERSION"));

    let server = solace::ApiServer::start(&config).await?;
    println!("Listening on http://{}. Press Ctrl+C to stop.", server.addr());

    tokio::signal::ctrl_c().await?;
    info!("received Ctrl+C, shutting down...");
    server.shutdown();

    Ok(())
}

fn run_analyze(text: &str) -> anyhow::Result<()> {
    let result = solace::classify(text);
    let bundle = solace::bundle_for(result.mood);
    let output = serde_json::json!({
        "sentiment": result.sentiment,
        "mood": result.mood,
        "confidence": result.confidence,
        "recommendation": bundle.recommendation,
        "quote": bundle.quote,
        "activity": bundle.activity,
        "song_suggestion": bundle.song_suggestion,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
