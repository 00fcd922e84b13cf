//! Scholar Publications - Entry Point
//!
//! Writes the configured author's publications to a JSON file and prints a
//! short summary. Logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use scholar_publications::config::DEFAULT_OUTPUT_PATH;
use scholar_publications::{Config, Pipeline, PipelineConfig, SemanticScholarClient};

#[derive(Parser, Debug)]
#[command(name = "scholar-publications")]
#[command(about = "Export an author's Semantic Scholar publications to JSON")]
#[command(version)]
struct Cli {
    /// Semantic Scholar author ID
    #[arg(long, env = "SCHOLAR_AUTHOR_ID")]
    author_id: String,

    /// Output JSON path (parent directories are created)
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH, env = "PUBLICATIONS_OUTPUT")]
    output: PathBuf,

    /// Semantic Scholar API key (optional, enables higher rate limits)
    #[arg(long, env = "SEMANTIC_SCHOLAR_API_KEY")]
    api_key: Option<String>,

    /// Graph API base URL (a mirror or a local mock)
    #[arg(long, env = "SEMANTIC_SCHOLAR_API_URL")]
    api_url: Option<String>,

    /// Retries for transient HTTP failures
    #[arg(long, default_value_t = scholar_publications::config::api::MAX_RETRIES)]
    max_retries: u32,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let api_key = cli.api_key.filter(|k| !k.is_empty());
    let mut config = Config::new(api_key).with_max_retries(cli.max_retries);
    if let Some(url) = cli.api_url.filter(|u| !u.is_empty()) {
        config = config.with_graph_api_url(url);
    }
    tracing::debug!(
        api_url = %config.graph_api_url,
        has_api_key = config.has_api_key(),
        delay_ms = config.rate_limit_delay.as_millis(),
        "Configured Semantic Scholar client"
    );

    let client = SemanticScholarClient::new(config)?;

    let pipeline_config = PipelineConfig::new(cli.author_id).with_output_path(cli.output);
    let pipeline = Pipeline::new(Arc::new(client), pipeline_config);

    let document = pipeline.run().await?;

    println!(
        "Saved {} publications to {}",
        document.total,
        pipeline.config().output_path.display()
    );
    println!(
        "Author citations: {}, h-index: {}",
        document.author.citations, document.author.h_index
    );

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        author_id = %cli.author_id,
        "Starting publication export"
    );

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
