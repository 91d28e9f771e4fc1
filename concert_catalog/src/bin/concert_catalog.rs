use std::{path::Path, sync::Arc};

use anyhow::{Context, Result};
use artist_ingestor::{
    Aggregator,
    client::http::HttpResourceClient,
    config::IngestorConfig,
    models::ArtistId,
};
use clap::{Parser, Subcommand};
use concert_catalog::{Query, answer, snapshot};

#[derive(Parser)]
#[command(version, about = "Concert catalog CLI")]
struct Cli {
    /// TOML config file (api_url, request_timeout_secs)
    #[arg(long, value_name = "FILE")]
    config: Option<String>,

    /// Root index URL, overrides config and environment
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// List every artist id and name
    List,
    /// Show one artist with its concerts
    Show {
        #[arg(long, allow_negative_numbers = true)]
        id: ArtistId,
    },
    /// Show the artist whose name matches exactly
    Search {
        #[arg(long)]
        name: String,
    },
}

impl From<Cmd> for Query {
    fn from(cmd: Cmd) -> Self {
        match cmd {
            Cmd::List => Query::List,
            Cmd::Show { id } => Query::Show(id),
            Cmd::Search { name } => Query::Search(name),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // 1) Resolve config: defaults < file < env < flags
    let config = IngestorConfig::resolve(
        cli.config.as_deref().map(Path::new),
        cli.api_url.as_deref(),
    )?;

    // 2) One aggregation cycle, published to the process-wide store
    let client = HttpResourceClient::from_config(&config)?;
    let aggregator = Aggregator::from_config(Arc::new(client), &config);
    let model = snapshot::refresh(snapshot::global(), aggregator)
        .await
        .context("500 INTERNAL SERVER ERROR")?;

    // 3) Render
    let out = answer(&model, &cli.cmd.into())?;
    println!("{}", serde_json::to_string_pretty(&out)?);

    Ok(())
}
