use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use contract_enricher::io::DEFAULT_ENDPOINT;
use contract_enricher::{ContractClient, ContractEndpoint, load_record};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "contract-enricher",
    about = "Post a record to the contract service and attach the generated contract's URL and hash",
    version
)]
struct Cli {
    /// JSON file holding the record to send.
    #[arg(default_value = "contract.json")]
    record: PathBuf,

    /// Overrides the fixed contract generation endpoint. Leave unset in normal use.
    #[arg(long, env = "CONTRACT_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .init();

    let mut record = load_record(&cli.record)
        .with_context(|| format!("Failed to load record from {}", cli.record.display()))?;
    info!(path = %cli.record.display(), fields = record.len(), "record loaded");

    let client = ContractClient::new(ContractEndpoint::new(cli.endpoint));

    // Failure was already logged; exit status stays zero either way.
    if let Some(enriched) = client.enrich(&mut record).await {
        println!("{}", serde_json::to_string_pretty(enriched)?);
    }

    Ok(())
}
