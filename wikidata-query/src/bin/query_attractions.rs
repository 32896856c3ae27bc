use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use wikidata_query::{fetch_attractions, SparqlEndpoint};

/// List tourist attractions from Wikidata with their entity ids
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SPARQL endpoint to query [default: https://query.wikidata.org/sparql]
    #[arg(long, env = "WIKIDATA_SPARQL_ENDPOINT")]
    endpoint: Option<String>,

    /// Language tag the labels must be in
    #[arg(long, default_value = "en")]
    language: String,

    /// Maximum number of attractions to fetch
    #[arg(long, default_value_t = 3)]
    limit: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let endpoint = match &cli.endpoint {
        Some(url) => SparqlEndpoint::new(url),
        None => SparqlEndpoint::wikidata(),
    }
    .context("Failed to create HTTP client")?;
    info!("Querying {}...", endpoint.url());

    let attractions = fetch_attractions(&endpoint, &cli.language, cli.limit)
        .with_context(|| format!("Failed to fetch attractions from {}", endpoint.url()))?;

    if attractions.is_empty() {
        println!("No attractions found");
    }
    for attraction in &attractions {
        println!("Got attraction {} (id = {})", attraction.label, attraction.id);
    }

    Ok(())
}
