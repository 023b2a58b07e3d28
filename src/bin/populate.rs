//! Offline ingestion: merge harvested candidates into the curated baseline
//! and bulk-insert the result into the configured external store.
//!
//! Usage: `populate <harvested.json>` where the file holds an array of raw
//! candidate records. Requires an external backend (`AIONOS_DB_URL` +
//! `AIONOS_DB_KEY`); the embedded dataset is read-only.

use std::fs;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use aionos::ingest::{merge, Candidate};
use aionos::store::curated_baseline;
use aionos::{Config, Error, NewEvent};

/// Insert in batches to keep individual requests small
const BATCH_SIZE: usize = 50;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run().await {
        error!(%err, "population failed");
        std::process::exit(1);
    }
}

async fn run() -> aionos::Result<()> {
    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| Error::Config("usage: populate <harvested.json>".to_string()))?;

    let content = fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("cannot read {}: {}", path, e)))?;
    let candidates: Vec<Candidate> = serde_json::from_str(&content)
        .map_err(|e| Error::Config(format!("malformed candidate file: {}", e)))?;
    info!(count = candidates.len(), file = %path, "loaded harvested candidates");

    let harvested: Vec<NewEvent> = candidates.into_iter().map(Candidate::shape).collect();
    let events = merge(curated_baseline()?, harvested);
    info!(total = events.len(), "merged with curated baseline");

    let store = Config::from_env()?.build_store()?;
    if store.is_read_only() {
        return Err(Error::WriteUnsupported);
    }

    let batches = (events.len() + BATCH_SIZE - 1) / BATCH_SIZE;
    for (i, batch) in events.chunks(BATCH_SIZE).enumerate() {
        store.insert_many(batch.to_vec()).await?;
        info!(batch = i + 1, of = batches, "inserted batch");
    }

    info!(total = events.len(), "population complete");
    Ok(())
}
