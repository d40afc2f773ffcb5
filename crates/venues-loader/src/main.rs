//! `venues-loader` — seed a running server with fixture data.
//!
//! Posts every venue in the venues document to `/add/venue`, then every
//! rating in the ratings document to `/add/rating`, printing each response.
//!
//! # Usage
//!
//! ```text
//! venues-loader --url http://localhost:5000 \
//!   --venues demos/venues.json --ratings demos/ratings.json
//! ```

mod client;
mod fixtures;

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use client::ApiClient;
use serde_json::Value;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "venues-loader", about = "Replay venue and rating fixtures against the API")]
struct Args {
  /// Base URL of the venues server.
  #[arg(long, env = "VENUES_URL", default_value = "http://localhost:5000")]
  url: String,

  /// JSON document of the form `{"venues": [...]}`.
  #[arg(long, value_name = "FILE", default_value = "demos/venues.json")]
  venues: PathBuf,

  /// JSON document of the form `{"ratings": [...]}`.
  #[arg(long, value_name = "FILE", default_value = "demos/ratings.json")]
  ratings: PathBuf,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  // Both documents must parse before anything is sent.
  let venues = fixtures::read_venues(&args.venues)?;
  let ratings = fixtures::read_ratings(&args.ratings)?;
  let client = ApiClient::new(args.url)?;

  tracing::info!(
    venues = venues.venues.len(),
    ratings = ratings.ratings.len(),
    "loading fixtures"
  );

  let mut failed = 0usize;
  for payload in &venues.venues {
    let (status, body) = client.add_venue(payload).await?;
    failed += report("/add/venue", status, &body);
  }
  for payload in &ratings.ratings {
    let (status, body) = client.add_rating(payload).await?;
    failed += report("/add/rating", status, &body);
  }

  if failed > 0 {
    bail!("{failed} fixture(s) were rejected");
  }
  tracing::info!("all fixtures loaded");
  Ok(())
}

/// Print one response; returns 1 if it was a failure.
fn report(path: &str, status: reqwest::StatusCode, body: &Value) -> usize {
  println!("{body}");
  if status.is_success() {
    0
  } else {
    tracing::warn!(%status, path, "fixture rejected");
    1
  }
}
