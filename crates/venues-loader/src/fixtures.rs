//! Fixture documents replayed against the API.
//!
//! Entries are kept as raw JSON so they reach the server exactly as written;
//! validation is the server's job.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

/// `{"venues": [<add-venue payload>, ...]}`
#[derive(Debug, Deserialize)]
pub struct VenueFixtures {
  pub venues: Vec<Value>,
}

/// `{"ratings": [<add-rating payload>, ...]}`
#[derive(Debug, Deserialize)]
pub struct RatingFixtures {
  pub ratings: Vec<Value>,
}

fn read<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
  let raw = std::fs::read_to_string(path)
    .with_context(|| format!("reading fixture file {}", path.display()))?;
  serde_json::from_str(&raw)
    .with_context(|| format!("parsing fixture file {}", path.display()))
}

pub fn read_venues(path: &Path) -> Result<VenueFixtures> { read(path) }

pub fn read_ratings(path: &Path) -> Result<RatingFixtures> { read(path) }
