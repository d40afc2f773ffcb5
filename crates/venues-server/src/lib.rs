//! HTTP server for the venue ratings service.
//!
//! Combines the JSON API from [`venues_api`] with the server-rendered HTML
//! pages in [`pages`], backed by any [`VenueStore`].

pub mod error;
pub mod pages;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use venues_core::store::{DEFAULT_VENUE_LIMIT, VenueStore};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `VENUES_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:        String,
  #[serde(default = "default_port")]
  pub port:        u16,
  #[serde(default = "default_store_path")]
  pub store_path:  PathBuf,
  /// Maximum number of venues on the listing page and `GET /get/venues`.
  #[serde(default = "default_venue_limit")]
  pub venue_limit: usize,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 5000 }

fn default_store_path() -> PathBuf { PathBuf::from("venues.db") }

fn default_venue_limit() -> usize { DEFAULT_VENUE_LIMIT }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:        default_host(),
      port:        default_port(),
      store_path:  default_store_path(),
      venue_limit: default_venue_limit(),
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through the page handlers.
pub struct AppState<S> {
  pub store:  Arc<S>,
  pub config: Arc<ServerConfig>,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      store:  Arc::clone(&self.store),
      config: Arc::clone(&self.config),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full axum [`Router`]: HTML pages plus the JSON API.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: VenueStore + 'static,
{
  let api = venues_api::api_router(Arc::clone(&state.store), state.config.venue_limit);

  Router::new()
    .route("/",                    get(pages::index::<S>))
    .route("/ratings/{venue_id}",  get(pages::ratings::<S>))
    .with_state(state)
    .merge(api)
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────
