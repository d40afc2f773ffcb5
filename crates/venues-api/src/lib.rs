//! JSON REST API for the venue ratings service.
//!
//! Exposes an axum [`Router`] backed by any [`venues_core::store::VenueStore`].
//! HTML pages, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! Router::new().merge(venues_api::api_router(store.clone(), 25))
//! ```

pub mod error;
pub mod lenient;
pub mod ratings;
pub mod venues;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get, post},
};
use venues_core::store::VenueStore;

pub use error::ApiError;

/// State shared by every API handler.
pub struct ApiState<S> {
  pub store:       Arc<S>,
  /// Maximum number of venues returned by `GET /get/venues`.
  pub venue_limit: usize,
}

impl<S> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    Self { store: Arc::clone(&self.store), venue_limit: self.venue_limit }
  }
}

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be merged into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>, venue_limit: usize) -> Router<()>
where
  S: VenueStore + 'static,
{
  Router::new()
    // Writes
    .route("/add/venue", post(venues::add::<S>))
    .route("/add/rating", post(ratings::add::<S>))
    .route("/update/closed", post(venues::close::<S>))
    .route("/delete/venue", delete(venues::remove::<S>))
    // Reads
    .route("/get/venues", get(venues::list::<S>))
    .route("/get/ratings/{venue_id}", get(ratings::list::<S>))
    .with_state(ApiState { store, venue_limit })
}
