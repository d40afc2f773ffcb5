//! The `VenueStore` trait.
//!
//! Implemented by storage backends (e.g. `venues-store-sqlite`). The HTTP
//! crates depend on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  rating::{NewRating, Rating, VenueRating},
  venue::{Address, NewVenue, Venue, VenueSummary},
};

/// Number of venues returned by a listing when the caller has no preference.
pub const DEFAULT_VENUE_LIMIT: usize = 25;

/// Abstraction over a venue store backend.
///
/// Backend errors must convert into [`crate::Error`] so handlers can map them
/// onto HTTP statuses. All methods return `Send` futures so the trait can be
/// used from axum handlers on a multi-threaded runtime.
pub trait VenueStore: Send + Sync {
  type Error: std::error::Error + Into<crate::Error> + Send + Sync + 'static;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Venues ordered by name, each joined with its address and the mean of
  /// its rating scores. At most `limit` rows.
  fn list_venues(
    &self,
    limit: usize,
  ) -> impl Future<Output = Result<Vec<VenueSummary>, Self::Error>> + Send + '_;

  /// Every rating recorded against `venue_id`, oldest first. Empty if the
  /// venue has no ratings or does not exist.
  fn list_ratings(
    &self,
    venue_id: i64,
  ) -> impl Future<Output = Result<Vec<VenueRating>, Self::Error>> + Send + '_;

  /// Retrieve a venue by id. Returns `None` if not found.
  fn get_venue(
    &self,
    venue_id: i64,
  ) -> impl Future<Output = Result<Option<Venue>, Self::Error>> + Send + '_;

  /// Retrieve an address by id. Returns `None` if not found.
  fn get_address(
    &self,
    address_id: i64,
  ) -> impl Future<Output = Result<Option<Address>, Self::Error>> + Send + '_;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Persist a new venue, reusing the address row with the same
  /// `(street, zip)` if one exists.
  fn add_venue(
    &self,
    input: NewVenue,
  ) -> impl Future<Output = Result<Venue, Self::Error>> + Send + '_;

  /// Persist a rating. Fails with `VenueNotFound` if the venue is missing.
  fn add_rating(
    &self,
    input: NewRating,
  ) -> impl Future<Output = Result<Rating, Self::Error>> + Send + '_;

  /// Mark a venue closed. Repeat calls succeed.
  fn set_closed(
    &self,
    venue_id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Delete a venue together with all of its ratings.
  fn delete_venue(
    &self,
    venue_id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
