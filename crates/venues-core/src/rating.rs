//! Ratings — scored reviews attached to a venue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shown in place of an average when a venue has no ratings.
pub const NO_RATING: &str = "0.0";

/// A persisted rating row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
  pub id:       i64,
  pub venue_id: i64,
  pub score:    i64,
  pub review:   Option<String>,
  pub inserted: DateTime<Utc>,
}

/// Input to [`crate::store::VenueStore::add_rating`].
#[derive(Debug, Clone)]
pub struct NewRating {
  pub venue_id: i64,
  pub score:    i64,
  pub review:   Option<String>,
}

/// A rating joined with the name of the venue it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueRating {
  pub rating:     Rating,
  pub venue_name: String,
}

/// Format an average score to two decimals, or [`NO_RATING`] when absent.
pub fn format_rating(avg: Option<f64>) -> String {
  match avg {
    Some(avg) => format!("{avg:.2}"),
    None => NO_RATING.to_owned(),
  }
}
