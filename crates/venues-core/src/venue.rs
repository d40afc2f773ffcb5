//! Venues and the street addresses they sit at.
//!
//! Addresses are shared: two venues at the same `(street, zip)` point at the
//! same address row. A venue is only ever mutated by closing it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// City used when an address payload omits one.
pub const DEFAULT_CITY: &str = "Austin";

/// Two-letter state code used when an address payload omits one.
pub const DEFAULT_STATE: &str = "TX";

// ─── Address ─────────────────────────────────────────────────────────────────

/// A persisted street address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
  pub id:       i64,
  pub street:   String,
  pub city:     String,
  pub state:    String,
  /// Empty when the address was added without a zip code.
  pub zip:      String,
  pub inserted: DateTime<Utc>,
}

/// Input half of an [`Address`]; `(street, zip)` is its identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAddress {
  pub street: String,
  pub city:   String,
  pub state:  String,
  pub zip:    String,
}

impl NewAddress {
  /// An address in the default city and state.
  pub fn new(street: impl Into<String>, zip: impl Into<String>) -> Self {
    Self {
      street: street.into(),
      city:   DEFAULT_CITY.to_owned(),
      state:  DEFAULT_STATE.to_owned(),
      zip:    zip.into(),
    }
  }

  pub fn validate(&self) -> Result<()> {
    if self.street.trim().is_empty() {
      return Err(Error::validation("address street must not be empty"));
    }
    if self.state.len() != 2
      || !self.state.chars().all(|c| c.is_ascii_alphabetic())
    {
      return Err(Error::Validation(format!(
        "address state must be a two-letter code, got {:?}",
        self.state
      )));
    }
    Ok(())
  }
}

// ─── Venue ───────────────────────────────────────────────────────────────────

/// A persisted venue row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
  pub id:          i64,
  pub address_id:  i64,
  pub name:        String,
  pub closed:      bool,
  pub image_url:   Option<String>,
  pub description: Option<String>,
  pub inserted:    DateTime<Utc>,
}

/// Input to [`crate::store::VenueStore::add_venue`].
///
/// `inserted` is always set by the store; it is not accepted from callers.
#[derive(Debug, Clone)]
pub struct NewVenue {
  pub name:        String,
  pub closed:      bool,
  pub image_url:   Option<String>,
  pub description: Option<String>,
  pub address:     NewAddress,
}

impl NewVenue {
  /// Convenience constructor with the optional fields left empty.
  pub fn new(name: impl Into<String>, address: NewAddress) -> Self {
    Self {
      name: name.into(),
      closed: false,
      image_url: None,
      description: None,
      address,
    }
  }

  pub fn validate(&self) -> Result<()> {
    if self.name.trim().is_empty() {
      return Err(Error::validation("venue name must not be empty"));
    }
    self.address.validate()
  }
}

// ─── Listing ─────────────────────────────────────────────────────────────────

/// One row of the venue listing: a venue, its address, and its mean score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueSummary {
  pub id:          i64,
  pub name:        String,
  pub image_url:   Option<String>,
  pub description: Option<String>,
  pub street:      String,
  pub city:        String,
  pub state:       String,
  pub zip:         String,
  pub closed:      bool,
  /// `None` when the venue has no ratings yet.
  pub rating:      Option<f64>,
}

impl VenueSummary {
  /// The average score as shown to API clients.
  pub fn rating_label(&self) -> String { crate::rating::format_rating(self.rating) }
}
