//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings. Booleans are stored as 0/1
//! integers, which rusqlite maps to `bool` directly.

use chrono::{DateTime, Utc};
use venues_core::{
  rating::{Rating, VenueRating},
  venue::{Address, Venue},
};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from an `addresses` row.
pub struct RawAddress {
  pub id:       i64,
  pub street:   String,
  pub city:     String,
  pub state:    String,
  pub zip:      String,
  pub inserted: String,
}

impl RawAddress {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:       row.get(0)?,
      street:   row.get(1)?,
      city:     row.get(2)?,
      state:    row.get(3)?,
      zip:      row.get(4)?,
      inserted: row.get(5)?,
    })
  }

  pub fn into_address(self) -> Result<Address> {
    Ok(Address {
      id:       self.id,
      street:   self.street,
      city:     self.city,
      state:    self.state,
      zip:      self.zip,
      inserted: decode_dt(&self.inserted)?,
    })
  }
}

/// Raw values read directly from a `venues` row.
pub struct RawVenue {
  pub id:          i64,
  pub address_id:  i64,
  pub name:        String,
  pub closed:      bool,
  pub image_url:   Option<String>,
  pub description: Option<String>,
  pub inserted:    String,
}

impl RawVenue {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      address_id:  row.get(1)?,
      name:        row.get(2)?,
      closed:      row.get(3)?,
      image_url:   row.get(4)?,
      description: row.get(5)?,
      inserted:    row.get(6)?,
    })
  }

  pub fn into_venue(self) -> Result<Venue> {
    Ok(Venue {
      id:          self.id,
      address_id:  self.address_id,
      name:        self.name,
      closed:      self.closed,
      image_url:   self.image_url,
      description: self.description,
      inserted:    decode_dt(&self.inserted)?,
    })
  }
}

/// Raw values from a `ratings` row joined with its venue's name.
pub struct RawVenueRating {
  pub id:         i64,
  pub venue_id:   i64,
  pub score:      i64,
  pub review:     Option<String>,
  pub inserted:   String,
  pub venue_name: String,
}

impl RawVenueRating {
  pub fn into_venue_rating(self) -> Result<VenueRating> {
    Ok(VenueRating {
      rating:     Rating {
        id:       self.id,
        venue_id: self.venue_id,
        score:    self.score,
        review:   self.review,
        inserted: decode_dt(&self.inserted)?,
      },
      venue_name: self.venue_name,
    })
  }
}
