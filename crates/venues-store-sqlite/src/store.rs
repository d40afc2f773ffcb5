//! [`SqliteStore`] — the SQLite implementation of [`VenueStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use venues_core::{
  rating::{NewRating, Rating, VenueRating},
  store::VenueStore,
  venue::{Address, NewVenue, Venue, VenueSummary},
};

use crate::{
  encode::{RawAddress, RawVenue, RawVenueRating, encode_dt},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A venue store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

fn not_found(venue_id: i64) -> Error {
  Error::Core(venues_core::Error::VenueNotFound(venue_id))
}

// ─── VenueStore impl ─────────────────────────────────────────────────────────

impl VenueStore for SqliteStore {
  type Error = Error;

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn list_venues(&self, limit: usize) -> Result<Vec<VenueSummary>> {
    let limit_val = i64::try_from(limit).unwrap_or(i64::MAX);

    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT
             v.id, v.name, v.image_url, v.description,
             a.street, a.city, a.state, a.zip,
             v.closed,
             AVG(r.score) AS rating
           FROM venues v
           JOIN addresses a     ON a.id = v.address_id
           LEFT JOIN ratings r  ON r.venue_id = v.id
           GROUP BY v.id, a.id
           ORDER BY v.name COLLATE NOCASE, v.id
           LIMIT ?1",
        )?;

        let rows = stmt
          .query_map(rusqlite::params![limit_val], |row| {
            Ok(VenueSummary {
              id:          row.get(0)?,
              name:        row.get(1)?,
              image_url:   row.get(2)?,
              description: row.get(3)?,
              street:      row.get(4)?,
              city:        row.get(5)?,
              state:       row.get(6)?,
              zip:         row.get(7)?,
              closed:      row.get(8)?,
              rating:      row.get(9)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    Ok(rows)
  }

  async fn list_ratings(&self, venue_id: i64) -> Result<Vec<VenueRating>> {
    let raws: Vec<RawVenueRating> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT r.id, r.venue_id, r.score, r.review, r.inserted, v.name
           FROM ratings r
           JOIN venues v ON v.id = r.venue_id
           WHERE r.venue_id = ?1
           ORDER BY r.id",
        )?;

        let rows = stmt
          .query_map(rusqlite::params![venue_id], |row| {
            Ok(RawVenueRating {
              id:         row.get(0)?,
              venue_id:   row.get(1)?,
              score:      row.get(2)?,
              review:     row.get(3)?,
              inserted:   row.get(4)?,
              venue_name: row.get(5)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawVenueRating::into_venue_rating).collect()
  }

  async fn get_venue(&self, venue_id: i64) -> Result<Option<Venue>> {
    let raw: Option<RawVenue> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, address_id, name, closed, image_url, description, inserted
               FROM venues WHERE id = ?1",
              rusqlite::params![venue_id],
              RawVenue::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawVenue::into_venue).transpose()
  }

  async fn get_address(&self, address_id: i64) -> Result<Option<Address>> {
    let raw: Option<RawAddress> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, street, city, state, zip, inserted
               FROM addresses WHERE id = ?1",
              rusqlite::params![address_id],
              RawAddress::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawAddress::into_address).transpose()
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn add_venue(&self, input: NewVenue) -> Result<Venue> {
    input.validate()?;

    let inserted = Utc::now();
    let at_str   = encode_dt(inserted);
    let NewVenue { name, closed, image_url, description, address } = input;
    let (street, zip) = (address.street.clone(), address.zip.clone());
    let venue_name    = name.clone();
    let venue_image   = image_url.clone();
    let venue_desc    = description.clone();

    // The address upsert and venue insert commit together. The UNIQUE
    // (street, zip) constraint makes concurrent adds converge on one row.
    let outcome: Option<(i64, i64, usize)> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let created = tx.execute(
          "INSERT INTO addresses (street, city, state, zip, inserted)
           VALUES (?1, ?2, ?3, ?4, ?5)
           ON CONFLICT (street, zip) DO NOTHING",
          rusqlite::params![
            address.street,
            address.city,
            address.state,
            address.zip,
            at_str,
          ],
        )?;

        let address_id: Option<i64> = tx
          .query_row(
            "SELECT id FROM addresses WHERE street = ?1 AND zip = ?2",
            rusqlite::params![address.street, address.zip],
            |r| r.get(0),
          )
          .optional()?;
        let Some(address_id) = address_id else {
          return Ok(None);
        };

        tx.execute(
          "INSERT INTO venues (address_id, name, closed, image_url, description, inserted)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![address_id, name, closed, image_url, description, at_str],
        )?;
        let venue_id = tx.last_insert_rowid();

        tx.commit()?;
        Ok(Some((address_id, venue_id, created)))
      })
      .await?;

    let Some((address_id, venue_id, created)) = outcome else {
      return Err(Error::Core(venues_core::Error::AddressConflict { street, zip }));
    };

    tracing::debug!(
      venue_id,
      address_id,
      address_reused = created == 0,
      "venue added"
    );

    Ok(Venue {
      id: venue_id,
      address_id,
      name: venue_name,
      closed,
      image_url: venue_image,
      description: venue_desc,
      inserted,
    })
  }

  async fn add_rating(&self, input: NewRating) -> Result<Rating> {
    let inserted = Utc::now();
    let at_str   = encode_dt(inserted);
    let NewRating { venue_id, score, review } = input;
    let stored_review = review.clone();

    let rating_id: Option<i64> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let exists = tx
          .query_row(
            "SELECT 1 FROM venues WHERE id = ?1",
            rusqlite::params![venue_id],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);
        if !exists {
          return Ok(None);
        }

        tx.execute(
          "INSERT INTO ratings (venue_id, score, review, inserted)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![venue_id, score, stored_review, at_str],
        )?;
        let id = tx.last_insert_rowid();

        tx.commit()?;
        Ok(Some(id))
      })
      .await?;

    let id = rating_id.ok_or_else(|| not_found(venue_id))?;
    Ok(Rating { id, venue_id, score, review, inserted })
  }

  async fn set_closed(&self, venue_id: i64) -> Result<()> {
    // SQLite counts matched rows, so closing an already-closed venue still
    // reports one change.
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE venues SET closed = 1 WHERE id = ?1",
          rusqlite::params![venue_id],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(not_found(venue_id));
    }
    Ok(())
  }

  async fn delete_venue(&self, venue_id: i64) -> Result<()> {
    // Ratings go with it via ON DELETE CASCADE.
    let deleted = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM venues WHERE id = ?1",
          rusqlite::params![venue_id],
        )?)
      })
      .await?;

    if deleted == 0 {
      return Err(not_found(venue_id));
    }
    Ok(())
  }
}
