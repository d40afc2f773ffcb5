//! Handlers for venue endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/add/venue` | Body: [`AddVenueBody`]; returns `{"add":"success"}` |
//! | `POST`   | `/update/closed` | Body: [`VenueIdBody`]; returns `{"update":"success"}` |
//! | `DELETE` | `/delete/venue` | Body: [`VenueIdBody`]; returns `{"delete":"success"}` |
//! | `GET`    | `/get/venues` | `{"venues":[...]}`, sorted by name |

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use venues_core::{
  store::VenueStore,
  venue::{DEFAULT_CITY, DEFAULT_STATE, NewAddress, NewVenue, VenueSummary},
};

use crate::{ApiState, error::ApiError, lenient};

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /add/venue`.
#[derive(Debug, Deserialize)]
pub struct AddVenueBody {
  #[serde(rename = "Venue")]
  pub venue: VenueBody,
}

#[derive(Debug, Deserialize)]
pub struct VenueBody {
  pub name:        String,
  pub closed:      Option<bool>,
  pub image_url:   Option<String>,
  pub description: Option<String>,
  #[serde(rename = "Address")]
  pub address:     AddressBody,
}

#[derive(Debug, Deserialize)]
pub struct AddressBody {
  pub street: String,
  pub city:   Option<String>,
  pub state:  Option<String>,
  #[serde(default, deserialize_with = "lenient::opt_text")]
  pub zip:    Option<String>,
}

impl From<AddressBody> for NewAddress {
  fn from(b: AddressBody) -> Self {
    NewAddress {
      street: b.street,
      city:   b.city.unwrap_or_else(|| DEFAULT_CITY.to_owned()),
      state:  b.state.unwrap_or_else(|| DEFAULT_STATE.to_owned()),
      zip:    b.zip.unwrap_or_default(),
    }
  }
}

impl From<VenueBody> for NewVenue {
  fn from(b: VenueBody) -> Self {
    NewVenue {
      name:        b.name,
      closed:      b.closed.unwrap_or(false),
      image_url:   b.image_url,
      description: b.description,
      address:     b.address.into(),
    }
  }
}

/// `POST /add/venue`
pub async fn add<S>(
  State(state): State<ApiState<S>>,
  payload: Result<Json<AddVenueBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError>
where
  S: VenueStore + 'static,
{
  let Json(body) = payload?;
  let venue = state
    .store
    .add_venue(NewVenue::from(body.venue))
    .await
    .map_err(ApiError::from_store)?;
  tracing::info!(venue_id = venue.id, name = %venue.name, "added venue");
  Ok(Json(json!({ "add": "success" })))
}

// ─── Close / delete ───────────────────────────────────────────────────────────

/// JSON body accepted by `POST /update/closed` and `DELETE /delete/venue`.
#[derive(Debug, Deserialize)]
pub struct VenueIdBody {
  #[serde(deserialize_with = "lenient::id")]
  pub venue_id: i64,
}

/// `POST /update/closed` — one-way: there is no endpoint to reopen.
pub async fn close<S>(
  State(state): State<ApiState<S>>,
  payload: Result<Json<VenueIdBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError>
where
  S: VenueStore + 'static,
{
  let Json(body) = payload?;
  state
    .store
    .set_closed(body.venue_id)
    .await
    .map_err(ApiError::from_store)?;
  tracing::info!(venue_id = body.venue_id, "closed venue");
  Ok(Json(json!({ "update": "success" })))
}

/// `DELETE /delete/venue` — also deletes every rating of the venue.
pub async fn remove<S>(
  State(state): State<ApiState<S>>,
  payload: Result<Json<VenueIdBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError>
where
  S: VenueStore + 'static,
{
  let Json(body) = payload?;
  state
    .store
    .delete_venue(body.venue_id)
    .await
    .map_err(ApiError::from_store)?;
  tracing::info!(venue_id = body.venue_id, "deleted venue");
  Ok(Json(json!({ "delete": "success" })))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// One entry of `GET /get/venues`.
#[derive(Debug, Serialize)]
pub struct VenueEntry {
  pub id:          i64,
  pub name:        String,
  pub street:      String,
  pub city:        String,
  pub state:       String,
  pub zip:         String,
  pub closed:      bool,
  pub image_url:   Option<String>,
  pub description: Option<String>,
  /// Two-decimal average, or `"0.0"` for unrated venues.
  pub rating:      String,
}

impl From<VenueSummary> for VenueEntry {
  fn from(v: VenueSummary) -> Self {
    let rating = v.rating_label();
    VenueEntry {
      id: v.id,
      name: v.name,
      street: v.street,
      city: v.city,
      state: v.state,
      zip: v.zip,
      closed: v.closed,
      image_url: v.image_url,
      description: v.description,
      rating,
    }
  }
}

#[derive(Debug, Serialize)]
pub struct VenueList {
  pub venues: Vec<VenueEntry>,
}

/// `GET /get/venues`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
) -> Result<Json<VenueList>, ApiError>
where
  S: VenueStore + 'static,
{
  let venues = state
    .store
    .list_venues(state.venue_limit)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(VenueList {
    venues: venues.into_iter().map(VenueEntry::from).collect(),
  }))
}
