//! Handlers for rating endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/add/rating` | Body: [`AddRatingBody`]; 404 if the venue does not exist |
//! | `GET`  | `/get/ratings/{venue_id}` | `{"ratings":[...]}`; empty for unknown venues |

use axum::{
  Json,
  extract::{
    Path, State,
    rejection::{JsonRejection, PathRejection},
  },
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use venues_core::{
  rating::{NewRating, VenueRating},
  store::VenueStore,
};

use crate::{ApiState, error::ApiError, lenient};

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /add/rating`.
#[derive(Debug, Deserialize)]
pub struct AddRatingBody {
  #[serde(rename = "Rating")]
  pub rating: RatingBody,
}

#[derive(Debug, Deserialize)]
pub struct RatingBody {
  #[serde(deserialize_with = "lenient::id")]
  pub venue_id: i64,
  pub score:    i64,
  pub review:   Option<String>,
}

impl From<RatingBody> for NewRating {
  fn from(b: RatingBody) -> Self {
    NewRating { venue_id: b.venue_id, score: b.score, review: b.review }
  }
}

/// `POST /add/rating`
pub async fn add<S>(
  State(state): State<ApiState<S>>,
  payload: Result<Json<AddRatingBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError>
where
  S: VenueStore + 'static,
{
  let Json(body) = payload?;
  let rating = state
    .store
    .add_rating(NewRating::from(body.rating))
    .await
    .map_err(ApiError::from_store)?;
  tracing::info!(rating_id = rating.id, venue_id = rating.venue_id, "added rating");
  Ok(Json(json!({ "add": "success" })))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// One entry of `GET /get/ratings/{venue_id}`.
#[derive(Debug, Serialize)]
pub struct RatingEntry {
  pub score:  i64,
  pub review: Option<String>,
  /// Name of the rated venue.
  pub venue:  String,
}

impl From<VenueRating> for RatingEntry {
  fn from(r: VenueRating) -> Self {
    RatingEntry {
      score:  r.rating.score,
      review: r.rating.review,
      venue:  r.venue_name,
    }
  }
}

#[derive(Debug, Serialize)]
pub struct RatingList {
  pub ratings: Vec<RatingEntry>,
}

/// `GET /get/ratings/{venue_id}`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
  venue_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<RatingList>, ApiError>
where
  S: VenueStore + 'static,
{
  let Path(venue_id) = venue_id?;
  let ratings = state
    .store
    .list_ratings(venue_id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(RatingList {
    ratings: ratings.into_iter().map(RatingEntry::from).collect(),
  }))
}
