//! Server-rendered HTML pages.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/` | Venue listing with address, average rating and status |
//! | `GET`  | `/ratings/{venue_id}` | Ratings of one venue; 404 if the venue is unknown |

use axum::{
  extract::{Path, State, rejection::PathRejection},
  response::Html,
};
use venues_core::{
  rating::VenueRating,
  store::VenueStore,
  venue::{Venue, VenueSummary},
};

use crate::{AppState, error::Error};

const STYLE: &str = "
body { font-family: sans-serif; margin: 2rem auto; max-width: 60rem; color: #222; }
table { border-collapse: collapse; width: 100%; }
th, td { border-bottom: 1px solid #ddd; padding: 0.5rem; text-align: left; vertical-align: top; }
img { max-width: 6rem; }
.closed { color: #a00; font-weight: bold; }
";

/// Escape text for use inside HTML element content and quoted attributes.
pub fn escape(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(c),
    }
  }
  out
}

fn page(title: &str, body: &str) -> Html<String> {
  Html(format!(
    r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>
"#,
    title = escape(title),
  ))
}

// ─── Venue listing ───────────────────────────────────────────────────────────

fn venue_row(v: &VenueSummary) -> String {
  let image = v
    .image_url
    .as_deref()
    .map(|url| format!(r#"<img src="{}" alt="">"#, escape(url)))
    .unwrap_or_default();
  let status = if v.closed {
    r#"<span class="closed">Closed</span>"#
  } else {
    "Open"
  };
  format!(
    r#"<tr>
  <td>{image}</td>
  <td><a href="/ratings/{id}">{name}</a><br>{description}</td>
  <td>{street}<br>{city}, {state} {zip}</td>
  <td>{rating}</td>
  <td>{status}</td>
</tr>
"#,
    id = v.id,
    name = escape(&v.name),
    description = escape(v.description.as_deref().unwrap_or("")),
    street = escape(&v.street),
    city = escape(&v.city),
    state = escape(&v.state),
    zip = escape(&v.zip),
    rating = v.rating_label(),
  )
}

pub fn render_venues(venues: &[VenueSummary]) -> Html<String> {
  let mut body = String::from("<h1>Venues</h1>\n");
  if venues.is_empty() {
    body.push_str("<p>No venues yet.</p>\n");
  } else {
    body.push_str(
      "<table>\n<tr><th></th><th>Venue</th><th>Address</th><th>Rating</th><th>Status</th></tr>\n",
    );
    for v in venues {
      body.push_str(&venue_row(v));
    }
    body.push_str("</table>\n");
  }
  page("Venues", &body)
}

/// `GET /`
pub async fn index<S>(State(state): State<AppState<S>>) -> Result<Html<String>, Error>
where
  S: VenueStore + 'static,
{
  let venues = state
    .store
    .list_venues(state.config.venue_limit)
    .await
    .map_err(Error::from_store)?;
  Ok(render_venues(&venues))
}

// ─── Ratings of one venue ────────────────────────────────────────────────────

pub fn render_ratings(venue: &Venue, ratings: &[VenueRating]) -> Html<String> {
  let mut body = format!("<h1>Reviews for {}</h1>\n", escape(&venue.name));
  if venue.closed {
    body.push_str("<p class=\"closed\">This venue has closed.</p>\n");
  }
  if ratings.is_empty() {
    body.push_str("<p>No reviews yet.</p>\n");
  } else {
    body.push_str("<table>\n<tr><th>Score</th><th>Review</th><th>Date</th></tr>\n");
    for r in ratings {
      body.push_str(&format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        r.rating.score,
        escape(r.rating.review.as_deref().unwrap_or("")),
        r.rating.inserted.format("%Y-%m-%d"),
      ));
    }
    body.push_str("</table>\n");
  }
  body.push_str("<p><a href=\"/\">All venues</a></p>\n");
  page(&format!("Reviews for {}", venue.name), &body)
}

/// `GET /ratings/{venue_id}`
pub async fn ratings<S>(
  State(state): State<AppState<S>>,
  venue_id: Result<Path<i64>, PathRejection>,
) -> Result<Html<String>, Error>
where
  S: VenueStore + 'static,
{
  let Path(venue_id) = venue_id?;
  let venue = state
    .store
    .get_venue(venue_id)
    .await
    .map_err(Error::from_store)?
    .ok_or_else(|| Error::NotFound(format!("venue {venue_id} not found")))?;
  let ratings = state
    .store
    .list_ratings(venue_id)
    .await
    .map_err(Error::from_store)?;
  Ok(render_ratings(&venue, &ratings))
}
