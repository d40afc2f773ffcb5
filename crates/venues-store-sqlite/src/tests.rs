//! Integration tests for `SqliteStore` against an in-memory database.

use venues_core::{
  rating::{NewRating, format_rating},
  store::{DEFAULT_VENUE_LIMIT, VenueStore},
  venue::{NewAddress, NewVenue},
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn venue(name: &str, street: &str, zip: &str) -> NewVenue {
  let mut v = NewVenue::new(name, NewAddress::new(street, zip));
  v.image_url = Some(format!("https://img.example.com/{name}.png"));
  v.description = Some(format!("{name} serves food"));
  v
}

fn rating(venue_id: i64, score: i64, review: &str) -> NewRating {
  NewRating { venue_id, score, review: Some(review.into()) }
}

// ─── Venues ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_venue_and_get() {
  let s = store().await;

  let v = s.add_venue(venue("Taco Hut", "1 Main", "78701")).await.unwrap();
  assert!(!v.closed);

  let fetched = s.get_venue(v.id).await.unwrap().unwrap();
  assert_eq!(fetched, v);

  let address = s.get_address(v.address_id).await.unwrap().unwrap();
  assert_eq!(address.street, "1 Main");
  assert_eq!(address.city, "Austin");
  assert_eq!(address.state, "TX");
  assert_eq!(address.zip, "78701");
}

#[tokio::test]
async fn get_venue_missing_returns_none() {
  let s = store().await;
  assert!(s.get_venue(42).await.unwrap().is_none());
  assert!(s.get_address(42).await.unwrap().is_none());
}

#[tokio::test]
async fn add_venue_keeps_closed_flag() {
  let s = store().await;
  let mut input = venue("Gone Diner", "9 Elm", "78702");
  input.closed = true;

  let v = s.add_venue(input).await.unwrap();
  assert!(s.get_venue(v.id).await.unwrap().unwrap().closed);
}

#[tokio::test]
async fn add_venue_rejects_invalid_payload() {
  let s = store().await;

  let err = s.add_venue(venue("", "1 Main", "78701")).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(venues_core::Error::Validation(_))
  ));

  let mut bad_state = venue("Taco Hut", "1 Main", "78701");
  bad_state.address.state = "Texas".into();
  let err = s.add_venue(bad_state).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(venues_core::Error::Validation(_))
  ));

  assert!(s.list_venues(DEFAULT_VENUE_LIMIT).await.unwrap().is_empty());
}

// ─── Address reuse ───────────────────────────────────────────────────────────

#[tokio::test]
async fn matching_street_and_zip_reuses_address() {
  let s = store().await;

  let a = s.add_venue(venue("Taco Hut", "1 Main", "78701")).await.unwrap();
  let b = s.add_venue(venue("Burger Barn", "1 Main", "78701")).await.unwrap();

  assert_ne!(a.id, b.id);
  assert_eq!(a.address_id, b.address_id);
}

#[tokio::test]
async fn reused_address_keeps_original_city() {
  let s = store().await;

  let a = s.add_venue(venue("Taco Hut", "1 Main", "78701")).await.unwrap();
  let mut other = venue("Burger Barn", "1 Main", "78701");
  other.address.city = "Round Rock".into();
  let b = s.add_venue(other).await.unwrap();

  assert_eq!(a.address_id, b.address_id);
  let address = s.get_address(b.address_id).await.unwrap().unwrap();
  assert_eq!(address.city, "Austin");
}

#[tokio::test]
async fn new_street_or_zip_creates_address() {
  let s = store().await;

  let a = s.add_venue(venue("Taco Hut", "1 Main", "78701")).await.unwrap();
  let b = s.add_venue(venue("Burger Barn", "2 Main", "78701")).await.unwrap();
  let c = s.add_venue(venue("Pho Place", "1 Main", "78702")).await.unwrap();

  assert_ne!(a.address_id, b.address_id);
  assert_ne!(a.address_id, c.address_id);
  assert_ne!(b.address_id, c.address_id);
}

#[tokio::test]
async fn missing_zip_still_deduplicates() {
  let s = store().await;

  let a = s.add_venue(venue("Taco Hut", "1 Main", "")).await.unwrap();
  let b = s.add_venue(venue("Burger Barn", "1 Main", "")).await.unwrap();
  assert_eq!(a.address_id, b.address_id);
}

// ─── Listing ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_venues_empty() {
  let s = store().await;
  assert!(s.list_venues(DEFAULT_VENUE_LIMIT).await.unwrap().is_empty());
}

#[tokio::test]
async fn list_venues_sorted_by_name_with_address() {
  let s = store().await;
  s.add_venue(venue("Zucchini Zone", "3 Oak", "78703")).await.unwrap();
  s.add_venue(venue("Apple Annex", "1 Oak", "78701")).await.unwrap();
  s.add_venue(venue("Mango Mart", "2 Oak", "78702")).await.unwrap();

  let venues = s.list_venues(DEFAULT_VENUE_LIMIT).await.unwrap();
  let names: Vec<_> = venues.iter().map(|v| v.name.as_str()).collect();
  assert_eq!(names, ["Apple Annex", "Mango Mart", "Zucchini Zone"]);

  let apple = &venues[0];
  assert_eq!(apple.street, "1 Oak");
  assert_eq!(apple.city, "Austin");
  assert_eq!(apple.state, "TX");
  assert_eq!(apple.zip, "78701");
  assert_eq!(apple.image_url.as_deref(), Some("https://img.example.com/Apple Annex.png"));
  assert_eq!(apple.description.as_deref(), Some("Apple Annex serves food"));
}

#[tokio::test]
async fn list_venues_sorts_names_ignoring_case() {
  let s = store().await;
  s.add_venue(venue("Zebra Lounge", "1 Elm", "78701")).await.unwrap();
  s.add_venue(venue("apple bar", "2 Elm", "78701")).await.unwrap();
  s.add_venue(venue("Mohawk", "3 Elm", "78701")).await.unwrap();

  let venues = s.list_venues(DEFAULT_VENUE_LIMIT).await.unwrap();
  let names: Vec<_> = venues.iter().map(|v| v.name.as_str()).collect();
  assert_eq!(names, ["apple bar", "Mohawk", "Zebra Lounge"]);
}

#[tokio::test]
async fn list_venues_respects_limit() {
  let s = store().await;
  for i in 0..5 {
    s.add_venue(venue(&format!("Venue {i}"), &format!("{i} Pine"), "78701"))
      .await
      .unwrap();
  }

  assert_eq!(s.list_venues(3).await.unwrap().len(), 3);
  assert_eq!(s.list_venues(DEFAULT_VENUE_LIMIT).await.unwrap().len(), 5);
}

#[tokio::test]
async fn unrated_venue_lists_without_average() {
  let s = store().await;
  s.add_venue(venue("Taco Hut", "1 Main", "78701")).await.unwrap();

  let venues = s.list_venues(DEFAULT_VENUE_LIMIT).await.unwrap();
  assert_eq!(venues.len(), 1);
  assert_eq!(venues[0].rating, None);
  assert_eq!(venues[0].rating_label(), "0.0");
}

#[tokio::test]
async fn average_rating_is_mean_of_scores() {
  let s = store().await;
  let v = s.add_venue(venue("Taco Hut", "1 Main", "78701")).await.unwrap();
  let other = s.add_venue(venue("Burger Barn", "2 Main", "78701")).await.unwrap();

  for score in [5, 4, 2] {
    s.add_rating(rating(v.id, score, "ok")).await.unwrap();
  }
  s.add_rating(rating(other.id, 1, "bad")).await.unwrap();

  let venues = s.list_venues(DEFAULT_VENUE_LIMIT).await.unwrap();
  let taco = venues.iter().find(|x| x.id == v.id).unwrap();
  let burger = venues.iter().find(|x| x.id == other.id).unwrap();

  assert_eq!(format_rating(taco.rating), "3.67");
  assert_eq!(burger.rating_label(), "1.00");
}

// ─── Ratings ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_rating_and_list() {
  let s = store().await;
  let v = s.add_venue(venue("Taco Hut", "1 Main", "78701")).await.unwrap();

  let first = s.add_rating(rating(v.id, 5, "great")).await.unwrap();
  let second = s.add_rating(rating(v.id, 3, "fine")).await.unwrap();

  let ratings = s.list_ratings(v.id).await.unwrap();
  assert_eq!(ratings.len(), 2);
  assert_eq!(ratings[0].rating, first);
  assert_eq!(ratings[1].rating, second);
  assert!(ratings.iter().all(|r| r.venue_name == "Taco Hut"));
}

#[tokio::test]
async fn list_ratings_for_unrated_venue_is_empty() {
  let s = store().await;
  let v = s.add_venue(venue("Taco Hut", "1 Main", "78701")).await.unwrap();

  assert!(s.list_ratings(v.id).await.unwrap().is_empty());
  assert!(s.list_ratings(999).await.unwrap().is_empty());
}

#[tokio::test]
async fn add_rating_for_missing_venue_errors() {
  let s = store().await;

  let err = s.add_rating(rating(7, 5, "who?")).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(venues_core::Error::VenueNotFound(7))
  ));
}

// ─── Closing ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn set_closed_is_idempotent() {
  let s = store().await;
  let v = s.add_venue(venue("Taco Hut", "1 Main", "78701")).await.unwrap();

  s.set_closed(v.id).await.unwrap();
  s.set_closed(v.id).await.unwrap();

  assert!(s.get_venue(v.id).await.unwrap().unwrap().closed);
  let listed = s.list_venues(DEFAULT_VENUE_LIMIT).await.unwrap();
  assert!(listed[0].closed);
}

#[tokio::test]
async fn set_closed_missing_venue_errors() {
  let s = store().await;

  let err = s.set_closed(3).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(venues_core::Error::VenueNotFound(3))
  ));
}

// ─── Deletion ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_venue_cascades_to_ratings() {
  let s = store().await;
  let v = s.add_venue(venue("Taco Hut", "1 Main", "78701")).await.unwrap();
  let keep = s.add_venue(venue("Burger Barn", "2 Main", "78701")).await.unwrap();
  s.add_rating(rating(v.id, 5, "great")).await.unwrap();
  s.add_rating(rating(v.id, 4, "good")).await.unwrap();
  s.add_rating(rating(keep.id, 2, "meh")).await.unwrap();

  s.delete_venue(v.id).await.unwrap();

  assert!(s.get_venue(v.id).await.unwrap().is_none());
  assert!(s.list_ratings(v.id).await.unwrap().is_empty());

  let listed = s.list_venues(DEFAULT_VENUE_LIMIT).await.unwrap();
  assert_eq!(listed.len(), 1);
  assert_eq!(listed[0].id, keep.id);
  assert_eq!(s.list_ratings(keep.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_venue_keeps_shared_address() {
  let s = store().await;
  let a = s.add_venue(venue("Taco Hut", "1 Main", "78701")).await.unwrap();
  let b = s.add_venue(venue("Burger Barn", "1 Main", "78701")).await.unwrap();

  s.delete_venue(a.id).await.unwrap();
  assert!(s.get_address(b.address_id).await.unwrap().is_some());
}

#[tokio::test]
async fn delete_missing_venue_errors() {
  let s = store().await;

  let err = s.delete_venue(11).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(venues_core::Error::VenueNotFound(11))
  ));
}

#[tokio::test]
async fn store_errors_convert_into_core_errors() {
  let s = store().await;

  let err: venues_core::Error = s.delete_venue(5).await.unwrap_err().into();
  assert!(matches!(err, venues_core::Error::VenueNotFound(5)));
}
