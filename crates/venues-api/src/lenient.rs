//! Serde helpers for fields that clients send as either numbers or strings.
//!
//! Fixture files and older clients send `venue_id` as `"3"` as often as `3`,
//! and zip codes as bare numbers.

use serde::{Deserialize, Deserializer, de::Error as _};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumOrText {
  Num(i64),
  Text(String),
}

/// Deserialize an integer id from `3` or `"3"`.
pub fn id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
  D: Deserializer<'de>,
{
  match NumOrText::deserialize(deserializer)? {
    NumOrText::Num(n) => Ok(n),
    NumOrText::Text(s) => s
      .trim()
      .parse()
      .map_err(|_| D::Error::custom(format!("invalid id {s:?}"))),
  }
}

/// Deserialize optional text, accepting a bare integer as its decimal form.
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<NumOrText>::deserialize(deserializer)?.map(|v| match v {
    NumOrText::Num(n) => n.to_string(),
    NumOrText::Text(s) => s,
  }))
}

#[cfg(test)]
mod tests {
  use serde::Deserialize;

  #[derive(Debug, Deserialize)]
  struct Body {
    #[serde(deserialize_with = "super::id")]
    venue_id: i64,
    #[serde(default, deserialize_with = "super::opt_text")]
    zip:      Option<String>,
  }

  #[test]
  fn id_accepts_number_and_string() {
    let a: Body = serde_json::from_str(r#"{"venue_id": 3}"#).unwrap();
    let b: Body = serde_json::from_str(r#"{"venue_id": " 3"}"#).unwrap();
    assert_eq!(a.venue_id, 3);
    assert_eq!(b.venue_id, 3);
  }

  #[test]
  fn id_rejects_non_numeric_string() {
    assert!(serde_json::from_str::<Body>(r#"{"venue_id": "three"}"#).is_err());
  }

  #[test]
  fn zip_accepts_number_string_null_or_missing() {
    let n: Body = serde_json::from_str(r#"{"venue_id": 1, "zip": 78701}"#).unwrap();
    let s: Body = serde_json::from_str(r#"{"venue_id": 1, "zip": "78701"}"#).unwrap();
    let null: Body = serde_json::from_str(r#"{"venue_id": 1, "zip": null}"#).unwrap();
    let missing: Body = serde_json::from_str(r#"{"venue_id": 1}"#).unwrap();
    assert_eq!(n.zip.as_deref(), Some("78701"));
    assert_eq!(s.zip.as_deref(), Some("78701"));
    assert_eq!(null.zip, None);
    assert_eq!(missing.zip, None);
  }
}
