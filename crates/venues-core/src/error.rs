//! Error types for `venues-core`.

use thiserror::Error;

/// The error taxonomy shared by every layer of the service.
///
/// Storage backends convert their own errors into this type so the HTTP layer
/// can pick a status code without knowing which backend is in use.
#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid payload: {0}")]
  Validation(String),

  #[error("venue not found: {0}")]
  VenueNotFound(i64),

  #[error("address ({street:?}, {zip:?}) could not be created or found")]
  AddressConflict { street: String, zip: String },

  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn validation(msg: impl Into<String>) -> Self {
    Self::Validation(msg.into())
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
