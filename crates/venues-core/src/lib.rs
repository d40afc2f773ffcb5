//! Core types and trait definitions for the venue ratings store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The store, API and server crates all build on it.

pub mod error;
pub mod rating;
pub mod store;
pub mod venue;

pub use error::{Error, Result};
