//! Retrieval and decoding of the artist API.
//!
//! An [`Aggregator`](aggregate::Aggregator) walks the root index, the artists
//! resource and either the relations resource or the locations + dates pair,
//! producing one immutable [`DataModel`](models::DataModel) per cycle.

pub mod aggregate;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;

pub use aggregate::Aggregator;
pub use errors::{FetchError, FetchErrorKind};
