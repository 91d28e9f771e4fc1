//! Reconciled per-artist views over the data fetched by `artist_ingestor`.
//!
//! - [`normalize`]: display form of raw location keys.
//! - [`concerts`]: concert list assembly from relations or locations + dates.
//! - [`summary`]: per-artist summaries and name lookup.
//! - [`query`]: list, show and search answers with not-found errors.
//! - [`snapshot`]: the atomically swapped store readers work from.

pub mod concerts;
pub mod normalize;
pub mod query;
pub mod snapshot;
pub mod summary;

pub use concerts::{ConcertSummary, assemble};
pub use normalize::normalize_location;
pub use query::{Query, QueryError, answer};
pub use summary::{ArtistSummary, find_artist_by_name, summary_for};
