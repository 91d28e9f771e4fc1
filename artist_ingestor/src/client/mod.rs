//! Raw resource retrieval.
//!
//! This module defines the [`RawResourceClient`] trait, the seam between the
//! aggregation cycle and whatever transport actually reaches the artist API.
//! Implementations return the resource body as unparsed text; decoding is the
//! aggregator's job.
//!
//! Two implementations ship with the crate:
//! - [`http::HttpResourceClient`] for the real API over `reqwest`.
//! - [`memory::MemoryClient`] serving canned bodies, for tests and offline runs.
//!
//! The trait is object safe and designed for dynamic dispatch
//! (`Arc<dyn RawResourceClient>`), so the aggregator can be handed any transport
//! at runtime.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use artist_ingestor::client::{RawResourceClient, TransportError};
//!
//! struct Canned;
//!
//! #[async_trait]
//! impl RawResourceClient for Canned {
//!     async fn fetch(&self, _resource: &str) -> Result<String, TransportError> {
//!         Ok("[]".to_string())
//!     }
//! }
//! ```

pub mod errors;
pub mod http;
pub mod memory;

use async_trait::async_trait;

pub use errors::TransportError;

/// Retrieves a named resource as raw text.
///
/// `resource` is whatever locator the caller holds: the configured root URL for
/// the index document, and the URLs listed in that index for everything else.
#[async_trait]
pub trait RawResourceClient: Send + Sync {
    /// Fetches the body of `resource`.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The unparsed body.
    /// * `Err(TransportError)` - The resource could not be reached or the transport
    ///   reported a failure.
    async fn fetch(&self, resource: &str) -> Result<String, TransportError>;
}
