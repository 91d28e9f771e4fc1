//! The aggregation cycle: retrieve, decode and reconcile the four resources.
//!
//! ## Retrieval order
//! 1. The root index (names the four sub-resources). Fatal on failure.
//! 2. Artists. Fatal on failure.
//! 3. Relations, best-effort. A transport failure, a decode failure and an empty
//!    collection all mean "unavailable" and lead to the fallback.
//! 4. Relations available: done. Locations and dates are never requested.
//! 5. Fallback: locations, then dates. Either failure is fatal.
//!
//! The order is encoded as a small state machine ([`Stage`]) so each transition
//! can be read in one place.
//!
//! ## Concurrency
//! [`Aggregator::spawn`] runs the whole cycle on a tokio task and hands back a
//! one-shot receiver that yields exactly one outcome. Every retrieval is bounded
//! by the aggregator's deadline; expiry counts as a transport failure.

use std::{sync::Arc, time::Duration};

use serde::de::DeserializeOwned;
use snafu::ResultExt;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::{
    client::{RawResourceClient, TransportError},
    config::IngestorConfig,
    errors::{DecodeSnafu, FetchError, TransportSnafu, WorkerLostSnafu},
    models::{
        ArtistRecord, DataModel, DateRecord, Listing, LocationRecord, RelationRecord,
        ResourceIndex, TourData,
    },
};

pub const INDEX_RESOURCE: &str = "index";
pub const ARTISTS_RESOURCE: &str = "artists";
pub const RELATIONS_RESOURCE: &str = "relations";
pub const LOCATIONS_RESOURCE: &str = "locations";
pub const DATES_RESOURCE: &str = "dates";

/// Receiving end of a spawned aggregation cycle.
pub type Completion = oneshot::Receiver<Result<DataModel, FetchError>>;

enum Stage {
    FetchIndex,
    FetchArtists {
        index: ResourceIndex,
    },
    TryRelations {
        index: ResourceIndex,
        artists: Vec<ArtistRecord>,
    },
    NeedFallback {
        index: ResourceIndex,
        artists: Vec<ArtistRecord>,
    },
    Done(DataModel),
    Failed(FetchError),
}

/// Runs aggregation cycles against one [`RawResourceClient`].
#[derive(Clone)]
pub struct Aggregator {
    client: Arc<dyn RawResourceClient>,
    root: String,
    deadline: Duration,
}

impl Aggregator {
    /// Creates an aggregator reading the root index from `root`.
    pub fn new(client: Arc<dyn RawResourceClient>, root: impl Into<String>) -> Self {
        Self {
            client,
            root: root.into(),
            deadline: IngestorConfig::default().request_timeout(),
        }
    }

    pub fn from_config(client: Arc<dyn RawResourceClient>, config: &IngestorConfig) -> Self {
        Self::new(client, config.api_url.clone()).with_deadline(config.request_timeout())
    }

    /// Bounds every single retrieval by `deadline`.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// Runs one cycle on a background task.
    ///
    /// The returned receiver yields exactly one value. If the task dies before
    /// reporting, the receiver yields a `RecvError` instead.
    pub fn spawn(self) -> Completion {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let outcome = self.run().await;
            if tx.send(outcome).is_err() {
                debug!("aggregation outcome dropped, nobody is waiting");
            }
        });
        rx
    }

    /// Runs one cycle on a background task and waits for its outcome.
    pub async fn aggregate(self) -> Result<DataModel, FetchError> {
        match self.spawn().await {
            Ok(outcome) => outcome,
            Err(_) => WorkerLostSnafu.fail(),
        }
    }

    /// Runs one cycle on the current task.
    pub async fn run(&self) -> Result<DataModel, FetchError> {
        let mut stage = Stage::FetchIndex;
        loop {
            stage = match stage {
                Stage::FetchIndex => {
                    match self.retrieve_document(INDEX_RESOURCE, &self.root).await {
                        Ok(index) => Stage::FetchArtists { index },
                        Err(e) => Stage::Failed(e),
                    }
                }
                Stage::FetchArtists { index } => {
                    match self.retrieve_listing(ARTISTS_RESOURCE, &index.artists).await {
                        Ok(artists) => Stage::TryRelations { index, artists },
                        Err(e) => Stage::Failed(e),
                    }
                }
                Stage::TryRelations { index, artists } => {
                    match self
                        .retrieve_listing::<RelationRecord>(RELATIONS_RESOURCE, &index.relation)
                        .await
                    {
                        Ok(relations) if !relations.is_empty() => Stage::Done(DataModel {
                            artists,
                            tours: TourData::Relations(relations),
                        }),
                        Ok(_) => {
                            warn!("relations resource is empty, falling back to locations and dates");
                            Stage::NeedFallback { index, artists }
                        }
                        Err(e) => {
                            warn!(error = %e, "relations unavailable, falling back to locations and dates");
                            Stage::NeedFallback { index, artists }
                        }
                    }
                }
                Stage::NeedFallback { index, artists } => match self.retrieve_fallback(&index).await {
                    Ok((locations, dates)) => Stage::Done(DataModel {
                        artists,
                        tours: TourData::Fallback { locations, dates },
                    }),
                    Err(e) => Stage::Failed(e),
                },
                Stage::Done(model) => {
                    info!(
                        artists = model.artists.len(),
                        relations = model.uses_relations(),
                        "aggregation cycle complete"
                    );
                    return Ok(model);
                }
                Stage::Failed(err) => {
                    warn!(error = %err, "aggregation cycle failed");
                    return Err(err);
                }
            };
        }
    }

    async fn retrieve_fallback(
        &self,
        index: &ResourceIndex,
    ) -> Result<(Vec<LocationRecord>, Vec<DateRecord>), FetchError> {
        let locations = self
            .retrieve_listing(LOCATIONS_RESOURCE, &index.locations)
            .await?;
        let dates = self.retrieve_listing(DATES_RESOURCE, &index.dates).await?;
        Ok((locations, dates))
    }

    async fn retrieve_listing<T: DeserializeOwned>(
        &self,
        resource: &str,
        locator: &str,
    ) -> Result<Vec<T>, FetchError> {
        let listing: Listing<T> = self.retrieve_document(resource, locator).await?;
        Ok(listing.into_vec())
    }

    async fn retrieve_document<T: DeserializeOwned>(
        &self,
        resource: &str,
        locator: &str,
    ) -> Result<T, FetchError> {
        let raw = self.retrieve(resource, locator).await?;
        serde_json::from_str(&raw).context(DecodeSnafu { resource })
    }

    async fn retrieve(&self, resource: &str, locator: &str) -> Result<String, FetchError> {
        debug!(resource, locator, "retrieving");
        let fetched = match tokio::time::timeout(self.deadline, self.client.fetch(locator)).await {
            Ok(fetched) => fetched,
            Err(_) => Err(TransportError::Timeout(self.deadline)),
        };
        fetched.context(TransportSnafu { resource })
    }
}
