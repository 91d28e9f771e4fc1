//! Lock-free, read-mostly store for the latest aggregated [`DataModel`].
//!
//! Readers call [`Snapshots::current`] (or the process-wide [`current`]) to get
//! an `Arc<DataModel>` and keep using it for the whole request; a concurrent
//! refresh swaps in a new model without touching the one they hold.
//! Writers call [`refresh`] which only publishes after a successful cycle.
//!
//! Implementation notes:
//! - Uses `arc-swap` for atomic pointer swaps + cheap reads (no RwLock).
//! - Starts empty; until the first successful refresh, `current` returns `None`.
//! - A failed cycle leaves the previous snapshot in place.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use artist_ingestor::{Aggregator, FetchError, models::DataModel};
use once_cell::sync::Lazy;
use tracing::info;

/// A swap point holding at most one published model.
pub struct Snapshots {
    current: ArcSwapOption<DataModel>,
}

impl Default for Snapshots {
    fn default() -> Self {
        Self::new()
    }
}

impl Snapshots {
    pub fn new() -> Self {
        Self {
            current: ArcSwapOption::new(None),
        }
    }

    /// Atomically replaces the published model and returns the new snapshot.
    pub fn publish(&self, model: DataModel) -> Arc<DataModel> {
        let snapshot = Arc::new(model);
        self.current.store(Some(Arc::clone(&snapshot)));
        snapshot
    }

    /// The latest published model, if any.
    pub fn current(&self) -> Option<Arc<DataModel>> {
        self.current.load_full()
    }

    pub fn clear(&self) {
        self.current.store(None);
    }
}

/// Process-wide store: starts empty; filled by [`refresh`] on [`global`].
static GLOBAL: Lazy<Snapshots> = Lazy::new(Snapshots::new);

/// The process-wide store.
pub fn global() -> &'static Snapshots {
    &GLOBAL
}

/// Latest model in the process-wide store.
pub fn current() -> Option<Arc<DataModel>> {
    GLOBAL.current()
}

/// Empties the process-wide store. Useful for tests.
pub fn clear() {
    GLOBAL.clear();
}

/// Runs one aggregation cycle and publishes its model into `store`.
///
/// On failure nothing is written; readers keep seeing the previous snapshot.
pub async fn refresh(store: &Snapshots, aggregator: Aggregator) -> Result<Arc<DataModel>, FetchError> {
    let model = aggregator.aggregate().await?;
    let snapshot = store.publish(model);
    info!(artists = snapshot.artists.len(), "published new snapshot");
    Ok(snapshot)
}
