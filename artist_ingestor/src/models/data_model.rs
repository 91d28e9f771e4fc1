//! The decoded result of one aggregation cycle.

use crate::models::{
    artist::{ArtistId, ArtistRecord},
    tour::{DateRecord, LocationRecord, RelationRecord},
};

/// Which tour shape the source provided during the cycle.
///
/// The variant is the cycle's recorded outcome: when relations were available
/// every artist is assembled from them, even artists without a relation entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TourData {
    /// The combined relations resource, guaranteed non-empty.
    Relations(Vec<RelationRecord>),
    /// Locations and dates, to be joined by position.
    Fallback {
        locations: Vec<LocationRecord>,
        dates: Vec<DateRecord>,
    },
}

/// Everything one aggregation cycle retrieved. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataModel {
    pub artists: Vec<ArtistRecord>,
    pub tours: TourData,
}

impl DataModel {
    pub fn artist(&self, id: ArtistId) -> Option<&ArtistRecord> {
        self.artists.iter().find(|a| a.id == id)
    }

    /// Linear scan by exact, case-sensitive name. First match wins.
    pub fn artist_by_name(&self, name: &str) -> Option<&ArtistRecord> {
        self.artists.iter().find(|a| a.name == name)
    }

    pub fn uses_relations(&self) -> bool {
        matches!(self.tours, TourData::Relations(_))
    }
}
