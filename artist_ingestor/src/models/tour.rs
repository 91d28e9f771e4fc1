//! Raw tour records: the combined relations shape and the two fallback shapes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::artist::ArtistId;

/// Location key → dates played there, for one artist.
///
/// Keys keep the order they have in the source document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRecord {
    pub id: ArtistId,
    #[serde(rename = "datesLocations", default)]
    pub dates_locations: IndexMap<String, Vec<String>>,
}

/// Location keys for one artist, positionally matched with a [`DateRecord`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: ArtistId,
    #[serde(default)]
    pub locations: Vec<String>,
}

/// Flattened dates for one artist.
///
/// A `*` marks the start of the next location's dates, e.g.
/// `["*23-08-2019", "*22-08-2019", "20-08-2019"]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRecord {
    pub id: ArtistId,
    #[serde(default)]
    pub dates: Vec<String>,
}
