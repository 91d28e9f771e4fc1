//! Canonical in-memory representation of one performing artist.

use serde::{Deserialize, Serialize};

/// Identifier shared by an artist and every tour record that refers to it.
pub type ArtistId = i64;

/// An artist as listed by the artists resource.
///
/// Only `id` is required on the wire. Link fields the API also serves
/// (`locations`, `concertDates`, `relations`) are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistRecord {
    /// Unique within one aggregation cycle.
    pub id: ArtistId,

    #[serde(default)]
    pub name: String,

    /// URL of the artist picture.
    #[serde(default)]
    pub image: String,

    /// Year the band or artist started performing.
    #[serde(default)]
    pub creation_date: i64,

    /// Release date of the first album, as served (e.g. `"14-12-1973"`).
    #[serde(default)]
    pub first_album: String,

    #[serde(default)]
    pub members: Vec<String>,
}
