use artist_ingestor::models::{ArtistId, ArtistRecord, DataModel};
use serde::Serialize;

use crate::concerts::{ConcertSummary, assemble};

/// Everything a view needs about one artist. Built per request, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistSummary {
    pub id: ArtistId,
    pub name: String,
    pub image: String,
    pub creation_date: i64,
    pub first_album: String,
    pub members: Vec<String>,
    pub concerts: Vec<ConcertSummary>,
}

impl ArtistSummary {
    pub fn build(artist: &ArtistRecord, model: &DataModel) -> Self {
        Self {
            id: artist.id,
            name: artist.name.clone(),
            image: artist.image.clone(),
            creation_date: artist.creation_date,
            first_album: artist.first_album.clone(),
            members: artist.members.clone(),
            concerts: assemble(model, artist.id),
        }
    }
}

/// Summary for the artist with `id`, or `None` when the cycle did not list it.
pub fn summary_for(model: &DataModel, id: ArtistId) -> Option<ArtistSummary> {
    model
        .artist(id)
        .map(|artist| ArtistSummary::build(artist, model))
}

/// Exact, case-sensitive name lookup over the artist list.
pub fn find_artist_by_name<'a>(model: &'a DataModel, name: &str) -> Option<&'a ArtistRecord> {
    model.artist_by_name(name)
}
