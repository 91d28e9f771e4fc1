//! Read-side queries answered from one published model.

use artist_ingestor::models::{ArtistId, DataModel};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::summary::{ArtistSummary, find_artist_by_name, summary_for};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    /// Every artist id and name, in listing order.
    List,
    Show(ArtistId),
    /// Exact, case-sensitive name match.
    Search(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("404 NOT FOUND: artist {0}")]
    UnknownId(ArtistId),

    #[error("404 NOT FOUND: {0}")]
    UnknownName(String),

    #[error("failed to encode answer: {0}")]
    Encode(String),
}

#[derive(Serialize)]
struct ListEntry<'a> {
    id: ArtistId,
    name: &'a str,
}

/// Answers `query` as a JSON document.
pub fn answer(model: &DataModel, query: &Query) -> Result<Value, QueryError> {
    let value = match query {
        Query::List => {
            let entries: Vec<ListEntry> = model
                .artists
                .iter()
                .map(|a| ListEntry { id: a.id, name: &a.name })
                .collect();
            serde_json::to_value(entries)
        }
        Query::Show(id) => {
            let summary = summary_for(model, *id).ok_or(QueryError::UnknownId(*id))?;
            serde_json::to_value(summary)
        }
        Query::Search(name) => {
            let artist = find_artist_by_name(model, name)
                .ok_or_else(|| QueryError::UnknownName(name.clone()))?;
            serde_json::to_value(ArtistSummary::build(artist, model))
        }
    };
    value.map_err(|e| QueryError::Encode(e.to_string()))
}
