//! Concert list assembly.
//!
//! The shape used is decided once per cycle by [`TourData`]: when the source
//! served relations, every artist is assembled from relations (an artist
//! without an entry simply has no concerts). Otherwise locations and dates are
//! joined by position.
//!
//! Assembly never fails. Missing or unmatched records degrade to an empty list.

use artist_ingestor::models::{
    ArtistId, DataModel, DateRecord, LocationRecord, RelationRecord, TourData,
};
use serde::Serialize;

use crate::normalize::normalize_location;

/// Marks the start of a new location's dates in a flattened date list.
pub const LOCATION_SENTINEL: char = '*';

/// One location and the dates played there.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConcertSummary {
    pub location: String,
    pub dates: Vec<String>,
}

/// Builds the concert list for `artist_id` from whichever tour shape the
/// cycle recorded.
pub fn assemble(model: &DataModel, artist_id: ArtistId) -> Vec<ConcertSummary> {
    match &model.tours {
        TourData::Relations(relations) => from_relations(relations, artist_id),
        TourData::Fallback { locations, dates } => from_fallback(locations, dates, artist_id),
    }
}

/// One concert per relation entry, in source order.
pub fn from_relations(relations: &[RelationRecord], artist_id: ArtistId) -> Vec<ConcertSummary> {
    let Some(relation) = relations.iter().find(|r| r.id == artist_id) else {
        return Vec::new();
    };

    relation
        .dates_locations
        .iter()
        .map(|(location, dates)| ConcertSummary {
            location: normalize_location(location),
            dates: dates.clone(),
        })
        .collect()
}

/// Pairs the i-th location with the i-th date group, stopping at the shorter list.
pub fn from_fallback(
    locations: &[LocationRecord],
    dates: &[DateRecord],
    artist_id: ArtistId,
) -> Vec<ConcertSummary> {
    let artist_locations = locations
        .iter()
        .find(|l| l.id == artist_id)
        .map(|l| l.locations.as_slice())
        .unwrap_or_default();
    let artist_dates = dates
        .iter()
        .find(|d| d.id == artist_id)
        .map(|d| d.dates.as_slice())
        .unwrap_or_default();

    artist_locations
        .iter()
        .zip(split_date_groups(artist_dates))
        .map(|(location, dates)| ConcertSummary {
            location: normalize_location(location),
            dates,
        })
        .collect()
}

/// Splits a flattened date list into one group per location.
///
/// The entries are joined with single spaces and split on
/// [`LOCATION_SENTINEL`]. The text before the first sentinel is always
/// dropped; each remaining segment is split on whitespace.
pub fn split_date_groups(raw: &[String]) -> Vec<Vec<String>> {
    raw.join(" ")
        .split(LOCATION_SENTINEL)
        .skip(1)
        .map(|segment| segment.split_whitespace().map(str::to_string).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn fallback_model(locations: &[&str], dates: &[&str]) -> DataModel {
        DataModel {
            artists: Vec::new(),
            tours: TourData::Fallback {
                locations: vec![LocationRecord { id: 1, locations: strings(locations) }],
                dates: vec![DateRecord { id: 1, dates: strings(dates) }],
            },
        }
    }

    #[test]
    fn text_before_first_sentinel_is_dropped() {
        let groups = split_date_groups(&strings(&[
            "ignored",
            "15-01-2020",
            "*",
            "16-01-2020",
            "20-01-2020",
        ]));
        assert_eq!(groups, vec![strings(&["16-01-2020", "20-01-2020"])]);
    }

    #[test]
    fn api_style_prefixed_dates() {
        let groups = split_date_groups(&strings(&["*23-08-2019", "*22-08-2019", "20-08-2019"]));
        assert_eq!(
            groups,
            vec![strings(&["23-08-2019"]), strings(&["22-08-2019", "20-08-2019"])]
        );
    }

    #[test]
    fn no_sentinel_means_no_groups() {
        assert!(split_date_groups(&strings(&["01-01-2020", "02-01-2020"])).is_empty());
        assert!(split_date_groups(&[]).is_empty());
    }

    #[test]
    fn pairing_is_bounded_by_date_groups() {
        let model = fallback_model(
            &["london-uk", "paris-france", "berlin-germany"],
            &["*01-01-2020", "*02-01-2020"],
        );
        let concerts = assemble(&model, 1);
        assert_eq!(concerts.len(), 2);
        assert_eq!(concerts[1].location, "Paris, France");
    }

    #[test]
    fn pairing_is_bounded_by_locations() {
        let model = fallback_model(&["london-uk"], &["*01-01-2020", "*02-01-2020", "*03-01-2020"]);
        let concerts = assemble(&model, 1);
        assert_eq!(
            concerts,
            vec![ConcertSummary {
                location: "London, UK".into(),
                dates: strings(&["01-01-2020"]),
            }]
        );
    }

    #[test]
    fn missing_fallback_records_give_no_concerts() {
        let model = fallback_model(&["london-uk"], &["*01-01-2020"]);
        assert!(assemble(&model, 2).is_empty());

        let only_locations = DataModel {
            artists: Vec::new(),
            tours: TourData::Fallback {
                locations: vec![LocationRecord { id: 1, locations: strings(&["london-uk"]) }],
                dates: Vec::new(),
            },
        };
        assert!(assemble(&only_locations, 1).is_empty());
    }

    #[test]
    fn relations_keep_entry_order_and_raw_dates() {
        let mut dates_locations = IndexMap::new();
        dates_locations.insert("north_carolina-usa".to_string(), strings(&["05-12-2019"]));
        dates_locations.insert("osaka-japan".to_string(), strings(&["28-01-2020", "29-01-2020"]));
        let model = DataModel {
            artists: Vec::new(),
            tours: TourData::Relations(vec![RelationRecord { id: 3, dates_locations }]),
        };

        let concerts = assemble(&model, 3);
        assert_eq!(
            concerts,
            vec![
                ConcertSummary {
                    location: "North Carolina, USA".into(),
                    dates: strings(&["05-12-2019"]),
                },
                ConcertSummary {
                    location: "Osaka, Japan".into(),
                    dates: strings(&["28-01-2020", "29-01-2020"]),
                },
            ]
        );
    }

    #[test]
    fn relations_never_fall_back_for_uncovered_artists() {
        let model = DataModel {
            artists: Vec::new(),
            tours: TourData::Relations(vec![RelationRecord {
                id: 3,
                dates_locations: IndexMap::new(),
            }]),
        };
        assert!(assemble(&model, 4).is_empty());
    }
}
