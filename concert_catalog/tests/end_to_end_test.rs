use std::sync::Arc;

use artist_ingestor::{Aggregator, FetchErrorKind, client::memory::MemoryClient};
use concert_catalog::{
    ConcertSummary, Query, QueryError, answer, assemble, find_artist_by_name,
    snapshot::{Snapshots, refresh},
    summary_for,
};

const ROOT: &str = "http://api.test/api";
const ARTISTS: &str = "http://api.test/artists";
const LOCATIONS: &str = "http://api.test/locations";
const DATES: &str = "http://api.test/dates";
const RELATION: &str = "http://api.test/relation";

const INDEX_BODY: &str = r#"{
    "artists": "http://api.test/artists",
    "locations": "http://api.test/locations",
    "dates": "http://api.test/dates",
    "relation": "http://api.test/relation"
}"#;

fn concert(location: &str, dates: &[&str]) -> ConcertSummary {
    ConcertSummary {
        location: location.to_string(),
        dates: dates.iter().map(|d| d.to_string()).collect(),
    }
}

fn fallback_source() -> MemoryClient {
    MemoryClient::new()
        .with_body(ROOT, INDEX_BODY)
        .with_body(ARTISTS, r#"[{"id": 1, "name": "Queen"}]"#)
        .with_failure(RELATION, "connection reset")
        .with_body(
            LOCATIONS,
            r#"{"index": [{"id": 1, "locations": ["london-uk", "paris-france"]}]}"#,
        )
        .with_body(
            DATES,
            r#"{"index": [{"id": 1, "dates": ["x", "*", "01-01-2020", "*", "02-01-2020 03-01-2020"]}]}"#,
        )
}

#[tokio::test]
async fn fallback_cycle_rebuilds_concerts_by_position() {
    let store = Snapshots::new();
    let aggregator = Aggregator::new(Arc::new(fallback_source()), ROOT);

    let model = refresh(&store, aggregator).await.unwrap();

    assert_eq!(
        assemble(&model, 1),
        vec![
            concert("London, UK", &["01-01-2020"]),
            concert("Paris, France", &["02-01-2020", "03-01-2020"]),
        ]
    );

    let queen = find_artist_by_name(&model, "Queen").unwrap();
    let summary = summary_for(&model, queen.id).unwrap();
    assert_eq!(summary.concerts.len(), 2);
}

#[tokio::test]
async fn queries_answer_from_refreshed_snapshot() {
    let store = Snapshots::new();
    let model = refresh(&store, Aggregator::new(Arc::new(fallback_source()), ROOT))
        .await
        .unwrap();

    let found = answer(&model, &Query::Search("Queen".into())).unwrap();
    assert_eq!(found["concerts"][1]["location"], "Paris, France");
    assert_eq!(
        answer(&model, &Query::Search("Abba".into())).unwrap_err(),
        QueryError::UnknownName("Abba".into())
    );
}

#[tokio::test]
async fn relations_cycle_covers_only_listed_artists() {
    let client = MemoryClient::new()
        .with_body(ROOT, INDEX_BODY)
        .with_body(
            ARTISTS,
            r#"[{"id": 1, "name": "Queen"}, {"id": 2, "name": "Pink Floyd"}]"#,
        )
        .with_body(
            RELATION,
            r#"{"index": [{"id": 1, "datesLocations": {"new_york-usa": ["10-10-2019"], "london-uk": ["11-10-2019", "12-10-2019"]}}]}"#,
        )
        .with_body(
            LOCATIONS,
            r#"{"index": [{"id": 2, "locations": ["berlin-germany"]}]}"#,
        )
        .with_body(DATES, r#"{"index": [{"id": 2, "dates": ["*01-01-2020"]}]}"#);
    let client = Arc::new(client);

    let store = Snapshots::new();
    let model = refresh(&store, Aggregator::new(client.clone(), ROOT))
        .await
        .unwrap();

    assert_eq!(
        summary_for(&model, 1).unwrap().concerts,
        vec![
            concert("New York, USA", &["10-10-2019"]),
            concert("London, UK", &["11-10-2019", "12-10-2019"]),
        ]
    );
    // Pink Floyd has no relation entry and is not rebuilt from locations/dates.
    assert!(summary_for(&model, 2).unwrap().concerts.is_empty());
    assert!(!client.requests().contains(&LOCATIONS.to_string()));
}

#[tokio::test]
async fn failed_cycle_keeps_previous_snapshot() {
    let store = Snapshots::new();
    refresh(&store, Aggregator::new(Arc::new(fallback_source()), ROOT))
        .await
        .unwrap();

    let broken = MemoryClient::new()
        .with_body(ROOT, INDEX_BODY)
        .with_failure(ARTISTS, "503");
    let err = refresh(&store, Aggregator::new(Arc::new(broken), ROOT))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FetchErrorKind::Transport);
    let current = store.current().expect("previous snapshot survives");
    assert_eq!(current.artists[0].name, "Queen");
}

#[tokio::test]
async fn failed_first_cycle_publishes_nothing() {
    let store = Snapshots::new();
    let broken = MemoryClient::new().with_body(ROOT, "not json");

    let err = refresh(&store, Aggregator::new(Arc::new(broken), ROOT))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FetchErrorKind::Decode);
    assert!(store.current().is_none());
}
