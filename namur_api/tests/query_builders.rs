use namur_api::types::ParkingType;
use namur_api::{ParkingQuery, Query, QueryCommon, DEFAULT_ROWS, PARKING_DATASET};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/search/").unwrap()
}

fn pairs(url: &Url) -> Vec<(String, String)> {
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[test]
fn parking_query_defaults() {
    let url = ParkingQuery::default().add_to_url(&base_url());
    assert_eq!(
        pairs(&url),
        vec![
            ("dataset".to_string(), "namur-parking-emplacements".to_string()),
            ("rows".to_string(), "10".to_string()),
            ("refine.type_parking".to_string(), "Place normale".to_string()),
        ]
    );
}

#[test]
fn parking_query_with_limit_and_type() {
    let url = ParkingQuery::default()
        .with_limit(50)
        .with_parking_type(ParkingType::Garage)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("rows=50"));
    assert!(pairs(&url).contains(&(
        "refine.type_parking".to_string(),
        "Devant accès/garage".to_string()
    )));
}

#[test]
fn labels_are_url_encoded() {
    let url = ParkingQuery::default()
        .with_parking_type(ParkingType::SchoolBus)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("refine.type_parking=Bus+scolaire"));
}

#[test]
fn every_type_round_trips_through_url() {
    for t in ParkingType::ALL {
        let url = ParkingQuery::default()
            .with_parking_type(t)
            .add_to_url(&base_url());
        let sent = pairs(&url)
            .into_iter()
            .find(|(k, _)| k == "refine.type_parking")
            .map(|(_, v)| v)
            .unwrap();
        assert_eq!(sent, t.label());
    }
}

#[test]
fn query_common_defaults() {
    let common = QueryCommon::new(PARKING_DATASET);
    assert_eq!(common.rows, DEFAULT_ROWS);
    let url = common.add_to_url(&base_url());
    assert_eq!(url.query(), Some("dataset=namur-parking-emplacements&rows=10"));
}

#[test]
fn base_path_preserved() {
    let url = ParkingQuery::default().add_to_url(&base_url());
    assert_eq!(url.path(), "/search/");
    assert_eq!(url.host_str(), Some("example.com"));
}
