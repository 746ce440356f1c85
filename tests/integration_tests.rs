use anyhow::Result;
use homescope::{Coordinate, GoogleMapsClient, HomeScopeError, SearchSession};
use httpmock::prelude::*;

const PLACES_PATH: &str = "/maps/api/place/nearbysearch/json";
const GEOCODE_PATH: &str = "/maps/api/geocode/json";

fn client_for(server: &MockServer) -> GoogleMapsClient {
    GoogleMapsClient::new("integration-key", server.url(GEOCODE_PATH), server.url(PLACES_PATH))
}

fn session_for(server: &MockServer) -> SearchSession<GoogleMapsClient, GoogleMapsClient> {
    let client = client_for(server);
    SearchSession::new(client.clone(), client)
}

fn place(id: &str, name: &str, lat: f64, lng: f64, types: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "place_id": id,
        "name": name,
        "types": types,
        "vicinity": "Rexburg",
        "geometry": {"location": {"lat": lat, "lng": lng}}
    })
}

fn categories(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[tokio::test]
async fn test_unfiltered_search_keeps_provider_order() -> Result<()> {
    let server = MockServer::start();
    let nearby_mock = server.mock(|when, then| {
        when.method(GET)
            .path(PLACES_PATH)
            .query_param("location", "43.8,-111.8")
            .query_param("rankby", "distance");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "status": "OK",
                "results": [
                    place("p1", "Maverik", 43.8005, -111.8, &["gas_station", "store"]),
                    place("p2", "Porter Park", 43.803, -111.79, &["park"]),
                    place("p3", "Dental Office", 43.81, -111.78, &["dentist", "health"])
                ]
            }));
    });

    let session = session_for(&server);
    let result = session
        .search_location(Coordinate::new(43.8, -111.8), &[])
        .await?
        .into_current()
        .expect("latest search");

    nearby_mock.assert();
    assert_eq!(result.landmarks.len(), 3);
    let ids: Vec<_> = result.landmarks.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2", "p3"]);
    let labels: Vec<_> = result.landmarks.iter().map(|l| l.category.as_str()).collect();
    assert_eq!(labels, vec!["Gas Station", "Park", "Dentist"]);
    Ok(())
}

#[tokio::test]
async fn test_two_categories_merge_and_sort() -> Result<()> {
    let server = MockServer::start();
    let grocery_mock = server.mock(|when, then| {
        when.method(GET)
            .path(PLACES_PATH)
            .query_param("keyword", "grocery");
        then.status(200).json_body(serde_json::json!({
            "status": "OK",
            "results": [
                place("g1", "Broulim's", 43.805, -111.8, &["grocery_or_supermarket"]),
                place("g2", "Walmart", 43.84, -111.77, &["supermarket"])
            ]
        }));
    });
    let gas_mock = server.mock(|when, then| {
        when.method(GET)
            .path(PLACES_PATH)
            .query_param("keyword", "gas station");
        then.status(200).json_body(serde_json::json!({
            "status": "OK",
            "results": [
                place("s1", "Maverik", 43.8008, -111.8, &["gas_station"]),
                place("s2", "Sinclair", 43.82, -111.8, &["gas_station"]),
                place("s3", "Chevron", 43.9, -111.8, &["gas_station"])
            ]
        }));
    });

    let session = session_for(&server);
    let result = session
        .search_location(
            Coordinate::new(43.8, -111.8),
            &categories(&["Grocery Store", "Gas Station"]),
        )
        .await?
        .into_current()
        .expect("latest search");

    grocery_mock.assert();
    gas_mock.assert();
    assert_eq!(result.landmarks.len(), 5);
    assert!(result
        .landmarks
        .windows(2)
        .all(|w| w[0].distance_miles <= w[1].distance_miles));
    let ids: Vec<_> = result.landmarks.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["s1", "g1", "s2", "g2", "s3"]);
    Ok(())
}

#[tokio::test]
async fn test_place_found_under_two_categories() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).query_param("keyword", "grocery");
        then.status(200).json_body(serde_json::json!({
            "status": "OK",
            "results": [place("shared", "Smith's", 43.81, -111.8, &["supermarket"])]
        }));
    });
    server.mock(|when, then| {
        when.method(GET).query_param("keyword", "restaurant");
        then.status(200).json_body(serde_json::json!({
            "status": "OK",
            "results": [
                place("shared", "Smith's", 43.81, -111.8, &["supermarket"]),
                place("r1", "Taco Time", 43.802, -111.8, &["restaurant"])
            ]
        }));
    });

    let session = session_for(&server);
    let result = session
        .search_location(
            Coordinate::new(43.8, -111.8),
            &categories(&["Grocery Store", "Restaurant"]),
        )
        .await?
        .into_current()
        .expect("latest search");

    assert_eq!(result.landmarks.len(), 2);
    assert_eq!(result.landmarks[0].id, "r1");
    assert_eq!(result.landmarks[1].category, "Grocery Store, Restaurant");
    Ok(())
}

#[tokio::test]
async fn test_category_failure_is_tolerated() -> Result<()> {
    let server = MockServer::start();
    let church_mock = server.mock(|when, then| {
        when.method(GET).query_param("keyword", "church");
        then.status(500);
    });
    server.mock(|when, then| {
        when.method(GET).query_param("keyword", "park");
        then.status(200).json_body(serde_json::json!({
            "status": "OK",
            "results": [place("k1", "Smith Park", 43.81, -111.8, &["park"])]
        }));
    });

    let session = session_for(&server);
    let result = session
        .search_location(
            Coordinate::new(43.8, -111.8),
            &categories(&["Church", "Park"]),
        )
        .await?
        .into_current()
        .expect("latest search");

    church_mock.assert();
    assert_eq!(result.landmarks.len(), 1);
    assert_eq!(result.landmarks[0].category, "Park");
    Ok(())
}

#[tokio::test]
async fn test_address_search_geocodes_first() -> Result<()> {
    let server = MockServer::start();
    let geocode_mock = server.mock(|when, then| {
        when.method(GET)
            .path(GEOCODE_PATH)
            .query_param("address", "525 S Center St, Rexburg, ID")
            .query_param("key", "integration-key");
        then.status(200).json_body(serde_json::json!({
            "status": "OK",
            "results": [{"geometry": {"location": {"lat": 43.8, "lng": -111.8}}}]
        }));
    });
    let nearby_mock = server.mock(|when, then| {
        when.method(GET)
            .path(PLACES_PATH)
            .query_param("location", "43.8,-111.8");
        then.status(200).json_body(serde_json::json!({
            "status": "OK",
            "results": [place("p1", "Porter Park", 43.803, -111.79, &["park"])]
        }));
    });

    let session = session_for(&server);
    let result = session
        .search_address("525 S Center St, Rexburg, ID", &[])
        .await?
        .into_current()
        .expect("latest search");

    geocode_mock.assert();
    nearby_mock.assert();
    assert_eq!(result.origin, Coordinate::new(43.8, -111.8));
    assert_eq!(result.landmarks[0].name, "Porter Park");
    assert_eq!(session.current().await.map(|r| r.generation), Some(1));
    Ok(())
}

#[tokio::test]
async fn test_geocoding_failure_skips_places() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(GEOCODE_PATH);
        then.status(200)
            .json_body(serde_json::json!({"status": "ZERO_RESULTS", "results": []}));
    });
    let nearby_mock = server.mock(|when, then| {
        when.method(GET).path(PLACES_PATH);
        then.status(200)
            .json_body(serde_json::json!({"status": "OK", "results": []}));
    });

    let session = session_for(&server);
    let err = session.search_address("zzzz", &[]).await.unwrap_err();

    assert!(matches!(err, HomeScopeError::GeocodingError { .. }));
    nearby_mock.assert_hits(0);
    assert!(session.current().await.is_none());
}

#[tokio::test]
async fn test_unknown_category_issues_no_request() {
    use homescope::core::PlacesProvider;

    let server = MockServer::start();
    let places_mock = server.mock(|when, then| {
        when.method(GET).path(PLACES_PATH);
        then.status(200)
            .json_body(serde_json::json!({"status": "OK", "results": []}));
    });

    let err = client_for(&server)
        .by_category(Coordinate::new(43.8, -111.8), "Spaceport")
        .await
        .unwrap_err();

    assert!(matches!(err, HomeScopeError::InvalidCategoryError { .. }));
    places_mock.assert_hits(0);
}
