use crate::cli::errors::ConfigError;
use crate::cli::tests::fake_args;
use crate::deliveries::models::LookupFailure;
use crate::geocoding::errors::GeocodingError;
use crate::geocoding::mapbox::MapboxGeocoder;
use crate::geocoding::{self, Geocoder};
use crate::map::models::LatLng;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use url::Url;

#[derive(Clone, Debug, PartialEq)]
struct SeenRequest {
    query: String,
    access_token: Option<String>,
}

#[derive(Clone, Default)]
struct StubState {
    responses: Arc<HashMap<String, Value>>,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

async fn places(
    Path(query): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    State(state): State<StubState>,
) -> Response {
    state.seen.lock().await.push(SeenRequest {
        query: query.clone(),
        access_token: params.get("access_token").cloned(),
    });
    match state.responses.get(&query) {
        Some(body) => Json(body.clone()).into_response(),
        None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

async fn stub_mapbox(responses: Vec<(&str, Value)>) -> (Url, StubState) {
    let state = StubState {
        responses: Arc::new(
            responses
                .into_iter()
                .map(|(query, body)| (query.to_string(), body))
                .collect(),
        ),
        seen: Arc::default(),
    };
    let router = Router::new()
        .route("/geocoding/v5/mapbox.places/:query", get(places))
        .with_state(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub Mapbox server.");
    let address = listener.local_addr().expect("Stub server has no address.");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Stub Mapbox server crashed.");
    });
    let base_url = Url::parse(&format!("http://{address}/")).expect("Bad stub server URL.");
    (base_url, state)
}

fn geocoder(base_url: Url) -> MapboxGeocoder {
    MapboxGeocoder::new(base_url, String::from("testToken"), Duration::from_secs(2))
        .expect("Failed to build geocoder.")
}

#[tokio::test]
async fn test_forward_search_keeps_feature_order_and_centers() {
    let (base_url, stub) = stub_mapbox(vec![(
        "Paulista Ave.json",
        json!({
            "type": "FeatureCollection",
            "features": [
                {"place_name": "Avenida Paulista, São Paulo", "center": [-46.6544, -23.5632], "relevance": 1},
                {"place_name": "Paulista Avenue, Campinas", "center": [-47.0608, -22.9056], "relevance": 0.8}
            ]
        }),
    )])
    .await;

    let features = geocoder(base_url)
        .forward_search("Paulista Ave")
        .await
        .expect("Forward search failed.");

    let names: Vec<_> = features.iter().map(|f| f.place_name.as_str()).collect();
    assert_eq!(
        names,
        ["Avenida Paulista, São Paulo", "Paulista Avenue, Campinas"]
    );
    assert_eq!(features[0].center, [-46.6544, -23.5632]);
    assert_eq!(features[1].center, [-47.0608, -22.9056]);
    assert_eq!(
        stub.seen.lock().await.as_slice(),
        [SeenRequest {
            query: String::from("Paulista Ave.json"),
            access_token: Some(String::from("testToken")),
        }]
    );
}

#[tokio::test]
async fn test_reverse_geocode_queries_lng_then_lat() {
    let (base_url, stub) = stub_mapbox(vec![(
        "-46.6,-23.5.json",
        json!({"features": [
            {"place_name": "Rua Augusta, São Paulo", "center": [-46.6, -23.5]},
            {"place_name": "São Paulo, Brazil", "center": [-46.63, -23.55]}
        ]}),
    )])
    .await;

    let address = geocoder(base_url)
        .reverse_geocode(LatLng {
            lat: -23.5,
            lng: -46.6,
        })
        .await
        .expect("Reverse geocode failed.");

    assert_eq!(address.label, "Rua Augusta, São Paulo");
    assert_eq!(address.value, address.label);
    assert_eq!(stub.seen.lock().await[0].query, "-46.6,-23.5.json");
}

#[tokio::test]
async fn test_reverse_geocode_without_features_is_no_results() {
    let (base_url, _stub) = stub_mapbox(vec![("1,2.json", json!({"features": []}))]).await;

    let result = geocoder(base_url)
        .reverse_geocode(LatLng { lat: 2.0, lng: 1.0 })
        .await;

    assert!(matches!(result, Err(GeocodingError::NoResults)));
}

#[tokio::test]
async fn test_error_status_is_a_network_failure() {
    let (base_url, _stub) = stub_mapbox(vec![]).await;

    let error = geocoder(base_url)
        .forward_search("Unknown street")
        .await
        .expect_err("Server error must not decode as features.");

    assert!(matches!(error, GeocodingError::Network(_)));
    assert_eq!(error.kind(), LookupFailure::Network);
}

#[test]
fn test_places_url_encodes_query_as_one_segment() {
    let geocoder = geocoder(Url::parse("https://api.mapbox.com/").unwrap());

    let url = geocoder.places_url("Rua 1/2 #3").unwrap();

    assert_eq!(
        url.as_str(),
        "https://api.mapbox.com/geocoding/v5/mapbox.places/Rua%201%2F2%20%233.json?access_token=testToken"
    );
}

#[test]
fn test_places_url_keeps_base_path_prefix() {
    let with_slash = geocoder(Url::parse("https://proxy.example.com/mapbox/").unwrap());
    let without_slash = geocoder(Url::parse("https://proxy.example.com/mapbox").unwrap());

    let expected = "https://proxy.example.com/mapbox/geocoding/v5/mapbox.places/Paulista%20Ave.json?access_token=testToken";
    assert_eq!(with_slash.places_url("Paulista Ave").unwrap().as_str(), expected);
    assert_eq!(without_slash.places_url("Paulista Ave").unwrap().as_str(), expected);
}

#[test]
fn test_init_requires_access_token() {
    let mut args = fake_args();
    args.mapbox_access_token = None;
    assert!(matches!(
        geocoding::init(&args),
        Err(ConfigError::MissingAccessToken)
    ));

    args.mapbox_access_token = Some(String::from("   "));
    assert!(matches!(
        geocoding::init(&args),
        Err(ConfigError::MissingAccessToken)
    ));
}
