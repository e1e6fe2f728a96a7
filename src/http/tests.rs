use crate::cli::tests::fake_args;
use crate::geocoding::fake::FakeGeocoder;
use crate::http::router;
use crate::{app_context, map};
use axum_test::TestServer;

pub fn test_server() -> TestServer {
    test_server_with(FakeGeocoder::new())
}

pub fn test_server_with(geocoder: FakeGeocoder) -> TestServer {
    let args = fake_args();
    let map_settings = map::init(&args).expect("Fake map settings must be valid.");
    let app_context = app_context::init(&args, geocoder, map_settings);
    let router = router::new(&args, app_context).expect("Fake router config must be valid.");
    TestServer::new(router).expect("Failed to run test server.")
}

#[tokio::test]
async fn test_index_page_is_served() {
    let server = test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains("leaflet"));
    assert!(page.contains("/sessions"));
}

#[tokio::test]
async fn test_index_page_restores_committed_address_on_blur() {
    let server = test_server();

    let page = server.get("/").await.text();

    assert!(page.contains(r#"addEventListener("blur", onAddressLeft)"#));
    assert!(page.contains(r#"$("address").value = committedAddress;"#));
}

#[test]
fn test_invalid_origin_is_a_config_error() {
    let mut args = fake_args();
    args.allowed_origins = vec![String::from("http://bad\norigin")];
    let app_context = app_context::init(
        &args,
        FakeGeocoder::new(),
        map::init(&args).expect("Fake map settings must be valid."),
    );

    assert!(router::new(&args, app_context).is_err());
}
