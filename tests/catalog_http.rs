//! End-to-end tests against a local mock store.

use psstore_scraper::config::Config;
use psstore_scraper::store::{list_games, retrieve_game, StoreClient, StoreError};
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING_FIXTURE: &str = include_str!("fixtures/listing_page.html");
const DETAIL_FIXTURE: &str = include_str!("fixtures/detail_page.html");

fn make_client(server: &MockServer) -> StoreClient {
    let config = Config { timeout_secs: 5, ..Config::default() };
    StoreClient::with_origin(&config, Some(server.uri())).unwrap()
}

#[tokio::test]
async fn test_list_games_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/en-tr/pages/browse/2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LISTING_FIXTURE))
        .expect(1)
        .mount(&server)
        .await;

    let page = list_games(&make_client(&server), "en-tr", 2).await.unwrap();

    assert_eq!(page.current_page, 2);
    assert_eq!(page.last_page, 4);
    assert_eq!(page.count(), 2);
    // Links resolve against the public store, not the fetch origin
    assert_eq!(page.entries[0].page_url, "https://store.playstation.com/concept/10014148");
}

#[tokio::test]
async fn test_retrieve_game_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/concept/10011898"))
        .and(header_exists("accept-language"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DETAIL_FIXTURE))
        .expect(1)
        .mount(&server)
        .await;

    let detail = retrieve_game(&make_client(&server), "10011898", "en").await.unwrap();

    assert_eq!(detail.platforms.as_deref(), Some("PS4, PS5"));
    assert_eq!(detail.editions.len(), 2);
}

#[tokio::test]
async fn test_invalid_region_sends_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = make_client(&server);
    let err = list_games(&client, "xyz", 1).await.unwrap_err();
    assert!(matches!(err, StoreError::InvalidRegion(_)));

    let err = retrieve_game(&client, "10011898", "xyz").await.unwrap_err();
    assert!(matches!(err, StoreError::InvalidRegion(_)));
}

#[tokio::test]
async fn test_not_found_propagates_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = retrieve_game(&make_client(&server), "0", "en").await.unwrap_err();
    assert!(err.is_transport());
    assert!(matches!(err, StoreError::HttpStatus { status: 404, .. }));
}
