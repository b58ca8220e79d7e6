//! Error normalization over real HTTP round-trips.

use itemcat::{CatalogClient, CatalogError, Get, Item, List};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn failing_get(template: ResponseTemplate) -> CatalogError {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items/5"))
        .respond_with(template)
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(&mock_server.uri()).unwrap();
    Item::get(&client, 5).await.unwrap_err()
}

#[tokio::test]
async fn test_detail_field_wins() {
    let err = failing_get(ResponseTemplate::new(404).set_body_json(
        serde_json::json!({"detail": "Item not found", "message": "ignored"}),
    ))
    .await;

    assert_eq!(err.to_string(), "Item not found");
    assert_eq!(err.status_code(), Some(404));
}

#[tokio::test]
async fn test_message_field_used_without_detail() {
    let err = failing_get(
        ResponseTemplate::new(409).set_body_json(serde_json::json!({"message": "Conflict here"})),
    )
    .await;

    assert_eq!(err.to_string(), "Conflict here");
}

#[tokio::test]
async fn test_raw_body_used_when_not_json() {
    let err = failing_get(ResponseTemplate::new(502).set_body_string("upstream down")).await;

    assert_eq!(err.to_string(), "upstream down");
    assert_eq!(err.status_code(), Some(502));
}

#[tokio::test]
async fn test_generic_message_for_empty_body() {
    let err = failing_get(ResponseTemplate::new(503)).await;

    assert_eq!(err.to_string(), "Request failed: 503");
}

#[tokio::test]
async fn test_network_failure_is_transport_error() {
    // Start a server only to learn a free port, then drop it.
    let uri = {
        let server = MockServer::builder().start().await;
        server.uri()
    };

    let client = CatalogClient::new(&uri).unwrap();
    let err = Item::list(&client).await.unwrap_err();

    assert!(matches!(err, CatalogError::HttpError(_)));
    assert!(!err.to_string().is_empty());
}
