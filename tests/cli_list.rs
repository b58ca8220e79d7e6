//! Execution tests for listing, searching and paging items.
//!
//! Uses wiremock to mock the catalog API and test actual execution flow.

use itemcat::{CatalogClient, Item, List, ListViewModel, LoadState};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn items_json(count: u64) -> serde_json::Value {
    let items: Vec<serde_json::Value> = (1..=count)
        .map(|id| {
            let short = if id % 2 == 0 { "even gadget" } else { "odd widget" };
            serde_json::json!({
                "id": id,
                "name": format!("Item {id}"),
                "shortDescription": short,
                "fullDescription": "details"
            })
        })
        .collect();
    serde_json::Value::Array(items)
}

async fn mount_items(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_list_items_returns_all() {
    let mock_server = MockServer::start().await;
    mount_items(&mock_server, items_json(5)).await;

    let client = CatalogClient::new(&mock_server.uri()).unwrap();
    let items = Item::list(&client).await.unwrap();

    assert_eq!(items.len(), 5);
    assert_eq!(items[0].name, "Item 1");
}

#[tokio::test]
async fn test_list_view_pages_and_searches() {
    let mock_server = MockServer::start().await;
    mount_items(&mock_server, items_json(7)).await;

    let client = CatalogClient::new(&mock_server.uri()).unwrap();
    let mut list = ListViewModel::new();
    list.load(&client).await;

    let view = list.derive();
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.items.len(), 3);

    list.go_next();
    list.go_next();
    assert_eq!(list.derive().items.len(), 1);

    list.set_query("GADGET");
    let view = list.derive();
    assert_eq!(view.page, 1);
    assert_eq!(view.filtered_count, 3);
    assert_eq!(view.total_pages, 1);
    assert!(!view.has_next);
}

#[tokio::test]
async fn test_scenario_search_with_no_match() {
    let mock_server = MockServer::start().await;
    mount_items(
        &mock_server,
        serde_json::json!([{
            "id": 1,
            "name": "Widget",
            "shortDescription": "A widget",
            "fullDescription": "Widget details"
        }]),
    )
    .await;

    let client = CatalogClient::new(&mock_server.uri()).unwrap();
    let mut list = ListViewModel::new();
    list.load(&client).await;
    list.set_query("gadget");

    let view = list.derive();
    assert!(view.items.is_empty());
    assert!(view.show_no_results);
    assert!(!view.show_pagination);
    assert_eq!(view.query, "gadget");
}

#[tokio::test]
async fn test_empty_catalog_is_valid() {
    let mock_server = MockServer::start().await;
    mount_items(&mock_server, serde_json::json!([])).await;

    let client = CatalogClient::new(&mock_server.uri()).unwrap();
    let mut list = ListViewModel::new();
    list.load(&client).await;

    let view = list.derive();
    assert_eq!(view.status, LoadState::Loaded);
    assert!(view.show_no_results);
}

#[tokio::test]
async fn test_list_failure_becomes_error_state() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = CatalogClient::new(&mock_server.uri()).unwrap();
    let mut list = ListViewModel::new();
    list.load(&client).await;

    assert_eq!(list.status().error(), Some("Request failed: 500"));
    assert!(!list.derive().show_no_results);
}
