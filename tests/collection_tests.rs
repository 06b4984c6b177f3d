//! Integration tests for collection loading and navigation.
//!
//! These tests drive a collection through a recording transport and check
//! both the requests it sends and the state it keeps afterwards.

mod common;

use std::collections::HashMap;

use common::{client, query, users_page, BASE_URL};
use serde_json::json;
use yii_model::{HttpMethod, Model, ModelError, ProtocolError};

const PAGE_2_LINKS: &[(&str, u64)] = &[
    ("self", 2),
    ("first", 1),
    ("prev", 1),
    ("next", 3),
    ("last", 5),
];

const PAGE_3_LINKS: &[(&str, u64)] = &[
    ("self", 3),
    ("first", 1),
    ("prev", 2),
    ("next", 4),
    ("last", 5),
];

// ============================================================================
// Loading
// ============================================================================

#[tokio::test]
async fn test_load_sends_pagination_and_selector_params() {
    let client = client();
    client
        .transport()
        .respond(users_page(1, &[("self", 1)], json!([])));

    let mut users = client.collection("users").unwrap();
    users.with(["profile", "posts"]).select("id,name");
    users.load(None).await.unwrap();

    let request = client.transport().last_request();
    assert_eq!(request.http_method, HttpMethod::Get);
    assert_eq!(request.url, format!("{BASE_URL}/users"));
    assert_eq!(query(&request, "page").as_deref(), Some("1"));
    assert_eq!(query(&request, "per-page").as_deref(), Some("20"));
    assert_eq!(query(&request, "expand").as_deref(), Some("profile,posts"));
    assert_eq!(query(&request, "fields").as_deref(), Some("id,name"));
}

#[tokio::test]
async fn test_load_with_per_page_overrides_page_size() {
    let client = client();
    client
        .transport()
        .respond(users_page(1, &[("self", 1)], json!([])));

    let mut users = client.collection("users").unwrap();
    users.load(Some(50)).await.unwrap();

    let request = client.transport().last_request();
    assert_eq!(query(&request, "per-page").as_deref(), Some("50"));
    // the self link reports the size that was actually served
    assert_eq!(users.per_page(), 20);
}

#[tokio::test]
async fn test_load_replaces_data_and_meta() {
    let client = client();
    client.transport().respond(users_page(
        2,
        PAGE_2_LINKS,
        json!([{"id": 21, "name": "Ann"}, {"id": 22, "name": "Bob"}]),
    ));

    let mut users = client.collection("users").unwrap();
    users.set_page(2).unwrap();
    users.load(None).await.unwrap();

    assert_eq!(users.data().len(), 2);
    assert_eq!(users.data()[0]["name"], "Ann");
    assert_eq!(users.meta().current_page, 2);
    assert_eq!(users.meta().page_count, 5);
    assert_eq!(users.meta().per_page, 20);
    assert_eq!(users.meta().total_count, 100);
    assert!(!users.is_first());
    assert!(!users.is_last());
    assert!(users.exist_next());
    assert!(users.exist_prev());
}

#[tokio::test]
async fn test_request_headers_are_forwarded() {
    let client = client();
    client
        .transport()
        .respond(users_page(1, &[("self", 1)], json!([])));

    let mut users = client.collection("users").unwrap();
    let mut headers = HashMap::new();
    headers.insert("Authorization".to_string(), "Bearer secret".to_string());
    users.set_headers(headers).unwrap();
    users.load(None).await.unwrap();

    let request = client.transport().last_request();
    let sent = request.extra_headers.unwrap();
    assert_eq!(sent.get("Authorization"), Some(&"Bearer secret".to_string()));
}

#[tokio::test]
async fn test_missing_link_header_fails_and_keeps_state() {
    let client = client();
    client
        .transport()
        .respond(users_page(1, &[("self", 1), ("next", 2)], json!([{"id": 1}])));
    client
        .transport()
        .respond(users_page(2, &[], json!([{"id": 21}])));

    let mut users = client.collection("users").unwrap();
    users.load(None).await.unwrap();
    let result = users.next_page().await;

    assert!(matches!(
        result,
        Err(ModelError::Protocol(ProtocolError::MissingLinkHeader))
    ));
    assert_eq!(users.data(), &[json!({"id": 1})]);
    assert_eq!(users.meta().current_page, 1);
}

#[tokio::test]
async fn test_transport_errors_propagate() {
    let client = client();
    client
        .transport()
        .fail(500, json!({"message": "Internal Server Error"}));

    let mut users = client.collection("users").unwrap();
    let error = users.load(None).await.unwrap_err();

    assert!(matches!(error, ModelError::Http(_)));
    assert_eq!(error.status(), Some(500));
}

// ============================================================================
// Navigation
// ============================================================================

#[tokio::test]
async fn test_next_page_follows_link_and_resyncs_from_server() {
    let client = client();
    client
        .transport()
        .respond(users_page(2, PAGE_2_LINKS, json!([{"id": 21}])));
    client
        .transport()
        .respond(users_page(3, PAGE_3_LINKS, json!([{"id": 41}])));

    let mut users = client.collection("users").unwrap();
    users.set_page(2).unwrap();
    users.load(None).await.unwrap();

    assert!(users.next_page().await.unwrap());

    let request = client.transport().last_request();
    assert_eq!(request.url, format!("{BASE_URL}/users?page=3&per-page=20"));
    assert!(request.query.is_none());
    assert_eq!(users.meta().current_page, 3);
    assert_eq!(users.page(), 3);
    assert_eq!(users.data(), &[json!({"id": 41})]);
}

#[tokio::test]
async fn test_prev_and_last_pages_follow_their_links() {
    let client = client();
    client
        .transport()
        .respond(users_page(2, PAGE_2_LINKS, json!([])));
    client
        .transport()
        .respond(users_page(1, &[("self", 1), ("next", 2), ("last", 5)], json!([])));
    client
        .transport()
        .respond(users_page(5, &[("self", 5), ("first", 1), ("prev", 4)], json!([])));

    let mut users = client.collection("users").unwrap();
    users.load(None).await.unwrap();

    assert!(users.prev_page().await.unwrap());
    assert!(users.is_first());
    assert!(!users.exist_prev());

    assert!(users.last_page().await.unwrap());
    assert!(users.is_last());
    assert!(!users.exist_next());

    let urls: Vec<String> = client
        .transport()
        .requests()
        .into_iter()
        .map(|r| r.url)
        .collect();
    assert_eq!(urls[1], format!("{BASE_URL}/users?page=1&per-page=20"));
    assert_eq!(urls[2], format!("{BASE_URL}/users?page=5&per-page=20"));
}

#[tokio::test]
async fn test_navigation_at_edges_is_a_no_op() {
    let client = client();
    client
        .transport()
        .respond(users_page(1, &[("self", 1), ("first", 1)], json!([])));

    let mut users = client.collection("users").unwrap();
    users.load(None).await.unwrap();

    assert!(users.is_first());
    assert!(!users.first_page().await.unwrap());
    assert!(!users.prev_page().await.unwrap());
    assert!(!users.next_page().await.unwrap());
    assert_eq!(client.transport().request_count(), 1);
}

#[tokio::test]
async fn test_first_page_without_first_link_is_a_protocol_error() {
    let client = client();
    client
        .transport()
        .respond(users_page(3, &[("self", 3)], json!([])));

    let mut users = client.collection("users").unwrap();
    users.load(None).await.unwrap();
    let result = users.first_page().await;

    assert!(matches!(
        result,
        Err(ModelError::Protocol(ProtocolError::MissingLink { rel: "first" }))
    ));
    assert_eq!(client.transport().request_count(), 1);
}

#[tokio::test]
async fn test_get_page_current_or_out_of_range_is_a_no_op() {
    let client = client();
    client
        .transport()
        .respond(users_page(2, PAGE_2_LINKS, json!([])));

    let mut users = client.collection("users").unwrap();
    users.set_page(2).unwrap();
    users.load(None).await.unwrap();

    assert!(!users.get_page(2).await.unwrap());
    assert!(!users.get_page(6).await.unwrap());
    assert!(!users.get_page(0).await.unwrap());
    assert_eq!(client.transport().request_count(), 1);
}

#[tokio::test]
async fn test_get_page_loads_requested_page() {
    let client = client();
    client
        .transport()
        .respond(users_page(2, PAGE_2_LINKS, json!([])));
    client.transport().respond(users_page(
        4,
        &[("self", 4), ("prev", 3), ("next", 5)],
        json!([]),
    ));

    let mut users = client.collection("users").unwrap();
    users.set_page(2).unwrap();
    users.load(None).await.unwrap();

    assert!(users.get_page(4).await.unwrap());

    let request = client.transport().last_request();
    assert_eq!(request.url, format!("{BASE_URL}/users"));
    assert_eq!(query(&request, "page").as_deref(), Some("4"));
    assert_eq!(users.meta().current_page, 4);
}

// ============================================================================
// Refresh and filters
// ============================================================================

#[tokio::test]
async fn test_refresh_refetches_self_link() {
    let client = client();
    client
        .transport()
        .respond(users_page(2, PAGE_2_LINKS, json!([{"id": 21}])));
    client
        .transport()
        .respond(users_page(2, PAGE_2_LINKS, json!([{"id": 21}, {"id": 22}])));

    let mut users = client.collection("users").unwrap();
    users.set_page(2).unwrap();
    users.load(None).await.unwrap();
    users.refresh().await.unwrap();

    let request = client.transport().last_request();
    assert_eq!(request.url, format!("{BASE_URL}/users?page=2&per-page=20"));
    assert_eq!(users.data().len(), 2);
}

#[tokio::test]
async fn test_refresh_before_first_load_loads() {
    let client = client();
    client
        .transport()
        .respond(users_page(1, &[("self", 1)], json!([])));

    let mut users = client.collection("users").unwrap();
    users.refresh().await.unwrap();

    let request = client.transport().last_request();
    assert_eq!(request.url, format!("{BASE_URL}/users"));
    assert_eq!(query(&request, "page").as_deref(), Some("1"));
}

#[tokio::test]
async fn test_where_filters_replaces_filters_and_reloads() {
    let client = client();
    client
        .transport()
        .respond(users_page(1, &[("self", 1)], json!([])));
    client
        .transport()
        .respond(users_page(1, &[("self", 1)], json!([])));

    let mut users = client.collection("users").unwrap();
    users
        .where_filters([("status", "active"), ("role", "admin")])
        .await
        .unwrap();
    users.where_filters([("status", "banned")]).await.unwrap();

    let request = client.transport().last_request();
    assert_eq!(query(&request, "status").as_deref(), Some("banned"));
    assert_eq!(query(&request, "role"), None);
    assert_eq!(users.filters().len(), 1);
    assert_eq!(client.transport().request_count(), 2);
}
