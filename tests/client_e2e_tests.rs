//! End-to-end tests simulating a browser and an API client against the dashboard
//!
//! These tests verify the complete flow from HTTP request to response:
//! the shell layers, the rendered page and the JSON API.

use axum_test::TestServer;
use dashboard::prelude::*;
use serde_json::Value;

// =============================================================================
// Helpers
// =============================================================================

fn server() -> TestServer {
    let app = DashboardBuilder::new()
        .with_dataset(Dataset::default_rows())
        .build()
        .expect("Failed to build dashboard");
    TestServer::new(app).expect("Failed to create test server")
}

fn ids(body: &Value) -> Vec<u64> {
    body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|row| row["id"].as_u64().expect("numeric id"))
        .collect()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    let server = server();

    for path in ["/health", "/healthz"] {
        let response = server.get(path).await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "order-dashboard");
    }
}

// =============================================================================
// Orders API
// =============================================================================

#[tokio::test]
async fn test_list_orders_without_filters() {
    let response = server().get("/api/orders").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["pagination"]["total"], 10);
    assert_eq!(body["pagination"]["page_size"], 10);
    assert_eq!(body["pagination"]["total_pages"], 1);
    assert_eq!(ids(&body).len(), 10);
    assert_eq!(ids(&body)[0], 84564564);
    assert!(body["sort"].is_null());
}

#[tokio::test]
async fn test_filter_by_name() {
    let response = server().get("/api/orders").add_query_param("name", "Mobile").await;
    let body: Value = response.json();

    assert_eq!(ids(&body), vec![98756325]);
    assert_eq!(body["data"][0]["name"], "Mobile");
    assert_eq!(body["data"][0]["status"], 1);
    assert_eq!(body["data"][0]["created_date"], "2024-09-22T11:00:00");
    assert_eq!(body["criteria"]["name"], "Mobile");
}

#[tokio::test]
async fn test_filter_by_status() {
    let response = server().get("/api/orders").add_query_param("status", "1").await;
    let body: Value = response.json();

    assert_eq!(ids(&body), vec![98756325, 98652366, 13286564, 98753275]);
}

#[tokio::test]
async fn test_filter_by_start_date() {
    let response = server()
        .get("/api/orders")
        .add_query_param("start_date", "2024-09-20")
        .await;
    let body: Value = response.json();

    assert_eq!(ids(&body), vec![98756325]);
    assert_eq!(body["criteria"]["start_date"], "2024-09-20");
}

#[tokio::test]
async fn test_filter_by_dotted_date_range() {
    let response = server()
        .get("/api/orders")
        .add_query_param("start_date", "12.09.2024")
        .add_query_param("end_date", "12.09.2024")
        .await;
    let body: Value = response.json();

    assert_eq!(body["pagination"]["total"], 9);
    assert!(!ids(&body).contains(&98756325));
}

#[tokio::test]
async fn test_filters_are_conjunctive() {
    let response = server()
        .get("/api/orders")
        .add_query_param("name", "e")
        .add_query_param("status", "2")
        .await;
    let body: Value = response.json();

    // Camera Lens, Keyboard, Mouse
    assert_eq!(ids(&body), vec![84564564, 13256498, 98753263]);
}

#[tokio::test]
async fn test_malformed_date_imposes_no_constraint() {
    let response = server()
        .get("/api/orders")
        .add_query_param("end_date", "not-a-date")
        .await;
    let body: Value = response.json();

    assert_eq!(body["pagination"]["total"], 10);
    assert!(body["criteria"]["end_date"].is_null());
}

#[tokio::test]
async fn test_no_matches_yields_empty_page() {
    let response = server().get("/api/orders").add_query_param("name", "Tablet").await;
    response.assert_status_ok();
    let body: Value = response.json();

    assert!(ids(&body).is_empty());
    assert_eq!(body["pagination"]["total"], 0);
    assert_eq!(body["pagination"]["has_next"], false);
}

#[tokio::test]
async fn test_pagination_and_sort() {
    let server = server();

    let first: Value = server
        .get("/api/orders")
        .add_query_param("page_size", "5")
        .add_query_param("sort", "quantity:desc")
        .await
        .json();
    assert_eq!(
        ids(&first),
        vec![98756325, 98764564, 98753275, 13256498, 13286564]
    );
    assert_eq!(first["pagination"]["has_next"], true);
    assert_eq!(first["sort"], "quantity:desc");

    let second: Value = server
        .get("/api/orders")
        .add_query_param("page", "2")
        .add_query_param("page_size", "5")
        .add_query_param("sort", "quantity:desc")
        .await
        .json();
    assert_eq!(ids(&second).len(), 5);
    assert_eq!(second["pagination"]["has_prev"], true);
    assert_eq!(second["pagination"]["has_next"], false);
    assert_eq!(ids(&second)[4], 84564564);
}

#[tokio::test]
async fn test_huge_page_number_returns_empty_page() {
    let server = server();

    let response = server
        .get("/api/orders")
        .add_query_param("page", "9223372036854775809")
        .add_query_param("page_size", "5")
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert!(ids(&body).is_empty());
    assert_eq!(body["pagination"]["total"], 10);
    assert_eq!(body["pagination"]["has_next"], false);
    assert_eq!(body["pagination"]["has_prev"], true);

    let page = server
        .get("/")
        .add_query_param("page", "9223372036854775809")
        .await;
    page.assert_status_ok();
    assert!(page.text().contains("Нет строк"));
}

#[tokio::test]
async fn test_unlisted_page_size_falls_back_to_default() {
    let body: Value = server()
        .get("/api/orders")
        .add_query_param("page_size", "3")
        .await
        .json();
    assert_eq!(body["pagination"]["page_size"], 10);
}

#[tokio::test]
async fn test_status_is_not_sortable() {
    let body: Value = server()
        .get("/api/orders")
        .add_query_param("sort", "status:desc")
        .await
        .json();
    assert!(body["sort"].is_null());
    assert_eq!(ids(&body)[0], 84564564);
}

#[tokio::test]
async fn test_get_order_by_id() {
    let server = server();

    let response = server.get("/api/orders/98652366").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "Handset");
    assert_eq!(body["quantity"], 50);

    let missing = server.get("/api/orders/1").await;
    missing.assert_status_not_found();
    let body: Value = missing.json();
    assert_eq!(body["code"], "ORDER_NOT_FOUND");
    assert_eq!(body["details"]["id"], 1);
}

#[tokio::test]
async fn test_statuses_and_columns() {
    let server = server();

    let statuses: Value = server.get("/api/statuses").await.json();
    let labels: Vec<&str> = statuses
        .as_array()
        .expect("array")
        .iter()
        .map(|s| s["label"].as_str().expect("label"))
        .collect();
    assert_eq!(labels, vec!["В обработке", "Утвержден", "Отклонен", "Не известно"]);
    assert_eq!(statuses[1]["color"], "success");

    let columns: Value = server.get("/api/columns").await.json();
    assert_eq!(columns.as_array().map(Vec::len), Some(5));
    assert_eq!(columns[3]["field"], "created_date");
    assert_eq!(columns[4]["sortable"], false);
}

// =============================================================================
// Dashboard page
// =============================================================================

#[tokio::test]
async fn test_dashboard_page_renders_all_rows() {
    let server = server();

    for path in ["/", "/dashboard/default"] {
        let response = server.get(path).await;
        response.assert_status_ok();

        let html = response.text();
        assert!(html.contains("Отчет"));
        assert!(html.contains("Найти"));
        assert!(html.contains("Camera Lens"));
        assert!(html.contains("Chair"));
        assert!(html.contains("22.09.2024"));
        assert!(html.contains("Дата регистрации"));
        assert!(!html.contains("grid-loading\">"));
    }
}

#[tokio::test]
async fn test_dashboard_page_applies_submitted_filters() {
    let response = server()
        .get("/")
        .add_query_param("name", "Mobile")
        .add_query_param("start_date", "20.09.2024")
        .await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Mobile"));
    assert!(!html.contains("Camera Lens"));
    assert!(html.contains("20.09.2024"));
    assert!(html.contains("Утвержден"));
}

#[tokio::test]
async fn test_dashboard_page_shows_empty_state() {
    let html = server()
        .get("/")
        .add_query_param("name", "Tablet")
        .await
        .text();
    assert!(html.contains("Нет строк"));
}

#[tokio::test]
async fn test_dashboard_page_carries_shell_headers() {
    let response = server().get("/").await;

    assert_eq!(response.headers()["x-scroll-restoration"], "top");
    assert_eq!(response.headers()["content-language"], "ru-RU");

    let html = response.text();
    assert!(html.contains("lang=\"ru-RU\""));
    assert!(html.contains("data-theme=\"light\""));
}

#[tokio::test]
async fn test_api_responses_skip_scroll_header() {
    let response = server().get("/api/orders").await;
    assert!(response.headers().get("x-scroll-restoration").is_none());
    assert_eq!(response.headers()["content-language"], "ru-RU");
}

// =============================================================================
// Fallback and custom routes
// =============================================================================

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let response = server().get("/reports/unknown").await;
    response.assert_status_not_found();

    let body: Value = response.json();
    assert_eq!(body["code"], "ROUTE_NOT_FOUND");
    assert_eq!(body["details"]["path"], "/reports/unknown");
}

#[tokio::test]
async fn test_custom_routes_share_the_shell() {
    let custom = Router::new().route("/ping", get(|| async { "pong" }));
    let app = DashboardBuilder::new()
        .with_custom_routes(custom)
        .build()
        .expect("Failed to build dashboard");
    let server = TestServer::new(app).expect("Failed to create test server");

    let response = server.get("/ping").await;
    response.assert_status_ok();
    response.assert_text("pong");
    assert_eq!(response.headers()["content-language"], "ru-RU");
}
