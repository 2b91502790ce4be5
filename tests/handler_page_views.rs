mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use pageview_charts::api::handlers::{list_page_views_handler, record_page_view_handler};
use pageview_charts::domain::calendar;
use serde_json::json;

fn page_view_app(state: pageview_charts::AppState) -> Router {
    Router::new()
        .route(
            "/api/page-views",
            get(list_page_views_handler).post(record_page_view_handler),
        )
        .with_state(state)
}

#[tokio::test]
async fn test_record_page_view_is_queued() {
    let (state, mut rx, _repository) = common::create_test_state();
    let server = TestServer::new(page_view_app(state)).unwrap();

    let response = server
        .post("/api/page-views")
        .json(&json!({ "restaurantKey": "4", "name": "Wildfire" }))
        .await;

    response.assert_status(axum::http::StatusCode::ACCEPTED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "accepted");
    assert_eq!(json["restaurantKey"], "4");

    let event = rx.try_recv().unwrap();
    assert_eq!(event.restaurant_key, "4");
    assert_eq!(event.name, "Wildfire");
    assert!(event.viewed_on <= calendar::today());
}

#[tokio::test]
async fn test_record_page_view_validation() {
    let (state, mut rx, _repository) = common::create_test_state();
    let server = TestServer::new(page_view_app(state)).unwrap();

    let response = server
        .post("/api/page-views")
        .json(&json!({ "restaurantKey": "", "name": "Wildfire" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["fields"], json!(["restaurant_key"]));
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_record_page_view_missing_field() {
    let (state, _rx, _repository) = common::create_test_state();
    let server = TestServer::new(page_view_app(state)).unwrap();

    let response = server
        .post("/api/page-views")
        .json(&json!({ "restaurantKey": "4" }))
        .await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_record_page_view_queue_full() {
    let (state, _rx, _repository) = common::create_test_state_with_capacity(1);
    let server = TestServer::new(page_view_app(state)).unwrap();

    let body = json!({ "restaurantKey": "4", "name": "Wildfire" });

    server
        .post("/api/page-views")
        .json(&body)
        .await
        .assert_status(axum::http::StatusCode::ACCEPTED);

    let response = server.post("/api/page-views").json(&body).await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "service_unavailable");
}

#[tokio::test]
async fn test_record_page_view_queue_closed() {
    let (state, rx, _repository) = common::create_test_state();
    drop(rx);
    let server = TestServer::new(page_view_app(state)).unwrap();

    let response = server
        .post("/api/page-views")
        .json(&json!({ "restaurantKey": "4", "name": "Wildfire" }))
        .await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_list_page_views() {
    let (state, _rx) = common::create_seeded_state().await;
    let server = TestServer::new(page_view_app(state)).unwrap();

    let response = server.get("/api/page-views").await;

    response.assert_status_ok();
    response.assert_json(&json!([
        {
            "name": "Wildfire",
            "id": "4",
            "pageViews": [
                { "week": 10, "year": 2020, "count": 2 },
                { "week": 11, "year": 2020, "count": 10 }
            ]
        },
        {
            "name": "Poke Doke",
            "id": "7",
            "pageViews": [{ "week": 11, "year": 2020, "count": 8 }]
        }
    ]));
}

#[tokio::test]
async fn test_list_page_views_empty() {
    let (state, _rx, _repository) = common::create_test_state();
    let server = TestServer::new(page_view_app(state)).unwrap();

    let response = server.get("/api/page-views").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}
