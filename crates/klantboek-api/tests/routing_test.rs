//! Router behavior tests that never touch a live database.
//!
//! Uses a lazily-connected pool: requests that are rejected before any
//! query runs (unknown routes, malformed bodies, field validation) must
//! respond without a database round trip.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use klantboek_api::create_router;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

fn lazy_router() -> axum::Router {
    let pool = PgPool::connect_lazy("postgresql://unreachable").unwrap();
    create_router(pool)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = lazy_router();

    let request = Request::builder().method("GET").uri("/nope").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn responses_carry_request_id_header() {
    let app = lazy_router();

    let request = Request::builder().method("GET").uri("/live").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("X-Request-Id"));
}

#[tokio::test]
async fn malformed_json_body_is_rejected_before_any_query() {
    let app = lazy_router();

    let request = Request::builder()
        .method("POST")
        .uri("/customers")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn invalid_fields_return_400_with_error_envelope() {
    let app = lazy_router();

    // first_name below the 3-character minimum; validation fails before
    // the (unreachable) database is ever contacted.
    let request = Request::builder()
        .method("POST")
        .uri("/customers")
        .header("content-type", "application/json")
        .body(Body::from(
            r#"{"first_name": "Al", "last_name": "Hilton", "city": "Amsterdam"}"#,
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Something went wrong");
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(body["error"]["detail"].as_str().unwrap().contains("first_name"));
}

#[tokio::test]
async fn unknown_city_returns_400() {
    let app = lazy_router();

    let request = Request::builder()
        .method("POST")
        .uri("/customers")
        .header("content-type", "application/json")
        .body(Body::from(
            r#"{"first_name": "Paris", "last_name": "Hilton", "city": "Paris"}"#,
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(body["error"]["detail"].as_str().unwrap().contains("city"));
}

#[tokio::test]
async fn update_with_wrong_body_type_is_rejected() {
    let app = lazy_router();

    let request = Request::builder()
        .method("PUT")
        .uri("/customers/1")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"city": 42}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}
