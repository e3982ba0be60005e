//! Router tests for the Axum web server.
//!
//! These tests verify that routes are correctly wired to handlers, using a
//! throwaway database per test.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use absantee_axum::{AxumContext, CorsConfig, JSON_CONTENT_TYPE, create_router};
use absantee_db::TestDb;

async fn test_app() -> (Router, TestDb) {
    let db = TestDb::new().await.unwrap();
    let app = create_router(
        AxumContext::from_pool(db.pool().clone()),
        &CorsConfig::AllowAll,
    );
    (app, db)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, String, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, content_type, value)
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let (app, _db) = test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn weather_forecast_returns_five_days() {
    let (app, _db) = test_app().await;

    let (status, content_type, body) = send(&app, Method::GET, "/WeatherForecast", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, JSON_CONTENT_TYPE);
    let days = body.as_array().unwrap();
    assert_eq!(days.len(), 5);
    for day in days {
        let c = day["temperatureC"].as_i64().unwrap();
        assert!((-20..55).contains(&c));
        assert!(day["summary"].is_string());
    }
}

#[tokio::test]
async fn colaborator_list_is_empty_on_fresh_store() {
    let (app, _db) = test_app().await;

    let (status, content_type, body) = send(&app, Method::GET, "/api/colaborator", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, JSON_CONTENT_TYPE);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn colaborator_create_then_fetch() {
    let (app, _db) = test_app().await;

    let (status, content_type, created) = send(
        &app,
        Method::POST,
        "/api/colaborator",
        Some(json!({
            "Name": "John Doe",
            "Email": "john.doe@example.com",
            "Street": "adlkfjasdlkfs",
            "PostalCode": "4000-000"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(content_type, JSON_CONTENT_TYPE);
    assert_eq!(created["name"], "John Doe");
    assert_eq!(created["postalCode"], "4000-000");

    let (status, _, fetched) = send(&app, Method::GET, "/api/colaborator/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn colaborator_invalid_email_is_bad_request() {
    let (app, _db) = test_app().await;

    let (status, content_type, body) = send(
        &app,
        Method::POST,
        "/api/colaborator",
        Some(json!({
            "name": "No Mail",
            "email": "not-an-address",
            "street": "Rua",
            "postalCode": "4000-000"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(content_type, JSON_CONTENT_TYPE);
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn colaborator_missing_field_is_bad_request() {
    let (app, _db) = test_app().await;

    let (status, content_type, body) = send(
        &app,
        Method::POST,
        "/api/colaborator",
        Some(json!({ "name": "Only Name" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(content_type, JSON_CONTENT_TYPE);
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn unknown_colaborator_is_not_found() {
    let (app, _db) = test_app().await;

    let (status, content_type, body) = send(&app, Method::GET, "/api/colaborator/99", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(content_type, JSON_CONTENT_TYPE);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let (app, _db) = test_app().await;

    let (status, content_type, _) = send(&app, Method::GET, "/api/category/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(content_type, JSON_CONTENT_TYPE);
}

#[tokio::test]
async fn unmatched_path_is_json_not_found() {
    let (app, _db) = test_app().await;

    let (status, content_type, body) = send(&app, Method::GET, "/api/nope", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(content_type, JSON_CONTENT_TYPE);
    assert_eq!(body, json!({ "error": "No route for /api/nope", "status": 404 }));
}

#[tokio::test]
async fn unsupported_method_is_json_method_not_allowed() {
    let (app, _db) = test_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/api/colaborator")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let allow = response.headers()[header::ALLOW].to_str().unwrap().to_string();
    assert!(allow.contains("GET"));
    assert!(allow.contains("POST"));

    let (status, content_type, body) = send(&app, Method::DELETE, "/api/colaborator", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(content_type, JSON_CONTENT_TYPE);
    assert_eq!(body["status"], 405);
    assert_eq!(body["error"], "Method DELETE not allowed for /api/colaborator");
}

#[tokio::test]
async fn category_crud_round_trip() {
    let (app, _db) = test_app().await;

    let (status, _, created) = send(
        &app,
        Method::POST,
        "/api/category",
        Some(json!({ "description": "Books" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({ "id": 1, "description": "Books", "active": true }));

    let (status, _, updated) = send(
        &app,
        Method::PUT,
        "/api/category/1",
        Some(json!({ "active": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["active"], false);
    assert_eq!(updated["description"], "Books");

    let (status, _, deleted) = send(&app, Method::DELETE, "/api/category/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["id"], 1);

    let (status, _, list) = send(&app, Method::GET, "/api/category", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));

    let (status, _, _) = send(&app, Method::DELETE, "/api/category/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn category_description_too_long_is_bad_request() {
    let (app, _db) = test_app().await;

    let (status, _, body) = send(
        &app,
        Method::POST,
        "/api/category",
        Some(json!({ "description": "x".repeat(101) })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("description"));
}
