use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use crate::server::{router::router, state::AppState};


/// Builds the full router over a fresh in-memory database.
///
/// The context is returned so the database outlives the router for the whole test.
async fn app() -> (TestContext, Router) {
    let mut test = TestBuilder::new().with_faculty_tables().build().await.unwrap();
    let db = test.database().await.unwrap().clone();

    let app = router(AppState::new(db), CorsLayer::new());

    (test, app)
}

/// Sends one request and returns the status with the body parsed as JSON (`Null` when the
/// body is empty or not JSON).
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(value) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

fn cntt_department() -> Value {
    json!({"fullName": "Khoa Công nghệ thông tin", "abbreviation": "CNTT"})
}

fn master_degree() -> Value {
    json!({
        "name": "Thạc sĩ",
        "coefficient": 1.2,
        "specialization": "CNTT",
        "issueDate": "2020-01-01"
    })
}

fn teacher_gv001() -> Value {
    json!({
        "id": "GV001",
        "fullName": "Nguyen Van A",
        "dateOfBirth": "1990-01-01",
        "department": "CNTT",
        "degree": "Thạc sĩ",
        "email": "a@x.com",
        "phoneNumber": "0912345678",
        "joinDate": "2021-01-01"
    })
}

/// Creates department `CNTT` and degree `Thạc sĩ` over HTTP.
async fn seed_references(app: &Router) {
    let (status, _) = send(app, Method::POST, "/api/departments", Some(cntt_department())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(app, Method::POST, "/api/degrees", Some(master_degree())).await;
    assert_eq!(status, StatusCode::CREATED);
}
