// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Router-level tests driven through `tower::ServiceExt::oneshot`.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod config_tests;
mod department_route_tests;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use personnel_persistence::Persistence;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::routes::{AppState, build_router};

/// Helper to create a router over a fresh in-memory store.
pub fn create_test_app() -> Router {
    let persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    build_router(AppState::new(persistence))
}

/// Sends a request with an optional JSON body and decodes the JSON reply.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request: Request<Body> = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status: StatusCode = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };
    (status, value)
}

/// Creates a department and returns its identifier.
pub async fn seed_department(app: &Router, name: &str) -> i64 {
    let (status, body) = send(app, "POST", "/departments", Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["_id"].as_i64().unwrap()
}

pub fn employee_body(department_id: i64, name: &str, employee_id: &str) -> Value {
    json!({
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        "phone": "+1 415 555 0134",
        "dob": "1987-02-23",
        "department": department_id,
        "role": "Support Engineer",
        "employmentType": "part-time",
        "hireDate": "2019-03-18",
        "salary": 38500,
        "employeeId": employee_id,
        "address": {
            "line1": "500 Mission St",
            "city": "San Francisco",
            "state": "CA",
            "zip": "94105",
            "country": "US"
        },
        "emergencyContact": {
            "name": "Jordan Vega",
            "phone": "+1 415 555 0188",
            "relationship": "Spouse"
        }
    })
}

#[tokio::test]
async fn test_health() {
    let app: Router = create_test_app();

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_routes_are_mounted_under_api_prefix() {
    let app: Router = create_test_app();
    seed_department(&app, "Support").await;

    let (status, body) = send(&app, "GET", "/api/departments", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], json!("Support"));
}

#[tokio::test]
async fn test_dashboard_summary() {
    let app: Router = create_test_app();
    let department_id: i64 = seed_department(&app, "Support").await;
    send(
        &app,
        "POST",
        "/employees",
        Some(employee_body(department_id, "Rosa Vega", "SUP-1")),
    )
    .await;

    let (status, body) = send(&app, "GET", "/api/dashboard/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalEmployees"], json!(1));
    assert_eq!(body["recentHires"], json!(1));
    assert_eq!(body["departmentCount"], json!(1));
    assert_eq!(body["departmentCounts"][0], json!({ "name": "Support", "count": 1 }));
    assert_eq!(body["recentActivities"][0]["type"], json!("new"));
}
