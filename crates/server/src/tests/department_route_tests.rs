// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_app, employee_body, seed_department, send};
use axum::{Router, http::StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_department_crud() {
    let app: Router = create_test_app();
    let id: i64 = seed_department(&app, "Support").await;
    let uri: String = format!("/departments/{id}");

    let (status, body) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({ "description": "Tier one and two" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], json!("Support"));
    assert_eq!(body["description"], json!("Tier one and two"));

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], json!("Tier one and two"));

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "message": "Department deleted successfully" })
    );

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Department not found" }));
}

#[tokio::test]
async fn test_duplicate_department_returns_400() {
    let app: Router = create_test_app();
    seed_department(&app, "Support").await;

    let (status, body) = send(
        &app,
        "POST",
        "/departments",
        Some(json!({ "name": "Support" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Department already exists" }));
}

#[tokio::test]
async fn test_delete_department_with_employees_returns_400() {
    let app: Router = create_test_app();
    let id: i64 = seed_department(&app, "Support").await;
    send(
        &app,
        "POST",
        "/employees",
        Some(employee_body(id, "Rosa Vega", "SUP-1")),
    )
    .await;

    let (status, body) = send(&app, "DELETE", &format!("/departments/{id}"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Cannot delete department with 1 employee(s) assigned" })
    );
}

#[tokio::test]
async fn test_invalid_department_id_returns_400() {
    let app: Router = create_test_app();

    let (status, body) = send(&app, "DELETE", "/departments/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid department ID" }));
}
