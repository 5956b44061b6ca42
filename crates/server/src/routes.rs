// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP routing and the mapping of API errors onto status codes.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State as AxumState,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use personnel_api::{
    ApiError, DashboardSummaryResponse, DeleteResponse, DepartmentRequest, DepartmentResponse,
    EmployeeRequest, EmployeeResponse, ListEmployeesQuery, ListEmployeesResponse,
    create_department, create_employee, dashboard_summary, delete_department, delete_employee,
    get_department, get_employee, list_departments, list_employees, update_department,
    update_employee,
};
use personnel_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Application state shared across handlers.
///
/// The store is the only shared resource; each handler holds the lock for
/// the duration of its store calls.
#[derive(Clone)]
pub struct AppState {
    pub persistence: Arc<Mutex<Persistence>>,
}

impl AppState {
    #[must_use]
    pub fn new(persistence: Persistence) -> Self {
        Self {
            persistence: Arc::new(Mutex::new(persistence)),
        }
    }
}

/// Error body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Per-field validation messages.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    details: Vec<String>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: self.message,
            details: self.details,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::Validation { .. }
            | ApiError::Duplicate { .. }
            | ApiError::InvalidId { .. }
            | ApiError::DependentRecords { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
            details: err.details().to_vec(),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "Rejected malformed request body");
        Self {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
            details: Vec::new(),
        }
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        warn!(error = %rejection.body_text(), "Rejected malformed query string");
        Self {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
            details: Vec::new(),
        }
    }
}

// ============================================================================
// Employees
// ============================================================================

/// Handler for POST `/employees`.
async fn handle_create_employee(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EmployeeResponse>), HttpError> {
    let Json(request) = payload?;
    info!("Handling create_employee request");

    let mut persistence = app_state.persistence.lock().await;
    let response: EmployeeResponse =
        create_employee(&mut persistence, request, OffsetDateTime::now_utc())?;
    drop(persistence);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET `/employees`.
async fn handle_list_employees(
    AxumState(app_state): AxumState<AppState>,
    query: Result<Query<ListEmployeesQuery>, QueryRejection>,
) -> Result<Json<ListEmployeesResponse>, HttpError> {
    let Query(query) = query?;
    debug!(?query, "Handling list_employees request");

    let today = OffsetDateTime::now_utc().date();
    let mut persistence = app_state.persistence.lock().await;
    let response: ListEmployeesResponse = list_employees(&mut persistence, query, today)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/employees/{id}`.
async fn handle_get_employee(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EmployeeResponse>, HttpError> {
    let response: EmployeeResponse = get_employee(&mut *app_state.persistence.lock().await, &id)?;
    Ok(Json(response))
}

/// Handler for PUT `/employees/{id}`.
async fn handle_update_employee(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<Json<EmployeeResponse>, HttpError> {
    let Json(request) = payload?;
    info!(id = %id, "Handling update_employee request");

    let mut persistence = app_state.persistence.lock().await;
    let response: EmployeeResponse =
        update_employee(&mut persistence, &id, request, OffsetDateTime::now_utc())?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for DELETE `/employees/{id}`.
async fn handle_delete_employee(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, HttpError> {
    info!(id = %id, "Handling delete_employee request");

    let response: DeleteResponse =
        delete_employee(&mut *app_state.persistence.lock().await, &id)?;
    Ok(Json(response))
}

// ============================================================================
// Departments
// ============================================================================

/// Handler for POST `/departments`.
async fn handle_create_department(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<DepartmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DepartmentResponse>), HttpError> {
    let Json(request) = payload?;
    info!("Handling create_department request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DepartmentResponse =
        create_department(&mut persistence, request, OffsetDateTime::now_utc())?;
    drop(persistence);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET `/departments`.
async fn handle_list_departments(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<DepartmentResponse>>, HttpError> {
    let response: Vec<DepartmentResponse> =
        list_departments(&mut *app_state.persistence.lock().await)?;
    Ok(Json(response))
}

/// Handler for GET `/departments/{id}`.
async fn handle_get_department(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DepartmentResponse>, HttpError> {
    let response: DepartmentResponse =
        get_department(&mut *app_state.persistence.lock().await, &id)?;
    Ok(Json(response))
}

/// Handler for PUT `/departments/{id}`.
async fn handle_update_department(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<DepartmentRequest>, JsonRejection>,
) -> Result<Json<DepartmentResponse>, HttpError> {
    let Json(request) = payload?;
    info!(id = %id, "Handling update_department request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DepartmentResponse =
        update_department(&mut persistence, &id, request, OffsetDateTime::now_utc())?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for DELETE `/departments/{id}`.
async fn handle_delete_department(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, HttpError> {
    info!(id = %id, "Handling delete_department request");

    let response: DeleteResponse =
        delete_department(&mut *app_state.persistence.lock().await, &id)?;
    Ok(Json(response))
}

// ============================================================================
// Dashboard and health
// ============================================================================

/// Handler for GET `/dashboard/summary`.
async fn handle_dashboard_summary(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<DashboardSummaryResponse>, HttpError> {
    let response: DashboardSummaryResponse = dashboard_summary(
        &mut *app_state.persistence.lock().await,
        OffsetDateTime::now_utc(),
    )?;
    Ok(Json(response))
}

/// Handler for GET `/health`.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// The resource routes, mounted both at the root and under `/api`.
fn resource_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/employees",
            get(handle_list_employees).post(handle_create_employee),
        )
        .route(
            "/employees/{id}",
            get(handle_get_employee)
                .put(handle_update_employee)
                .delete(handle_delete_employee),
        )
        .route(
            "/departments",
            get(handle_list_departments).post(handle_create_department),
        )
        .route(
            "/departments/{id}",
            get(handle_get_department)
                .put(handle_update_department)
                .delete(handle_delete_department),
        )
        .route("/dashboard/summary", get(handle_dashboard_summary))
}

/// Builds the application router with all endpoints.
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .merge(resource_routes())
        .nest("/api", resource_routes())
        .route("/health", get(handle_health))
        .with_state(app_state)
}
