// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the personnel directory.
//!
//! Handlers here are transport-agnostic: they take the store, the raw
//! request DTOs, and the current time, and return response DTOs or an
//! `ApiError`. The HTTP server maps `ApiError` onto status codes.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod dashboard;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use dashboard::{ACTIVITY_CANDIDATES, ACTIVITY_LIMIT, RECENT_WINDOW, dashboard_summary};
pub use error::{ApiError, Resource, translate_domain_error, translate_persistence_error};
pub use handlers::{
    create_department, create_employee, delete_department, delete_employee, get_department,
    get_employee, list_departments, list_employees, parse_record_id, purge_employees,
    update_department, update_employee,
};
pub use request_response::{
    ActivityKind, ActivityResponse, DashboardSummaryResponse, DeleteResponse, DepartmentCount,
    DepartmentRef, DepartmentRequest, DepartmentResponse, EmployeeRequest, EmployeeResponse,
    ListEmployeesQuery, ListEmployeesResponse,
};
