// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names on the wire are camelCase and record identifiers are
//! serialised as `_id`.

use personnel::{ListingParams, Page};
use personnel_domain::{
    Address, AddressFields, Department, DepartmentFields, DepartmentPatch, EmergencyContact,
    EmergencyContactFields, Employee, EmployeeFields, EmployeePatch, EmploymentType,
};
use serde::{Deserialize, Deserializer, Serialize};
use time::{Date, OffsetDateTime};

use crate::error::ApiError;

time::serde::format_description!(calendar_date, Date, "[year]-[month]-[day]");

/// Deserializes a field that distinguishes "absent" from "explicitly null".
///
/// Used with `#[serde(default)]`: a missing field stays `None`, a `null`
/// becomes `Some(None)`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A reference to a department in an employee write.
///
/// Clients send the bare identifier, its decimal string form, or a
/// previously returned department object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DepartmentRef {
    Id(i64),
    Text(String),
    Record {
        #[serde(rename = "_id")]
        id: i64,
    },
}

impl DepartmentRef {
    /// Resolves the referenced identifier, if the reference is well formed.
    #[must_use]
    pub fn id(&self) -> Option<i64> {
        match self {
            Self::Id(id) | Self::Record { id } => Some(*id),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// API request body for creating or updating an employee.
///
/// On create, absent fields are reported by validation. On update, absent
/// fields keep their stored values and `salary: null` clears the salary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Date of birth, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<DepartmentRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    /// Hire date, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub salary: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<EmergencyContactFields>,
}

impl EmployeeRequest {
    fn department_id(&self) -> Result<Option<i64>, ApiError> {
        self.department.as_ref().map_or(Ok(None), |reference| {
            reference
                .id()
                .map(Some)
                .ok_or_else(|| ApiError::invalid("department must be a valid department ID"))
        })
    }

    /// Converts a create request into an unvalidated field set.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the department reference is malformed.
    pub fn into_fields(self) -> Result<EmployeeFields, ApiError> {
        let department_id: Option<i64> = self.department_id()?;
        Ok(EmployeeFields {
            name: self.name,
            email: self.email,
            phone: self.phone,
            dob: self.dob,
            department_id,
            role: self.role,
            employment_type: self.employment_type,
            hire_date: self.hire_date,
            salary: self.salary.flatten(),
            employee_id: self.employee_id,
            address: self.address,
            emergency_contact: self.emergency_contact,
        })
    }

    /// Converts an update request into a partial update.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the department reference is malformed.
    pub fn into_patch(self) -> Result<EmployeePatch, ApiError> {
        let department_id: Option<i64> = self.department_id()?;
        Ok(EmployeePatch {
            name: self.name,
            email: self.email,
            phone: self.phone,
            dob: self.dob,
            department_id,
            role: self.role,
            employment_type: self.employment_type,
            hire_date: self.hire_date,
            salary: self.salary,
            employee_id: self.employee_id,
            address: self.address,
            emergency_contact: self.emergency_contact,
        })
    }
}

/// API request body for creating or updating a department.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `null` clears the description on update.
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
}

impl DepartmentRequest {
    /// Converts a create request into an unvalidated field set.
    #[must_use]
    pub fn into_fields(self) -> DepartmentFields {
        DepartmentFields {
            name: self.name,
            description: self.description.flatten(),
        }
    }

    /// Converts an update request into a partial update.
    #[must_use]
    pub fn into_patch(self) -> DepartmentPatch {
        DepartmentPatch {
            name: self.name,
            description: self.description,
        }
    }
}

/// Query string of the employee listing.
///
/// Values are kept as raw strings; normalisation happens in
/// `ListingPlan::build`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEmployeesQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub q: Option<String>,
    pub sort_field: Option<String>,
    pub sort_dir: Option<String>,
}

impl From<ListEmployeesQuery> for ListingParams {
    fn from(query: ListEmployeesQuery) -> Self {
        Self {
            page: query.page,
            limit: query.limit,
            q: query.q,
            sort_field: query.sort_field,
            sort_dir: query.sort_dir,
        }
    }
}

/// A department as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentResponse {
    #[serde(rename = "_id")]
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<&Department> for DepartmentResponse {
    fn from(department: &Department) -> Self {
        Self {
            id: department.id,
            name: department.name.clone(),
            description: department.description.clone(),
            created_at: department.created_at,
            updated_at: department.updated_at,
        }
    }
}

/// An employee as returned to clients, with its department joined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    #[serde(rename = "_id")]
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(with = "calendar_date")]
    pub dob: Date,
    /// `null` only if the department could not be resolved.
    pub department: Option<DepartmentResponse>,
    pub role: String,
    pub employment_type: EmploymentType,
    #[serde(with = "calendar_date")]
    pub hire_date: Date,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    pub employee_id: String,
    pub address: Address,
    pub emergency_contact: EmergencyContact,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<&Employee> for EmployeeResponse {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            dob: employee.dob,
            department: employee.department.as_ref().map(DepartmentResponse::from),
            role: employee.role.clone(),
            employment_type: employee.employment_type,
            hire_date: employee.hire_date,
            salary: employee.salary,
            employee_id: employee.employee_id.clone(),
            address: employee.address.clone(),
            emergency_contact: employee.emergency_contact.clone(),
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

/// One page of the employee listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEmployeesResponse {
    pub data: Vec<EmployeeResponse>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl From<Page<Employee>> for ListEmployeesResponse {
    fn from(page: Page<Employee>) -> Self {
        let page: Page<EmployeeResponse> = page.map(|employee| EmployeeResponse::from(&employee));
        Self {
            data: page.data,
            total: page.total,
            page: page.page,
            limit: page.limit,
            total_pages: page.total_pages,
        }
    }
}

/// API response for a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

impl DeleteResponse {
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

/// Number of employees in one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentCount {
    pub name: String,
    pub count: usize,
}

/// What happened to an employee recently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// The employee was added.
    New,
    /// The employee was edited after being added.
    Update,
}

/// A dashboard activity entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityResponse {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub message: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Aggregates shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummaryResponse {
    pub total_employees: usize,
    /// Employees created within the recent window.
    pub recent_hires: usize,
    pub department_count: usize,
    pub avg_employees_per_dept: f64,
    /// Employees per department name, sorted by name.
    pub department_counts: Vec<DepartmentCount>,
    /// Newest first.
    pub recent_activities: Vec<ActivityResponse>,
}
