// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee and department handlers.
//!
//! Writes follow the same shape: validate, pre-check uniqueness and
//! references for a readable message, then write and let the store's
//! constraints catch anything that raced past the pre-checks.

use personnel::{ListingParams, ListingPlan, Page};
use personnel_domain::{
    Department, DepartmentFields, DepartmentPatch, Employee, EmployeeFields, EmployeePatch,
    NewDepartment, NewEmployee, validate_department_fields, validate_employee_fields,
};
use personnel_persistence::{Persistence, PersistenceError};
use time::{Date, OffsetDateTime};
use tracing::{debug, info, warn};

use crate::error::{ApiError, Resource, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    DeleteResponse, DepartmentRequest, DepartmentResponse, EmployeeRequest, EmployeeResponse,
    ListEmployeesQuery, ListEmployeesResponse,
};

/// Parses a record identifier taken from a request path.
///
/// # Errors
///
/// Returns `ApiError::InvalidId` unless `raw` is a positive decimal integer.
pub fn parse_record_id(raw: &str, resource: Resource) -> Result<i64, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::InvalidId { resource });
    }
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or(ApiError::InvalidId { resource })
}

fn department_not_found() -> ApiError {
    ApiError::invalid("department: Department not found")
}

/// Builds the duplicate error for an employee's unique field.
///
/// Updates name the conflict as belonging to another employee.
fn duplicate_employee_field(field: &str, updating: bool) -> ApiError {
    let message: &str = match (field, updating) {
        ("email", false) => "Email already exists",
        ("email", true) => "Email already exists for another employee",
        ("employeeId", false) => "Employee ID already exists",
        ("employeeId", true) => "Employee ID already exists for another employee",
        (_, false) => "Record already exists",
        (_, true) => "Record already exists for another employee",
    };
    ApiError::Duplicate {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Builds the duplicate error for a department name.
fn duplicate_department_name(updating: bool) -> ApiError {
    let message: &str = if updating {
        "Department name already exists"
    } else {
        "Department already exists"
    };
    ApiError::Duplicate {
        field: String::from("name"),
        message: message.to_string(),
    }
}

/// Translates a failed employee write.
///
/// A foreign key failure means the department vanished after the
/// existence pre-check. A unique violation means another write took the
/// value after the uniqueness pre-check; it is reported with the same
/// message the pre-check would have produced.
pub(crate) fn translate_employee_write_error(
    err: PersistenceError,
    updating: bool,
) -> ApiError {
    match err {
        PersistenceError::ForeignKeyViolation(_) => department_not_found(),
        PersistenceError::UniqueViolation { field } => duplicate_employee_field(&field, updating),
        other => translate_persistence_error(other),
    }
}

/// Translates a failed department write.
pub(crate) fn translate_department_write_error(
    err: PersistenceError,
    updating: bool,
) -> ApiError {
    match err {
        PersistenceError::UniqueViolation { .. } => duplicate_department_name(updating),
        other => translate_persistence_error(other),
    }
}

fn ensure_department_exists(
    persistence: &mut Persistence,
    department_id: i64,
) -> Result<(), ApiError> {
    if persistence
        .department_exists(department_id)
        .map_err(translate_persistence_error)?
    {
        Ok(())
    } else {
        warn!(department_id, "Rejected employee write: unknown department");
        Err(department_not_found())
    }
}

/// Rejects an email already held by an employee other than `exclude_id`.
fn ensure_email_available(
    persistence: &mut Persistence,
    email: &str,
    exclude_id: Option<i64>,
) -> Result<(), ApiError> {
    if !persistence
        .email_taken(email, exclude_id)
        .map_err(translate_persistence_error)?
    {
        return Ok(());
    }

    warn!(email, "Rejected employee write: duplicate email");
    Err(duplicate_employee_field("email", exclude_id.is_some()))
}

/// Rejects an employee number already held by an employee other than
/// `exclude_id`.
fn ensure_employee_id_available(
    persistence: &mut Persistence,
    employee_id: &str,
    exclude_id: Option<i64>,
) -> Result<(), ApiError> {
    if !persistence
        .employee_id_taken(employee_id, exclude_id)
        .map_err(translate_persistence_error)?
    {
        return Ok(());
    }

    warn!(employee_id, "Rejected employee write: duplicate employee ID");
    Err(duplicate_employee_field("employeeId", exclude_id.is_some()))
}

fn load_employee(persistence: &mut Persistence, id: i64) -> Result<Employee, ApiError> {
    persistence
        .get_employee(id)
        .map_err(translate_persistence_error)?
        .ok_or(ApiError::NotFound {
            resource: Resource::Employee,
        })
}

fn load_department(persistence: &mut Persistence, id: i64) -> Result<Department, ApiError> {
    persistence
        .get_department(id)
        .map_err(translate_persistence_error)?
        .ok_or(ApiError::NotFound {
            resource: Resource::Department,
        })
}

// ============================================================================
// Employees
// ============================================================================

/// Creates an employee.
///
/// # Arguments
///
/// * `persistence` - The store
/// * `request` - The request body
/// * `now` - The creation timestamp
///
/// # Returns
///
/// The stored employee with its department joined.
///
/// # Errors
///
/// Returns an error if:
/// - Any field fails validation
/// - The email or employee ID is already taken
/// - The department does not exist
/// - The store fails
pub fn create_employee(
    persistence: &mut Persistence,
    request: EmployeeRequest,
    now: OffsetDateTime,
) -> Result<EmployeeResponse, ApiError> {
    let fields: EmployeeFields = request.into_fields()?;
    let employee: NewEmployee = validate_employee_fields(&fields).map_err(translate_domain_error)?;

    ensure_email_available(persistence, &employee.email, None)?;
    ensure_employee_id_available(persistence, &employee.employee_id, None)?;
    ensure_department_exists(persistence, employee.department_id)?;

    let created: Employee = persistence
        .create_employee(&employee, now)
        .map_err(|e| translate_employee_write_error(e, false))?;

    info!(
        id = created.id,
        employee_id = %created.employee_id,
        department_id = created.department_id,
        "Created employee"
    );
    Ok(EmployeeResponse::from(&created))
}

/// Lists employees matching the query.
///
/// # Arguments
///
/// * `persistence` - The store
/// * `query` - The raw listing parameters
/// * `today` - The current UTC date, used by age searches
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_employees(
    persistence: &mut Persistence,
    query: ListEmployeesQuery,
    today: Date,
) -> Result<ListEmployeesResponse, ApiError> {
    let params: ListingParams = ListingParams::from(query);
    let plan: ListingPlan = ListingPlan::build(&params, today);
    debug!(
        filter = ?plan.filter,
        sort_field = plan.sort_field.as_key(),
        page = plan.pagination.page(),
        limit = plan.pagination.limit(),
        "Listing employees"
    );

    let page: Page<Employee> = persistence
        .list_employees(&plan)
        .map_err(translate_persistence_error)?;
    Ok(ListEmployeesResponse::from(page))
}

/// Retrieves one employee with its department joined.
///
/// # Errors
///
/// Returns an error if the identifier is malformed, no employee has it, or
/// the store fails.
pub fn get_employee(persistence: &mut Persistence, raw_id: &str) -> Result<EmployeeResponse, ApiError> {
    let id: i64 = parse_record_id(raw_id, Resource::Employee)?;
    debug!(id, "Fetching employee");
    let employee: Employee = load_employee(persistence, id)?;
    Ok(EmployeeResponse::from(&employee))
}

/// Applies a partial update to an employee.
///
/// The supplied fields are merged onto the stored record and the merged
/// record is validated as a whole. Uniqueness is re-checked only for the
/// unique fields the request supplies, and the department only if the
/// request changes it.
///
/// # Errors
///
/// Returns an error if:
/// - The identifier is malformed or unknown
/// - The merged record fails validation
/// - A supplied email or employee ID belongs to another employee
/// - A supplied department does not exist
/// - The store fails
pub fn update_employee(
    persistence: &mut Persistence,
    raw_id: &str,
    request: EmployeeRequest,
    now: OffsetDateTime,
) -> Result<EmployeeResponse, ApiError> {
    let id: i64 = parse_record_id(raw_id, Resource::Employee)?;
    let existing: Employee = load_employee(persistence, id)?;

    let patch: EmployeePatch = request.into_patch()?;
    let email_supplied: bool = patch.email.is_some();
    let employee_id_supplied: bool = patch.employee_id.is_some();
    let department_supplied: bool = patch.department_id.is_some();

    let mut fields: EmployeeFields = EmployeeFields::from(&existing);
    fields.apply(patch);
    let employee: NewEmployee = validate_employee_fields(&fields).map_err(translate_domain_error)?;

    if email_supplied {
        ensure_email_available(persistence, &employee.email, Some(id))?;
    }
    if employee_id_supplied {
        ensure_employee_id_available(persistence, &employee.employee_id, Some(id))?;
    }
    if department_supplied {
        ensure_department_exists(persistence, employee.department_id)?;
    }

    let updated: Employee = persistence
        .update_employee(id, &employee, now)
        .map_err(|e| translate_employee_write_error(e, true))?
        .ok_or(ApiError::NotFound {
            resource: Resource::Employee,
        })?;

    info!(id, "Updated employee");
    Ok(EmployeeResponse::from(&updated))
}

/// Deletes an employee.
///
/// # Errors
///
/// Returns an error if the identifier is malformed or unknown, or the
/// store fails.
pub fn delete_employee(persistence: &mut Persistence, raw_id: &str) -> Result<DeleteResponse, ApiError> {
    let id: i64 = parse_record_id(raw_id, Resource::Employee)?;
    if !persistence
        .delete_employee(id)
        .map_err(translate_persistence_error)?
    {
        return Err(ApiError::NotFound {
            resource: Resource::Employee,
        });
    }

    info!(id, "Deleted employee");
    Ok(DeleteResponse::new("Employee deleted successfully"))
}

/// Deletes every employee and returns how many were removed.
///
/// Departments are kept.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn purge_employees(persistence: &mut Persistence) -> Result<usize, ApiError> {
    persistence
        .purge_employees()
        .map_err(translate_persistence_error)
}

// ============================================================================
// Departments
// ============================================================================

/// Creates a department.
///
/// # Errors
///
/// Returns an error if the name is missing or taken, or the store fails.
pub fn create_department(
    persistence: &mut Persistence,
    request: DepartmentRequest,
    now: OffsetDateTime,
) -> Result<DepartmentResponse, ApiError> {
    let fields: DepartmentFields = request.into_fields();
    let department: NewDepartment =
        validate_department_fields(&fields).map_err(translate_domain_error)?;

    if persistence
        .department_name_taken(&department.name, None)
        .map_err(translate_persistence_error)?
    {
        warn!(name = %department.name, "Rejected department create: duplicate name");
        return Err(duplicate_department_name(false));
    }

    let created: Department = persistence
        .create_department(&department, now)
        .map_err(|e| translate_department_write_error(e, false))?;

    info!(id = created.id, name = %created.name, "Created department");
    Ok(DepartmentResponse::from(&created))
}

/// Lists every department ordered by name.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_departments(persistence: &mut Persistence) -> Result<Vec<DepartmentResponse>, ApiError> {
    let departments: Vec<Department> = persistence
        .list_departments()
        .map_err(translate_persistence_error)?;
    Ok(departments.iter().map(DepartmentResponse::from).collect())
}

/// Retrieves one department.
///
/// # Errors
///
/// Returns an error if the identifier is malformed, no department has it,
/// or the store fails.
pub fn get_department(
    persistence: &mut Persistence,
    raw_id: &str,
) -> Result<DepartmentResponse, ApiError> {
    let id: i64 = parse_record_id(raw_id, Resource::Department)?;
    debug!(id, "Fetching department");
    let department: Department = load_department(persistence, id)?;
    Ok(DepartmentResponse::from(&department))
}

/// Applies a partial update to a department.
///
/// # Errors
///
/// Returns an error if the identifier is malformed or unknown, the merged
/// record fails validation, a supplied name belongs to another department,
/// or the store fails.
pub fn update_department(
    persistence: &mut Persistence,
    raw_id: &str,
    request: DepartmentRequest,
    now: OffsetDateTime,
) -> Result<DepartmentResponse, ApiError> {
    let id: i64 = parse_record_id(raw_id, Resource::Department)?;
    let existing: Department = load_department(persistence, id)?;

    let patch: DepartmentPatch = request.into_patch();
    let name_supplied: bool = patch.name.is_some();

    let mut fields: DepartmentFields = DepartmentFields::from(&existing);
    fields.apply(patch);
    let department: NewDepartment =
        validate_department_fields(&fields).map_err(translate_domain_error)?;

    if name_supplied
        && persistence
            .department_name_taken(&department.name, Some(id))
            .map_err(translate_persistence_error)?
    {
        warn!(id, name = %department.name, "Rejected department update: duplicate name");
        return Err(duplicate_department_name(true));
    }

    let updated: Department = persistence
        .update_department(id, &department, now)
        .map_err(|e| translate_department_write_error(e, true))?
        .ok_or(ApiError::NotFound {
            resource: Resource::Department,
        })?;

    info!(id, "Updated department");
    Ok(DepartmentResponse::from(&updated))
}

/// Deletes a department that no employee references.
///
/// # Errors
///
/// Returns an error if the identifier is malformed or unknown, employees
/// are still assigned, or the store fails.
pub fn delete_department(
    persistence: &mut Persistence,
    raw_id: &str,
) -> Result<DeleteResponse, ApiError> {
    let id: i64 = parse_record_id(raw_id, Resource::Department)?;

    let assigned: i64 = persistence
        .count_employees_in_department(id)
        .map_err(translate_persistence_error)?;
    if assigned > 0 {
        warn!(id, assigned, "Rejected department delete: employees assigned");
        return Err(ApiError::DependentRecords { count: assigned });
    }

    match persistence.delete_department(id) {
        Ok(true) => {
            info!(id, "Deleted department");
            Ok(DeleteResponse::new("Department deleted successfully"))
        }
        Ok(false) => Err(ApiError::NotFound {
            resource: Resource::Department,
        }),
        Err(PersistenceError::ForeignKeyViolation(_)) => {
            // An employee was assigned after the count
            let count: i64 = persistence
                .count_employees_in_department(id)
                .map_err(translate_persistence_error)?;
            Err(ApiError::DependentRecords {
                count: count.max(1),
            })
        }
        Err(e) => Err(translate_persistence_error(e)),
    }
}
