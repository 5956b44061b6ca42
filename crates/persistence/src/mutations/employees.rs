// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use personnel_domain::NewEmployee;
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::backend::PersistenceBackend;
use crate::data_models::{EmployeeChanges, NewEmployeeRow, format_timestamp};
use crate::diesel_schema::employees;
use crate::error::PersistenceError;

/// Inserts an employee.
///
/// # Returns
///
/// The ID assigned to the new employee.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the email or employee
/// number is taken, `PersistenceError::ForeignKeyViolation` if the
/// department does not exist, or another error if the insert fails.
pub fn create_employee(
    conn: &mut SqliteConnection,
    employee: &NewEmployee,
    now: OffsetDateTime,
) -> Result<i64, PersistenceError> {
    let timestamp: String = format_timestamp(now)?;
    let row: NewEmployeeRow<'_> = NewEmployeeRow {
        changes: EmployeeChanges::new(employee, timestamp.clone()),
        created_at: timestamp,
    };

    diesel::insert_into(employees::table)
        .values(&row)
        .execute(conn)?;

    let id: i64 = conn.get_last_insert_rowid()?;
    info!(
        id,
        employee_id = %employee.employee_id,
        department_id = employee.department_id,
        "Created employee"
    );
    Ok(id)
}

/// Replaces the writable columns of an employee.
///
/// # Returns
///
/// `true` if an employee was updated, `false` if none has this ID.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the email or employee
/// number is taken, `PersistenceError::ForeignKeyViolation` if the
/// department does not exist, or another error if the update fails.
pub fn update_employee(
    conn: &mut SqliteConnection,
    id: i64,
    employee: &NewEmployee,
    now: OffsetDateTime,
) -> Result<bool, PersistenceError> {
    let changes: EmployeeChanges<'_> = EmployeeChanges::new(employee, format_timestamp(now)?);

    let updated: usize = diesel::update(employees::table.filter(employees::id.eq(id)))
        .set(&changes)
        .execute(conn)?;

    info!(id, updated, "Updated employee");
    Ok(updated > 0)
}

/// Deletes an employee.
///
/// # Returns
///
/// `true` if an employee was deleted, `false` if none has this ID.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_employee(conn: &mut SqliteConnection, id: i64) -> Result<bool, PersistenceError> {
    let deleted: usize =
        diesel::delete(employees::table.filter(employees::id.eq(id))).execute(conn)?;

    info!(id, deleted, "Deleted employee");
    Ok(deleted > 0)
}

/// Deletes every employee. Departments are left in place.
///
/// # Returns
///
/// The number of employees deleted.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn purge_employees(conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
    let deleted: usize = diesel::delete(employees::table).execute(conn)?;
    warn!(deleted, "Purged all employees");
    Ok(deleted)
}
