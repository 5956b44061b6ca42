// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee queries.
//!
//! Every employee is read with its department left-joined, so a record is
//! still returned if the reference cannot be resolved.

use diesel::SqliteConnection;
use diesel::prelude::*;
use personnel_domain::Employee;
use tracing::debug;

use crate::data_models::{DepartmentRow, EmployeeRow};
use crate::diesel_schema::{departments, employees};
use crate::error::PersistenceError;

/// Retrieves an employee by ID with its department joined.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the employee is not found.
pub fn get_employee(conn: &mut SqliteConnection, id: i64) -> Result<Option<Employee>, PersistenceError> {
    debug!(id, "Looking up employee");

    let row: Option<(EmployeeRow, Option<DepartmentRow>)> = employees::table
        .left_join(departments::table)
        .filter(employees::id.eq(id))
        .select((EmployeeRow::as_select(), Option::<DepartmentRow>::as_select()))
        .first(conn)
        .optional()?;

    row.map(|(employee, department)| employee.into_employee(department))
        .transpose()
}

/// Checks whether an email address is held by an employee other than
/// `exclude_id`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn email_taken(
    conn: &mut SqliteConnection,
    email: &str,
    exclude_id: Option<i64>,
) -> Result<bool, PersistenceError> {
    let mut query = employees::table
        .filter(employees::email.eq(email))
        .into_boxed();
    if let Some(id) = exclude_id {
        query = query.filter(employees::id.ne(id));
    }

    let count: i64 = query.count().get_result(conn)?;
    Ok(count > 0)
}

/// Checks whether an employee number is held by an employee other than
/// `exclude_id`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn employee_id_taken(
    conn: &mut SqliteConnection,
    employee_id: &str,
    exclude_id: Option<i64>,
) -> Result<bool, PersistenceError> {
    let mut query = employees::table
        .filter(employees::employee_id.eq(employee_id))
        .into_boxed();
    if let Some(id) = exclude_id {
        query = query.filter(employees::id.ne(id));
    }

    let count: i64 = query.count().get_result(conn)?;
    Ok(count > 0)
}
