// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Department queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use personnel_domain::Department;
use tracing::debug;

use crate::data_models::DepartmentRow;
use crate::diesel_schema::{departments, employees};
use crate::error::PersistenceError;

/// Retrieves a department by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the department is not found.
pub fn get_department(
    conn: &mut SqliteConnection,
    department_id: i64,
) -> Result<Option<Department>, PersistenceError> {
    debug!(department_id, "Looking up department");

    let row: Option<DepartmentRow> = departments::table
        .filter(departments::id.eq(department_id))
        .select(DepartmentRow::as_select())
        .first(conn)
        .optional()?;

    row.map(DepartmentRow::into_department).transpose()
}

/// Lists every department ordered by name ascending.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_departments(conn: &mut SqliteConnection) -> Result<Vec<Department>, PersistenceError> {
    let rows: Vec<DepartmentRow> = departments::table
        .order((departments::name.asc(), departments::id.asc()))
        .select(DepartmentRow::as_select())
        .load(conn)?;

    debug!(count = rows.len(), "Listed departments");
    rows.into_iter().map(DepartmentRow::into_department).collect()
}

/// Checks whether a department exists.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn department_exists(
    conn: &mut SqliteConnection,
    department_id: i64,
) -> Result<bool, PersistenceError> {
    let count: i64 = departments::table
        .filter(departments::id.eq(department_id))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

/// Checks whether a department name is held by a department other than
/// `exclude_id`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn department_name_taken(
    conn: &mut SqliteConnection,
    name: &str,
    exclude_id: Option<i64>,
) -> Result<bool, PersistenceError> {
    let mut query = departments::table
        .filter(departments::name.eq(name))
        .into_boxed();
    if let Some(id) = exclude_id {
        query = query.filter(departments::id.ne(id));
    }

    let count: i64 = query.count().get_result(conn)?;
    Ok(count > 0)
}

/// Counts the employees referencing a department.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_employees_in_department(
    conn: &mut SqliteConnection,
    department_id: i64,
) -> Result<i64, PersistenceError> {
    let count: i64 = employees::table
        .filter(employees::department_id.eq(department_id))
        .count()
        .get_result(conn)?;

    debug!(department_id, count, "Counted employees in department");
    Ok(count)
}

/// Counts all departments.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_departments(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(departments::table.count().get_result(conn)?)
}
