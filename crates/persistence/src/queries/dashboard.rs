// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Count and aggregation queries backing the dashboard summary.

use diesel::SqliteConnection;
use diesel::prelude::*;
use num_traits::ToPrimitive;
use personnel_domain::Employee;
use time::OffsetDateTime;

use crate::data_models::{DepartmentRow, EmployeeRow, format_timestamp};
use crate::diesel_schema::{departments, employees};
use crate::error::PersistenceError;

fn to_count(value: i64) -> Result<usize, PersistenceError> {
    value
        .to_usize()
        .ok_or_else(|| PersistenceError::DatabaseError("Count conversion failed".to_string()))
}

/// Counts all employees.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or if count
/// conversion fails.
pub fn count_employees(conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
    let count: i64 = employees::table.count().get_result(conn)?;
    to_count(count)
}

/// Counts employees created at or after `since`.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or if count
/// conversion fails.
pub fn count_employees_created_since(
    conn: &mut SqliteConnection,
    since: OffsetDateTime,
) -> Result<usize, PersistenceError> {
    let since: String = format_timestamp(since)?;
    let count: i64 = employees::table
        .filter(employees::created_at.ge(since))
        .count()
        .get_result(conn)?;
    to_count(count)
}

/// Counts employees per department name.
///
/// Returns `(department_name, employee_count)` pairs ordered by name.
/// Departments without employees are omitted.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or if count
/// conversion fails.
pub fn count_employees_by_department(
    conn: &mut SqliteConnection,
) -> Result<Vec<(String, usize)>, PersistenceError> {
    let rows = employees::table
        .inner_join(departments::table)
        .group_by(departments::name)
        .order(departments::name.asc())
        .select((departments::name, diesel::dsl::count(employees::id)))
        .load::<(String, i64)>(conn)?;

    let mut result: Vec<(String, usize)> = Vec::new();
    for (name, count_i64) in rows {
        result.push((name, to_count(count_i64)?));
    }

    Ok(result)
}

/// Retrieves the most recently touched employees, newest first.
///
/// An employee's `updated_at` is never earlier than its `created_at`, so
/// ordering by `updated_at` orders by the later of the two.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored row is
/// malformed.
pub fn recently_touched_employees(
    conn: &mut SqliteConnection,
    limit: i64,
) -> Result<Vec<Employee>, PersistenceError> {
    let rows: Vec<(EmployeeRow, Option<DepartmentRow>)> = employees::table
        .left_join(departments::table)
        .order((employees::updated_at.desc(), employees::id.desc()))
        .limit(limit)
        .select((EmployeeRow::as_select(), Option::<DepartmentRow>::as_select()))
        .load(conn)?;

    rows.into_iter()
        .map(|(employee, department)| employee.into_employee(department))
        .collect()
}
