// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Department mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use personnel_domain::NewDepartment;
use time::OffsetDateTime;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::{DepartmentChanges, NewDepartmentRow, format_timestamp};
use crate::diesel_schema::departments;
use crate::error::PersistenceError;

/// Inserts a department.
///
/// # Returns
///
/// The ID assigned to the new department.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the name is taken, or
/// another error if the insert fails.
pub fn create_department(
    conn: &mut SqliteConnection,
    department: &NewDepartment,
    now: OffsetDateTime,
) -> Result<i64, PersistenceError> {
    let timestamp: String = format_timestamp(now)?;
    let row: NewDepartmentRow<'_> = NewDepartmentRow {
        changes: DepartmentChanges::new(department, timestamp.clone()),
        created_at: timestamp,
    };

    diesel::insert_into(departments::table)
        .values(&row)
        .execute(conn)?;

    let department_id: i64 = conn.get_last_insert_rowid()?;
    info!(department_id, name = %department.name, "Created department");
    Ok(department_id)
}

/// Replaces the writable columns of a department.
///
/// # Returns
///
/// `true` if a department was updated, `false` if none has this ID.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the name is taken, or
/// another error if the update fails.
pub fn update_department(
    conn: &mut SqliteConnection,
    department_id: i64,
    department: &NewDepartment,
    now: OffsetDateTime,
) -> Result<bool, PersistenceError> {
    let changes: DepartmentChanges<'_> = DepartmentChanges::new(department, format_timestamp(now)?);

    let updated: usize = diesel::update(departments::table.filter(departments::id.eq(department_id)))
        .set(&changes)
        .execute(conn)?;

    info!(department_id, updated, "Updated department");
    Ok(updated > 0)
}

/// Deletes a department.
///
/// # Returns
///
/// `true` if a department was deleted, `false` if none has this ID.
///
/// # Errors
///
/// Returns `PersistenceError::ForeignKeyViolation` if employees still
/// reference the department, or another error if the delete fails.
pub fn delete_department(
    conn: &mut SqliteConnection,
    department_id: i64,
) -> Result<bool, PersistenceError> {
    let deleted: usize =
        diesel::delete(departments::table.filter(departments::id.eq(department_id)))
            .execute(conn)?;

    info!(department_id, deleted, "Deleted department");
    Ok(deleted > 0)
}
