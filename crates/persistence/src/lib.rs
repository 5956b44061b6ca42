// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the personnel directory.
//!
//! Employees and departments are stored in `SQLite` through Diesel. The
//! schema is embedded as migrations and applied when a store is opened.
//!
//! ## Integrity
//!
//! - Unique indexes on `employees.email`, `employees.employee_id`, and
//!   `departments.name` are the authoritative uniqueness guard. Callers
//!   pre-check for friendlier messages, but a write that races past the
//!   pre-check fails with `PersistenceError::UniqueViolation`.
//! - `employees.department_id` is a foreign key with `ON DELETE RESTRICT`.
//!   Foreign key enforcement is verified when a store is opened.
//!
//! ## Testing
//!
//! `Persistence::new_in_memory()` gives every caller an isolated
//! shared-cache in-memory database.

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

use diesel::SqliteConnection;
use personnel::{ListingPlan, Page};
use personnel_domain::{Department, Employee, NewDepartment, NewEmployee};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

use backend::PersistenceBackend;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the employee directory.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via an atomic counter,
    /// so concurrent tests never share state.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_personnel_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// The file is created if it does not exist and WAL mode is enabled.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_foreign_key_enforcement()
    }

    // ========================================================================
    // Departments
    // ========================================================================

    /// Creates a department and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` if the name is taken, or
    /// another error if the write fails.
    pub fn create_department(
        &mut self,
        department: &NewDepartment,
        now: OffsetDateTime,
    ) -> Result<Department, PersistenceError> {
        let id: i64 = mutations::departments::create_department(&mut self.conn, department, now)?;
        queries::departments::get_department(&mut self.conn, id)?
            .ok_or_else(|| PersistenceError::NotFound(format!("Department {id}")))
    }

    /// Retrieves a department by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` if absent.
    pub fn get_department(&mut self, id: i64) -> Result<Option<Department>, PersistenceError> {
        queries::departments::get_department(&mut self.conn, id)
    }

    /// Lists every department ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_departments(&mut self) -> Result<Vec<Department>, PersistenceError> {
        queries::departments::list_departments(&mut self.conn)
    }

    /// Replaces a department's writable fields and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` if the name is taken, or
    /// another error if the write fails. Returns `Ok(None)` if absent.
    pub fn update_department(
        &mut self,
        id: i64,
        department: &NewDepartment,
        now: OffsetDateTime,
    ) -> Result<Option<Department>, PersistenceError> {
        if !mutations::departments::update_department(&mut self.conn, id, department, now)? {
            return Ok(None);
        }
        queries::departments::get_department(&mut self.conn, id)
    }

    /// Deletes a department.
    ///
    /// Returns `Ok(false)` if no department has this ID.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ForeignKeyViolation` if employees still
    /// reference it, or another error if the delete fails.
    pub fn delete_department(&mut self, id: i64) -> Result<bool, PersistenceError> {
        mutations::departments::delete_department(&mut self.conn, id)
    }

    /// Checks whether a department exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn department_exists(&mut self, id: i64) -> Result<bool, PersistenceError> {
        queries::departments::department_exists(&mut self.conn, id)
    }

    /// Checks whether a department name is held by a department other than
    /// `exclude_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn department_name_taken(
        &mut self,
        name: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, PersistenceError> {
        queries::departments::department_name_taken(&mut self.conn, name, exclude_id)
    }

    /// Counts the employees referencing a department.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_employees_in_department(&mut self, id: i64) -> Result<i64, PersistenceError> {
        queries::departments::count_employees_in_department(&mut self.conn, id)
    }

    /// Counts all departments.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_departments(&mut self) -> Result<i64, PersistenceError> {
        queries::departments::count_departments(&mut self.conn)
    }

    // ========================================================================
    // Employees
    // ========================================================================

    /// Creates an employee and returns the stored record with its department
    /// joined.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` or
    /// `PersistenceError::ForeignKeyViolation` if a constraint rejects the
    /// write, or another error if the write fails.
    pub fn create_employee(
        &mut self,
        employee: &NewEmployee,
        now: OffsetDateTime,
    ) -> Result<Employee, PersistenceError> {
        let id: i64 = mutations::employees::create_employee(&mut self.conn, employee, now)?;
        queries::employees::get_employee(&mut self.conn, id)?
            .ok_or_else(|| PersistenceError::NotFound(format!("Employee {id}")))
    }

    /// Retrieves an employee by ID with its department joined.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` if absent.
    pub fn get_employee(&mut self, id: i64) -> Result<Option<Employee>, PersistenceError> {
        queries::employees::get_employee(&mut self.conn, id)
    }

    /// Replaces an employee's writable fields and returns the stored record
    /// with its department joined.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` or
    /// `PersistenceError::ForeignKeyViolation` if a constraint rejects the
    /// write, or another error if the write fails. Returns `Ok(None)` if
    /// absent.
    pub fn update_employee(
        &mut self,
        id: i64,
        employee: &NewEmployee,
        now: OffsetDateTime,
    ) -> Result<Option<Employee>, PersistenceError> {
        if !mutations::employees::update_employee(&mut self.conn, id, employee, now)? {
            return Ok(None);
        }
        queries::employees::get_employee(&mut self.conn, id)
    }

    /// Deletes an employee.
    ///
    /// Returns `Ok(false)` if no employee has this ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_employee(&mut self, id: i64) -> Result<bool, PersistenceError> {
        mutations::employees::delete_employee(&mut self.conn, id)
    }

    /// Deletes every employee and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn purge_employees(&mut self) -> Result<usize, PersistenceError> {
        mutations::employees::purge_employees(&mut self.conn)
    }

    /// Checks whether an email address is held by an employee other than
    /// `exclude_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn email_taken(
        &mut self,
        email: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, PersistenceError> {
        queries::employees::email_taken(&mut self.conn, email, exclude_id)
    }

    /// Checks whether an employee number is held by an employee other than
    /// `exclude_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn employee_id_taken(
        &mut self,
        employee_id: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, PersistenceError> {
        queries::employees::employee_id_taken(&mut self.conn, employee_id, exclude_id)
    }

    /// Executes an employee listing plan.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_employees(&mut self, plan: &ListingPlan) -> Result<Page<Employee>, PersistenceError> {
        queries::listing::list_employees(&mut self.conn, plan)
    }

    // ========================================================================
    // Dashboard
    // ========================================================================

    /// Counts all employees.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_employees(&mut self) -> Result<usize, PersistenceError> {
        queries::dashboard::count_employees(&mut self.conn)
    }

    /// Counts employees created at or after `since`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_employees_created_since(
        &mut self,
        since: OffsetDateTime,
    ) -> Result<usize, PersistenceError> {
        queries::dashboard::count_employees_created_since(&mut self.conn, since)
    }

    /// Counts employees per department name, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_employees_by_department(
        &mut self,
    ) -> Result<Vec<(String, usize)>, PersistenceError> {
        queries::dashboard::count_employees_by_department(&mut self.conn)
    }

    /// Retrieves up to `limit` employees ordered by most recent write.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn recently_touched_employees(
        &mut self,
        limit: i64,
    ) -> Result<Vec<Employee>, PersistenceError> {
        queries::dashboard::recently_touched_employees(&mut self.conn, limit)
    }
}
