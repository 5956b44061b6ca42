// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types and conversions between stored rows and domain records.
//!
//! Dates are stored as `YYYY-MM-DD` text and timestamps as fixed-width
//! UTC text, so both order correctly under plain string comparison.

use diesel::prelude::*;
use personnel_domain::{
    Address, Department, EmergencyContact, Employee, EmploymentType, NewDepartment, NewEmployee,
    format_date, parse_date,
};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::diesel_schema::{departments, employees};
use crate::error::PersistenceError;

/// Storage format for timestamps (always UTC, microsecond precision).
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]Z"
);

/// Formats a timestamp for storage.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted.
pub fn format_timestamp(timestamp: OffsetDateTime) -> Result<String, PersistenceError> {
    let utc: OffsetDateTime = timestamp.to_offset(UtcOffset::UTC);
    PrimitiveDateTime::new(utc.date(), utc.time())
        .format(TIMESTAMP_FORMAT)
        .map_err(|e| PersistenceError::CorruptRecord(format!("Failed to format timestamp: {e}")))
}

/// Parses a stored timestamp.
///
/// # Errors
///
/// Returns an error if the stored text is not a valid timestamp.
pub fn parse_timestamp(value: &str) -> Result<OffsetDateTime, PersistenceError> {
    PrimitiveDateTime::parse(value, TIMESTAMP_FORMAT)
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|e| PersistenceError::CorruptRecord(format!("Invalid timestamp '{value}': {e}")))
}

fn parse_stored_date(value: &str) -> Result<Date, PersistenceError> {
    parse_date(value).map_err(|e| PersistenceError::CorruptRecord(e.to_string()))
}

/// Diesel Queryable struct for department rows.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = departments)]
pub struct DepartmentRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl DepartmentRow {
    /// Converts the row into a domain department.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored timestamp is malformed.
    pub fn into_department(self) -> Result<Department, PersistenceError> {
        Ok(Department {
            id: self.id,
            name: self.name,
            description: self.description,
            created_at: parse_timestamp(&self.created_at)?,
            updated_at: parse_timestamp(&self.updated_at)?,
        })
    }
}

/// Diesel Queryable struct for employee rows.
///
/// The embedded address and emergency contact are flattened into
/// prefixed columns.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = employees)]
pub struct EmployeeRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub dob: String,
    pub department_id: i64,
    pub role: String,
    pub employment_type: String,
    pub hire_date: String,
    pub salary: Option<f64>,
    pub employee_id: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub address_city: String,
    pub address_state: String,
    pub address_zip: String,
    pub address_country: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub emergency_contact_relationship: String,
    pub created_at: String,
    pub updated_at: String,
}

impl EmployeeRow {
    /// Converts the row and its joined department into a domain employee.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored date, timestamp, or employment type is
    /// malformed.
    pub fn into_employee(
        self,
        department: Option<DepartmentRow>,
    ) -> Result<Employee, PersistenceError> {
        let employment_type: EmploymentType = self
            .employment_type
            .parse()
            .map_err(|e: personnel_domain::DomainError| {
                PersistenceError::CorruptRecord(e.to_string())
            })?;

        Ok(Employee {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            dob: parse_stored_date(&self.dob)?,
            department_id: self.department_id,
            department: department.map(DepartmentRow::into_department).transpose()?,
            role: self.role,
            employment_type,
            hire_date: parse_stored_date(&self.hire_date)?,
            salary: self.salary,
            employee_id: self.employee_id,
            address: Address {
                line1: self.address_line1,
                line2: self.address_line2,
                city: self.address_city,
                state: self.address_state,
                zip: self.address_zip,
                country: self.address_country,
            },
            emergency_contact: EmergencyContact {
                name: self.emergency_contact_name,
                phone: self.emergency_contact_phone,
                relationship: self.emergency_contact_relationship,
            },
            created_at: parse_timestamp(&self.created_at)?,
            updated_at: parse_timestamp(&self.updated_at)?,
        })
    }
}

/// The writable columns of an employee row.
///
/// `None` values are written as `NULL` so that updates can clear optional
/// fields.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = employees)]
#[diesel(treat_none_as_null = true)]
pub struct EmployeeChanges<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub dob: String,
    pub department_id: i64,
    pub role: &'a str,
    pub employment_type: &'static str,
    pub hire_date: String,
    pub salary: Option<f64>,
    pub employee_id: &'a str,
    pub address_line1: &'a str,
    pub address_line2: Option<&'a str>,
    pub address_city: &'a str,
    pub address_state: &'a str,
    pub address_zip: &'a str,
    pub address_country: &'a str,
    pub emergency_contact_name: &'a str,
    pub emergency_contact_phone: &'a str,
    pub emergency_contact_relationship: &'a str,
    pub updated_at: String,
}

impl<'a> EmployeeChanges<'a> {
    /// Builds the column values for a validated employee.
    #[must_use]
    pub fn new(employee: &'a NewEmployee, updated_at: String) -> Self {
        Self {
            name: &employee.name,
            email: &employee.email,
            phone: &employee.phone,
            dob: format_date(employee.dob),
            department_id: employee.department_id,
            role: &employee.role,
            employment_type: employee.employment_type.as_str(),
            hire_date: format_date(employee.hire_date),
            salary: employee.salary,
            employee_id: &employee.employee_id,
            address_line1: &employee.address.line1,
            address_line2: employee.address.line2.as_deref(),
            address_city: &employee.address.city,
            address_state: &employee.address.state,
            address_zip: &employee.address.zip,
            address_country: &employee.address.country,
            emergency_contact_name: &employee.emergency_contact.name,
            emergency_contact_phone: &employee.emergency_contact.phone,
            emergency_contact_relationship: &employee.emergency_contact.relationship,
            updated_at,
        }
    }
}

/// The writable columns of a department row.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = departments)]
#[diesel(treat_none_as_null = true)]
pub struct DepartmentChanges<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub updated_at: String,
}

impl<'a> DepartmentChanges<'a> {
    /// Builds the column values for a validated department.
    #[must_use]
    pub fn new(department: &'a NewDepartment, updated_at: String) -> Self {
        Self {
            name: &department.name,
            description: department.description.as_deref(),
            updated_at,
        }
    }
}

/// An employee row to insert: the writable columns plus the creation time.
#[derive(Debug, Insertable)]
#[diesel(table_name = employees)]
pub struct NewEmployeeRow<'a> {
    #[diesel(embed)]
    pub changes: EmployeeChanges<'a>,
    pub created_at: String,
}

/// A department row to insert: the writable columns plus the creation time.
#[derive(Debug, Insertable)]
#[diesel(table_name = departments)]
pub struct NewDepartmentRow<'a> {
    #[diesel(embed)]
    pub changes: DepartmentChanges<'a>,
    pub created_at: String,
}
