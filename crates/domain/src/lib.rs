// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and schema validation for the personnel directory.
//!
//! Records enter the system as loosely-typed field sets (`EmployeeFields`,
//! `DepartmentFields`) and leave validation as fully-typed write models
//! (`NewEmployee`, `NewDepartment`). Stored records (`Employee`,
//! `Department`) carry store-assigned identifiers and timestamps.

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

mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::{DomainError, FieldViolation};
pub use types::{
    Address, AddressFields, DATE_FORMAT, Department, DepartmentFields, DepartmentPatch,
    EmergencyContact, EmergencyContactFields, Employee, EmployeeFields, EmployeePatch,
    EmploymentType, NewDepartment, NewEmployee, format_date, parse_date,
};
pub use validation::{validate_department_fields, validate_employee_fields};
