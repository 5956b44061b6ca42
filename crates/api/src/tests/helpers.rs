// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DepartmentRef, DepartmentRequest, DepartmentResponse, EmployeeRequest, EmployeeResponse,
    create_department, create_employee,
};
use personnel_domain::{AddressFields, EmergencyContactFields};
use personnel_persistence::Persistence;
use time::macros::{date, datetime};
use time::{Date, OffsetDateTime};

pub fn test_now() -> OffsetDateTime {
    datetime!(2026-10-17 09:30:00 UTC)
}

pub fn today() -> Date {
    date!(2026-10-17)
}

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn department_request(name: &str) -> DepartmentRequest {
    DepartmentRequest {
        name: Some(String::from(name)),
        description: Some(Some(format!("The {name} team"))),
    }
}

pub fn seed_department(persistence: &mut Persistence, name: &str) -> DepartmentResponse {
    create_department(persistence, department_request(name), test_now()).unwrap()
}

/// Builds a complete, valid employee request.
///
/// The email is derived from the name so distinct names never collide.
pub fn employee_request(department_id: i64, name: &str, employee_id: &str) -> EmployeeRequest {
    EmployeeRequest {
        name: Some(String::from(name)),
        email: Some(format!(
            "{}@example.com",
            name.to_lowercase().replace(' ', ".")
        )),
        phone: Some(String::from("+44 20 7946 0000")),
        dob: Some(String::from("1991-04-12")),
        department: Some(DepartmentRef::Id(department_id)),
        role: Some(String::from("Analyst")),
        employment_type: Some(String::from("full-time")),
        hire_date: Some(String::from("2021-09-01")),
        salary: Some(Some(51_000.0)),
        employee_id: Some(String::from(employee_id)),
        address: Some(AddressFields {
            line1: Some(String::from("12 Harbour Row")),
            line2: Some(String::from("Unit 2")),
            city: Some(String::from("Leith")),
            state: Some(String::from("Edinburgh")),
            zip: Some(String::from("EH6 6LS")),
            country: Some(String::from("UK")),
        }),
        emergency_contact: Some(EmergencyContactFields {
            name: Some(String::from("Morag Reid")),
            phone: Some(String::from("+44 20 7946 0999")),
            relationship: Some(String::from("Sister")),
        }),
    }
}

pub fn seed_employee(
    persistence: &mut Persistence,
    department_id: i64,
    name: &str,
    employee_id: &str,
) -> EmployeeResponse {
    create_employee(
        persistence,
        employee_request(department_id, name, employee_id),
        test_now(),
    )
    .unwrap()
}
