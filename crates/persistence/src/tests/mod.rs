// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod department_tests;

use crate::Persistence;
use personnel_domain::{
    Address, Department, EmergencyContact, EmploymentType, NewDepartment, NewEmployee, parse_date,
};
use time::OffsetDateTime;
use time::macros::datetime;

pub fn test_now() -> OffsetDateTime {
    datetime!(2026-10-17 09:30:00 UTC)
}

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

pub fn new_department(name: &str) -> NewDepartment {
    NewDepartment {
        name: String::from(name),
        description: Some(format!("The {name} department")),
    }
}

pub fn insert_department(persistence: &mut Persistence, name: &str) -> Department {
    persistence
        .create_department(&new_department(name), test_now())
        .unwrap()
}

pub fn new_employee(department_id: i64, name: &str, employee_id: &str) -> NewEmployee {
    let email_local: String = name.to_lowercase().replace(' ', ".");
    NewEmployee {
        name: String::from(name),
        email: format!("{email_local}@example.com"),
        phone: String::from("+1 555 0100"),
        dob: parse_date("1990-06-15").unwrap(),
        department_id,
        role: String::from("Analyst"),
        employment_type: EmploymentType::FullTime,
        hire_date: parse_date("2020-01-06").unwrap(),
        salary: Some(48_000.0),
        employee_id: String::from(employee_id),
        address: Address {
            line1: String::from("1 Main St"),
            line2: None,
            city: String::from("Springfield"),
            state: String::from("IL"),
            zip: String::from("62701"),
            country: String::from("US"),
        },
        emergency_contact: EmergencyContact {
            name: String::from("Pat Doe"),
            phone: String::from("+1 555 0199"),
            relationship: String::from("Partner"),
        },
    }
}
