// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AddressFields, DepartmentFields, EmergencyContactFields, EmployeeFields};

pub fn create_test_address_fields() -> AddressFields {
    AddressFields {
        line1: Some(String::from("12 Harbour Road")),
        line2: Some(String::from("Flat 3")),
        city: Some(String::from("Leith")),
        state: Some(String::from("Edinburgh")),
        zip: Some(String::from("EH6 6QQ")),
        country: Some(String::from("UK")),
    }
}

pub fn create_test_emergency_contact_fields() -> EmergencyContactFields {
    EmergencyContactFields {
        name: Some(String::from("Morag Reid")),
        phone: Some(String::from("+44 7700 900123")),
        relationship: Some(String::from("Sister")),
    }
}

pub fn create_test_employee_fields() -> EmployeeFields {
    EmployeeFields {
        name: Some(String::from("Ailsa Reid")),
        email: Some(String::from("ailsa@example.com")),
        phone: Some(String::from("+44 7700 900456")),
        dob: Some(String::from("1990-04-12")),
        department_id: Some(1),
        role: Some(String::from("Software Engineer")),
        employment_type: Some(String::from("full-time")),
        hire_date: Some(String::from("2021-09-01")),
        salary: Some(52_000.0),
        employee_id: Some(String::from("EMP-0001")),
        address: Some(create_test_address_fields()),
        emergency_contact: Some(create_test_emergency_contact_fields()),
    }
}

pub fn create_test_department_fields() -> DepartmentFields {
    DepartmentFields {
        name: Some(String::from("Engineering")),
        description: Some(String::from("Builds the product")),
    }
}
