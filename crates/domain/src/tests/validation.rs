// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_department_fields, create_test_employee_fields};
use crate::{
    DepartmentFields, DomainError, EmployeeFields, EmploymentType, NewDepartment, NewEmployee,
    validate_department_fields, validate_employee_fields,
};

#[test]
fn test_validate_employee_fields_accepts_complete_record() {
    let fields: EmployeeFields = create_test_employee_fields();
    let employee: NewEmployee = validate_employee_fields(&fields).unwrap();

    assert_eq!(employee.name, "Ailsa Reid");
    assert_eq!(employee.employment_type, EmploymentType::FullTime);
    assert_eq!(employee.department_id, 1);
    assert_eq!(employee.salary, Some(52_000.0));
    assert_eq!(employee.address.line2.as_deref(), Some("Flat 3"));
    assert_eq!(employee.emergency_contact.relationship, "Sister");
}

#[test]
fn test_validate_employee_fields_trims_text() {
    let mut fields: EmployeeFields = create_test_employee_fields();
    fields.name = Some(String::from("  Ailsa Reid  "));

    let employee: NewEmployee = validate_employee_fields(&fields).unwrap();
    assert_eq!(employee.name, "Ailsa Reid");
}

#[test]
fn test_validate_employee_fields_reports_every_missing_field() {
    let err: DomainError = validate_employee_fields(&EmployeeFields::default()).unwrap_err();
    let messages: Vec<String> = err.messages();

    for expected in [
        "name is required",
        "email is required",
        "phone is required",
        "dob is required",
        "department is required",
        "role is required",
        "employmentType is required",
        "hireDate is required",
        "employeeId is required",
        "address is required",
        "emergencyContact is required",
    ] {
        assert!(
            messages.iter().any(|m| m == expected),
            "missing `{expected}` in {messages:?}"
        );
    }
    assert!(!messages.iter().any(|m| m.starts_with("salary")));
}

#[test]
fn test_validate_employee_fields_treats_blank_as_missing() {
    let mut fields: EmployeeFields = create_test_employee_fields();
    fields.role = Some(String::from("   "));

    let err: DomainError = validate_employee_fields(&fields).unwrap_err();
    assert_eq!(err.to_string(), "role is required");
}

#[test]
fn test_validate_employee_fields_rejects_unknown_employment_type() {
    let mut fields: EmployeeFields = create_test_employee_fields();
    fields.employment_type = Some(String::from("seasonal"));

    let err: DomainError = validate_employee_fields(&fields).unwrap_err();
    assert!(err.to_string().contains("`seasonal` is not a valid employmentType"));
}

#[test]
fn test_validate_employee_fields_rejects_negative_salary() {
    let mut fields: EmployeeFields = create_test_employee_fields();
    fields.salary = Some(-1.0);

    let err: DomainError = validate_employee_fields(&fields).unwrap_err();
    assert_eq!(err.messages(), vec![String::from("salary must not be negative")]);
}

#[test]
fn test_validate_employee_fields_allows_zero_and_absent_salary() {
    let mut fields: EmployeeFields = create_test_employee_fields();
    fields.salary = Some(0.0);
    assert!(validate_employee_fields(&fields).is_ok());

    fields.salary = None;
    let employee: NewEmployee = validate_employee_fields(&fields).unwrap();
    assert_eq!(employee.salary, None);
}

#[test]
fn test_validate_employee_fields_rejects_malformed_dates() {
    let mut fields: EmployeeFields = create_test_employee_fields();
    fields.dob = Some(String::from("12/04/1990"));
    fields.hire_date = Some(String::from("2021-13-01"));

    let err: DomainError = validate_employee_fields(&fields).unwrap_err();
    assert_eq!(
        err.to_string(),
        "dob must be a date in YYYY-MM-DD format, hireDate must be a date in YYYY-MM-DD format"
    );
}

#[test]
fn test_validate_employee_fields_uses_dotted_paths_for_embedded_records() {
    let mut fields: EmployeeFields = create_test_employee_fields();
    if let Some(address) = fields.address.as_mut() {
        address.city = None;
    }
    if let Some(contact) = fields.emergency_contact.as_mut() {
        contact.relationship = Some(String::new());
    }

    let err: DomainError = validate_employee_fields(&fields).unwrap_err();
    assert_eq!(
        err.messages(),
        vec![
            String::from("address.city is required"),
            String::from("emergencyContact.relationship is required")
        ]
    );
}

#[test]
fn test_validate_employee_fields_drops_blank_line2() {
    let mut fields: EmployeeFields = create_test_employee_fields();
    if let Some(address) = fields.address.as_mut() {
        address.line2 = Some(String::from("  "));
    }

    let employee: NewEmployee = validate_employee_fields(&fields).unwrap();
    assert_eq!(employee.address.line2, None);
}

#[test]
fn test_validate_department_fields() {
    let department: NewDepartment =
        validate_department_fields(&create_test_department_fields()).unwrap();
    assert_eq!(department.name, "Engineering");
    assert_eq!(department.description.as_deref(), Some("Builds the product"));

    let err: DomainError = validate_department_fields(&DepartmentFields::default()).unwrap_err();
    assert_eq!(err.to_string(), "name is required");
}
