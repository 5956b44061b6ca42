// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_persistence, seed_department, seed_employee};
use crate::{
    DepartmentRef, DepartmentRequest, EmployeeRequest, EmployeeResponse, ListEmployeesQuery,
};
use personnel_persistence::Persistence;
use serde_json::{Value, json};

#[test]
fn test_employee_response_wire_shape() {
    let mut persistence: Persistence = create_test_persistence();
    let department = seed_department(&mut persistence, "Engineering");
    let mut employee: EmployeeResponse =
        seed_employee(&mut persistence, department.id, "Ailsa Reid", "EMP-1");
    employee.salary = None;
    employee.address.line2 = None;

    let value: Value = serde_json::to_value(&employee).unwrap();

    assert_eq!(value["_id"], json!(employee.id));
    assert_eq!(value["dob"], json!("1991-04-12"));
    assert_eq!(value["hireDate"], json!("2021-09-01"));
    assert_eq!(value["employmentType"], json!("full-time"));
    assert_eq!(value["employeeId"], json!("EMP-1"));
    assert_eq!(value["emergencyContact"]["name"], json!("Morag Reid"));
    assert_eq!(value["department"]["name"], json!("Engineering"));
    assert_eq!(value["createdAt"], json!("2026-10-17T09:30:00Z"));
    assert!(value.get("salary").is_none());
    assert!(value["address"].get("line2").is_none());
}

#[test]
fn test_salary_null_is_distinct_from_absent() {
    let cleared: EmployeeRequest = serde_json::from_value(json!({ "salary": null })).unwrap();
    assert_eq!(cleared.salary, Some(None));

    let absent: EmployeeRequest = serde_json::from_value(json!({ "name": "Ailsa" })).unwrap();
    assert_eq!(absent.salary, None);

    let set: EmployeeRequest = serde_json::from_value(json!({ "salary": 42000.5 })).unwrap();
    assert_eq!(set.salary, Some(Some(42_000.5)));
}

#[test]
fn test_description_null_is_distinct_from_absent() {
    let cleared: DepartmentRequest =
        serde_json::from_value(json!({ "description": null })).unwrap();
    assert_eq!(cleared.description, Some(None));
    assert_eq!(cleared.into_patch().description, Some(None));

    let absent: DepartmentRequest = serde_json::from_value(json!({ "name": "Legal" })).unwrap();
    assert_eq!(absent.description, None);
}

#[test]
fn test_department_reference_shapes() {
    let parse = |value: Value| -> Option<DepartmentRef> {
        serde_json::from_value::<EmployeeRequest>(json!({ "department": value }))
            .unwrap()
            .department
    };

    assert_eq!(parse(json!(4)).and_then(|r| r.id()), Some(4));
    assert_eq!(parse(json!("4")).and_then(|r| r.id()), Some(4));
    assert_eq!(
        parse(json!({ "_id": 4, "name": "Engineering" })).and_then(|r| r.id()),
        Some(4)
    );
    assert_eq!(parse(json!("sales")).and_then(|r| r.id()), None);
}

#[test]
fn test_listing_query_uses_camel_case() {
    let query: ListEmployeesQuery = serde_json::from_value(json!({
        "page": "2",
        "sortField": "hireDate",
        "sortDir": "asc"
    }))
    .unwrap();

    assert_eq!(query.page.as_deref(), Some("2"));
    assert_eq!(query.sort_field.as_deref(), Some("hireDate"));
    assert_eq!(query.sort_dir.as_deref(), Some("asc"));
    assert_eq!(query.limit, None);
}
