// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    create_test_persistence, department_request, seed_department, seed_employee, test_now,
};
use crate::{
    ApiError, DeleteResponse, DepartmentRequest, DepartmentResponse, Resource, create_department,
    delete_department, delete_employee, get_department, list_departments, update_department,
};
use personnel_persistence::Persistence;
use time::Duration;

#[test]
fn test_create_department() {
    let mut persistence: Persistence = create_test_persistence();

    let created: DepartmentResponse =
        create_department(&mut persistence, department_request("Finance"), test_now()).unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, "Finance");
    assert_eq!(created.description.as_deref(), Some("The Finance team"));
    assert_eq!(created.created_at, test_now());
}

#[test]
fn test_create_department_requires_name() {
    let mut persistence: Persistence = create_test_persistence();
    let request: DepartmentRequest = DepartmentRequest {
        name: Some(String::from("   ")),
        description: None,
    };

    let err: ApiError = create_department(&mut persistence, request, test_now()).unwrap_err();
    assert_eq!(err, ApiError::invalid("name is required"));
}

#[test]
fn test_duplicate_department_name_is_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    seed_department(&mut persistence, "Finance");

    let err: ApiError =
        create_department(&mut persistence, department_request("Finance"), test_now())
            .unwrap_err();
    assert_eq!(err.to_string(), "Department already exists");
}

#[test]
fn test_list_departments_sorted_by_name() {
    let mut persistence: Persistence = create_test_persistence();
    for name in ["Sales", "Engineering", "Legal"] {
        seed_department(&mut persistence, name);
    }

    let names: Vec<String> = list_departments(&mut persistence)
        .unwrap()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, vec!["Engineering", "Legal", "Sales"]);
}

#[test]
fn test_get_department() {
    let mut persistence: Persistence = create_test_persistence();
    let created: DepartmentResponse = seed_department(&mut persistence, "Finance");

    assert_eq!(
        get_department(&mut persistence, &created.id.to_string()),
        Ok(created)
    );
    assert_eq!(
        get_department(&mut persistence, "99"),
        Err(ApiError::NotFound {
            resource: Resource::Department
        })
    );
    let err: ApiError = get_department(&mut persistence, "finance").unwrap_err();
    assert_eq!(err.to_string(), "Invalid department ID");
}

#[test]
fn test_update_department_clears_description() {
    let mut persistence: Persistence = create_test_persistence();
    let created: DepartmentResponse = seed_department(&mut persistence, "Finance");

    let request: DepartmentRequest = DepartmentRequest {
        name: None,
        description: Some(None),
    };
    let later = test_now() + Duration::minutes(5);
    let updated: DepartmentResponse =
        update_department(&mut persistence, &created.id.to_string(), request, later).unwrap();

    assert_eq!(updated.name, "Finance");
    assert_eq!(updated.description, None);
    assert_eq!(updated.updated_at, later);
}

#[test]
fn test_update_department_name_uniqueness() {
    let mut persistence: Persistence = create_test_persistence();
    let finance: DepartmentResponse = seed_department(&mut persistence, "Finance");
    seed_department(&mut persistence, "Legal");

    let rename_to_self: DepartmentRequest = DepartmentRequest {
        name: Some(String::from("Finance")),
        description: None,
    };
    assert!(
        update_department(
            &mut persistence,
            &finance.id.to_string(),
            rename_to_self,
            test_now()
        )
        .is_ok()
    );

    let rename_to_taken: DepartmentRequest = DepartmentRequest {
        name: Some(String::from("Legal")),
        description: None,
    };
    let err: ApiError = update_department(
        &mut persistence,
        &finance.id.to_string(),
        rename_to_taken,
        test_now(),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Department name already exists");
}

#[test]
fn test_delete_department_with_employees_is_blocked() {
    let mut persistence: Persistence = create_test_persistence();
    let department: DepartmentResponse = seed_department(&mut persistence, "Finance");
    let first = seed_employee(&mut persistence, department.id, "Ailsa Reid", "EMP-1");
    let second = seed_employee(&mut persistence, department.id, "Ewan Reid", "EMP-2");
    let raw_id: String = department.id.to_string();

    let err: ApiError = delete_department(&mut persistence, &raw_id).unwrap_err();
    assert_eq!(err, ApiError::DependentRecords { count: 2 });
    assert_eq!(
        err.to_string(),
        "Cannot delete department with 2 employee(s) assigned"
    );

    delete_employee(&mut persistence, &first.id.to_string()).unwrap();
    delete_employee(&mut persistence, &second.id.to_string()).unwrap();

    let response: DeleteResponse = delete_department(&mut persistence, &raw_id).unwrap();
    assert!(response.success);
    assert_eq!(response.message, "Department deleted successfully");
}

#[test]
fn test_delete_unknown_department() {
    let mut persistence: Persistence = create_test_persistence();

    assert_eq!(
        delete_department(&mut persistence, "5"),
        Err(ApiError::NotFound {
            resource: Resource::Department
        })
    );
}
