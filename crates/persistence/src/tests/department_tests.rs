// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{
    create_test_persistence, insert_department, new_department, new_employee, test_now,
};
use crate::{Persistence, PersistenceError};
use personnel_domain::{Department, NewDepartment};
use time::Duration;

#[test]
fn test_create_and_get_department() {
    let mut persistence: Persistence = create_test_persistence();
    let created: Department = insert_department(&mut persistence, "Engineering");

    assert!(created.id > 0);
    assert_eq!(created.name, "Engineering");
    assert_eq!(created.description.as_deref(), Some("The Engineering department"));
    assert_eq!(created.created_at, test_now());
    assert_eq!(created.updated_at, test_now());

    let fetched: Option<Department> = persistence.get_department(created.id).unwrap();
    assert_eq!(fetched, Some(created));
}

#[test]
fn test_get_missing_department_returns_none() {
    let mut persistence: Persistence = create_test_persistence();
    assert_eq!(persistence.get_department(42).unwrap(), None);
}

#[test]
fn test_list_departments_sorted_by_name() {
    let mut persistence: Persistence = create_test_persistence();
    insert_department(&mut persistence, "Sales");
    insert_department(&mut persistence, "Engineering");
    insert_department(&mut persistence, "Marketing");

    let names: Vec<String> = persistence
        .list_departments()
        .unwrap()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, vec!["Engineering", "Marketing", "Sales"]);
}

#[test]
fn test_duplicate_department_name_is_unique_violation() {
    let mut persistence: Persistence = create_test_persistence();
    insert_department(&mut persistence, "Engineering");

    let result: Result<Department, PersistenceError> =
        persistence.create_department(&new_department("Engineering"), test_now());
    assert_eq!(
        result,
        Err(PersistenceError::UniqueViolation {
            field: String::from("name")
        })
    );
}

#[test]
fn test_department_name_taken_excludes_self() {
    let mut persistence: Persistence = create_test_persistence();
    let engineering: Department = insert_department(&mut persistence, "Engineering");
    let sales: Department = insert_department(&mut persistence, "Sales");

    assert!(persistence.department_name_taken("Engineering", None).unwrap());
    assert!(
        !persistence
            .department_name_taken("Engineering", Some(engineering.id))
            .unwrap()
    );
    assert!(
        persistence
            .department_name_taken("Engineering", Some(sales.id))
            .unwrap()
    );
    assert!(!persistence.department_name_taken("Legal", None).unwrap());
}

#[test]
fn test_update_department_clears_description_and_bumps_updated_at() {
    let mut persistence: Persistence = create_test_persistence();
    let created: Department = insert_department(&mut persistence, "Engineering");
    let later = test_now() + Duration::hours(1);

    let changes: NewDepartment = NewDepartment {
        name: String::from("Platform"),
        description: None,
    };
    let updated: Department = persistence
        .update_department(created.id, &changes, later)
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Platform");
    assert_eq!(updated.description, None);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.updated_at, later);
}

#[test]
fn test_update_missing_department_returns_none() {
    let mut persistence: Persistence = create_test_persistence();
    let result: Option<Department> = persistence
        .update_department(7, &new_department("Legal"), test_now())
        .unwrap();
    assert_eq!(result, None);
}

#[test]
fn test_delete_department() {
    let mut persistence: Persistence = create_test_persistence();
    let created: Department = insert_department(&mut persistence, "Engineering");

    assert!(persistence.delete_department(created.id).unwrap());
    assert!(!persistence.delete_department(created.id).unwrap());
    assert!(!persistence.department_exists(created.id).unwrap());
}

#[test]
fn test_delete_referenced_department_is_foreign_key_violation() {
    let mut persistence: Persistence = create_test_persistence();
    let department: Department = insert_department(&mut persistence, "Engineering");
    persistence
        .create_employee(&new_employee(department.id, "Ada Park", "E-1"), test_now())
        .unwrap();

    assert_eq!(
        persistence
            .count_employees_in_department(department.id)
            .unwrap(),
        1
    );
    assert!(matches!(
        persistence.delete_department(department.id),
        Err(PersistenceError::ForeignKeyViolation(_))
    ));
    assert!(persistence.department_exists(department.id).unwrap());
}
