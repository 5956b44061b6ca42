// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{SortDirection, SortField};

#[test]
fn test_sort_field_defaults_to_created_at() {
    assert_eq!(SortField::resolve(None), SortField::CreatedAt);
    assert_eq!(SortField::resolve(Some("address.city")), SortField::CreatedAt);
    assert_eq!(SortField::resolve(Some("Name")), SortField::CreatedAt);
}

#[test]
fn test_department_sort_targets_department_name() {
    assert_eq!(
        SortField::resolve(Some("department")),
        SortField::DepartmentName
    );
}

#[test]
fn test_sort_keys_round_trip() {
    for key in [
        "name",
        "email",
        "phone",
        "dob",
        "role",
        "employmentType",
        "hireDate",
        "salary",
        "employeeId",
        "createdAt",
        "updatedAt",
        "_id",
        "department",
    ] {
        let field: SortField = SortField::from_key(key).unwrap();
        assert_eq!(field.as_key(), key);
    }
}

#[test]
fn test_sort_direction_is_ascending_only_for_asc() {
    assert_eq!(SortDirection::resolve(Some("asc")), SortDirection::Ascending);
    assert_eq!(SortDirection::resolve(Some("desc")), SortDirection::Descending);
    assert_eq!(SortDirection::resolve(Some("ASC")), SortDirection::Descending);
    assert_eq!(SortDirection::resolve(Some("1")), SortDirection::Descending);
    assert_eq!(SortDirection::resolve(None), SortDirection::Descending);
}
