// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, FieldViolation};

#[test]
fn test_validation_error_joins_messages() {
    let err: DomainError = DomainError::Validation(vec![
        FieldViolation::required("name"),
        FieldViolation::required("address.city"),
    ]);

    assert_eq!(format!("{err}"), "name is required, address.city is required");
    assert_eq!(
        err.messages(),
        vec![
            String::from("name is required"),
            String::from("address.city is required")
        ]
    );
}

#[test]
fn test_invalid_employment_type_display() {
    let err: DomainError = DomainError::InvalidEmploymentType(String::from("seasonal"));
    assert_eq!(
        format!("{err}"),
        "`seasonal` is not a valid employmentType (expected one of: full-time, part-time, contract, intern)"
    );
    assert_eq!(err.messages().len(), 1);
}

#[test]
fn test_date_parse_error_display() {
    let err: DomainError = DomainError::DateParseError {
        date_string: String::from("12/04/1990"),
        error: String::from("bad"),
    };
    assert_eq!(format!("{err}"), "Failed to parse date '12/04/1990': bad");
}
