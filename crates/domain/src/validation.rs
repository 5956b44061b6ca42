// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{DomainError, FieldViolation};
use crate::types::{
    Address, AddressFields, DepartmentFields, EmergencyContact, EmergencyContactFields,
    EmployeeFields, EmploymentType, NewDepartment, NewEmployee, parse_date,
};
use time::Date;

/// Accumulates violations while a record is checked field by field.
#[derive(Debug, Default)]
struct Violations {
    items: Vec<FieldViolation>,
}

impl Violations {
    /// Returns the trimmed value of a required text field, recording a
    /// violation when it is missing or blank.
    fn required_text(&mut self, field: &str, value: Option<&String>) -> Option<String> {
        match value.map(|v| v.trim()) {
            Some(v) if !v.is_empty() => Some(v.to_string()),
            _ => {
                self.items.push(FieldViolation::required(field));
                None
            }
        }
    }

    /// Returns a required date, recording a violation when it is missing or
    /// not a valid `YYYY-MM-DD` date.
    fn required_date(&mut self, field: &str, value: Option<&String>) -> Option<Date> {
        let text: String = self.required_text(field, value)?;
        if let Ok(date) = parse_date(&text) {
            Some(date)
        } else {
            self.items.push(FieldViolation::new(
                field,
                format!("{field} must be a date in YYYY-MM-DD format"),
            ));
            None
        }
    }

    fn push(&mut self, violation: FieldViolation) {
        self.items.push(violation);
    }

    fn finish<T>(self, value: Option<T>) -> Result<T, DomainError> {
        match value {
            Some(value) if self.items.is_empty() => Ok(value),
            _ => Err(DomainError::Validation(self.items)),
        }
    }
}

/// Optional text is trimmed; blank values are treated as absent.
fn optional_text(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn validate_address(violations: &mut Violations, fields: Option<&AddressFields>) -> Option<Address> {
    let Some(fields) = fields else {
        violations.push(FieldViolation::required("address"));
        return None;
    };

    let line1: Option<String> = violations.required_text("address.line1", fields.line1.as_ref());
    let city: Option<String> = violations.required_text("address.city", fields.city.as_ref());
    let state: Option<String> = violations.required_text("address.state", fields.state.as_ref());
    let zip: Option<String> = violations.required_text("address.zip", fields.zip.as_ref());
    let country: Option<String> =
        violations.required_text("address.country", fields.country.as_ref());

    Some(Address {
        line1: line1?,
        line2: optional_text(fields.line2.as_ref()),
        city: city?,
        state: state?,
        zip: zip?,
        country: country?,
    })
}

fn validate_emergency_contact(
    violations: &mut Violations,
    fields: Option<&EmergencyContactFields>,
) -> Option<EmergencyContact> {
    let Some(fields) = fields else {
        violations.push(FieldViolation::required("emergencyContact"));
        return None;
    };

    let name: Option<String> =
        violations.required_text("emergencyContact.name", fields.name.as_ref());
    let phone: Option<String> =
        violations.required_text("emergencyContact.phone", fields.phone.as_ref());
    let relationship: Option<String> = violations.required_text(
        "emergencyContact.relationship",
        fields.relationship.as_ref(),
    );

    Some(EmergencyContact {
        name: name?,
        phone: phone?,
        relationship: relationship?,
    })
}

/// Validates an employee field set and converts it into a write model.
///
/// Every field is checked; the resulting error lists all violations, not
/// only the first. Uniqueness and department existence are NOT checked
/// here (those require the store).
///
/// # Errors
///
/// Returns `DomainError::Validation` if:
/// - A required field is missing or blank
/// - `dob` or `hireDate` is not a `YYYY-MM-DD` date
/// - `employmentType` is not one of the known values
/// - `salary` is negative or not a finite number
/// - A required address or emergency contact field is missing
pub fn validate_employee_fields(fields: &EmployeeFields) -> Result<NewEmployee, DomainError> {
    let mut violations: Violations = Violations::default();

    let name: Option<String> = violations.required_text("name", fields.name.as_ref());
    let email: Option<String> = violations.required_text("email", fields.email.as_ref());
    let phone: Option<String> = violations.required_text("phone", fields.phone.as_ref());
    let dob: Option<Date> = violations.required_date("dob", fields.dob.as_ref());

    if fields.department_id.is_none() {
        violations.push(FieldViolation::required("department"));
    }

    let role: Option<String> = violations.required_text("role", fields.role.as_ref());

    // Rule: employment type must be one of the enumerated values
    let employment_type: Option<EmploymentType> = violations
        .required_text("employmentType", fields.employment_type.as_ref())
        .and_then(|value| match value.parse::<EmploymentType>() {
            Ok(kind) => Some(kind),
            Err(e) => {
                violations.push(FieldViolation::new("employmentType", e.to_string()));
                None
            }
        });

    let hire_date: Option<Date> = violations.required_date("hireDate", fields.hire_date.as_ref());

    // Rule: salary is optional but never negative
    if let Some(salary) = fields.salary
        && (!salary.is_finite() || salary < 0.0)
    {
        violations.push(FieldViolation::new(
            "salary",
            String::from("salary must not be negative"),
        ));
    }

    let employee_id: Option<String> =
        violations.required_text("employeeId", fields.employee_id.as_ref());

    let address: Option<Address> = validate_address(&mut violations, fields.address.as_ref());
    let emergency_contact: Option<EmergencyContact> =
        validate_emergency_contact(&mut violations, fields.emergency_contact.as_ref());

    let assembled: Option<NewEmployee> = match (
        name,
        email,
        phone,
        dob,
        fields.department_id,
        role,
        employment_type,
        hire_date,
        employee_id,
        address,
        emergency_contact,
    ) {
        (
            Some(name),
            Some(email),
            Some(phone),
            Some(dob),
            Some(department_id),
            Some(role),
            Some(employment_type),
            Some(hire_date),
            Some(employee_id),
            Some(address),
            Some(emergency_contact),
        ) => Some(NewEmployee {
            name,
            email,
            phone,
            dob,
            department_id,
            role,
            employment_type,
            hire_date,
            salary: fields.salary,
            employee_id,
            address,
            emergency_contact,
        }),
        _ => None,
    };

    violations.finish(assembled)
}

/// Validates a department field set and converts it into a write model.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the name is missing or blank.
pub fn validate_department_fields(fields: &DepartmentFields) -> Result<NewDepartment, DomainError> {
    let mut violations: Violations = Violations::default();

    let name: Option<String> = violations.required_text("name", fields.name.as_ref());
    let assembled: Option<NewDepartment> = name.map(|name| NewDepartment {
        name,
        description: optional_text(fields.description.as_ref()),
    });

    violations.finish(assembled)
}
