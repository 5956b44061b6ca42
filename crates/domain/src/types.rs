// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Calendar date format used on the wire and in the store (`YYYY-MM-DD`).
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Formats a calendar date as `YYYY-MM-DD`.
///
/// The zero padding keeps the textual form ordered the same way as the dates,
/// which the store relies on for range filters.
#[must_use]
pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Parses a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns an error if the string is not a valid calendar date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// The kind of employment contract an employee holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    /// Permanent, full-time position.
    FullTime,
    /// Permanent, part-time position.
    PartTime,
    /// Fixed-term contractor.
    Contract,
    /// Internship.
    Intern,
}

impl EmploymentType {
    /// Every employment type, in declaration order.
    pub const ALL: [Self; 4] = [Self::FullTime, Self::PartTime, Self::Contract, Self::Intern];

    /// Converts this employment type to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "full-time",
            Self::PartTime => "part-time",
            Self::Contract => "contract",
            Self::Intern => "intern",
        }
    }
}

impl FromStr for EmploymentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full-time" => Ok(Self::FullTime),
            "part-time" => Ok(Self::PartTime),
            "contract" => Ok(Self::Contract),
            "intern" => Ok(Self::Intern),
            _ => Err(DomainError::InvalidEmploymentType(s.to_string())),
        }
    }
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A postal address embedded in an employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// The person to contact in an emergency, embedded in an employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

/// A stored department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    /// The store-assigned identifier.
    pub id: i64,
    /// The unique department name.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// A stored employee with its department resolved.
///
/// `department` is `None` only when the referenced department could not be
/// resolved at read time.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    /// The store-assigned identifier.
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub dob: Date,
    /// The referenced department identifier.
    pub department_id: i64,
    /// The joined department record.
    pub department: Option<Department>,
    pub role: String,
    pub employment_type: EmploymentType,
    pub hire_date: Date,
    pub salary: Option<f64>,
    /// The organisation-assigned employee number.
    pub employee_id: String,
    pub address: Address,
    pub emergency_contact: EmergencyContact,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// A validated employee ready to be written to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub dob: Date,
    pub department_id: i64,
    pub role: String,
    pub employment_type: EmploymentType,
    pub hire_date: Date,
    pub salary: Option<f64>,
    pub employee_id: String,
    pub address: Address,
    pub emergency_contact: EmergencyContact,
}

/// A validated department ready to be written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDepartment {
    pub name: String,
    pub description: Option<String>,
}

/// Unvalidated address fields as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressFields {
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
}

impl From<&Address> for AddressFields {
    fn from(address: &Address) -> Self {
        Self {
            line1: Some(address.line1.clone()),
            line2: address.line2.clone(),
            city: Some(address.city.clone()),
            state: Some(address.state.clone()),
            zip: Some(address.zip.clone()),
            country: Some(address.country.clone()),
        }
    }
}

/// Unvalidated emergency contact fields as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContactFields {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub relationship: Option<String>,
}

impl From<&EmergencyContact> for EmergencyContactFields {
    fn from(contact: &EmergencyContact) -> Self {
        Self {
            name: Some(contact.name.clone()),
            phone: Some(contact.phone.clone()),
            relationship: Some(contact.relationship.clone()),
        }
    }
}

/// Unvalidated employee fields.
///
/// Every field is optional so that validation can report all missing
/// fields at once instead of failing on the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Date of birth, `YYYY-MM-DD`.
    pub dob: Option<String>,
    pub department_id: Option<i64>,
    pub role: Option<String>,
    pub employment_type: Option<String>,
    /// Hire date, `YYYY-MM-DD`.
    pub hire_date: Option<String>,
    pub salary: Option<f64>,
    pub employee_id: Option<String>,
    pub address: Option<AddressFields>,
    pub emergency_contact: Option<EmergencyContactFields>,
}

impl From<&Employee> for EmployeeFields {
    fn from(employee: &Employee) -> Self {
        Self {
            name: Some(employee.name.clone()),
            email: Some(employee.email.clone()),
            phone: Some(employee.phone.clone()),
            dob: Some(format_date(employee.dob)),
            department_id: Some(employee.department_id),
            role: Some(employee.role.clone()),
            employment_type: Some(employee.employment_type.as_str().to_string()),
            hire_date: Some(format_date(employee.hire_date)),
            salary: employee.salary,
            employee_id: Some(employee.employee_id.clone()),
            address: Some(AddressFields::from(&employee.address)),
            emergency_contact: Some(EmergencyContactFields::from(&employee.emergency_contact)),
        }
    }
}

impl EmployeeFields {
    /// Overlays the fields present in `patch` onto these fields.
    ///
    /// Embedded sub-records are replaced as a whole. `salary` may be
    /// cleared by an explicit `Some(None)`.
    pub fn apply(&mut self, patch: EmployeePatch) {
        if let Some(name) = patch.name {
            self.name = Some(name);
        }
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
        if let Some(phone) = patch.phone {
            self.phone = Some(phone);
        }
        if let Some(dob) = patch.dob {
            self.dob = Some(dob);
        }
        if let Some(department_id) = patch.department_id {
            self.department_id = Some(department_id);
        }
        if let Some(role) = patch.role {
            self.role = Some(role);
        }
        if let Some(employment_type) = patch.employment_type {
            self.employment_type = Some(employment_type);
        }
        if let Some(hire_date) = patch.hire_date {
            self.hire_date = Some(hire_date);
        }
        if let Some(salary) = patch.salary {
            self.salary = salary;
        }
        if let Some(employee_id) = patch.employee_id {
            self.employee_id = Some(employee_id);
        }
        if let Some(address) = patch.address {
            self.address = Some(address);
        }
        if let Some(emergency_contact) = patch.emergency_contact {
            self.emergency_contact = Some(emergency_contact);
        }
    }
}

/// A partial update to an employee.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub dob: Option<String>,
    pub department_id: Option<i64>,
    pub role: Option<String>,
    pub employment_type: Option<String>,
    pub hire_date: Option<String>,
    pub salary: Option<Option<f64>>,
    pub employee_id: Option<String>,
    pub address: Option<AddressFields>,
    pub emergency_contact: Option<EmergencyContactFields>,
}

/// Unvalidated department fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentFields {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<&Department> for DepartmentFields {
    fn from(department: &Department) -> Self {
        Self {
            name: Some(department.name.clone()),
            description: department.description.clone(),
        }
    }
}

impl DepartmentFields {
    /// Overlays the fields present in `patch` onto these fields.
    pub fn apply(&mut self, patch: DepartmentPatch) {
        if let Some(name) = patch.name {
            self.name = Some(name);
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}

/// A partial update to a department.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}
