// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// A single schema violation on a named field.
///
/// Nested fields use dotted paths (e.g. `address.city`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// The path of the offending field.
    pub field: String,
    /// A human-readable description of the violation.
    pub message: String,
}

impl FieldViolation {
    /// Creates a new field violation.
    #[must_use]
    pub fn new(field: &str, message: String) -> Self {
        Self {
            field: field.to_string(),
            message,
        }
    }

    /// Creates a violation for a missing required field.
    #[must_use]
    pub fn required(field: &str) -> Self {
        Self::new(field, format!("{field} is required"))
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more schema constraints were violated.
    Validation(Vec<FieldViolation>),
    /// The employment type is not one of the known values.
    InvalidEmploymentType(String),
    /// A date string could not be parsed.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl DomainError {
    /// Returns the individual violation messages, one per offending field.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation(violations) => violations.iter().map(|v| v.message.clone()).collect(),
            other => vec![other.to_string()],
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(violations) => {
                let joined: Vec<&str> = violations.iter().map(|v| v.message.as_str()).collect();
                write!(f, "{}", joined.join(", "))
            }
            Self::InvalidEmploymentType(value) => write!(
                f,
                "`{value}` is not a valid employmentType (expected one of: {})",
                crate::EmploymentType::ALL
                    .iter()
                    .map(crate::EmploymentType::as_str)
                    .collect::<Vec<&str>>()
                    .join(", ")
            ),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
