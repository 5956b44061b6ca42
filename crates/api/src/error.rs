// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use personnel_domain::DomainError;
use personnel_persistence::PersistenceError;
use thiserror::Error;
use tracing::error;

/// The kinds of record the API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Employee,
    Department,
}

impl Resource {
    /// The lowercase noun used inside sentences.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Department => "department",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Employee => write!(f, "Employee"),
            Self::Department => write!(f, "Department"),
        }
    }
}

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// API contract. The `Display` output is the message shown to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// One or more fields failed schema validation.
    #[error("{}", .messages.join(", "))]
    Validation {
        /// One message per offending field.
        messages: Vec<String>,
    },
    /// A unique field is already held by another record.
    #[error("{message}")]
    Duplicate {
        /// The wire name of the duplicated field.
        field: String,
        /// A human-readable description of the conflict.
        message: String,
    },
    /// A path identifier is not a positive integer.
    #[error("Invalid {} ID", .resource.noun())]
    InvalidId { resource: Resource },
    /// No record has the requested identifier.
    #[error("{resource} not found")]
    NotFound { resource: Resource },
    /// A department still has employees assigned.
    #[error("Cannot delete department with {count} employee(s) assigned")]
    DependentRecords { count: i64 },
    /// An internal error occurred. The message is logged, never returned.
    #[error("Internal server error")]
    Internal { message: String },
}

impl ApiError {
    /// Returns the per-field messages of a validation error.
    ///
    /// Every other variant has no details.
    #[must_use]
    pub fn details(&self) -> &[String] {
        match self {
            Self::Validation { messages } => messages,
            _ => &[],
        }
    }

    /// Builds a single-message validation error.
    #[must_use]
    pub fn invalid(message: &str) -> Self {
        Self::Validation {
            messages: vec![message.to_string()],
        }
    }
}

/// Translates a domain error into an API error.
///
/// Every domain error is a client input problem, so all of them become
/// validation errors carrying the per-field messages.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    ApiError::Validation {
        messages: err.messages(),
    }
}

/// Translates a persistence error into an API error.
///
/// Unique index violations become duplicate errors with the same message
/// the pre-checks produce. Everything else is internal and is logged here.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::UniqueViolation { field } => {
            let message: &str = match field.as_str() {
                "email" => "Email already exists",
                "employeeId" => "Employee ID already exists",
                "name" => "Department already exists",
                _ => "Record already exists",
            };
            ApiError::Duplicate {
                field,
                message: message.to_string(),
            }
        }
        other => {
            error!(error = %other, "Store operation failed");
            ApiError::Internal {
                message: other.to_string(),
            }
        }
    }
}
