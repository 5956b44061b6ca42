// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// A sortable employee field.
///
/// `DepartmentName` is the target of the `department` sort key, which
/// orders by the joined department's name rather than the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Name,
    Email,
    Phone,
    Dob,
    Role,
    EmploymentType,
    HireDate,
    Salary,
    EmployeeId,
    CreatedAt,
    UpdatedAt,
    Id,
    DepartmentName,
}

impl SortField {
    /// The field used when none is requested or the request is unknown.
    pub const DEFAULT: Self = Self::CreatedAt;

    /// Parses a wire sort key.
    ///
    /// # Returns
    ///
    /// * `Some(field)` for a known key
    /// * `None` for anything else
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            "dob" => Some(Self::Dob),
            "role" => Some(Self::Role),
            "employmentType" => Some(Self::EmploymentType),
            "hireDate" => Some(Self::HireDate),
            "salary" => Some(Self::Salary),
            "employeeId" => Some(Self::EmployeeId),
            "createdAt" => Some(Self::CreatedAt),
            "updatedAt" => Some(Self::UpdatedAt),
            "_id" => Some(Self::Id),
            "department" => Some(Self::DepartmentName),
            _ => None,
        }
    }

    /// Resolves an optional sort key, falling back to `DEFAULT`.
    #[must_use]
    pub fn resolve(key: Option<&str>) -> Self {
        key.and_then(Self::from_key).unwrap_or(Self::DEFAULT)
    }

    /// Returns the wire key for this field.
    #[must_use]
    pub const fn as_key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Dob => "dob",
            Self::Role => "role",
            Self::EmploymentType => "employmentType",
            Self::HireDate => "hireDate",
            Self::Salary => "salary",
            Self::EmployeeId => "employeeId",
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
            Self::Id => "_id",
            Self::DepartmentName => "department",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Only the literal `asc` sorts ascending; anything else, including
    /// no value at all, sorts descending.
    #[must_use]
    pub fn resolve(value: Option<&str>) -> Self {
        match value {
            Some("asc") => Self::Ascending,
            _ => Self::Descending,
        }
    }
}
