// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee listing execution.
//!
//! The pipeline is fixed: left join departments onto employees, apply the
//! search filter, count the filtered set, then sort, skip, and limit.
//!
//! Text search compares `lower_unicode(column)` against a lowercased
//! pattern, so case folding covers all of Unicode rather than only ASCII.

use diesel::SqliteConnection;
use diesel::helper_types::LeftJoinQuerySource;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Nullable};
use diesel::sqlite::Sqlite;
use personnel::{LIKE_ESCAPE, ListingPlan, Page, SearchFilter, SortDirection, SortField, like_pattern};
use personnel_domain::{Employee, format_date};
use tracing::debug;

use crate::backend::sqlite::lower_unicode;
use crate::data_models::{DepartmentRow, EmployeeRow};
use crate::diesel_schema::{departments, employees};
use crate::error::PersistenceError;

type ListingSource = LeftJoinQuerySource<employees::table, departments::table>;
// The joined department columns are nullable under a left join, so the
// combined predicate is `Nullable<Bool>`.
type ListingFilter = Box<dyn BoxableExpression<ListingSource, Sqlite, SqlType = Nullable<Bool>>>;

/// Builds the `WHERE` expression for a search filter.
///
/// Returns `None` when the filter does not narrow the set.
fn listing_filter(filter: &SearchFilter) -> Option<ListingFilter> {
    match filter {
        SearchFilter::None => None,
        SearchFilter::BirthDateWindow { from, to } => Some(Box::new(
            employees::dob
                .ge(format_date(*from))
                .and(employees::dob.le(format_date(*to)))
                .nullable(),
        )),
        SearchFilter::Text(term) => {
            // Both sides are lowercased so non-ASCII letters match regardless
            // of case.
            let pattern: String = like_pattern(&term.to_lowercase());
            Some(Box::new(
                lower_unicode(employees::name.nullable())
                    .like(pattern.clone())
                    .escape(LIKE_ESCAPE)
                    .or(lower_unicode(employees::email.nullable())
                        .like(pattern.clone())
                        .escape(LIKE_ESCAPE))
                    .or(lower_unicode(employees::phone.nullable())
                        .like(pattern.clone())
                        .escape(LIKE_ESCAPE))
                    .or(lower_unicode(employees::role.nullable())
                        .like(pattern.clone())
                        .escape(LIKE_ESCAPE))
                    .or(lower_unicode(employees::employee_id.nullable())
                        .like(pattern.clone())
                        .escape(LIKE_ESCAPE))
                    .or(lower_unicode(departments::name.nullable())
                        .like(pattern)
                        .escape(LIKE_ESCAPE)),
            ))
        }
    }
}

/// Orders a boxed listing query by a column, breaking ties by identifier in
/// the same direction.
macro_rules! order_listing {
    ($query:expr, $column:expr, $direction:expr) => {
        match $direction {
            SortDirection::Ascending => $query
                .order_by($column.asc())
                .then_order_by(employees::id.asc()),
            SortDirection::Descending => $query
                .order_by($column.desc())
                .then_order_by(employees::id.desc()),
        }
    };
}

/// Executes a listing plan.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `plan` - The normalised listing request
///
/// # Returns
///
/// The requested page plus the number of employees matching the filter.
/// A page past the end yields no records with the correct total.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored row is
/// malformed.
pub fn list_employees(
    conn: &mut SqliteConnection,
    plan: &ListingPlan,
) -> Result<Page<Employee>, PersistenceError> {
    let mut count_query = employees::table
        .left_join(departments::table)
        .into_boxed();
    if let Some(filter) = listing_filter(&plan.filter) {
        count_query = count_query.filter(filter);
    }
    let total: i64 = count_query.count().get_result(conn)?;

    let mut query = employees::table
        .left_join(departments::table)
        .select((EmployeeRow::as_select(), Option::<DepartmentRow>::as_select()))
        .into_boxed();
    if let Some(filter) = listing_filter(&plan.filter) {
        query = query.filter(filter);
    }

    let direction: SortDirection = plan.sort_direction;
    query = match plan.sort_field {
        SortField::Name => order_listing!(query, employees::name, direction),
        SortField::Email => order_listing!(query, employees::email, direction),
        SortField::Phone => order_listing!(query, employees::phone, direction),
        SortField::Dob => order_listing!(query, employees::dob, direction),
        SortField::Role => order_listing!(query, employees::role, direction),
        SortField::EmploymentType => order_listing!(query, employees::employment_type, direction),
        SortField::HireDate => order_listing!(query, employees::hire_date, direction),
        SortField::Salary => order_listing!(query, employees::salary, direction),
        SortField::EmployeeId => order_listing!(query, employees::employee_id, direction),
        SortField::CreatedAt => order_listing!(query, employees::created_at, direction),
        SortField::UpdatedAt => order_listing!(query, employees::updated_at, direction),
        SortField::Id => match direction {
            SortDirection::Ascending => query.order_by(employees::id.asc()),
            SortDirection::Descending => query.order_by(employees::id.desc()),
        },
        SortField::DepartmentName => order_listing!(query, departments::name, direction),
    };

    let rows: Vec<(EmployeeRow, Option<DepartmentRow>)> = query
        .offset(plan.pagination.offset())
        .limit(plan.pagination.limit())
        .load(conn)?;

    debug!(
        total,
        returned = rows.len(),
        sort_field = plan.sort_field.as_key(),
        "Executed employee listing"
    );

    let data: Vec<Employee> = rows
        .into_iter()
        .map(|(employee, department)| employee.into_employee(department))
        .collect::<Result<_, _>>()?;

    Ok(Page::new(data, total, &plan.pagination))
}
