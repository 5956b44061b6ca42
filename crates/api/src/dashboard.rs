// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dashboard aggregates.

use num_traits::ToPrimitive;
use std::cmp::Reverse;
use personnel_domain::Employee;
use personnel_persistence::Persistence;
use time::{Duration, OffsetDateTime};
use tracing::debug;

use crate::error::{ApiError, translate_persistence_error};
use crate::request_response::{
    ActivityKind, ActivityResponse, DashboardSummaryResponse, DepartmentCount,
};

/// How far back "recent" hires and activities reach.
pub const RECENT_WINDOW: Duration = Duration::days(30);

/// How many recently touched employees are considered for activities.
pub const ACTIVITY_CANDIDATES: i64 = 10;

/// The most activities a summary reports.
pub const ACTIVITY_LIMIT: usize = 5;

/// An update this close to creation is part of the creation.
const EDIT_GRACE: Duration = Duration::seconds(1);

/// Label for employees whose department could not be resolved.
const UNASSIGNED_LABEL: &str = "Other";

/// Classifies an employee's most recent write, if it falls in the window.
///
/// The window includes its start, matching the recent hire count.
fn activity_for(employee: &Employee, since: OffsetDateTime) -> Option<ActivityResponse> {
    if employee.updated_at > employee.created_at + EDIT_GRACE && employee.updated_at >= since {
        Some(ActivityResponse {
            kind: ActivityKind::Update,
            message: format!("Employee updated: {}", employee.name),
            timestamp: employee.updated_at,
        })
    } else if employee.created_at >= since {
        Some(ActivityResponse {
            kind: ActivityKind::New,
            message: format!("New employee added: {}", employee.name),
            timestamp: employee.created_at,
        })
    } else {
        None
    }
}

/// Builds the dashboard summary as of `now`.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn dashboard_summary(
    persistence: &mut Persistence,
    now: OffsetDateTime,
) -> Result<DashboardSummaryResponse, ApiError> {
    let since: OffsetDateTime = now - RECENT_WINDOW;

    let total_employees: usize = persistence
        .count_employees()
        .map_err(translate_persistence_error)?;
    let recent_hires: usize = persistence
        .count_employees_created_since(since)
        .map_err(translate_persistence_error)?;

    let mut department_counts: Vec<DepartmentCount> = persistence
        .count_employees_by_department()
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(|(name, count)| DepartmentCount { name, count })
        .collect();
    let assigned: usize = department_counts.iter().map(|d| d.count).sum();
    if total_employees > assigned {
        department_counts.push(DepartmentCount {
            name: String::from(UNASSIGNED_LABEL),
            count: total_employees - assigned,
        });
        department_counts.sort_by_key(|d| d.name.clone());
    }

    let stored_departments: usize = persistence
        .count_departments()
        .map_err(translate_persistence_error)?
        .to_usize()
        .unwrap_or(0);
    let department_count: usize = department_counts.len().max(stored_departments);
    let avg_employees_per_dept: f64 = total_employees.to_f64().unwrap_or(0.0)
        / department_count.max(1).to_f64().unwrap_or(1.0);

    let mut recent_activities: Vec<ActivityResponse> = persistence
        .recently_touched_employees(ACTIVITY_CANDIDATES)
        .map_err(translate_persistence_error)?
        .iter()
        .filter_map(|employee| activity_for(employee, since))
        .collect();
    recent_activities.sort_by_key(|a| Reverse(a.timestamp));
    recent_activities.truncate(ACTIVITY_LIMIT);

    debug!(
        total_employees,
        recent_hires,
        department_count,
        activities = recent_activities.len(),
        "Built dashboard summary"
    );

    Ok(DashboardSummaryResponse {
        total_employees,
        recent_hires,
        department_count,
        avg_employees_per_dept,
        department_counts,
        recent_activities,
    })
}
