// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::params::{ListingParams, Pagination};
use crate::search::SearchFilter;
use crate::sort::{SortDirection, SortField};
use time::Date;

/// A fully-normalised employee listing request.
///
/// The store executes a plan in a fixed order: left join departments,
/// apply `filter`, count, sort by `sort_field` (ties broken by identifier
/// in the same direction), then skip and limit per `pagination`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPlan {
    pub filter: SearchFilter,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub pagination: Pagination,
}

impl ListingPlan {
    /// Normalises raw listing parameters.
    ///
    /// # Arguments
    ///
    /// * `params` - The raw query-string values
    /// * `today` - The current UTC calendar date, used by age queries
    #[must_use]
    pub fn build(params: &ListingParams, today: Date) -> Self {
        Self {
            filter: SearchFilter::resolve(params.q.as_deref(), today),
            sort_field: SortField::resolve(params.sort_field.as_deref()),
            sort_direction: SortDirection::resolve(params.sort_dir.as_deref()),
            pagination: Pagination::from_params(params.page.as_deref(), params.limit.as_deref()),
        }
    }
}

/// One page of a listing plus the envelope describing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// The records on this page.
    pub data: Vec<T>,
    /// The number of records matching the filter across all pages.
    pub total: i64,
    /// The 1-based page number.
    pub page: i64,
    /// The page size.
    pub limit: i64,
    /// `ceil(total / limit)`.
    pub total_pages: i64,
}

impl<T> Page<T> {
    /// Wraps the records of one page with its envelope.
    #[must_use]
    pub const fn new(data: Vec<T>, total: i64, pagination: &Pagination) -> Self {
        Self {
            data,
            total,
            page: pagination.page(),
            limit: pagination.limit(),
            total_pages: pagination.total_pages(total),
        }
    }

    /// Converts the records while keeping the envelope.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}
