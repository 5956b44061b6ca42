// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee listing planner.
//!
//! Turns the raw `{page, limit, q, sortField, sortDir}` query values into
//! a `ListingPlan` that the store can execute without further decisions.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod params;
mod plan;
mod search;
mod sort;

#[cfg(test)]
mod tests;

pub use params::{ListingParams, Pagination, parse_leading_int};
pub use plan::{ListingPlan, Page};
pub use search::{LIKE_ESCAPE, MAX_AGE_QUERY, MIN_AGE_QUERY, SearchFilter, like_pattern};
pub use sort::{SortDirection, SortField};
