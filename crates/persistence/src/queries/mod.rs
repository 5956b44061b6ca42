// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! ## Module Organization
//!
//! - `departments`: Department lookups and uniqueness checks
//! - `employees`: Employee lookups (department joined) and uniqueness checks
//! - `listing`: Execution of a `ListingPlan`
//! - `dashboard`: Count and aggregation queries

pub mod dashboard;
pub mod departments;
pub mod employees;
pub mod listing;
