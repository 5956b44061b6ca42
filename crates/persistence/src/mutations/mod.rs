// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write operations.
//!
//! Every write stamps `updated_at` (and `created_at` on insert) with the
//! caller-supplied clock reading. Unique and foreign key violations are
//! surfaced as `PersistenceError::UniqueViolation` and
//! `PersistenceError::ForeignKeyViolation`.

pub mod departments;
pub mod employees;
