// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod sort_tests;

use time::{Date, Month};

pub fn today() -> Date {
    Date::from_calendar_date(2026, Month::October, 17).unwrap()
}
