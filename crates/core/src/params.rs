// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Raw listing parameters exactly as received from the query string.
///
/// Nothing is validated here; `ListingPlan::build` normalises every field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingParams {
    /// The requested page, 1-based.
    pub page: Option<String>,
    /// The requested page size.
    pub limit: Option<String>,
    /// Free-text search or an age.
    pub q: Option<String>,
    /// The field to sort by.
    pub sort_field: Option<String>,
    /// `asc` for ascending; anything else sorts descending.
    pub sort_dir: Option<String>,
}

/// Parses the leading integer of a string.
///
/// Leading whitespace is skipped, an optional sign is accepted, and
/// parsing stops at the first non-digit. Values too large for `i64`
/// saturate.
///
/// # Returns
///
/// * `Some(value)` if at least one digit was read
/// * `None` if the string has no leading integer
#[must_use]
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed: &str = value.trim_start();
    let (negative, digits): (bool, &str) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut result: i64 = 0;
    let mut seen_digit: bool = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        let digit: i64 = i64::from(byte - b'0');
        result = result.saturating_mul(10).saturating_add(digit);
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -result } else { result })
}

/// Normalised page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: i64,
    limit: i64,
}

impl Pagination {
    /// Page used when none (or zero) is requested.
    pub const DEFAULT_PAGE: i64 = 1;
    /// Page size used when none (or zero) is requested.
    pub const DEFAULT_LIMIT: i64 = 10;
    /// The largest page size a client may request.
    pub const MAX_LIMIT: i64 = 100;

    /// Normalises raw page and limit values.
    ///
    /// Absent, unparseable, and zero values take the defaults. The page is
    /// then clamped to at least 1 and the limit to `1..=MAX_LIMIT`.
    #[must_use]
    pub fn from_params(page: Option<&str>, limit: Option<&str>) -> Self {
        let page: i64 = page
            .and_then(parse_leading_int)
            .filter(|p| *p != 0)
            .unwrap_or(Self::DEFAULT_PAGE)
            .max(1);
        let limit: i64 = limit
            .and_then(parse_leading_int)
            .filter(|l| *l != 0)
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT);
        Self { page, limit }
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn page(&self) -> i64 {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn limit(&self) -> i64 {
        self.limit
    }

    /// Returns the number of records to skip before this page.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Returns the number of pages needed to hold `total` records.
    #[must_use]
    pub const fn total_pages(&self, total: i64) -> i64 {
        if total <= 0 {
            return 0;
        }
        (total + self.limit - 1) / self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}
