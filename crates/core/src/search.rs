// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::params::parse_leading_int;
use time::{Date, Month};

/// The youngest age an age query may name.
pub const MIN_AGE_QUERY: i64 = 0;
/// The oldest age an age query may name.
pub const MAX_AGE_QUERY: i64 = 100;

/// How a listing narrows the employee set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFilter {
    /// No narrowing; every employee matches.
    None,
    /// Employees whose date of birth falls within `from..=to`.
    BirthDateWindow {
        /// The first matching date of birth.
        from: Date,
        /// The last matching date of birth.
        to: Date,
    },
    /// Case-insensitive literal substring match on the searchable text
    /// fields and the department name.
    Text(String),
}

impl SearchFilter {
    /// Resolves a raw search term into a filter.
    ///
    /// A numeric term whose integer part is an age between
    /// `MIN_AGE_QUERY` and `MAX_AGE_QUERY` becomes a birth-date window;
    /// any other non-empty term becomes a text search. `0x1e` is numeric
    /// and names age 30.
    ///
    /// The window runs from Dec 31 of the year before the target birth
    /// year to Dec 31 of the target birth year, both inclusive. It is
    /// approximate: it ignores whether the birthday has passed this year.
    ///
    /// # Arguments
    ///
    /// * `q` - The raw search term, if any
    /// * `today` - The current UTC calendar date
    #[must_use]
    pub fn resolve(q: Option<&str>, today: Date) -> Self {
        let Some(term) = q.map(str::trim).filter(|t| !t.is_empty()) else {
            return Self::None;
        };

        if let Some(age) = age_query(term)
            && let Some(window) = birth_date_window(age, today)
        {
            return window;
        }

        Self::Text(term.to_string())
    }

    /// Returns `true` if this filter narrows the result set.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Returns the age named by a numeric term, if the term is numeric and
/// its integer part is within the age range.
///
/// Numeric means a finite decimal number, or an unsigned `0x`, `0o` or
/// `0b` literal. A hexadecimal literal names the age it encodes; octal and
/// binary literals take the leading-integer reading of their text, which
/// is always 0.
fn age_query(term: &str) -> Option<i64> {
    let age: i64 = match radix_literal(term) {
        Some(RadixLiteral::Hex(value)) => value,
        Some(RadixLiteral::OctalOrBinary) => 0,
        None => {
            if !term.parse::<f64>().is_ok_and(f64::is_finite) {
                return None;
            }
            parse_leading_int(term)?
        }
    };
    Some(age).filter(|age| (MIN_AGE_QUERY..=MAX_AGE_QUERY).contains(age))
}

enum RadixLiteral {
    /// Saturates at `i64::MAX`.
    Hex(i64),
    OctalOrBinary,
}

fn radix_literal(term: &str) -> Option<RadixLiteral> {
    let prefixed = |lower: &str, upper: &str| {
        term.strip_prefix(lower).or_else(|| term.strip_prefix(upper))
    };
    let (radix, digits): (u32, &str) = if let Some(d) = prefixed("0x", "0X") {
        (16, d)
    } else if let Some(d) = prefixed("0o", "0O") {
        (8, d)
    } else if let Some(d) = prefixed("0b", "0B") {
        (2, d)
    } else {
        return None;
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    if radix != 16 {
        return Some(RadixLiteral::OctalOrBinary);
    }

    let value: i64 = digits.chars().fold(0_i64, |acc, c| {
        let digit: i64 = c.to_digit(16).map_or(0, i64::from);
        acc.saturating_mul(16).saturating_add(digit)
    });
    Some(RadixLiteral::Hex(value))
}

fn birth_date_window(age: i64, today: Date) -> Option<SearchFilter> {
    let birth_year: i32 = i32::try_from(i64::from(today.year()) - age).ok()?;
    let from: Date = Date::from_calendar_date(birth_year - 1, Month::December, 31).ok()?;
    let to: Date = Date::from_calendar_date(birth_year, Month::December, 31).ok()?;
    Some(SearchFilter::BirthDateWindow { from, to })
}

/// Builds a `LIKE` pattern that matches `term` as a literal substring.
///
/// `%`, `_` and the escape character itself are escaped with
/// `LIKE_ESCAPE`.
#[must_use]
pub fn like_pattern(term: &str) -> String {
    let mut pattern: String = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// The escape character used by `like_pattern`.
pub const LIKE_ESCAPE: char = '\\';
