//! Informal time-span parsing ("4 months, 2 weeks").
//!
//! Reference data expresses ages as free text: a signed quantity followed by
//! a unit word, optionally comma-separated, in any case ("6 wks" is not
//! valid, but "6w", "6 weeks", and "+6 Week" are). Parsing is deliberately
//! lenient: unmatched text contributes nothing, and an empty or garbage
//! string parses to the zero span.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Calendar unit of a single matched token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanUnit {
    Day,
    Week,
    Month,
    Year,
}

/// One token of the informal grammar: a signed quantity and its unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanToken {
    pub quantity: i32,
    pub unit: SpanUnit,
}

/// Pre-compiled token pattern: signed integer (whitespace allowed between
/// sign and digits), then a unit word or its first letter.
static SPAN_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([+-]?\s*\d+)\s*(days?|weeks?|months?|years?|[dwmy])").unwrap()
});

/// Scans `text` for span tokens, in order of appearance.
///
/// Quantities that overflow `i32` are dropped along with their unit.
pub fn tokenize(text: &str) -> Vec<SpanToken> {
    SPAN_TOKEN_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let digits: String = caps[1].chars().filter(|c| !c.is_whitespace()).collect();
            let quantity = digits.parse::<i32>().ok()?;
            let unit = match caps[2].chars().next()?.to_ascii_lowercase() {
                'd' => SpanUnit::Day,
                'w' => SpanUnit::Week,
                'm' => SpanUnit::Month,
                'y' => SpanUnit::Year,
                _ => return None,
            };
            Some(SpanToken { quantity, unit })
        })
        .collect()
}

/// A relative calendar offset with signed counts per unit.
///
/// Immutable once parsed. The zero span is a valid, distinguished value
/// meaning "no change".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSpan {
    pub days: i32,
    pub weeks: i32,
    pub months: i32,
    pub years: i32,

    /// Display label; rendered as `[[label: …]]` when it differs from the
    /// source text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// The text this span was parsed from.
    pub source: String,
}

impl TimeSpan {
    /// Parses `text`, ignoring anything that is not a span token.
    pub fn parse(text: &str) -> Self {
        Self::parse_labeled(text, None)
    }

    /// Parses `text` and attaches a display label.
    ///
    /// Tokens are folded in order; when a unit appears more than once, the
    /// last occurrence wins.
    pub fn parse_labeled(text: &str, label: Option<&str>) -> Self {
        let mut span = Self {
            days: 0,
            weeks: 0,
            months: 0,
            years: 0,
            label: label.map(str::to_string),
            source: text.to_string(),
        };
        for token in tokenize(text) {
            match token.unit {
                SpanUnit::Day => span.days = token.quantity,
                SpanUnit::Week => span.weeks = token.quantity,
                SpanUnit::Month => span.months = token.quantity,
                SpanUnit::Year => span.years = token.quantity,
            }
        }
        span
    }

    /// Sentinel for ages no patient will reach, used where reference data
    /// leaves a maximum age open.
    pub fn unreachable_age() -> Self {
        Self::parse_labeled("999 years", Some("UNREACHABLE AGE"))
    }

    /// Returns true when every component is zero.
    pub const fn is_zero(&self) -> bool {
        self.days == 0 && self.weeks == 0 && self.months == 0 && self.years == 0
    }

    /// Non-zero components in year→month→week→day order, each with an
    /// explicit sign when positive and pluralized when |quantity| != 1.
    fn render_components(&self) -> String {
        let component = |quantity: i32, unit: &str| -> Option<String> {
            if quantity == 0 {
                return None;
            }
            let sign = if quantity > 0 { "+" } else { "" };
            let plural = if quantity.abs() == 1 { "" } else { "s" };
            Some(format!("{sign}{quantity} {unit}{plural}"))
        };
        [
            component(self.years, "year"),
            component(self.months, "month"),
            component(self.weeks, "week"),
            component(self.days, "day"),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self.render_components();
        match &self.label {
            Some(label) if *label != self.source => write!(f, "[[{label}: {body}]]"),
            _ => write!(f, "{body}"),
        }
    }
}
