//! Age-window shaping: reference-data windows to date ranges.

use serde::{Deserialize, Serialize};

use crate::date::PlanDate;
use crate::ranges::{DateRangeSet, SpanEntry};
use crate::timespan::TimeSpan;

/// A dose's age window as it appears in reference data: informal offsets
/// from the birth date. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeWindow {
    pub absolute_minimum: Option<String>,
    pub minimum: Option<String>,
    pub earliest_recommended: Option<String>,
    pub latest_recommended: Option<String>,
    pub maximum: Option<String>,
}

impl AgeWindow {
    /// Maps the window to named span entries, one per field.
    ///
    /// Absent fields parse to the zero span and still contribute an entry
    /// (their range starts at the birth date), except the maximum, which
    /// falls back to the unreachable-age sentinel.
    pub fn span_entries(&self) -> Vec<SpanEntry> {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        vec![
            SpanEntry::new("Absolute Minimum Age", &text(&self.absolute_minimum)),
            SpanEntry::new("Minimum Age", &text(&self.minimum)),
            SpanEntry::new("Earliest Recommended Age", &text(&self.earliest_recommended)),
            SpanEntry::new("Latest Recommended Age", &text(&self.latest_recommended)),
            SpanEntry::new(
                "Maximum Age",
                self.maximum
                    .as_deref()
                    .unwrap_or(&TimeSpan::unreachable_age().source),
            ),
        ]
    }
}

/// Builds the dose-age date ranges for a birth date, with the sentinel end
/// at birth plus the unreachable age.
pub fn age_date_ranges(birth: &PlanDate, window: &AgeWindow) -> DateRangeSet {
    let end_last = birth.add_span(&TimeSpan::unreachable_age()).date();
    DateRangeSet::build(birth, window.span_entries(), Some(end_last), false)
}
