//! Date-range construction from relative offsets.
//!
//! Turns an ordered list of named spans into contiguous, non-overlapping
//! calendar intervals: each entry's range starts where its offset lands and
//! ends the day before the next entry's start. The final range extends to a
//! caller-supplied sentinel, or is left unbounded.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::date::PlanDate;
use crate::timespan::TimeSpan;

/// A named span awaiting range construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanEntry {
    pub name: String,
    pub span: TimeSpan,
}

impl SpanEntry {
    /// Parses `span_text` with `name` as its label.
    pub fn new(name: impl Into<String>, span_text: &str) -> Self {
        let name = name.into();
        let span = TimeSpan::parse_labeled(span_text, Some(&name));
        Self { name, span }
    }
}

/// An inclusive date range bound to a named span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub name: String,
    pub span: TimeSpan,
    pub start: NaiveDate,
    /// Inclusive end; `None` means the range never closes.
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Returns true when `date` falls inside this range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && self.end.is_none_or(|end| date <= end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) => {}..", self.name, self.span.source, self.start)?;
        match self.end {
            Some(end) => write!(f, "{end}"),
            None => write!(f, "open"),
        }
    }
}

/// An ordered set of contiguous, non-overlapping ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DateRangeSet {
    ranges: Vec<DateRange>,
}

impl DateRangeSet {
    /// Builds ranges from `base` and the given entries.
    ///
    /// Each entry's start is `base` plus its span. When
    /// `require_unique_starts` is set, entries whose exact start date was
    /// already produced are dropped (first occurrence wins). Entries are then
    /// stable-sorted by start, so equal starts keep their original order.
    ///
    /// Every range but the last ends the day before the next start. When two
    /// adjacent entries share a start date the earlier one degenerates to a
    /// zero-width range ending at its own start; this mirrors the upstream
    /// reference behavior and is intentionally not "fixed". The last range
    /// ends at `end_last` (`None` = unbounded).
    pub fn build(
        base: &PlanDate,
        entries: Vec<SpanEntry>,
        end_last: Option<NaiveDate>,
        require_unique_starts: bool,
    ) -> Self {
        tracing::debug!(base = %base.date(), entries = entries.len(), "building date ranges");

        let mut ranges: Vec<DateRange> = Vec::with_capacity(entries.len());
        for entry in entries {
            let start = base.add_span(&entry.span).date();
            if require_unique_starts && ranges.iter().any(|r| r.start == start) {
                continue;
            }
            ranges.push(DateRange {
                name: entry.name,
                span: entry.span,
                start,
                end: None,
            });
        }

        ranges.sort_by_key(|r| r.start);

        for index in 0..ranges.len() {
            let next_start = ranges.get(index + 1).map(|r| r.start);
            ranges[index].end = match next_start {
                Some(next) if next > ranges[index].start => next.pred_opt(),
                Some(_) => Some(ranges[index].start),
                None => end_last,
            };
        }

        Self { ranges }
    }

    /// Returns the first range containing `date`, if any.
    ///
    /// Ranges are non-overlapping by construction, so "first" is also
    /// "only" outside the degenerate duplicate-start case.
    pub fn find(&self, date: NaiveDate) -> Option<&DateRange> {
        self.ranges.iter().find(|r| r.contains(date))
    }

    pub fn ranges(&self) -> &[DateRange] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn entries(specs: &[(&str, &str)]) -> Vec<SpanEntry> {
        specs
            .iter()
            .map(|(name, text)| SpanEntry::new(*name, text))
            .collect()
    }

    #[test]
    fn builds_contiguous_unbounded_ranges() {
        let base = PlanDate::new(date(2020, 1, 1));
        let set = DateRangeSet::build(
            &base,
            entries(&[("A", "0 days"), ("B", "2 months"), ("C", "4 months")]),
            None,
            false,
        );

        let ranges = set.ranges();
        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges[0].name, "A");
        assert_eq!(ranges[0].start, date(2020, 1, 1));
        assert_eq!(ranges[0].end, Some(date(2020, 2, 29)));
        assert_eq!(ranges[1].name, "B");
        assert_eq!(ranges[1].start, date(2020, 3, 1));
        assert_eq!(ranges[1].end, Some(date(2020, 4, 30)));
        assert_eq!(ranges[2].name, "C");
        assert_eq!(ranges[2].start, date(2020, 5, 1));
        assert_eq!(ranges[2].end, None);

        assert_eq!(set.find(date(2020, 3, 15)).map(|r| r.name.as_str()), Some("B"));
    }

    #[test]
    fn ranges_do_not_overlap_and_are_sorted() {
        let base = PlanDate::new(date(2011, 10, 1));
        let set = DateRangeSet::build(
            &base,
            entries(&[
                ("Latest", "3 months"),
                ("Min", "6 weeks"),
                ("AbsMin", "38 days"),
                ("Earliest", "2 months"),
            ]),
            Some(date(3010, 10, 1)),
            false,
        );

        let ranges = set.ranges();
        for pair in ranges.windows(2) {
            assert!(pair[0].start < pair[1].start, "sorted ascending");
            assert_eq!(
                pair[0].end.and_then(|e| e.succ_opt()),
                Some(pair[1].start),
                "no gap, no overlap between {} and {}",
                pair[0].name,
                pair[1].name
            );
        }
        assert_eq!(ranges.last().unwrap().end, Some(date(3010, 10, 1)));
    }

    #[test]
    fn unsorted_input_is_sorted_by_start() {
        let base = PlanDate::new(date(2020, 6, 1));
        let set = DateRangeSet::build(
            &base,
            entries(&[("later", "2 weeks"), ("sooner", "3 days")]),
            None,
            false,
        );
        let names: Vec<_> = set.ranges().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["sooner", "later"]);
    }

    #[test]
    fn duplicate_starts_degenerate_to_zero_width() {
        let base = PlanDate::new(date(2012, 1, 1));
        let set = DateRangeSet::build(
            &base,
            entries(&[("first", "0 days"), ("second", ""), ("third", "1 month")]),
            None,
            false,
        );

        let ranges = set.ranges();
        // Equal starts keep their original relative order (stable sort) and
        // all but the last of them collapse to their own start date.
        assert_eq!(ranges[0].name, "first");
        assert_eq!(ranges[0].end, Some(date(2012, 1, 1)));
        assert_eq!(ranges[1].name, "second");
        assert_eq!(ranges[1].end, Some(date(2012, 1, 31)));
        assert_eq!(ranges[2].start, date(2012, 2, 1));

        // Lookup returns the first of the duplicates
        assert_eq!(set.find(date(2012, 1, 1)).map(|r| r.name.as_str()), Some("first"));
    }

    #[test]
    fn require_unique_starts_keeps_first_occurrence() {
        let base = PlanDate::new(date(2012, 1, 1));
        let set = DateRangeSet::build(
            &base,
            entries(&[("first", "0 days"), ("second", ""), ("third", "1 month")]),
            None,
            true,
        );

        let names: Vec<_> = set.ranges().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "third"]);
        assert_eq!(set.ranges()[0].end, Some(date(2012, 1, 31)));
    }

    #[test]
    fn find_boundaries_are_inclusive() {
        let base = PlanDate::new(date(2020, 1, 1));
        let set = DateRangeSet::build(
            &base,
            entries(&[("A", "1 week"), ("B", "2 weeks")]),
            Some(date(2020, 2, 1)),
            false,
        );

        // One day before the earliest start: no match
        assert!(set.find(date(2020, 1, 7)).is_none());
        // Exactly on a start: that range
        assert_eq!(set.find(date(2020, 1, 8)).map(|r| r.name.as_str()), Some("A"));
        assert_eq!(set.find(date(2020, 1, 14)).map(|r| r.name.as_str()), Some("A"));
        assert_eq!(set.find(date(2020, 1, 15)).map(|r| r.name.as_str()), Some("B"));
        // Sentinel end is inclusive too
        assert_eq!(set.find(date(2020, 2, 1)).map(|r| r.name.as_str()), Some("B"));
        assert!(set.find(date(2020, 2, 2)).is_none());
    }

    #[test]
    fn empty_input_builds_empty_set() {
        let base = PlanDate::new(date(2020, 1, 1));
        let set = DateRangeSet::build(&base, Vec::new(), None, false);
        assert!(set.is_empty());
        assert!(set.find(date(2020, 1, 1)).is_none());
    }

    #[test]
    fn range_display_formats() {
        let base = PlanDate::new(date(2011, 10, 1));
        let set = DateRangeSet::build(
            &base,
            entries(&[("Minimum Age", "6 weeks"), ("Maximum Age", "999 years")]),
            None,
            false,
        );
        assert_eq!(
            set.ranges()[0].to_string(),
            "Minimum Age (6 weeks) => 2011-11-12..3010-09-30"
        );
        assert_eq!(
            set.ranges()[1].to_string(),
            "Maximum Age (999 years) => 3010-10-01..open"
        );
    }
}
