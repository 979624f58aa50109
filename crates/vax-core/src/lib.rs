//! Core scheduling-window logic for vaxplan.
//!
//! This crate contains the fundamental types and logic for:
//! - Time-span parsing: informal relative offsets ("4 months, 2 weeks")
//! - Offset application: pure calendar arithmetic over labeled dates
//! - Range construction: offsets to contiguous, non-overlapping intervals
//! - Age-window shaping: reference-data windows to dose-age date ranges

pub mod date;
pub mod ranges;
pub mod timespan;
pub mod window;

pub use date::{DateParseError, PlanDate};
pub use ranges::{DateRange, DateRangeSet, SpanEntry};
pub use timespan::{SpanToken, SpanUnit, TimeSpan, tokenize};
pub use window::{AgeWindow, age_date_ranges};
