//! Reference tables for vaxplan.
//!
//! Antigens, their dose series, and the CVX (vaccine product code) to
//! antigen associations. Tables are hardcoded prototype data in the shape of
//! the CDSi supporting data and are built once on first access.
//!
//! Lookups return explicit errors rather than silently yielding nothing
//! on an unknown key.

mod cases;
mod tables;

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use vax_core::AgeWindow;

pub use cases::{AdministeredDose, TestCase, find_test_case, test_case_names, test_cases};

/// Reference-data lookup errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RefdataError {
    /// No antigen with that name.
    #[error("unknown antigen: {0}")]
    UnknownAntigen(String),

    /// No entry for that vaccine product code.
    #[error("unknown vaccine code: {0}")]
    UnknownCvx(String),

    /// The code exists but associates with no antigen.
    #[error("vaccine code {0} has no antigen association")]
    NoAssociation(String),

    /// No fixture scenario with that name.
    #[error("unknown test case: {0:?}")]
    UnknownTestCase(String),
}

/// One dose within a series, carrying its age window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesDose {
    /// 1-based dose number.
    pub number: u8,
    pub age: AgeWindow,
}

/// A named ordered sequence of doses for an antigen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Series {
    pub name: &'static str,
    pub doses: Vec<SeriesDose>,
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} doses)", self.name, self.doses.len())
    }
}

/// A disease-target grouping of vaccine products with its dose series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Antigen {
    pub name: &'static str,
    pub series: Vec<Series>,
}

/// Looks up an antigen's series by name.
///
/// Names are matched with spaces removed, so "Hep B" and "HepB" resolve to
/// the same antigen.
pub fn antigen_series(name: &str) -> Result<&'static Antigen, RefdataError> {
    let key: String = name.chars().filter(|c| *c != ' ').collect();
    tables::antigens()
        .get(key.as_str())
        .ok_or_else(|| RefdataError::UnknownAntigen(name.to_string()))
}

/// Resolves a vaccine product code to its first associated antigen's series.
pub fn antigen_series_by_cvx(cvx: &str) -> Result<&'static Antigen, RefdataError> {
    let associated = tables::cvx_associations()
        .get(cvx)
        .ok_or_else(|| RefdataError::UnknownCvx(cvx.to_string()))?;
    let first = associated
        .first()
        .ok_or_else(|| RefdataError::NoAssociation(cvx.to_string()))?;
    tracing::debug!(cvx, antigen = *first, "resolved vaccine code");
    antigen_series(first)
}
