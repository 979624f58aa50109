//! Scenario evaluation: the `vaxplan run` command.
//!
//! For each named scenario this builds the patient profile, resolves the
//! dose series for the first administered dose's vaccine code, converts the
//! first dose's age window into date ranges from the birth date, and reports
//! which range the administered date falls in.

use std::io::Write;

use anyhow::{Context, Result, anyhow};

use vax_core::{AgeWindow, PlanDate, age_date_ranges};
use vax_refdata::TestCase;

/// One administered dose from a scenario, with a parsed date.
#[derive(Debug, Clone)]
pub struct Immunization {
    pub administered: PlanDate,
    pub vaccine_name: String,
    /// 1-based position in the history.
    pub dose_number: u32,
    pub cvx: String,
}

/// A patient extracted from a test-case fixture.
#[derive(Debug, Clone)]
pub struct PatientProfile {
    pub name: String,
    pub birth_date: PlanDate,
    pub history: Vec<Immunization>,
}

impl PatientProfile {
    /// Builds a profile from a fixture, parsing its date strings.
    pub fn from_case(case: &TestCase) -> Result<Self> {
        let birth_date = PlanDate::from_iso(case.dob)
            .with_context(|| format!("bad birth date in case {:?}", case.name))?
            .with_label("Birth Date");

        let history = case
            .series
            .iter()
            .enumerate()
            .map(|(index, dosed)| {
                let administered = PlanDate::from_iso(dosed.date_administered)
                    .with_context(|| format!("bad administered date in case {:?}", case.name))?;
                Ok(Immunization {
                    administered,
                    vaccine_name: dosed.vaccine_name.to_string(),
                    dose_number: u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1),
                    cvx: dosed.cvx.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: case.name.to_string(),
            birth_date,
            history,
        })
    }
}

/// Renders an age window's raw reference-data fields on one line.
pub(crate) fn format_window(window: &AgeWindow) -> String {
    let field = |value: &Option<String>| -> String {
        value
            .as_ref()
            .map_or_else(|| "(none)".to_string(), |v| format!("{v:?}"))
    };
    format!(
        "abs min {}, min {}, earliest {}, latest {}, max {}",
        field(&window.absolute_minimum),
        field(&window.minimum),
        field(&window.earliest_recommended),
        field(&window.latest_recommended),
        field(&window.maximum),
    )
}

/// Evaluates one scenario and writes its report block.
pub fn run<W: Write>(writer: &mut W, case_name: &str) -> Result<()> {
    let case = vax_refdata::find_test_case(case_name)?;
    let profile = PatientProfile::from_case(case)?;
    tracing::debug!(case = case.name, doses = profile.history.len(), "evaluating scenario");

    let first_dose = profile
        .history
        .iter()
        .find(|dose| dose.dose_number == 1)
        .ok_or_else(|| anyhow!("scenario {case_name:?} has no first dose"))?;
    let administered = first_dose
        .administered
        .clone()
        .with_label("Administered Date");

    let antigen = vax_refdata::antigen_series_by_cvx(&first_dose.cvx)?;
    let series = antigen
        .series
        .first()
        .ok_or_else(|| anyhow!("antigen {} has no series", antigen.name))?;
    let dose = series
        .doses
        .first()
        .ok_or_else(|| anyhow!("series {} has no doses", series.name))?;

    let ranges = age_date_ranges(&profile.birth_date, &dose.age);
    let matched = ranges.find(administered.date());

    let bar = "=".repeat(81);
    writeln!(writer, "{bar}")?;
    writeln!(writer, "| Patient: {}", profile.name)?;
    writeln!(writer, "{bar}")?;
    writeln!(writer, "Birth Date: {}", profile.birth_date)?;
    writeln!(writer, "Administered Date: {administered}")?;
    writeln!(writer, "This date best matches in the following date range:")?;
    match matched {
        Some(range) => writeln!(writer, "  {range}")?,
        None => writeln!(writer, "  Too early")?,
    }
    writeln!(
        writer,
        "Age in Days: {}",
        profile.birth_date.diff_in_days(&administered)
    )?;
    writeln!(writer, "Selected Series: {series}")?;
    writeln!(writer, "First Dose Age (raw): {}", format_window(&dose.age))?;
    writeln!(writer, "Dose Age Date Ranges:")?;
    for range in ranges.ranges() {
        writeln!(writer, "  {range}")?;
    }
    writeln!(writer, "CVX Dose Series available:")?;
    for series in &antigen.series {
        writeln!(writer, "  {series}")?;
    }
    writeln!(writer)?;

    Ok(())
}
