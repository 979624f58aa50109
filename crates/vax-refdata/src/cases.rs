//! Named test-case fixtures: a patient birth date plus an ordered
//! immunization history.

use std::sync::LazyLock;

use serde::Serialize;

use crate::RefdataError;

/// One administered dose in a patient's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdministeredDose {
    /// ISO date string, parsed downstream.
    pub date_administered: &'static str,
    pub vaccine_name: &'static str,
    /// Vaccine product code.
    pub cvx: &'static str,
}

/// A named scenario to evaluate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCase {
    pub name: &'static str,
    /// Patient date of birth, ISO date string.
    pub dob: &'static str,
    pub series: Vec<AdministeredDose>,
}

static TEST_CASES: LazyLock<Vec<TestCase>> = LazyLock::new(|| {
    vec![
        TestCase {
            name: "DTaP # 2 at age 4 months",
            dob: "2011-10-01",
            series: vec![
                AdministeredDose {
                    date_administered: "2011-12-01",
                    vaccine_name: "DTaP",
                    cvx: "20",
                },
                AdministeredDose {
                    date_administered: "2012-02-01",
                    vaccine_name: "DTaP",
                    cvx: "20",
                },
            ],
        },
        TestCase {
            // The double space is present in the upstream fixture name.
            name: "Dose 1 to dose 2 interval 6 months.  Series complete.",
            dob: "2012-01-01",
            series: vec![
                AdministeredDose {
                    date_administered: "2012-01-01",
                    vaccine_name: "Hep B, adolescent or pediatric",
                    cvx: "08",
                },
                AdministeredDose {
                    date_administered: "2012-07-01",
                    vaccine_name: "Hep B, adolescent or pediatric",
                    cvx: "08",
                },
            ],
        },
    ]
});

/// All known scenarios.
pub fn test_cases() -> &'static [TestCase] {
    &TEST_CASES
}

/// Names of all known scenarios, in definition order.
pub fn test_case_names() -> impl Iterator<Item = &'static str> {
    TEST_CASES.iter().map(|case| case.name)
}

/// Finds a scenario by name; both sides are compared trimmed.
pub fn find_test_case(name: &str) -> Result<&'static TestCase, RefdataError> {
    TEST_CASES
        .iter()
        .find(|case| case.name.trim() == name.trim())
        .ok_or_else(|| RefdataError::UnknownTestCase(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_case_with_surrounding_whitespace() {
        let case = find_test_case("  DTaP # 2 at age 4 months ").unwrap();
        assert_eq!(case.dob, "2011-10-01");
        assert_eq!(case.series.len(), 2);
    }

    #[test]
    fn unknown_case_errors() {
        let err = find_test_case("No such scenario").unwrap_err();
        assert_eq!(
            err,
            RefdataError::UnknownTestCase("No such scenario".to_string())
        );
    }

    #[test]
    fn names_are_in_definition_order() {
        let names: Vec<_> = test_case_names().collect();
        assert_eq!(
            names,
            vec![
                "DTaP # 2 at age 4 months",
                "Dose 1 to dose 2 interval 6 months.  Series complete.",
            ]
        );
    }

    #[test]
    fn every_case_cvx_resolves() {
        for case in test_cases() {
            for dosed in &case.series {
                assert!(
                    crate::antigen_series_by_cvx(dosed.cvx).is_ok(),
                    "case {:?} references unknown cvx {}",
                    case.name,
                    dosed.cvx
                );
            }
        }
    }
}
