//! Hardcoded antigen and CVX association tables.
//!
//! Windows follow the CDSi convention: each value is an informal offset from
//! the birth date, parsed downstream by `vax_core::TimeSpan`. A missing
//! maximum means the dose has no upper age bound.

use std::collections::HashMap;
use std::sync::LazyLock;

use vax_core::AgeWindow;

use crate::{Antigen, Series, SeriesDose};

fn window(
    absolute_minimum: &str,
    minimum: &str,
    earliest_recommended: &str,
    latest_recommended: &str,
    maximum: Option<&str>,
) -> AgeWindow {
    AgeWindow {
        absolute_minimum: Some(absolute_minimum.to_string()),
        minimum: Some(minimum.to_string()),
        earliest_recommended: Some(earliest_recommended.to_string()),
        latest_recommended: Some(latest_recommended.to_string()),
        maximum: maximum.map(str::to_string),
    }
}

fn dose(number: u8, age: AgeWindow) -> SeriesDose {
    SeriesDose { number, age }
}

static ANTIGENS: LazyLock<HashMap<&'static str, Antigen>> = LazyLock::new(|| {
    HashMap::from_iter([
        ("DTaP", Antigen {
            name: "DTaP",
            series: vec![
                Series {
                    name: "DTaP",
                    doses: vec![
                        dose(1, window("38 days", "6 weeks", "2 months", "3 months", None)),
                        dose(2, window("10 weeks", "10 weeks", "4 months", "5 months", None)),
                        dose(3, window("14 weeks", "14 weeks", "6 months", "7 months", None)),
                        dose(4, window("12 months", "12 months", "15 months", "19 months", None)),
                        dose(5, window("4 years", "4 years", "4 years", "5 years", Some("7 years"))),
                    ],
                },
                Series {
                    name: "DTaP catch-up",
                    doses: vec![
                        dose(1, window("38 days", "6 weeks", "2 months", "3 months", None)),
                        dose(2, window("10 weeks", "10 weeks", "4 months", "5 months", None)),
                        dose(3, window("14 weeks", "14 weeks", "6 months", "7 months", None)),
                        dose(4, window("12 months", "12 months", "15 months", "19 months", Some("7 years"))),
                    ],
                },
            ],
        }),
        ("HepB", Antigen {
            name: "HepB",
            series: vec![Series {
                name: "HepB",
                doses: vec![
                    dose(1, window("0 days", "0 days", "0 days", "1 month", None)),
                    dose(2, window("4 weeks", "4 weeks", "1 month", "2 months", None)),
                    dose(3, window("24 weeks", "24 weeks", "6 months", "18 months", None)),
                ],
            }],
        }),
        ("Polio", Antigen {
            name: "Polio",
            series: vec![Series {
                name: "IPV",
                doses: vec![
                    dose(1, window("6 weeks", "6 weeks", "2 months", "3 months", None)),
                    dose(2, window("10 weeks", "10 weeks", "4 months", "5 months", None)),
                    dose(3, window("14 weeks", "14 weeks", "6 months", "18 months", None)),
                    dose(4, window("4 years", "4 years", "4 years", "5 years", Some("18 years"))),
                ],
            }],
        }),
    ])
});

/// CVX code to associated antigen names, most specific first.
static CVX_ASSOCIATIONS: LazyLock<HashMap<&'static str, Vec<&'static str>>> =
    LazyLock::new(|| {
        HashMap::from_iter([
            ("20", vec!["DTaP"]),
            ("106", vec!["DTaP"]),
            ("107", vec!["DTaP"]),
            ("110", vec!["DTaP", "HepB", "Polio"]),
            ("08", vec!["HepB"]),
            ("10", vec!["Polio"]),
        ])
    });

pub(crate) fn antigens() -> &'static HashMap<&'static str, Antigen> {
    &ANTIGENS
}

pub(crate) fn cvx_associations() -> &'static HashMap<&'static str, Vec<&'static str>> {
    &CVX_ASSOCIATIONS
}
