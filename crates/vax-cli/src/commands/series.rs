//! Describes the dose series for an antigen or a vaccine product code.

use std::io::Write;

use anyhow::{Result, bail};

use vax_refdata::Antigen;

use super::run::format_window;

pub fn run<W: Write>(writer: &mut W, antigen: Option<&str>, cvx: Option<&str>) -> Result<()> {
    let antigen: &Antigen = match (antigen, cvx) {
        (Some(name), None) => vax_refdata::antigen_series(name)?,
        (None, Some(code)) => vax_refdata::antigen_series_by_cvx(code)?,
        _ => bail!("pass exactly one of --antigen or --cvx"),
    };

    writeln!(writer, "Antigen: {}", antigen.name)?;
    for series in &antigen.series {
        writeln!(writer, "  {series}")?;
        for dose in &series.doses {
            writeln!(writer, "    Dose {}: {}", dose.number, format_window(&dose.age))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    #[test]
    fn describes_antigen_by_cvx() {
        let mut output = Vec::new();
        run(&mut output, None, Some("08")).unwrap();
        assert_snapshot!(String::from_utf8(output).unwrap(), @r#"
        Antigen: HepB
          HepB (3 doses)
            Dose 1: abs min "0 days", min "0 days", earliest "0 days", latest "1 month", max (none)
            Dose 2: abs min "4 weeks", min "4 weeks", earliest "1 month", latest "2 months", max (none)
            Dose 3: abs min "24 weeks", min "24 weeks", earliest "6 months", latest "18 months", max (none)
        "#);
    }

    #[test]
    fn requires_exactly_one_selector() {
        let mut output = Vec::new();
        assert!(run(&mut output, None, None).is_err());
        assert!(run(&mut output, Some("DTaP"), Some("20")).is_err());
    }

    #[test]
    fn unknown_antigen_surfaces_refdata_error() {
        let mut output = Vec::new();
        let err = run(&mut output, Some("Dragonpox"), None).unwrap_err();
        assert!(err.to_string().contains("unknown antigen"));
    }
}
