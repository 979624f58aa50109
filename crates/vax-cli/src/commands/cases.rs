//! Lists the known test scenarios.

use std::io::Write;

use anyhow::Result;

pub fn run<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "Known test cases:")?;
    for name in vax_refdata::test_case_names() {
        writeln!(writer, "- {name}")?;
    }
    Ok(())
}
