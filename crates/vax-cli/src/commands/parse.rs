//! Debug aid: parse an informal time span and show the result.

use std::io::Write;

use anyhow::Result;

use vax_core::TimeSpan;

pub fn run<W: Write>(writer: &mut W, text: &str) -> Result<()> {
    let span = TimeSpan::parse(text);
    writeln!(writer, "source: {:?}", span.source)?;
    writeln!(writer, "years: {}", span.years)?;
    writeln!(writer, "months: {}", span.months)?;
    writeln!(writer, "weeks: {}", span.weeks)?;
    writeln!(writer, "days: {}", span.days)?;
    writeln!(writer, "formatted: {:?}", span.to_string())?;
    Ok(())
}
