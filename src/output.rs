use anyhow::{Context, Result};
use std::io::Write;

/// Write the rendered block followed by exactly one newline, then flush.
pub fn emit(writer: &mut impl Write, block: &str) -> Result<()> {
    writeln!(writer, "{block}").context("Could not write output")?;
    writer.flush().context("Could not flush output")?;
    Ok(())
}
