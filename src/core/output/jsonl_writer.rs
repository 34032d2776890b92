//! JSON Lines (JSONL) output writer.

use std::fs::File;
use std::io::{BufWriter, Write};

use super::PersonReport;
use crate::error::Result;

/// Writes the report as JSON Lines, one person per line.
///
/// ```jsonl
/// {"name":"Alice","messages":2,"words":3,"characters":15}
/// {"name":"Bob","messages":1,"words":2,"characters":12}
/// ```
pub fn write_jsonl(report: &[PersonReport], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(report, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts the report to a JSONL string.
pub fn to_jsonl(report: &[PersonReport]) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(report, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(report: &[PersonReport], writer: &mut W) -> Result<()> {
    for row in report {
        serde_json::to_writer(&mut *writer, row)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
