//! JSON output writer.

use std::fs::File;
use std::io::{BufWriter, Write};

use super::PersonReport;
use crate::error::Result;

/// Writes the report as a pretty-printed JSON array.
///
/// ```json
/// [
///   { "name": "Alice", "messages": 2, "words": 3, "characters": 15, "keywords": { "hello": 1 } }
/// ]
/// ```
///
/// `keywords` is omitted when no keywords were requested.
pub fn write_json(report: &[PersonReport], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Converts the report to a pretty-printed JSON string.
pub fn to_json(report: &[PersonReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
