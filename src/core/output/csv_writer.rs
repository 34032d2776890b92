//! CSV output writer.

use std::fs::File;
use std::io::Write;

use super::PersonReport;
use crate::error::Result;

/// Writes the report to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Name`, `Messages`, `Words`, `Characters`, then one column per
///   keyword (taken from the first row)
/// - Encoding: UTF-8
pub fn write_csv(report: &[PersonReport], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_to(report, file)
}

/// Converts the report to a CSV string.
pub fn to_csv(report: &[PersonReport]) -> Result<String> {
    let mut buffer = Vec::new();
    write_to(report, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_to<W: Write>(report: &[PersonReport], sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(build_header(report))?;
    for row in report {
        writer.write_record(build_record(row))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_header(report: &[PersonReport]) -> Vec<String> {
    let mut header: Vec<String> = ["Name", "Messages", "Words", "Characters"]
        .iter()
        .map(ToString::to_string)
        .collect();
    if let Some(first) = report.first() {
        header.extend(first.keywords.keywords().map(str::to_string));
    }
    header
}

fn build_record(row: &PersonReport) -> Vec<String> {
    let mut record = vec![
        row.name.clone(),
        row.messages.to_string(),
        row.words.to_string(),
        row.characters.to_string(),
    ];
    record.extend(row.keywords.iter().map(|(_, count)| count.to_string()));
    record
}

#[cfg(test)]
mod tests {
    use super::super::test_support::sample_report;
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_to_csv_header_and_rows() {
        let csv = to_csv(&sample_report()).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "Name;Messages;Words;Characters;hello;blah");
        assert_eq!(lines[1], "Alice;2;3;15;1;1");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_to_csv_quotes_delimiter_in_name() {
        let mut report = sample_report();
        report[1].name = "Bob; Jr".into();
        let csv = to_csv(&report).unwrap();
        assert!(csv.contains("\"Bob; Jr\""));
    }

    #[test]
    fn test_to_csv_empty_report() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(csv.trim(), "Name;Messages;Words;Characters");
    }

    #[test]
    fn test_write_csv_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_csv(&sample_report(), path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with("Name;Messages"));
        assert!(content.contains("Bob;1;2;12;1;0"));
    }

    #[test]
    fn test_write_csv_bad_path() {
        let err = write_csv(&sample_report(), "/nonexistent/dir/report.csv").unwrap_err();
        assert!(err.is_io());
    }
}
