//! CSV export of the history list
//!
//! One header row plus one row per saved appraisal. Field quoting and
//! delimiter escaping are handled by the csv writer.

use crate::error::{Error, Result};
use crate::types::HistoryEntry;
use std::io::Write;
use std::path::Path;

const HEADERS: [&str; 10] = [
    "timestamp",
    "currency",
    "description",
    "subtotal",
    "labor_cost",
    "total_cost",
    "quoted_price",
    "pct_materials",
    "pct_total",
    "diagnosis",
];

fn write_rows<W: Write>(writer: &mut ::csv::Writer<W>, entries: &[HistoryEntry]) -> Result<()> {
    writer.write_record(HEADERS)?;
    for entry in entries {
        writer.write_record([
            entry.saved_at.to_rfc3339(),
            entry.currency.clone(),
            entry.description.clone(),
            format!("{:.2}", entry.subtotal),
            format!("{:.2}", entry.labor_cost),
            format!("{:.2}", entry.total_cost),
            format!("{:.2}", entry.quoted_price),
            format!("{:.1}", entry.pct_materials),
            format!("{:.1}", entry.pct_total),
            entry.diagnosis.clone(),
        ])?;
    }
    writer.flush().map_err(Error::Io)?;
    Ok(())
}

/// Write the history list as CSV to a file
pub fn write_history_csv(entries: &[HistoryEntry], output_path: &Path) -> Result<()> {
    let mut writer = ::csv::Writer::from_path(output_path)?;
    write_rows(&mut writer, entries)
}

/// Render the history list as an in-memory CSV string
pub fn history_to_csv_string(entries: &[HistoryEntry]) -> Result<String> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    write_rows(&mut writer, entries)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AppraisalContext, AppraisalSnapshot, HistoryEntry};

    fn entry(description: &str) -> HistoryEntry {
        let snapshot = AppraisalSnapshot {
            subtotal: 1000.0,
            total_weight_grams: 12.0,
            labor_cost: 90.0,
            total_cost: 1090.0,
            pct_materials: 71.4,
            pct_total: 77.9,
            overage_pct: 28.4,
            diagnosis: Some(crate::types::Diagnosis::PossiblyOvervalued),
            alerts: Vec::new(),
            line_costs: Vec::new(),
        };
        let mut context = AppraisalContext::default();
        context.quoted_price = 1400.0;
        HistoryEntry::from_snapshot(&context, &snapshot, description.to_string())
    }

    #[test]
    fn test_header_and_row_count() {
        let entries = vec![entry("ring"), entry("chain")];
        let csv = history_to_csv_string(&entries).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("timestamp,currency,description"));
        assert!(lines[1].contains("1090.00"));
        assert!(lines[1].contains("possibly overvalued"));
    }

    #[test]
    fn test_embedded_quotes_and_commas_escaped() {
        let entries = vec![entry(r#"18k "estate" ring, sized"#)];
        let csv = history_to_csv_string(&entries).unwrap();
        // Quoted field with doubled inner quotes
        assert!(csv.contains(r#""18k ""estate"" ring, sized""#));

        // Round-trips through a csv reader
        let mut reader = ::csv::Reader::from_reader(csv.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[2], r#"18k "estate" ring, sized"#);
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        write_history_csv(&[entry("ring")], &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("ring"));
    }
}
