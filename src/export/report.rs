//! Printable history report
//!
//! Fixed-column plain-text rendering of the saved history, paginated for
//! printing. Only the first `REPORT_MAX_ENTRIES` entries are included.

use crate::types::HistoryEntry;

/// Printable report covers at most this many entries
pub const REPORT_MAX_ENTRIES: usize = 80;

/// Data rows per printed page
pub const ROWS_PER_PAGE: usize = 20;

const RULE_WIDTH: usize = 96;

/// Truncate a string to max length, adding ".." if truncated
fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

fn page_header(report: &mut String, page: usize, page_count: usize) {
    report.push_str(&"=".repeat(RULE_WIDTH));
    report.push('\n');
    report.push_str(&format!(
        "{:^width$}\n",
        "Appraisal History Report",
        width = RULE_WIDTH
    ));
    report.push_str(&format!(
        "{:^width$}\n",
        format!("Page {}/{}", page, page_count),
        width = RULE_WIDTH
    ));
    report.push_str(&"=".repeat(RULE_WIDTH));
    report.push('\n');
    report.push_str(&format!(
        "{:<17} {:<4} {:<22} {:>10} {:>8} {:>10} {:>10} {:<}\n",
        "Date", "Cur", "Description", "Subtotal", "Labor", "Total", "Quoted", "Diagnosis"
    ));
    report.push_str(&"-".repeat(RULE_WIDTH));
    report.push('\n');
}

/// Render the history list as a paginated fixed-column report
pub fn render_history_report(entries: &[HistoryEntry]) -> String {
    let entries = &entries[..entries.len().min(REPORT_MAX_ENTRIES)];

    let mut report = String::new();
    if entries.is_empty() {
        page_header(&mut report, 1, 1);
        report.push_str("(no saved appraisals)\n");
        return report;
    }

    let page_count = entries.len().div_ceil(ROWS_PER_PAGE);
    for (page_index, page_entries) in entries.chunks(ROWS_PER_PAGE).enumerate() {
        page_header(&mut report, page_index + 1, page_count);
        for entry in page_entries {
            let date = entry.saved_at.format("%Y-%m-%d %H:%M").to_string();
            report.push_str(&format!(
                "{:<17} {:<4} {:<22} {:>10.2} {:>8.2} {:>10.2} {:>10.2} {:<}\n",
                date,
                truncate_str(&entry.currency, 4),
                truncate_str(&entry.description, 22),
                entry.subtotal,
                entry.labor_cost,
                entry.total_cost,
                entry.quoted_price,
                entry.diagnosis
            ));
        }
        report.push('\n');
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AppraisalContext, AppraisalSnapshot};

    fn entry(description: &str) -> HistoryEntry {
        let snapshot = AppraisalSnapshot {
            subtotal: 250.0,
            total_weight_grams: 8.0,
            labor_cost: 60.0,
            total_cost: 310.0,
            pct_materials: 60.0,
            pct_total: 75.0,
            overage_pct: 30.0,
            diagnosis: Some(crate::types::Diagnosis::PossiblyOvervalued),
            alerts: Vec::new(),
            line_costs: Vec::new(),
        };
        HistoryEntry::from_snapshot(
            &AppraisalContext::default(),
            &snapshot,
            description.to_string(),
        )
    }

    #[test]
    fn test_empty_history() {
        let report = render_history_report(&[]);
        assert!(report.contains("Page 1/1"));
        assert!(report.contains("(no saved appraisals)"));
    }

    #[test]
    fn test_single_page() {
        let entries: Vec<_> = (0..5).map(|i| entry(&format!("piece {}", i))).collect();
        let report = render_history_report(&entries);
        assert!(report.contains("Page 1/1"));
        assert!(report.contains("piece 0"));
        assert!(report.contains("310.00"));
    }

    #[test]
    fn test_pagination_and_entry_cap() {
        let entries: Vec<_> = (0..120).map(|i| entry(&format!("piece {}", i))).collect();
        let report = render_history_report(&entries);
        // Only the first 80 entries, 20 per page
        assert!(report.contains("Page 1/4"));
        assert!(report.contains("Page 4/4"));
        assert!(!report.contains("Page 5/"));
        assert!(report.contains("piece 79"));
        assert!(!report.contains("piece 80 "));
    }

    #[test]
    fn test_long_description_truncated() {
        let report = render_history_report(&[entry(
            "an unusually long description of a gold filigree bracelet",
        )]);
        assert!(report.contains(".."));
        assert!(!report.contains("filigree bracelet"));
    }
}
