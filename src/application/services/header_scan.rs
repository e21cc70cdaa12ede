use crate::domain::{HeaderInfo, RawSheet, row_text};

use super::header_rules::{HeaderRule, ScanRow, apply_header_rules};
use super::table_detection::{DetectedTable, detect_table_header};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderScan {
    pub info: HeaderInfo,
    pub table: Option<DetectedTable>,
}

/// Scans the first `window` rows. Header rules see each row before the table
/// check; the scan ends at the first table header row.
pub fn scan_header_window(
    sheet: &RawSheet,
    window: usize,
    rules: &[Box<dyn HeaderRule>],
) -> HeaderScan {
    let mut scan = HeaderScan::default();

    for (index, row) in sheet.rows().iter().take(window).enumerate() {
        let text = row_text(row);
        let lower = text.to_lowercase();
        let scan_row = ScanRow {
            index,
            text: &text,
            lower: &lower,
        };

        apply_header_rules(rules, &scan_row, &mut scan.info);

        if let Some(table) = detect_table_header(index, row) {
            scan.table = Some(table);
            break;
        }
    }

    scan
}
