mod extraction_rules;
mod header_rules;
mod header_scan;
mod line_items;
mod order_extraction_service;
mod payload;
mod rendering;
mod table_detection;
mod totals;

pub use extraction_rules::ExtractionRules;
pub use header_rules::{
    DateRule, HeaderRule, OrderNumberRule, PartyRule, ScanRow, apply_header_rules,
    default_header_rules,
};
pub use header_scan::{HeaderScan, scan_header_window};
pub use line_items::{LineItemRules, extract_line_items};
pub use order_extraction_service::{ExtractionError, OrderExtractionService};
pub use payload::decode_payload;
pub use rendering::{format_field_value, render_full_text, render_order_text};
pub use table_detection::{DetectedTable, TableSignals, detect_table_header};
pub use totals::{find_total_column, parse_leading_number, total_sum};
