use crate::domain::{LineItem, RawSheet, clean_cell_text, non_empty_cell_count};

use super::table_detection::DetectedTable;

const INSTRUCTIONS_SENTINEL: &str = "indique";
const MIN_SIGNIFICANT_CELLS: usize = 2;

#[derive(Debug, Clone, Copy)]
pub struct LineItemRules<'a> {
    pub acceptance_columns: &'a [String],
    pub instructions_min_length: usize,
}

/// Product rows below the table header, up to the closing instructions sentence.
///
/// The instructions sentence ends the table even when it sits alone in its
/// row; other rows need two filled cells to count.
pub fn extract_line_items(
    sheet: &RawSheet,
    table: &DetectedTable,
    rules: LineItemRules<'_>,
) -> Vec<LineItem> {
    let mut items = Vec::new();

    for row in sheet.rows().iter().skip(table.row + 1) {
        if is_instructions_row(row, rules.instructions_min_length) {
            break;
        }
        if non_empty_cell_count(row) < MIN_SIGNIFICANT_CELLS {
            continue;
        }

        let item = build_item(row, table);
        if is_accepted(&item, rules.acceptance_columns) {
            items.push(item);
        }
    }

    items
}

fn is_instructions_row(row: &[String], min_length: usize) -> bool {
    let Some(first) = row.first() else {
        return false;
    };
    let first = clean_cell_text(first);

    first.chars().count() > min_length && first.to_lowercase().contains(INSTRUCTIONS_SENTINEL)
}

fn build_item(row: &[String], table: &DetectedTable) -> LineItem {
    table
        .headers
        .iter()
        .filter_map(|header| {
            let value = clean_cell_text(row.get(header.column)?);
            (!value.is_empty()).then(|| (header.name.clone(), value))
        })
        .collect()
}

fn is_accepted(item: &LineItem, acceptance_columns: &[String]) -> bool {
    !item.is_empty()
        && acceptance_columns
            .iter()
            .any(|column| item.get(column).is_some_and(|v| !v.is_empty()))
}
