use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{LineItem, ProductHeaders};

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").unwrap()
});

const TOTAL_COLUMN_TOKENS: [&str; 2] = ["total", "importe"];

/// Lenient number parsing: the longest leading decimal literal, ignoring
/// leading whitespace. `"12.5 EUR"` is 12.5, `"EUR 12"` is `None`.
pub fn parse_leading_number(raw: &str) -> Option<f64> {
    LEADING_NUMBER
        .find(raw.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

pub fn find_total_column(headers: &ProductHeaders) -> Option<&str> {
    headers
        .iter()
        .map(|header| header.name.as_str())
        .find(|name| {
            let lower = name.to_lowercase();
            TOTAL_COLUMN_TOKENS.iter().any(|token| lower.contains(token))
        })
}

/// Sum of the total column over all items, with two decimals. Values that
/// are missing or not numeric count as zero.
pub fn total_sum(headers: &ProductHeaders, items: &[LineItem]) -> Option<String> {
    let column = find_total_column(headers)?;
    if items.is_empty() {
        return None;
    }

    let sum: f64 = items
        .iter()
        .map(|item| item.get(column).and_then(parse_leading_number).unwrap_or(0.0))
        .sum();

    Some(format!("{sum:.2}"))
}
