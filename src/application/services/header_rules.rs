use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{HeaderField, HeaderInfo};

use super::extraction_rules::ExtractionRules;

static ORDER_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)pedido\s*n[º°]?\s*:?\s*(\d+)").unwrap());

static DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2}/\d{1,2}/\d{2,4})").unwrap());

const CLIENT_MIN_LENGTH: usize = 10;
const ADDRESS_MIN_LENGTH: usize = 5;

#[derive(Debug, Clone)]
pub struct ScanRow<'a> {
    pub index: usize,
    pub text: &'a str,
    pub lower: &'a str,
}

impl ScanRow<'_> {
    fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A predicate + extractor pair filling one header field from one row.
pub trait HeaderRule: Send + Sync {
    fn target(&self, row: &ScanRow<'_>, info: &HeaderInfo) -> Option<HeaderField>;

    fn extract(&self, row: &ScanRow<'_>) -> Option<String>;
}

pub struct OrderNumberRule;

impl HeaderRule for OrderNumberRule {
    fn target(&self, row: &ScanRow<'_>, info: &HeaderInfo) -> Option<HeaderField> {
        (!info.is_set(HeaderField::OrderNumber) && row.lower.contains("pedido"))
            .then_some(HeaderField::OrderNumber)
    }

    fn extract(&self, row: &ScanRow<'_>) -> Option<String> {
        ORDER_NUMBER
            .captures(row.text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

pub struct DateRule;

impl HeaderRule for DateRule {
    fn target(&self, row: &ScanRow<'_>, info: &HeaderInfo) -> Option<HeaderField> {
        (!info.is_set(HeaderField::Date) && row.lower.contains("fecha")).then_some(HeaderField::Date)
    }

    fn extract(&self, row: &ScanRow<'_>) -> Option<String> {
        DATE.captures(row.text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

/// Positional client/address rule: the first eligible row of the client
/// block is the client, the next one the delivery address.
pub struct PartyRule {
    rows: RangeInclusive<usize>,
    excluded: Vec<String>,
}

impl PartyRule {
    pub fn new(rules: &ExtractionRules) -> Self {
        let mut excluded = vec!["fecha".to_string(), "pedido".to_string()];
        excluded.extend(
            rules
                .company_name
                .iter()
                .chain(rules.page_markers.iter())
                .map(|token| token.trim().to_lowercase())
                .filter(|token| !token.is_empty()),
        );

        Self {
            rows: rules.client_rows.clone(),
            excluded,
        }
    }

    fn is_eligible(&self, row: &ScanRow<'_>) -> bool {
        self.rows.contains(&row.index)
            && row.char_len() > CLIENT_MIN_LENGTH
            && !self.excluded.iter().any(|token| row.lower.contains(token))
    }
}

impl HeaderRule for PartyRule {
    fn target(&self, row: &ScanRow<'_>, info: &HeaderInfo) -> Option<HeaderField> {
        if !self.is_eligible(row) {
            return None;
        }

        if !info.is_set(HeaderField::Client) {
            Some(HeaderField::Client)
        } else if !info.is_set(HeaderField::Address) && row.char_len() > ADDRESS_MIN_LENGTH {
            Some(HeaderField::Address)
        } else {
            None
        }
    }

    fn extract(&self, row: &ScanRow<'_>) -> Option<String> {
        Some(row.text.to_string())
    }
}

pub fn default_header_rules(rules: &ExtractionRules) -> Vec<Box<dyn HeaderRule>> {
    vec![
        Box::new(OrderNumberRule),
        Box::new(DateRule),
        Box::new(PartyRule::new(rules)),
    ]
}

pub fn apply_header_rules(rules: &[Box<dyn HeaderRule>], row: &ScanRow<'_>, info: &mut HeaderInfo) {
    for rule in rules {
        let Some(field) = rule.target(row, info) else {
            continue;
        };
        if let Some(value) = rule.extract(row) {
            info.set_once(field, value);
        }
    }
}
