use std::ops::RangeInclusive;

const DEFAULT_HEADER_SCAN_ROWS: usize = 20;
const DEFAULT_CLIENT_ROWS: RangeInclusive<usize> = 7..=11;
const DEFAULT_INSTRUCTIONS_MIN_LENGTH: usize = 50;

/// Tunables of the order heuristics. Defaults match the order template the
/// heuristics were written for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRules {
    pub header_scan_rows: usize,
    pub client_rows: RangeInclusive<usize>,
    /// Our own company name, never taken as the client.
    pub company_name: Option<String>,
    pub page_markers: Vec<String>,
    pub acceptance_columns: Vec<String>,
    pub instructions_min_length: usize,
}

impl Default for ExtractionRules {
    fn default() -> Self {
        Self {
            header_scan_rows: DEFAULT_HEADER_SCAN_ROWS,
            client_rows: DEFAULT_CLIENT_ROWS,
            company_name: None,
            page_markers: vec!["página".to_string(), "pagina".to_string()],
            acceptance_columns: vec!["REFERENCIA".to_string(), "DESCRIPCION".to_string()],
            instructions_min_length: DEFAULT_INSTRUCTIONS_MIN_LENGTH,
        }
    }
}
