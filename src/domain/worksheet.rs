use super::raw_sheet::RawSheet;
use super::spreadsheet_format::SpreadsheetFormat;

#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    pub name: String,
    pub format: SpreadsheetFormat,
    pub sheet: RawSheet,
}

impl Worksheet {
    pub fn new(name: String, format: SpreadsheetFormat, sheet: RawSheet) -> Self {
        Self {
            name,
            format,
            sheet,
        }
    }
}
