use crate::application::ports::{WorkbookReader, WorkbookReaderError};
use crate::domain::{RawSheet, SpreadsheetFormat, Worksheet};

pub struct MockWorkbookReader {
    worksheet: Option<Worksheet>,
}

impl MockWorkbookReader {
    pub fn with_rows(rows: Vec<Vec<&str>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(String::from).collect())
            .collect();

        Self {
            worksheet: Some(Worksheet::new(
                "Hoja1".to_string(),
                SpreadsheetFormat::Xlsx,
                RawSheet::new(rows),
            )),
        }
    }

    pub fn without_sheets() -> Self {
        Self { worksheet: None }
    }
}

impl WorkbookReader for MockWorkbookReader {
    fn read_first_sheet(&self, _data: &[u8]) -> Result<Worksheet, WorkbookReaderError> {
        self.worksheet.clone().ok_or(WorkbookReaderError::NoSheets)
    }
}
