use crate::domain::Worksheet;

/// Parses spreadsheet bytes and returns the first worksheet by position.
pub trait WorkbookReader: Send + Sync {
    fn read_first_sheet(&self, data: &[u8]) -> Result<Worksheet, WorkbookReaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WorkbookReaderError {
    #[error("workbook has no sheets")]
    NoSheets,
    #[error("unreadable workbook: {0}")]
    Unreadable(String),
}
