use std::io::{Cursor, Read, Seek};

use calamine::{Data, ExcelDateTime, Range, Reader, Sheets, open_workbook_auto_from_rs};
use chrono::Timelike;

use crate::application::ports::{WorkbookReader, WorkbookReaderError};
use crate::domain::{RawSheet, SpreadsheetFormat, Worksheet};

/// Reads `.xlsx`, `.xls`, `.xlsb` and `.ods` workbooks, detecting the format from the bytes.
pub struct CalamineWorkbookReader;

impl WorkbookReader for CalamineWorkbookReader {
    fn read_first_sheet(&self, data: &[u8]) -> Result<Worksheet, WorkbookReaderError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(data))
            .map_err(|e| WorkbookReaderError::Unreadable(e.to_string()))?;
        let format = format_of(&workbook);

        let name = workbook
            .sheet_names()
            .into_iter()
            .next()
            .ok_or(WorkbookReaderError::NoSheets)?;

        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| WorkbookReaderError::Unreadable(e.to_string()))?;

        tracing::debug!(
            sheet = %name,
            format = %format,
            height = range.height(),
            width = range.width(),
            "Worksheet loaded"
        );

        Ok(Worksheet::new(name, format, range_to_sheet(&range)))
    }
}

fn format_of<RS: Read + Seek>(workbook: &Sheets<RS>) -> SpreadsheetFormat {
    match workbook {
        Sheets::Xlsx(_) => SpreadsheetFormat::Xlsx,
        Sheets::Xls(_) => SpreadsheetFormat::Xls,
        Sheets::Xlsb(_) => SpreadsheetFormat::Xlsb,
        Sheets::Ods(_) => SpreadsheetFormat::Ods,
    }
}

/// Converts the used range into rows anchored at A1; cells above or left of
/// the used range become empty strings.
fn range_to_sheet(range: &Range<Data>) -> RawSheet {
    let Some((start_row, start_column)) = range.start() else {
        return RawSheet::default();
    };
    let leading_columns = start_column as usize;
    let width = leading_columns + range.width();

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(start_row as usize + range.height());
    rows.extend((0..start_row).map(|_| vec![String::new(); width]));

    for cells in range.rows() {
        let mut row = vec![String::new(); leading_columns];
        row.extend(cells.iter().map(cell_to_string));
        rows.push(row);
    }

    RawSheet::new(rows)
}

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) | Data::DateTimeIso(value) | Data::DurationIso(value) => value.clone(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => value.to_string(),
        Data::Bool(true) => "TRUE".to_string(),
        Data::Bool(false) => "FALSE".to_string(),
        Data::DateTime(value) => format_excel_datetime(value),
        Data::Error(error) => error.to_string(),
    }
}

fn format_excel_datetime(value: &ExcelDateTime) -> String {
    if value.is_duration() {
        return value.as_f64().to_string();
    }

    match value.as_datetime() {
        Some(datetime) if datetime.time().num_seconds_from_midnight() == 0 => {
            datetime.format("%d/%m/%Y").to_string()
        }
        Some(datetime) => datetime.format("%d/%m/%Y %H:%M:%S").to_string(),
        None => value.as_f64().to_string(),
    }
}
