use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::{WorkbookReader, WorkbookReaderError};
use crate::domain::{ExtractionResult, LineItem, Metadata, ProductHeaders};

use super::extraction_rules::ExtractionRules;
use super::header_rules::{HeaderRule, default_header_rules};
use super::header_scan::scan_header_window;
use super::line_items::{LineItemRules, extract_line_items};
use super::payload::decode_payload;
use super::rendering::{render_full_text, render_order_text};
use super::totals::total_sum;

const NO_FILE_MESSAGE: &str = r#"No se recibió archivo. Envía { "file": "base64_aqui" }"#;

/// Turns an uploaded spreadsheet into an order document for the language model.
pub struct OrderExtractionService<R>
where
    R: WorkbookReader,
{
    reader: Arc<R>,
    rules: ExtractionRules,
    header_rules: Vec<Box<dyn HeaderRule>>,
}

impl<R> OrderExtractionService<R>
where
    R: WorkbookReader,
{
    pub fn new(reader: Arc<R>, rules: ExtractionRules) -> Self {
        let header_rules = default_header_rules(&rules);
        Self {
            reader,
            rules,
            header_rules,
        }
    }

    pub fn rules(&self) -> &ExtractionRules {
        &self.rules
    }

    pub fn extract(&self, payload: Option<&str>) -> Result<ExtractionResult, ExtractionError> {
        let payload = payload
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(ExtractionError::no_file)?;

        let data = decode_payload(payload)?;
        tracing::debug!(bytes = data.len(), "Spreadsheet payload decoded");

        self.extract_bytes(&data)
    }

    pub fn extract_bytes(&self, data: &[u8]) -> Result<ExtractionResult, ExtractionError> {
        let worksheet = self.reader.read_first_sheet(data)?;
        if worksheet.sheet.is_empty() {
            return Err(ExtractionError::EmptySheet);
        }

        let sheet = &worksheet.sheet;
        let scan = scan_header_window(sheet, self.rules.header_scan_rows, &self.header_rules);

        let (headers, line_items, header_row) = match scan.table {
            Some(table) => {
                if !self
                    .rules
                    .acceptance_columns
                    .iter()
                    .any(|column| table.headers.contains(column))
                {
                    tracing::warn!(
                        header_row = table.row,
                        columns = ?table.headers.names(),
                        "Product table has no acceptance column; no line items will be accepted"
                    );
                }

                let items = extract_line_items(
                    sheet,
                    &table,
                    LineItemRules {
                        acceptance_columns: &self.rules.acceptance_columns,
                        instructions_min_length: self.rules.instructions_min_length,
                    },
                );
                (table.headers, items, Some(table.row))
            }
            None => {
                tracing::debug!(rows = sheet.len(), "No product table header in scan window");
                (ProductHeaders::default(), Vec::<LineItem>::new(), None)
            }
        };

        let total_sum = total_sum(&headers, &line_items);

        tracing::info!(
            sheet = %worksheet.name,
            format = %worksheet.format,
            rows = sheet.len(),
            header_row = ?header_row,
            line_items = line_items.len(),
            "Order extracted"
        );

        Ok(ExtractionResult {
            order_text: render_order_text(&scan.info, &line_items),
            full_text: render_full_text(sheet),
            metadata: Metadata {
                total_rows: sheet.len(),
                total_line_items: line_items.len(),
                columns: headers.names(),
                sheet_name: worksheet.name.clone(),
                format: worksheet.format,
                header_row,
                total_sum,
                timestamp: Utc::now(),
            },
            header: scan.info,
            line_items,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("El archivo Excel no contiene hojas")]
    EmptyWorkbook,
    #[error("La hoja Excel está vacía")]
    EmptySheet,
    #[error("{0}")]
    ParseFailure(String),
}

impl ExtractionError {
    pub fn no_file() -> Self {
        Self::InvalidInput(NO_FILE_MESSAGE.to_string())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "InvalidInput",
            Self::EmptyWorkbook => "EmptyWorkbook",
            Self::EmptySheet => "EmptySheet",
            Self::ParseFailure(_) => "ParseFailure",
        }
    }

    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::ParseFailure(_))
    }
}

impl From<WorkbookReaderError> for ExtractionError {
    fn from(err: WorkbookReaderError) -> Self {
        match err {
            WorkbookReaderError::NoSheets => Self::EmptyWorkbook,
            WorkbookReaderError::Unreadable(message) => Self::ParseFailure(message),
        }
    }
}
