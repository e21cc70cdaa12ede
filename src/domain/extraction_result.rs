use chrono::{DateTime, Utc};
use serde::Serialize;

use super::header_info::HeaderInfo;
use super::line_item::LineItem;
use super::spreadsheet_format::SpreadsheetFormat;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    #[serde(rename = "total_filas")]
    pub total_rows: usize,
    #[serde(rename = "total_lineas")]
    pub total_line_items: usize,
    #[serde(rename = "columnas")]
    pub columns: Vec<String>,
    #[serde(rename = "nombre_hoja")]
    pub sheet_name: String,
    #[serde(rename = "formato_archivo")]
    pub format: SpreadsheetFormat,
    #[serde(rename = "fila_encabezado")]
    pub header_row: Option<usize>,
    #[serde(rename = "suma_total")]
    pub total_sum: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionResult {
    #[serde(rename = "informacion_pedido")]
    pub header: HeaderInfo,
    #[serde(rename = "lineas_productos")]
    pub line_items: Vec<LineItem>,
    #[serde(rename = "pedido_texto")]
    pub order_text: String,
    #[serde(rename = "contenido_completo")]
    pub full_text: String,
    pub metadata: Metadata,
}
