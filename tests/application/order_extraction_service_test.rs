use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use pedidos::application::services::{ExtractionError, ExtractionRules, OrderExtractionService};
use pedidos::domain::SpreadsheetFormat;
use pedidos::infrastructure::spreadsheet::MockWorkbookReader;

use crate::helpers::order_fixture::{ORDER_NON_EMPTY_ROWS, order_rows};

fn service(reader: MockWorkbookReader) -> OrderExtractionService<MockWorkbookReader> {
    OrderExtractionService::new(Arc::new(reader), ExtractionRules::default())
}

fn any_payload() -> String {
    STANDARD.encode(b"ignored by the mock reader")
}

#[test]
fn given_order_sheet_when_extracting_then_builds_full_result() {
    let service = service(MockWorkbookReader::with_rows(order_rows()));

    let result = service.extract(Some(&any_payload())).unwrap();

    assert_eq!(result.header.order_number.as_deref(), Some("4521"));
    assert_eq!(result.header.date.as_deref(), Some("03/11/2024"));
    assert_eq!(result.header.client.as_deref(), Some("Ferretería García e Hijos S.A."));
    assert_eq!(result.header.address.as_deref(), Some("Calle Mayor 12, 28013 Madrid"));
    assert_eq!(result.line_items.len(), 3);
    assert_eq!(result.line_items[2].get("REFERENCIA"), Some("C-300"));
    assert_eq!(result.metadata.total_rows, 19);
    assert_eq!(result.metadata.total_line_items, 3);
    assert_eq!(result.metadata.header_row, Some(12));
    assert_eq!(
        result.metadata.columns,
        vec!["REFERENCIA", "DESCRIPCION", "CANTIDAD", "PRECIO", "TOTAL"]
    );
    assert_eq!(result.metadata.total_sum.as_deref(), Some("35.75"));
    assert_eq!(result.metadata.sheet_name, "Hoja1");
    assert_eq!(result.metadata.format, SpreadsheetFormat::Xlsx);
    assert_eq!(result.full_text.lines().count(), ORDER_NON_EMPTY_ROWS);
    assert!(result.order_text.contains("--- Línea 3 ---"));
    assert!(!result.order_text.contains("D-400"));
}

#[test]
fn given_missing_payload_when_extracting_then_returns_invalid_input() {
    let service = service(MockWorkbookReader::with_rows(order_rows()));

    assert!(matches!(
        service.extract(None),
        Err(ExtractionError::InvalidInput(_))
    ));
    assert!(matches!(
        service.extract(Some("   ")),
        Err(ExtractionError::InvalidInput(_))
    ));
}

#[test]
fn given_workbook_without_sheets_when_extracting_then_returns_empty_workbook() {
    let service = service(MockWorkbookReader::without_sheets());

    let err = service.extract(Some(&any_payload())).unwrap_err();

    assert!(matches!(err, ExtractionError::EmptyWorkbook));
    assert!(err.to_string().contains("no contiene hojas"));
    assert!(err.is_client_error());
}

#[test]
fn given_sheet_without_rows_when_extracting_then_returns_empty_sheet() {
    let service = service(MockWorkbookReader::with_rows(Vec::new()));

    let err = service.extract(Some(&any_payload())).unwrap_err();

    assert!(matches!(err, ExtractionError::EmptySheet));
}

#[test]
fn given_sheet_without_table_when_extracting_then_returns_metadata_only() {
    let service = service(MockWorkbookReader::with_rows(vec![
        vec!["Pedido Nº: 88"],
        vec!["Notas sueltas", "sin tabla"],
    ]));

    let result = service.extract(Some(&any_payload())).unwrap();

    assert_eq!(result.header.order_number.as_deref(), Some("88"));
    assert!(result.line_items.is_empty());
    assert!(result.metadata.columns.is_empty());
    assert_eq!(result.metadata.header_row, None);
    assert_eq!(result.metadata.total_sum, None);
    assert_eq!(result.full_text, "Fila 1: Pedido Nº: 88\nFila 2: Notas sueltas | sin tabla");
}

#[test]
fn given_result_when_serializing_then_uses_response_field_names() {
    let service = service(MockWorkbookReader::with_rows(order_rows()));
    let result = service.extract(Some(&any_payload())).unwrap();

    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["informacion_pedido"]["numero_pedido"], "4521");
    assert_eq!(json["lineas_productos"][0]["REFERENCIA"], "A-100");
    assert_eq!(json["metadata"]["total_lineas"], 3);
    assert_eq!(json["metadata"]["formato_archivo"], "xlsx");
    assert_eq!(json["metadata"]["suma_total"], "35.75");
    assert!(json["pedido_texto"].is_string());
    assert!(json["contenido_completo"].is_string());
}

#[test]
fn given_error_kinds_when_classifying_then_only_parse_failure_is_server_error() {
    assert!(ExtractionError::no_file().is_client_error());
    assert!(ExtractionError::EmptySheet.is_client_error());
    assert!(!ExtractionError::ParseFailure("boom".to_string()).is_client_error());
    assert_eq!(ExtractionError::ParseFailure("boom".to_string()).kind(), "ParseFailure");
}
