use pedidos::application::services::{format_field_value, render_full_text, render_order_text};
use pedidos::domain::{HeaderInfo, LineItem, RawSheet};

use crate::helpers::order_fixture::{ORDER_NON_EMPTY_ROWS, ORDER_ROWS, owned_rows};

#[test]
fn given_sheet_when_rendering_full_text_then_one_line_per_non_empty_row_in_order() {
    let sheet = RawSheet::new(owned_rows(ORDER_ROWS));

    let text = render_full_text(&sheet);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), ORDER_NON_EMPTY_ROWS);
    assert_eq!(lines[0], "Fila 1: SUMINISTROS DEMO S.L.");
    assert_eq!(lines[1], "Fila 2: Pedido Nº: 4521");
    assert_eq!(
        lines[6],
        "Fila 13: REFERENCIA | DESCRIPCION | CANTIDAD | PRECIO | TOTAL"
    );
    assert_eq!(lines[11], "Fila 19: D-400 | Brida | 1 | 1 | 1");
}

#[test]
fn given_row_with_leading_blank_cells_when_rendering_full_text_then_keeps_positions() {
    let sheet = RawSheet::new(owned_rows(&[&["", "Total:", "", "35.75", "", ""]]));

    assert_eq!(render_full_text(&sheet), "Fila 1:  | Total: |  | 35.75");
}

#[test]
fn given_header_and_items_when_rendering_order_text_then_labels_everything() {
    let info = HeaderInfo {
        order_number: Some("4521".to_string()),
        date: Some("03/11/2024".to_string()),
        ..HeaderInfo::default()
    };
    let items: Vec<LineItem> = vec![
        [("REFERENCIA", "A-1"), ("PRECIO", "2.5"), ("TOTAL", "20")]
            .into_iter()
            .collect(),
    ];

    let text = render_order_text(&info, &items);

    assert!(text.starts_with("=== INFORMACIÓN DEL PEDIDO ===\n\n"));
    assert!(text.contains("Número de pedido: 4521\n"));
    assert!(text.contains("Fecha: 03/11/2024\n"));
    assert!(!text.contains("Cliente:"));
    assert!(text.contains("=== LÍNEAS DE PRODUCTOS (1) ==="));
    assert!(text.contains("--- Línea 1 ---\n  REFERENCIA: A-1\n  PRECIO: 2.50\n  TOTAL: 20.00\n"));
}

#[test]
fn given_no_items_when_rendering_order_text_then_says_so() {
    let text = render_order_text(&HeaderInfo::default(), &[]);

    assert!(text.contains("(sin datos de cabecera detectados)"));
    assert!(text.contains("(sin líneas de productos detectadas)"));
}

#[test]
fn given_money_keys_when_formatting_then_numeric_values_get_two_decimals() {
    assert_eq!(format_field_value("Precio unitario", "3"), "3.00");
    assert_eq!(format_field_value("IMPORTE", " 12.345 "), "12.35");
    assert_eq!(format_field_value("total", "abc"), "abc");
}

#[test]
fn given_other_keys_when_formatting_then_values_unchanged() {
    assert_eq!(format_field_value("CANTIDAD", "3"), "3");
}
