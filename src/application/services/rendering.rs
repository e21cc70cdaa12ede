use crate::domain::{HeaderInfo, LineItem, RawSheet, cleaned_cells};

const CELL_SEPARATOR: &str = " | ";
const MONEY_KEY_TOKENS: [&str; 3] = ["precio", "total", "importe"];

/// Cells are kept up to the last non-empty one so column positions survive.
pub fn render_full_text(sheet: &RawSheet) -> String {
    sheet
        .rows()
        .iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let cells = cleaned_cells(row);
            let last = cells.iter().rposition(|cell| !cell.is_empty())?;
            Some(format!(
                "Fila {}: {}",
                index + 1,
                cells[..=last].join(CELL_SEPARATOR)
            ))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_order_text(info: &HeaderInfo, items: &[LineItem]) -> String {
    let mut text = String::from("=== INFORMACIÓN DEL PEDIDO ===\n\n");

    let labelled = [
        ("Número de pedido", info.order_number.as_deref()),
        ("Fecha", info.date.as_deref()),
        ("Cliente", info.client.as_deref()),
        ("Dirección", info.address.as_deref()),
    ];
    for (label, value) in labelled {
        if let Some(value) = value {
            text.push_str(&format!("{label}: {value}\n"));
        }
    }
    if info.is_empty() {
        text.push_str("(sin datos de cabecera detectados)\n");
    }

    text.push_str(&format!(
        "\n=== LÍNEAS DE PRODUCTOS ({}) ===\n\n",
        items.len()
    ));

    if items.is_empty() {
        text.push_str("(sin líneas de productos detectadas)\n");
        return text;
    }

    for (index, item) in items.iter().enumerate() {
        text.push_str(&format!("--- Línea {} ---\n", index + 1));
        for (key, value) in item.fields() {
            text.push_str(&format!("  {key}: {}\n", format_field_value(key, value)));
        }
        text.push('\n');
    }

    text
}

/// Money-like fields (`precio`, `total`, `importe`) with a numeric value get two decimals.
pub fn format_field_value(key: &str, value: &str) -> String {
    let lower = key.to_lowercase();
    if !MONEY_KEY_TOKENS.iter().any(|token| lower.contains(token)) {
        return value.to_string();
    }

    match value.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => format!("{number:.2}"),
        _ => value.to_string(),
    }
}
