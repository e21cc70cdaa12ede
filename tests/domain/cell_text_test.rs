use pedidos::domain::{clean_cell_text, cleaned_cells, non_empty_cell_count, row_text};

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[test]
fn given_padded_cell_when_cleaning_then_trims_both_ends() {
    assert_eq!(clean_cell_text("   REFERENCIA \t"), "REFERENCIA");
}

#[test]
fn given_internal_whitespace_runs_when_cleaning_then_collapses_to_single_space() {
    assert_eq!(
        clean_cell_text("Tornillo \n\t  hexagonal   M6"),
        "Tornillo hexagonal M6"
    );
}

#[test]
fn given_whitespace_only_cell_when_cleaning_then_returns_empty() {
    assert_eq!(clean_cell_text(" \n\t "), "");
}

#[test]
fn given_row_with_blanks_when_cleaning_cells_then_keeps_positions() {
    let cells = cleaned_cells(&row(&["A", "  ", " B  "]));
    assert_eq!(cells, vec!["A", "", "B"]);
}

#[test]
fn given_row_with_blanks_when_building_row_text_then_joins_non_empty_with_spaces() {
    let text = row_text(&row(&["Pedido", "", "  Nº:  ", "4521"]));
    assert_eq!(text, "Pedido Nº: 4521");
}

#[test]
fn given_blank_row_when_counting_cells_then_returns_zero() {
    assert_eq!(non_empty_cell_count(&row(&["", " ", "\t"])), 0);
}

#[test]
fn given_mixed_row_when_counting_cells_then_counts_only_filled_ones() {
    assert_eq!(non_empty_cell_count(&row(&["A-1", "", "3"])), 2);
}
