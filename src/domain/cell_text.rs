/// Trims a cell value and collapses every internal whitespace run to a single space.
pub fn clean_cell_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_was_space = false;

    for ch in raw.trim().chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                out.push(' ');
                prev_was_space = true;
            }
        } else {
            out.push(ch);
            prev_was_space = false;
        }
    }

    out
}

pub fn cleaned_cells(row: &[String]) -> Vec<String> {
    row.iter().map(|cell| clean_cell_text(cell)).collect()
}

pub fn row_text(row: &[String]) -> String {
    row.iter()
        .map(|cell| clean_cell_text(cell))
        .filter(|cell| !cell.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn non_empty_cell_count(row: &[String]) -> usize {
    row.iter()
        .filter(|cell| !clean_cell_text(cell).is_empty())
        .count()
}
