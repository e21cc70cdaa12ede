use crate::domain::{ProductHeader, ProductHeaders, cleaned_cells};

const REFERENCE_TOKENS: [&str; 3] = ["REFERENCIA", "CODIGO", "REF"];
const DESCRIPTION_TOKENS: [&str; 3] = ["DESCRIPCION", "PRODUCTO", "ARTICULO"];
const QUANTITY_TOKENS: [&str; 1] = ["CANTIDAD"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSignals {
    pub has_referencia: bool,
    pub has_descripcion: bool,
    pub has_cantidad: bool,
}

impl TableSignals {
    pub fn from_row(row: &[String]) -> Self {
        let upper: Vec<String> = cleaned_cells(row)
            .iter()
            .map(|cell| cell.to_uppercase())
            .collect();
        let mentions = |tokens: &[&str]| {
            upper
                .iter()
                .any(|cell| tokens.iter().any(|token| cell.contains(*token)))
        };

        Self {
            has_referencia: mentions(&REFERENCE_TOKENS[..]),
            has_descripcion: mentions(&DESCRIPTION_TOKENS[..]),
            has_cantidad: mentions(&QUANTITY_TOKENS[..]),
        }
    }

    /// Any two of the three column kinds make a table header.
    pub fn is_table_header(&self) -> bool {
        [self.has_referencia, self.has_descripcion, self.has_cantidad]
            .iter()
            .filter(|flag| **flag)
            .count()
            >= 2
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedTable {
    pub row: usize,
    pub headers: ProductHeaders,
}

pub fn detect_table_header(index: usize, row: &[String]) -> Option<DetectedTable> {
    if !TableSignals::from_row(row).is_table_header() {
        return None;
    }

    let headers = cleaned_cells(row)
        .into_iter()
        .enumerate()
        .filter(|(_, name)| !name.is_empty())
        .map(|(column, name)| ProductHeader { column, name })
        .collect();

    Some(DetectedTable {
        row: index,
        headers: ProductHeaders::new(headers),
    })
}
