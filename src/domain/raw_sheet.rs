/// Blank cells are kept as empty strings so column positions stay aligned
/// with the header row of the product table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSheet {
    rows: Vec<Vec<String>>,
}

impl RawSheet {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<Vec<String>>> for RawSheet {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::new(rows)
    }
}
