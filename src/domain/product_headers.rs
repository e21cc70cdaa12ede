#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductHeader {
    pub column: usize,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductHeaders(Vec<ProductHeader>);

impl ProductHeaders {
    pub fn new(headers: Vec<ProductHeader>) -> Self {
        Self(headers)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductHeader> {
        self.0.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|h| h.name.clone()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|h| h.name == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
