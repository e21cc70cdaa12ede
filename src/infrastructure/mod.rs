pub mod observability;
pub mod spreadsheet;
