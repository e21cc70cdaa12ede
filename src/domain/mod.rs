mod cell_text;
mod extraction_result;
mod header_info;
mod line_item;
mod product_headers;
mod raw_sheet;
mod spreadsheet_format;
mod worksheet;

pub use cell_text::{clean_cell_text, cleaned_cells, non_empty_cell_count, row_text};
pub use extraction_result::{ExtractionResult, Metadata};
pub use header_info::{HeaderField, HeaderInfo};
pub use line_item::LineItem;
pub use product_headers::{ProductHeader, ProductHeaders};
pub use raw_sheet::RawSheet;
pub use spreadsheet_format::SpreadsheetFormat;
pub use worksheet::Worksheet;
