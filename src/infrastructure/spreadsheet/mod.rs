mod calamine_workbook_reader;
mod mock_workbook_reader;

pub use calamine_workbook_reader::{CalamineWorkbookReader, cell_to_string};
pub use mock_workbook_reader::MockWorkbookReader;
