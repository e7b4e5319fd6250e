mod csv_file;
mod rows;
mod sheets;
mod source_error;

pub use csv_file::CsvSource;
pub use rows::records_from_rows;
pub use sheets::{SheetsAuth, SheetsSource, DEFAULT_BASE_URL};
pub use source_error::SourceError;

use crate::domain::RawRecord;

/// Where listing rows come from. One call returns the whole grid, header
/// row first, or fails as a unit.
pub trait RowSource: Send + Sync {
    fn fetch_rows(&self) -> Result<Vec<Vec<String>>, SourceError>;

    fn fetch_records(&self) -> Result<Vec<RawRecord>, SourceError> {
        records_from_rows(&self.fetch_rows()?)
    }
}

