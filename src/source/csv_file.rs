// src/source/csv_file.rs

use crate::source::{RowSource, SourceError};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::PathBuf;
use tracing::info;

/// A CSV export of the listing sheet, header row first.
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RowSource for CsvSource {
    fn fetch_rows(&self) -> Result<Vec<Vec<String>>, SourceError> {
        let file = File::open(&self.path)
            .map_err(|e| SourceError::Io(format!("{}: {e}", self.path.display())))?;

        // The header is returned as an ordinary row so that column lookup
        // stays in one place.
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| SourceError::Csv(e.to_string()))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        info!(rows = rows.len(), path = %self.path.display(), "csv rows loaded");
        Ok(rows)
    }
}
