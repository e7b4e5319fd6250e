// src/source/rows.rs

use crate::domain::listing::{columns, RawRecord};
use crate::source::SourceError;

/// Maps a header-first grid of cells onto records by column name.
///
/// Short rows are padded with empty cells, since the Sheets API drops
/// trailing blanks. An empty grid (or a lone header) yields no records.
pub fn records_from_rows(rows: &[Vec<String>]) -> Result<Vec<RawRecord>, SourceError> {
    let Some((header, data)) = rows.split_first() else {
        return Ok(Vec::new());
    };

    let index = |name: &'static str| -> Result<usize, SourceError> {
        header
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(SourceError::MissingColumn(name))
    };

    let address = index(columns::ADDRESS)?;
    let rent = index(columns::RENT)?;
    let latitude = index(columns::LATITUDE)?;
    let longitude = index(columns::LONGITUDE)?;
    let layout = index(columns::LAYOUT)?;
    let floor = index(columns::FLOOR)?;
    let building_age = index(columns::BUILDING_AGE)?;
    let url = index(columns::URL)?;
    let transit_bucket = index(columns::TRANSIT_BUCKET)?;
    let price_bucket = index(columns::PRICE_BUCKET)?;

    let records = data
        .iter()
        .map(|row| {
            let cell = |i: usize| row.get(i).cloned().unwrap_or_default();
            RawRecord {
                address: cell(address),
                rent: cell(rent),
                latitude: cell(latitude),
                longitude: cell(longitude),
                layout: cell(layout),
                floor: cell(floor),
                building_age: cell(building_age),
                url: cell(url),
                transit_bucket: cell(transit_bucket),
                price_bucket: cell(price_bucket),
            }
        })
        .collect();

    Ok(records)
}
