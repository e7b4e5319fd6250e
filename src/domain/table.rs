// src/domain/table.rs

use crate::domain::listing::{columns, NormalizedRecord};
use serde::Serialize;

pub const ORDINAL_COLUMN: &str = "物件番号";

/// Source columns shown in the result table, in display order.
pub const DISPLAY_COLUMNS: [&str; 6] = [
    columns::ADDRESS,
    columns::RENT,
    columns::LAYOUT,
    columns::FLOOR,
    columns::BUILDING_AGE,
    columns::URL,
];

/// Static header relabeling. Columns not listed keep their sheet name.
pub fn relabel(column: &str) -> &str {
    match column {
        columns::RENT => "賃料(万円)",
        columns::URL => "詳細",
        other => other,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    /// 1-based, dense, in input order.
    pub ordinal: usize,
    pub address: String,
    pub rent: String,
    pub layout: String,
    pub floor: String,
    pub building_age: String,
    /// Anchor markup, not plain text.
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayTable {
    pub columns: Vec<&'static str>,
    pub rows: Vec<DisplayRow>,
}

pub fn column_labels() -> Vec<&'static str> {
    std::iter::once(ORDINAL_COLUMN)
        .chain(DISPLAY_COLUMNS.into_iter().map(relabel))
        .collect()
}

/// Wraps a URL in an anchor opening a new tab. No validation: whatever the
/// sheet holds ends up in `href`.
pub fn make_clickable(url: &str) -> String {
    format!(r#"<a target="_blank" href="{url}">{url}</a>"#)
}

pub fn format<'a, I>(records: I) -> DisplayTable
where
    I: IntoIterator<Item = &'a NormalizedRecord>,
{
    let rows = records
        .into_iter()
        .enumerate()
        .map(|(i, record)| DisplayRow {
            ordinal: i + 1,
            address: record.address.clone(),
            rent: record.rent_display(),
            layout: record.layout.clone(),
            floor: record.floor.clone(),
            building_age: record.building_age.clone(),
            link: make_clickable(&record.url),
        })
        .collect();

    DisplayTable {
        columns: column_labels(),
        rows,
    }
}
