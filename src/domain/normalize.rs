// src/domain/normalize.rs

use crate::domain::listing::{columns, NormalizedRecord, RawRecord, CURRENCY_SUFFIX};
use std::error::Error;
use std::fmt;

/// A rent cell that still isn't a number once the currency suffix is gone.
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedFieldError {
    /// 1-based data row (the header row is not counted).
    pub row: usize,
    pub column: &'static str,
    pub value: String,
}

impl fmt::Display for MalformedFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {}: column '{}' has malformed value '{}'",
            self.row, self.column, self.value
        )
    }
}

impl Error for MalformedFieldError {}

/// Normalizes every row, preserving order. The first malformed rent aborts
/// the whole batch; rows are never skipped.
pub fn normalize(raw_rows: &[RawRecord]) -> Result<Vec<NormalizedRecord>, MalformedFieldError> {
    raw_rows
        .iter()
        .enumerate()
        .map(|(i, raw)| normalize_record(i + 1, raw))
        .collect()
}

fn normalize_record(row: usize, raw: &RawRecord) -> Result<NormalizedRecord, MalformedFieldError> {
    let rent = parse_rent(&raw.rent).map_err(|value| MalformedFieldError {
        row,
        column: columns::RENT,
        value,
    })?;

    Ok(NormalizedRecord {
        address: raw.address.clone(),
        rent,
        latitude: parse_coordinate(&raw.latitude, 90.0),
        longitude: parse_coordinate(&raw.longitude, 180.0),
        layout: raw.layout.clone(),
        floor: raw.floor.clone(),
        building_age: raw.building_age.clone(),
        url: raw.url.clone(),
        transit_bucket: raw.transit_bucket.clone(),
        price_bucket: raw.price_bucket.clone(),
    })
}

/// `"18万円"` -> `Some(18.0)`, `""` -> `None`. On failure hands back the
/// original cell so the error can quote it.
pub fn parse_rent(value: &str) -> Result<Option<f64>, String> {
    let stripped = value.replace(CURRENCY_SUFFIX, "");
    let stripped = stripped.trim();

    if stripped.is_empty() {
        return Ok(None);
    }

    match stripped.parse::<f64>() {
        Ok(rent) if rent.is_finite() && rent >= 0.0 => Ok(Some(rent)),
        _ => Err(value.to_string()),
    }
}

/// Lenient: anything that isn't a finite number within `±limit` degrees is
/// treated as not geocoded.
pub fn parse_coordinate(value: &str, limit: f64) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|deg| deg.is_finite() && deg.abs() <= limit)
}
