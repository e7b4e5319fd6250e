// src/domain/listing.rs

/// Sheet column headers. The sheet layout is fixed, so these double as the
/// lookup keys when mapping a header row onto fields.
pub mod columns {
    pub const ADDRESS: &str = "住所";
    pub const RENT: &str = "賃料(管理費込み)";
    pub const LATITUDE: &str = "緯度";
    pub const LONGITUDE: &str = "経度";
    pub const LAYOUT: &str = "間取り";
    pub const FLOOR: &str = "階数";
    pub const BUILDING_AGE: &str = "築年数";
    pub const URL: &str = "物件URL";
    pub const TRANSIT_BUCKET: &str = "乗り入れ本数";
    pub const PRICE_BUCKET: &str = "金額帯";
}

/// Suffix the sheet uses for rent amounts ("ten-thousand yen").
pub const CURRENCY_SUFFIX: &str = "万円";

/// One sheet row, untouched. Any field may be empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub address: String,
    pub rent: String,
    pub latitude: String,
    pub longitude: String,
    pub layout: String,
    pub floor: String,
    pub building_age: String,
    pub url: String,
    pub transit_bucket: String,
    pub price_bucket: String,
}

/// A listing with rent and coordinates parsed. Everything else passes
/// through as the sheet had it.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    pub address: String,
    /// Monthly rent incl. fees, in units of 10k yen. Never negative.
    pub rent: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub layout: String,
    pub floor: String,
    pub building_age: String,
    pub url: String,
    pub transit_bucket: String,
    pub price_bucket: String,
}

impl NormalizedRecord {
    /// Both coordinates, if the row was geocoded.
    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }

    /// Rent as shown to the operator: `18万円`, or empty when missing.
    pub fn rent_display(&self) -> String {
        self.rent
            .map(|r| format!("{r}{CURRENCY_SUFFIX}"))
            .unwrap_or_default()
    }
}
