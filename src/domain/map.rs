// src/domain/map.rs

use crate::domain::listing::NormalizedRecord;
use serde::Serialize;

/// Marunouchi, the anchor every map is centered on.
pub const REFERENCE_POSITION: (f64, f64) = (35.6811, 139.767);
pub const REFERENCE_POPUP: &str = "丸の内";
pub const REFERENCE_AREA_POPUP: &str = "丸の内エリア";
/// Meters.
pub const REFERENCE_AREA_RADIUS: f64 = 500.0;
pub const INITIAL_ZOOM: u8 = 12;
pub const POPUP_MAX_WIDTH: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Reference,
    Listing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconStyle {
    pub color: &'static str,
    pub icon: &'static str,
}

impl MarkerKind {
    pub fn icon(self) -> IconStyle {
        match self {
            MarkerKind::Reference => IconStyle {
                color: "red",
                icon: "info-sign",
            },
            MarkerKind::Listing => IconStyle {
                color: "blue",
                icon: "home",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerDescriptor {
    /// (lat, lon)
    pub position: (f64, f64),
    /// Markup, inserted into the map as-is.
    pub popup: String,
    pub kind: MarkerKind,
    pub icon: IconStyle,
}

impl MarkerDescriptor {
    fn new(position: (f64, f64), popup: String, kind: MarkerKind) -> Self {
        Self {
            position,
            popup,
            kind,
            icon: kind.icon(),
        }
    }
}

/// Shaded circle around the reference point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaOverlay {
    pub center: (f64, f64),
    pub radius_m: f64,
    pub popup: &'static str,
    pub color: &'static str,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MapStatus {
    /// Nothing was handed to the projector.
    NoInput,
    /// Records were given but none had both coordinates.
    NoMappableRecords,
    Mappable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapProjection {
    pub center: (f64, f64),
    pub zoom: u8,
    pub popup_max_width: u32,
    pub reference: MarkerDescriptor,
    pub reference_area: AreaOverlay,
    pub listings: Vec<MarkerDescriptor>,
    pub status: MapStatus,
}

pub fn reference_marker() -> MarkerDescriptor {
    MarkerDescriptor::new(
        REFERENCE_POSITION,
        REFERENCE_POPUP.to_string(),
        MarkerKind::Reference,
    )
}

pub fn reference_area() -> AreaOverlay {
    AreaOverlay {
        center: REFERENCE_POSITION,
        radius_m: REFERENCE_AREA_RADIUS,
        popup: REFERENCE_AREA_POPUP,
        color: "red",
        fill_color: "red",
        fill_opacity: 0.2,
    }
}

/// Builds the marker set for a record subset. Rows lacking either
/// coordinate are left off the map; the reference marker and area are
/// always present.
pub fn project<'a, I>(records: I) -> MapProjection
where
    I: IntoIterator<Item = &'a NormalizedRecord>,
{
    let mut seen = 0usize;
    let listings: Vec<MarkerDescriptor> = records
        .into_iter()
        .inspect(|_| seen += 1)
        .filter_map(|record| {
            let position = record.position()?;
            Some(MarkerDescriptor::new(
                position,
                listing_popup(record),
                MarkerKind::Listing,
            ))
        })
        .collect();

    let status = match (seen, listings.is_empty()) {
        (0, _) => MapStatus::NoInput,
        (_, true) => MapStatus::NoMappableRecords,
        (_, false) => MapStatus::Mappable,
    };

    MapProjection {
        center: REFERENCE_POSITION,
        zoom: INITIAL_ZOOM,
        popup_max_width: POPUP_MAX_WIDTH,
        reference: reference_marker(),
        reference_area: reference_area(),
        listings,
        status,
    }
}

/// Fixed-order popup body. Blank fields stay as blank segments.
pub fn listing_popup(record: &NormalizedRecord) -> String {
    format!(
        "<b>住所:</b> {address}<br>\n\
         <b>賃料:</b> {rent}<br>\n\
         <b>間取り:</b> {layout} ({floor})<br>\n\
         <b>築年数:</b> {age}<br>\n\
         {url}",
        address = record.address,
        rent = record.rent_display(),
        layout = record.layout,
        floor = record.floor,
        age = with_unit(&record.building_age, "年"),
        url = record.url,
    )
}

fn with_unit(value: &str, unit: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{value}{unit}")
    }
}
