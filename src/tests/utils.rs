use crate::domain::listing::columns;
use crate::domain::{PriceBucket, SelectorPair, TransitBucket};
use crate::router::AppState;
use crate::source::{RowSource, SourceError};
use crate::templates::pages::selection_query;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// Fixed rows held in memory, header first.
pub struct StaticSource {
    rows: Vec<Vec<String>>,
}

impl RowSource for StaticSource {
    fn fetch_rows(&self) -> Result<Vec<Vec<String>>, SourceError> {
        Ok(self.rows.clone())
    }
}

/// Behaves like an unreachable sheet.
pub struct FailingSource;

impl RowSource for FailingSource {
    fn fetch_rows(&self) -> Result<Vec<Vec<String>>, SourceError> {
        Err(SourceError::Network("connection refused".to_string()))
    }
}

pub fn header_row() -> Vec<String> {
    [
        columns::ADDRESS,
        columns::RENT,
        columns::LATITUDE,
        columns::LONGITUDE,
        columns::LAYOUT,
        columns::FLOOR,
        columns::BUILDING_AGE,
        columns::URL,
        columns::TRANSIT_BUCKET,
        columns::PRICE_BUCKET,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub fn listing_row(
    address: &str,
    rent: &str,
    lat: &str,
    lon: &str,
    transit: TransitBucket,
    price: PriceBucket,
) -> Vec<String> {
    vec![
        address.to_string(),
        rent.to_string(),
        lat.to_string(),
        lon.to_string(),
        "1LDK".to_string(),
        "3階".to_string(),
        "10".to_string(),
        format!("https://example.com/{}", address.len()),
        transit.label().to_string(),
        price.label().to_string(),
    ]
}

/// App state over a header row plus `rows`.
pub fn state_with_rows(rows: Vec<Vec<String>>) -> AppState {
    let mut all = vec![header_row()];
    all.extend(rows);
    AppState::new(Box::new(StaticSource { rows: all }))
}

pub fn selected() -> SelectorPair {
    SelectorPair::new(TransitBucket::High, PriceBucket::Tier2)
}

pub fn uri_for(path: &str, selectors: &SelectorPair) -> String {
    format!("{path}?{}", selection_query(selectors))
}

pub fn request(method: Method, uri: &str, cookie: Option<&str>) -> Request {
    let mut builder = http::Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// `session=...` from a Set-Cookie header, ready to send back.
pub fn session_cookie(resp: &Response) -> Option<String> {
    let header = resp.headers().get("Set-Cookie")?.to_str().ok()?;
    header.split(';').next().map(str::to_string)
}

/// The JSON the page embeds for the map script.
pub fn embedded_map(body: &str) -> Option<serde_json::Value> {
    let open = r#"<script type="application/json" id="map-data">"#;
    let start = body.find(open)? + open.len();
    let end = start + body[start..].find("</script>")?;
    serde_json::from_str(&body[start..end]).ok()
}
