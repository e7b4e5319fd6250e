// src/source/sheets.rs

use crate::source::{RowSource, SourceError};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

#[derive(Clone)]
pub enum SheetsAuth {
    /// `key=` query parameter; works for link-shared sheets.
    ApiKey(String),
    /// Pre-issued OAuth access token.
    Bearer(String),
}

/// Reads one worksheet through the Sheets values API (v4).
pub struct SheetsSource {
    client: Client,
    base_url: String,
    spreadsheet_id: String,
    sheet: String,
    auth: SheetsAuth,
}

/// Body of `GET .../values/{range}`. `values` is absent for an empty sheet.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

impl SheetsSource {
    pub fn new(
        base_url: impl Into<String>,
        spreadsheet_id: impl Into<String>,
        sheet: impl Into<String>,
        auth: SheetsAuth,
    ) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(network_error)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            spreadsheet_id: spreadsheet_id.into(),
            sheet: sheet.into(),
            auth,
        })
    }

    fn values_url(&self) -> Result<Url, SourceError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| SourceError::Network(format!("bad base url '{}': {e}", self.base_url)))?;

        url.path_segments_mut()
            .map_err(|_| SourceError::Network(format!("base url '{}' cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", self.spreadsheet_id.as_str(), "values", self.sheet.as_str()]);

        if let SheetsAuth::ApiKey(key) = &self.auth {
            url.query_pairs_mut().append_pair("key", key);
        }

        Ok(url)
    }
}

impl RowSource for SheetsSource {
    fn fetch_rows(&self) -> Result<Vec<Vec<String>>, SourceError> {
        let url = self.values_url()?;
        debug!(spreadsheet = %self.spreadsheet_id, sheet = %self.sheet, "fetching sheet values");

        let mut request = self.client.get(url);
        if let SheetsAuth::Bearer(token) = &self.auth {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(SourceError::Api(format!("{status} - {text}")));
        }

        let body = response
            .text()
            .map_err(network_error)?;
        let rows = parse_value_range(&body)?;

        info!(rows = rows.len(), sheet = %self.sheet, "sheet rows fetched");
        Ok(rows)
    }
}

/// reqwest puts the request URL in its message, and with an API key that URL
/// carries the credential.
fn network_error(err: reqwest::Error) -> SourceError {
    SourceError::Network(err.without_url().to_string())
}

fn parse_value_range(body: &str) -> Result<Vec<Vec<String>>, SourceError> {
    let range: ValueRange =
        serde_json::from_str(body).map_err(|e| SourceError::JsonParse(e.to_string()))?;

    Ok(range
        .values
        .into_iter()
        .map(|row| row.into_iter().map(cell_to_string).collect())
        .collect())
}

/// Formatted values arrive as strings, but unformatted ranges can carry
/// numbers and booleans.
fn cell_to_string(cell: Value) -> String {
    match cell {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
