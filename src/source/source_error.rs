use std::error::Error;
use std::fmt;

/// Failures fetching or shaping the listing rows. All of them abort the
/// render; nothing here is retried.
#[derive(Debug)]
pub enum SourceError {
    Network(String),
    Api(String),
    JsonParse(String),
    Csv(String),
    Io(String),
    Credentials(String),
    MissingColumn(&'static str),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Network(msg) => write!(f, "Network error: {msg}"),
            SourceError::Api(msg) => write!(f, "Sheets API error: {msg}"),
            SourceError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            SourceError::Csv(msg) => write!(f, "CSV error: {msg}"),
            SourceError::Io(msg) => write!(f, "I/O error: {msg}"),
            SourceError::Credentials(msg) => write!(f, "Missing credentials: {msg}"),
            SourceError::MissingColumn(col) => write!(f, "Header row lacks column '{col}'"),
        }
    }
}

impl Error for SourceError {}
