// errors.rs
use crate::domain::MalformedFieldError;
use crate::source::SourceError;
use std::fmt;

/// Errors that end a request: routing problems, bad selector input, or a
/// failure anywhere in load -> normalize. No partial page is rendered.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    MalformedField(MalformedFieldError),
    Upstream(SourceError),
    InternalError,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::MalformedField(err) => write!(f, "Malformed listing data: {err}"),
            ServerError::Upstream(err) => write!(f, "Could not load listings: {err}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServerError::MalformedField(err) => Some(err),
            ServerError::Upstream(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MalformedFieldError> for ServerError {
    fn from(err: MalformedFieldError) -> Self {
        ServerError::MalformedField(err)
    }
}

impl From<SourceError> for ServerError {
    fn from(err: SourceError) -> Self {
        ServerError::Upstream(err)
    }
}
