use crate::domain::{
    normalize, render_view, NormalizedRecord, PriceBucket, RenderContext, SelectorPair,
    TransitBucket,
};
use crate::errors::ServerError;
use crate::responses::{
    html_response, json_response, see_other, text_response, with_session_cookie, ResultResp,
};
use crate::session::{SessionHandle, SessionStore, SESSION_COOKIE};
use crate::source::RowSource;
use crate::templates;
use crate::templates::components::{PRICE_PARAM, TRANSIT_PARAM};
use astra::Request;
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

/// Everything a request handler needs. Listing data is not cached here;
/// every render loads the rows afresh.
pub struct AppState {
    pub source: Box<dyn RowSource>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(source: Box<dyn RowSource>) -> Self {
        Self {
            source,
            sessions: SessionStore::default(),
        }
    }
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    debug!(%method, %path, "request");

    match (method, path) {
        ("GET", "/") => listings(&req, state),
        ("POST", "/toggle-show-all") => toggle_show_all(&req, state),
        ("GET", "/api/view") => api_view(&req, state),
        ("GET", "/healthz") => text_response("ok"),
        _ => Err(ServerError::NotFound),
    }
}

fn listings(req: &Request, state: &AppState) -> ResultResp {
    let selectors = parse_selectors(&parse_query(req))?;
    let ctx = RenderContext {
        show_all: state.sessions.show_all(session_cookie(req), now_unix()),
    };

    let records = load_records(state)?;
    let view = render_view(&records, &selectors, &ctx);

    let page = templates::pages::listings_page(&selectors, &view)?;
    html_response(page)
}

fn toggle_show_all(req: &Request, state: &AppState) -> ResultResp {
    let selectors = parse_selectors(&parse_query(req))?;
    let session: SessionHandle = state
        .sessions
        .toggle_show_all(session_cookie(req), now_unix());
    info!(
        show_all = session.show_all,
        active_sessions = state.sessions.active_sessions(),
        "show-all toggled"
    );

    let location = format!("/?{}", templates::pages::selection_query(&selectors));
    with_session_cookie(see_other(&location)?, &session)
}

fn api_view(req: &Request, state: &AppState) -> ResultResp {
    let selectors = parse_selectors(&parse_query(req))?;
    let ctx = RenderContext {
        show_all: state.sessions.show_all(session_cookie(req), now_unix()),
    };

    let records = load_records(state)?;
    let view = render_view(&records, &selectors, &ctx);

    json_response(&view)
}

/// Fetch + normalize. Either step failing aborts the request.
fn load_records(state: &AppState) -> Result<Vec<NormalizedRecord>, ServerError> {
    let raw = state.source.fetch_records()?;
    let records = normalize(&raw)?;
    debug!(records = records.len(), "listings normalized");
    Ok(records)
}

/// Missing or blank parameters mean "not selected yet"; anything else has
/// to be one of the known labels.
fn parse_selectors(params: &HashMap<String, String>) -> Result<SelectorPair, ServerError> {
    let transit = match params.get(TRANSIT_PARAM).map(String::as_str) {
        None | Some("") => TransitBucket::Unselected,
        Some(label) => label
            .parse::<TransitBucket>()
            .map_err(|e| ServerError::BadRequest(format!("{TRANSIT_PARAM}: {e}")))?,
    };
    let price = match params.get(PRICE_PARAM).map(String::as_str) {
        None | Some("") => PriceBucket::Unselected,
        Some(label) => label
            .parse::<PriceBucket>()
            .map_err(|e| ServerError::BadRequest(format!("{PRICE_PARAM}: {e}")))?,
    };

    Ok(SelectorPair::new(transit, price))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn session_cookie(req: &Request) -> Option<&str> {
    req.headers()
        .get_all("Cookie")
        .into_iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value)
}

fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
