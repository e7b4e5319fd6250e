use crate::errors::ServerError;
use crate::responses::ResultResp;
use crate::session::{SessionHandle, SESSION_COOKIE};
use crate::session::store::SESSION_TTL_SECS;
use astra::{Body, Response, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

pub fn text_response(text: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Body::from(text.to_string()))
        .map_err(|_| ServerError::InternalError)
}

/// 303 so the browser re-issues a GET after the toggle form posts.
pub fn see_other(location: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(303)
        .header("Location", location)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

/// Sets the session cookie on responses that started a session.
pub fn with_session_cookie(mut resp: Response, session: &SessionHandle) -> ResultResp {
    if session.is_new {
        let cookie = format!(
            "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_TTL_SECS}",
            session.token
        );
        let value = cookie.parse().map_err(|_| ServerError::InternalError)?;
        resp.headers_mut().insert("Set-Cookie", value);
    }
    Ok(resp)
}
