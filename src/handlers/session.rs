use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use crate::services::sessions::SessionHandle;
use crate::state::AppState;

/// Reads the session id from the request cookies, if present and well-formed.
pub fn session_cookie(headers: &HeaderMap, cookie_name: &str) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

pub fn resolve(state: &AppState, headers: &HeaderMap) -> SessionHandle {
    let requested = session_cookie(headers, &state.config.session_cookie);
    state.sessions.resolve(requested)
}

/// Adds `Set-Cookie` to the response when the session was minted for this request.
pub fn attach(state: &AppState, handle: SessionHandle, response: impl IntoResponse) -> Response {
    let mut response = response.into_response();
    if handle.is_new {
        let cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            state.config.session_cookie, handle.id
        );
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => {
                tracing::error!(error = %e, "invalid session cookie header");
            }
        }
    }
    response
}
