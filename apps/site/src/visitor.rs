//! Visitor identity.
//!
//! Every browser gets a long-lived `visitor_id` cookie. Storage is scoped by it
//! the way local storage is scoped by a browser profile.

use axum::{
    extract::Request,
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue,
    },
    middleware::Next,
    response::Response,
};
use tracing::debug;
use uuid::Uuid;

pub const VISITOR_COOKIE: &str = "visitor_id";
const COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visitor(pub Uuid);

/// Middleware: resolves the visitor from the cookie, minting a new id if
/// absent or unparsable, and exposes it as a request extension.
pub async fn assign_visitor(mut req: Request, next: Next) -> Response {
    let (visitor, fresh) = match visitor_from_headers(req.headers()) {
        Some(id) => (Visitor(id), false),
        None => {
            let id = Uuid::new_v4();
            debug!("Assigned new visitor {id}");
            (Visitor(id), true)
        }
    };

    req.extensions_mut().insert(visitor);
    let mut response = next.run(req).await;

    if fresh {
        let cookie = format!(
            "{VISITOR_COOKIE}={}; Path=/; Max-Age={COOKIE_MAX_AGE_SECS}; HttpOnly; SameSite=Lax",
            visitor.0
        );
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(SET_COOKIE, value);
        }
    }

    response
}

fn visitor_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|header| cookie_value(header, VISITOR_COOKIE))
        .and_then(|raw| Uuid::parse_str(raw).ok())
}

fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value.trim())
    })
}
