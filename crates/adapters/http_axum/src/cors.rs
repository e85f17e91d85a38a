//! Cross-origin request interception.
//!
//! [`intercept`] runs before route dispatch. Pre-flight `OPTIONS` requests
//! are answered immediately with `204 No Content`; every other request is
//! forwarded and the response gets the same headers on the way out.
//!
//! `tower_http::cors::CorsLayer` refuses a wildcard origin combined with
//! credentials, so the headers are written here directly.

use axum::extract::Request;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_CREDENTIALS: &str = "true";
pub const ALLOW_HEADERS: &str = "Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, Authorization, accept, origin, Cache-Control, X-Requested-With";
pub const ALLOW_METHODS: &str = "POST, OPTIONS, GET, PUT, DELETE";

/// Middleware for [`axum::middleware::from_fn`].
pub async fn intercept(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        tracing::trace!(path = %request.uri().path(), "answering pre-flight");
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_headers(response.headers_mut());
        return response;
    }

    let mut response = next.run(request).await;
    apply_headers(response.headers_mut());
    response
}

/// Write the permissive CORS header set, replacing existing values.
pub fn apply_headers(headers: &mut HeaderMap) {
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static(ALLOW_CREDENTIALS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
}
