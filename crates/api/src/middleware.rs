use std::time::Instant;

use axum::{
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::context::RequestContext;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_REQUEST_ID_LEN: usize = 128;

/// Tags every request with an id and runs it inside a tracing span.
///
/// A well-formed inbound `x-request-id` is reused; otherwise a UUID v7 is
/// generated. The id is echoed back on the response.
pub async fn request_id_middleware(
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let request_id = extract_request_id(req.headers())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::now_v7().to_string());

    req.extensions_mut()
        .insert(RequestContext::new(request_id.clone()));

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    let started = Instant::now();
    let mut resp = next.run(req).instrument(span.clone()).await;

    span.in_scope(|| {
        tracing::info!(
            status = resp.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request completed"
        );
    });

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    resp
}

fn extract_request_id(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(REQUEST_ID_HEADER)?.to_str().ok()?.trim();

    if value.is_empty() || value.len() > MAX_REQUEST_ID_LEN {
        return None;
    }
    if !value.chars().all(|c| c.is_ascii_graphic()) {
        return None;
    }

    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(value: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(REQUEST_ID_HEADER, HeaderValue::from_str(value).unwrap());
        map
    }

    #[test]
    fn inbound_id_is_reused() {
        assert_eq!(extract_request_id(&headers("abc-123")), Some("abc-123"));
    }

    #[test]
    fn missing_blank_or_oversized_ids_are_ignored() {
        assert_eq!(extract_request_id(&HeaderMap::new()), None);
        assert_eq!(extract_request_id(&headers("   ")), None);
        assert_eq!(extract_request_id(&headers("a b")), None);
        assert_eq!(extract_request_id(&headers(&"x".repeat(200))), None);
    }
}
