use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use pulse_infra::UpstreamError;

pub fn upstream_error_to_response(err: UpstreamError) -> axum::response::Response {
    match err {
        UpstreamError::NotConfigured(key) => {
            tracing::warn!("{key} not set; endpoint unavailable");
            json_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "not_configured",
                format!("{key} is not configured"),
            )
        }
        UpstreamError::Api {
            service,
            status,
            body,
        } => {
            let status = StatusCode::from_u16(status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY);
            json_error(status, "upstream_error", format!("{service} API error: {body}"))
        }
        UpstreamError::Network(msg) => {
            tracing::error!("upstream call failed: {msg}");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal Server Error",
            )
        }
        UpstreamError::Parse(msg) => json_error(StatusCode::BAD_GATEWAY, "upstream_parse_error", msg),
        UpstreamError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, "not_found", msg),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use pulse_infra::Service;

    use super::*;

    #[test]
    fn upstream_status_is_passed_through() {
        let resp = upstream_error_to_response(UpstreamError::Api {
            service: Service::Square,
            status: 401,
            body: "nope".into(),
        });
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn non_error_upstream_status_becomes_bad_gateway() {
        let resp = upstream_error_to_response(UpstreamError::Api {
            service: Service::Youtube,
            status: 302,
            body: String::new(),
        });
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn error_kinds_map_to_statuses() {
        let cases = [
            (UpstreamError::NotConfigured("LOCATION_ID"), StatusCode::SERVICE_UNAVAILABLE),
            (UpstreamError::Network("reset".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (UpstreamError::Parse("bad".into()), StatusCode::BAD_GATEWAY),
            (UpstreamError::NotFound("channel".into()), StatusCode::NOT_FOUND),
        ];
        for (err, expected) in cases {
            assert_eq!(upstream_error_to_response(err).status(), expected);
        }
    }
}
