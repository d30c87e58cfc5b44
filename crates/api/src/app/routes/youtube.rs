use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/stats", get(channel_stats))
}

pub async fn channel_stats(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.channel.channel_stats().await {
        Ok(stats) => (StatusCode::OK, Json(dto::channel_to_response(stats))).into_response(),
        Err(e) => errors::upstream_error_to_response(e),
    }
}
