use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use pulse_media::engagement_summary;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/engagement", get(engagement))
}

pub async fn engagement(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let posts = match services.posts.recent_posts().await {
        Ok(v) => v,
        Err(e) => return errors::upstream_error_to_response(e),
    };

    let body = dto::engagement_to_response(engagement_summary(&posts));
    (StatusCode::OK, Json(body)).into_response()
}
