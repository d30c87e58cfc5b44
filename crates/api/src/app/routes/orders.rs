use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use pulse_sales::{count_open_and_completed, most_popular_item, sum_totals, summarize};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(order_count))
        .route("/total", get(order_total))
        .route("/popular", get(popular_item))
        .route("/summary", get(order_summary))
}

pub async fn order_count(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let orders = match services.orders.search_orders().await {
        Ok(v) => v,
        Err(e) => return errors::upstream_error_to_response(e),
    };

    let body = dto::CountResponse {
        count: count_open_and_completed(&orders),
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub async fn order_total(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let orders = match services.orders.search_orders().await {
        Ok(v) => v,
        Err(e) => return errors::upstream_error_to_response(e),
    };

    let body = dto::total_to_response(sum_totals(&orders), services.currency_divisor);
    (StatusCode::OK, Json(body)).into_response()
}

pub async fn popular_item(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let orders = match services.orders.search_orders().await {
        Ok(v) => v,
        Err(e) => return errors::upstream_error_to_response(e),
    };

    let body = dto::popular_to_response(most_popular_item(&orders));
    (StatusCode::OK, Json(body)).into_response()
}

pub async fn order_summary(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let orders = match services.orders.search_orders().await {
        Ok(v) => v,
        Err(e) => return errors::upstream_error_to_response(e),
    };

    let body = dto::summary_to_response(summarize(&orders), services.currency_divisor);
    (StatusCode::OK, Json(body)).into_response()
}
