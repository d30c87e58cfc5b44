//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: upstream clients and presentation settings
//! - `routes/`: HTTP routes + handlers (one file per upstream)
//! - `dto.rs`: response DTOs and mapping from summaries
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use pulse_infra::{AppConfig, UpstreamResult};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router from configuration (public entrypoint used by `main.rs`).
pub fn build_app(config: &AppConfig) -> UpstreamResult<Router> {
    let services = services::build_services(config)?;
    Ok(build_router(Arc::new(services)))
}

/// Build the router around already-wired services.
pub fn build_router(services: Arc<AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_id_middleware))
                .layer(Extension(services)),
        )
}
