use axum::Router;

pub mod orders;
pub mod social;
pub mod system;
pub mod youtube;

/// Router for all upstream-backed endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/orders", orders::router())
        .nest("/youtube", youtube::router())
        .nest("/social", social::router())
}
