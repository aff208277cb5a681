pub mod health;

use std::time::Duration;

use axum::{
    extract::Request,
    http::{header, Method, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;
use crate::tailoring::handlers;

/// Browser clients call the service cross-origin; preflights are cached for an hour.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", post(handlers::handle_customize))
        .route("/customize", post(handlers::handle_customize))
        .with_state(state)
        .layer(cors_layer())
        .layer(middleware::from_fn(preflight_no_content))
}

/// `CorsLayer` answers preflights with 200; clients expect 204 No Content.
async fn preflight_no_content(request: Request, next: Next) -> Response {
    let is_preflight = request.method() == Method::OPTIONS;
    let mut response = next.run(request).await;
    if is_preflight && response.status() == StatusCode::OK {
        *response.status_mut() = StatusCode::NO_CONTENT;
    }
    response
}
