use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{convert, health},
    settings::LimitsCfg,
};

pub fn create_routes(limits: &LimitsCfg) -> Router {
    Router::new()
        .route("/convert", post(convert::convert))
        .route("/health", get(health::health))
        .layer(DefaultBodyLimit::max(limits.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
