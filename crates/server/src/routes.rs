use axum::{http::StatusCode, routing::get, Json, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::{ErrorBody, Health};
use service::resources::{AUTHORS, MOVIES};

use crate::errors;
use crate::state::AppState;

pub mod records;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn hello() -> &'static str {
    "Hello World!"
}

async fn route_not_found() -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("notFound", "route not found")))
}

/// Build the full application router: resource controllers, health, and the
/// shared middleware stack.
pub fn build_router(state: AppState) -> Router {
    let resources = Router::new()
        .merge(records::routes(&format!("/{AUTHORS}"), state.authors.clone()))
        .merge(records::routes(&format!("/{MOVIES}"), state.movies.clone()));

    Router::new()
        .route("/health", get(health))
        .route("/hello", get(hello))
        .merge(resources)
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(errors::handle_panic))
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
