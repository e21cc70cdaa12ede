use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{Method, header};
use axum::middleware;
use axum::routing::{MethodRouter, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::WorkbookReader;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    extract_handler, health_handler, method_not_allowed_handler, preflight_handler,
};
use crate::presentation::state::AppState;

pub const EXTRACT_PATH: &str = "/api/excel-to-json";

pub fn create_router<R>(state: AppState<R>) -> Router
where
    R: WorkbookReader + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.settings.server.max_body_bytes);

    Router::new()
        .route("/", extract_route::<R>())
        .route(EXTRACT_PATH, extract_route::<R>())
        .route("/health", get(health_handler))
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

fn extract_route<R>() -> MethodRouter<AppState<R>>
where
    R: WorkbookReader + 'static,
{
    post(extract_handler::<R>)
        .options(preflight_handler)
        .fallback(method_not_allowed_handler)
}
