pub mod paste;

use axum::body::Body;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{Request, Uri};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use blockpaste_core::validate_request_path;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let max_body = state.service().config().max_paste_size;
    let request_timeout = state.inner.request_timeout;

    Router::new()
        .route("/", get(usage).post(paste::create_paste))
        .route(
            "/paste/{id}",
            get(paste::get_paste).fallback(unknown_route),
        )
        .route(
            "/{name}",
            post(paste::create_named_paste).fallback(unknown_route),
        )
        .fallback(unknown_route)
        .layer(middleware::from_fn(validate_path))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::new())
                .layer(DefaultBodyLimit::disable())
                .layer(RequestBodyLimitLayer::new(max_body))
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .with_state(state)
}

async fn usage(State(state): State<AppState>) -> String {
    state.inner.usage.clone()
}

async fn unknown_route(uri: Uri) -> ApiError {
    ApiError::UnknownRoute(uri.path().to_owned())
}

/// Reject non-absolute or overlong paths before routing.
async fn validate_path(req: Request<Body>, next: Next) -> Response {
    if let Err(e) = validate_request_path(req.uri().path()) {
        return ApiError::from(e).into_response();
    }
    next.run(req).await
}
