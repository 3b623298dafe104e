#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

use blockpaste_core::EnvelopeFormat;
use blockpaste_server::{router, AppState, PasteService, ServiceConfig};
use blockpaste_store::{BlockStore, PasteStore, StoreConfig};

pub const TEST_HOST: &str = "paste.test";

/// Build a router over `backend` with default store limits.
pub fn setup_app(backend: Arc<dyn BlockStore>, format: EnvelopeFormat) -> Router {
    setup_app_with_limit(backend, format, blockpaste_core::MAX_PASTE_SIZE)
}

pub fn setup_app_with_limit(
    backend: Arc<dyn BlockStore>,
    format: EnvelopeFormat,
    max_paste_size: usize,
) -> Router {
    let store = PasteStore::with_config(
        backend,
        StoreConfig {
            max_blob_size: max_paste_size,
            ..StoreConfig::default()
        },
    );
    let service = PasteService::new(
        store,
        ServiceConfig {
            format,
            max_paste_size,
        },
    );
    router(AppState::with_request_timeout(
        service,
        TEST_HOST,
        Duration::from_secs(2),
    ))
}

pub async fn post(router: Router, uri: &str, body: impl Into<Vec<u8>>) -> Response {
    let body = body.into();
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Length", body.len().to_string())
        .body(Body::from(body))
        .unwrap();
    router.oneshot(req).await.unwrap()
}

pub async fn get(router: Router, uri: &str) -> Response {
    get_with_header(router, uri, None).await
}

pub async fn get_with_header(
    router: Router,
    uri: &str,
    header: Option<(&str, &str)>,
) -> Response {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some((name, value)) = header {
        builder = builder.header(name, value);
    }
    router
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Read full response body into `Vec<u8>`.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_string(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
