use axum::extract::{Path, Query, State};
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;
use blockpaste_core::{EnvelopeFormat, PasteDocument};
use bytes::Bytes;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct KeyQuery {
    pub key: Option<String>,
}

impl KeyQuery {
    /// The passphrase, if one was given. An empty `key=` means no encryption.
    pub fn passphrase(&self) -> Option<&str> {
        self.key.as_deref().filter(|k| !k.is_empty())
    }
}

pub async fn create_paste(
    State(state): State<AppState>,
    Query(query): Query<KeyQuery>,
    body: Bytes,
) -> Result<String, ApiError> {
    let path = state
        .service()
        .create(body, None, query.passphrase())
        .await?;
    Ok(path.to_string())
}

pub async fn create_named_paste(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<KeyQuery>,
    body: Bytes,
) -> Result<String, ApiError> {
    let path = state
        .service()
        .create(body, Some(&name), query.passphrase())
        .await?;
    Ok(path.to_string())
}

pub async fn get_paste(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<KeyQuery>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let service = state.service();
    let paste = service.fetch(&id, query.passphrase()).await?;

    if service.config().format == EnvelopeFormat::Structured && wants_json(&headers) {
        let document = PasteDocument::try_from(&paste)?;
        return Ok(Json(document).into_response());
    }

    Ok(([(CONTENT_TYPE, "text/plain")], paste.into_text()).into_response())
}

/// Whether the request declares `application/json` via `Accept` or `Content-Type`.
///
/// Each header is read as a comma-separated list of media ranges. A range
/// matches only on an exact, case-insensitive `application/json` essence,
/// and an explicit `q=0` opts out.
fn wants_json(headers: &HeaderMap) -> bool {
    [ACCEPT, CONTENT_TYPE].iter().any(|name| {
        headers
            .get_all(name)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(','))
            .any(is_json_range)
    })
}

fn is_json_range(range: &str) -> bool {
    let mut parts = range.split(';');
    let essence = parts.next().unwrap_or_default().trim();
    if !essence.eq_ignore_ascii_case("application/json") {
        return false;
    }

    !parts.any(|param| {
        let Some((key, value)) = param.split_once('=') else {
            return false;
        };
        key.trim().eq_ignore_ascii_case("q")
            && value.trim().parse::<f32>().is_ok_and(|q| q <= 0.0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_wants_json() {
        let mut headers = HeaderMap::new();
        assert!(!wants_json(&headers));

        headers.insert(ACCEPT, HeaderValue::from_static("text/plain"));
        assert!(!wants_json(&headers));

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        assert!(wants_json(&headers));

        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        assert!(wants_json(&headers));
    }

    #[test]
    fn test_wants_json_parses_media_ranges() {
        let cases = [
            ("text/html, application/json", true),
            ("text/html,application/json;q=0.5", true),
            ("Application/JSON", true),
            ("application/json;q=0", false),
            ("application/json; q=0.0, text/plain", false),
            ("text/html, application/jsonx", false),
            ("application/json-patch+json", false),
            ("text/plain; note=application/json", false),
            ("*/*", false),
        ];
        for (accept, expected) in cases {
            let mut headers = HeaderMap::new();
            headers.insert(ACCEPT, HeaderValue::from_static(accept));
            assert_eq!(wants_json(&headers), expected, "accept {accept:?}");
        }
    }

    #[test]
    fn test_empty_key_is_no_key() {
        let query = KeyQuery {
            key: Some(String::new()),
        };
        assert_eq!(query.passphrase(), None);

        let query = KeyQuery {
            key: Some("secret".into()),
        };
        assert_eq!(query.passphrase(), Some("secret"));
        assert_eq!(KeyQuery::default().passphrase(), None);
    }
}
