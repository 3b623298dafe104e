use std::sync::Arc;
use std::time::Duration;

use blockpaste_core::EnvelopeFormat;

use crate::config::DEFAULT_REQUEST_TIMEOUT;
use crate::service::PasteService;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub service: PasteService,
    /// Usage text served at `/`, rendered once at startup.
    pub usage: String,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(service: PasteService, hostname: &str) -> Self {
        Self::with_request_timeout(service, hostname, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_request_timeout(
        service: PasteService,
        hostname: &str,
        request_timeout: Duration,
    ) -> Self {
        let usage = usage_text(hostname, service.config().format);
        Self {
            inner: Arc::new(AppStateInner {
                service,
                usage,
                request_timeout,
            }),
        }
    }

    pub fn service(&self) -> &PasteService {
        &self.inner.service
    }
}

/// Render the usage message for `hostname`.
pub fn usage_text(hostname: &str, format: EnvelopeFormat) -> String {
    let mut text = format!(
        "Blockpaste -- a block-store-backed pastebin with encryption support!

Usage:
$ curl http://{hostname} --data 'paste text goes here'
--> '/paste/<PASTE_ID>'

$ curl http://{hostname}/paste/<PASTE_ID>
--> 'paste text goes here'

$ curl http://{hostname}/?key=awful_password --data 'paste text goes here'
--> '/paste/<PASTE_ID>'

$ curl http://{hostname}/paste/<PASTE_ID>?key=awful_password
--> 'paste text goes here'
"
    );

    if format.supports_names() {
        text.push_str(&format!(
            "
$ curl http://{hostname}/notes.txt --data 'paste text goes here'
--> '/paste/<PASTE_ID>'

$ curl -H 'Accept: application/json' http://{hostname}/paste/<PASTE_ID>
--> '{{\"name\":\"notes.txt\",\"text\":\"paste text goes here\"}}'
"
        ));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_mentions_hostname() {
        let text = usage_text("paste.example.org", EnvelopeFormat::Raw);
        assert!(text.contains("curl http://paste.example.org --data"));
        assert!(text.contains("?key="));
        assert!(!text.contains("application/json"));
    }

    #[test]
    fn test_usage_structured_shows_names() {
        let text = usage_text("localhost:8080", EnvelopeFormat::Structured);
        assert!(text.contains("http://localhost:8080/notes.txt"));
        assert!(text.contains(r#"{"name":"notes.txt""#));
    }
}
