//! # Blockpaste Server
//!
//! HTTP front end for Blockpaste.
//!
//! | Method | Path | Behavior |
//! |---|---|---|
//! | GET | `/` | usage text |
//! | GET | `/paste/{id}` | fetch, decrypting with `?key=` |
//! | POST | `/` | create, encrypting with `?key=` |
//! | POST | `/{name}` | create a named paste (structured envelope only) |
//!
//! A POST responds with the new paste's path, `/paste/<id>`.
//!
//! ## Status codes
//!
//! - 400: bad path, bad name, unknown route
//! - 404: paste absent, or the store did not answer in time
//! - 413: body or stored blob over the size limit
//! - 500: decryption, decoding, or store failure
//!
//! ## Wiring
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use blockpaste_server::{router, AppState, PasteService, ServiceConfig};
//! use blockpaste_store::{MemoryBlockStore, PasteStore};
//!
//! let store = PasteStore::new(Arc::new(MemoryBlockStore::new()));
//! let service = PasteService::new(store, ServiceConfig::default());
//! let app = router(AppState::new(service, "localhost:8080"));
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod service;
pub mod state;
pub mod telemetry;

pub use config::Config;
pub use error::ApiError;
pub use handlers::router;
pub use service::{PasteService, ServiceConfig};
pub use state::AppState;
