//! # Blockpaste Testkit
//!
//! Testing utilities for Blockpaste.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Fixed-nonce cipher outputs that pin the stored blob format
//! - **Generators**: Proptest strategies for names, pastes, and passphrases
//! - **Fixtures**: [`BlockStore`](blockpaste_store::BlockStore) doubles that count,
//!   stall, or fail
//!
//! ## Golden Vectors
//!
//! ```rust
//! use blockpaste_testkit::vectors::verify_all_vectors;
//!
//! assert!(verify_all_vectors().is_empty());
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use blockpaste_testkit::generators::PasteParams;
//!
//! proptest! {
//!     #[test]
//!     fn structured_roundtrip(params: PasteParams) {
//!         let paste = params.paste();
//!         let bytes = EnvelopeFormat::Structured.encode(&paste).unwrap();
//!         prop_assert_eq!(EnvelopeFormat::Structured.decode(bytes).unwrap(), paste);
//!     }
//! }
//! ```
//!
//! ## Store Doubles
//!
//! ```rust
//! use std::sync::Arc;
//! use blockpaste_testkit::fixtures::{paste_store, CountingStore};
//!
//! let backend = Arc::new(CountingStore::new());
//! let store = paste_store(backend.clone());
//! assert_eq!(backend.calls(), 0);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{
    fast_config, paste_store, CountingStore, FailingStore, OversizedStore, StallingStore,
};
pub use generators::PasteParams;
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
