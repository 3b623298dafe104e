//! # Blockpaste Core
//!
//! Pure primitives for Blockpaste: pastes, envelopes, and passphrase encryption.
//!
//! This crate contains no I/O, no storage, no networking. It turns submitted
//! bytes into storable blobs and back.
//!
//! ## Key Types
//!
//! - [`Paste`] - Paste text plus an optional [`PasteName`]
//! - [`EnvelopeFormat`] - How a paste is laid out in the store (raw or structured)
//! - [`PasteKey`] - AES-256-GCM key derived from a passphrase
//!
//! ## Pipeline
//!
//! ```text
//! put:  Paste --encode--> envelope bytes --seal (optional)--> blob
//! get:  blob  --open (optional)--> envelope bytes --decode--> Paste
//! ```
//!
//! ```rust
//! use blockpaste_core::{cipher, EnvelopeFormat, Paste};
//!
//! let paste = Paste::new("hello world").unwrap();
//! let envelope = EnvelopeFormat::Raw.encode(&paste).unwrap();
//! let blob = cipher::encrypt(&envelope, "secret").unwrap();
//!
//! let opened = cipher::decrypt(&blob, "secret").unwrap();
//! assert_eq!(EnvelopeFormat::Raw.decode(opened).unwrap(), paste);
//! ```

pub mod cipher;
pub mod envelope;
pub mod error;
pub mod paste;
pub mod validation;

pub use cipher::{PasteKey, PasteNonce, NONCE_LEN, SEAL_OVERHEAD, TAG_LEN};
pub use envelope::{EnvelopeFormat, PasteDocument};
pub use error::{CoreError, Result, ValidationError};
pub use paste::{Paste, PasteName, MAX_NAME_LEN, MAX_PASTE_SIZE};
pub use validation::{validate_name, validate_request_path, MAX_PATH_LEN};
