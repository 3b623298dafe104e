//! Passphrase encryption for paste payloads.
//!
//! Key derivation: SHA-256(passphrase) -> 256-bit AES key.
//! Encryption: AES-256-GCM with a random 12-byte nonce per call.
//! Wire format: nonce (12 bytes) || ciphertext (includes 16-byte GCM tag).
//!
//! The derivation is a single fast hash, not a password-stretching function.
//! Existing sealed pastes depend on it, so changing it means a new wire format.

use std::fmt;

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::error::{CoreError, Result};

/// Nonce length for AES-256-GCM.
pub const NONCE_LEN: usize = 12;

/// GCM authentication tag length.
pub const TAG_LEN: usize = 16;

/// Bytes a sealed blob adds on top of its plaintext.
pub const SEAL_OVERHEAD: usize = NONCE_LEN + TAG_LEN;

/// A 256-bit AES-GCM key derived from a passphrase.
///
/// Lives for one encrypt or decrypt call; never persisted or logged.
#[derive(Clone)]
pub struct PasteKey([u8; 32]);

impl PasteKey {
    /// Derive a key from a passphrase.
    pub fn from_passphrase(passphrase: &str) -> Self {
        Self(Sha256::digest(passphrase.as_bytes()).into())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    fn cipher(&self) -> Aes256Gcm {
        Aes256Gcm::new(&Key::<Aes256Gcm>::from(self.0))
    }

    /// Encrypt with a fresh random nonce, returning `nonce || ciphertext`.
    pub fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.seal_with_nonce(plaintext, &PasteNonce::generate())
    }

    /// Encrypt with an explicit nonce. The nonce must never repeat for this key.
    pub fn seal_with_nonce(&self, plaintext: &[u8], nonce: &PasteNonce) -> Result<Vec<u8>> {
        let ciphertext = self
            .cipher()
            .encrypt(Nonce::from_slice(&nonce.0), plaintext)
            .map_err(|e| CoreError::Encryption(e.to_string()))?;

        let mut blob = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        blob.extend_from_slice(&nonce.0);
        blob.extend_from_slice(&ciphertext);
        Ok(blob)
    }

    /// Split `nonce || ciphertext` and decrypt.
    ///
    /// Any failure, including a blob too short to hold a nonce, is reported
    /// as [`CoreError::Authentication`].
    pub fn open(&self, blob: &[u8]) -> Result<Vec<u8>> {
        if blob.len() < NONCE_LEN {
            return Err(CoreError::Authentication);
        }

        let (nonce, ciphertext) = blob.split_at(NONCE_LEN);
        self.cipher()
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| CoreError::Authentication)
    }
}

impl fmt::Debug for PasteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasteKey(<redacted>)")
    }
}

/// A 96-bit nonce for AES-256-GCM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasteNonce([u8; NONCE_LEN]);

impl PasteNonce {
    /// Generate a new random nonce from the thread-local CSPRNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; NONCE_LEN];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; NONCE_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; NONCE_LEN] {
        &self.0
    }
}

/// Encrypt `plaintext` under a key derived from `passphrase`.
pub fn encrypt(plaintext: &[u8], passphrase: &str) -> Result<Vec<u8>> {
    PasteKey::from_passphrase(passphrase).seal(plaintext)
}

/// Decrypt a blob produced by [`encrypt`].
pub fn decrypt(blob: &[u8], passphrase: &str) -> Result<Vec<u8>> {
    PasteKey::from_passphrase(passphrase).open(blob)
}

/// Confirm the operating system entropy source can produce bytes.
pub fn assert_entropy() -> Result<()> {
    let mut sample = [0u8; 1];
    rand::rngs::OsRng
        .try_fill_bytes(&mut sample)
        .map_err(|e| CoreError::Encryption(format!("no usable system entropy: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encrypt_decrypt() {
        let blob = encrypt(b"hello, world!", "secret").unwrap();
        assert_eq!(blob.len(), SEAL_OVERHEAD + 13);
        assert_ne!(&blob[NONCE_LEN..], b"hello, world!");

        let plaintext = decrypt(&blob, "secret").unwrap();
        assert_eq!(plaintext, b"hello, world!");
    }

    #[test]
    fn test_empty_plaintext() {
        let blob = encrypt(b"", "secret").unwrap();
        assert_eq!(blob.len(), SEAL_OVERHEAD);
        assert_eq!(decrypt(&blob, "secret").unwrap(), b"");
    }

    #[test]
    fn test_encryption_is_not_deterministic() {
        let a = encrypt(b"classified", "secret").unwrap();
        let b = encrypt(b"classified", "secret").unwrap();
        assert_ne!(a, b);
        assert_ne!(&a[..NONCE_LEN], &b[..NONCE_LEN]);
    }

    #[test]
    fn test_decrypt_wrong_key_fails() {
        let blob = encrypt(b"secret", "right").unwrap();
        assert!(matches!(
            decrypt(&blob, "wrong"),
            Err(CoreError::Authentication)
        ));
    }

    #[test]
    fn test_short_blob_fails() {
        assert!(matches!(
            decrypt(&[0u8; 5], "key"),
            Err(CoreError::Authentication)
        ));
        assert!(matches!(decrypt(&[], "key"), Err(CoreError::Authentication)));
    }

    #[test]
    fn test_plaintext_treated_as_ciphertext_fails() {
        assert!(matches!(
            decrypt(b"just some ordinary paste text", "key"),
            Err(CoreError::Authentication)
        ));
    }

    #[test]
    fn test_key_derivation_deterministic() {
        let k1 = PasteKey::from_passphrase("awful_password");
        let k2 = PasteKey::from_passphrase("awful_password");
        assert_eq!(k1.as_bytes(), k2.as_bytes());

        let expected: [u8; 32] = Sha256::digest(b"awful_password").into();
        assert_eq!(k1.as_bytes(), &expected);
    }

    #[test]
    fn test_explicit_nonce_layout() {
        let key = PasteKey::from_bytes([0x42; 32]);
        let nonce = PasteNonce::from_bytes([0x07; NONCE_LEN]);

        let blob = key.seal_with_nonce(b"abc", &nonce).unwrap();
        assert_eq!(&blob[..NONCE_LEN], nonce.as_bytes());
        assert_eq!(key.open(&blob).unwrap(), b"abc");
    }

    #[test]
    fn test_key_debug_is_redacted() {
        let key = PasteKey::from_passphrase("hunter2");
        assert_eq!(format!("{:?}", key), "PasteKey(<redacted>)");
    }

    #[test]
    fn test_entropy_available() {
        assert!(assert_entropy().is_ok());
    }

    proptest! {
        #[test]
        fn prop_roundtrip(
            plaintext in prop::collection::vec(any::<u8>(), 0..2048),
            passphrase in ".{0,64}",
        ) {
            let blob = encrypt(&plaintext, &passphrase).unwrap();
            prop_assert_eq!(decrypt(&blob, &passphrase).unwrap(), plaintext);
        }

        #[test]
        fn prop_any_bit_flip_is_detected(
            plaintext in prop::collection::vec(any::<u8>(), 0..256),
            passphrase in "[a-z]{1,16}",
            position in any::<prop::sample::Index>(),
            bit in 0u8..8,
        ) {
            let mut blob = encrypt(&plaintext, &passphrase).unwrap();
            let i = position.index(blob.len());
            blob[i] ^= 1 << bit;
            prop_assert!(matches!(
                decrypt(&blob, &passphrase),
                Err(CoreError::Authentication)
            ));
        }

        #[test]
        fn prop_wrong_key_rejected(
            plaintext in prop::collection::vec(any::<u8>(), 0..256),
            k1 in "[a-z]{1,16}",
            k2 in "[a-z]{1,16}",
        ) {
            prop_assume!(k1 != k2);
            let blob = encrypt(&plaintext, &k1).unwrap();
            prop_assert!(matches!(decrypt(&blob, &k2), Err(CoreError::Authentication)));
        }
    }
}
