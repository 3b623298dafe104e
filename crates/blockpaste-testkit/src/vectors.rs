//! Golden test vectors for the passphrase cipher.
//!
//! Each vector pins the key derivation and the `nonce || ciphertext` layout,
//! so blobs written by one build stay readable by the next.

use blockpaste_core::{CoreError, PasteKey, PasteNonce, NONCE_LEN};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    pub passphrase: &'static str,
    /// Expected SHA-256 of the passphrase (hex).
    pub expected_key: &'static str,
    pub nonce: [u8; NONCE_LEN],
    pub plaintext: &'static [u8],
    /// Expected sealed blob (hex).
    pub expected_blob: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "hello world under zero nonce",
            passphrase: "secret",
            expected_key: "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b",
            nonce: [0x00; NONCE_LEN],
            plaintext: b"hello world",
            expected_blob: "00000000000000000000000039a25c24497e4db7eb5af343f03ab7919eeab3c304de7757f1a5e6",
        },
        GoldenVector {
            name: "empty plaintext",
            passphrase: "key",
            expected_key: "2c70e12b7a0646f92279f427c7b38e7334d8e5389cff167a1dc30e73f826b683",
            nonce: [0x42; NONCE_LEN],
            plaintext: b"",
            expected_blob: "424242424242424242424242a40a3fab1db525eb466d5327e519df77",
        },
        GoldenVector {
            name: "structured envelope",
            passphrase: "correct horse battery staple",
            expected_key: "c4bbcb1fbec99d65bf59d85c8cb62ee2db963f0fe106f483d9afa73bd4e39a8a",
            nonce: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
            plaintext: br#"{"name":"notes.txt","text":"classified"}"#,
            expected_blob: "000102030405060708090a0b6cefb23201c8c0d0e9fad7ac20d9bac91e06c29ed3357202cccd18274a4fca2961e48655fe4d6fee9b03a50b952e3fc5cc81c840458cf067",
        },
    ]
}

/// Seal a vector's plaintext with its fixed nonce.
pub fn seal_vector(vector: &GoldenVector) -> Result<Vec<u8>, CoreError> {
    PasteKey::from_passphrase(vector.passphrase)
        .seal_with_nonce(vector.plaintext, &PasteNonce::from_bytes(vector.nonce))
}

/// Check every vector in both directions. Returns the names of failures.
pub fn verify_all_vectors() -> Vec<&'static str> {
    all_vectors()
        .iter()
        .filter(|v| !verify_vector(v))
        .map(|v| v.name)
        .collect()
}

fn verify_vector(vector: &GoldenVector) -> bool {
    let key = PasteKey::from_passphrase(vector.passphrase);
    if hex::encode(key.as_bytes()) != vector.expected_key {
        return false;
    }

    let sealed = match seal_vector(vector) {
        Ok(blob) => blob,
        Err(_) => return false,
    };
    if hex::encode(&sealed) != vector.expected_blob {
        return false;
    }

    let blob = match hex::decode(vector.expected_blob) {
        Ok(blob) => blob,
        Err(_) => return false,
    };
    matches!(key.open(&blob), Ok(plain) if plain == vector.plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockpaste_core::SEAL_OVERHEAD;

    #[test]
    fn test_vectors_verify() {
        assert!(verify_all_vectors().is_empty());
    }

    #[test]
    fn test_vector_blob_layout() {
        for v in all_vectors() {
            let blob = hex::decode(v.expected_blob).unwrap();
            assert_eq!(&blob[..NONCE_LEN], &v.nonce);
            assert_eq!(blob.len(), v.plaintext.len() + SEAL_OVERHEAD);
        }
    }

    #[test]
    fn test_vector_rejects_wrong_passphrase() {
        let v = &all_vectors()[0];
        let blob = hex::decode(v.expected_blob).unwrap();
        let wrong = PasteKey::from_passphrase("wrong");
        assert!(matches!(wrong.open(&blob), Err(CoreError::Authentication)));
    }
}
