//! Property tests for the cipher, the envelopes, and path translation.
//!
//! Driven by the shared generators so every crate agrees on what a valid
//! name, paste, passphrase, and content id look like.

use proptest::prelude::*;

use blockpaste_core::cipher::{decrypt, encrypt};
use blockpaste_core::{EnvelopeFormat, SEAL_OVERHEAD};
use blockpaste_store::{internalize, publicize, BlockPath, PastePath};
use blockpaste_testkit::generators::{
    content_id, distinct_passphrases, paste_bytes, raw_paste, structured_paste,
};
use blockpaste_testkit::PasteParams;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sealed_params_open_with_their_passphrase(params: PasteParams) {
        let paste = params.paste();
        let bytes = EnvelopeFormat::Structured.encode(&paste).unwrap();

        let stored = match &params.passphrase {
            Some(pass) => {
                let blob = encrypt(&bytes, pass).unwrap();
                prop_assert_eq!(blob.len(), bytes.len() + SEAL_OVERHEAD);
                decrypt(&blob, pass).unwrap()
            }
            None => bytes.to_vec(),
        };

        prop_assert_eq!(EnvelopeFormat::Structured.decode(stored).unwrap(), paste);
    }

    #[test]
    fn wrong_passphrase_never_opens(
        data in paste_bytes(512),
        (right, wrong) in distinct_passphrases(),
    ) {
        let blob = encrypt(&data, &right).unwrap();
        prop_assert!(decrypt(&blob, &wrong).is_err());
        prop_assert_eq!(decrypt(&blob, &right).unwrap(), data);
    }

    #[test]
    fn raw_envelope_roundtrips(paste in raw_paste()) {
        let bytes = EnvelopeFormat::Raw.encode(&paste).unwrap();
        prop_assert_eq!(&bytes, paste.text());
        prop_assert_eq!(EnvelopeFormat::Raw.decode(bytes).unwrap(), paste);
    }

    #[test]
    fn structured_envelope_roundtrips(paste in structured_paste()) {
        let bytes = EnvelopeFormat::Structured.encode(&paste).unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        prop_assert!(doc.is_object());
        prop_assert_eq!(EnvelopeFormat::Structured.decode(bytes).unwrap(), paste);
    }

    #[test]
    fn paths_translate_both_ways(id in content_id()) {
        let public = PastePath::new(id.clone());
        let block = public.to_block_path();

        prop_assert_eq!(block.id(), &id);
        prop_assert_eq!(block.to_paste_path(), public.clone());
        prop_assert_eq!(internalize(&public.to_string()), Some(block.to_string()));
        prop_assert_eq!(publicize(&block.to_string()), Some(public.to_string()));
        prop_assert_eq!(BlockPath::parse(&block.to_string()).unwrap(), block);
    }
}
