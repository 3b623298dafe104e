//! Proptest generators for property-based testing.

use proptest::prelude::*;

use blockpaste_core::{Paste, PasteName, MAX_NAME_LEN};
use blockpaste_store::ContentId;

/// Generate a valid paste name, up to the full length limit.
pub fn paste_name() -> impl Strategy<Value = PasteName> {
    proptest::string::string_regex(&format!("[A-Za-z0-9.]{{1,{MAX_NAME_LEN}}}"))
        .expect("valid regex")
        .prop_map(|s| PasteName::new(s).expect("generated name is valid"))
}

/// Generate a string that contains at least one character outside `[A-Za-z0-9.]`.
pub fn invalid_paste_name() -> impl Strategy<Value = String> {
    ("[A-Za-z0-9.]{0,10}", "[^A-Za-z0-9.]", "[A-Za-z0-9.]{0,10}")
        .prop_map(|(a, bad, b)| format!("{a}{bad}{b}"))
}

/// Generate arbitrary paste bytes of at most `max_len`.
pub fn paste_bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate UTF-8 paste text, including the empty string.
pub fn paste_text() -> impl Strategy<Value = String> {
    "\\PC{0,256}".prop_map(String::from)
}

/// Generate an unnamed paste with arbitrary bytes.
pub fn raw_paste() -> impl Strategy<Value = Paste> {
    paste_bytes(1024).prop_map(|bytes| Paste::new(bytes).expect("within size limit"))
}

/// Generate a paste the structured envelope can carry: UTF-8 text, optional name.
pub fn structured_paste() -> impl Strategy<Value = Paste> {
    (paste_text(), proptest::option::of(paste_name())).prop_map(|(text, name)| {
        Paste::new(text)
            .expect("within size limit")
            .with_name(name)
    })
}

/// Generate a non-empty passphrase.
pub fn passphrase() -> impl Strategy<Value = String> {
    "\\PC{1,64}".prop_map(String::from)
}

/// Generate two distinct passphrases.
pub fn distinct_passphrases() -> impl Strategy<Value = (String, String)> {
    (passphrase(), passphrase()).prop_filter("passphrases must differ", |(a, b)| a != b)
}

/// Generate a valid content id.
pub fn content_id() -> impl Strategy<Value = ContentId> {
    "[A-Za-z0-9]{1,128}".prop_map(|s| ContentId::new(s).expect("generated id is valid"))
}

/// Parameters for a paste submission.
#[derive(Debug, Clone)]
pub struct PasteParams {
    pub text: String,
    pub name: Option<PasteName>,
    pub passphrase: Option<String>,
}

impl Arbitrary for PasteParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            paste_text(),
            proptest::option::of(paste_name()),
            proptest::option::of(passphrase()),
        )
            .prop_map(|(text, name, passphrase)| PasteParams {
                text,
                name,
                passphrase,
            })
            .boxed()
    }
}

impl PasteParams {
    /// Build the paste these parameters describe.
    pub fn paste(&self) -> Paste {
        Paste::new(self.text.clone())
            .expect("within size limit")
            .with_name(self.name.clone())
    }
}
