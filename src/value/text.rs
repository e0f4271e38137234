use std::{
    borrow::{Borrow, Cow},
    fmt,
};

use crate::cold_path;

/// Payload of a `'s'` or `'u'` value.
///
/// The bytes are kept exactly as they appeared on the wire; no UTF-8
/// validation happens while decoding. [`decode`](Text::decode) turns them
/// into a `str` on demand.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Text(Vec<u8>);

impl Text {
    #[inline]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the text as a `str`, borrowing when the payload is valid
    /// UTF-8.
    ///
    /// Payloads written with surrogate escapes (each half of a surrogate pair
    /// encoded on its own, as CESU-8 does) are recombined; anything else that
    /// is not valid is replaced with `U+FFFD`.
    ///
    /// ```
    /// use na_marshal::Text;
    ///
    /// assert_eq!(Text::from("café").decode(), "café");
    /// assert_eq!(Text::from(&b"\xed\xa0\xbd\xed\xb8\x80"[..]).decode(), "😀");
    /// ```
    #[inline]
    pub fn decode(&self) -> Cow<'_, str> {
        decode_text(&self.0)
    }

    #[inline]
    pub fn to_utf8_string(&self) -> String {
        self.decode().into_owned()
    }
}

pub(crate) fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => {
            cold_path();
            simd_cesu8::decode_lossy(bytes)
        }
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Text").field(&self.decode()).finish()
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.decode())
    }
}

impl Borrow<[u8]> for Text {
    #[inline]
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Text {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for Text {
    #[inline]
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}

impl From<String> for Text {
    #[inline]
    fn from(value: String) -> Self {
        Self(value.into_bytes())
    }
}

impl From<&[u8]> for Text {
    #[inline]
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl From<Vec<u8>> for Text {
    #[inline]
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}
