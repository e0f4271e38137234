//! Tag-driven decoding of marshal values.
//!
//! Every encoded value starts with a one byte [`Tag`]. Scalars carry a fixed
//! or length-prefixed payload; a dictionary is a run of key/value pairs that
//! ends at the first key which is not text (conventionally a single `'0'`).
//!
//! | Tag | Value | Payload |
//! |-----|-------|---------|
//! | `'0'` | [`Value::Nil`] | none |
//! | `'T'` / `'F'` | [`Value::Bool`] | none |
//! | `'s'` / `'u'` | [`Value::Text`] | `u32` LE length, then that many bytes |
//! | `'i'` | [`Value::Int`] | `u32` LE, reinterpreted as `i32` |
//! | `'{'` | [`Value::Dict`] | key/value pairs, then a non-text key |

use std::iter::FusedIterator;

use log::{debug, trace};

use crate::{DecodeConfig, Dict, Error, Reader, Result, Tag, Text, Value, cold_path};

/// A decode session: one [`Reader`] bound to one buffer.
///
/// Call [`decode_next`](Decoder::decode_next) repeatedly, or iterate, to pull
/// out the top-level values in order.
///
/// # Example
///
/// ```
/// use na_marshal::{Decoder, Value};
///
/// let data = b"T{s\x01\x00\x00\x00ai\x07\x00\x00\x000";
/// let mut decoder = Decoder::new(&data[..]);
///
/// assert_eq!(decoder.decode_next().unwrap(), Some(Value::Bool(true)));
/// let dict = decoder.decode_next().unwrap().unwrap();
/// assert_eq!(dict["a"], Value::Int(7));
/// assert_eq!(decoder.decode_next().unwrap(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Decoder<B> {
    reader: Reader<B>,
    config: DecodeConfig,
    finished: bool,
}

impl<B: AsRef<[u8]>> Decoder<B> {
    pub fn new(buf: B) -> Self {
        Self::with_config(buf, DecodeConfig::default())
    }

    pub fn with_config(buf: B, config: DecodeConfig) -> Self {
        Self {
            reader: Reader::new(buf),
            config,
            finished: false,
        }
    }

    #[inline]
    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    /// Offset of the next unread byte.
    #[inline]
    pub fn position(&self) -> usize {
        self.reader.position()
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.reader.remaining()
    }

    #[inline]
    pub fn into_inner(self) -> Reader<B> {
        self.reader
    }

    /// Decodes the next top-level value.
    ///
    /// Returns `Ok(None)` once the buffer is exhausted. By default this is
    /// also the outcome when the input stops in the middle of a dictionary;
    /// see [`DecodeConfig::strict_dicts`] to make that an error instead.
    ///
    /// After an error the cursor position is unspecified and the session
    /// should be dropped.
    pub fn decode_next(&mut self) -> Result<Option<Value>> {
        let start = self.reader.position();
        let result = self.decode_value(0);
        match &result {
            Ok(Some(value)) => trace!(
                "decoded {:?} at {start:#x}..{:#x}",
                value.tag(),
                self.reader.position()
            ),
            Ok(None) => trace!("end of input at {start:#x}"),
            Err(e) => debug!("decoding value at {start:#x} failed: {e}"),
        }
        result
    }

    fn decode_value(&mut self, depth: usize) -> Result<Option<Value>> {
        if !self.reader.has_more() {
            return Ok(None);
        }

        let anchor = self.reader.position();
        let tag_id = self.reader.read_u8()?;
        let Some(tag) = Tag::from_u8(tag_id) else {
            cold_path();
            return Err(Error::UnsupportedTag {
                tag: tag_id,
                offset: anchor,
            });
        };

        let value = match tag {
            Tag::Nil => Value::Nil,
            Tag::True => Value::Bool(true),
            Tag::False => Value::Bool(false),
            Tag::String | Tag::Unicode => Value::Text(self.read_text()?),
            Tag::Int => Value::Int(self.reader.read_i32_le()?),
            Tag::Dict => match self.decode_dict(anchor, depth + 1)? {
                Some(dict) => Value::Dict(dict),
                None => return Ok(None),
            },
        };
        Ok(Some(value))
    }

    fn read_text(&mut self) -> Result<Text> {
        let len = self.reader.read_u32_le()? as usize;
        Ok(Text::from(self.reader.read_bytes(len)?))
    }

    /// Reads key/value pairs until a non-text key shows up.
    ///
    /// `anchor` is the offset of the opening `'{'` and `depth` counts it.
    fn decode_dict(&mut self, anchor: usize, depth: usize) -> Result<Option<Dict>> {
        if depth > self.config.max_depth {
            cold_path();
            debug!(
                "dictionary at {anchor:#x} exceeds nesting limit {}",
                self.config.max_depth
            );
            return Err(Error::RecursionLimitExceeded {
                limit: self.config.max_depth,
                offset: anchor,
            });
        }

        let mut dict = Dict::new();
        loop {
            let Some(key) = self.decode_value(depth)? else {
                return self.unterminated(anchor);
            };
            let Value::Text(key) = key else {
                return Ok(Some(dict));
            };
            let Some(value) = self.decode_value(depth)? else {
                return self.unterminated(anchor);
            };
            dict.insert(key, value);
        }
    }

    fn unterminated(&self, anchor: usize) -> Result<Option<Dict>> {
        cold_path();
        if self.config.strict_dicts {
            Err(Error::UnterminatedDict { offset: anchor })
        } else {
            Ok(None)
        }
    }
}

impl<B: AsRef<[u8]>> Iterator for Decoder<B> {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.decode_next() {
            Ok(Some(value)) => Some(Ok(value)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<B: AsRef<[u8]>> FusedIterator for Decoder<B> {}

#[cfg(feature = "shared")]
impl From<bytes::Bytes> for Decoder<bytes::Bytes> {
    #[inline]
    fn from(bytes: bytes::Bytes) -> Self {
        Self::new(bytes)
    }
}

/// Decodes the first value of `data`, or `None` if it is empty.
///
/// ```
/// use na_marshal::{Value, decode};
///
/// assert_eq!(decode(b"i\xff\xff\xff\xff").unwrap(), Some(Value::Int(-1)));
/// ```
pub fn decode(data: &[u8]) -> Result<Option<Value>> {
    Decoder::new(data).decode_next()
}

/// Decodes every top-level value of `data`, stopping at end of input or at
/// the first error.
///
/// ```
/// use na_marshal::{Value, decode_all};
///
/// let values = decode_all(b"TF0").unwrap();
/// assert_eq!(values, [Value::Bool(true), Value::Bool(false), Value::Nil]);
/// ```
pub fn decode_all(data: &[u8]) -> Result<Vec<Value>> {
    Decoder::new(data).collect()
}

/// Same as [`decode_all`] with explicit options.
pub fn decode_all_with_config(data: &[u8], config: DecodeConfig) -> Result<Vec<Value>> {
    Decoder::with_config(data, config).collect()
}

/// Starts a decode session that owns a reference-counted buffer.
#[cfg(feature = "shared")]
#[inline]
pub fn decode_shared(bytes: bytes::Bytes) -> Decoder<bytes::Bytes> {
    Decoder::from(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_is_end_of_input() {
        let mut decoder = Decoder::new(&b""[..]);
        assert!(decoder.decode_next().unwrap().is_none());
        assert_eq!(decoder.position(), 0);
    }

    #[test]
    fn terminator_may_be_any_non_text_value() {
        let mut decoder = Decoder::new(&b"{s\x01\x00\x00\x00kTi\x05\x00\x00\x00F"[..]);
        let value = decoder.decode_next().unwrap().unwrap();
        let dict = value.as_dict().unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("k"), Some(&Value::Bool(true)));
        assert_eq!(decoder.decode_next().unwrap(), Some(Value::Bool(false)));
    }

    #[test]
    fn dict_as_terminator_is_consumed() {
        let data = b"{{s\x01\x00\x00\x00xT0F";
        let mut decoder = Decoder::new(&data[..]);
        let value = decoder.decode_next().unwrap().unwrap();
        assert_eq!(value, Value::Dict(Dict::new()));
        assert_eq!(decoder.position(), data.len() - 1);
    }

    #[test]
    fn depth_limit_counts_open_dicts() {
        let config = DecodeConfig::default().max_depth(2);
        let mut ok = Decoder::with_config(&b"{s\x01\x00\x00\x00a{00"[..], config);
        assert!(ok.decode_next().unwrap().is_some());

        let mut too_deep =
            Decoder::with_config(&b"{s\x01\x00\x00\x00a{s\x01\x00\x00\x00b{000"[..], config);
        match too_deep.decode_next() {
            Err(Error::RecursionLimitExceeded {
                limit: 2,
                offset: 14,
            }) => {}
            other => panic!("Expected RecursionLimitExceeded, got {other:?}"),
        }
    }

    #[test]
    fn iterator_fuses_after_error() {
        let mut decoder = Decoder::new(&b"Tx0"[..]);
        assert_eq!(decoder.next().unwrap().unwrap(), Value::Bool(true));
        assert!(decoder.next().unwrap().is_err());
        assert!(decoder.next().is_none());
    }
}
