//! Serde deserializer for marshal data.
//!
//! This module provides a [`serde::Deserializer`] that decodes one marshal
//! value straight into a Rust type, without building a [`Value`] tree first.
//!
//! # Quick Start
//!
//! ```
//! use serde::Deserialize;
//! use na_marshal::from_slice;
//!
//! #[derive(Deserialize)]
//! struct Entry<'a> {
//!     name: &'a str,
//!     size: i32,
//!     hidden: bool,
//! }
//!
//! let data = b"{u\x04\x00\x00\x00names\x05\x00\x00\x00a.txt\
//!              s\x04\x00\x00\x00sizei\x00\x01\x00\x00\
//!              s\x06\x00\x00\x00hiddenF0";
//! let entry: Entry = from_slice(data).unwrap();
//! assert_eq!(entry.name, "a.txt");
//! assert_eq!(entry.size, 256);
//! assert!(!entry.hidden);
//! ```
//!
//! # Marshal to Rust Type Mapping
//!
//! | Tag | Rust Types |
//! |-----|------------|
//! | `'0'` | `()`, unit structs, `None` |
//! | `'T'` / `'F'` | `bool` |
//! | `'i'` | `i32` and any integer or float type the value fits in |
//! | `'s'` / `'u'` | `&str`, `String`, `char`, `&[u8]`, unit enum variants |
//! | `'{'` | structs, `HashMap<String, T>`, `BTreeMap<String, T>`, single-entry dictionaries for newtype and struct enum variants |
//!
//! Text that is not valid UTF-8 is handed to visitors as bytes by
//! `deserialize_any`; `String` targets get the lossy decoding of
//! [`Text::decode`](crate::Text::decode).
//!
//! [`Value`]: crate::Value

use std::{borrow::Cow, io::Read};

use serde::{
    Deserialize,
    de::{self, DeserializeOwned, EnumAccess, IgnoredAny, MapAccess, VariantAccess},
    forward_to_deserialize_any,
};

use crate::{DecodeConfig, Error, Reader, Result, Tag, cold_path, value::decode_text};

/// Marshal deserializer implementing [`serde::Deserializer`].
///
/// For most use cases, prefer [`from_slice`] or [`from_reader`].
pub struct Deserializer<'de> {
    reader: Reader<&'de [u8]>,
    depth: usize,
    max_depth: usize,
}

impl<'de> Deserializer<'de> {
    pub fn from_slice(input: &'de [u8]) -> Self {
        Self::with_config(input, DecodeConfig::default())
    }

    /// Only [`DecodeConfig::max_depth`] applies here; a dictionary cut short
    /// by the end of input is always [`Error::UnterminatedDict`].
    pub fn with_config(input: &'de [u8], config: DecodeConfig) -> Self {
        Self {
            reader: Reader::new(input),
            depth: 0,
            max_depth: config.max_depth,
        }
    }

    /// Fails with [`Error::TrailingData`] unless the input is fully consumed.
    pub fn end(&self) -> Result<()> {
        match self.reader.remaining() {
            0 => Ok(()),
            remaining => {
                cold_path();
                Err(Error::TrailingData(remaining))
            }
        }
    }

    fn peek_tag(&self) -> Result<(Tag, usize)> {
        let offset = self.reader.position();
        let Some(tag_id) = self.reader.peek_u8() else {
            cold_path();
            return Err(Error::EndOfInput);
        };
        match Tag::from_u8(tag_id) {
            Some(tag) => Ok((tag, offset)),
            None => {
                cold_path();
                Err(Error::UnsupportedTag {
                    tag: tag_id,
                    offset,
                })
            }
        }
    }

    fn read_tag(&mut self) -> Result<(Tag, usize)> {
        let tag = self.peek_tag()?;
        self.reader.read_u8()?;
        Ok(tag)
    }

    fn parse_text(&mut self) -> Result<&'de [u8]> {
        let len = self.reader.read_u32_le()? as usize;
        self.reader.read_borrowed(len)
    }

    fn enter(&mut self, offset: usize) -> Result<()> {
        if self.depth >= self.max_depth {
            cold_path();
            return Err(Error::RecursionLimitExceeded {
                limit: self.max_depth,
                offset,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}

/// Deserialize a single marshal value from a byte slice.
///
/// # Errors
///
/// Besides the decoding errors of [`Decoder`](crate::Decoder), this fails
/// with [`Error::EndOfInput`] on an empty slice and with
/// [`Error::TrailingData`] if anything follows the value.
pub fn from_slice<'de, T>(input: &'de [u8]) -> Result<T>
where
    T: Deserialize<'de>,
{
    from_slice_with_config(input, DecodeConfig::default())
}

pub fn from_slice_with_config<'de, T>(input: &'de [u8], config: DecodeConfig) -> Result<T>
where
    T: Deserialize<'de>,
{
    let mut deserializer = Deserializer::with_config(input, config);
    let value = T::deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(value)
}

/// Deserialize from any `std::io::Read` implementation.
///
/// This reads all data into a buffer first, then deserializes.
pub fn from_reader<T, R: Read>(mut reader: R) -> Result<T>
where
    T: DeserializeOwned,
{
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    from_slice(&buf)
}

impl<'de> de::Deserializer<'de> for &mut Deserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let (tag, offset) = self.read_tag()?;
        match tag {
            Tag::Nil => visitor.visit_unit(),
            Tag::True => visitor.visit_bool(true),
            Tag::False => visitor.visit_bool(false),
            Tag::String | Tag::Unicode => {
                let bytes = self.parse_text()?;
                match std::str::from_utf8(bytes) {
                    Ok(s) => visitor.visit_borrowed_str(s),
                    Err(_) => visitor.visit_borrowed_bytes(bytes),
                }
            }
            Tag::Int => visitor.visit_i32(self.reader.read_i32_le()?),
            Tag::Dict => {
                self.enter(offset)?;
                let value = visitor.visit_map(DictAccess {
                    deserializer: &mut *self,
                    offset,
                })?;
                self.leave();
                Ok(value)
            }
        }
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let (tag, _) = self.peek_tag()?;
        if !tag.is_text() {
            return self.deserialize_any(visitor);
        }
        self.reader.read_u8()?;
        match decode_text(self.parse_text()?) {
            Cow::Borrowed(s) => visitor.visit_borrowed_str(s),
            Cow::Owned(s) => visitor.visit_string(s),
        }
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.peek_tag()? {
            (Tag::Nil, _) => {
                self.reader.read_u8()?;
                visitor.visit_none()
            }
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let (tag, offset) = self.read_tag()?;
        match tag {
            // Unit variant: the variant name as text
            Tag::String | Tag::Unicode => match decode_text(self.parse_text()?) {
                Cow::Borrowed(s) => {
                    visitor.visit_enum(de::value::BorrowedStrDeserializer::<Error>::new(s))
                }
                Cow::Owned(s) => visitor.visit_enum(de::value::StringDeserializer::<Error>::new(s)),
            },
            // Newtype or struct variant: { variant_name: <value> }
            Tag::Dict => {
                self.enter(offset)?;
                let value = visitor.visit_enum(VariantAccessor {
                    deserializer: &mut *self,
                })?;
                let (tag, _) = self.peek_tag().map_err(|e| match e {
                    Error::EndOfInput => Error::UnterminatedDict { offset },
                    e => e,
                })?;
                if tag.is_text() {
                    cold_path();
                    return Err(Error::Message(
                        "expected a single-entry dictionary for enum variant".into(),
                    ));
                }
                IgnoredAny::deserialize(&mut *self)?;
                self.leave();
                Ok(value)
            }
            _ => {
                cold_path();
                Err(Error::Message(format!(
                    "expected text or dictionary for enum, found {tag:?} at byte {offset:#x}"
                )))
            }
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

struct DictAccess<'a, 'de: 'a> {
    deserializer: &'a mut Deserializer<'de>,
    offset: usize,
}

impl<'a, 'de> DictAccess<'a, 'de> {
    fn check_open(&self) -> Result<()> {
        if self.deserializer.reader.has_more() {
            Ok(())
        } else {
            cold_path();
            Err(Error::UnterminatedDict {
                offset: self.offset,
            })
        }
    }
}

impl<'a, 'de> MapAccess<'de> for DictAccess<'a, 'de> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        self.check_open()?;
        let (tag, _) = self.deserializer.peek_tag()?;
        if tag.is_text() {
            seed.deserialize(&mut *self.deserializer).map(Some)
        } else {
            // The terminator key is a full value and has to be consumed.
            IgnoredAny::deserialize(&mut *self.deserializer)?;
            Ok(None)
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        self.check_open()?;
        seed.deserialize(&mut *self.deserializer)
    }
}

struct VariantAccessor<'a, 'de: 'a> {
    deserializer: &'a mut Deserializer<'de>,
}

impl<'a, 'de> EnumAccess<'de> for VariantAccessor<'a, 'de> {
    type Error = Error;
    type Variant = Self;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let (tag, offset) = self.deserializer.peek_tag()?;
        if !tag.is_text() {
            cold_path();
            return Err(Error::Message(format!(
                "expected variant name, found {tag:?} at byte {offset:#x}"
            )));
        }
        let variant = seed.deserialize(&mut *self.deserializer)?;
        Ok((variant, self))
    }
}

impl<'a, 'de> VariantAccess<'de> for VariantAccessor<'a, 'de> {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        <()>::deserialize(self.deserializer)
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(self.deserializer)
    }

    fn tuple_variant<V>(self, _len: usize, _visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        cold_path();
        Err(Error::Message(
            "tuple variants have no marshal representation".into(),
        ))
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_map(self.deserializer, visitor)
    }
}
