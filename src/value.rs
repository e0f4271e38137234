mod dict;
mod text;

pub use dict::*;
pub use text::*;

use std::borrow::Cow;

use crate::{Index, Tag};

/// A fully decoded marshal value.
///
/// Values own all of their data; once produced they hold no reference to the
/// buffer they were decoded from.
///
/// # Example
///
/// ```
/// use na_marshal::{Dict, Value};
///
/// let value = Value::from(Dict::from_iter([("a", Value::from(1)), ("b", Value::from(true))]));
/// assert_eq!(value["a"].as_int(), Some(1));
/// assert_eq!(value["b"].as_bool(), Some(true));
/// assert!(value["missing"].is_nil());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Text(Text),
    Int(i32),
    Dict(Dict),
}

static NIL: Value = Value::Nil;

impl Value {
    /// The tag this value is written with. Text always reports
    /// [`Tag::Unicode`] since `'s'` and `'u'` decode to the same variant.
    pub const fn tag(&self) -> Tag {
        match self {
            Value::Nil => Tag::Nil,
            Value::Bool(true) => Tag::True,
            Value::Bool(false) => Tag::False,
            Value::Text(_) => Tag::Unicode,
            Value::Int(_) => Tag::Int,
            Value::Dict(_) => Tag::Dict,
        }
    }

    #[inline]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    #[inline]
    pub const fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Value::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Decoded text, see [`Text::decode`].
    #[inline]
    pub fn as_str(&self) -> Option<Cow<'_, str>> {
        self.as_text().map(Text::decode)
    }

    #[inline]
    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Dict(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_dict_mut(&mut self) -> Option<&mut Dict> {
        match self {
            Value::Dict(value) => Some(value),
            _ => None,
        }
    }

    /// Looks up `key` if this value is a dictionary.
    #[inline]
    pub fn get<I: Index + ?Sized>(&self, key: &I) -> Option<&Value> {
        self.as_dict().and_then(|dict| dict.get(key))
    }
}

impl<I: Index + ?Sized> std::ops::Index<&I> for Value {
    type Output = Value;

    /// Returns [`Value::Nil`] when this is not a dictionary or the key is
    /// absent.
    fn index(&self, key: &I) -> &Value {
        self.get(key).unwrap_or(&NIL)
    }
}

impl From<()> for Value {
    #[inline]
    fn from(_: ()) -> Self {
        Value::Nil
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<Text> for Value {
    #[inline]
    fn from(value: Text) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::Text(value.into())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Value::Text(value.into())
    }
}

impl From<Dict> for Value {
    #[inline]
    fn from(value: Dict) -> Self {
        Value::Dict(value)
    }
}
