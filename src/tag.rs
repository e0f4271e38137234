/// Type tag written as the first byte of every encoded value.
///
/// The discriminant of each variant is the tag byte itself, so `Tag::Dict as
/// u8 == b'{'`.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Tag {
    Nil = b'0',
    True = b'T',
    False = b'F',
    String = b's',
    Unicode = b'u',
    Int = b'i',
    Dict = b'{',
}

impl Tag {
    /// Looks up the tag for a raw byte, returning `None` for bytes outside
    /// the supported set.
    ///
    /// # Example
    ///
    /// ```
    /// use na_marshal::Tag;
    ///
    /// assert_eq!(Tag::from_u8(b'i'), Some(Tag::Int));
    /// assert_eq!(Tag::from_u8(b'l'), None);
    /// ```
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            b'0' => Some(Self::Nil),
            b'T' => Some(Self::True),
            b'F' => Some(Self::False),
            b's' => Some(Self::String),
            b'u' => Some(Self::Unicode),
            b'i' => Some(Self::Int),
            b'{' => Some(Self::Dict),
            _ => None,
        }
    }

    /// Returns `true` for the two string tags, `'s'` and `'u'`.
    ///
    /// Only values carrying one of these tags can be dictionary keys.
    pub const fn is_text(self) -> bool {
        matches!(self, Self::String | Self::Unicode)
    }

    pub const fn is_composite(self) -> bool {
        matches!(self, Self::Dict)
    }

    /// Size of the payload following the tag byte, when it is fixed.
    ///
    /// ```
    /// use na_marshal::Tag;
    ///
    /// assert_eq!(Tag::Nil.payload_size(), Some(0));
    /// assert_eq!(Tag::Int.payload_size(), Some(4));
    /// assert_eq!(Tag::String.payload_size(), None);
    /// ```
    pub const fn payload_size(self) -> Option<usize> {
        match self {
            Self::Nil | Self::True | Self::False => Some(0),
            Self::Int => Some(4),
            Self::String | Self::Unicode | Self::Dict => None,
        }
    }
}

impl From<Tag> for u8 {
    #[inline]
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}
