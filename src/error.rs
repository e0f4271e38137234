//! Error types for marshal decoding.
//!
//! This module contains the [`Error`] type which represents every way a
//! decode session can fail. Reaching the end of the input between two
//! top-level values is *not* an error: [`Decoder::decode_next`] reports it as
//! `Ok(None)`.
//!
//! # Example
//!
//! ```
//! use na_marshal::{Decoder, Error, Result};
//!
//! fn first_int(data: &[u8]) -> Result<Option<i32>> {
//!     match Decoder::new(data).decode_next() {
//!         Ok(Some(value)) => Ok(value.as_int()),
//!         Ok(None) => Ok(None),
//!         Err(Error::UnsupportedTag { tag, offset }) => {
//!             println!("unknown tag {tag:#04x} at {offset:#x}");
//!             Err(Error::UnsupportedTag { tag, offset })
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//!
//! assert_eq!(first_int(b"i\x2a\x00\x00\x00").unwrap(), Some(42));
//! assert_eq!(first_int(b"").unwrap(), None);
//! ```
//!
//! [`Decoder::decode_next`]: crate::Decoder::decode_next

use std::fmt::{self, Display};

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when decoding
/// marshal data.
///
/// After any error the decode session is finished: the cursor position is
/// left wherever the failing read stopped and must not be reused to resume
/// mid-value.
#[derive(Debug)]
pub enum Error {
    /// A custom message raised through serde.
    Message(String),

    /// An I/O error occurred while loading the input.
    IO(std::io::Error),

    /// A tag byte outside the supported set was found.
    ///
    /// `offset` is the position of the tag byte itself.
    UnsupportedTag { tag: u8, offset: usize },

    /// A primitive read asked for more bytes than the buffer has left.
    ///
    /// `offset` is the cursor position at the time of the read.
    OutOfBounds {
        offset: usize,
        requested: usize,
        remaining: usize,
    },

    /// Dictionaries are nested deeper than the configured limit.
    ///
    /// `offset` is the position of the `'{'` that would have exceeded it.
    RecursionLimitExceeded { limit: usize, offset: usize },

    /// The input ended while a dictionary was still open.
    ///
    /// Only reported when [`DecodeConfig::strict_dicts`] is enabled;
    /// `offset` points at the opening `'{'`.
    ///
    /// [`DecodeConfig::strict_dicts`]: crate::DecodeConfig::strict_dicts
    UnterminatedDict { offset: usize },

    /// A value was required but the input was already exhausted.
    EndOfInput,

    /// Extra bytes remain after the single value that was requested.
    TrailingData(usize),
}

#[cfg(feature = "serde")]
impl serde::de::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Message(message) => formatter.write_str(message),
            Error::IO(error) => formatter.write_str(&error.to_string()),
            Error::UnsupportedTag { tag, offset } => {
                write!(formatter, "unsupported type {tag:#04x} at byte {offset:#x}")
            }
            Error::OutOfBounds {
                offset,
                requested,
                remaining,
            } => write!(
                formatter,
                "read of {requested} bytes at byte {offset:#x} is out of bounds: {remaining} bytes remaining"
            ),
            Error::RecursionLimitExceeded { limit, offset } => write!(
                formatter,
                "recursion limit of {limit} exceeded at byte {offset:#x}"
            ),
            Error::UnterminatedDict { offset } => {
                write!(formatter, "dictionary opened at byte {offset:#x} is never terminated")
            }
            Error::EndOfInput => formatter.write_str("unexpected end of input"),
            Error::TrailingData(remaining_bytes) => write!(
                formatter,
                "trailing data after end of input: {remaining_bytes} bytes remaining"
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IO(error) => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::IO(error)
    }
}
