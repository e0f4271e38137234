//! Decoder for the tagged binary marshal format.
//!
//! A marshal stream is a sequence of self-describing values. Each starts with
//! a single tag byte; this crate understands nil, booleans, 32-bit integers,
//! byte/text strings and dictionaries with text keys.
//!
//! ```
//! use na_marshal::{Decoder, Value};
//!
//! let data = b"{s\x04\x00\x00\x00nameu\x03\x00\x00\x00bobs\x03\x00\x00\x00agei\x1e\x00\x00\x000";
//! let mut decoder = Decoder::new(&data[..]);
//! let value = decoder.decode_next().unwrap().unwrap();
//!
//! assert_eq!(value["name"].as_str().unwrap(), "bob");
//! assert_eq!(value["age"], Value::Int(30));
//! assert!(decoder.decode_next().unwrap().is_none());
//! ```

mod config;
#[cfg(feature = "serde")]
pub mod de;
mod decoder;
pub mod error;
mod index;
mod reader;
mod tag;
mod util;
pub mod value;

pub use config::*;
#[cfg(feature = "serde")]
pub use de::{Deserializer, from_reader, from_slice, from_slice_with_config};
pub use decoder::*;
pub use error::*;
pub use index::*;
pub use reader::*;
pub use tag::*;
pub use util::*;
pub use value::*;
