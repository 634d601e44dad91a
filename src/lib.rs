//! Bencode encoding and decoding ([BEP-3]).
//!
//! Bencode is the serialization format used throughout BitTorrent for storing
//! and transmitting structured data. This crate turns a byte buffer into a
//! [`Value`] tree and back. It performs no I/O; callers read and write the
//! bytes themselves.
//!
//! # Data Types
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//! | Float (extension) | `f<numeral>e` | `f1.5e` → 1.5 |
//!
//! Floats are not part of standard bencode. Both directions refuse them
//! unless the float extension is enabled in [`DecodeConfig`] or
//! [`EncodeConfig`].
//!
//! # Examples
//!
//! ## Decoding bencode data
//!
//! ```
//! use rbencode::{decode, Value};
//!
//! // Decode a list
//! let value = decode(b"l4:spami42ee").unwrap();
//! let list = value.as_list().unwrap();
//! assert_eq!(list.len(), 2);
//!
//! // Decode a dictionary
//! let value = decode(b"d3:foo3:bare").unwrap();
//! let foo = value.get(b"foo").unwrap();
//! assert_eq!(foo.as_str(), Some("bar"));
//! ```
//!
//! ## Encoding bencode data
//!
//! ```
//! use rbencode::{encode, serialize, EncodeConfig, Value};
//!
//! let dict: Value = [("spam", Value::Integer(1)), ("cow", Value::Integer(2))]
//!     .into_iter()
//!     .collect();
//!
//! // Canonical order sorts keys by their bytes
//! assert_eq!(encode(&dict).unwrap(), b"d3:cowi2e4:spami1ee");
//!
//! // Insertion order on request
//! let config = EncodeConfig::default().with_canonical_key_order(false);
//! assert_eq!(serialize(&dict, &config).unwrap(), b"d4:spami1e3:cowi2ee");
//! ```
//!
//! # Error Handling
//!
//! Decoding stops at the first problem and reports a [`DecodeError`] with
//! the byte offset where it was found, for example:
//!
//! - [`DecodeError::MalformedNumber`] - Leading zeros, empty or non-digit numerals
//! - [`DecodeError::UnexpectedEnd`] - Input ended inside a value
//! - [`DecodeError::NestingTooDeep`] - Lists/dictionaries nested past the configured limit
//! - [`DecodeError::TrailingData`] - Extra data after the value
//!
//! Encoding only fails on floats: [`EncodeError::FloatExtensionDisallowed`]
//! and [`EncodeError::NonFiniteFloat`].
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod config;
mod decode;
mod encode;
mod error;
mod value;

pub use config::{DecodeConfig, EncodeConfig, DEFAULT_MAX_NESTING_DEPTH};
pub use decode::{decode, decode_prefix, decode_with};
pub use encode::{encode, serialize, serialize_into};
pub use error::{DecodeError, EncodeError};
pub use value::{Dict, Value};
