//! # Base404 Core
//!
//! A binary-to-text encoding over a fixed alphabet of 404 symbols.
//!
//! Bytes are packed in groups of three into three base-404 digits, with a
//! short final group of one or two bytes mapping to the same number of
//! digits. Encoded text therefore has exactly one symbol per input byte.
//!
//! ## Modules
//!
//! - `constants`: Radix, group widths and value bounds
//! - `alphabet`: The built-in symbol table and `Alphabet` type
//! - `group`: Byte group / digit group radix arithmetic
//! - `encoder`: Encoding
//! - `decoder`: Strict decoding
//! - `types`: Payload types (coordinates) and the serialization trait

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod alphabet;
pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod group;
pub mod types;

// Re-export commonly used types
pub use alphabet::Alphabet;
pub use error::CodecError;
pub use types::{Base404Serializable, Coordinate};

#[cfg(feature = "std")]
pub use decoder::{decode, decode_coordinate};
#[cfg(feature = "std")]
pub use encoder::{encode, encode_coordinate};

/// Result type alias for Base404 operations
pub type Result<T> = core::result::Result<T, CodecError>;
