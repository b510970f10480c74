//! Base404 decoding
//!
//! Symbols are consumed three at a time; a trailing run of one or two
//! symbols forms a short final group. Every group is range-checked against
//! the byte width implied by its length, so any symbol sequence is either
//! decoded completely or rejected.

use crate::alphabet::Alphabet;
use crate::constants::GROUP_SIZE;
use crate::error::CodecError;
use crate::group::DigitGroup;
use crate::types::Base404Serializable;
#[cfg(feature = "std")]
use crate::types::Coordinate;
use bytes::{BufMut, Bytes, BytesMut};

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Decode a string with the standard alphabet
///
/// Fails with [`CodecError::InvalidSymbol`] if a char is not in the
/// alphabet, and with [`CodecError::RangeOverflow`] if a group's value does
/// not fit the byte width of the group.
#[cfg(feature = "std")]
pub fn decode(encoded: &str) -> Result<Bytes, CodecError> {
    decode_with(Alphabet::standard(), encoded)
}

/// Decode a string with a custom alphabet
pub fn decode_with(alphabet: &Alphabet, encoded: &str) -> Result<Bytes, CodecError> {
    decode_chars(alphabet, encoded.chars())
}

/// Decode a sequence of symbols with a custom alphabet
pub fn decode_chars<I>(alphabet: &Alphabet, symbols: I) -> Result<Bytes, CodecError>
where
    I: IntoIterator<Item = char>,
{
    let mut symbols = symbols.into_iter();
    let (lower, _) = symbols.size_hint();
    let mut out = BytesMut::with_capacity(decoded_len(lower));

    #[cfg(feature = "logging")]
    debug!("Decoding at least {} symbols", lower);

    let mut position = 0;
    loop {
        let mut digits = [0u16; GROUP_SIZE];
        let mut len = 0;
        for symbol in symbols.by_ref().take(GROUP_SIZE) {
            digits[len] = lookup(alphabet, symbol, position + len)?;
            len += 1;
        }

        // Fewer than GROUP_SIZE symbols only happens at the end of input
        let Some(group) = DigitGroup::new(&digits[..len]) else {
            break;
        };

        let bytes = group.to_bytes(position).map_err(|e| {
            #[cfg(feature = "logging")]
            warn!("Rejecting Base404 input: {:?}", e);
            e
        })?;
        out.put_slice(bytes.as_bytes());

        position += len;
        if len < GROUP_SIZE {
            break;
        }
    }

    #[cfg(feature = "logging")]
    debug!("Decoded {} symbols into {} bytes", position, out.len());

    Ok(out.freeze())
}

/// Decode a serializable value with the standard alphabet
#[cfg(feature = "std")]
pub fn decode_value<T: Base404Serializable>(encoded: &str) -> Result<T, CodecError> {
    decode_value_with(Alphabet::standard(), encoded)
}

/// Decode a serializable value with a custom alphabet
pub fn decode_value_with<T: Base404Serializable>(
    alphabet: &Alphabet,
    encoded: &str,
) -> Result<T, CodecError> {
    let payload = decode_with(alphabet, encoded)?;
    T::from_payload(&payload)
}

/// Decode a latitude/longitude pair
///
/// The decoded payload must be exactly 16 bytes, otherwise
/// [`CodecError::LengthMismatch`] is returned.
#[cfg(feature = "std")]
pub fn decode_coordinate(encoded: &str) -> Result<Coordinate, CodecError> {
    decode_value(encoded)
}

/// Number of bytes produced by successfully decoding `symbol_count` symbols
pub const fn decoded_len(symbol_count: usize) -> usize {
    symbol_count
}

fn lookup(alphabet: &Alphabet, symbol: char, position: usize) -> Result<u16, CodecError> {
    alphabet.digit(symbol).ok_or_else(|| {
        #[cfg(feature = "logging")]
        warn!("Invalid Base404 symbol {:?} at position {}", symbol, position);

        CodecError::InvalidSymbol { symbol, position }
    })
}
