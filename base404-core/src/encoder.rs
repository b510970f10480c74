//! Base404 encoding

use crate::alphabet::Alphabet;
use crate::constants::GROUP_SIZE;
use crate::group::ByteGroup;
use crate::types::Base404Serializable;
#[cfg(feature = "std")]
use crate::types::Coordinate;
use alloc::string::String;

/// Encode bytes with the standard alphabet
///
/// The input is split into 3-byte groups, with a final group of 1 or 2
/// bytes when the length is not a multiple of 3. Each group of `k` bytes
/// becomes `k` symbols, so the output has exactly as many symbols as the
/// input has bytes. Encoding never fails.
#[cfg(feature = "std")]
pub fn encode(data: &[u8]) -> String {
    encode_with(Alphabet::standard(), data)
}

/// Encode bytes with a custom alphabet
pub fn encode_with(alphabet: &Alphabet, data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * alphabet.max_utf8_len());
    encode_into(alphabet, data, &mut out);
    out
}

/// Encode bytes, appending the symbols to `out`
pub fn encode_into(alphabet: &Alphabet, data: &[u8], out: &mut String) {
    for chunk in data.chunks(GROUP_SIZE) {
        // `chunks` never yields an empty slice or one longer than GROUP_SIZE
        if let Some(group) = ByteGroup::new(chunk) {
            for &digit in group.to_digits().digits() {
                out.push(alphabet.symbol(digit));
            }
        }
    }
}

/// Number of symbols produced when encoding `byte_len` bytes
pub const fn encoded_len(byte_len: usize) -> usize {
    byte_len
}

/// Encode a serializable value with the standard alphabet
#[cfg(feature = "std")]
pub fn encode_value<T: Base404Serializable>(value: &T) -> String {
    encode_value_with(Alphabet::standard(), value)
}

/// Encode a serializable value with a custom alphabet
pub fn encode_value_with<T: Base404Serializable>(alphabet: &Alphabet, value: &T) -> String {
    encode_with(alphabet, &value.to_payload())
}

/// Encode a latitude/longitude pair as 16 symbols
#[cfg(feature = "std")]
pub fn encode_coordinate(latitude: f64, longitude: f64) -> String {
    encode(&Coordinate::new(latitude, longitude).to_bytes())
}
