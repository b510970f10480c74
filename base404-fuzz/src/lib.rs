//! Fuzzing entry points for base404-core
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Call these from fuzz targets, e.g. `fuzz_target!(|data| fuzz_decode(data))`

/// Decode arbitrary input as Base404 text - should never panic
pub fn fuzz_decode(data: &[u8]) {
    use base404_core::decode;

    let text = String::from_utf8_lossy(data);
    let _ = decode(&text);
}

/// Encode arbitrary bytes and check they decode back unchanged
pub fn fuzz_round_trip(data: &[u8]) {
    use base404_core::{decode, encode};

    let encoded = encode(data);
    match decode(&encoded) {
        Ok(decoded) => assert_eq!(decoded.as_ref(), data, "round trip mismatch"),
        Err(e) => panic!("encoder output rejected by decoder: {}", e),
    }
}

/// Decode arbitrary input as a coordinate pair - should never panic
pub fn fuzz_coordinate(data: &[u8]) {
    use base404_core::decode_coordinate;

    let text = String::from_utf8_lossy(data);
    let _ = decode_coordinate(&text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_decode_empty() {
        fuzz_decode(&[]);
    }

    #[test]
    fn test_fuzz_decode_random() {
        fuzz_decode(&[0x12, 0x34, 0x56, 0x78]);
        fuzz_decode("啊啊座座座".as_bytes());
    }

    #[test]
    fn test_fuzz_round_trip() {
        fuzz_round_trip(&[]);
        fuzz_round_trip(&[0xFF; 1024]);
        fuzz_round_trip(&[0x00, 0xFF, 0x80, 0x7F]);
    }

    #[test]
    fn test_fuzz_coordinate() {
        fuzz_coordinate(&[0xFF; 64]);
    }
}
