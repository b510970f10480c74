//! Fixed test vectors for the built-in Base404 alphabet
//!
//! Each vector pins the exact encoded text for a hex input. Vectors cover
//! every group width, the extreme values of each width, and the coordinate
//! layout.

use base404_core::{decode, decode_coordinate, encode, CodecError};

/// (input hex, encoded text)
const VECTORS: &[(&str, &str)] = &[
    ("", ""),
    ("00", "啊"),
    ("ff", "穷"),
    ("0000", "啊啊"),
    ("ffff", "来分"),
    ("000000", "啊啊啊"),
    ("ffffff", "狗条岁"),
    ("00010203", "啊啊全昂"),
    ("48656c6c6f", "查岑知叠少"),
];

#[test]
fn test_vectors_encode() {
    for (input, expected) in VECTORS {
        let data = hex::decode(input).unwrap();
        assert_eq!(encode(&data), *expected, "encoding {}", input);
    }
}

#[test]
fn test_vectors_decode() {
    for (expected, encoded) in VECTORS {
        let decoded = decode(encoded).unwrap();
        assert_eq!(hex::encode(&decoded), *expected, "decoding {}", encoded);
    }
}

#[test]
fn test_vector_coordinate() {
    let encoded = "村外凑方班扫岑爱谈包外穷班归亲地";
    assert_eq!(base404_core::encode_coordinate(39.9042, 116.4074), encoded);

    let coord = decode_coordinate(encoded).unwrap();
    assert_eq!(coord.latitude, 39.9042);
    assert_eq!(coord.longitude, 116.4074);
}

#[test]
fn test_vectors_first_overflowing_groups() {
    // 16_777_216 = 102 * 404^2 + 319 * 404 + 308
    assert_eq!(
        decode("狗条孙"),
        Err(CodecError::RangeOverflow {
            value: 16_777_216,
            width: 3,
            position: 0,
        })
    );

    // 65_536 = 162 * 404 + 88
    assert_eq!(
        decode("来风"),
        Err(CodecError::RangeOverflow {
            value: 65_536,
            width: 2,
            position: 0,
        })
    );

    // Index 256 as a lone symbol
    assert_eq!(
        decode("秋"),
        Err(CodecError::RangeOverflow {
            value: 256,
            width: 1,
            position: 0,
        })
    );
}
