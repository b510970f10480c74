//! Payload types that travel through the Base404 codec

use crate::constants::COORDINATE_SIZE;
use crate::error::CodecError;
use alloc::vec::Vec;
use bytes::{BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees
///
/// The payload layout is 16 bytes: latitude then longitude, each an IEEE-754
/// `f64` in little-endian byte order. The conversion is a bit-for-bit copy,
/// so decoding returns exactly the values that were encoded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees
    pub latitude: f64,

    /// Longitude in degrees
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Serialize into the fixed 16-byte layout
    pub fn to_bytes(&self) -> [u8; COORDINATE_SIZE] {
        let mut buf = [0u8; COORDINATE_SIZE];
        buf[..8].copy_from_slice(&self.latitude.to_le_bytes());
        buf[8..].copy_from_slice(&self.longitude.to_le_bytes());
        buf
    }

    /// Parse the fixed 16-byte layout
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        if bytes.len() != COORDINATE_SIZE {
            return Err(CodecError::LengthMismatch {
                expected: COORDINATE_SIZE,
                actual: bytes.len(),
            });
        }

        let mut latitude = [0u8; 8];
        let mut longitude = [0u8; 8];
        latitude.copy_from_slice(&bytes[..8]);
        longitude.copy_from_slice(&bytes[8..]);

        Ok(Self {
            latitude: f64::from_le_bytes(latitude),
            longitude: f64::from_le_bytes(longitude),
        })
    }
}

/// Trait for types that can be carried as a Base404 payload
pub trait Base404Serializable {
    /// Serialize this type into the bytes to encode
    fn to_payload(&self) -> Bytes;

    /// Deserialize from decoded payload bytes
    fn from_payload(bytes: &[u8]) -> Result<Self, CodecError>
    where
        Self: Sized;
}

impl Base404Serializable for Vec<u8> {
    fn to_payload(&self) -> Bytes {
        Bytes::copy_from_slice(self)
    }

    fn from_payload(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(bytes.to_vec())
    }
}

impl Base404Serializable for Bytes {
    fn to_payload(&self) -> Bytes {
        self.clone()
    }

    fn from_payload(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(Bytes::copy_from_slice(bytes))
    }
}

impl Base404Serializable for Coordinate {
    fn to_payload(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(COORDINATE_SIZE);
        buf.put_f64_le(self.latitude);
        buf.put_f64_le(self.longitude);
        buf.freeze()
    }

    fn from_payload(bytes: &[u8]) -> Result<Self, CodecError> {
        Self::from_bytes(bytes)
    }
}
