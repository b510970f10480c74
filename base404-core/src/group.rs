//! Radix arithmetic between byte groups and base-404 digit groups
//!
//! A group of `k` bytes (`1 <= k <= 3`) is read as a big-endian integer and
//! written as exactly `k` base-404 digits, most significant first. Because
//! `404^k > 256^k` for every such `k`, the mapping is injective and needs no
//! arbitrary-precision arithmetic.

use crate::constants::{group_limit, GROUP_SIZE, RADIX};
use crate::error::CodecError;

/// One to three raw bytes consumed together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteGroup {
    bytes: [u8; GROUP_SIZE],
    len: usize,
}

impl ByteGroup {
    /// Create a group from a slice of 1 to 3 bytes
    pub fn new(bytes: &[u8]) -> Option<Self> {
        if bytes.is_empty() || bytes.len() > GROUP_SIZE {
            return None;
        }

        let mut buf = [0u8; GROUP_SIZE];
        buf[..bytes.len()].copy_from_slice(bytes);
        Some(Self {
            bytes: buf,
            len: bytes.len(),
        })
    }

    /// Number of bytes in the group
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; groups hold at least one byte
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The group's bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Big-endian value of the group
    pub fn value(&self) -> u32 {
        self.as_bytes()
            .iter()
            .fold(0u32, |acc, &b| (acc << 8) | u32::from(b))
    }

    /// Convert to `len()` base-404 digits
    pub fn to_digits(&self) -> DigitGroup {
        let mut n = self.value();
        let mut digits = [0u16; GROUP_SIZE];
        for digit in digits[..self.len].iter_mut().rev() {
            *digit = (n % RADIX) as u16;
            n /= RADIX;
        }
        debug_assert_eq!(n, 0);

        DigitGroup {
            digits,
            len: self.len,
        }
    }
}

/// One to three base-404 digits, most significant first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitGroup {
    digits: [u16; GROUP_SIZE],
    len: usize,
}

impl DigitGroup {
    /// Create a group from 1 to 3 digits, each below 404
    pub fn new(digits: &[u16]) -> Option<Self> {
        if digits.is_empty() || digits.len() > GROUP_SIZE {
            return None;
        }
        if digits.iter().any(|&d| u32::from(d) >= RADIX) {
            return None;
        }

        let mut buf = [0u16; GROUP_SIZE];
        buf[..digits.len()].copy_from_slice(digits);
        Some(Self {
            digits: buf,
            len: digits.len(),
        })
    }

    /// Number of digits in the group
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; groups hold at least one digit
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The group's digits
    pub fn digits(&self) -> &[u16] {
        &self.digits[..self.len]
    }

    /// Value of the digits read as a base-404 number
    pub fn value(&self) -> u32 {
        self.digits()
            .iter()
            .fold(0u32, |acc, &d| acc * RADIX + u32::from(d))
    }

    /// Convert back to `len()` bytes
    ///
    /// `position` is the symbol offset of the group and is only used to
    /// report [`CodecError::RangeOverflow`] when the value does not fit.
    pub fn to_bytes(&self, position: usize) -> Result<ByteGroup, CodecError> {
        let value = self.value();
        if value >= group_limit(self.len) {
            return Err(CodecError::RangeOverflow {
                value,
                width: self.len,
                position,
            });
        }

        let be = value.to_be_bytes();
        let mut bytes = [0u8; GROUP_SIZE];
        bytes[..self.len].copy_from_slice(&be[be.len() - self.len..]);
        Ok(ByteGroup {
            bytes,
            len: self.len,
        })
    }
}
