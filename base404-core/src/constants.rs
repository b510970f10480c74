//! Constants and limits for the Base404 encoding

/// Number of distinct symbols in the alphabet
pub const RADIX: u32 = 404;

/// Number of symbols an alphabet must contain
pub const ALPHABET_SIZE: usize = RADIX as usize;

/// `RADIX` squared (163,216), the weight of the leading digit of a full group
pub const RADIX_SQUARED: u32 = RADIX * RADIX;

/// Bytes consumed by a full group (and symbols produced by it)
pub const GROUP_SIZE: usize = 3;

/// Exclusive upper bound of a 1-byte group value
pub const ONE_BYTE_LIMIT: u32 = 1 << 8;

/// Exclusive upper bound of a 2-byte group value
pub const TWO_BYTE_LIMIT: u32 = 1 << 16;

/// Exclusive upper bound of a 3-byte group value (16,777,216)
pub const THREE_BYTE_LIMIT: u32 = 1 << 24;

/// Size of an encoded coordinate pair: two little-endian `f64` values
pub const COORDINATE_SIZE: usize = 16;

/// Returns the exclusive value bound for a group of `width` bytes
///
/// Widths outside `1..=3` are not produced by the codec and map to zero.
pub const fn group_limit(width: usize) -> u32 {
    match width {
        1 => ONE_BYTE_LIMIT,
        2 => TWO_BYTE_LIMIT,
        3 => THREE_BYTE_LIMIT,
        _ => 0,
    }
}

// A full group must fit into three base-404 digits.
const _: () = assert!(RADIX * RADIX_SQUARED > THREE_BYTE_LIMIT);
