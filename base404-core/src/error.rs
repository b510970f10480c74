//! Error types for Base404 operations

/// Errors that can occur while building alphabets or decoding Base404 text
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Symbol is not part of the alphabet
    #[cfg_attr(
        feature = "std",
        error("Invalid symbol {symbol:?} at position {position}")
    )]
    InvalidSymbol {
        /// The rejected symbol.
        symbol: char,
        /// Offset of the symbol in the input, counted in symbols.
        position: usize,
    },

    /// Group value does not fit in the byte width implied by its length
    #[cfg_attr(
        feature = "std",
        error("Group at position {position} decodes to {value}, which exceeds {width} byte(s)")
    )]
    RangeOverflow {
        /// The reconstructed group value.
        value: u32,
        /// Byte width of the group (1, 2 or 3).
        width: usize,
        /// Offset of the group's first symbol in the input.
        position: usize,
    },

    /// Alphabet does not contain exactly 404 symbols
    #[cfg_attr(feature = "std", error("Alphabet has {0} symbols, expected {1}"))]
    AlphabetSize(usize, usize),

    /// Alphabet lists the same symbol twice
    #[cfg_attr(
        feature = "std",
        error("Duplicate symbol {symbol:?} at indices {first} and {second}")
    )]
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: char,
        /// Index of its first occurrence.
        first: usize,
        /// Index of the repeat.
        second: usize,
    },

    /// Decoded payload has the wrong size for the requested type
    #[cfg_attr(
        feature = "std",
        error("Length mismatch: expected {expected} bytes, got {actual}")
    )]
    LengthMismatch {
        /// The number of bytes expected.
        expected: usize,
        /// The number of bytes actually decoded.
        actual: usize,
    },
}
