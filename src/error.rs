//! Error types for the caesarcrypt library.

use thiserror::Error;

/// Errors produced by the caesarcrypt library.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CaesarError {
    /// A probability table does not have one entry per alphabet letter.
    #[error("Probability table must have 26 entries, got {len}")]
    InvalidAlphabetSize {
        /// Number of entries that were supplied.
        len: usize,
    },

    /// A probability table entry is negative, NaN or infinite.
    #[error("Probability for letter '{letter}' must be a finite non-negative number, got {value}")]
    InvalidProbability {
        /// The letter whose entry is invalid.
        letter: char,
        /// The rejected value.
        value: f64,
    },

    /// A message handed over as already normalized contains a byte outside `a..=z` and space.
    #[error("Byte 0x{byte:02x} at position {position} is not a lowercase letter or space")]
    DenormalizedInput {
        /// The offending byte.
        byte: u8,
        /// Byte offset of the offending byte in the input.
        position: usize,
    },

    /// A letter with zero expected frequency was observed while scoring.
    #[error(
        "Letter '{letter}' observed {observed} times at offset {offset} but has zero expected frequency"
    )]
    ZeroExpectation {
        /// Candidate offset being scored.
        offset: u8,
        /// The observed letter.
        letter: char,
        /// Number of times the letter was observed.
        observed: u64,
    },

    /// A language name does not match any bundled table.
    #[error("Unknown language '{name}'")]
    UnknownLanguage {
        /// The name that was not recognized.
        name: String,
    },

    /// A border glyph set does not contain exactly eight glyphs.
    #[error("Border glyph set must contain 8 glyphs, got {len}")]
    InvalidGlyphSet {
        /// Number of glyphs that were supplied.
        len: usize,
    },
}
