//! Alphabet arithmetic for the 26-letter Latin alphabet.
//!
//! Maps lowercase letters to indices in `0..26` (0 is `a`, 25 is `z`) and
//! applies modular shifts. The space character has no index and is passed
//! through unchanged by every transform.

use std::fmt;

/// Number of letters in the alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// The passthrough token that separates words.
pub const SPACE: u8 = b' ';

/// Returns the index of a lowercase letter, or `None` for any other byte.
///
/// # Examples
///
/// ```
/// use caesarcrypt::alphabet::letter_index;
///
/// assert_eq!(letter_index(b'a'), Some(0));
/// assert_eq!(letter_index(b'z'), Some(25));
/// assert_eq!(letter_index(b' '), None);
/// assert_eq!(letter_index(b'A'), None);
/// ```
#[inline]
pub fn letter_index(byte: u8) -> Option<u8> {
    if byte.is_ascii_lowercase() {
        Some(byte - b'a')
    } else {
        None
    }
}

/// Returns the lowercase letter at `index`, reducing the index modulo 26.
#[inline]
pub fn index_letter(index: u8) -> u8 {
    b'a' + index % ALPHABET_SIZE as u8
}

/// Shifts a letter index by `offset` positions, wrapping around `z`.
#[inline]
pub fn shift_index(index: u8, offset: Offset) -> u8 {
    (index % ALPHABET_SIZE as u8 + offset.0) % ALPHABET_SIZE as u8
}

/// Shift offset reduced to its canonical representative in `0..26`.
///
/// Any integer is accepted; the reduction uses a Euclidean remainder, so
/// negative shifts map to their positive equivalent (`-1` becomes `25`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Offset(u8);

impl Offset {
    /// The identity shift.
    pub const ZERO: Offset = Offset(0);

    /// Reduces an arbitrary integer shift modulo 26.
    ///
    /// # Examples
    ///
    /// ```
    /// use caesarcrypt::alphabet::Offset;
    ///
    /// assert_eq!(Offset::new(3).get(), 3);
    /// assert_eq!(Offset::new(-1).get(), 25);
    /// assert_eq!(Offset::new(29).get(), 3);
    /// ```
    pub fn new(shift: i64) -> Self {
        Offset(shift.rem_euclid(ALPHABET_SIZE as i64) as u8)
    }

    /// Returns the canonical value in `0..26`.
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the offset that undoes this one, `(26 - self) mod 26`.
    pub fn inverse(self) -> Self {
        Offset((ALPHABET_SIZE as u8 - self.0) % ALPHABET_SIZE as u8)
    }

    /// Iterates over all 26 candidate offsets in ascending order.
    pub fn all() -> impl Iterator<Item = Offset> {
        (0..ALPHABET_SIZE as u8).map(Offset)
    }
}

impl From<i64> for Offset {
    fn from(shift: i64) -> Self {
        Offset::new(shift)
    }
}

impl From<Offset> for usize {
    fn from(offset: Offset) -> Self {
        offset.0 as usize
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
