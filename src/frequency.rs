//! Letter frequency counting.

use crate::alphabet::{letter_index, shift_index, Offset, ALPHABET_SIZE};
use crate::normalizer::Message;

/// Per-letter occurrence counts of a normalized message.
///
/// Indexed by letter index; spaces are not counted, so the sum of all
/// counts equals the number of letters in the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterHistogram {
    counts: [u64; ALPHABET_SIZE],
}

impl LetterHistogram {
    /// Counts the letters of `message`.
    ///
    /// # Examples
    ///
    /// ```
    /// use caesarcrypt::{LetterHistogram, Message};
    ///
    /// let hist = LetterHistogram::of(&Message::parse("hello world").unwrap());
    /// assert_eq!(hist.count(b'l'), 3);
    /// assert_eq!(hist.total(), 10);
    /// ```
    pub fn of(message: &Message) -> Self {
        let mut counts = [0u64; ALPHABET_SIZE];
        for index in message.as_bytes().iter().filter_map(|&b| letter_index(b)) {
            counts[index as usize] += 1;
        }
        LetterHistogram { counts }
    }

    /// Wraps raw counts indexed by letter index.
    pub fn from_counts(counts: [u64; ALPHABET_SIZE]) -> Self {
        LetterHistogram { counts }
    }

    /// Returns the counts indexed by letter index.
    pub fn counts(&self) -> &[u64; ALPHABET_SIZE] {
        &self.counts
    }

    /// Returns how often `letter` occurs. Non-letters count as zero.
    pub fn count(&self, letter: u8) -> u64 {
        letter_index(letter).map_or(0, |i| self.counts[i as usize])
    }

    /// Returns the total number of letters counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Returns the histogram of the text deciphered with `offset`.
    ///
    /// Deciphering maps letter `i + k` to `i`, so the result is
    /// `counts[(i + k) mod 26]` without touching the text again.
    pub fn rotated(&self, offset: Offset) -> Self {
        let mut counts = [0u64; ALPHABET_SIZE];
        for (i, slot) in counts.iter_mut().enumerate() {
            *slot = self.counts[shift_index(i as u8, offset) as usize];
        }
        LetterHistogram { counts }
    }
}
