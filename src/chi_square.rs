//! Chi-square scoring of candidate offsets.
//!
//! For every candidate offset `k` the ciphertext is deciphered with `k` and
//! its letter histogram is compared against the counts a reference table
//! predicts for a text of the same length:
//!
//! ```text
//! score[k] = Σ (observed_k[i] - expected[i])² / expected[i]    for expected[i] > 0
//! ```
//!
//! Every deciphering of the same ciphertext has the same number of letters,
//! so the expected vector is computed once. The observed histograms are
//! rotations of the ciphertext histogram.

use std::ops::Index;

use tracing::trace;

use crate::alphabet::{index_letter, Offset, ALPHABET_SIZE};
use crate::error::CaesarError;
use crate::frequency::LetterHistogram;
use crate::normalizer::Message;
use crate::probability::ProbabilityTable;
use crate::selector;

/// Handling of letters whose reference probability is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZeroExpectation {
    /// Leave the term out of the sum.
    #[default]
    Exclude,
    /// Fail if such a letter is observed at all.
    Reject,
}

/// Chi-square statistic per candidate offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquares([f64; ALPHABET_SIZE]);

impl ChiSquares {
    /// Wraps precomputed scores indexed by offset.
    pub fn from_scores(scores: [f64; ALPHABET_SIZE]) -> Self {
        ChiSquares(scores)
    }

    /// Returns the scores indexed by offset.
    pub fn as_array(&self) -> &[f64; ALPHABET_SIZE] {
        &self.0
    }

    /// Returns the score of `offset`.
    pub fn get(&self, offset: Offset) -> f64 {
        self.0[usize::from(offset)]
    }

    /// Iterates over `(offset, score)` pairs in offset order.
    pub fn iter(&self) -> impl Iterator<Item = (Offset, f64)> + '_ {
        Offset::all().zip(self.0.iter().copied())
    }

    /// Returns the offset with the lowest score.
    pub fn most_probable_offset(&self) -> Offset {
        selector::most_probable_offset(self)
    }
}

impl Index<usize> for ChiSquares {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

/// Computes a single chi-square statistic.
///
/// Terms with `expected[i] <= 0` are excluded. Under
/// [`ZeroExpectation::Reject`] an excluded term with a non-zero observation
/// is reported as [`CaesarError::ZeroExpectation`] tagged with `offset`.
pub fn chi_square(
    observed: &LetterHistogram,
    expected: &[f64; ALPHABET_SIZE],
    policy: ZeroExpectation,
    offset: Offset,
) -> Result<f64, CaesarError> {
    if policy == ZeroExpectation::Reject {
        let unexpected = observed
            .counts()
            .iter()
            .zip(expected)
            .position(|(&obs, &exp)| obs > 0 && exp <= 0.0);
        if let Some(i) = unexpected {
            return Err(CaesarError::ZeroExpectation {
                offset: offset.get(),
                letter: index_letter(i as u8) as char,
                observed: observed.counts()[i],
            });
        }
    }
    Ok(excluding_zero_expectation(observed, expected))
}

/// Sums `(observed - expected)² / expected` over letters with `expected > 0`.
fn excluding_zero_expectation(
    observed: &LetterHistogram,
    expected: &[f64; ALPHABET_SIZE],
) -> f64 {
    observed
        .counts()
        .iter()
        .zip(expected)
        .filter(|&(_, &exp)| exp > 0.0)
        .map(|(&obs, &exp)| {
            let diff = obs as f64 - exp;
            diff * diff / exp
        })
        .sum()
}

/// Scores all 26 candidate offsets of `ciphered` against `table`.
///
/// Letters with zero reference probability are excluded from the sum.
/// An empty or space-only ciphertext scores 0 everywhere.
///
/// # Examples
///
/// ```
/// use caesarcrypt::{cipher, normalize, score_all, ENGLISH};
///
/// let ciphered = cipher(&normalize("the quick brown fox jumps over the lazy dog"), 7);
/// let scores = score_all(&ciphered, &ENGLISH);
/// assert_eq!(scores.most_probable_offset().get(), 7);
/// ```
pub fn score_all(ciphered: &Message, table: &ProbabilityTable) -> ChiSquares {
    let histogram = LetterHistogram::of(ciphered);
    let expected = table.expected_counts(ciphered.letter_count());
    let mut scores = [0.0; ALPHABET_SIZE];
    for (offset, slot) in Offset::all().zip(scores.iter_mut()) {
        *slot = excluding_zero_expectation(&histogram.rotated(offset), &expected);
    }
    trace!(table = table.name(), letters = ciphered.letter_count(), "scored offsets");
    ChiSquares(scores)
}

/// Scores all 26 candidate offsets under an explicit zero-expectation policy.
///
/// # Errors
/// Returns [`CaesarError::ZeroExpectation`] under [`ZeroExpectation::Reject`]
/// when a deciphering contains a letter the table gives zero probability.
pub fn score_all_with(
    ciphered: &Message,
    table: &ProbabilityTable,
    policy: ZeroExpectation,
) -> Result<ChiSquares, CaesarError> {
    if policy == ZeroExpectation::Exclude {
        return Ok(score_all(ciphered, table));
    }
    let histogram = LetterHistogram::of(ciphered);
    let expected = table.expected_counts(ciphered.letter_count());
    let mut scores = [0.0; ALPHABET_SIZE];
    for (offset, slot) in Offset::all().zip(scores.iter_mut()) {
        *slot = chi_square(&histogram.rotated(offset), &expected, policy, offset)?;
    }
    Ok(ChiSquares(scores))
}
