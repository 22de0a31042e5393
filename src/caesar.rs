//! CaesarCipher: configured cipher with frequency-analysis recovery.
//!
//! Holds one reference probability table and a zero-expectation policy,
//! and wires the pipeline together:
//!
//! ```text
//! raw text -> normalize -> score_all (26 offsets) -> argmin -> decipher -> plaintext
//! ```

use tracing::debug;

use crate::alphabet::Offset;
use crate::chi_square::{self, ChiSquares, ZeroExpectation};
use crate::error::CaesarError;
use crate::frequency::LetterHistogram;
use crate::normalizer::{self, Message};
use crate::probability::{Language, ProbabilityTable};
use crate::selector;
use crate::shift_codec;

/// Result of recovering a ciphertext.
#[derive(Debug, Clone, PartialEq)]
pub struct Recovery {
    /// The offset the ciphertext was most probably ciphered with.
    pub offset: Offset,
    /// The ciphertext deciphered with `offset`.
    pub plaintext: Message,
    /// Chi-square score of every candidate offset.
    pub scores: ChiSquares,
}

/// Caesar cipher configured with a reference letter distribution.
///
/// The configuration is immutable after construction, so one instance can
/// be shared freely between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct CaesarCipher {
    table: ProbabilityTable,
    zero_expectation: ZeroExpectation,
}

impl Default for CaesarCipher {
    fn default() -> Self {
        Self::new()
    }
}

impl CaesarCipher {
    /// Creates a cipher that scores against the English table.
    ///
    /// # Examples
    ///
    /// ```
    /// use caesarcrypt::CaesarCipher;
    ///
    /// let caesar = CaesarCipher::new();
    /// assert_eq!(caesar.table().name(), "english");
    /// ```
    pub fn new() -> Self {
        Self::with_table(Language::English.table())
    }

    /// Creates a cipher that scores against `table`.
    pub fn with_table(table: ProbabilityTable) -> Self {
        CaesarCipher {
            table,
            zero_expectation: ZeroExpectation::default(),
        }
    }

    /// Creates a cipher that scores against a bundled language table.
    pub fn for_language(language: Language) -> Self {
        Self::with_table(language.table())
    }

    /// Creates a cipher from raw per-letter probabilities, `a` first.
    ///
    /// # Errors
    /// Returns [`CaesarError::InvalidAlphabetSize`] if `probabilities` does
    /// not have exactly 26 entries, and [`CaesarError::InvalidProbability`]
    /// for negative or non-finite entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use caesarcrypt::CaesarCipher;
    ///
    /// assert!(CaesarCipher::with_probabilities(&[1.0 / 26.0; 26]).is_ok());
    /// assert!(CaesarCipher::with_probabilities(&[0.5; 10]).is_err());
    /// ```
    pub fn with_probabilities(probabilities: &[f64]) -> Result<Self, CaesarError> {
        Ok(Self::with_table(ProbabilityTable::new(
            "custom",
            probabilities,
        )?))
    }

    /// Returns a copy of this cipher using `policy` for zero-probability letters.
    pub fn with_zero_expectation(mut self, policy: ZeroExpectation) -> Self {
        self.zero_expectation = policy;
        self
    }

    /// Returns the reference table used for scoring.
    pub fn table(&self) -> &ProbabilityTable {
        &self.table
    }

    /// Returns the zero-expectation policy used for scoring.
    pub fn zero_expectation(&self) -> ZeroExpectation {
        self.zero_expectation
    }

    /// Normalizes raw input. See [`normalizer::normalize`].
    pub fn normalize(&self, raw: impl AsRef<[u8]>) -> Message {
        normalizer::normalize(raw)
    }

    /// Ciphers `message` with `offset`. See [`shift_codec::cipher`].
    pub fn cipher(&self, message: &Message, offset: i64) -> Message {
        shift_codec::cipher(message, offset)
    }

    /// Deciphers `message` ciphered with `offset`. See [`shift_codec::decipher`].
    pub fn decipher(&self, message: &Message, offset: i64) -> Message {
        shift_codec::decipher(message, offset)
    }

    /// Counts the letters of `message`.
    pub fn count_letter_frequencies(&self, message: &Message) -> LetterHistogram {
        LetterHistogram::of(message)
    }

    /// Scores every candidate offset of `ciphered` against the configured table.
    ///
    /// # Errors
    /// Returns [`CaesarError::ZeroExpectation`] only under
    /// [`ZeroExpectation::Reject`].
    pub fn score_all(&self, ciphered: &Message) -> Result<ChiSquares, CaesarError> {
        chi_square::score_all_with(ciphered, &self.table, self.zero_expectation)
    }

    /// Returns the offset with the lowest score.
    pub fn most_probable_offset(&self, scores: &ChiSquares) -> Offset {
        selector::most_probable_offset(scores)
    }

    /// Recovers the offset and plaintext of a Caesar ciphertext.
    ///
    /// The input is normalized first, scored against the configured table,
    /// and deciphered with the lowest-scoring offset.
    ///
    /// # Parameters
    /// - `ciphered`: Ciphertext, normalized or raw.
    ///
    /// # Errors
    /// Returns [`CaesarError::ZeroExpectation`] only under
    /// [`ZeroExpectation::Reject`].
    ///
    /// # Examples
    ///
    /// ```
    /// use caesarcrypt::CaesarCipher;
    ///
    /// let caesar = CaesarCipher::new();
    /// let recovery = caesar.recover("aol xbpjr iyvdu mve qbtwz vcly aol shgf kvn").unwrap();
    /// assert_eq!(recovery.offset.get(), 7);
    /// assert_eq!(recovery.plaintext.as_str(), "the quick brown fox jumps over the lazy dog");
    /// ```
    pub fn recover(&self, ciphered: &str) -> Result<Recovery, CaesarError> {
        let normalized = normalizer::normalize(ciphered);
        let scores = self.score_all(&normalized)?;
        let offset = selector::most_probable_offset(&scores);
        let plaintext = shift_codec::decipher(&normalized, offset.get() as i64);
        debug!(
            table = self.table.name(),
            letters = normalized.letter_count(),
            offset = offset.get(),
            score = scores.get(offset),
            "recovered offset"
        );
        Ok(Recovery {
            offset,
            plaintext,
            scores,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probability::GERMAN;

    const GERMAN_SENTENCE: &str =
        "Hallo, Ich bin Christian aus Deutschland und meine Arbeit ist wunderbar";

    #[test]
    fn test_default_is_english() {
        let caesar = CaesarCipher::default();
        assert_eq!(caesar.table().name(), "english");
        assert_eq!(caesar.zero_expectation(), ZeroExpectation::Exclude);
    }

    #[test]
    fn test_for_language() {
        let caesar = CaesarCipher::for_language(Language::German);
        assert_eq!(caesar.table(), &GERMAN);
    }

    #[test]
    fn test_recover_uses_configured_table() {
        // All weight on 'q': the best offset maps the most frequent letter to 'q'.
        let mut probs = [0.0; 26];
        probs[16] = 1.0;
        let caesar = CaesarCipher::with_probabilities(&probs).unwrap();
        let recovery = caesar.recover("eeee").unwrap();
        assert_eq!(recovery.offset.get(), 14);
        assert_eq!(recovery.plaintext.as_str(), "qqqq");

        let english = CaesarCipher::new().recover("eeee").unwrap();
        assert_eq!(english.offset, Offset::ZERO);
        assert_ne!(english.scores, recovery.scores);
    }

    #[test]
    fn test_with_probabilities_invalid_size() {
        assert_eq!(
            CaesarCipher::with_probabilities(&[0.1; 20]),
            Err(CaesarError::InvalidAlphabetSize { len: 20 })
        );
    }

    #[test]
    fn test_recover_german_all_offsets() {
        let caesar = CaesarCipher::for_language(Language::German);
        let original = caesar.normalize(GERMAN_SENTENCE);
        for k in 0..26 {
            let ciphered = caesar.cipher(&original, k);
            let recovery = caesar.recover(ciphered.as_str()).unwrap();
            assert_eq!(recovery.offset.get() as i64, k, "wrong offset for k={}", k);
            assert_eq!(recovery.plaintext, original);
        }
    }

    #[test]
    fn test_recover_normalizes_raw_input() {
        let caesar = CaesarCipher::new();
        let recovery = caesar
            .recover("AOL XBPJR, IYVDU MVE QBTWZ VCLY AOL SHGF KVN!")
            .unwrap();
        assert_eq!(recovery.offset.get(), 7);
        assert_eq!(
            recovery.plaintext.as_str(),
            "the quick brown fox jumps over the lazy dog"
        );
    }

    #[test]
    fn test_recover_empty_input() {
        let recovery = CaesarCipher::new().recover("123 !?").unwrap();
        assert_eq!(recovery.offset, Offset::ZERO);
        assert_eq!(recovery.plaintext.as_str(), " ");
    }

    #[test]
    fn test_recover_reports_best_score() {
        let caesar = CaesarCipher::new();
        let recovery = caesar.recover("wkh vhfuhw lv klgghq").unwrap();
        let best = recovery.scores.get(recovery.offset);
        assert!(recovery.scores.iter().all(|(_, s)| s >= best));
    }

    #[test]
    fn test_reject_policy_surfaces_error() {
        let mut probs = [0.04; 26];
        probs[25] = 0.0;
        let caesar = CaesarCipher::with_probabilities(&probs)
            .unwrap()
            .with_zero_expectation(ZeroExpectation::Reject);
        assert!(matches!(
            caesar.recover("zzz"),
            Err(CaesarError::ZeroExpectation { letter: 'z', .. })
        ));
    }

    #[test]
    fn test_delegating_operations() {
        let caesar = CaesarCipher::new();
        let msg = caesar.normalize("Hello World");
        let ciphered = caesar.cipher(&msg, 3);
        assert_eq!(ciphered.as_str(), "khoor zruog");
        assert_eq!(caesar.decipher(&ciphered, 3), msg);
        assert_eq!(caesar.count_letter_frequencies(&msg).count(b'o'), 2);
        let scores = caesar.score_all(&ciphered).unwrap();
        assert!(scores.iter().all(|(_, s)| s >= 0.0));
        assert_eq!(
            caesar.most_probable_offset(&scores),
            scores.most_probable_offset()
        );
    }

    #[test]
    fn test_cipher_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CaesarCipher>();
    }
}
