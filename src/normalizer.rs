//! Input normalization and the [`Message`] type.
//!
//! Every transform in the crate operates on normalized text: lowercase
//! Latin letters and single spaces only. [`normalize`] is the total entry
//! point for raw input; [`Message::parse`] validates text that is expected
//! to be normalized already.

use std::fmt;
use std::str::FromStr;

use crate::alphabet::SPACE;
use crate::error::CaesarError;

/// A normalized message: every byte is in `a..=z` or a space.
///
/// The invariant holds by construction, so the codec and the frequency
/// counter never see characters outside the alphabet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Message(String);

/// Returns `true` if `byte` may appear in a normalized message.
#[inline]
pub fn is_normalized_byte(byte: u8) -> bool {
    byte.is_ascii_lowercase() || byte == SPACE
}

/// Case-folds `raw` and strips every byte that is neither a lowercase
/// letter nor a space.
///
/// Tabs, newlines, punctuation and every byte of a non-ASCII character
/// (`ö`, `ß`, ...) are dropped. The operation is idempotent.
///
/// # Examples
///
/// ```
/// use caesarcrypt::normalize;
///
/// assert_eq!(normalize("Hallo, Welt!\n").as_str(), "hallo welt");
/// ```
pub fn normalize(raw: impl AsRef<[u8]>) -> Message {
    let raw = raw.as_ref();
    let mut out = String::with_capacity(raw.len());
    for &byte in raw {
        let folded = byte.to_ascii_lowercase();
        if is_normalized_byte(folded) {
            out.push(folded as char);
        }
    }
    Message(out)
}

impl Message {
    /// Wraps text that must already be normalized.
    ///
    /// # Errors
    /// Returns [`CaesarError::DenormalizedInput`] for the first byte outside
    /// `a..=z` and space.
    ///
    /// # Examples
    ///
    /// ```
    /// use caesarcrypt::Message;
    ///
    /// assert!(Message::parse("hello world").is_ok());
    /// assert!(Message::parse("Hello").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, CaesarError> {
        match text.bytes().position(|b| !is_normalized_byte(b)) {
            Some(position) => Err(CaesarError::DenormalizedInput {
                byte: text.as_bytes()[position],
                position,
            }),
            None => Ok(Message(text.to_owned())),
        }
    }

    /// Builds a message from bytes already known to be normalized.
    pub(crate) fn from_normalized_bytes(bytes: Vec<u8>) -> Self {
        debug_assert!(bytes.iter().all(|&b| is_normalized_byte(b)));
        Message(bytes.into_iter().map(char::from).collect())
    }

    /// Returns the message text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the message bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Returns the length in bytes, spaces included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the message is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of letters, spaces excluded.
    pub fn letter_count(&self) -> usize {
        self.0.bytes().filter(|&b| b != SPACE).count()
    }

    /// Consumes the message and returns the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Message {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Message {
    type Err = std::convert::Infallible;

    /// Normalizes `s`; never fails.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(normalize(s))
    }
}
