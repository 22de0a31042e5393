//! Shift codec: the Caesar transform over normalized messages.
//!
//! Each letter index is moved by a fixed offset modulo 26; spaces pass
//! through untouched. Ciphering and deciphering are the same operation
//! with inverse offsets.

use crate::alphabet::{index_letter, letter_index, shift_index, Offset};
use crate::normalizer::Message;

/// Ciphers `message` by shifting every letter `offset` positions forward.
///
/// The offset is reduced modulo 26 with a non-negative remainder, so any
/// integer is accepted. Length and space positions are preserved.
///
/// # Examples
///
/// ```
/// use caesarcrypt::{cipher, Message};
///
/// let msg = Message::parse("abcxyz").unwrap();
/// assert_eq!(cipher(&msg, 3).as_str(), "defabc");
/// ```
pub fn cipher(message: &Message, offset: i64) -> Message {
    apply_shift(message, Offset::new(offset))
}

/// Deciphers `message` that was ciphered with `offset`.
///
/// Equivalent to `cipher(message, 26 - (offset mod 26))`.
///
/// # Examples
///
/// ```
/// use caesarcrypt::{decipher, Message};
///
/// let msg = Message::parse("defabc").unwrap();
/// assert_eq!(decipher(&msg, 3).as_str(), "abcxyz");
/// ```
pub fn decipher(message: &Message, offset: i64) -> Message {
    apply_shift(message, Offset::new(offset).inverse())
}

/// Shifts every letter of `message` by an already reduced offset.
pub(crate) fn apply_shift(message: &Message, offset: Offset) -> Message {
    let shifted: Vec<u8> = message
        .as_bytes()
        .iter()
        .map(|&byte| match letter_index(byte) {
            Some(index) => index_letter(shift_index(index, offset)),
            None => byte,
        })
        .collect();
    Message::from_normalized_bytes(shifted)
}
