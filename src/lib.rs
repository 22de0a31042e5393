//! Caesar cipher with chi-square frequency cryptanalysis.
//!
//! Ciphers and deciphers text over the 26-letter Latin alphabet, and
//! recovers the shift of an unknown ciphertext by comparing its letter
//! frequencies with a reference language distribution.
//!
//! # Architecture
//!
//! ```text
//! normalizer   (raw bytes -> Message over a..z and space)
//!     ↓
//! shift_codec  (cipher / decipher, offset mod 26)
//!     ↓
//! chi_square   (26 candidate offsets scored against a ProbabilityTable)
//!     ↓
//! selector     (argmin, lowest offset wins ties)
//!     ↓
//! caesar       (CaesarCipher: configured table + recover)
//! ```
//!
//! # Examples
//!
//! Cipher and decipher a message:
//!
//! ```
//! use caesarcrypt::{cipher, decipher, normalize};
//!
//! let message = normalize("Attack at dawn!");
//! let ciphered = cipher(&message, 3);
//! assert_eq!(ciphered.as_str(), "dwwdfn dw gdzq");
//! assert_eq!(decipher(&ciphered, 3), message);
//! ```
//!
//! Recover the offset of German text:
//!
//! ```
//! use caesarcrypt::{cipher, normalize, CaesarCipher, Language};
//!
//! let caesar = CaesarCipher::for_language(Language::German);
//! let original = normalize("Hallo, Ich bin Christian aus Deutschland und meine Arbeit ist wunderbar");
//! let ciphered = cipher(&original, 11);
//!
//! let recovery = caesar.recover(ciphered.as_str()).unwrap();
//! assert_eq!(recovery.offset.get(), 11);
//! assert_eq!(recovery.plaintext, original);
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod caesar;
pub mod chi_square;
pub mod error;
pub mod frequency;
pub mod normalizer;
pub mod probability;
pub mod selector;
pub mod shift_codec;
pub mod utils;

pub use alphabet::Offset;
pub use caesar::{CaesarCipher, Recovery};
pub use chi_square::{score_all, score_all_with, ChiSquares, ZeroExpectation};
pub use error::CaesarError;
pub use frequency::LetterHistogram;
pub use normalizer::{normalize, Message};
pub use probability::{Language, ProbabilityTable, TableRegistry, ENGLISH, GERMAN};
pub use shift_codec::{cipher, decipher};
