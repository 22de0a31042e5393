//! Reference letter distributions.
//!
//! A [`ProbabilityTable`] holds the expected relative frequency of each
//! letter in some language. English and German tables are bundled as
//! [`ENGLISH`] and [`GERMAN`]; further tables can be built with
//! [`ProbabilityTable::new`] and kept in a [`TableRegistry`].

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::alphabet::{index_letter, letter_index, ALPHABET_SIZE};
use crate::error::CaesarError;

/// Allowed deviation of a table's sum from 1.0 before it is reported.
const SUM_TOLERANCE: f64 = 1e-3;

/// Immutable table of reference letter probabilities, indexed by letter index.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTable {
    name: Cow<'static, str>,
    probabilities: [f64; ALPHABET_SIZE],
}

/// Letter frequencies of English text.
pub const ENGLISH: ProbabilityTable = ProbabilityTable {
    name: Cow::Borrowed("english"),
    probabilities: [
        0.073, 0.009, 0.030, // a b c
        0.044, 0.130, 0.028, // d e f
        0.016, 0.035, 0.074, // g h i
        0.002, 0.003, 0.035, // j k l
        0.025, 0.078, 0.074, // m n o
        0.027, 0.003, 0.077, // p q r
        0.063, 0.093, 0.027, // s t u
        0.013, 0.016, 0.005, // v w x
        0.019, 0.001, // y z
    ],
};

/// Letter frequencies of German text, umlauts and `ß` excluded.
pub const GERMAN: ProbabilityTable = ProbabilityTable {
    name: Cow::Borrowed("german"),
    probabilities: [
        0.0558, 0.0196, 0.0316, // a b c
        0.0498, 0.1693, 0.0149, // d e f
        0.0302, 0.0498, 0.0802, // g h i
        0.0024, 0.0132, 0.0360, // j k l
        0.0255, 0.1053, 0.0224, // m n o
        0.0067, 0.0002, 0.0689, // p q r
        0.0642, 0.0579, 0.0383, // s t u
        0.0084, 0.0178, 0.0005, // v w x
        0.0005, 0.0121, // y z
    ],
};

impl ProbabilityTable {
    /// Builds a table from one probability per letter, `a` first.
    ///
    /// The values are expected to sum to roughly 1.0; this is not enforced.
    ///
    /// # Errors
    /// - [`CaesarError::InvalidAlphabetSize`] if `probabilities.len() != 26`.
    /// - [`CaesarError::InvalidProbability`] if a value is negative or not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use caesarcrypt::ProbabilityTable;
    ///
    /// let uniform = ProbabilityTable::new("uniform", &[1.0 / 26.0; 26]).unwrap();
    /// assert_eq!(uniform.name(), "uniform");
    ///
    /// assert!(ProbabilityTable::new("short", &[0.5, 0.5]).is_err());
    /// ```
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        probabilities: &[f64],
    ) -> Result<Self, CaesarError> {
        let probabilities: [f64; ALPHABET_SIZE] =
            probabilities
                .try_into()
                .map_err(|_| CaesarError::InvalidAlphabetSize {
                    len: probabilities.len(),
                })?;

        if let Some((index, &value)) = probabilities
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite() || **p < 0.0)
        {
            return Err(CaesarError::InvalidProbability {
                letter: index_letter(index as u8) as char,
                value,
            });
        }

        let table = ProbabilityTable {
            name: name.into(),
            probabilities,
        };
        let sum = table.sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            debug!(table = %table.name, sum, "probability table does not sum to 1");
        }
        Ok(table)
    }

    /// Returns the table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the probabilities indexed by letter index.
    pub fn probabilities(&self) -> &[f64; ALPHABET_SIZE] {
        &self.probabilities
    }

    /// Returns the probability of `letter`, or 0.0 for non-letters.
    pub fn probability(&self, letter: u8) -> f64 {
        letter_index(letter).map_or(0.0, |i| self.probabilities[i as usize])
    }

    /// Returns the sum of all probabilities.
    pub fn sum(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    /// Scales the table to expected counts for a text of `letters` letters.
    pub fn expected_counts(&self, letters: usize) -> [f64; ALPHABET_SIZE] {
        self.probabilities.map(|p| p * letters as f64)
    }
}

impl Default for ProbabilityTable {
    fn default() -> Self {
        ENGLISH
    }
}

/// Languages with a bundled probability table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// English, the default reference.
    #[default]
    English,
    /// German.
    German,
}

impl Language {
    /// Returns the bundled table for this language.
    pub fn table(self) -> ProbabilityTable {
        match self {
            Language::English => ENGLISH,
            Language::German => GERMAN,
        }
    }

    /// Returns the registry name of this language's table.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::German => "german",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = CaesarError;

    /// Parses a language name or its two-letter code, ignoring case.
    ///
    /// # Errors
    /// Returns [`CaesarError::UnknownLanguage`] for any other name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "german" | "de" => Ok(Language::German),
            _ => Err(CaesarError::UnknownLanguage {
                name: s.to_owned(),
            }),
        }
    }
}

/// Named collection of probability tables.
#[derive(Debug, Clone, Default)]
pub struct TableRegistry {
    tables: Vec<ProbabilityTable>,
}

impl TableRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the bundled English and German tables.
    pub fn with_defaults() -> Self {
        TableRegistry {
            tables: vec![ENGLISH, GERMAN],
        }
    }

    /// Adds `table`, replacing any table registered under the same name.
    pub fn register(&mut self, table: ProbabilityTable) {
        match self.tables.iter_mut().find(|t| t.name == table.name) {
            Some(existing) => *existing = table,
            None => self.tables.push(table),
        }
    }

    /// Looks up a table by name.
    pub fn get(&self, name: &str) -> Option<&ProbabilityTable> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Returns the registered names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.name())
    }

    /// Returns the number of registered tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns `true` if no table is registered.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
