//! # Persisted Alphabet Definitions
//!
//! The on-disk JSON format for alphabets. Loading a previously saved
//! alphabet and re-saving it reproduces an equivalent mapping; key
//! ordering is not part of the contract.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::error::AlphabetError;

/// One `{symbol, dots}` entry of a persisted alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterDefinition {
    /// The text symbol, one to four characters.
    pub symbol: String,
    /// Raised dot numbers 1–6 in any order, e.g. `"145"`.
    pub dots: String,
}

/// A complete persisted alphabet.
///
/// # Examples
///
/// ```rust
/// use braille_alphabet::{Alphabet, AlphabetDefinition};
///
/// let definition = Alphabet::german().to_definition();
/// let json = serde_json::to_string(&definition).unwrap();
/// let reloaded: AlphabetDefinition = serde_json::from_str(&json).unwrap();
/// assert_eq!(reloaded, definition);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphabetDefinition {
    /// All registered symbols.
    pub letters: Vec<LetterDefinition>,
    /// Dot encoding of the number indicator cell.
    pub number_indicator: String,
}

impl Alphabet {
    /// Builds an alphabet from a parsed definition.
    ///
    /// Fails with [`AlphabetError::MalformedDefinition`] when the number
    /// indicator is missing, and with the registration errors of
    /// [`Alphabet::add_symbol`] for bad entries.
    pub fn from_definition(definition: &AlphabetDefinition) -> Result<Self, AlphabetError> {
        if definition.number_indicator.is_empty() {
            return Err(AlphabetError::malformed("missing number indicator"));
        }
        let mut alphabet = Self::new(&definition.number_indicator);
        for entry in &definition.letters {
            alphabet.add_symbol(&entry.symbol, &entry.dots)?;
        }
        Ok(alphabet)
    }

    /// Exports this alphabet as a definition record.
    ///
    /// Entries are sorted by symbol so repeated saves are byte-stable.
    pub fn to_definition(&self) -> AlphabetDefinition {
        let mut letters: Vec<LetterDefinition> = self
            .iter()
            .map(|(symbol, letter)| LetterDefinition {
                symbol: symbol.to_string(),
                dots: letter.dots_string(),
            })
            .collect();
        letters.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        AlphabetDefinition {
            letters,
            number_indicator: self.number_indicator().dots_string(),
        }
    }

    /// Loads an alphabet from a JSON definition file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AlphabetError> {
        let json = fs::read_to_string(path)?;
        let definition: AlphabetDefinition = serde_json::from_str(&json)?;
        Self::from_definition(&definition)
    }

    /// Saves this alphabet as a JSON definition file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), AlphabetError> {
        let json = serde_json::to_string_pretty(&self.to_definition())?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_round_trip_preserves_lookup() {
        let original = Alphabet::german();
        let reloaded = Alphabet::from_definition(&original.to_definition()).unwrap();

        assert_eq!(reloaded.len(), original.len());
        assert_eq!(reloaded.max_symbol_length(), original.max_symbol_length());
        assert_eq!(
            reloaded.number_indicator().mask(),
            original.number_indicator().mask()
        );
        for (symbol, letter) in original.iter() {
            let reloaded_letter = reloaded.lookup(symbol).expect("symbol survives round-trip");
            assert_eq!(reloaded_letter.mask(), letter.mask());
            assert_eq!(reloaded_letter.is_number(), letter.is_number());
        }
    }

    #[test]
    fn test_definition_json_round_trip() {
        let definition = Alphabet::german().to_definition();
        let json = serde_json::to_string(&definition).unwrap();
        let reparsed: AlphabetDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(reparsed, definition);
    }

    #[test]
    fn test_missing_number_indicator_is_malformed() {
        let definition = AlphabetDefinition {
            letters: vec![LetterDefinition {
                symbol: "a".to_string(),
                dots: "1".to_string(),
            }],
            number_indicator: String::new(),
        };
        let error = Alphabet::from_definition(&definition).unwrap_err();
        assert!(matches!(error, AlphabetError::MalformedDefinition(_)));
    }

    #[test]
    fn test_bad_json_is_malformed() {
        let error = serde_json::from_str::<AlphabetDefinition>("{not json")
            .map_err(AlphabetError::from)
            .unwrap_err();
        assert!(matches!(error, AlphabetError::MalformedDefinition(_)));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = std::env::temp_dir().join("braille-alphabet-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("german.json");

        let original = Alphabet::german();
        original.save(&path).unwrap();
        let reloaded = Alphabet::load(&path).unwrap();

        assert_eq!(reloaded.len(), original.len());
        assert_eq!(
            reloaded.lookup("sch").unwrap().mask(),
            original.lookup("sch").unwrap().mask()
        );
        fs::remove_file(&path).ok();
    }
}
