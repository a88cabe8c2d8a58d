//! # Braille Alphabet
//!
//! Maps text symbols to six-dot Braille cell encodings.
//!
//! ## Architecture
//!
//! ```text
//! definition file (JSON) ⇄ Alphabet ← braille-layout (tokenizer)
//! ```
//!
//! An [`Alphabet`] owns a mapping from symbols (one to four characters,
//! case-normalized) to [`Letter`] values plus the designated number
//! indicator cell. It is built once, either from the embedded German
//! table or from a persisted definition, and read-only afterwards.
//!
//! ## Usage
//!
//! ```rust
//! use braille_alphabet::Alphabet;
//!
//! let alphabet = Alphabet::german();
//! let letter = alphabet.lookup("sch").expect("known symbol");
//! assert_eq!(letter.dots_string(), "156");
//! ```

pub mod alphabet;
pub mod definition;
pub mod error;
pub mod letter;

mod german;

pub use alphabet::{Alphabet, MAX_SYMBOL_LENGTH};
pub use definition::{AlphabetDefinition, LetterDefinition};
pub use error::AlphabetError;
pub use letter::{Letter, DOT_COUNT};
