//! # Braille Layout
//!
//! Turns input text into pages of Braille cells that fit a print plate.
//!
//! ## Architecture
//!
//! ```text
//! braille-alphabet (Alphabet) → braille-layout (Page) → braille-mesh
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use braille_alphabet::Alphabet;
//! use braille_layout::{layout_text, PrintPlateProperties, TypesettingOptions};
//!
//! let alphabet = Alphabet::german();
//! let typesetting = TypesettingOptions::default();
//! let plate = PrintPlateProperties::ender3_v2(&typesetting);
//! let pages = layout_text(&alphabet, "hallo welt", &plate);
//! assert_eq!(pages.len(), 1);
//! ```

pub mod packing;
pub mod pagination;
pub mod plate;
pub mod tokenizer;

pub use packing::{break_into_lines, Line};
pub use pagination::{layout_text, paginate, Page};
pub use plate::{PrintPlateProperties, TypesettingOptions};
pub use tokenizer::word_to_letters;
