//! # Line Packing
//!
//! Greedy packing of tokenized words into plate-width lines.

use braille_alphabet::{Alphabet, Letter};

use crate::plate::PrintPlateProperties;
use crate::tokenizer::word_to_letters;

/// One line of cells, blanks included.
pub type Line = Vec<Letter>;

/// Packs input text into lines of at most `plate.max_line_length` cells.
///
/// Words are taken in order and never reordered. A word that fits the
/// remaining capacity is appended, followed by a blank separator when
/// room remains. A word that does not fit starts a new line; a word
/// longer than a whole line is hyphenated into full lines of
/// `max_line_length - 1` cells plus the hyphen cell, with the remainder
/// carrying on as the new current line.
///
/// # Examples
///
/// ```rust
/// use braille_alphabet::Alphabet;
/// use braille_layout::{break_into_lines, PrintPlateProperties, TypesettingOptions};
///
/// let alphabet = Alphabet::german();
/// let plate = PrintPlateProperties::ender3_v2(&TypesettingOptions::default());
/// let lines = break_into_lines(&alphabet, "hallo welt", &plate);
/// assert_eq!(lines.len(), 1);
/// ```
pub fn break_into_lines(
    alphabet: &Alphabet,
    text: &str,
    plate: &PrintPlateProperties,
) -> Vec<Line> {
    let max_line_length = plate.max_line_length;
    let mut lines: Vec<Line> = Vec::new();
    let mut current: Line = Vec::new();

    for word in text.split(' ') {
        let mut letters = word_to_letters(alphabet, word);

        if letters.len() + current.len() <= max_line_length {
            // The word fits in the current line
            current.append(&mut letters);

            // Only add a separator if there is space left; no need to
            // break here, the next word does that anyway
            if current.len() + 1 < max_line_length {
                current.push(Letter::blank());
            }
        } else {
            // A super long word can arrive at an empty current line,
            // which must not be flushed
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            while letters.len() > max_line_length {
                let mut full_line: Line = letters.drain(..max_line_length - 1).collect();
                full_line.extend(word_to_letters(alphabet, "-"));
                lines.push(full_line);
            }

            current = letters;
            if current.len() + 1 < max_line_length {
                current.push(Letter::blank());
            }
        }
    }

    if !current.is_empty() {
        // The last filled line never reached a break
        lines.push(current);
    }

    lines
}
