//! # Pagination
//!
//! Splits the packed line list into plate-sized pages.

use braille_alphabet::Alphabet;

use crate::packing::{break_into_lines, Line};
use crate::plate::PrintPlateProperties;

/// One printable page: a 1-based page number and its lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Sequential page number, starting at 1.
    pub number: usize,
    /// The page's lines, at most `max_rows_per_page` of them.
    pub lines: Vec<Line>,
}

/// Splits lines into pages of at most `plate.max_rows_per_page` lines.
///
/// Lines keep their order; concatenating all pages reproduces the input
/// exactly. Page numbers are sequential and 1-based.
pub fn paginate(mut lines: Vec<Line>, plate: &PrintPlateProperties) -> Vec<Page> {
    let mut pages = Vec::new();
    let mut number = 1;

    while !lines.is_empty() {
        let take = lines.len().min(plate.max_rows_per_page);
        let page_lines: Vec<Line> = lines.drain(..take).collect();
        pages.push(Page {
            number,
            lines: page_lines,
        });
        number += 1;
    }

    pages
}

/// Runs the full layout pipeline: tokenize, pack, paginate.
///
/// # Examples
///
/// ```rust
/// use braille_alphabet::Alphabet;
/// use braille_layout::{layout_text, PrintPlateProperties, TypesettingOptions};
///
/// let alphabet = Alphabet::german();
/// let plate = PrintPlateProperties::ender3_v2(&TypesettingOptions::default());
/// let pages = layout_text(&alphabet, "hallo welt", &plate);
/// assert_eq!(pages[0].number, 1);
/// ```
pub fn layout_text(alphabet: &Alphabet, text: &str, plate: &PrintPlateProperties) -> Vec<Page> {
    paginate(break_into_lines(alphabet, text, plate), plate)
}
