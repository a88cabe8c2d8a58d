//! # Plate Capacity
//!
//! Physical typesetting dimensions and the derived per-page limits.

use config::constants::{
    LETTER_HEIGHT, LETTER_WIDTH, PLATE_DEPTH, PLATE_WIDTH, SPACE_BETWEEN_LETTERS,
    SPACE_BETWEEN_LINES,
};

/// Physical cell dimensions and spacing, in millimeters.
///
/// Immutable configuration consumed by both the layout engine (capacity
/// limits) and the mesh builder (knob placement).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypesettingOptions {
    /// Width of one letter cell.
    pub letter_width: f32,
    /// Height of one letter cell.
    pub letter_height: f32,
    /// Horizontal space between two letter cells.
    pub space_between_letters: f32,
    /// Vertical space between two lines.
    pub space_between_lines: f32,
}

impl TypesettingOptions {
    /// Creates typesetting options from explicit dimensions.
    pub fn new(
        letter_width: f32,
        letter_height: f32,
        space_between_letters: f32,
        space_between_lines: f32,
    ) -> Self {
        Self {
            letter_width,
            letter_height,
            space_between_letters,
            space_between_lines,
        }
    }
}

impl Default for TypesettingOptions {
    fn default() -> Self {
        Self::new(
            LETTER_WIDTH,
            LETTER_HEIGHT,
            SPACE_BETWEEN_LETTERS,
            SPACE_BETWEEN_LINES,
        )
    }
}

/// Derived per-page capacity of a print plate.
///
/// # Examples
///
/// ```rust
/// use braille_layout::{PrintPlateProperties, TypesettingOptions};
///
/// let plate = PrintPlateProperties::ender3_v2(&TypesettingOptions::default());
/// assert_eq!(plate.max_line_length, 23);
/// assert_eq!(plate.max_rows_per_page, 14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintPlateProperties {
    /// Maximum number of cells per line.
    pub max_line_length: usize,
    /// Maximum number of lines per page.
    pub max_rows_per_page: usize,
}

impl PrintPlateProperties {
    /// Derives capacity limits from plate bounds and typesetting.
    ///
    /// The trailing `-1` on both axes is the border safety margin; page
    /// breaks depend on it, so it must not be "optimized" away. The
    /// plate must be large enough to fit at least one cell per axis.
    pub fn from_plate(width: f32, depth: f32, typesetting: &TypesettingOptions) -> Self {
        let columns = (width - typesetting.space_between_letters)
            / (typesetting.letter_width + typesetting.space_between_letters);
        let rows = (depth - typesetting.space_between_lines)
            / (typesetting.letter_height + typesetting.space_between_lines);
        Self {
            max_line_length: columns.floor() as usize - 1,
            max_rows_per_page: rows.floor() as usize - 1,
        }
    }

    /// Capacity of the Ender 3 V2 reference printer plate.
    pub fn ender3_v2(typesetting: &TypesettingOptions) -> Self {
        Self::from_plate(PLATE_WIDTH, PLATE_DEPTH, typesetting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ender3_v2_reference_capacity() {
        let plate = PrintPlateProperties::ender3_v2(&TypesettingOptions::default());
        // floor((200 - 2) / (6 + 2)) - 1 = 24 - 1
        assert_eq!(plate.max_line_length, 23);
        // floor((210 - 4) / (9 + 4)) - 1 = 15 - 1
        assert_eq!(plate.max_rows_per_page, 14);
    }

    #[test]
    fn test_from_plate_keeps_safety_margin() {
        let typesetting = TypesettingOptions::new(10.0, 10.0, 0.0, 0.0);
        let plate = PrintPlateProperties::from_plate(100.0, 50.0, &typesetting);
        assert_eq!(plate.max_line_length, 9);
        assert_eq!(plate.max_rows_per_page, 4);
    }

    #[test]
    fn test_default_typesetting_matches_reference() {
        let typesetting = TypesettingOptions::default();
        assert_eq!(typesetting.letter_width, 6.0);
        assert_eq!(typesetting.letter_height, 9.0);
        assert_eq!(typesetting.space_between_letters, 2.0);
        assert_eq!(typesetting.space_between_lines, 4.0);
    }
}
