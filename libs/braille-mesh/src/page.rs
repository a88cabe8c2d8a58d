//! # Page Mesh
//!
//! Converts one laid-out page of Braille cells into a triangle mesh:
//! optionally a base plate box, plus one rounded knob per raised dot.

use braille_alphabet::DOT_COUNT;
use braille_layout::{Page, TypesettingOptions};
use config::constants::{
    KNOB_BODY_SEGMENTS, KNOB_HEIGHT, KNOB_RADIUS, KNOB_SINK, KNOB_TIP_HEIGHT, KNOB_TIP_RADIUS,
    KNOB_TIP_SEGMENTS, PLATE_THICKNESS,
};
use glam::Vec3;

use crate::builder::MeshBuilder;
use crate::error::MeshError;
use crate::mesh::Mesh;

/// Print-time choices that affect mesh generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    /// Emit a physical base plate under the knobs.
    pub with_base_plate: bool,
}

impl PrintOptions {
    /// Creates print options.
    pub fn new(with_base_plate: bool) -> Self {
        Self { with_base_plate }
    }
}

/// Knob geometry, in millimeters and segment counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobOptions {
    /// Base radius of the knob body.
    pub radius: f32,
    /// Height of the knob body.
    pub height: f32,
    /// Radius of the flattened tip.
    pub tip_radius: f32,
    /// Height of the tip above the body.
    pub tip_height: f32,
    /// Angular resolution of the body.
    pub body_segments: u32,
    /// Number of blend rings in the tip.
    pub tip_segments: u32,
}

impl Default for KnobOptions {
    fn default() -> Self {
        Self {
            radius: KNOB_RADIUS,
            height: KNOB_HEIGHT,
            tip_radius: KNOB_TIP_RADIUS,
            tip_height: KNOB_TIP_HEIGHT,
            body_segments: KNOB_BODY_SEGMENTS,
            tip_segments: KNOB_TIP_SEGMENTS,
        }
    }
}

/// Builds the mesh for one page.
///
/// The plate footprint is sized to the page's widest line and row
/// count, centered on the origin. Letters run left to right, lines top
/// to bottom. Every raised dot becomes one rounded knob; when a base
/// plate is requested the knob heights double so they still protrude
/// above it.
///
/// # Examples
///
/// ```rust
/// use braille_alphabet::Letter;
/// use braille_layout::{Page, TypesettingOptions};
/// use braille_mesh::{build_page, KnobOptions, PrintOptions};
///
/// let page = Page {
///     number: 1,
///     lines: vec![vec![Letter::from_dots("1", false, "a")]],
/// };
/// let mesh = build_page(
///     &page,
///     &TypesettingOptions::default(),
///     &PrintOptions::new(false),
///     &KnobOptions::default(),
/// )
/// .unwrap();
/// assert!(!mesh.is_empty());
/// ```
pub fn build_page(
    page: &Page,
    typesetting: &TypesettingOptions,
    print: &PrintOptions,
    knobs: &KnobOptions,
) -> Result<Mesh, MeshError> {
    let mut builder = MeshBuilder::new();

    let columns = page.lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let rows = page.lines.len();

    let plate_size = Vec3::new(
        typesetting.letter_width * columns as f32
            + (columns as f32 + 1.0) * typesetting.space_between_letters,
        typesetting.letter_height * rows as f32
            + (rows as f32 + 1.0) * typesetting.space_between_lines,
        PLATE_THICKNESS,
    );
    let plate_center = Vec3::ZERO;

    let mut knob_height = knobs.height;
    let mut tip_height = knobs.tip_height;
    if print.with_base_plate {
        builder.add_box(plate_size, plate_center);
        // Knobs sink into the plate; double them so they still protrude
        knob_height *= 2.0;
        tip_height *= 2.0;
    }

    // Take the whole cell width, remove both knob columns, split the
    // remaining space into the three gaps, keep half of the middle gap,
    // and add the knob radius back to land on the column center
    let right_column = (typesetting.letter_width - 4.0 * knobs.radius) / 3.0 / 2.0 + knobs.radius;
    let left_column = -right_column;

    // Half the cell height minus the middle knob, centered in what
    // remains, plus the radius again
    let top_row = (typesetting.letter_height / 2.0 - knobs.radius) / 2.0 + knobs.radius;
    let middle_row = 0.0;
    let bottom_row = -top_row;

    // Top-left anchor: from the plate corner back in by the outer gap
    // and half a cell, with the knob plane sunk just below the plate top
    let start = Vec3::new(
        -plate_size.x / 2.0 + typesetting.space_between_letters + typesetting.letter_width / 2.0,
        plate_size.y / 2.0 - typesetting.space_between_lines - typesetting.letter_height / 2.0,
        plate_size.z - KNOB_SINK,
    );

    for (row, line) in page.lines.iter().enumerate() {
        for (column, letter) in line.iter().enumerate() {
            let cell_center = start
                + Vec3::new(
                    (typesetting.letter_width + typesetting.space_between_letters) * column as f32,
                    -(typesetting.letter_height + typesetting.space_between_lines) * row as f32,
                    0.0,
                );

            for dot in 0..DOT_COUNT {
                if !letter.is_dot_raised(dot) {
                    continue;
                }

                let column_offset = if dot <= 2 { left_column } else { right_column };
                let row_offset = match dot % 3 {
                    0 => top_row,
                    1 => middle_row,
                    2 => bottom_row,
                    residue => {
                        return Err(MeshError::invariant(format!(
                            "dot row residue out of domain: {residue}"
                        )))
                    }
                };

                builder.add_rounded_knob(
                    knobs.radius,
                    knob_height,
                    knobs.body_segments,
                    knobs.tip_radius,
                    tip_height,
                    knobs.tip_segments,
                    cell_center + Vec3::new(column_offset, row_offset, 0.0),
                )?;
            }
        }
    }

    Ok(builder.into_mesh())
}
