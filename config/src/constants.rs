//! Centralized configuration values shared across the Braille relief pipeline.
//!
//! Each public item in this module documents its purpose so that downstream
//! crates can remain declarative and avoid scattering literals.

/// Usable print plate width in millimeters for the reference printer
/// (Ender 3 V2).
///
/// # Examples
/// ```
/// use config::constants::PLATE_WIDTH;
/// assert!(PLATE_WIDTH > 100.0);
/// ```
pub const PLATE_WIDTH: f32 = 200.0;

/// Usable print plate depth in millimeters for the reference printer
/// (Ender 3 V2).
pub const PLATE_DEPTH: f32 = 210.0;

/// Thickness of the generated base plate in millimeters.
pub const PLATE_THICKNESS: f32 = 0.5;

/// Radius of a tactile knob at its base, in millimeters.
///
/// # Examples
/// ```
/// use config::constants::KNOB_RADIUS;
/// assert!(KNOB_RADIUS > 0.0);
/// ```
pub const KNOB_RADIUS: f32 = 0.75;

/// Height of a tactile knob body, in millimeters.
///
/// Doubled at mesh build time when a base plate is emitted so the knobs
/// still protrude above the plate surface.
pub const KNOB_HEIGHT: f32 = 0.5;

/// Radius of the flattened knob tip, in millimeters.
pub const KNOB_TIP_RADIUS: f32 = KNOB_RADIUS / 5.0;

/// Height of the rounded knob tip above the body, in millimeters.
pub const KNOB_TIP_HEIGHT: f32 = KNOB_HEIGHT / 2.0;

/// Angular resolution of the knob body.
pub const KNOB_BODY_SEGMENTS: u32 = 64;

/// Number of stacked rings blending the knob body into its tip.
pub const KNOB_TIP_SEGMENTS: u32 = 16;

/// How far the knob center plane sinks below the plate top, in
/// millimeters. Avoids z-fighting-like artifacts between coplanar
/// surfaces during slicing.
pub const KNOB_SINK: f32 = 0.05;

/// Width of one Braille letter cell in millimeters.
///
/// # Examples
/// ```
/// use config::constants::{LETTER_WIDTH, KNOB_RADIUS};
/// // Two knob columns must fit inside a cell
/// assert!(LETTER_WIDTH > 4.0 * KNOB_RADIUS);
/// ```
pub const LETTER_WIDTH: f32 = 6.0;

/// Height of one Braille letter cell in millimeters.
pub const LETTER_HEIGHT: f32 = 9.0;

/// Horizontal space between two letter cells in millimeters.
pub const SPACE_BETWEEN_LETTERS: f32 = 2.0;

/// Vertical space between two lines in millimeters.
pub const SPACE_BETWEEN_LINES: f32 = 4.0;

/// Values below this magnitude are written as a literal `0.0` in ASCII
/// STL output. At tactile print dimensions such residues are numerical
/// noise and only confuse slicers.
pub const ASCII_STL_ZERO_EPSILON: f32 = 1e-4;
