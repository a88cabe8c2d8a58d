//! # Config Crate
//!
//! Centralized configuration constants for the Braille relief pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{KNOB_RADIUS, LETTER_WIDTH};
//!
//! // Two knob columns plus the space between them must fit in a letter cell
//! assert!(4.0 * KNOB_RADIUS < LETTER_WIDTH);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Printer Agnostic Core**: Plate bounds are a preset, not a hard dependency
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
