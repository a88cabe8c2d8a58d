//! # Braille Mesh
//!
//! Procedural triangle mesh generation for Braille relief plates.
//!
//! ## Architecture
//!
//! ```text
//! braille-layout (Page) → braille-mesh (Mesh) → braille-stl
//! ```
//!
//! The mesh is a flat, ordered list of oriented triangles built from
//! four primitives: planes, axis-aligned boxes, cylinders and
//! rounded-tip knobs. One knob is placed per raised dot of every cell
//! on the page; an optional base plate box goes underneath.
//!
//! ## Usage
//!
//! ```rust
//! use braille_alphabet::Alphabet;
//! use braille_layout::{layout_text, PrintPlateProperties, TypesettingOptions};
//! use braille_mesh::{build_page, KnobOptions, PrintOptions};
//!
//! let alphabet = Alphabet::german();
//! let typesetting = TypesettingOptions::default();
//! let plate = PrintPlateProperties::ender3_v2(&typesetting);
//! let pages = layout_text(&alphabet, "abc", &plate);
//! let mesh = build_page(
//!     &pages[0],
//!     &typesetting,
//!     &PrintOptions::new(true),
//!     &KnobOptions::default(),
//! ).unwrap();
//! assert!(!mesh.is_empty());
//! ```

pub mod builder;
pub mod error;
pub mod mesh;
pub mod page;

pub use builder::MeshBuilder;
pub use error::MeshError;
pub use mesh::{Mesh, Triangle};
pub use page::{build_page, KnobOptions, PrintOptions};
