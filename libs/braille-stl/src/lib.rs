//! # Braille STL
//!
//! Serializes a triangle mesh as STL, in either the text or the binary
//! variant of the format. See
//! <https://en.wikipedia.org/wiki/STL_(file_format)> for details.
//!
//! Triangles are written in mesh insertion order; that ordering is part
//! of the reproducible-output contract.
//!
//! ## Usage
//!
//! ```rust
//! use braille_mesh::Mesh;
//! use braille_stl::{OutputFormat, StlWriter};
//!
//! let mesh = Mesh::new();
//! let mut bytes = Vec::new();
//! OutputFormat::Ascii
//!     .writer()
//!     .write("empty", &mut bytes, &mesh)
//!     .unwrap();
//! assert_eq!(bytes, b"solid empty\nendsolid empty");
//! ```

pub mod ascii;
pub mod binary;

use std::io;

use braille_mesh::Mesh;
use thiserror::Error;

pub use ascii::AsciiStlWriter;
pub use binary::BinaryStlWriter;

/// Errors that can occur while writing STL output.
#[derive(Debug, Error)]
pub enum StlError {
    /// The output sink could not be written.
    #[error("failed to write STL output: {0}")]
    Io(#[from] io::Error),
}

/// Common contract of the two STL writers.
///
/// Writers never open files themselves; the caller owns the sink and
/// its lifetime (open, write, close per page).
pub trait StlWriter {
    /// Serializes `mesh` under the given model name into `sink`.
    fn write(&self, model_name: &str, sink: &mut dyn io::Write, mesh: &Mesh)
        -> Result<(), StlError>;
}

/// Selects the STL variant to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text grammar.
    Ascii,
    /// Fixed-layout little-endian binary.
    Binary,
}

impl OutputFormat {
    /// Returns the writer implementing this format.
    pub fn writer(self) -> Box<dyn StlWriter> {
        match self {
            Self::Ascii => Box::new(AsciiStlWriter),
            Self::Binary => Box::new(BinaryStlWriter),
        }
    }
}
