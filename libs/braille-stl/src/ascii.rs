//! # ASCII STL Writer
//!
//! Emits the STL text grammar.

use std::io;

use braille_mesh::Mesh;
use config::constants::ASCII_STL_ZERO_EPSILON;
use glam::Vec3;

use crate::{StlError, StlWriter};

/// Writes the text variant of STL.
///
/// ```text
/// solid <name>
/// facet normal X Y Z
///     outer loop
///         vertex X Y Z
///         ...
///     endloop
/// endfacet
/// endsolid <name>
/// ```
pub struct AsciiStlWriter;

impl StlWriter for AsciiStlWriter {
    fn write(
        &self,
        model_name: &str,
        sink: &mut dyn io::Write,
        mesh: &Mesh,
    ) -> Result<(), StlError> {
        writeln!(sink, "solid {model_name}")?;

        for triangle in mesh.triangles() {
            writeln!(sink, "facet normal {}", format_point(triangle.normal))?;
            writeln!(sink, "    outer loop")?;
            for vertex in triangle.vertices {
                writeln!(sink, "        vertex {}", format_point(vertex))?;
            }
            writeln!(sink, "    endloop")?;
            writeln!(sink, "endfacet")?;
        }

        // No trailing newline after the footer
        write!(sink, "endsolid {model_name}")?;
        Ok(())
    }
}

fn format_point(point: Vec3) -> String {
    format!(
        "{} {} {}",
        format_scalar(point.x),
        format_scalar(point.y),
        format_scalar(point.z)
    )
}

/// Locale-invariant scalar formatting.
///
/// Magnitudes below the epsilon collapse to a literal `0.0`; at these
/// print dimensions such residues are rounding noise that only annoys
/// slicers. Rust's float `Display` always uses `.` as the decimal
/// separator, which the format requires.
fn format_scalar(value: f32) -> String {
    if value.abs() < ASCII_STL_ZERO_EPSILON {
        "0.0".to_string()
    } else {
        value.to_string()
    }
}
