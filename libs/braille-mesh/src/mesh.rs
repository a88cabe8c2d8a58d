//! # Mesh Data Structure
//!
//! An ordered list of oriented triangles.
//!
//! Unlike an indexed mesh there is no vertex sharing: the STL format
//! repeats vertices per facet, so the mesh stores exactly what the
//! serializer emits, in emission order.

use glam::Vec3;

/// One oriented triangle: an outward-facing normal and three vertices.
///
/// The vertex order defines the winding and must match the normal by
/// the right-hand rule, otherwise slicers see an inside-out facet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Outward-facing unit normal.
    pub normal: Vec3,
    /// Counter-clockwise vertices when viewed from the normal side.
    pub vertices: [Vec3; 3],
}

impl Triangle {
    /// Creates a triangle from a normal and three vertices.
    pub fn new(normal: Vec3, v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self {
            normal,
            vertices: [v0, v1, v2],
        }
    }
}

/// An append-only triangle list.
///
/// Triangle order is preserved through serialization; it is part of the
/// reproducible-output contract.
///
/// # Example
///
/// ```rust
/// use braille_mesh::{Mesh, Triangle};
/// use glam::Vec3;
///
/// let mut mesh = Mesh::new();
/// mesh.push(Triangle::new(Vec3::Z, Vec3::ZERO, Vec3::X, Vec3::Y));
/// assert_eq!(mesh.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Appends a triangle.
    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns the triangles in insertion order.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns `(min, max)` corners, or zero vectors for an empty mesh.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let mut vertices = self.triangles.iter().flat_map(|t| t.vertices);
        let Some(first) = vertices.next() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };

        let mut min = first;
        let mut max = first;
        for v in vertices {
            min = min.min(v);
            max = max.max(v);
        }
        (min, max)
    }
}
