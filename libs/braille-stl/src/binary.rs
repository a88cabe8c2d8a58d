//! # Binary STL Writer
//!
//! Emits the fixed-layout binary variant: an ignored 80-byte header, a
//! 32-bit triangle count, then 50 bytes per triangle. All multi-byte
//! values are little-endian regardless of host byte order.

use std::io;

use braille_mesh::Mesh;
use glam::Vec3;

use crate::{StlError, StlWriter};

/// Size of the ignored file header in bytes.
const HEADER_SIZE: usize = 80;

/// Size of the triangle count field in bytes.
const COUNT_SIZE: usize = 4;

/// Serialized size of one triangle: 12 f32 values plus two attribute
/// bytes.
const TRIANGLE_SIZE: usize = 50;

/// Append-only little-endian byte buffer.
///
/// `to_le_bytes` does the byte-order conversion, so the layout is
/// identical on big-endian hosts.
#[derive(Debug, Default)]
struct LeBuffer {
    bytes: Vec<u8>,
}

impl LeBuffer {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    fn put_u32(&mut self, value: u32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    fn put_f32(&mut self, value: f32) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    fn put_point(&mut self, point: Vec3) {
        self.put_f32(point.x);
        self.put_f32(point.y);
        self.put_f32(point.z);
    }

    fn put_zeros(&mut self, count: usize) {
        self.bytes.resize(self.bytes.len() + count, 0);
    }
}

/// Writes the binary variant of STL.
///
/// The model name has no representation in this format; the header is
/// written as zero bytes.
pub struct BinaryStlWriter;

impl StlWriter for BinaryStlWriter {
    fn write(
        &self,
        _model_name: &str,
        sink: &mut dyn io::Write,
        mesh: &Mesh,
    ) -> Result<(), StlError> {
        let mut buffer =
            LeBuffer::with_capacity(HEADER_SIZE + COUNT_SIZE + TRIANGLE_SIZE * mesh.len());

        buffer.put_zeros(HEADER_SIZE);
        buffer.put_u32(mesh.len() as u32);

        for triangle in mesh.triangles() {
            buffer.put_point(triangle.normal);
            for vertex in triangle.vertices {
                buffer.put_point(vertex);
            }
            // Attribute byte count, ignored by consumers
            buffer.put_zeros(2);
        }

        sink.write_all(&buffer.bytes)?;
        Ok(())
    }
}
