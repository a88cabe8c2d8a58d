//! # Mesh Builder
//!
//! Appends primitive shapes to a triangle mesh.
//!
//! All primitives carry explicit outward normals. In STL, z is up; the
//! plane primitive is built in the XY plane and rotated into place,
//! everything else is generated directly in its final orientation.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::{Mat3, Vec2, Vec3};

use crate::error::MeshError;
use crate::mesh::{Mesh, Triangle};

/// Accumulates primitives into a [`Mesh`].
///
/// # Example
///
/// ```rust
/// use braille_mesh::MeshBuilder;
/// use glam::{Vec2, Vec3};
///
/// let mut builder = MeshBuilder::new();
/// builder.add_plane(Vec3::Z, Vec2::new(10.0, 10.0), Vec3::ZERO);
/// assert_eq!(builder.mesh().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MeshBuilder {
    mesh: Mesh,
}

impl MeshBuilder {
    /// Creates a builder with an empty mesh.
    pub fn new() -> Self {
        Self { mesh: Mesh::new() }
    }

    /// Returns the mesh built so far.
    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Consumes the builder and returns the finished mesh.
    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }

    /// Appends a rectangular plane as two triangles.
    ///
    /// The plane is built in the XY plane sized by `dimensions`, rotated
    /// so its default +Z normal aligns with `normal`, then translated to
    /// `center`.
    pub fn add_plane(&mut self, normal: Vec3, dimensions: Vec2, center: Vec3) {
        let half = dimensions / 2.0;
        let corners = [
            [
                Vec3::new(-half.x, -half.y, 0.0),
                Vec3::new(half.x, -half.y, 0.0),
            ],
            [
                Vec3::new(-half.x, half.y, 0.0),
                Vec3::new(half.x, half.y, 0.0),
            ],
        ];

        let rotation = align_z_to(normal);
        for triangle in [
            [corners[0][0], corners[0][1], corners[1][0]],
            [corners[0][1], corners[1][1], corners[1][0]],
        ] {
            let vertices = triangle.map(|p| rotation * p + center);
            self.mesh.push(Triangle {
                normal,
                vertices,
            });
        }
    }

    /// Appends an axis-aligned box as six planes (12 triangles), each
    /// face offset by half the corresponding dimension with its normal
    /// pointing outward.
    pub fn add_box(&mut self, dimensions: Vec3, center: Vec3) {
        // Top
        self.add_plane(
            Vec3::Z,
            Vec2::new(dimensions.x, dimensions.y),
            center + Vec3::new(0.0, 0.0, dimensions.z / 2.0),
        );
        // Bottom
        self.add_plane(
            -Vec3::Z,
            Vec2::new(dimensions.x, dimensions.y),
            center - Vec3::new(0.0, 0.0, dimensions.z / 2.0),
        );
        // Right
        self.add_plane(
            Vec3::X,
            Vec2::new(dimensions.z, dimensions.y),
            center + Vec3::new(dimensions.x / 2.0, 0.0, 0.0),
        );
        // Left
        self.add_plane(
            -Vec3::X,
            Vec2::new(dimensions.z, dimensions.y),
            center - Vec3::new(dimensions.x / 2.0, 0.0, 0.0),
        );
        // Back
        self.add_plane(
            Vec3::Y,
            Vec2::new(dimensions.x, dimensions.z),
            center + Vec3::new(0.0, dimensions.y / 2.0, 0.0),
        );
        // Front
        self.add_plane(
            -Vec3::Y,
            Vec2::new(dimensions.x, dimensions.z),
            center - Vec3::new(0.0, dimensions.y / 2.0, 0.0),
        );
    }

    /// Appends a z-axis cylinder: `4 * segments` triangles (two fan
    /// discs plus two triangles per side quad).
    pub fn add_cylinder(
        &mut self,
        radius: f32,
        height: f32,
        segments: u32,
        center: Vec3,
    ) -> Result<(), MeshError> {
        if radius <= 0.0 || height <= 0.0 {
            return Err(MeshError::degenerate(format!(
                "cylinder must have positive radius and height: r={radius}, h={height}"
            )));
        }
        if segments < 3 {
            return Err(MeshError::degenerate(format!(
                "cylinder needs at least 3 segments: {segments}"
            )));
        }

        let ring = circle_points(radius, segments);
        let n = ring.len();
        let top = Vec3::Z * (height / 2.0);
        let bottom = -top;

        // Bottom disc, fanned from the center, seen from below
        for i in 0..n {
            let next = (i + 1) % n;
            self.mesh.push(Triangle::new(
                -Vec3::Z,
                center + bottom,
                center + ring[next] + bottom,
                center + ring[i] + bottom,
            ));
        }

        // Top disc
        for i in 0..n {
            let next = (i + 1) % n;
            self.mesh.push(Triangle::new(
                Vec3::Z,
                center + top,
                center + ring[i] + top,
                center + ring[next] + top,
            ));
        }

        // Side walls, one quad per segment
        for i in 0..n {
            let next = (i + 1) % n;
            let normal = (ring[i] + ring[next]).normalize();
            self.mesh.push(Triangle::new(
                normal,
                center + ring[i] + bottom,
                center + ring[next] + bottom,
                center + ring[i] + top,
            ));
            self.mesh.push(Triangle::new(
                normal,
                center + ring[next] + bottom,
                center + ring[next] + top,
                center + ring[i] + top,
            ));
        }

        Ok(())
    }

    /// Appends a z-facing knob: a cylinder body whose top closes into a
    /// rounded tip of stacked rings.
    ///
    /// Ring `i` (of `tip_segments`) sits at height fraction
    /// `(i + 1) / tip_segments` of `tip_height` above the body. Its
    /// radius blends from the body radius toward `tip_radius` with a
    /// `sqrt(cos(...))` ease, which is what makes the knob look rounded
    /// instead of conical. The last ring closes to an apex fan.
    #[allow(clippy::too_many_arguments)]
    pub fn add_rounded_knob(
        &mut self,
        body_radius: f32,
        body_height: f32,
        body_segments: u32,
        tip_radius: f32,
        tip_height: f32,
        tip_segments: u32,
        center: Vec3,
    ) -> Result<(), MeshError> {
        if body_radius <= 0.0 || body_height <= 0.0 || tip_height <= 0.0 {
            return Err(MeshError::degenerate(format!(
                "knob must have positive dimensions: r={body_radius}, h={body_height}, tip h={tip_height}"
            )));
        }
        if tip_radius <= 0.0 || tip_radius > body_radius {
            return Err(MeshError::degenerate(format!(
                "knob tip radius must be in (0, {body_radius}]: {tip_radius}"
            )));
        }
        if body_segments < 3 || tip_segments < 1 {
            return Err(MeshError::degenerate(format!(
                "knob needs >= 3 body and >= 1 tip segments: {body_segments}/{tip_segments}"
            )));
        }

        let ring = circle_points(body_radius, body_segments);
        let n = ring.len();
        let top = Vec3::Z * (body_height / 2.0);
        let bottom = -top;

        // Radius factor eases from ~1 at the body edge down to
        // tip_radius / body_radius at the topmost ring
        let min_factor = tip_radius / body_radius;
        let tip_ring_params = |ring_index: usize| -> (f32, f32) {
            let linear = ((ring_index as f32 + 1.0) / tip_segments as f32).clamp(0.0, 1.0);
            let eased = (linear * FRAC_PI_2).cos().sqrt();
            (linear * tip_height, eased * (1.0 - min_factor) + min_factor)
        };

        let tip_rings: Vec<Vec<Vec3>> = (0..tip_segments as usize)
            .map(|i| {
                let (ring_height, radius_factor) = tip_ring_params(i);
                ring.iter()
                    .map(|p| *p * radius_factor + Vec3::Z * ring_height + center + top)
                    .collect()
            })
            .collect();

        // Bottom disc
        for i in 0..n {
            let next = (i + 1) % n;
            self.mesh.push(Triangle::new(
                -Vec3::Z,
                center + bottom,
                center + ring[next] + bottom,
                center + ring[i] + bottom,
            ));
        }

        // Body side walls
        for i in 0..n {
            let next = (i + 1) % n;
            let normal = (ring[i] + ring[next]).normalize();
            self.mesh.push(Triangle::new(
                normal,
                center + ring[i] + bottom,
                center + ring[next] + bottom,
                center + ring[i] + top,
            ));
            self.mesh.push(Triangle::new(
                normal,
                center + ring[next] + bottom,
                center + ring[next] + top,
                center + ring[i] + top,
            ));
        }

        // Ring-to-ring walls; the first ring connects to the body's top
        // edge
        for i in 0..tip_segments as usize - 1 {
            for j in 0..n {
                let next = (j + 1) % n;
                let (bottom0, bottom1) = if i == 0 {
                    (center + ring[j] + top, center + ring[next] + top)
                } else {
                    (tip_rings[i][j], tip_rings[i][next])
                };
                let (top0, top1) = (tip_rings[i + 1][j], tip_rings[i + 1][next]);

                let normal = (ring[j] + ring[next]).normalize();
                self.mesh
                    .push(Triangle::new(normal, bottom0, bottom1, top0));
                self.mesh.push(Triangle::new(normal, bottom1, top1, top0));
            }
        }

        // Close the tip with an apex fan
        let apex = center + top + Vec3::Z * tip_height;
        let last_ring = &tip_rings[tip_rings.len() - 1];
        for i in 0..n {
            let next = (i + 1) % n;
            self.mesh
                .push(Triangle::new(Vec3::Z, apex, last_ring[i], last_ring[next]));
        }

        Ok(())
    }
}

/// `segments` points on a circle of `radius` in the XY plane.
///
/// Generated by repeatedly applying one rotation step instead of
/// evaluating sin/cos per point, matching the reference numerics.
fn circle_points(radius: f32, segments: u32) -> Vec<Vec3> {
    let step = Mat3::from_rotation_z(TAU / segments as f32);
    let mut points = Vec::with_capacity(segments as usize);
    points.push(Vec3::X * radius);
    for i in 1..segments as usize {
        let previous = points[i - 1];
        points.push(step * previous);
    }
    points
}

/// Minimal rotation taking +Z onto `normal`.
///
/// Identity when they already agree, a half-turn about X when they are
/// exactly opposite, otherwise the Rodrigues rotation built from their
/// cross and dot products.
fn align_z_to(normal: Vec3) -> Mat3 {
    let default = Vec3::Z;
    let n = normal.normalize();
    let axis = default.cross(n);

    if axis.length_squared() <= f32::EPSILON {
        if n.dot(default) > 0.0 {
            Mat3::IDENTITY
        } else {
            Mat3::from_rotation_x(PI)
        }
    } else {
        let cos = default.dot(n);
        let k = cross_matrix(axis);
        Mat3::IDENTITY + k + k * k * ((1.0 - cos) / axis.length_squared())
    }
}

/// The matrix form of `v ×`: `cross_matrix(v) * u == v.cross(u)`.
fn cross_matrix(v: Vec3) -> Mat3 {
    Mat3::from_cols(
        Vec3::new(0.0, v.z, -v.y),
        Vec3::new(-v.z, 0.0, v.x),
        Vec3::new(v.y, -v.x, 0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_plane_is_two_triangles() {
        let mut builder = MeshBuilder::new();
        builder.add_plane(Vec3::Z, Vec2::new(4.0, 2.0), Vec3::ZERO);
        let mesh = builder.into_mesh();
        assert_eq!(mesh.len(), 2);
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(min.x, -2.0);
        assert_relative_eq!(max.x, 2.0);
        assert_relative_eq!(min.y, -1.0);
        assert_relative_eq!(max.y, 1.0);
        assert_relative_eq!(min.z, 0.0);
        assert_relative_eq!(max.z, 0.0);
    }

    #[test]
    fn test_plane_winding_matches_up_normal() {
        let mut builder = MeshBuilder::new();
        builder.add_plane(Vec3::Z, Vec2::new(2.0, 2.0), Vec3::ZERO);
        for triangle in builder.mesh().triangles() {
            let [a, b, c] = triangle.vertices;
            let face = (b - a).cross(c - a);
            assert!(face.dot(triangle.normal) > 0.0, "winding disagrees with normal");
        }
    }

    #[test]
    fn test_plane_rotated_to_side_normal() {
        let mut builder = MeshBuilder::new();
        builder.add_plane(Vec3::X, Vec2::new(2.0, 2.0), Vec3::ZERO);
        let (min, max) = builder.mesh().bounding_box();
        // The quad now lives in the YZ plane
        assert_relative_eq!(min.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(max.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(max.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(max.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_plane_flipped_for_opposite_normal() {
        let mut builder = MeshBuilder::new();
        builder.add_plane(-Vec3::Z, Vec2::new(2.0, 2.0), Vec3::ZERO);
        for triangle in builder.mesh().triangles() {
            let [a, b, c] = triangle.vertices;
            let face = (b - a).cross(c - a);
            assert!(face.dot(triangle.normal) > 0.0, "winding disagrees with normal");
        }
    }

    #[test]
    fn test_plane_translated_to_center() {
        let mut builder = MeshBuilder::new();
        let center = Vec3::new(5.0, -3.0, 7.0);
        builder.add_plane(Vec3::Z, Vec2::new(2.0, 2.0), center);
        let (min, max) = builder.mesh().bounding_box();
        assert_relative_eq!((min.x + max.x) / 2.0, center.x);
        assert_relative_eq!((min.y + max.y) / 2.0, center.y);
        assert_relative_eq!(min.z, center.z);
    }

    #[test]
    fn test_box_is_twelve_triangles() {
        let mut builder = MeshBuilder::new();
        builder.add_box(Vec3::new(2.0, 4.0, 6.0), Vec3::ZERO);
        let mesh = builder.into_mesh();
        assert_eq!(mesh.len(), 12);
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(min.x, -1.0, epsilon = 1e-6);
        assert_relative_eq!(max.y, 2.0, epsilon = 1e-6);
        assert_relative_eq!(max.z, 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_box_normals_point_outward() {
        let mut builder = MeshBuilder::new();
        builder.add_box(Vec3::splat(2.0), Vec3::ZERO);
        for triangle in builder.mesh().triangles() {
            let face_center: Vec3 =
                triangle.vertices.iter().sum::<Vec3>() / 3.0;
            assert!(
                face_center.dot(triangle.normal) > 0.0,
                "normal points into the box"
            );
        }
    }

    #[test]
    fn test_cylinder_triangle_count() {
        for segments in [3u32, 8, 32] {
            let mut builder = MeshBuilder::new();
            builder
                .add_cylinder(1.0, 2.0, segments, Vec3::ZERO)
                .unwrap();
            assert_eq!(builder.mesh().len(), 4 * segments as usize);
        }
    }

    #[test]
    fn test_cylinder_bounds() {
        let mut builder = MeshBuilder::new();
        builder
            .add_cylinder(1.5, 4.0, 32, Vec3::new(0.0, 0.0, 10.0))
            .unwrap();
        let (min, max) = builder.mesh().bounding_box();
        assert_relative_eq!(min.z, 8.0);
        assert_relative_eq!(max.z, 12.0);
        assert_relative_eq!(max.x, 1.5, epsilon = 1e-5);
    }

    #[test]
    fn test_cylinder_rejects_degenerate_input() {
        let mut builder = MeshBuilder::new();
        assert!(builder.add_cylinder(0.0, 1.0, 8, Vec3::ZERO).is_err());
        assert!(builder.add_cylinder(1.0, 0.0, 8, Vec3::ZERO).is_err());
        assert!(builder.add_cylinder(1.0, 1.0, 2, Vec3::ZERO).is_err());
        assert!(builder.mesh().is_empty());
    }

    #[test]
    fn test_circle_points_stay_on_radius() {
        let points = circle_points(2.0, 16);
        assert_eq!(points.len(), 16);
        for p in &points {
            assert_relative_eq!(p.length(), 2.0, epsilon = 1e-5);
            assert_relative_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn test_rounded_knob_triangle_count() {
        let (n, tip) = (8u32, 4u32);
        let mut builder = MeshBuilder::new();
        builder
            .add_rounded_knob(1.0, 2.0, n, 0.2, 0.5, tip, Vec3::ZERO)
            .unwrap();
        // bottom fan + 2 per body quad + 2 per ring quad + apex fan
        let expected = (n + 2 * n + 2 * n * (tip - 1) + n) as usize;
        assert_eq!(builder.mesh().len(), expected);
    }

    #[test]
    fn test_rounded_knob_apex_height() {
        let mut builder = MeshBuilder::new();
        let center = Vec3::new(3.0, 1.0, 0.5);
        builder
            .add_rounded_knob(0.75, 0.5, 16, 0.15, 0.25, 8, center)
            .unwrap();
        let (min, max) = builder.mesh().bounding_box();
        // Apex sits body_height/2 + tip_height above the center
        assert_relative_eq!(max.z, center.z + 0.25 + 0.25);
        assert_relative_eq!(min.z, center.z - 0.25);
    }

    #[test]
    fn test_rounded_knob_tip_narrows() {
        let mut builder = MeshBuilder::new();
        builder
            .add_rounded_knob(1.0, 1.0, 16, 0.2, 0.5, 8, Vec3::ZERO)
            .unwrap();
        // The topmost ring flattens to the tip radius before the apex
        // fan closes it
        let apex_z = 0.5 + 0.5;
        for triangle in builder.mesh().triangles() {
            for v in triangle.vertices {
                if (v.z - apex_z).abs() < 1e-5 {
                    assert!(
                        v.truncate().length() <= 0.2 + 1e-5,
                        "tip wider than tip radius"
                    );
                }
            }
        }
    }

    #[test]
    fn test_rounded_knob_rejects_wide_tip() {
        let mut builder = MeshBuilder::new();
        let result = builder.add_rounded_knob(0.5, 1.0, 16, 0.75, 0.5, 8, Vec3::ZERO);
        assert!(result.is_err());
    }

    #[test]
    fn test_align_z_to_rotates_axes() {
        let rotation = align_z_to(Vec3::X);
        let rotated = rotation * Vec3::Z;
        assert_relative_eq!(rotated.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(rotated.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(rotated.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_align_z_to_diagonal() {
        let target = Vec3::new(1.0, 1.0, 1.0).normalize();
        let rotation = align_z_to(target);
        let rotated = rotation * Vec3::Z;
        assert_relative_eq!(rotated.x, target.x, epsilon = 1e-5);
        assert_relative_eq!(rotated.y, target.y, epsilon = 1e-5);
        assert_relative_eq!(rotated.z, target.z, epsilon = 1e-5);
    }

    #[test]
    fn test_cross_matrix_matches_cross_product() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let u = Vec3::new(-2.0, 0.5, 4.0);
        let expected = v.cross(u);
        let actual = cross_matrix(v) * u;
        assert_relative_eq!(actual.x, expected.x);
        assert_relative_eq!(actual.y, expected.y);
        assert_relative_eq!(actual.z, expected.z);
    }
}
