//! View-frustum culling with axis-aligned bounding boxes
//!
//! Visibility is decided in clip space: the box corners are transformed by
//! a to-clip matrix and tested against the six frustum planes using the
//! homogeneous-coordinate inequalities (`-w < x < w` and so on for y/z).
//! A box is rejected only when all eight corners fail the *same* plane.
//!
//! This is a conservative test: a box whose corners each fail a different
//! plane is kept even if it is actually entirely outside the frustum (the
//! classic separating-axis false accept). That approximation is
//! intentional; it never rejects anything partially visible, and the cost
//! of the occasional extra draw is accepted.

use crate::foundation::math::{Mat4, Vec3, Vec4};

/// Axis-aligned bounding box, center + half-extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Box center
    pub center: Vec3,
    /// Half-extent along each axis
    pub half_extent: Vec3,
}

impl Aabb {
    /// Build a box from per-axis minimum and maximum corners
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        let center = (min + max) * 0.5;
        Self {
            center,
            half_extent: max - center,
        }
    }

    /// The eight corners in homogeneous coordinates (w = 1)
    ///
    /// Ordered -/+ per axis: (---, --+, -+-, -++, +--, +-+, ++-, +++).
    pub fn corners(&self) -> [Vec4; 8] {
        let c = self.center;
        let h = self.half_extent;
        [
            Vec4::new(c.x - h.x, c.y - h.y, c.z - h.z, 1.0),
            Vec4::new(c.x - h.x, c.y - h.y, c.z + h.z, 1.0),
            Vec4::new(c.x - h.x, c.y + h.y, c.z - h.z, 1.0),
            Vec4::new(c.x - h.x, c.y + h.y, c.z + h.z, 1.0),
            Vec4::new(c.x + h.x, c.y - h.y, c.z - h.z, 1.0),
            Vec4::new(c.x + h.x, c.y - h.y, c.z + h.z, 1.0),
            Vec4::new(c.x + h.x, c.y + h.y, c.z - h.z, 1.0),
            Vec4::new(c.x + h.x, c.y + h.y, c.z + h.z, 1.0),
        ]
    }
}

/// Transform a box by an affine matrix, producing the tightest axis-aligned
/// box enclosing the transformed corners
///
/// An AABB is not closed under rotation, so the result may overestimate the
/// true bounds of the transformed box; that is safe for culling. The
/// identity matrix round-trips exactly.
pub fn transform_aabb(aabb: &Aabb, matrix: &Mat4) -> Aabb {
    let mut corners = aabb.corners();
    for corner in &mut corners {
        *corner = matrix * *corner;
    }

    let mut min = corners[0].xyz();
    let mut max = min;
    for corner in &corners[1..] {
        min = min.inf(&corner.xyz());
        max = max.sup(&corner.xyz());
    }
    Aabb::from_min_max(min, max)
}

/// Test whether a box is at least partially inside the clip-space frustum
///
/// `to_clip` is typically a model-view-projection matrix taking the box
/// from its local space into clip space. Operates entirely on stack-local
/// corner arrays; no allocation.
pub fn aabb_in_frustum(aabb: &Aabb, to_clip: &Mat4) -> bool {
    let mut clip = aabb.corners();
    for corner in &mut clip {
        *corner = to_clip * *corner;
    }

    // Inside tests for left, right, bottom, top, near, far.
    let planes: [fn(&Vec4) -> bool; 6] = [
        |p| -p.w < p.x,
        |p| p.x < p.w,
        |p| -p.w < p.y,
        |p| p.y < p.w,
        |p| -p.w < p.z,
        |p| p.z < p.w,
    ];

    // Visible unless some plane has every corner on its outside.
    planes
        .iter()
        .all(|inside| clip.iter().any(|corner| inside(corner)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{utils, Mat4Ext};
    use approx::assert_relative_eq;

    fn test_frustum() -> Mat4 {
        let projection = Mat4::perspective(utils::deg_to_rad(60.0), 1.0, 0.1, 100.0);
        let view = Mat4::look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::zeros(), Vec3::y());
        projection * view
    }

    fn unit_box_at(center: Vec3) -> Aabb {
        Aabb {
            center,
            half_extent: Vec3::new(0.5, 0.5, 0.5),
        }
    }

    #[test]
    fn test_box_inside_frustum_is_visible() {
        // Small box at the frustum center, well inside every plane.
        assert!(aabb_in_frustum(&unit_box_at(Vec3::zeros()), &test_frustum()));
    }

    #[test]
    fn test_box_beyond_one_plane_is_culled() {
        // Every corner far beyond the right plane.
        let far_right = unit_box_at(Vec3::new(1000.0, 0.0, 0.0));
        assert!(!aabb_in_frustum(&far_right, &test_frustum()));

        // Behind the camera: every corner fails the near plane.
        let behind = unit_box_at(Vec3::new(0.0, 0.0, 50.0));
        assert!(!aabb_in_frustum(&behind, &test_frustum()));
    }

    #[test]
    fn test_box_straddling_a_plane_is_visible() {
        // Large box centered on the right plane: some corners in, some out.
        let straddling = Aabb {
            center: Vec3::new(6.0, 0.0, 0.0),
            half_extent: Vec3::new(6.0, 0.5, 0.5),
        };
        assert!(aabb_in_frustum(&straddling, &test_frustum()));
    }

    #[test]
    fn test_transform_aabb_identity_roundtrip() {
        let aabb = Aabb {
            center: Vec3::new(1.0, -2.0, 3.0),
            half_extent: Vec3::new(0.5, 2.0, 1.5),
        };
        let out = transform_aabb(&aabb, &Mat4::identity());
        assert_eq!(out, aabb);
    }

    #[test]
    fn test_transform_aabb_translation() {
        let aabb = unit_box_at(Vec3::zeros());
        let out = transform_aabb(&aabb, &Mat4::new_translation(&Vec3::new(5.0, 0.0, -1.0)));
        assert_relative_eq!(out.center, Vec3::new(5.0, 0.0, -1.0));
        assert_relative_eq!(out.half_extent, aabb.half_extent);
    }

    #[test]
    fn test_transform_aabb_rotation_grows_bounds() {
        // Rotating a unit cube 45 degrees around Y widens its XZ footprint
        // to sqrt(2); the enclosing AABB must grow accordingly.
        let aabb = unit_box_at(Vec3::zeros());
        let rotation = Mat4::from_axis_angle(&Vec3::y_axis(), utils::deg_to_rad(45.0));
        let out = transform_aabb(&aabb, &rotation);
        let expected = std::f32::consts::SQRT_2 * 0.5;
        assert_relative_eq!(out.half_extent.x, expected, epsilon = 1e-5);
        assert_relative_eq!(out.half_extent.z, expected, epsilon = 1e-5);
        assert_relative_eq!(out.half_extent.y, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_from_min_max_recovers_center_and_extent() {
        let aabb = Aabb::from_min_max(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(3.0, 4.0, 6.0));
        assert_eq!(aabb.center, Vec3::new(1.0, 2.0, 4.0));
        assert_eq!(aabb.half_extent, Vec3::new(2.0, 2.0, 2.0));
    }
}
