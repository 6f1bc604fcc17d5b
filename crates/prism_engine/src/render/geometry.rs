//! Geometry store types: mesh data, GPU-resident geometry, and primitives
//!
//! `MeshData` is the CPU-side attribute soup a parser or generator
//! produces; `Geometry` is what the store keeps after upload: the GPU
//! buffer handle, the index count, and the local-space bounding box
//! computed once from the raw positions. Geometries are immutable after
//! creation and never destroyed during a run.

use crate::foundation::math::Vec3;
use crate::render::api::BufferHandle;
use crate::render::culling::Aabb;
use crate::render::error::RenderError;
use bytemuck::{Pod, Zeroable};

/// 3D vertex layout uploaded to the GPU
///
/// `#[repr(C)]` keeps the memory layout stable for byte-level buffer
/// uploads.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in local space
    pub position: [f32; 3],
    /// Normal vector
    pub normal: [f32; 3],
    /// Texture coordinates
    pub uv: [f32; 2],
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }
}

/// Raw mesh attributes as parallel arrays plus a shared index buffer
///
/// Each index addresses all three attribute arrays; `uvs` and `normals`
/// may be shorter than `positions` (missing entries fall back to zero when
/// interleaving).
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions
    pub positions: Vec<[f32; 3]>,
    /// Texture coordinates, parallel to `positions`
    pub uvs: Vec<[f32; 2]>,
    /// Normals, parallel to `positions`
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices into the attribute arrays
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Interleave the attribute arrays into the GPU vertex layout
    pub fn interleave(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, &position)| Vertex {
                position,
                normal: self.normals.get(i).copied().unwrap_or([0.0, 0.0, 0.0]),
                uv: self.uvs.get(i).copied().unwrap_or([0.0, 0.0]),
            })
            .collect()
    }

    /// Local-space bounding box from per-axis min/max over all positions
    ///
    /// Computed once at load time; world or clip bounds are later obtained
    /// by transforming this box, never by rescanning vertices.
    pub fn compute_aabb(&self) -> Result<Aabb, RenderError> {
        let mut positions = self.positions.iter();
        let first = positions.next().ok_or(RenderError::EmptyGeometry)?;
        let mut min = Vec3::from(*first);
        let mut max = min;
        for p in positions {
            let v = Vec3::from(*p);
            min = min.inf(&v);
            max = max.sup(&v);
        }
        Ok(Aabb::from_min_max(min, max))
    }

    /// Flat quad in the XZ plane with a +Y normal, centered at the origin
    pub fn plane(half_size: f32) -> Self {
        let s = half_size;
        Self {
            positions: vec![[-s, 0.0, -s], [-s, 0.0, s], [s, 0.0, s], [s, 0.0, -s]],
            uvs: vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]],
            normals: vec![[0.0, 1.0, 0.0]; 4],
            indices: vec![0, 1, 2, 0, 2, 3],
        }
    }

    /// Axis-aligned cube with per-face normals, centered at the origin
    ///
    /// Faces wind counter-clockwise seen from outside; the environment
    /// pass relies on that to flip culling and draw the inside.
    pub fn cube(half_extent: f32) -> Self {
        let s = half_extent;
        // Six faces, four vertices each: +X, -X, +Y, -Y, +Z, -Z.
        let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
            ([1.0, 0.0, 0.0], [[s, -s, -s], [s, s, -s], [s, s, s], [s, -s, s]]),
            ([-1.0, 0.0, 0.0], [[-s, -s, s], [-s, s, s], [-s, s, -s], [-s, -s, -s]]),
            ([0.0, 1.0, 0.0], [[-s, s, -s], [-s, s, s], [s, s, s], [s, s, -s]]),
            ([0.0, -1.0, 0.0], [[-s, -s, s], [-s, -s, -s], [s, -s, -s], [s, -s, s]]),
            ([0.0, 0.0, 1.0], [[-s, -s, s], [s, -s, s], [s, s, s], [-s, s, s]]),
            ([0.0, 0.0, -1.0], [[s, -s, -s], [-s, -s, -s], [-s, s, -s], [s, s, -s]]),
        ];

        let mut data = Self::default();
        for (normal, corners) in faces {
            let base = data.positions.len() as u32;
            data.positions.extend_from_slice(&corners);
            data.normals.extend_from_slice(&[normal; 4]);
            data.uvs
                .extend_from_slice(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
            data.indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
        data
    }
}

/// GPU-resident geometry: buffer handle, index count, and local bounds
#[derive(Debug, Clone, Copy)]
pub struct Geometry {
    /// Handle to the device vertex/index buffers
    pub buffers: BufferHandle,
    /// Number of indices to draw
    pub index_count: u32,
    /// Local-space bounding box
    pub aabb: Aabb,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_aabb_scans_all_positions() {
        let data = MeshData {
            positions: vec![[-1.0, 0.0, 2.0], [3.0, -4.0, 2.0], [0.0, 5.0, -6.0]],
            ..Default::default()
        };
        let aabb = data.compute_aabb().unwrap();
        assert_eq!(aabb.center, Vec3::new(1.0, 0.5, -2.0));
        assert_eq!(aabb.half_extent, Vec3::new(2.0, 4.5, 4.0));
    }

    #[test]
    fn test_compute_aabb_rejects_empty_mesh() {
        let data = MeshData::default();
        assert!(matches!(data.compute_aabb(), Err(RenderError::EmptyGeometry)));
    }

    #[test]
    fn test_interleave_pads_missing_attributes() {
        let data = MeshData {
            positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]],
            normals: vec![[0.0, 1.0, 0.0]],
            ..Default::default()
        };
        let vertices = data.interleave();
        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[0].normal, [0.0, 1.0, 0.0]);
        assert_eq!(vertices[1].normal, [0.0, 0.0, 0.0]);
        assert_eq!(vertices[1].uv, [0.0, 0.0]);
    }

    #[test]
    fn test_cube_bounds_match_half_extent() {
        let cube = MeshData::cube(2.5);
        assert_eq!(cube.positions.len(), 24);
        assert_eq!(cube.indices.len(), 36);
        let aabb = cube.compute_aabb().unwrap();
        assert_eq!(aabb.center, Vec3::zeros());
        assert_eq!(aabb.half_extent, Vec3::new(2.5, 2.5, 2.5));
    }

    #[test]
    fn test_plane_lies_in_xz() {
        let plane = MeshData::plane(20.0);
        let aabb = plane.compute_aabb().unwrap();
        assert_eq!(aabb.half_extent.y, 0.0);
        assert_eq!(aabb.half_extent.x, 20.0);
        assert_eq!(plane.indices.len(), 6);
    }
}
