//! Transform component
//!
//! Pure data component representing position, rotation, and scale, with an
//! optional parent link (by component index) forming a tree over the dense
//! transform array. Global matrices are computed on demand by walking
//! parent links; the scene rejects parent assignments that would create a
//! cycle, so the walk always terminates.

use crate::foundation::math::{Mat4, Quat, Vec3};
use crate::scene::component::{Component, ComponentKind};
use crate::scene::scene::Scene;

/// Spatial transform with an optional parent reference
#[derive(Debug, Clone, PartialEq)]
pub struct TransformComponent {
    /// Local position relative to the parent (or world, if no parent)
    pub position: Vec3,

    /// Local rotation quaternion
    pub rotation: Quat,

    /// Local scale factors
    pub scale: Vec3,

    /// Parent transform, as an index into the transform array
    pub parent: Option<usize>,
}

impl Default for TransformComponent {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
            parent: None,
        }
    }
}

impl TransformComponent {
    /// Create an identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform at the given position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Move the transform by the given offsets
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.position += Vec3::new(x, y, z);
    }

    /// Builder pattern: set rotation
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder pattern: set non-uniform scale
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Local transformation matrix (translation * rotation * scale)
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Global transformation matrix, composed through parent links
    ///
    /// `transforms` must be the dense transform array this component lives
    /// in, since parent references are indices into it.
    pub fn global_matrix(&self, transforms: &[TransformComponent]) -> Mat4 {
        let mut matrix = self.local_matrix();
        let mut parent = self.parent;
        while let Some(index) = parent {
            let node = &transforms[index];
            matrix = node.local_matrix() * matrix;
            parent = node.parent;
        }
        matrix
    }
}

impl Component for TransformComponent {
    const KIND: ComponentKind = ComponentKind::Transform;

    fn storage(scene: &Scene) -> &Vec<Self> {
        &scene.transforms
    }

    fn storage_mut(scene: &mut Scene) -> &mut Vec<Self> {
        &mut scene.transforms
    }
}
