//! Camera component
//!
//! Holds the viewpoint (position + forward) and perspective parameters,
//! plus the derived view/projection/view-projection matrices. The frame
//! renderer refreshes the derived matrices once per frame from the current
//! position, forward vector, and viewport aspect; they are plain data in
//! between, so reading them never triggers matrix math.

use crate::foundation::math::{Mat4, Mat4Ext, Vec3};
use crate::scene::component::{Component, ComponentKind};
use crate::scene::scene::Scene;

/// Perspective camera with cached derived matrices
#[derive(Debug, Clone)]
pub struct CameraComponent {
    /// Camera position in world space
    pub position: Vec3,
    /// Viewing direction (does not need to be normalized)
    pub forward: Vec3,
    /// Up vector for view orientation
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Viewport aspect ratio (width / height)
    pub aspect: f32,
    /// Near clipping plane distance
    pub near: f32,
    /// Far clipping plane distance
    pub far: f32,
    /// Derived world-to-view matrix
    pub view_matrix: Mat4,
    /// Derived projection matrix
    pub projection_matrix: Mat4,
    /// Derived projection * view matrix
    pub view_projection: Mat4,
}

impl Default for CameraComponent {
    fn default() -> Self {
        let mut camera = Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            forward: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: std::f32::consts::FRAC_PI_3,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            view_matrix: Mat4::identity(),
            projection_matrix: Mat4::identity(),
            view_projection: Mat4::identity(),
        };
        camera.update(camera.aspect);
        camera
    }
}

impl CameraComponent {
    /// Set the perspective projection parameters
    ///
    /// `fov` is the vertical field of view in radians. Derived matrices
    /// are refreshed immediately.
    pub fn set_perspective(&mut self, fov: f32, aspect: f32, near: f32, far: f32) {
        self.fov = fov;
        self.near = near;
        self.far = far;
        self.update(aspect);
    }

    /// Recompute the derived matrices from the current position, forward
    /// vector, and the given viewport aspect ratio
    pub fn update(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.view_matrix = Mat4::look_at(self.position, self.position + self.forward, self.up);
        self.projection_matrix = Mat4::perspective(self.fov, self.aspect, self.near, self.far);
        self.view_projection = self.projection_matrix * self.view_matrix;
    }
}

impl Component for CameraComponent {
    const KIND: ComponentKind = ComponentKind::Camera;

    fn storage(scene: &Scene) -> &Vec<Self> {
        &scene.cameras
    }

    fn storage_mut(scene: &mut Scene) -> &mut Vec<Self> {
        &mut scene.cameras
    }
}
