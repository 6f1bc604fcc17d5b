//! Mesh component: the renderable draw item
//!
//! References one geometry and one material in the renderer's tables by
//! index. Both indices must be valid table indices at all times; the
//! draw-order sorter repairs them together with the owning entity's
//! back-reference when it reorders the tables.

use crate::scene::component::{Component, ComponentKind};
use crate::scene::scene::Scene;
use crate::scene::EntityIndex;

/// Draw item combining a geometry reference with a material reference
#[derive(Debug, Clone, Copy)]
pub struct MeshComponent {
    /// Index into the renderer's geometry store
    pub geometry: usize,

    /// Index into the renderer's material table
    pub material: usize,

    /// Entity this draw item is attached to
    pub owner: EntityIndex,
}

impl MeshComponent {
    /// Create a draw item for the given geometry and material
    ///
    /// The owner is filled in when the component is attached to an entity.
    pub fn new(geometry: usize, material: usize) -> Self {
        Self {
            geometry,
            material,
            owner: 0,
        }
    }
}

impl Component for MeshComponent {
    const KIND: ComponentKind = ComponentKind::Mesh;

    fn storage(scene: &Scene) -> &Vec<Self> {
        &scene.meshes
    }

    fn storage_mut(scene: &mut Scene) -> &mut Vec<Self> {
        &mut scene.meshes
    }

    fn on_attach(&mut self, owner: EntityIndex) {
        self.owner = owner;
    }
}
