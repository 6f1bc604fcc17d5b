//! Entity/component scene store
//!
//! A deliberately small composition-only store: entities are opaque
//! indices owning a fixed table of component-kind slots, components of
//! each kind live in one dense array, and transforms form a tree through
//! parent indices. This is the surface the renderer consumes; there is no
//! system scheduler or archetype machinery here.

pub mod component;
pub mod components;
pub mod entity;
#[allow(clippy::module_inception)]
pub mod scene;

use thiserror::Error;

pub use component::{Component, ComponentKind};
pub use components::{
    CameraComponent, LightComponent, LightType, MeshComponent, TransformComponent,
};
pub use entity::Entity;
pub use scene::Scene;

/// Index of an entity in the scene's entity table
pub type EntityIndex = usize;

/// Errors from scene graph operations
#[derive(Error, Debug)]
pub enum SceneError {
    /// A parent assignment would make a transform its own ancestor
    #[error("transform parent assignment would create a cycle (child {child}, parent {parent})")]
    ParentCycle {
        /// Transform index of the child
        child: usize,
        /// Transform index of the rejected parent
        parent: usize,
    },

    /// A component index was out of range for its kind's dense array
    #[error("component index {index} out of range for kind {kind:?}")]
    InvalidComponentIndex {
        /// Component kind whose storage was indexed
        kind: ComponentKind,
        /// The offending index
        index: usize,
    },
}
