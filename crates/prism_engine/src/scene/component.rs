//! Component kind table and storage access trait

use super::scene::Scene;
use super::EntityIndex;

/// Kinds of components an entity can carry
///
/// Each kind owns one dense array on the [`Scene`]; an entity stores at
/// most one index per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    /// Spatial transform (every entity has one)
    Transform,
    /// Mesh-bearing draw item
    Mesh,
    /// Light source
    Light,
    /// Camera viewpoint
    Camera,
}

impl ComponentKind {
    /// Number of component kinds, sizing each entity's component table
    pub const COUNT: usize = 4;

    /// Slot of this kind in an entity's component table
    pub const fn slot(self) -> usize {
        self as usize
    }
}

/// Trait binding a component type to its kind and dense storage
///
/// Mirrors the scene's contract: components of one kind live in a single
/// dense array whose indices stay stable until an explicit reorder.
pub trait Component: Sized {
    /// The kind tag for this component type
    const KIND: ComponentKind;

    /// Dense storage for this component kind
    fn storage(scene: &Scene) -> &Vec<Self>;

    /// Mutable dense storage for this component kind
    fn storage_mut(scene: &mut Scene) -> &mut Vec<Self>;

    /// Hook invoked when the component is attached to an entity
    ///
    /// Components that need a back-reference to their owner (draw items,
    /// lights) record it here; others ignore it.
    fn on_attach(&mut self, _owner: EntityIndex) {}
}
