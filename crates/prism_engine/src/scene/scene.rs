//! Scene: entities plus dense per-kind component storage
//!
//! The scene is the explicit context handed to the frame renderer each
//! frame. It owns the entity table, one dense array per component kind,
//! and the main-camera handle. Component indices are stable until an
//! explicit reorder (the draw-order sort), which repairs entity
//! back-references as part of the same operation.

use super::component::{Component, ComponentKind};
use super::components::{CameraComponent, LightComponent, MeshComponent, TransformComponent};
use super::entity::Entity;
use super::{EntityIndex, SceneError};

/// Entity/component store consumed by the renderer
#[derive(Default)]
pub struct Scene {
    entities: Vec<Entity>,
    pub(crate) transforms: Vec<TransformComponent>,
    pub(crate) meshes: Vec<MeshComponent>,
    pub(crate) lights: Vec<LightComponent>,
    pub(crate) cameras: Vec<CameraComponent>,
    main_camera: Option<usize>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new entity with a debug name
    ///
    /// Every entity gets an identity transform attached immediately, so
    /// transform lookups by entity never fail.
    pub fn create_entity(&mut self, name: impl Into<String>) -> EntityIndex {
        let entity = self.entities.len();
        self.entities.push(Entity::new(name));
        self.attach(entity, TransformComponent::identity());
        entity
    }

    /// Attach a component to an entity, returning its index in the kind's
    /// dense array
    ///
    /// The first camera attached becomes the scene's main camera unless
    /// one was chosen explicitly.
    pub fn attach<C: Component>(&mut self, entity: EntityIndex, mut component: C) -> usize {
        component.on_attach(entity);
        let storage = C::storage_mut(self);
        let index = storage.len();
        storage.push(component);
        self.entities[entity].set_component_index(C::KIND, index);
        if C::KIND == ComponentKind::Camera && self.main_camera.is_none() {
            self.main_camera = Some(index);
        }
        index
    }

    /// Component of the given kind attached to an entity
    pub fn get<C: Component>(&self, entity: EntityIndex) -> Option<&C> {
        let index = self.entities.get(entity)?.component_index(C::KIND)?;
        C::storage(self).get(index)
    }

    /// Mutable component of the given kind attached to an entity
    pub fn get_mut<C: Component>(&mut self, entity: EntityIndex) -> Option<&mut C> {
        let index = self.entities.get(entity)?.component_index(C::KIND)?;
        C::storage_mut(self).get_mut(index)
    }

    /// Index of an entity's component of kind `C` in the dense array
    pub fn component_index_of<C: Component>(&self, entity: EntityIndex) -> Option<usize> {
        self.entities.get(entity)?.component_index(C::KIND)
    }

    /// All components of one kind as a dense slice, in storage order
    pub fn all<C: Component>(&self) -> &[C] {
        C::storage(self)
    }

    /// Mutable access to one kind's dense storage
    pub fn all_mut<C: Component>(&mut self) -> &mut Vec<C> {
        C::storage_mut(self)
    }

    /// All entities in creation order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub(crate) fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    /// Index of the main camera in the camera array, if any camera exists
    pub fn main_camera_index(&self) -> Option<usize> {
        self.main_camera.filter(|&index| index < self.cameras.len())
    }

    /// Choose the main camera by component index
    pub fn set_main_camera(&mut self, index: usize) -> Result<(), SceneError> {
        if index >= self.cameras.len() {
            return Err(SceneError::InvalidComponentIndex {
                kind: ComponentKind::Camera,
                index,
            });
        }
        self.main_camera = Some(index);
        Ok(())
    }

    /// Parent one transform to another, by component index
    ///
    /// Rejects assignments that would create a cycle (including
    /// self-parenting), so global-matrix resolution never loops.
    pub fn set_parent(&mut self, child: usize, parent: usize) -> Result<(), SceneError> {
        if child >= self.transforms.len() {
            return Err(SceneError::InvalidComponentIndex {
                kind: ComponentKind::Transform,
                index: child,
            });
        }
        if parent >= self.transforms.len() {
            return Err(SceneError::InvalidComponentIndex {
                kind: ComponentKind::Transform,
                index: parent,
            });
        }

        // Walk up from the prospective parent; reaching the child means
        // the assignment would close a loop.
        let mut ancestor = Some(parent);
        while let Some(index) = ancestor {
            if index == child {
                return Err(SceneError::ParentCycle { child, parent });
            }
            ancestor = self.transforms[index].parent;
        }

        self.transforms[child].parent = Some(parent);
        Ok(())
    }
}
