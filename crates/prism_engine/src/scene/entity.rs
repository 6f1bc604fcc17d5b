//! Entity implementation

use super::component::ComponentKind;

/// A scene entity: an opaque identity plus a fixed-size table mapping each
/// component kind to an index into that kind's dense array
///
/// There is no inheritance; behavior comes entirely from the attached
/// components.
#[derive(Debug, Clone)]
pub struct Entity {
    name: String,
    components: [Option<usize>; ComponentKind::COUNT],
}

impl Entity {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: [None; ComponentKind::COUNT],
        }
    }

    /// Debug name given at creation
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index of this entity's component of the given kind, if attached
    pub fn component_index(&self, kind: ComponentKind) -> Option<usize> {
        self.components[kind.slot()]
    }

    pub(crate) fn set_component_index(&mut self, kind: ComponentKind, index: usize) {
        self.components[kind.slot()] = Some(index);
    }
}
