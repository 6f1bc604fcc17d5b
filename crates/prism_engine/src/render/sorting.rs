//! Draw-order sorting
//!
//! Reorders the material table so materials sharing a shader are
//! contiguous (ascending shader handle), then reorders draw items so items
//! sharing a material are contiguous (ascending material index), and
//! finally repairs every entity's draw-item back-reference. Both sorts are
//! stable, so ties keep their original relative order.
//!
//! The payoff is in the frame loop: once items are grouped by
//! shader-then-material, "bind only when different from the previous item"
//! eliminates redundant state changes without any lookup table.
//!
//! The old-index-to-new-index maps are local to this operation and
//! discarded when it returns; nothing transient is persisted on materials
//! or draw items between sorts.

use crate::render::error::RenderError;
use crate::render::material::Material;
use crate::scene::{ComponentKind, MeshComponent, Scene};

/// Sort materials by shader and draw items by material, repairing all
/// index references
///
/// Must run to completion before the first frame is rendered; an error
/// means a draw item or entity referenced a table index that does not
/// exist (a corrupted scene), and the scene must not be rendered.
pub fn sort_draw_order(
    materials: &mut Vec<Material>,
    scene: &mut Scene,
) -> Result<(), RenderError> {
    // Materials grouped by shader; stable, so equal shaders keep their
    // relative order.
    let mut order: Vec<usize> = (0..materials.len()).collect();
    order.sort_by_key(|&i| materials[i].shader);
    let old_to_new = invert_order(&order);
    apply_order(materials, &order);

    // Rewrite every draw item's material reference through the map. An
    // index outside the table is a corrupted scene, never coerced to a
    // default.
    for item in scene.all_mut::<MeshComponent>().iter_mut() {
        item.material = *old_to_new.get(item.material).ok_or(RenderError::DataConsistency {
            what: "material",
            index: item.material,
        })?;
    }

    // Draw items grouped by their (already remapped) material, same
    // three-step recipe.
    let items = scene.all_mut::<MeshComponent>();
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by_key(|&i| items[i].material);
    let old_to_new = invert_order(&order);
    apply_order(items, &order);

    // Repair entity -> draw-item back-references.
    for entity in scene.entities_mut() {
        if let Some(old) = entity.component_index(ComponentKind::Mesh) {
            let new = *old_to_new.get(old).ok_or(RenderError::DataConsistency {
                what: "draw item",
                index: old,
            })?;
            entity.set_component_index(ComponentKind::Mesh, new);
        }
    }

    Ok(())
}

/// Invert a sorted index order into an old-index -> new-index map
fn invert_order(order: &[usize]) -> Vec<usize> {
    let mut old_to_new = vec![0; order.len()];
    for (new, &old) in order.iter().enumerate() {
        old_to_new[old] = new;
    }
    old_to_new
}

/// Rebuild `items` in the given index order
fn apply_order<T: Clone>(items: &mut Vec<T>, order: &[usize]) {
    let reordered = order.iter().map(|&i| items[i].clone()).collect();
    *items = reordered;
}
