//! Scene light packing for bulk uniform upload
//!
//! Lights are gathered once per material bind into a fixed-capacity packed
//! array handed to the device in one call. Spot cone angles (stored on the
//! component in degrees) become cosines of the half-angle here, so shaders
//! compare them against dot products directly.

use crate::foundation::math::utils;
use crate::render::api::PackedLight;
use crate::scene::{LightComponent, Scene, TransformComponent};

/// Default capacity of the shader-side light array
pub const MAX_LIGHTS: usize = 8;

/// Pack the scene's lights into `out`, clearing it first
///
/// Lights beyond `capacity` are dropped with a warning; the shader array
/// is fixed-size. A light's position comes from its owning entity's
/// transform.
pub fn pack_lights(scene: &Scene, out: &mut Vec<PackedLight>, capacity: usize) {
    out.clear();
    let lights = scene.all::<LightComponent>();
    if lights.len() > capacity {
        log::warn!(
            "scene has {} lights but the light array holds {}; extra lights dropped",
            lights.len(),
            capacity
        );
    }

    for light in lights.iter().take(capacity) {
        let position = scene
            .get::<TransformComponent>(light.owner)
            .map_or([0.0, 0.0, 0.0], |transform| transform.position.into());

        out.push(PackedLight {
            position,
            color: light.color.into(),
            direction: light.direction.into(),
            light_type: light.light_type.shader_index(),
            linear_att: light.linear_att,
            quadratic_att: light.quadratic_att,
            spot_inner_cos: (utils::deg_to_rad(light.spot_inner) / 2.0).cos(),
            spot_outer_cos: (utils::deg_to_rad(light.spot_outer) / 2.0).cos(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use approx::assert_relative_eq;

    #[test]
    fn test_pack_resolves_position_from_owner_transform() {
        let mut scene = Scene::new();
        let entity = scene.create_entity("lamp");
        scene
            .get_mut::<TransformComponent>(entity)
            .unwrap()
            .translate(-10.0, 3.0, -10.0);
        scene.attach(entity, LightComponent::point(Vec3::new(1.0, 0.0, 0.0), 0.022, 0.0019));

        let mut packed = Vec::new();
        pack_lights(&scene, &mut packed, MAX_LIGHTS);

        assert_eq!(packed.len(), 1);
        assert_eq!(packed[0].position, [-10.0, 3.0, -10.0]);
        assert_eq!(packed[0].light_type, 1);
        assert_eq!(packed[0].linear_att, 0.022);
    }

    #[test]
    fn test_pack_computes_spot_half_angle_cosines() {
        let mut scene = Scene::new();
        let entity = scene.create_entity("spot");
        scene.attach(
            entity,
            LightComponent::spot(
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(0.0, -1.0, 0.0),
                0.022,
                0.0019,
                30.0,
                40.0,
            ),
        );

        let mut packed = Vec::new();
        pack_lights(&scene, &mut packed, MAX_LIGHTS);

        assert_relative_eq!(
            packed[0].spot_inner_cos,
            utils::deg_to_rad(15.0).cos(),
            epsilon = 1e-6
        );
        assert_relative_eq!(
            packed[0].spot_outer_cos,
            utils::deg_to_rad(20.0).cos(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_pack_truncates_at_capacity() {
        let mut scene = Scene::new();
        for i in 0..5 {
            let entity = scene.create_entity(format!("light {i}"));
            scene.attach(entity, LightComponent::default());
        }

        let mut packed = Vec::new();
        pack_lights(&scene, &mut packed, 3);
        assert_eq!(packed.len(), 3);

        // Repacking reuses the buffer and clears previous contents.
        pack_lights(&scene, &mut packed, 5);
        assert_eq!(packed.len(), 5);
    }
}
