//! Light component
//!
//! Pure data: color, direction, attenuation, and spot-cone angles with a
//! type discriminant. Fields outside the active type are carried but
//! ignored by the renderer, not validated.

use crate::foundation::math::Vec3;
use crate::scene::component::{Component, ComponentKind};
use crate::scene::scene::Scene;
use crate::scene::EntityIndex;

/// Types of lights supported by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightType {
    /// Directional light (like sunlight) with parallel rays
    Directional,
    /// Point light radiating in all directions from a position
    Point,
    /// Spot light forming a cone from a position
    Spot,
}

impl LightType {
    /// Integer discriminant uploaded to shaders (0, 1, 2)
    pub const fn shader_index(self) -> i32 {
        self as i32
    }
}

/// Light source component
#[derive(Debug, Clone)]
pub struct LightComponent {
    /// The type of light
    pub light_type: LightType,
    /// RGB color (0.0 to 1.0 range)
    pub color: Vec3,
    /// Direction for directional/spot lights
    pub direction: Vec3,
    /// Linear attenuation coefficient for point/spot lights
    pub linear_att: f32,
    /// Quadratic attenuation coefficient for point/spot lights
    pub quadratic_att: f32,
    /// Inner cone angle for spot lights, in degrees
    pub spot_inner: f32,
    /// Outer cone angle for spot lights, in degrees
    pub spot_outer: f32,
    /// Entity this light is attached to (its transform gives the position)
    pub owner: EntityIndex,
}

impl Default for LightComponent {
    fn default() -> Self {
        Self {
            light_type: LightType::Point,
            color: Vec3::new(1.0, 1.0, 1.0),
            direction: Vec3::new(0.0, -1.0, 0.0),
            linear_att: 0.0,
            quadratic_att: 0.0,
            spot_inner: 0.0,
            spot_outer: 0.0,
            owner: 0,
        }
    }
}

impl LightComponent {
    /// Create a directional light with world-space direction
    pub fn directional(color: Vec3, direction: Vec3) -> Self {
        Self {
            light_type: LightType::Directional,
            color,
            direction,
            ..Default::default()
        }
    }

    /// Create a point light; position comes from the owning entity's transform
    pub fn point(color: Vec3, linear_att: f32, quadratic_att: f32) -> Self {
        Self {
            light_type: LightType::Point,
            color,
            linear_att,
            quadratic_att,
            ..Default::default()
        }
    }

    /// Create a spot light with cone angles in degrees
    pub fn spot(
        color: Vec3,
        direction: Vec3,
        linear_att: f32,
        quadratic_att: f32,
        spot_inner: f32,
        spot_outer: f32,
    ) -> Self {
        Self {
            light_type: LightType::Spot,
            color,
            direction,
            linear_att,
            quadratic_att,
            spot_inner,
            spot_outer,
            ..Default::default()
        }
    }
}

impl Component for LightComponent {
    const KIND: ComponentKind = ComponentKind::Light;

    fn storage(scene: &Scene) -> &Vec<Self> {
        &scene.lights
    }

    fn storage_mut(scene: &mut Scene) -> &mut Vec<Self> {
        &mut scene.lights
    }

    fn on_attach(&mut self, owner: EntityIndex) {
        self.owner = owner;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shader_index_discriminants() {
        assert_eq!(LightType::Directional.shader_index(), 0);
        assert_eq!(LightType::Point.shader_index(), 1);
        assert_eq!(LightType::Spot.shader_index(), 2);
    }

    #[test]
    fn test_spot_constructor_fills_cone_angles() {
        let light = LightComponent::spot(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            0.022,
            0.0019,
            30.0,
            40.0,
        );
        assert_eq!(light.light_type, LightType::Spot);
        assert_eq!(light.spot_inner, 30.0);
        assert_eq!(light.spot_outer, 40.0);
    }
}
