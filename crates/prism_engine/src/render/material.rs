//! Material table entries
//!
//! A material is a mutable bundle of shading parameters plus a shader
//! reference. Materials live in the renderer's dense table and are
//! addressed by index; the draw-order sorter may permute the table, which
//! is why draw items are remapped in the same operation.

use crate::foundation::math::Vec3;
use crate::render::api::{ShaderHandle, TextureHandle};

/// Shading parameters for one material
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Shader program used to draw with this material
    ///
    /// `None` until assigned; draw items using an unassigned material are
    /// skipped with a log message rather than drawn with stale state.
    pub shader: Option<ShaderHandle>,
    /// Ambient reflectance
    pub ambient: Vec3,
    /// Diffuse reflectance
    pub diffuse: Vec3,
    /// Specular reflectance
    pub specular: Vec3,
    /// Specular gloss exponent
    pub specular_gloss: f32,
    /// Optional diffuse texture
    pub diffuse_map: Option<TextureHandle>,
    /// Optional cube map for reflections
    pub cube_map: Option<TextureHandle>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            shader: None,
            ambient: Vec3::new(0.1, 0.1, 0.1),
            diffuse: Vec3::new(1.0, 1.0, 1.0),
            specular: Vec3::new(1.0, 1.0, 1.0),
            specular_gloss: 80.0,
            diffuse_map: None,
            cube_map: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material_parameters() {
        let material = Material::default();
        assert_eq!(material.shader, None);
        assert_eq!(material.ambient, Vec3::new(0.1, 0.1, 0.1));
        assert_eq!(material.diffuse, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(material.specular_gloss, 80.0);
        assert!(material.diffuse_map.is_none());
        assert!(material.cube_map.is_none());
    }
}
