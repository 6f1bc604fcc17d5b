//! Uniform names shared between the renderer and shader programs
//!
//! Shaders are free to declare any subset of these; a name missing from a
//! bound program is skipped, not an error.

/// Model-view-projection matrix
pub const MVP: &str = "u_mvp";

/// Model (world) matrix
pub const MODEL: &str = "u_model";

/// Inverse-transpose of the model matrix
pub const NORMAL_MATRIX: &str = "u_normal_matrix";

/// Camera position in world space
pub const CAMERA_POSITION: &str = "u_cam_pos";

/// View-projection matrix (environment pass)
pub const VIEW_PROJECTION: &str = "u_vp";

/// Material ambient color
pub const AMBIENT: &str = "u_ambient";

/// Material diffuse color
pub const DIFFUSE: &str = "u_diffuse";

/// Material specular color
pub const SPECULAR: &str = "u_specular";

/// Material specular gloss exponent
pub const SPECULAR_GLOSS: &str = "u_specular_gloss";

/// Flag enabling diffuse texture sampling
pub const USE_DIFFUSE_MAP: &str = "u_use_diffuse_map";

/// Diffuse texture sampler
pub const DIFFUSE_MAP: &str = "u_diffuse_map";

/// Flag enabling cube-map reflections
pub const USE_REFLECTION_MAP: &str = "u_use_reflection_map";

/// Cube-map sampler (reflections and environment pass)
pub const SKYBOX: &str = "u_skybox";

/// Name of the light array block scanned for in shader sources
pub const LIGHT_ARRAY: &str = "lights";

/// Number of active entries in the light array
pub const LIGHT_COUNT: &str = "u_num_lights";
