//! # Prism Engine
//!
//! A small real-time 3D rendering core. It iterates a scene of entities,
//! determines visibility, selects materials and shaders, and issues draw
//! calls every frame.
//!
//! The interesting parts:
//!
//! - **Sorted draw submission**: materials are grouped by shader and draw
//!   items by material ([`render::sorting`]), so per-item state binding in
//!   the frame loop is a cheap "different from last" comparison.
//! - **Clip-space frustum culling**: bounding boxes are tested against the
//!   six frustum planes in homogeneous coordinates ([`render::culling`]).
//! - **Index bookkeeping**: entities reference draw items, draw items
//!   reference materials and geometries, all by dense-array index, and
//!   the sorter repairs every reference atomically when it reorders.
//!
//! Windowing, input, physics, and the GPU itself are external
//! collaborators; the renderer talks to the GPU through the
//! [`render::api::RenderDevice`] trait, and ships a recording
//! [`render::HeadlessDevice`] for tests and windowless runs.
//!
//! ## Quick start
//!
//! ```rust
//! use prism_engine::prelude::*;
//!
//! let config = RendererConfig::default();
//! let mut renderer = Renderer::new(Box::new(HeadlessDevice::new()), &config);
//! let mut scene = Scene::new();
//!
//! // A camera and one cube.
//! let camera = scene.create_entity("camera");
//! scene.attach(camera, CameraComponent::default());
//!
//! let geometry = renderer.create_geometry(&MeshData::cube(1.0)).unwrap();
//! let material = renderer.create_material();
//!
//! let cube = scene.create_entity("cube");
//! scene.attach(cube, MeshComponent::new(geometry, material));
//!
//! // Sort once after setup, then render.
//! renderer.sort_draw_order(&mut scene).unwrap();
//! renderer.render_frame(&mut scene);
//! ```

pub mod assets;
pub mod config;
pub mod foundation;
pub mod render;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::assets::{parse_obj, ObjError};
    pub use crate::config::{ConfigError, RendererConfig};
    pub use crate::foundation::logging;
    pub use crate::foundation::math::{Mat4, Mat4Ext, Quat, Vec2, Vec3, Vec4};
    pub use crate::foundation::time::Timer;
    pub use crate::render::{
        Aabb, HeadlessDevice, Material, MeshData, RenderDevice, RenderError, Renderer,
        ShaderHandle, TextureHandle,
    };
    pub use crate::scene::{
        CameraComponent, LightComponent, LightType, MeshComponent, Scene, SceneError,
        TransformComponent,
    };
}
