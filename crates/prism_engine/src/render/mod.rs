//! Rendering system
//!
//! The core of the engine: a frame renderer that walks scene draw items in
//! sorted order, culls against the view frustum in clip space, and issues
//! draw calls through a backend-agnostic device trait.
//!
//! The GPU itself is an external collaborator: [`api::RenderDevice`]
//! defines the contract, and the in-tree [`backends::HeadlessDevice`]
//! records calls for tests and headless runs.

pub mod api;
pub mod backends;
pub mod culling;
pub mod error;
pub mod geometry;
pub mod lighting;
pub mod material;
pub mod renderer;
pub mod sorting;
pub mod uniforms;

pub use api::{
    BufferHandle, ClearFlags, CullFace, PackedLight, RenderDevice, ShaderHandle, TextureHandle,
    UniformValue,
};
pub use backends::HeadlessDevice;
pub use culling::{aabb_in_frustum, transform_aabb, Aabb};
pub use error::RenderError;
pub use geometry::{Geometry, MeshData, Vertex};
pub use material::Material;
pub use renderer::Renderer;
pub use sorting::sort_draw_order;
