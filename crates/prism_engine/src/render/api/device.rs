//! Render device abstraction
//!
//! This trait is the renderer's entire view of the GPU: shader program
//! compilation and binding, uniform and texture uploads, geometry buffer
//! creation, draw submission, and the handful of pipeline state toggles
//! the frame loop needs. Backends implement it; the renderer never talks
//! to a graphics API directly.

use crate::foundation::math::{Mat4, Vec3, Vec4};
use crate::render::error::RenderError;
use crate::render::geometry::Vertex;
use bitflags::bitflags;
use bytemuck::{Pod, Zeroable};

/// Handle to a compiled shader program
///
/// Only produced by a successful [`RenderDevice::compile_shader`]; a failed
/// compile yields an error, never a usable handle. Ordering is meaningful:
/// the draw-order sorter groups materials by ascending handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShaderHandle(pub u32);

/// Handle to a texture resource owned by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Handle to a geometry's GPU vertex/index buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferHandle(pub u32);

bitflags! {
    /// Which buffers a clear operation touches
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearFlags: u32 {
        /// Color buffer
        const COLOR = 0b01;
        /// Depth buffer
        const DEPTH = 0b10;
    }
}

/// Face culling mode
///
/// The environment pass culls front faces to draw the inside of the sky
/// cube, then restores back-face culling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullFace {
    /// Cull back faces (the default for scene geometry)
    Back,
    /// Cull front faces (used to render the inside of a mesh)
    Front,
}

/// A value uploadable to a named shader uniform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// Integer scalar
    Int(i32),
    /// Float scalar
    Float(f32),
    /// 3-component vector
    Vec3(Vec3),
    /// 4-component vector
    Vec4(Vec4),
    /// 4x4 matrix
    Mat4(Mat4),
}

/// One light, packed for bulk upload into the shader's fixed light array
///
/// Spot cone angles are pre-converted to cosines of the half-angle so the
/// shader compares against a dot product directly. `#[repr(C)]` keeps the
/// layout stable for backends that memcpy this into a uniform buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PackedLight {
    /// World-space position (from the owning entity's transform)
    pub position: [f32; 3],
    /// RGB color
    pub color: [f32; 3],
    /// Direction for directional/spot lights
    pub direction: [f32; 3],
    /// Type discriminant: 0 directional, 1 point, 2 spot
    pub light_type: i32,
    /// Linear attenuation coefficient
    pub linear_att: f32,
    /// Quadratic attenuation coefficient
    pub quadratic_att: f32,
    /// Cosine of half the inner spot cone angle
    pub spot_inner_cos: f32,
    /// Cosine of half the outer spot cone angle
    pub spot_outer_cos: f32,
}

/// Result type for device operations
pub type DeviceResult<T> = Result<T, RenderError>;

/// Backend contract for GPU work
///
/// Uniform and texture setters return `false` when the bound shader does
/// not declare the named uniform; different shaders legitimately expose
/// different uniform subsets, so a miss is skipped rather than treated as
/// an error.
pub trait RenderDevice {
    /// Compile and link a shader program from vertex/fragment sources
    ///
    /// Compilation errors are reported through the `Err` variant and must
    /// not produce a usable handle.
    fn compile_shader(&mut self, vertex_src: &str, fragment_src: &str)
        -> DeviceResult<ShaderHandle>;

    /// Bind a shader program, or unbind with `None`
    fn bind_shader(&mut self, shader: Option<ShaderHandle>);

    /// Upload a value to a named uniform of the bound shader
    fn set_uniform(&mut self, name: &str, value: UniformValue) -> bool;

    /// Bind a 2D texture to a sampler uniform on the given texture unit
    fn set_texture_2d(&mut self, name: &str, texture: TextureHandle, unit: u32) -> bool;

    /// Bind a cube-map texture to a sampler uniform on the given texture unit
    fn set_texture_cube(&mut self, name: &str, texture: TextureHandle, unit: u32) -> bool;

    /// Bulk-upload the light array (and its count) to the bound shader
    ///
    /// Replaces per-light named-uniform writes; the binding is resolved
    /// once per shader, not rebuilt from strings every frame.
    fn set_light_array(&mut self, lights: &[PackedLight]) -> bool;

    /// Create GPU vertex/index buffers for a geometry
    fn create_geometry_buffers(
        &mut self,
        vertices: &[Vertex],
        indices: &[u32],
    ) -> DeviceResult<BufferHandle>;

    /// Draw an indexed geometry with the current pipeline state
    fn draw(&mut self, buffers: BufferHandle, index_count: u32);

    /// Resize the default render target
    fn set_viewport(&mut self, width: u32, height: u32);

    /// Bind the default render target for subsequent operations
    fn bind_default_target(&mut self);

    /// Clear the bound render target
    fn clear(&mut self, color: Vec4, flags: ClearFlags);

    /// Enable or disable depth-buffer writes
    fn set_depth_write(&mut self, enabled: bool);

    /// Select which faces are culled
    fn set_cull_face(&mut self, mode: CullFace);

    /// Downcast access to the concrete device type
    ///
    /// Lets tests and tooling reach backend-specific state (for example
    /// the headless device's recorded statistics).
    fn as_any(&self) -> &dyn std::any::Any;
}
