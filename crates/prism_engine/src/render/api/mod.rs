//! Backend abstraction for the rendering system

pub mod device;

pub use device::{
    BufferHandle, ClearFlags, CullFace, DeviceResult, PackedLight, RenderDevice, ShaderHandle,
    TextureHandle, UniformValue,
};
