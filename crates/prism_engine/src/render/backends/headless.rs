//! Headless render device
//!
//! A [`RenderDevice`] implementation with no GPU behind it. It validates
//! and records everything the renderer asks for: compiled shaders (with
//! their declared uniform names scanned out of the source text), buffer
//! creation, bindings, uniform writes, draws, and pipeline state.
//!
//! This is what tests and CI drive the full frame loop against, and what
//! the sandbox app uses to run scenes without a window. Uniform-miss
//! semantics mirror a GL-style backend: writing a name the bound shader
//! does not declare is skipped and counted, not an error.

use crate::foundation::math::Vec4;
use crate::render::api::{
    BufferHandle, ClearFlags, CullFace, DeviceResult, PackedLight, RenderDevice, ShaderHandle,
    TextureHandle, UniformValue,
};
use crate::render::error::RenderError;
use crate::render::geometry::Vertex;
use crate::render::uniforms;
use std::collections::HashSet;

/// Counters accumulated across device calls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceStats {
    /// Shader binds (excluding unbinds)
    pub shader_binds: usize,
    /// Successful uniform writes
    pub uniform_writes: usize,
    /// Uniform writes skipped because the shader lacks the name
    pub uniform_misses: usize,
    /// Texture bindings (2D and cube)
    pub texture_binds: usize,
    /// Bulk light-array uploads
    pub light_uploads: usize,
    /// Draw calls issued
    pub draw_calls: usize,
    /// Clear operations
    pub clears: usize,
}

#[derive(Debug)]
struct ShaderRecord {
    declared_uniforms: HashSet<String>,
}

#[derive(Debug, Clone, Copy)]
struct BufferRecord {
    vertex_count: usize,
    index_count: usize,
}

/// Recording device for headless rendering and tests
#[derive(Debug, Default)]
pub struct HeadlessDevice {
    shaders: Vec<ShaderRecord>,
    buffers: Vec<BufferRecord>,
    bound_shader: Option<ShaderHandle>,
    viewport: (u32, u32),
    depth_write: bool,
    cull_face_front: bool,
    default_target_bound: bool,
    last_clear_color: Option<Vec4>,
    last_lights: Vec<PackedLight>,
    uniform_log: Vec<String>,
    stats: DeviceStats,
}

impl HeadlessDevice {
    /// Create an empty headless device
    pub fn new() -> Self {
        Self {
            depth_write: true,
            ..Self::default()
        }
    }

    /// Accumulated call counters
    pub fn stats(&self) -> &DeviceStats {
        &self.stats
    }

    /// Reset counters and the uniform log (shaders and buffers survive)
    pub fn reset_stats(&mut self) {
        self.stats = DeviceStats::default();
        self.uniform_log.clear();
    }

    /// Names of every uniform successfully written, in call order
    pub fn uniform_log(&self) -> &[String] {
        &self.uniform_log
    }

    /// The most recent light array upload
    pub fn last_lights(&self) -> &[PackedLight] {
        &self.last_lights
    }

    /// Currently bound shader
    pub fn bound_shader(&self) -> Option<ShaderHandle> {
        self.bound_shader
    }

    /// Whether depth writes are currently enabled
    pub fn depth_write_enabled(&self) -> bool {
        self.depth_write
    }

    /// Whether front faces are currently culled
    pub fn culling_front_faces(&self) -> bool {
        self.cull_face_front
    }

    /// Whether the default render target has been bound
    pub fn default_target_bound(&self) -> bool {
        self.default_target_bound
    }

    /// Vertex and index counts of a created buffer
    pub fn buffer_info(&self, buffers: BufferHandle) -> Option<(usize, usize)> {
        let slot = (buffers.0 as usize).checked_sub(1)?;
        self.buffers
            .get(slot)
            .map(|record| (record.vertex_count, record.index_count))
    }

    /// Current viewport dimensions
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Color used by the most recent clear
    pub fn last_clear_color(&self) -> Option<Vec4> {
        self.last_clear_color
    }

    fn record(&self, shader: ShaderHandle) -> Option<&ShaderRecord> {
        let slot = (shader.0 as usize).checked_sub(1)?;
        self.shaders.get(slot)
    }

    /// True when the bound shader declares `name`
    fn bound_shader_declares(&self, name: &str) -> bool {
        self.bound_shader
            .and_then(|shader| self.record(shader))
            .is_some_and(|record| record.declared_uniforms.contains(name))
    }

    /// Pull declared uniform names out of GLSL-style source text
    ///
    /// Good enough for a mock: any `uniform <type> <name>;` style
    /// declaration is recognized, with array suffixes stripped so
    /// `uniform Light lights[8];` declares `lights`.
    fn scan_uniforms(source: &str, out: &mut HashSet<String>) {
        for statement in source.split(';') {
            let tokens: Vec<&str> = statement.split_whitespace().collect();
            if !tokens.contains(&"uniform") {
                continue;
            }
            if let Some(last) = tokens.last() {
                let name = last.split('[').next().unwrap_or(last);
                if !name.is_empty() {
                    out.insert(name.to_string());
                }
            }
        }
    }
}

impl RenderDevice for HeadlessDevice {
    fn compile_shader(
        &mut self,
        vertex_src: &str,
        fragment_src: &str,
    ) -> DeviceResult<ShaderHandle> {
        if vertex_src.trim().is_empty() {
            return Err(RenderError::ShaderCompile(
                "vertex shader source is empty".to_string(),
            ));
        }
        if fragment_src.trim().is_empty() {
            return Err(RenderError::ShaderCompile(
                "fragment shader source is empty".to_string(),
            ));
        }

        let mut declared_uniforms = HashSet::new();
        Self::scan_uniforms(vertex_src, &mut declared_uniforms);
        Self::scan_uniforms(fragment_src, &mut declared_uniforms);

        self.shaders.push(ShaderRecord { declared_uniforms });
        let handle = ShaderHandle(self.shaders.len() as u32);
        log::debug!("compiled shader {:?}", handle);
        Ok(handle)
    }

    fn bind_shader(&mut self, shader: Option<ShaderHandle>) {
        if shader.is_some() {
            self.stats.shader_binds += 1;
        }
        self.bound_shader = shader;
    }

    fn set_uniform(&mut self, name: &str, _value: UniformValue) -> bool {
        if self.bound_shader_declares(name) {
            self.stats.uniform_writes += 1;
            self.uniform_log.push(name.to_string());
            true
        } else {
            self.stats.uniform_misses += 1;
            false
        }
    }

    fn set_texture_2d(&mut self, name: &str, _texture: TextureHandle, _unit: u32) -> bool {
        if self.bound_shader_declares(name) {
            self.stats.texture_binds += 1;
            true
        } else {
            self.stats.uniform_misses += 1;
            false
        }
    }

    fn set_texture_cube(&mut self, name: &str, _texture: TextureHandle, _unit: u32) -> bool {
        if self.bound_shader_declares(name) {
            self.stats.texture_binds += 1;
            true
        } else {
            self.stats.uniform_misses += 1;
            false
        }
    }

    fn set_light_array(&mut self, lights: &[PackedLight]) -> bool {
        if self.bound_shader_declares(uniforms::LIGHT_ARRAY) {
            self.stats.light_uploads += 1;
            self.last_lights = lights.to_vec();
            true
        } else {
            self.stats.uniform_misses += 1;
            false
        }
    }

    fn create_geometry_buffers(
        &mut self,
        vertices: &[Vertex],
        indices: &[u32],
    ) -> DeviceResult<BufferHandle> {
        self.buffers.push(BufferRecord {
            vertex_count: vertices.len(),
            index_count: indices.len(),
        });
        let handle = BufferHandle(self.buffers.len() as u32);
        log::debug!(
            "created buffers {:?}: {} vertices ({} bytes), {} indices",
            handle,
            vertices.len(),
            std::mem::size_of_val(vertices),
            indices.len()
        );
        Ok(handle)
    }

    fn draw(&mut self, buffers: BufferHandle, index_count: u32) {
        let known = (buffers.0 as usize)
            .checked_sub(1)
            .and_then(|slot| self.buffers.get(slot))
            .map_or(0, |record| record.index_count);
        if index_count as usize > known {
            log::error!(
                "draw of {:?} requests {} indices but the buffer holds {}",
                buffers,
                index_count,
                known
            );
            return;
        }
        self.stats.draw_calls += 1;
    }

    fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    fn bind_default_target(&mut self) {
        self.default_target_bound = true;
    }

    fn clear(&mut self, color: Vec4, _flags: ClearFlags) {
        self.stats.clears += 1;
        self.last_clear_color = Some(color);
    }

    fn set_depth_write(&mut self, enabled: bool) {
        self.depth_write = enabled;
    }

    fn set_cull_face(&mut self, mode: CullFace) {
        self.cull_face_front = mode == CullFace::Front;
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
