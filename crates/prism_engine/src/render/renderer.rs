//! Frame renderer
//!
//! Owns the geometry store, the material table, the environment
//! configuration, and the bound-state cache, and drives the per-frame
//! sequence against a [`RenderDevice`]:
//!
//! 1. skip the frame (with a log message) when no camera exists;
//! 2. bind and clear the default target at the current viewport;
//! 3. reset the bound shader/material so the first item binds fresh;
//! 4. refresh every camera's derived matrices;
//! 5. walk the draw items in sorted order: bind shader/material only when
//!    they differ from the previous item, compute model/MVP/normal
//!    matrices, frustum-cull, upload per-draw uniforms, draw;
//! 6. render the environment cube, if fully configured.
//!
//! Step 5's cheap "different from last" comparisons are only sound
//! because [`sort_draw_order`](Renderer::sort_draw_order) grouped items by
//! shader then material beforehand; that is the entire payoff of the sort.

use crate::assets::obj_loader;
use crate::config::RendererConfig;
use crate::foundation::math::{Mat4, Mat4Ext, Vec4};
use crate::render::api::{
    ClearFlags, CullFace, PackedLight, RenderDevice, ShaderHandle, TextureHandle, UniformValue,
};
use crate::render::culling::aabb_in_frustum;
use crate::render::error::RenderError;
use crate::render::geometry::{Geometry, MeshData};
use crate::render::lighting::pack_lights;
use crate::render::material::Material;
use crate::render::{sorting, uniforms};
use crate::scene::{CameraComponent, MeshComponent, Scene, TransformComponent};
use std::path::{Path, PathBuf};

/// Environment (sky) pass configuration
///
/// All three pieces must be present for the pass to run; anything less
/// makes it a no-op.
#[derive(Debug, Clone, Copy, Default)]
struct Environment {
    cube_texture: Option<TextureHandle>,
    cube_geometry: Option<usize>,
    shader: Option<ShaderHandle>,
}

/// The rendering core: resource tables plus the per-frame draw loop
pub struct Renderer {
    device: Box<dyn RenderDevice>,
    geometries: Vec<Geometry>,
    materials: Vec<Material>,
    environment: Environment,
    background_color: Vec4,
    viewport: (u32, u32),
    max_lights: usize,
    assets_folder: PathBuf,
    bound_shader: Option<ShaderHandle>,
    bound_material: Option<usize>,
    light_scratch: Vec<PackedLight>,
}

impl Renderer {
    /// Create a renderer over a device, applying the given configuration
    pub fn new(mut device: Box<dyn RenderDevice>, config: &RendererConfig) -> Self {
        device.set_viewport(config.viewport_width, config.viewport_height);
        Self {
            device,
            geometries: Vec::new(),
            materials: Vec::new(),
            environment: Environment::default(),
            background_color: Vec4::from(config.background_color),
            viewport: (config.viewport_width, config.viewport_height),
            max_lights: config.max_lights,
            assets_folder: PathBuf::from(&config.assets_folder),
            bound_shader: None,
            bound_material: None,
            light_scratch: Vec::new(),
        }
    }

    /// The underlying device (mainly for backend-specific inspection)
    pub fn device(&self) -> &dyn RenderDevice {
        self.device.as_ref()
    }

    /// Update the render target dimensions
    ///
    /// The host must call this whenever the window resizes, before the
    /// next frame; camera aspect ratios follow the viewport automatically.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        self.device.set_viewport(width, height);
    }

    /// Current render target dimensions
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Set the clear color used at the start of each frame
    pub fn set_background_color(&mut self, color: Vec4) {
        self.background_color = color;
    }

    /// Configure the environment (sky) pass
    ///
    /// The pass only runs when texture, geometry, and shader are all set.
    pub fn set_environment(
        &mut self,
        cube_texture: Option<TextureHandle>,
        cube_geometry: Option<usize>,
        shader: Option<ShaderHandle>,
    ) {
        self.environment = Environment {
            cube_texture,
            cube_geometry,
            shader,
        };
    }

    /// Compile a shader program from source strings
    pub fn load_shader_source(
        &mut self,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<ShaderHandle, RenderError> {
        self.device.compile_shader(vertex_src, fragment_src)
    }

    /// Compile a shader program from a pair of source files
    pub fn load_shader_files<P: AsRef<Path>>(
        &mut self,
        vertex_path: P,
        fragment_path: P,
    ) -> Result<ShaderHandle, RenderError> {
        let vertex_src = std::fs::read_to_string(vertex_path)?;
        let fragment_src = std::fs::read_to_string(fragment_path)?;
        self.load_shader_source(&vertex_src, &fragment_src)
    }

    /// Create a geometry from raw mesh data, returning its store index
    ///
    /// Computes the local-space bounding box from the vertex positions and
    /// uploads interleaved buffers through the device.
    pub fn create_geometry(&mut self, data: &MeshData) -> Result<usize, RenderError> {
        let aabb = data.compute_aabb()?;
        let vertices = data.interleave();
        let buffers = self.device.create_geometry_buffers(&vertices, &data.indices)?;
        let index = self.geometries.len();
        self.geometries.push(Geometry {
            buffers,
            index_count: data.indices.len() as u32,
            aabb,
        });
        log::debug!(
            "created geometry {index} ({} vertices, {} indices)",
            vertices.len(),
            data.indices.len()
        );
        Ok(index)
    }

    /// Create a geometry from a mesh file
    ///
    /// Relative paths are resolved against the configured assets folder.
    /// Only `.obj` is supported. Failure is local and recoverable: the
    /// error is logged and returned, and the caller decides whether scene
    /// construction continues.
    pub fn create_geometry_from_file<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> Result<usize, RenderError> {
        let path = path.as_ref();
        let resolved;
        let path = if path.is_relative() {
            resolved = self.assets_folder.join(path);
            resolved.as_path()
        } else {
            path
        };
        let supported = path
            .extension()
            .and_then(std::ffi::OsStr::to_str)
            .is_some_and(|ext| ext.eq_ignore_ascii_case("obj"));
        if !supported {
            log::error!(
                "unsupported mesh format when creating geometry: {}",
                path.display()
            );
            return Err(RenderError::UnsupportedMeshFormat(
                path.display().to_string(),
            ));
        }

        let data = obj_loader::parse_obj(path).map_err(|err| {
            log::error!("could not parse mesh file {}: {err}", path.display());
            err
        })?;
        self.create_geometry(&data)
    }

    /// Append a default-initialized material, returning its table index
    ///
    /// Never fails; parameters and the shader reference are assigned
    /// through [`material_mut`](Self::material_mut).
    pub fn create_material(&mut self) -> usize {
        self.materials.push(Material::default());
        self.materials.len() - 1
    }

    /// Material by table index
    pub fn material(&self, index: usize) -> Option<&Material> {
        self.materials.get(index)
    }

    /// Mutable material by table index
    pub fn material_mut(&mut self, index: usize) -> Option<&mut Material> {
        self.materials.get_mut(index)
    }

    /// The full material table, in current draw order
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Geometry by store index
    pub fn geometry(&self, index: usize) -> Option<&Geometry> {
        self.geometries.get(index)
    }

    /// Sort materials by shader and draw items by material, repairing all
    /// entity references
    ///
    /// Must complete before the first frame; see [`sorting::sort_draw_order`].
    /// Runs as one atomic reordering; an error means the scene is
    /// corrupted and must not be rendered.
    pub fn sort_draw_order(&mut self, scene: &mut Scene) -> Result<(), RenderError> {
        sorting::sort_draw_order(&mut self.materials, scene)?;
        // Indices changed meaning; never let a stale bound-material index
        // suppress the next upload.
        self.bound_material = None;
        Ok(())
    }

    /// Render one frame of the scene
    pub fn render_frame(&mut self, scene: &mut Scene) {
        if scene.all::<CameraComponent>().is_empty() {
            log::warn!("no camera in scene, skipping frame");
            return;
        }

        self.device.bind_default_target();
        self.device.set_viewport(self.viewport.0, self.viewport.1);
        self.device
            .clear(self.background_color, ClearFlags::COLOR | ClearFlags::DEPTH);

        // Unbind everything from the previous frame so the first draw item
        // always performs a fresh bind.
        self.device.bind_shader(None);
        self.bound_shader = None;
        self.bound_material = None;

        let aspect = self.aspect_ratio();
        for camera in scene.all_mut::<CameraComponent>().iter_mut() {
            camera.update(aspect);
        }

        let Some(camera_index) = scene.main_camera_index() else {
            log::warn!("cameras exist but none is designated main, skipping frame");
            return;
        };

        for index in 0..scene.all::<MeshComponent>().len() {
            let item = scene.all::<MeshComponent>()[index];
            self.render_draw_item(scene, camera_index, &item);
        }

        self.render_environment(scene, camera_index);
    }

    /// Draw one item: state binding, matrices, culling, submission
    fn render_draw_item(&mut self, scene: &Scene, camera_index: usize, item: &MeshComponent) {
        // Bind state first. Items arrive grouped by shader then material,
        // so these are cheap comparisons against the previous item.
        let Some(material) = self.materials.get(item.material) else {
            log::error!("draw item references missing material {}", item.material);
            return;
        };
        let Some(shader) = material.shader else {
            log::debug!(
                "material {} has no shader assigned, skipping draw item",
                item.material
            );
            return;
        };

        if self.bound_shader != Some(shader) {
            self.device.bind_shader(Some(shader));
            self.bound_shader = Some(shader);
        }
        if self.bound_material != Some(item.material) {
            self.bound_material = Some(item.material);
            self.upload_material_uniforms(scene, item.material);
        }

        let Some(transform) = scene.get::<TransformComponent>(item.owner) else {
            log::error!("draw item owner {} has no transform", item.owner);
            return;
        };
        let model = transform.global_matrix(scene.all::<TransformComponent>());
        let camera = &scene.all::<CameraComponent>()[camera_index];
        let mvp = camera.view_projection * model;

        let Some(geometry) = self.geometries.get(item.geometry).copied() else {
            log::error!("draw item references missing geometry {}", item.geometry);
            return;
        };

        // View frustum culling against the local bounds in clip space.
        if !aabb_in_frustum(&geometry.aabb, &mvp) {
            return;
        }

        let normal_matrix = model
            .try_inverse()
            .map_or_else(Mat4::identity, |inverse| inverse.transpose());
        let camera_position = camera.position;

        self.device.set_uniform(uniforms::MVP, UniformValue::Mat4(mvp));
        self.device
            .set_uniform(uniforms::MODEL, UniformValue::Mat4(model));
        self.device
            .set_uniform(uniforms::NORMAL_MATRIX, UniformValue::Mat4(normal_matrix));
        self.device
            .set_uniform(uniforms::CAMERA_POSITION, UniformValue::Vec3(camera_position));

        self.device.draw(geometry.buffers, geometry.index_count);
    }

    /// Upload the uniforms of one material, plus the scene light array
    fn upload_material_uniforms(&mut self, scene: &Scene, material_index: usize) {
        let Some(material) = self.materials.get(material_index).cloned() else {
            return;
        };

        self.device
            .set_uniform(uniforms::AMBIENT, UniformValue::Vec3(material.ambient));
        self.device
            .set_uniform(uniforms::DIFFUSE, UniformValue::Vec3(material.diffuse));
        self.device
            .set_uniform(uniforms::SPECULAR, UniformValue::Vec3(material.specular));
        self.device.set_uniform(
            uniforms::SPECULAR_GLOSS,
            UniformValue::Float(material.specular_gloss),
        );

        if let Some(texture) = material.diffuse_map {
            self.device
                .set_uniform(uniforms::USE_DIFFUSE_MAP, UniformValue::Int(1));
            self.device.set_texture_2d(uniforms::DIFFUSE_MAP, texture, 0);
        }
        if let Some(texture) = material.cube_map {
            self.device
                .set_uniform(uniforms::USE_REFLECTION_MAP, UniformValue::Int(1));
            self.device.set_texture_cube(uniforms::SKYBOX, texture, 1);
        }

        let mut lights = std::mem::take(&mut self.light_scratch);
        pack_lights(scene, &mut lights, self.max_lights);
        self.device
            .set_uniform(uniforms::LIGHT_COUNT, UniformValue::Int(lights.len() as i32));
        self.device.set_light_array(&lights);
        self.light_scratch = lights;
    }

    /// Render the environment cube behind everything else
    fn render_environment(&mut self, scene: &Scene, camera_index: usize) {
        let environment = self.environment;
        let (Some(texture), Some(geometry_index), Some(shader)) = (
            environment.cube_texture,
            environment.cube_geometry,
            environment.shader,
        ) else {
            log::trace!("environment not fully configured, skipping pass");
            return;
        };
        let Some(geometry) = self.geometries.get(geometry_index).copied() else {
            log::error!("environment references missing geometry {geometry_index}");
            return;
        };

        self.device.bind_shader(Some(shader));
        self.bound_shader = Some(shader);
        self.bound_material = None;

        // Zero the view translation so the cube appears infinitely distant.
        let camera = &scene.all::<CameraComponent>()[camera_index];
        let view_projection = camera.projection_matrix * camera.view_matrix.without_translation();
        self.device
            .set_uniform(uniforms::VIEW_PROJECTION, UniformValue::Mat4(view_projection));
        self.device.set_texture_cube(uniforms::SKYBOX, texture, 0);

        // Draw the inside of the cube without touching depth, then restore.
        self.device.set_depth_write(false);
        self.device.set_cull_face(CullFace::Front);
        self.device.draw(geometry.buffers, geometry.index_count);
        self.device.set_depth_write(true);
        self.device.set_cull_face(CullFace::Back);
    }

    fn aspect_ratio(&self) -> f32 {
        let (width, height) = self.viewport;
        width.max(1) as f32 / height.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::render::backends::headless::{DeviceStats, HeadlessDevice};
    use crate::scene::LightComponent;

    const VS: &str = "\
uniform mat4 u_mvp;
uniform mat4 u_model;
uniform mat4 u_normal_matrix;
uniform mat4 u_vp;
void main() {}
";
    const FS: &str = "\
uniform vec3 u_ambient;
uniform vec3 u_diffuse;
uniform vec3 u_specular;
uniform float u_specular_gloss;
uniform vec3 u_cam_pos;
uniform int u_num_lights;
uniform Light lights[8];
uniform samplerCube u_skybox;
void main() {}
";

    fn renderer() -> Renderer {
        Renderer::new(
            Box::new(HeadlessDevice::new()),
            &RendererConfig::default(),
        )
    }

    fn stats(renderer: &Renderer) -> DeviceStats {
        renderer
            .device()
            .as_any()
            .downcast_ref::<HeadlessDevice>()
            .unwrap()
            .stats()
            .clone()
    }

    fn uniform_writes_of(renderer: &Renderer, name: &str) -> usize {
        renderer
            .device()
            .as_any()
            .downcast_ref::<HeadlessDevice>()
            .unwrap()
            .uniform_log()
            .iter()
            .filter(|written| written.as_str() == name)
            .count()
    }

    /// Camera at +Z looking at the origin, matching the demo scene
    fn add_camera(scene: &mut Scene) {
        let entity = scene.create_entity("camera");
        let mut camera = CameraComponent::default();
        camera.position = Vec3::new(0.0, 0.0, 15.0);
        camera.forward = Vec3::new(0.0, 0.0, -1.0);
        scene.attach(entity, camera);
    }

    /// One draw item at `position` using `geometry` and `material`
    fn add_item(scene: &mut Scene, geometry: usize, material: usize, position: Vec3) {
        let entity = scene.create_entity("item");
        scene
            .get_mut::<TransformComponent>(entity)
            .unwrap()
            .position = position;
        scene.attach(entity, MeshComponent::new(geometry, material));
    }

    fn lit_material(renderer: &mut Renderer, shader: ShaderHandle) -> usize {
        let material = renderer.create_material();
        renderer.material_mut(material).unwrap().shader = Some(shader);
        material
    }

    #[test]
    fn test_zero_cameras_skips_frame_entirely() {
        let mut renderer = renderer();
        let shader = renderer.load_shader_source(VS, FS).unwrap();
        let geometry = renderer.create_geometry(&MeshData::cube(1.0)).unwrap();
        let material = lit_material(&mut renderer, shader);

        let mut scene = Scene::new();
        add_item(&mut scene, geometry, material, Vec3::zeros());
        renderer.sort_draw_order(&mut scene).unwrap();

        renderer.render_frame(&mut scene);

        let stats = stats(&renderer);
        assert_eq!(stats.clears, 0);
        assert_eq!(stats.draw_calls, 0);
        assert_eq!(stats.shader_binds, 0);
        assert_eq!(stats.uniform_writes, 0);
    }

    #[test]
    fn test_frame_clears_and_draws_visible_item() {
        let mut renderer = renderer();
        let shader = renderer.load_shader_source(VS, FS).unwrap();
        let geometry = renderer.create_geometry(&MeshData::cube(1.0)).unwrap();
        let material = lit_material(&mut renderer, shader);

        let mut scene = Scene::new();
        add_camera(&mut scene);
        add_item(&mut scene, geometry, material, Vec3::zeros());
        renderer.sort_draw_order(&mut scene).unwrap();

        renderer.render_frame(&mut scene);

        let stats = stats(&renderer);
        assert_eq!(stats.clears, 1);
        assert_eq!(stats.draw_calls, 1);
        assert_eq!(stats.shader_binds, 1);
        assert_eq!(uniform_writes_of(&renderer, uniforms::MVP), 1);
    }

    #[test]
    fn test_out_of_frustum_item_is_culled_after_binding() {
        let mut renderer = renderer();
        let shader = renderer.load_shader_source(VS, FS).unwrap();
        let geometry = renderer.create_geometry(&MeshData::cube(1.0)).unwrap();
        let material = lit_material(&mut renderer, shader);

        let mut scene = Scene::new();
        add_camera(&mut scene);
        // Far beyond the right frustum plane.
        add_item(&mut scene, geometry, material, Vec3::new(10_000.0, 0.0, 0.0));
        renderer.sort_draw_order(&mut scene).unwrap();

        renderer.render_frame(&mut scene);

        let stats = stats(&renderer);
        // Shader and material bind before the cull; the draw is skipped.
        assert_eq!(stats.shader_binds, 1);
        assert_eq!(stats.draw_calls, 0);
        assert_eq!(uniform_writes_of(&renderer, uniforms::MVP), 0);
    }

    #[test]
    fn test_shared_state_binds_once_across_items() {
        let mut renderer = renderer();
        let shader = renderer.load_shader_source(VS, FS).unwrap();
        let geometry = renderer.create_geometry(&MeshData::cube(1.0)).unwrap();
        let material = lit_material(&mut renderer, shader);

        let mut scene = Scene::new();
        add_camera(&mut scene);
        add_item(&mut scene, geometry, material, Vec3::new(-2.0, 0.0, 0.0));
        add_item(&mut scene, geometry, material, Vec3::new(2.0, 0.0, 0.0));
        renderer.sort_draw_order(&mut scene).unwrap();

        renderer.render_frame(&mut scene);

        let stats = stats(&renderer);
        assert_eq!(stats.draw_calls, 2);
        // One shader bind and one material upload cover both items.
        assert_eq!(stats.shader_binds, 1);
        assert_eq!(uniform_writes_of(&renderer, uniforms::AMBIENT), 1);
        assert_eq!(uniform_writes_of(&renderer, uniforms::MVP), 2);
    }

    #[test]
    fn test_distinct_materials_rebind_between_items() {
        let mut renderer = renderer();
        let shader_a = renderer.load_shader_source(VS, FS).unwrap();
        let shader_b = renderer.load_shader_source(VS, FS).unwrap();
        let geometry = renderer.create_geometry(&MeshData::cube(1.0)).unwrap();
        let material_a = lit_material(&mut renderer, shader_a);
        let material_b = lit_material(&mut renderer, shader_b);

        let mut scene = Scene::new();
        add_camera(&mut scene);
        add_item(&mut scene, geometry, material_a, Vec3::new(-2.0, 0.0, 0.0));
        add_item(&mut scene, geometry, material_b, Vec3::new(2.0, 0.0, 0.0));
        renderer.sort_draw_order(&mut scene).unwrap();

        renderer.render_frame(&mut scene);

        let stats = stats(&renderer);
        assert_eq!(stats.draw_calls, 2);
        assert_eq!(stats.shader_binds, 2);
        assert_eq!(uniform_writes_of(&renderer, uniforms::AMBIENT), 2);
    }

    #[test]
    fn test_environment_pass_requires_full_configuration() {
        let mut renderer = renderer();
        let cube = renderer.create_geometry(&MeshData::cube(1.0)).unwrap();

        let mut scene = Scene::new();
        add_camera(&mut scene);

        // Texture and geometry present, shader unset: the pass must not
        // touch any device state.
        renderer.set_environment(Some(TextureHandle(7)), Some(cube), None);
        renderer.render_frame(&mut scene);

        let stats = stats(&renderer);
        assert_eq!(stats.draw_calls, 0);
        assert_eq!(stats.texture_binds, 0);
        assert_eq!(stats.shader_binds, 0);
    }

    #[test]
    fn test_environment_pass_draws_and_restores_state() {
        let mut renderer = renderer();
        let sky_shader = renderer
            .load_shader_source(VS, "uniform samplerCube u_skybox;\nvoid main() {}")
            .unwrap();
        let cube = renderer.create_geometry(&MeshData::cube(1.0)).unwrap();

        let mut scene = Scene::new();
        add_camera(&mut scene);

        renderer.set_environment(Some(TextureHandle(7)), Some(cube), Some(sky_shader));
        renderer.render_frame(&mut scene);

        let stats = stats(&renderer);
        assert_eq!(stats.draw_calls, 1);
        assert_eq!(stats.texture_binds, 1);
        assert_eq!(uniform_writes_of(&renderer, uniforms::VIEW_PROJECTION), 1);

        let device = renderer
            .device()
            .as_any()
            .downcast_ref::<HeadlessDevice>()
            .unwrap();
        assert!(device.depth_write_enabled());
        assert!(!device.culling_front_faces());
        assert!(device.default_target_bound());
    }

    #[test]
    fn test_lights_are_uploaded_with_material() {
        let mut renderer = renderer();
        let shader = renderer.load_shader_source(VS, FS).unwrap();
        let geometry = renderer.create_geometry(&MeshData::cube(1.0)).unwrap();
        let material = lit_material(&mut renderer, shader);

        let mut scene = Scene::new();
        add_camera(&mut scene);
        let lamp = scene.create_entity("lamp");
        scene
            .get_mut::<TransformComponent>(lamp)
            .unwrap()
            .translate(-10.0, 3.0, -10.0);
        scene.attach(lamp, LightComponent::point(Vec3::new(1.0, 0.0, 0.0), 0.022, 0.0019));
        let sun = scene.create_entity("sun");
        scene.attach(
            sun,
            LightComponent::directional(Vec3::new(1.0, 1.0, 1.0), Vec3::new(-1.0, -1.0, -1.0)),
        );
        add_item(&mut scene, geometry, material, Vec3::zeros());
        renderer.sort_draw_order(&mut scene).unwrap();

        renderer.render_frame(&mut scene);

        let device = renderer
            .device()
            .as_any()
            .downcast_ref::<HeadlessDevice>()
            .unwrap();
        assert_eq!(device.stats().light_uploads, 1);
        assert_eq!(device.last_lights().len(), 2);
        assert_eq!(device.last_lights()[0].position, [-10.0, 3.0, -10.0]);
        assert_eq!(uniform_writes_of(&renderer, uniforms::LIGHT_COUNT), 1);
    }

    #[test]
    fn test_geometry_from_obj_resolves_against_assets_folder() {
        let assets_folder = std::env::temp_dir().join(format!("prism_assets_{}", std::process::id()));
        std::fs::create_dir_all(&assets_folder).unwrap();
        std::fs::write(
            assets_folder.join("tri.obj"),
            "v 0 0 0\nv 2 0 0\nv 0 2 0\nf 1 2 3\n",
        )
        .unwrap();

        let config = RendererConfig {
            assets_folder: assets_folder.to_string_lossy().into_owned(),
            ..RendererConfig::default()
        };
        let mut renderer = Renderer::new(Box::new(HeadlessDevice::new()), &config);

        let geometry = renderer.create_geometry_from_file("tri.obj").unwrap();
        let aabb = renderer.geometry(geometry).unwrap().aabb;
        assert_eq!(aabb.center, Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(renderer.geometry(geometry).unwrap().index_count, 3);

        let missing = renderer.create_geometry_from_file("no_such.obj");
        assert!(matches!(missing, Err(RenderError::MeshParse(_) | RenderError::Io(_))));
    }

    #[test]
    fn test_unsupported_mesh_extension_is_rejected() {
        let mut renderer = renderer();
        let result = renderer.create_geometry_from_file("data/assets/teapot.fbx");
        assert!(matches!(
            result,
            Err(RenderError::UnsupportedMeshFormat(_))
        ));
        // The failure is local: the renderer still works afterwards.
        assert!(renderer.create_geometry(&MeshData::cube(1.0)).is_ok());
    }

    #[test]
    fn test_unassigned_material_shader_skips_item() {
        let mut renderer = renderer();
        let geometry = renderer.create_geometry(&MeshData::cube(1.0)).unwrap();
        let material = renderer.create_material();

        let mut scene = Scene::new();
        add_camera(&mut scene);
        add_item(&mut scene, geometry, material, Vec3::zeros());
        renderer.sort_draw_order(&mut scene).unwrap();

        renderer.render_frame(&mut scene);

        let stats = stats(&renderer);
        assert_eq!(stats.draw_calls, 0);
        assert_eq!(stats.shader_binds, 0);
    }
}
