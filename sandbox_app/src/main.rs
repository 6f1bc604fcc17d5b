//! Headless demo scene for the prism_engine rendering core
//!
//! Builds a small scene (free camera, floor, a crate, three lights, and an
//! environment cube), sorts draw order once, then renders a few frames
//! against the recording device and reports what the renderer did.

use prism_engine::prelude::*;

const PHONG_VS: &str = "\
uniform mat4 u_mvp;
uniform mat4 u_model;
uniform mat4 u_normal_matrix;
void main() {}
";

const PHONG_FS: &str = "\
uniform vec3 u_ambient;
uniform vec3 u_diffuse;
uniform vec3 u_specular;
uniform float u_specular_gloss;
uniform vec3 u_cam_pos;
uniform int u_num_lights;
uniform Light lights[8];
uniform int u_use_diffuse_map;
uniform sampler2D u_diffuse_map;
void main() {}
";

const SKY_VS: &str = "\
uniform mat4 u_vp;
void main() {}
";

const SKY_FS: &str = "\
uniform samplerCube u_skybox;
void main() {}
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = RendererConfig::default();
    let mut renderer = Renderer::new(Box::new(HeadlessDevice::new()), &config);
    let mut scene = Scene::new();

    build_scene(&mut renderer, &mut scene)?;

    // Group draw items by shader and material before the first frame.
    renderer.sort_draw_order(&mut scene)?;

    let mut timer = Timer::new();
    for frame in 0..5 {
        renderer.render_frame(&mut scene);
        log::info!("frame {frame} took {:.3} ms", timer.tick() * 1000.0);
    }

    let device = renderer
        .device()
        .as_any()
        .downcast_ref::<HeadlessDevice>()
        .expect("renderer was built over the headless device");
    let stats = device.stats();
    log::info!(
        "5 frames: {} draws, {} shader binds, {} uniform writes ({} misses), {} light uploads",
        stats.draw_calls,
        stats.shader_binds,
        stats.uniform_writes,
        stats.uniform_misses,
        stats.light_uploads
    );

    Ok(())
}

/// The demo scene: one free camera, a floor and a crate on distinct
/// shaders, three lights, and an environment cube
fn build_scene(
    renderer: &mut Renderer,
    scene: &mut Scene,
) -> Result<(), Box<dyn std::error::Error>> {
    // Free camera looking slightly down into the scene.
    let camera_entity = scene.create_entity("player");
    let mut camera = CameraComponent::default();
    camera.position = Vec3::new(0.0, 5.0, 15.0);
    camera.forward = Vec3::new(0.0, -0.3, -1.0);
    camera.set_perspective(60.0_f32.to_radians(), 800.0 / 600.0, 0.1, 10_000.0);
    scene
        .get_mut::<TransformComponent>(camera_entity)
        .expect("entities always carry a transform")
        .position = camera.position;
    scene.attach(camera_entity, camera);

    let phong_shader = renderer.load_shader_source(PHONG_VS, PHONG_FS)?;
    let sky_shader = renderer.load_shader_source(SKY_VS, SKY_FS)?;

    // Floor: a 40x40 plane.
    let floor_geometry = renderer.create_geometry(&MeshData::plane(20.0))?;
    let floor_material = renderer.create_material();
    {
        let material = renderer.material_mut(floor_material).expect("just created");
        material.shader = Some(phong_shader);
        material.diffuse = Vec3::new(0.3, 0.4, 0.8);
        material.diffuse_map = Some(TextureHandle(2));
    }
    let floor = scene.create_entity("floor");
    scene.attach(floor, MeshComponent::new(floor_geometry, floor_material));

    // A crate above the floor, on its own shader so the sort has two
    // shader groups to arrange.
    let crate_shader = renderer.load_shader_source(PHONG_VS, PHONG_FS)?;
    let crate_geometry = renderer.create_geometry(&MeshData::cube(1.0))?;
    let crate_material = renderer.create_material();
    renderer
        .material_mut(crate_material)
        .expect("just created")
        .shader = Some(crate_shader);
    let crate_entity = scene.create_entity("crate");
    scene
        .get_mut::<TransformComponent>(crate_entity)
        .expect("entities always carry a transform")
        .translate(0.0, 2.0, 0.0);
    scene.attach(crate_entity, MeshComponent::new(crate_geometry, crate_material));

    // Lights: one directional, one point, one spot.
    let sun = scene.create_entity("sun");
    scene.attach(
        sun,
        LightComponent::directional(Vec3::new(1.0, 1.0, 1.0), Vec3::new(-1.0, -1.0, -1.0)),
    );

    let lamp = scene.create_entity("red lamp");
    scene
        .get_mut::<TransformComponent>(lamp)
        .expect("entities always carry a transform")
        .translate(-10.0, 3.0, -10.0);
    scene.attach(lamp, LightComponent::point(Vec3::new(1.0, 0.0, 0.0), 0.022, 0.0019));

    let spot = scene.create_entity("green spot");
    scene
        .get_mut::<TransformComponent>(spot)
        .expect("entities always carry a transform")
        .translate(10.0, 20.0, -10.0);
    scene.attach(
        spot,
        LightComponent::spot(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            0.022,
            0.0019,
            30.0,
            40.0,
        ),
    );

    // Environment cube; the cubemap texture handle comes from outside the
    // rendering core (texture loading is not its concern).
    let sky_geometry = renderer.create_geometry(&MeshData::cube(1.0))?;
    renderer.set_environment(Some(TextureHandle(1)), Some(sky_geometry), Some(sky_shader));

    log::info!("scene ready: {} entities", scene.entities().len());

    Ok(())
}
