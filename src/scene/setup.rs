use bevy::prelude::*;

use crate::panels::{PanelMaterial, build_panel_material};
use crate::scene::camera::OrbitCamera;
use crate::scene::helpers::{SunHelperVisual, build_axes_mesh, build_grid_mesh};
use crate::sun::{SUN_ORBIT_RADIUS, SunHelper, SunLight, light_vector};

/// Background clear color (light gray sky).
const SKY_COLOR: Color = Color::srgb(0.93, 0.93, 0.93);
/// Global ambient-light color.
const AMBIENT_COLOR: Color = Color::srgb(0.2, 0.2, 0.2);
/// Global ambient-light brightness.
const AMBIENT_BRIGHTNESS: f32 = 1_200.0;
/// Shadow-map resolution for the sun light.
const SHADOW_MAP_SIZE: usize = 2_048;
/// Side length of the square ground plane, meters.
const GROUND_SIZE: f32 = 40.0;
/// Ground plane surface color.
const GROUND_COLOR: Color = Color::srgb(0.79, 0.79, 0.79);
/// Side length of the line grid helper, meters.
const GRID_SIZE: f32 = 50.0;
/// Number of grid divisions per side.
const GRID_DIVISIONS: u32 = 10;
/// Length of the axes-helper lines, meters.
const AXES_LENGTH: f32 = 25.0;
/// Initial camera position.
const CAMERA_START: Vec3 = Vec3::new(-10.0, 30.0, 30.0);
/// Directional-light illuminance used for the sun.
const SUN_ILLUMINANCE: f32 = 14_000.0;
/// Directional-light color used for the sun.
const SUN_COLOR: Color = Color::srgb(1.0, 0.97, 0.90);
/// Edge length of the sun-helper billboard quad.
const SUN_HELPER_SIZE: f32 = 3.0;
/// Pixel size of the generated sun-helper disc texture.
const SUN_HELPER_TEXTURE_SIZE: u32 = 256;

/// Build the static scene: environment, ground, helpers, camera, sun light,
/// and the shared panel material. Panel rows themselves are generated by the
/// rebuild system on the first frame.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    asset_server: Res<AssetServer>,
) {
    setup_environment(&mut commands);
    spawn_ground(&mut commands, &mut meshes, &mut materials);
    spawn_helpers(&mut commands, &mut meshes, &mut materials);
    spawn_camera(&mut commands);
    spawn_sun(&mut commands, &mut meshes, &mut materials, &mut images);
    commands.insert_resource(PanelMaterial(build_panel_material(
        &asset_server,
        &mut materials,
    )));
}

/// Insert global background, ambient-light, and shadow-map resources.
fn setup_environment(commands: &mut Commands) {
    commands.insert_resource(ClearColor(SKY_COLOR));
    // Ambient fill so shaded panel backs stay readable.
    commands.insert_resource(bevy::light::GlobalAmbientLight {
        color: AMBIENT_COLOR,
        brightness: AMBIENT_BRIGHTNESS,
        affects_lightmapped_meshes: true,
    });
    commands.insert_resource(bevy::light::DirectionalLightShadowMap {
        size: SHADOW_MAP_SIZE,
    });
}

/// Spawn the shadow-receiving ground plane.
fn spawn_ground(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let mesh = meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE));
    let material = materials.add(StandardMaterial {
        base_color: GROUND_COLOR,
        perceptual_roughness: 0.95,
        metallic: 0.0,
        ..default()
    });
    commands.spawn((
        bevy::mesh::Mesh3d(mesh),
        bevy::pbr::MeshMaterial3d(material),
        Transform::IDENTITY,
    ));
}

/// Spawn the grid and axes line helpers.
fn spawn_helpers(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let line_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.35, 0.35),
        unlit: true,
        ..default()
    });
    let grid_mesh = meshes.add(build_grid_mesh(GRID_SIZE, GRID_DIVISIONS));
    commands.spawn((
        bevy::mesh::Mesh3d(grid_mesh),
        bevy::pbr::MeshMaterial3d(line_material),
        Transform::IDENTITY,
        bevy::light::NotShadowCaster,
    ));

    // Axes use vertex colors; the material stays white so they read as RGB.
    let axes_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });
    let axes_mesh = meshes.add(build_axes_mesh(AXES_LENGTH));
    commands.spawn((
        bevy::mesh::Mesh3d(axes_mesh),
        bevy::pbr::MeshMaterial3d(axes_material),
        Transform::IDENTITY,
        bevy::light::NotShadowCaster,
    ));
}

/// Spawn the orbit camera looking at the origin.
fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        bevy::camera::Camera3d::default(),
        Transform::from_translation(CAMERA_START).looking_at(Vec3::ZERO, Vec3::Y),
        OrbitCamera::from_position(CAMERA_START, Vec3::ZERO),
    ));
}

/// Spawn the sun directional light and its billboard helper.
///
/// Both start from the default sun configuration; the retarget system keeps
/// them on the orbit sphere afterwards.
fn spawn_sun(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    images: &mut Assets<Image>,
) {
    let sun = crate::config::SunConfig::default();
    let start = light_vector(sun.elevation, sun.azimuth, SUN_ORBIT_RADIUS);

    commands.spawn((
        bevy::light::DirectionalLight {
            illuminance: SUN_ILLUMINANCE,
            color: SUN_COLOR,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(start).looking_at(Vec3::ZERO, Vec3::Y),
        SunLight,
    ));

    let helper_texture = images.add(SunHelperVisual::build_texture(SUN_HELPER_TEXTURE_SIZE));
    let helper_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(helper_texture),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        cull_mode: None,
        ..default()
    });
    let helper_mesh = meshes.add(SunHelperVisual::build_quad(SUN_HELPER_SIZE));
    commands.spawn((
        bevy::mesh::Mesh3d(helper_mesh),
        bevy::pbr::MeshMaterial3d(helper_material),
        Transform::from_translation(start).looking_at(Vec3::ZERO, Vec3::Y),
        bevy::light::NotShadowCaster,
        SunHelper,
    ));
}
