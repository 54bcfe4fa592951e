use bevy::prelude::*;

use crate::config::LayoutConfig;

mod layout;
mod mesh;

pub use layout::{PanelPlacement, row_placements};
pub use mesh::build_row_mesh;

/// Marker for generated panel-row entities, despawned wholesale on rebuild.
#[derive(Component)]
pub struct PanelRow;

/// Material shared by every panel row across rebuilds.
#[derive(Resource)]
pub struct PanelMaterial(pub Handle<StandardMaterial>);

/// Build the shared textured panel material.
///
/// A missing `panel.png` degrades to a plain white surface; the asset server
/// keeps the handle valid either way.
pub fn build_panel_material(
    asset_server: &AssetServer,
    materials: &mut Assets<StandardMaterial>,
) -> Handle<StandardMaterial> {
    let texture: Handle<Image> = asset_server.load("textures/panel.png");
    materials.add(StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(texture),
        perceptual_roughness: 0.85,
        metallic: 0.0,
        reflectance: 0.04,
        double_sided: true,
        cull_mode: None,
        ..default()
    })
}

/// Regenerate the panel rows when the layout is dirty.
///
/// Rebuild is wholesale: every previously generated row is despawned and the
/// full set respawned from the current configuration, sharing one mesh and
/// one material.
pub fn rebuild_panels_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut config: ResMut<LayoutConfig>,
    material: Res<PanelMaterial>,
    rows: Query<Entity, With<PanelRow>>,
) {
    if !config.needs_rebuild {
        return;
    }
    config.needs_rebuild = false;

    for entity in rows.iter() {
        commands.entity(entity).despawn();
    }

    let row_mesh = meshes.add(build_row_mesh(
        config.row_width(),
        config.panel_height,
        config.panels_in_row,
    ));
    let placements = row_placements(&config);
    debug!("rebuilding {} panel rows", placements.len());
    for placement in placements {
        commands.spawn((
            bevy::mesh::Mesh3d(row_mesh.clone()),
            bevy::pbr::MeshMaterial3d(material.0.clone()),
            Transform::from_translation(placement.translation).with_rotation(placement.rotation),
            PanelRow,
        ));
    }
}
