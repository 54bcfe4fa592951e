use bevy::prelude::*;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};

mod config;
mod panels;
mod scene;
mod simulation;
mod sun;
mod ui;

use config::{LayoutConfig, SunConfig};
use panels::rebuild_panels_system;
use scene::{orbit_camera_system, setup_scene};
use simulation::{DaySimulation, day_simulation_system};
use sun::update_sun_light_system;
use ui::parameter_panel_system;

// App entry point and system registration.
fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Ground-mount solar array".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .init_resource::<LayoutConfig>()
        .init_resource::<SunConfig>()
        .init_resource::<DaySimulation>()
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            (
                orbit_camera_system,
                day_simulation_system,
                update_sun_light_system,
                rebuild_panels_system,
            ),
        )
        .add_systems(EguiPrimaryContextPass, parameter_panel_system)
        .run();
}
