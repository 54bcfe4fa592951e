use bevy::prelude::*;

use crate::config::SunConfig;

mod position;
mod vector;

pub use position::{SolarAngles, solar_angles, utc_offset_hours};
pub use vector::{SUN_ORBIT_RADIUS, light_vector};

/// Marker for the sun directional light.
#[derive(Component)]
pub struct SunLight;

/// Marker for the billboard quad visualizing the sun light's position.
#[derive(Component)]
pub struct SunHelper;

/// Reposition the sun light and its helper whenever the sun configuration
/// changes. Both sit on a fixed-radius sphere and face the origin.
pub fn update_sun_light_system(
    sun: Res<SunConfig>,
    mut lights: Query<&mut Transform, (With<SunLight>, Without<SunHelper>)>,
    mut helpers: Query<&mut Transform, (With<SunHelper>, Without<SunLight>)>,
) {
    if !sun.is_changed() {
        return;
    }

    let target = light_vector(sun.elevation, sun.azimuth, SUN_ORBIT_RADIUS);
    for mut transform in &mut lights {
        transform.translation = target;
        transform.look_at(Vec3::ZERO, Vec3::Y);
    }
    for mut transform in &mut helpers {
        transform.translation = target;
        transform.look_at(Vec3::ZERO, Vec3::Y);
    }
}
