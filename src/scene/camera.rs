use std::f32::consts::FRAC_PI_2;

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;

/// Radians of orbit per pixel of mouse drag.
const DRAG_SENSITIVITY: f32 = 0.005;
/// Radians of orbit per arrow-key frame.
const KEY_STEP: f32 = 0.02;
/// Zoom factor per scroll unit.
const ZOOM_STEP: f32 = 0.1;
/// Closest allowed camera distance.
const MIN_RADIUS: f32 = 5.0;
/// Farthest allowed camera distance.
const MAX_RADIUS: f32 = 120.0;
/// Keeps the camera off the poles where look_at degenerates.
const POLE_MARGIN: f32 = 0.05;

/// Orbit-camera state: spherical coordinates around a focus point.
#[derive(Component)]
pub struct OrbitCamera {
    /// Point the camera orbits and looks at.
    pub focus: Vec3,
    /// Distance from the focus.
    pub radius: f32,
    /// Horizontal orbit angle in radians.
    pub azimuth: f32,
    /// Vertical orbit angle in radians.
    pub elevation: f32,
}

impl OrbitCamera {
    /// Derive orbit parameters from an initial camera position and focus.
    pub fn from_position(position: Vec3, focus: Vec3) -> Self {
        let offset = position - focus;
        let radius = offset.length().max(MIN_RADIUS);
        Self {
            focus,
            radius,
            azimuth: offset.x.atan2(offset.z),
            elevation: (offset.y / radius).clamp(-1.0, 1.0).asin(),
        }
    }

    /// World position for the current orbit angles.
    pub fn position(&self) -> Vec3 {
        self.focus
            + self.radius
                * Vec3::new(
                    self.elevation.cos() * self.azimuth.sin(),
                    self.elevation.sin(),
                    self.elevation.cos() * self.azimuth.cos(),
                )
    }

    fn clamp_elevation(&mut self) {
        self.elevation = self
            .elevation
            .clamp(-FRAC_PI_2 + POLE_MARGIN, FRAC_PI_2 - POLE_MARGIN);
    }
}

/// Drive the orbit camera: left-drag orbits, scroll zooms, arrow keys nudge.
pub fn orbit_camera_system(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    keys: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&mut Transform, &mut OrbitCamera)>,
) {
    let Ok((mut transform, mut orbit)) = query.single_mut() else {
        return;
    };

    if mouse_button.pressed(MouseButton::Left) {
        orbit.azimuth -= mouse_motion.delta.x * DRAG_SENSITIVITY;
        orbit.elevation -= mouse_motion.delta.y * DRAG_SENSITIVITY;
    }
    orbit.radius =
        (orbit.radius * (1.0 - mouse_scroll.delta.y * ZOOM_STEP)).clamp(MIN_RADIUS, MAX_RADIUS);

    if keys.pressed(KeyCode::ArrowLeft) {
        orbit.azimuth += KEY_STEP;
    }
    if keys.pressed(KeyCode::ArrowRight) {
        orbit.azimuth -= KEY_STEP;
    }
    if keys.pressed(KeyCode::ArrowUp) {
        orbit.elevation += KEY_STEP;
    }
    if keys.pressed(KeyCode::ArrowDown) {
        orbit.elevation -= KEY_STEP;
    }
    orbit.clamp_elevation();

    *transform = Transform::from_translation(orbit.position()).looking_at(orbit.focus, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use bevy::prelude::Vec3;

    use super::OrbitCamera;

    /// Round-tripping a position through the spherical parameters returns it.
    #[test]
    fn from_position_round_trips() {
        let start = Vec3::new(-10.0, 30.0, 30.0);
        let orbit = OrbitCamera::from_position(start, Vec3::ZERO);
        assert!(orbit.position().distance(start) < 1e-3);
    }

    /// The orbit radius always equals the focus distance.
    #[test]
    fn position_stays_on_orbit_sphere() {
        let focus = Vec3::new(0.0, 2.0, 6.0);
        let mut orbit = OrbitCamera::from_position(Vec3::new(12.0, 9.0, -3.0), focus);
        for _ in 0..10 {
            orbit.azimuth += 0.7;
            orbit.elevation = (orbit.elevation + 0.2).min(1.4);
            let distance = orbit.position().distance(focus);
            assert!((distance - orbit.radius).abs() < 1e-3);
        }
    }
}
