use bevy::prelude::*;

use crate::config::LayoutConfig;

/// Final transform of one generated panel row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPlacement {
    /// World translation of the row center.
    pub translation: Vec3,
    /// Tilt rotation applied to the row.
    pub rotation: Quat,
}

/// Compute one placement per row from the current layout.
///
/// Rows march along +Z at `distance` intervals starting at the origin. Every
/// row sits at `height + panel_height / 2` so the lower edge clears the
/// ground, tilted by `-slope` degrees about X.
pub fn row_placements(config: &LayoutConfig) -> Vec<PanelPlacement> {
    let center_height = config.height + config.panel_height / 2.0;
    let rotation = Quat::from_rotation_x(-config.slope.to_radians());
    (0..config.rows)
        .map(|row| PanelPlacement {
            translation: Vec3::new(0.0, center_height, row as f32 * config.distance),
            rotation,
        })
        .collect()
}
