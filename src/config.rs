use std::ops::RangeInclusive;

use bevy::prelude::*;
use chrono::NaiveDate;

/// Allowed panel width in meters.
pub const PANEL_WIDTH_RANGE: RangeInclusive<f32> = 1.0..=3.0;
/// Allowed panel height in meters.
pub const PANEL_HEIGHT_RANGE: RangeInclusive<f32> = 1.0..=2.2;
/// Allowed panels per row.
pub const PANELS_IN_ROW_RANGE: RangeInclusive<u32> = 4..=20;
/// Allowed row count.
pub const ROWS_RANGE: RangeInclusive<u32> = 4..=10;
/// Allowed ground clearance in meters.
pub const HEIGHT_RANGE: RangeInclusive<f32> = 0.5..=2.0;
/// Allowed slope in degrees from horizontal.
pub const SLOPE_RANGE: RangeInclusive<f32> = 10.0..=80.0;
/// Allowed inter-row distance in meters.
pub const DISTANCE_RANGE: RangeInclusive<f32> = 2.0..=10.0;

/// Allowed sun azimuth in compass degrees.
pub const AZIMUTH_RANGE: RangeInclusive<f32> = 0.0..=360.0;
/// Allowed sun elevation in degrees above the horizon.
pub const ELEVATION_RANGE: RangeInclusive<f32> = 0.0..=90.0;
/// Allowed latitude in degrees (north positive).
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
/// Allowed longitude in degrees (east positive).
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Geometry of the ground-mounted array, edited through the parameter panel
/// and read once per rebuild.
#[derive(Resource, Clone)]
pub struct LayoutConfig {
    /// Width of a single panel in meters.
    pub panel_width: f32,
    /// Height of a single panel in meters.
    pub panel_height: f32,
    /// Number of panels placed side by side in one row.
    pub panels_in_row: u32,
    /// Number of rows in the array.
    pub rows: u32,
    /// Ground clearance under the lower panel edge, meters.
    pub height: f32,
    /// Panel tilt in degrees from horizontal.
    pub slope: f32,
    /// Distance between consecutive rows, meters.
    pub distance: f32,
    /// Set by the GUI on any edit, cleared after the rows are regenerated.
    pub needs_rebuild: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        // Starts dirty so the first frame builds the initial array.
        Self {
            panel_width: 1.5,
            panel_height: 2.0,
            panels_in_row: 5,
            rows: 4,
            height: 0.5,
            slope: 33.0,
            distance: 4.0,
            needs_rebuild: true,
        }
    }
}

impl LayoutConfig {
    /// Total width of one generated row mesh.
    pub fn row_width(&self) -> f32 {
        self.panel_width * self.panels_in_row as f32
    }
}

/// Sun state: either set directly through the azimuth/elevation sliders or
/// recomputed every simulated time step from date, latitude, and longitude.
#[derive(Resource, Clone)]
pub struct SunConfig {
    /// Compass azimuth of the sun in degrees, measured from north, clockwise.
    pub azimuth: f32,
    /// Elevation of the sun above the horizon in degrees.
    pub elevation: f32,
    /// Observer latitude in degrees, north positive.
    pub latitude: f64,
    /// Observer longitude in degrees, east positive.
    pub longitude: f64,
    /// Civil year used by the day simulation.
    pub year: i32,
    /// Civil month used by the day simulation.
    pub month: u32,
    /// Civil day of month used by the day simulation.
    pub day: u32,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            azimuth: 180.0,
            elevation: 55.0,
            latitude: 52.23,
            longitude: 21.01,
            year: 2024,
            month: 6,
            day: 21,
        }
    }
}

impl SunConfig {
    /// Simulation date, or `None` for an impossible year/month/day edit.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::{LayoutConfig, SunConfig};

    /// Defaults must sit inside the slider bounds the GUI enforces.
    #[test]
    fn defaults_are_within_gui_bounds() {
        let layout = LayoutConfig::default();
        assert!(super::PANEL_WIDTH_RANGE.contains(&layout.panel_width));
        assert!(super::PANEL_HEIGHT_RANGE.contains(&layout.panel_height));
        assert!(super::PANELS_IN_ROW_RANGE.contains(&layout.panels_in_row));
        assert!(super::ROWS_RANGE.contains(&layout.rows));
        assert!(super::HEIGHT_RANGE.contains(&layout.height));
        assert!(super::SLOPE_RANGE.contains(&layout.slope));
        assert!(super::DISTANCE_RANGE.contains(&layout.distance));
        assert!(layout.needs_rebuild);

        let sun = SunConfig::default();
        assert!(super::AZIMUTH_RANGE.contains(&sun.azimuth));
        assert!(super::ELEVATION_RANGE.contains(&sun.elevation));
        assert!(sun.date().is_some());
    }

    /// Row width is panel width times panel count.
    #[test]
    fn row_width_scales_with_panel_count() {
        let mut layout = LayoutConfig::default();
        layout.panel_width = 2.0;
        layout.panels_in_row = 10;
        assert_eq!(layout.row_width(), 20.0);
    }

    /// Impossible calendar edits are rejected rather than panicking.
    #[test]
    fn invalid_date_yields_none() {
        let mut sun = SunConfig::default();
        sun.month = 2;
        sun.day = 30;
        assert!(sun.date().is_none());
    }
}
