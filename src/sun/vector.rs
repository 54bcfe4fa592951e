use bevy::prelude::*;

/// Radius of the sphere the sun light travels on, world units.
pub const SUN_ORBIT_RADIUS: f32 = 30.0;

/// Convert sun elevation/azimuth (degrees) into a Cartesian position on a
/// sphere of the given radius.
///
/// Azimuth is compass-style: 0 degrees points north (-Z), 90 degrees east
/// (+X), increasing clockwise when viewed from above. Elevation 0 lies on
/// the horizon, 90 at the zenith (+Y). The convention matches the azimuth
/// reference of the SPA solar-position algorithm.
pub fn light_vector(elevation_deg: f32, azimuth_deg: f32, radius: f32) -> Vec3 {
    let elevation = elevation_deg.to_radians();
    let azimuth = azimuth_deg.to_radians();
    Vec3::new(
        radius * elevation.cos() * azimuth.sin(),
        radius * elevation.sin(),
        -radius * elevation.cos() * azimuth.cos(),
    )
}

#[cfg(test)]
mod tests {
    use bevy::prelude::Vec3;

    use super::light_vector;

    const EPSILON: f32 = 1e-4;

    /// At 90 degrees elevation the vector points straight up no matter the
    /// azimuth.
    #[test]
    fn zenith_ignores_azimuth() {
        for azimuth in [0.0, 45.0, 90.0, 180.0, 270.0, 359.0] {
            let v = light_vector(90.0, azimuth, 30.0);
            assert!(v.x.abs() < EPSILON, "azimuth {azimuth}: x = {}", v.x);
            assert!(v.z.abs() < EPSILON, "azimuth {azimuth}: z = {}", v.z);
            assert!((v.y - 30.0).abs() < EPSILON, "azimuth {azimuth}: y = {}", v.y);
        }
    }

    /// The vector always lands on the sphere of the requested radius.
    #[test]
    fn magnitude_equals_radius() {
        for elevation in [0.0, 15.0, 33.0, 60.0, 90.0] {
            for azimuth in [0.0, 90.0, 123.0, 200.0, 315.0] {
                for radius in [1.0, 30.0, 42.5] {
                    let v = light_vector(elevation, azimuth, radius);
                    assert!(
                        (v.length() - radius).abs() < EPSILON,
                        "elevation {elevation}, azimuth {azimuth}: |v| = {}",
                        v.length()
                    );
                }
            }
        }
    }

    /// Compass directions map onto the expected axes.
    #[test]
    fn compass_points_map_to_axes() {
        let north = light_vector(0.0, 0.0, 1.0);
        assert!(north.distance(Vec3::NEG_Z) < EPSILON);

        let east = light_vector(0.0, 90.0, 1.0);
        assert!(east.distance(Vec3::X) < EPSILON);

        let south = light_vector(0.0, 180.0, 1.0);
        assert!(south.distance(Vec3::Z) < EPSILON);

        let west = light_vector(0.0, 270.0, 1.0);
        assert!(west.distance(Vec3::NEG_X) < EPSILON);
    }
}
