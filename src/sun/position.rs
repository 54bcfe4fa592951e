use chrono::{Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use spa::calc_solar_position;

/// Solar position in degrees: compass azimuth (from north, clockwise) and
/// altitude above the horizon (negative when the sun is below it).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarAngles {
    pub azimuth: f64,
    pub altitude: f64,
}

/// Whole-hour UTC offset derived from longitude (15 degrees per hour).
///
/// A real timezone database is out of scope; this keeps the computation
/// local and is accurate enough for a visualization.
pub fn utc_offset_hours(longitude: f64) -> i64 {
    (longitude / 15.0).round() as i64
}

/// Compute solar azimuth/altitude for a local civil date and time of day at
/// the given coordinates.
///
/// Local time is shifted to UTC by the longitude-derived offset, then handed
/// to the SPA algorithm. Returns `None` only for coordinates outside the
/// ranges the algorithm accepts.
pub fn solar_angles(
    date: NaiveDate,
    local_time: NaiveTime,
    latitude: f64,
    longitude: f64,
) -> Option<SolarAngles> {
    let naive_utc = date.and_time(local_time) - Duration::hours(utc_offset_hours(longitude));
    let utc = Utc.from_utc_datetime(&naive_utc);
    let position = calc_solar_position(utc, latitude, longitude).ok()?;
    Some(SolarAngles {
        azimuth: position.azimuth,
        altitude: 90.0 - position.zenith_angle,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::{solar_angles, utc_offset_hours};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).expect("valid test time")
    }

    /// Offset rounds to the nearest whole hour of longitude.
    #[test]
    fn utc_offset_rounds_to_nearest_hour() {
        assert_eq!(utc_offset_hours(0.0), 0);
        assert_eq!(utc_offset_hours(7.4), 0);
        assert_eq!(utc_offset_hours(7.6), 1);
        assert_eq!(utc_offset_hours(-90.0), -6);
        assert_eq!(utc_offset_hours(180.0), 12);
    }

    /// Midsummer noon in Vienna is well above the horizon, local midnight is
    /// well below it.
    #[test]
    fn midsummer_noon_up_midnight_down() {
        let noon = solar_angles(date(2024, 6, 21), time(12, 0), 48.21, 16.37)
            .expect("valid coordinates");
        assert!(noon.altitude > 50.0, "noon altitude {}", noon.altitude);

        let midnight = solar_angles(date(2024, 6, 21), time(0, 0), 48.21, 16.37)
            .expect("valid coordinates");
        assert!(midnight.altitude < 0.0, "midnight altitude {}", midnight.altitude);
    }

    /// Around local noon the sun sits near due south for a mid-northern site.
    #[test]
    fn northern_noon_azimuth_is_southerly() {
        let noon = solar_angles(date(2024, 6, 21), time(12, 0), 52.23, 21.01)
            .expect("valid coordinates");
        assert!(
            (noon.azimuth - 180.0).abs() < 30.0,
            "noon azimuth {}",
            noon.azimuth
        );
    }

    /// Out-of-range latitude is reported as `None`, not a panic.
    #[test]
    fn out_of_range_latitude_is_rejected() {
        assert!(solar_angles(date(2024, 6, 21), time(12, 0), 120.0, 0.0).is_none());
    }
}
