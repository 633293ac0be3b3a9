/// Mean Earth radius in meters used for all track distances.
pub const EARTH_RADIUS_M: f64 = 6_372_795.0;

/// Great-circle distance in meters between two lat/lon pairs given in degrees.
///
/// Haversine on a sphere of radius [`EARTH_RADIUS_M`]; always finite and
/// non-negative for valid coordinates, 0 for identical points.
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let h_lat = (d_lat / 2.0).sin();
    let h_lon = (d_lon / 2.0).sin();
    let a = h_lat * h_lat + lat1.to_radians().cos() * lat2.to_radians().cos() * h_lon * h_lon;
    // rounding can push `a` a hair above 1 for antipodes
    let a = a.clamp(0.0, 1.0);

    let d_rad = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * d_rad
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_zero() {
        assert_eq!(distance(59.907581, 30.256245, 59.907581, 30.256245), 0.0);
    }

    #[test]
    fn antipodes_are_half_circumference() {
        let d = distance(0.0, 0.0, 0.0, 180.0);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_M).abs() < 1e-3);
    }
}
