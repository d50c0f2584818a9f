//! Great-circle distance.

/// Earth radius used for every distance in this crate, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6373.0;

/// Great-circle distance between two `(lat, lon)` positions in degrees, in
/// kilometers.
///
/// ```text
/// a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)
/// d = 2R·atan2(√a, √(1−a))
/// ```
///
/// `a` is clamped to `[0, 1]`, so identical and antipodal points stay in the
/// domain of `sqrt`.
///
/// # Examples
///
/// ```
/// use u_aco::distance::{haversine_km, EARTH_RADIUS_KM};
///
/// let d = haversine_km((0.0, 0.0), (0.0, 180.0));
/// assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
/// assert_eq!(haversine_km((10.0, 20.0), (10.0, 20.0)), 0.0);
/// ```
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let lat1 = from.0.to_radians();
    let lon1 = from.1.to_radians();
    let lat2 = to.0.to_radians();
    let lon2 = to.1.to_radians();

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_points() {
        assert_eq!(haversine_km((51.5, -0.12), (51.5, -0.12)), 0.0);
    }

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        let expected = EARTH_RADIUS_KM * 1.0_f64.to_radians();
        assert!((haversine_km((0.0, 0.0), (0.0, 1.0)) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric() {
        let a = (40.7128, -74.0060);
        let b = (34.0522, -118.2437);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }

    #[test]
    fn test_antipodal_is_half_circumference() {
        let d = haversine_km((45.0, 30.0), (-45.0, -150.0));
        assert!(d.is_finite());
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn test_pole_to_pole() {
        let d = haversine_km((90.0, 0.0), (-90.0, 0.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn test_known_city_pair() {
        // London -> Paris, roughly 344 km
        let d = haversine_km((51.5074, -0.1278), (48.8566, 2.3522));
        assert!((d - 344.0).abs() < 2.0, "got {d}");
    }
}
