//! Great-circle geometry between geographic coordinates
//!
//! Pure, stateless functions shared by the fusion core. No range validation
//! is performed here: out-of-range latitudes or longitudes produce
//! mathematically defined but meaningless results, and keeping inputs sane
//! is the caller's responsibility.

use crate::core::constants::EARTH_RADIUS_KM;
use crate::core::types::GeoPoint;

/// Great-circle distance between two points via the haversine formula (km)
///
/// Always >= 0; returns 0 for identical points up to floating precision.
pub fn distance_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Forward azimuth from `from` to `to`, degrees clockwise from north in [0, 360)
///
/// Identical points yield 0 (atan2(0, 0)); that case cannot arise while a
/// genuine separation exists between observer and target.
pub fn bearing_deg(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let lat_from = from.latitude.to_radians();
    let lat_to = to.latitude.to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let y = d_lon.sin() * lat_to.cos();
    let x = lat_from.cos() * lat_to.sin() - lat_from.sin() * lat_to.cos() * d_lon.cos();

    // Double modulo keeps tiny negative angles from rounding up to 360.0
    ((y.atan2(x).to_degrees() % 360.0) + 360.0) % 360.0
}

/// Wraps a relative bearing into [-180, 180]
///
/// A single conditional wrap in each direction is exact here: the unnormalized
/// difference of a bearing in [0, 360) and a heading in [0, 360) always lies
/// within (-360, 360).
pub fn wrap_relative_deg(deg: f64) -> f64 {
    let mut wrapped = deg;
    if wrapped > 180.0 {
        wrapped -= 360.0;
    }
    if wrapped < -180.0 {
        wrapped += 360.0;
    }
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEOUL_OBSERVER: GeoPoint = GeoPoint {
        latitude: 37.5000,
        longitude: 127.0000,
    };

    const SEOUL_TARGET: GeoPoint = GeoPoint {
        latitude: 37.551447,
        longitude: 127.047016,
    };

    #[test]
    fn distance_to_self_is_zero() {
        let points = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(37.5, 127.0),
            GeoPoint::new(-45.0, -170.0),
            GeoPoint::new(89.9, 13.0),
        ];

        for p in &points {
            assert!(distance_km(p, p).abs() < 1e-9);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(37.5, 127.0);
        let b = GeoPoint::new(35.6762, 139.6503);

        let forward = distance_km(&a, &b);
        let backward = distance_km(&b, &a);

        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn anchor_distance_rounds_to_seven_km() {
        let d = distance_km(&SEOUL_OBSERVER, &SEOUL_TARGET);
        assert_eq!(d.round() as i64, 7);
    }

    #[test]
    fn bearing_stays_in_range() {
        let points = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(37.5, 127.0),
            GeoPoint::new(37.551447, 127.047016),
            GeoPoint::new(-33.8688, 151.2093),
            GeoPoint::new(51.5074, -0.1278),
            GeoPoint::new(-89.0, 179.9),
        ];

        for from in &points {
            for to in &points {
                let b = bearing_deg(from, to);
                assert!((0.0..360.0).contains(&b), "bearing {} out of range", b);
            }
        }
    }

    #[test]
    fn bearing_due_north_is_zero() {
        let from = GeoPoint::new(37.5, 127.047016);
        let to = GeoPoint::new(37.551447, 127.047016);

        let b = bearing_deg(&from, &to);
        assert!(b < 1e-6 || (360.0 - b) < 1e-6, "expected ~0, got {}", b);
    }

    #[test]
    fn bearing_cardinal_directions() {
        let origin = GeoPoint::new(0.0, 0.0);

        let east = bearing_deg(&origin, &GeoPoint::new(0.0, 1.0));
        let south = bearing_deg(&origin, &GeoPoint::new(-1.0, 0.0));
        let west = bearing_deg(&origin, &GeoPoint::new(0.0, -1.0));

        assert!((east - 90.0).abs() < 1e-6);
        assert!((south - 180.0).abs() < 1e-6);
        assert!((west - 270.0).abs() < 1e-6);
    }

    #[test]
    fn wrap_relative_covers_full_difference_range() {
        let mut deg = -359.5;
        while deg < 360.0 {
            let wrapped = wrap_relative_deg(deg);
            assert!((-180.0..=180.0).contains(&wrapped), "{} -> {}", deg, wrapped);

            // Wrapping must not change the angle modulo 360
            let residue = ((wrapped - deg) % 360.0).abs();
            assert!(residue < 1e-9 || (residue - 360.0).abs() < 1e-9);

            deg += 0.5;
        }
    }
}
