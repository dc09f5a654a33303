//! Great-circle distance between coordinates.

use rencard_core::Coordinate;

/// Mean Earth radius in kilometers, as used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers between two known coordinates.
#[must_use]
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);

    // Floating-point error can push h a hair past 1.0 for antipodal points.
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Distance in kilometers between two possibly-absent coordinates.
///
/// Returns `None` if either side is absent, or if the computed distance is
/// non-finite. Callers never see NaN.
#[must_use]
pub fn distance_km(a: Option<Coordinate>, b: Option<Coordinate>) -> Option<f64> {
    let (a, b) = (a?, b?);
    let km = haversine_km(a, b);
    km.is_finite().then_some(km)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARIS: Coordinate = Coordinate {
        latitude: 48.8566,
        longitude: 2.3522,
    };
    const LYON: Coordinate = Coordinate {
        latitude: 45.7640,
        longitude: 4.8357,
    };

    #[test]
    fn distance_is_symmetric() {
        let ab = distance_km(Some(PARIS), Some(LYON)).unwrap();
        let ba = distance_km(Some(LYON), Some(PARIS)).unwrap();
        assert!((ab - ba).abs() < 1e-9, "asymmetric: {ab} vs {ba}");
    }

    #[test]
    fn distance_to_self_is_zero() {
        let d = distance_km(Some(PARIS), Some(PARIS)).unwrap();
        assert!(d.abs() < 1e-9, "self distance was {d}");
    }

    #[test]
    fn paris_lyon_is_roughly_392_km() {
        let d = distance_km(Some(PARIS), Some(LYON)).unwrap();
        assert!((d - 392.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn antipodal_points_are_half_circumference_apart() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let d = distance_km(Some(a), Some(b)).unwrap();
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!(
            (d - half_circumference).abs() < 1e-6,
            "got {d}, expected {half_circumference}"
        );
    }

    #[test]
    fn absent_on_either_side_is_absent() {
        assert!(distance_km(None, Some(PARIS)).is_none());
        assert!(distance_km(Some(PARIS), None).is_none());
        assert!(distance_km(None, None).is_none());
    }

    #[test]
    fn non_finite_input_yields_absent_not_nan() {
        let bad = Coordinate::new(f64::NAN, 0.0);
        assert!(distance_km(Some(bad), Some(PARIS)).is_none());
    }
}
