use serde::Serialize;

/// Geographic position in WGS84 degrees.
///
/// Constructed only through [`LatLng::try_new`], so every value held by the
/// rest of the workspace is finite and inside the valid lat/lng ranges.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct LatLng {
    lat: f64,
    lng: f64,
}

impl LatLng {
    pub const ORIGIN: LatLng = LatLng { lat: 0.0, lng: 0.0 };

    pub fn try_new(lat: f64, lng: f64) -> Option<Self> {
        let lat_ok = lat.is_finite() && (-90.0..=90.0).contains(&lat);
        let lng_ok = lng.is_finite() && (-180.0..=180.0).contains(&lng);
        (lat_ok && lng_ok).then_some(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// `[lat, lng]`, the pair order used by the data service and map hosts.
    pub fn to_pair(self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

#[cfg(test)]
mod tests {
    use super::LatLng;

    #[test]
    fn accepts_in_range_positions() {
        let p = LatLng::try_new(48.291, 25.936).unwrap();
        assert_eq!(p.to_pair(), [48.291, 25.936]);
        assert!(LatLng::try_new(-90.0, 180.0).is_some());
    }

    #[test]
    fn rejects_non_finite_and_out_of_range() {
        assert!(LatLng::try_new(f64::NAN, 0.0).is_none());
        assert!(LatLng::try_new(0.0, f64::INFINITY).is_none());
        assert!(LatLng::try_new(91.0, 0.0).is_none());
        assert!(LatLng::try_new(0.0, -180.5).is_none());
    }
}
