use serde::Serialize;

use crate::geo::LatLng;

/// Axis-aligned lat/lng box
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn around(p: LatLng) -> Self {
        Self {
            south_west: p,
            north_east: p,
        }
    }

    /// Smallest box containing every point, or `None` for an empty input.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut iter = points.into_iter();
        let mut bounds = Self::around(iter.next()?);
        for p in iter {
            bounds.extend(p);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, p: LatLng) {
        let south = self.south_west.lat().min(p.lat());
        let west = self.south_west.lng().min(p.lng());
        let north = self.north_east.lat().max(p.lat());
        let east = self.north_east.lng().max(p.lng());
        // Mins and maxes of valid positions stay valid.
        if let (Some(sw), Some(ne)) = (LatLng::try_new(south, west), LatLng::try_new(north, east))
        {
            self.south_west = sw;
            self.north_east = ne;
        }
    }

    pub fn contains(&self, p: LatLng) -> bool {
        p.lat() >= self.south_west.lat()
            && p.lat() <= self.north_east.lat()
            && p.lng() >= self.south_west.lng()
            && p.lng() <= self.north_east.lng()
    }
}
