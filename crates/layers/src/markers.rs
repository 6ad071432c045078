use catalog::{Category, Repository, Spot};
use foundation::{LatLng, SpotId};
use serde::Serialize;

use crate::symbology::{IconSpec, resolve_icon};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Stable key for the host's marker diffing and click callbacks.
    pub key: SpotId,
    pub position: LatLng,
    pub title: String,
    pub icon: IconSpec,
}

/// The category a spot renders with.
///
/// The categories collection is authoritative; while it is empty (in flight
/// or failed) the category embedded in the spot payload is used.
pub fn category_for<'a>(spot: &'a Spot, repository: &'a Repository) -> Option<&'a Category> {
    let id = spot.category_id()?;
    repository.category(id).or(spot.category.as_ref())
}

/// One marker per visible spot, in the order given.
pub fn marker_set(visible: &[&Spot], repository: &Repository) -> Vec<Marker> {
    visible
        .iter()
        .map(|spot| Marker {
            key: spot.id,
            position: spot.position,
            title: spot.name.clone(),
            icon: resolve_icon(category_for(spot, repository)),
        })
        .collect()
}
