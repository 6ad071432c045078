use catalog::Repository;
use foundation::{LatLng, RouteId};
use serde::Serialize;
use tracing::debug;

use crate::symbology::LineStyle;

/// Connected line through a route's coordinates, in route order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyline {
    pub route: RouteId,
    pub name: String,
    pub coordinates: Vec<LatLng>,
    pub style: LineStyle,
}

/// Overlay for the active route; `None` means no polyline is drawn.
///
/// An id that does not resolve, or a route without coordinates, yields no
/// overlay.
pub fn route_overlay(
    repository: &Repository,
    active: Option<RouteId>,
    style: &LineStyle,
) -> Option<Polyline> {
    let id = active?;
    let Some(route) = repository.route(id) else {
        debug!(route = %id, "active route does not resolve; no overlay");
        return None;
    };
    if route.coordinates.is_empty() {
        return None;
    }
    Some(Polyline {
        route: route.id,
        name: route.name.clone(),
        coordinates: route.coordinates.clone(),
        style: style.clone(),
    })
}
