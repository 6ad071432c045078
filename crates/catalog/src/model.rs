//! Validated, immutable records held by the [`Repository`](crate::Repository).

use foundation::{CategoryId, LatLng, RouteId, SpotId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// `None` when the category has no custom marker icon. Never an empty string.
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpotImage {
    pub url: String,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spot {
    pub id: SpotId,
    pub position: LatLng,
    pub name: String,
    pub description: String,
    /// Category as embedded in the spot payload.
    pub category: Option<Category>,
    pub images: Vec<SpotImage>,
}

impl Spot {
    pub fn category_id(&self) -> Option<CategoryId> {
        self.category.as_ref().map(|c| c.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub id: RouteId,
    pub name: String,
    pub coordinates: Vec<LatLng>,
}
