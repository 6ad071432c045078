use foundation::LatLng;
use serde::Serialize;

use crate::symbology::LineStyle;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileSource {
    /// XYZ template with `{s}`, `{z}`, `{x}` and `{y}` placeholders.
    pub url_template: String,
    pub attribution: String,
}

impl Default for TileSource {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© OpenStreetMap contributors".to_string(),
        }
    }
}

/// Presentation constants of the map surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapConfig {
    pub center: LatLng,
    pub zoom: u8,
    pub min_zoom: u8,
    pub tiles: TileSource,
    pub route_style: LineStyle,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: LatLng::try_new(48.291, 25.936).unwrap_or(LatLng::ORIGIN),
            zoom: 13,
            min_zoom: 12,
            tiles: TileSource::default(),
            route_style: LineStyle::default(),
        }
    }
}
