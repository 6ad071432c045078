use std::fmt::Write;

use foundation::{LatLng, SpotId};
use layers::{Carousel, IconKind, MapView, MenuModel, PanelView};
use runtime::{Action, MenuCallbacks, RenderSurface};

/// Text rendering of a view, for terminals and logs.
#[derive(Debug, Default)]
pub struct ConsoleSurface {
    out: String,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

fn coord(p: LatLng) -> String {
    format!("{:.5},{:.5}", p.lat(), p.lng())
}

impl RenderSurface for ConsoleSurface {
    fn render_map(&mut self, map: &MapView, _on_marker_click: fn(SpotId) -> Action) {
        let _ = writeln!(
            self.out,
            "map center={} zoom={} (min {})",
            coord(map.center),
            map.zoom,
            map.min_zoom
        );
        if let Some(b) = map.bounds {
            let _ = writeln!(
                self.out,
                "  bounds {} .. {}",
                coord(b.south_west),
                coord(b.north_east)
            );
        }
        let _ = writeln!(self.out, "  {} marker(s)", map.markers.len());
        for marker in &map.markers {
            let pin = match marker.icon.kind {
                IconKind::Category => marker.icon.url.as_str(),
                IconKind::DefaultPin => "default pin",
            };
            let _ = writeln!(
                self.out,
                "    [{}] {} @ {} ({pin})",
                marker.key,
                marker.title,
                coord(marker.position)
            );
        }
        if let Some(route) = &map.route {
            let _ = writeln!(
                self.out,
                "  route {} \"{}\": {} point(s), {}",
                route.route,
                route.name,
                route.coordinates.len(),
                route.style.color
            );
        }
    }

    fn render_carousel(&mut self, carousel: Option<&Carousel>) {
        let Some(carousel) = carousel else {
            return;
        };
        for slide in &carousel.slides {
            let _ = writeln!(self.out, "  image {} ({})", slide.url, slide.alt);
        }
    }

    fn render_panel(&mut self, panel: &PanelView, _on_close: Action) {
        let Some(detail) = &panel.detail else {
            return;
        };
        let _ = writeln!(self.out, "spot [{}] {}", detail.key, detail.name);
        let _ = writeln!(self.out, "  category: {}", detail.category_name);
        if !detail.description.is_empty() {
            let _ = writeln!(self.out, "  {}", detail.description);
        }
    }

    fn render_menu(&mut self, menu: &MenuModel, _callbacks: MenuCallbacks) {
        let _ = writeln!(self.out, "route: {}", menu.routes.label);
        let _ = writeln!(self.out, "category: {}", menu.categories.label);
    }
}
