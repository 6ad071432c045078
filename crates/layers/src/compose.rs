use catalog::Repository;
use foundation::{LatLng, LatLngBounds};
use scene::{MenuState, Panel, SelectionState, visible_spots};
use serde::Serialize;

use crate::config::{MapConfig, TileSource};
use crate::detail::{Carousel, SpotDetail, carousel, spot_detail};
use crate::markers::{Marker, marker_set};
use crate::menu::{MenuModel, menu_model};
use crate::route::{Polyline, route_overlay};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
    pub min_zoom: u8,
    pub tiles: TileSource,
    /// Extent of the markers and the route overlay; `None` when both are empty.
    pub bounds: Option<LatLngBounds>,
    pub markers: Vec<Marker>,
    pub route: Option<Polyline>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    /// Visual state: open only while there is a detail to show.
    pub open: bool,
    pub detail: Option<SpotDetail>,
    pub carousel: Option<Carousel>,
}

/// Everything the rendering surface needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub map: MapView,
    pub panel: PanelView,
    pub menu: MenuModel,
}

/// Derives render-ready views from the repository and the session state.
///
/// Composition is pure: it performs no I/O and never writes the repository
/// or the selection, so it can be rerun after every change.
#[derive(Debug, Clone, Copy)]
pub struct ViewComposer<'a> {
    repository: &'a Repository,
    config: &'a MapConfig,
}

impl<'a> ViewComposer<'a> {
    pub fn new(repository: &'a Repository, config: &'a MapConfig) -> Self {
        Self { repository, config }
    }

    pub fn compose(&self, selection: &SelectionState, menus: &MenuState) -> ViewModel {
        ViewModel {
            map: self.map_view(selection),
            panel: self.panel_view(selection),
            menu: menu_model(self.repository, selection, menus),
        }
    }

    pub fn map_view(&self, selection: &SelectionState) -> MapView {
        let visible = visible_spots(self.repository.spots(), selection.active_category());
        let markers = marker_set(&visible, self.repository);
        let route = route_overlay(
            self.repository,
            selection.active_route(),
            &self.config.route_style,
        );
        let bounds = LatLngBounds::from_points(
            markers
                .iter()
                .map(|m| m.position)
                .chain(route.iter().flat_map(|r| r.coordinates.iter().copied())),
        );
        MapView {
            center: self.config.center,
            zoom: self.config.zoom,
            min_zoom: self.config.min_zoom,
            tiles: self.config.tiles.clone(),
            bounds,
            markers,
            route,
        }
    }

    pub fn panel_view(&self, selection: &SelectionState) -> PanelView {
        let detail = match Panel::of(selection) {
            Panel::Showing(spot) => spot_detail(self.repository, Some(spot)),
            Panel::Closed => None,
        };
        let carousel = detail.as_ref().and_then(|d| carousel(&d.images));
        PanelView {
            open: detail.is_some(),
            detail,
            carousel,
        }
    }
}
