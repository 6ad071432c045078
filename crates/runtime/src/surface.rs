//! Contract between the session and whatever draws it.
//!
//! A surface receives the composed view one region at a time together with
//! the actions its controls should produce. It never reads the repository
//! or the selection directly.

use foundation::{CategoryId, RouteId, SpotId};
use layers::{Carousel, MapView, MenuModel, PanelView, ViewModel};

use crate::action::Action;

/// Actions wired to the menu controls.
#[derive(Debug, Clone, Copy)]
pub struct MenuCallbacks {
    pub on_toggle_menu: Action,
    pub on_toggle_routes: Action,
    pub on_toggle_categories: Action,
    pub on_route: fn(Option<RouteId>) -> Action,
    pub on_category: fn(Option<CategoryId>) -> Action,
}

impl Default for MenuCallbacks {
    fn default() -> Self {
        Self {
            on_toggle_menu: Action::ToggleMenu,
            on_toggle_routes: Action::ToggleRouteDropdown,
            on_toggle_categories: Action::ToggleCategoryDropdown,
            on_route: Action::SelectRoute,
            on_category: Action::SelectCategory,
        }
    }
}

pub trait RenderSurface {
    /// Base map, markers and route overlay. Marker clicks map through
    /// `on_marker_click` using the marker key.
    fn render_map(&mut self, map: &MapView, on_marker_click: fn(SpotId) -> Action);

    fn render_carousel(&mut self, carousel: Option<&Carousel>);

    /// Detail panel; its close control produces `on_close`.
    fn render_panel(&mut self, panel: &PanelView, on_close: Action);

    fn render_menu(&mut self, menu: &MenuModel, callbacks: MenuCallbacks);
}

/// Pushes one composed view through a surface.
pub fn render<S: RenderSurface + ?Sized>(view: &ViewModel, surface: &mut S) {
    surface.render_map(&view.map, Action::SelectSpot);
    surface.render_carousel(view.panel.carousel.as_ref());
    surface.render_panel(&view.panel, Action::ClosePanel);
    surface.render_menu(&view.menu, MenuCallbacks::default());
}
