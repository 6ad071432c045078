use std::fmt;

use foundation::{CategoryId, RouteId, SpotId};

/// Discrete user input. The only way selection and menu state change.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    /// Marker click.
    SelectSpot(SpotId),
    ClosePanel,
    /// Route dropdown entry; `None` is the "None" entry.
    SelectRoute(Option<RouteId>),
    /// Category dropdown entry; `None` is "All Categories".
    SelectCategory(Option<CategoryId>),
    ToggleMenu,
    ToggleRouteDropdown,
    ToggleCategoryDropdown,
}

fn opt<T: fmt::Display>(v: Option<T>) -> String {
    v.map_or_else(|| "none".to_string(), |v| v.to_string())
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::SelectSpot(id) => write!(f, "select spot {id}"),
            Action::ClosePanel => write!(f, "close panel"),
            Action::SelectRoute(id) => write!(f, "select route {}", opt(*id)),
            Action::SelectCategory(id) => write!(f, "select category {}", opt(*id)),
            Action::ToggleMenu => write!(f, "toggle menu"),
            Action::ToggleRouteDropdown => write!(f, "toggle route dropdown"),
            Action::ToggleCategoryDropdown => write!(f, "toggle category dropdown"),
        }
    }
}
