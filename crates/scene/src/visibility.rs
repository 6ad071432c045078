use foundation::SpotId;

use crate::selection::SelectionState;

/// Two-state toggle used by every independently openable surface.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Toggle {
    #[default]
    Closed,
    Open,
}

impl Toggle {
    pub fn is_open(self) -> bool {
        self == Toggle::Open
    }

    pub fn flipped(self) -> Self {
        match self {
            Toggle::Closed => Toggle::Open,
            Toggle::Open => Toggle::Closed,
        }
    }
}

/// Detail panel state, derived from the spot axis and never stored.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Panel {
    Closed,
    Showing(SpotId),
}

impl Panel {
    pub fn of(selection: &SelectionState) -> Self {
        match selection.active_spot() {
            Some(spot) => Panel::Showing(spot),
            None => Panel::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Panel::Showing(_))
    }
}

/// Burger menu and its two dropdowns.
///
/// The menu is only ever flipped by [`MenuState::toggle_menu`]; no selection
/// opens or closes it. A dropdown closes once an entry is chosen from it.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    menu: Toggle,
    route_dropdown: Toggle,
    category_dropdown: Toggle,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu(&self) -> Toggle {
        self.menu
    }

    pub fn route_dropdown(&self) -> Toggle {
        self.route_dropdown
    }

    pub fn category_dropdown(&self) -> Toggle {
        self.category_dropdown
    }

    pub fn toggle_menu(&mut self) -> Toggle {
        self.menu = self.menu.flipped();
        self.menu
    }

    pub fn toggle_route_dropdown(&mut self) -> Toggle {
        self.route_dropdown = self.route_dropdown.flipped();
        self.route_dropdown
    }

    pub fn toggle_category_dropdown(&mut self) -> Toggle {
        self.category_dropdown = self.category_dropdown.flipped();
        self.category_dropdown
    }

    pub fn close_route_dropdown(&mut self) {
        self.route_dropdown = Toggle::Closed;
    }

    pub fn close_category_dropdown(&mut self) {
        self.category_dropdown = Toggle::Closed;
    }
}
