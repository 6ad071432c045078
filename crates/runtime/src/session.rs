use catalog::{LoadOutcome, LoadStatus, Repository};
use foundation::IdParseError;
use layers::{MapConfig, ViewComposer, ViewModel};
use scene::{MenuState, SelectionState};
use tokio::sync::mpsc;
use tracing::debug;

use crate::action::Action;
use crate::event_bus::EventBus;

/// One viewing session: the repository snapshot plus selection and menu state.
///
/// All mutation goes through [`Session::dispatch`] and [`Session::apply_load`],
/// each of which runs to completion before the next is applied. The view is
/// rederived on demand and never cached.
#[derive(Debug)]
pub struct Session {
    repository: Repository,
    selection: SelectionState,
    menus: MenuState,
    map: MapConfig,
    events: EventBus,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(MapConfig::default())
    }
}

impl Session {
    pub fn new(map: MapConfig) -> Self {
        Self {
            repository: Repository::new(),
            selection: SelectionState::new(),
            menus: MenuState::new(),
            map,
            events: EventBus::new(),
        }
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn menus(&self) -> &MenuState {
        &self.menus
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    /// Applies one user action. Returns `true` if any state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let changed = match action {
            Action::SelectSpot(id) => self.selection.select_spot(id).is_changed(),
            Action::ClosePanel => self.selection.close_panel().is_changed(),
            Action::SelectRoute(id) => {
                let dropdown_was_open = self.menus.route_dropdown().is_open();
                self.menus.close_route_dropdown();
                self.selection.select_route(id).is_changed() || dropdown_was_open
            }
            Action::SelectCategory(id) => {
                let dropdown_was_open = self.menus.category_dropdown().is_open();
                self.menus.close_category_dropdown();
                self.selection.select_category(id).is_changed() || dropdown_was_open
            }
            Action::ToggleMenu => {
                self.menus.toggle_menu();
                true
            }
            Action::ToggleRouteDropdown => {
                self.menus.toggle_route_dropdown();
                true
            }
            Action::ToggleCategoryDropdown => {
                self.menus.toggle_category_dropdown();
                true
            }
        };
        debug!(%action, changed, "action applied");
        self.events.emit("action", action.to_string());
        changed
    }

    /// Category selection arriving as text. Non-numeric text is rejected and
    /// leaves the session untouched.
    pub fn select_category_text(&mut self, text: &str) -> Result<bool, IdParseError> {
        let category = foundation::parse_selection(text)?;
        Ok(self.dispatch(Action::SelectCategory(category)))
    }

    /// Records a finished collection load.
    pub fn apply_load(&mut self, outcome: LoadOutcome) -> bool {
        let collection = outcome.collection();
        let changed = self.repository.record(outcome);
        if changed {
            let message = match self.repository.status(collection) {
                LoadStatus::Loaded { records, skipped } => {
                    format!("{collection}: {records} loaded, {skipped} skipped")
                }
                LoadStatus::Failed { message } => format!("{collection}: {message}"),
                LoadStatus::Pending => format!("{collection}: pending"),
            };
            self.events.emit("load", message);
        }
        changed
    }

    /// Applies load completions in arrival order until every sender is gone,
    /// calling `on_change` after each one that changed the repository.
    pub async fn apply_loads<F>(
        &mut self,
        rx: &mut mpsc::UnboundedReceiver<LoadOutcome>,
        mut on_change: F,
    ) where
        F: FnMut(&Session),
    {
        while let Some(outcome) = rx.recv().await {
            if self.apply_load(outcome) {
                on_change(self);
            }
        }
    }

    pub fn view(&self) -> ViewModel {
        ViewComposer::new(&self.repository, &self.map).compose(&self.selection, &self.menus)
    }
}
