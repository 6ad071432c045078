use catalog::Repository;
use foundation::{CategoryId, RouteId};
use scene::{MenuState, SelectionState};
use serde::Serialize;

use crate::markers::category_for;

pub const ROUTE_PLACEHOLDER: &str = "Select a route";
pub const NO_ROUTE_LABEL: &str = "None";
pub const ALL_CATEGORIES_LABEL: &str = "All Categories";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownEntry<Id> {
    /// `None` is the leading "no selection" entry.
    pub value: Option<Id>,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dropdown<Id> {
    /// Button text.
    pub label: String,
    pub open: bool,
    pub entries: Vec<DropdownEntry<Id>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuModel {
    pub open: bool,
    pub routes: Dropdown<RouteId>,
    pub categories: Dropdown<CategoryId>,
}

fn dropdown<Id, I>(
    label: String,
    open: bool,
    none_label: &str,
    active: Option<Id>,
    items: I,
) -> Dropdown<Id>
where
    Id: Copy + PartialEq,
    I: IntoIterator<Item = (Id, String)>,
{
    let mut entries = vec![DropdownEntry {
        value: None,
        label: none_label.to_string(),
        selected: active.is_none(),
    }];
    entries.extend(items.into_iter().map(|(id, name)| DropdownEntry {
        value: Some(id),
        label: name,
        selected: active == Some(id),
    }));
    Dropdown {
        label,
        open,
        entries,
    }
}

fn category_label(repository: &Repository, active: Option<CategoryId>) -> String {
    let Some(id) = active else {
        return ALL_CATEGORIES_LABEL.to_string();
    };
    if let Some(c) = repository.category(id) {
        return c.name.clone();
    }
    // Categories may still be in flight; spots embed their category.
    repository
        .spots()
        .iter()
        .filter(|s| s.category_id() == Some(id))
        .find_map(|s| category_for(s, repository))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| format!("Category {id}"))
}

pub fn menu_model(
    repository: &Repository,
    selection: &SelectionState,
    menus: &MenuState,
) -> MenuModel {
    let active_route = selection.active_route();
    let route_label = active_route
        .and_then(|id| repository.route(id))
        .map(|r| r.name.clone())
        .unwrap_or_else(|| ROUTE_PLACEHOLDER.to_string());

    let active_category = selection.active_category();

    MenuModel {
        open: menus.menu().is_open(),
        routes: dropdown(
            route_label,
            menus.route_dropdown().is_open(),
            NO_ROUTE_LABEL,
            active_route,
            repository.routes().iter().map(|r| (r.id, r.name.clone())),
        ),
        categories: dropdown(
            category_label(repository, active_category),
            menus.category_dropdown().is_open(),
            ALL_CATEGORIES_LABEL,
            active_category,
            repository
                .categories()
                .iter()
                .map(|c| (c.id, c.name.clone())),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Category, Decoded, LoadOutcome, Route, Spot};
    use foundation::{LatLng, SpotId};
    use pretty_assertions::assert_eq;

    fn category(id: u64, name: &str) -> Category {
        Category {
            id: CategoryId::new(id),
            name: name.into(),
            icon_url: None,
        }
    }

    fn repository() -> Repository {
        let mut repo = Repository::new();
        repo.record(LoadOutcome::Routes(Ok(Decoded {
            records: vec![Route {
                id: RouteId::new(1),
                name: "Old town".into(),
                coordinates: Vec::new(),
            }],
            quarantined: Vec::new(),
        })));
        repo.record(LoadOutcome::Spots(Ok(Decoded {
            records: vec![Spot {
                id: SpotId::new(1),
                position: LatLng::ORIGIN,
                name: "Fortress".into(),
                description: String::new(),
                category: Some(category(7, "History")),
                images: Vec::new(),
            }],
            quarantined: Vec::new(),
        })));
        repo
    }

    #[test]
    fn closed_menu_with_placeholders() {
        let model = menu_model(&repository(), &SelectionState::new(), &MenuState::new());
        assert!(!model.open);
        assert_eq!(model.routes.label, ROUTE_PLACEHOLDER);
        assert_eq!(model.categories.label, ALL_CATEGORIES_LABEL);
        let labels: Vec<&str> = model.routes.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec![NO_ROUTE_LABEL, "Old town"]);
        assert!(model.routes.entries[0].selected);
        assert_eq!(model.categories.entries.len(), 1);
    }

    #[test]
    fn active_entries_are_marked_selected() {
        let repo = repository();
        let mut selection = SelectionState::new();
        selection.select_route(Some(RouteId::new(1)));
        let model = menu_model(&repo, &selection, &MenuState::new());
        assert_eq!(model.routes.label, "Old town");
        assert!(!model.routes.entries[0].selected);
        assert!(model.routes.entries[1].selected);
    }

    #[test]
    fn category_label_falls_back_to_embedded_then_id() {
        let repo = repository();
        let mut selection = SelectionState::new();
        selection.select_category(Some(CategoryId::new(7)));
        let model = menu_model(&repo, &selection, &MenuState::new());
        assert_eq!(model.categories.label, "History");

        selection.select_category(Some(CategoryId::new(99)));
        let model = menu_model(&repo, &selection, &MenuState::new());
        assert_eq!(model.categories.label, "Category 99");
    }

    #[test]
    fn unresolvable_route_keeps_placeholder() {
        let mut selection = SelectionState::new();
        selection.select_route(Some(RouteId::new(42)));
        let model = menu_model(&repository(), &selection, &MenuState::new());
        assert_eq!(model.routes.label, ROUTE_PLACEHOLDER);
    }

    #[test]
    fn dropdown_flags_follow_menu_state() {
        let mut menus = MenuState::new();
        menus.toggle_menu();
        menus.toggle_category_dropdown();
        let model = menu_model(&repository(), &SelectionState::new(), &menus);
        assert!(model.open);
        assert!(!model.routes.open);
        assert!(model.categories.open);
    }
}
