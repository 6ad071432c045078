use foundation::{CategoryId, IdParseError, RouteId, SpotId, parse_selection};

/// Outcome of writing one selection axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transition<T> {
    /// The axis already held the requested value.
    Unchanged,
    Changed { from: Option<T>, to: Option<T> },
}

impl<T> Transition<T> {
    pub fn is_changed(&self) -> bool {
        matches!(self, Transition::Changed { .. })
    }
}

/// One selection axis. `None` is a valid value on every axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Axis<T> {
    active: Option<T>,
}

impl<T> Default for Axis<T> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<T: Copy + PartialEq> Axis<T> {
    pub fn active(&self) -> Option<T> {
        self.active
    }

    /// Writes `next`, replacing the current value directly.
    ///
    /// Writing the value the axis already holds is a no-op.
    pub fn set(&mut self, next: Option<T>) -> Transition<T> {
        if self.active == next {
            return Transition::Unchanged;
        }
        let from = std::mem::replace(&mut self.active, next);
        Transition::Changed { from, to: next }
    }
}

/// The three independent selections of a viewing session.
///
/// Every transition is synchronous and total. Ids are accepted whether or
/// not they resolve against the repository; resolution happens when the view
/// is composed. No axis ever writes another.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    category: Axis<CategoryId>,
    route: Axis<RouteId>,
    spot: Axis<SpotId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_category(&self) -> Option<CategoryId> {
        self.category.active()
    }

    pub fn active_route(&self) -> Option<RouteId> {
        self.route.active()
    }

    pub fn active_spot(&self) -> Option<SpotId> {
        self.spot.active()
    }

    /// The detail panel is open exactly while a spot is selected.
    pub fn panel_open(&self) -> bool {
        self.spot.active().is_some()
    }

    /// Opens the panel on `spot`, or swaps A→B in place if another spot is shown.
    pub fn select_spot(&mut self, spot: SpotId) -> Transition<SpotId> {
        self.spot.set(Some(spot))
    }

    /// The only way to close the detail panel.
    pub fn close_panel(&mut self) -> Transition<SpotId> {
        self.spot.set(None)
    }

    pub fn select_route(&mut self, route: Option<RouteId>) -> Transition<RouteId> {
        self.route.set(route)
    }

    pub fn select_category(&mut self, category: Option<CategoryId>) -> Transition<CategoryId> {
        self.category.set(category)
    }

    /// Category selection arriving as text, as menus and query strings deliver it.
    ///
    /// Text that does not normalize to a numeric id is rejected before the
    /// transition, leaving the selection untouched.
    pub fn select_category_text(
        &mut self,
        text: &str,
    ) -> Result<Transition<CategoryId>, IdParseError> {
        let category = parse_selection::<CategoryId>(text)?;
        Ok(self.select_category(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_every_axis_empty() {
        let s = SelectionState::new();
        assert_eq!(s.active_category(), None);
        assert_eq!(s.active_route(), None);
        assert_eq!(s.active_spot(), None);
        assert!(!s.panel_open());
    }

    #[test]
    fn spot_swap_has_no_intermediate_none() {
        let mut s = SelectionState::new();
        let a = SpotId::new(1);
        let b = SpotId::new(2);
        s.select_spot(a);
        let t = s.select_spot(b);
        assert_eq!(
            t,
            Transition::Changed {
                from: Some(a),
                to: Some(b)
            }
        );
        assert_eq!(s.active_spot(), Some(b));
        assert!(s.panel_open());
    }

    #[test]
    fn close_panel_always_clears_spot() {
        let mut s = SelectionState::new();
        assert_eq!(s.close_panel(), Transition::Unchanged);
        s.select_spot(SpotId::new(3));
        assert!(s.close_panel().is_changed());
        assert_eq!(s.active_spot(), None);
        assert!(!s.panel_open());
    }

    #[test]
    fn selecting_same_route_twice_is_idempotent() {
        let mut once = SelectionState::new();
        once.select_route(Some(RouteId::new(4)));

        let mut twice = SelectionState::new();
        assert!(twice.select_route(Some(RouteId::new(4))).is_changed());
        assert_eq!(twice.select_route(Some(RouteId::new(4))), Transition::Unchanged);
        assert_eq!(once, twice);

        assert!(twice.select_route(None).is_changed());
        assert_eq!(twice.active_route(), None);
    }

    #[test]
    fn axes_are_independent() {
        let mut s = SelectionState::new();
        s.select_spot(SpotId::new(1));
        s.select_route(Some(RouteId::new(2)));
        s.select_category(Some(CategoryId::new(3)));

        s.select_category(None);
        s.select_route(None);
        assert_eq!(s.active_spot(), Some(SpotId::new(1)));

        s.close_panel();
        s.select_category(Some(CategoryId::new(9)));
        assert_eq!(s.active_category(), Some(CategoryId::new(9)));
        assert_eq!(s.active_route(), None);
    }

    #[test]
    fn unknown_ids_are_accepted() {
        let mut s = SelectionState::new();
        s.select_spot(SpotId::new(999_999));
        s.select_route(Some(RouteId::new(u64::MAX)));
        assert_eq!(s.active_spot(), Some(SpotId::new(999_999)));
        assert_eq!(s.active_route(), Some(RouteId::new(u64::MAX)));
    }

    #[test]
    fn textual_category_is_normalized() {
        let mut s = SelectionState::new();
        assert!(s.select_category_text("5").unwrap().is_changed());
        assert_eq!(s.active_category(), Some(CategoryId::new(5)));
        assert_eq!(s.select_category_text(" 5 ").unwrap(), Transition::Unchanged);

        assert!(s.select_category_text("parks").is_err());
        assert_eq!(s.active_category(), Some(CategoryId::new(5)));

        s.select_category_text("").unwrap();
        assert_eq!(s.active_category(), None);
    }
}
