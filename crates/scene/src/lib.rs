//! Selection state, category filtering and panel/menu visibility.

pub mod query;
pub mod selection;
pub mod visibility;

pub use query::visible_spots;
pub use selection::{Axis, SelectionState, Transition};
pub use visibility::{MenuState, Panel, Toggle};
