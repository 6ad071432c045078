//! View composition: markers, route overlay, spot detail and menu model.

pub mod compose;
pub mod config;
pub mod detail;
pub mod markers;
pub mod menu;
pub mod route;
pub mod symbology;

pub use compose::{MapView, PanelView, ViewComposer, ViewModel};
pub use config::{MapConfig, TileSource};
pub use detail::{Carousel, CarouselSettings, Slide, SpotDetail};
pub use markers::Marker;
pub use menu::{Dropdown, DropdownEntry, MenuModel};
pub use route::Polyline;
pub use symbology::{IconKind, IconSpec, LineStyle, resolve_icon};
