//! Session runtime: actions, load orchestration and the render contract.

pub mod action;
pub mod event_bus;
pub mod loader;
pub mod session;
pub mod surface;

pub use action::Action;
pub use event_bus::{DEFAULT_EVENT_CAPACITY, Event, EventBus};
pub use loader::spawn_loads;
pub use session::Session;
pub use surface::{MenuCallbacks, RenderSurface, render};
