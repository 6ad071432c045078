//! Domain records and the session repository that loads them.
//!
//! Spots, routes and categories are fetched once per session from a
//! [`DataSource`], validated at the boundary, and held read-only in a
//! [`Repository`].

pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod source;
pub mod wire;

pub use config::ServiceConfig;
pub use error::{CollectionKind, FetchError, FetchErrorKind, MalformedRecord};
pub use model::{Category, Route, Spot, SpotImage};
pub use repository::{
    LoadOutcome, LoadStatus, Repository, load_categories, load_collection, load_routes,
    load_spots,
};
pub use source::{BoxFuture, DataSource, HttpSource, StaticSource};
pub use wire::{Decoded, Record, decode_collection};
