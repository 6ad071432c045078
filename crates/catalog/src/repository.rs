use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use foundation::{CategoryId, RouteId, SpotId};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{CollectionKind, FetchError};
use crate::model::{Category, Route, Spot};
use crate::source::DataSource;
use crate::wire::{Decoded, Record, decode_collection};

async fn load<T: Record, S: DataSource + ?Sized>(source: &S) -> Result<Decoded<T>, FetchError> {
    let body = source.fetch(T::KIND).await?;
    decode_collection::<T>(&body)
}

pub async fn load_spots<S: DataSource + ?Sized>(source: &S) -> Result<Decoded<Spot>, FetchError> {
    load::<Spot, S>(source).await
}

pub async fn load_routes<S: DataSource + ?Sized>(source: &S) -> Result<Decoded<Route>, FetchError> {
    load::<Route, S>(source).await
}

pub async fn load_categories<S: DataSource + ?Sized>(
    source: &S,
) -> Result<Decoded<Category>, FetchError> {
    load::<Category, S>(source).await
}

/// Completion of one collection load, ready to be recorded in a [`Repository`].
#[derive(Debug)]
pub enum LoadOutcome {
    Spots(Result<Decoded<Spot>, FetchError>),
    Routes(Result<Decoded<Route>, FetchError>),
    Categories(Result<Decoded<Category>, FetchError>),
}

impl LoadOutcome {
    pub fn collection(&self) -> CollectionKind {
        match self {
            LoadOutcome::Spots(_) => CollectionKind::Spots,
            LoadOutcome::Routes(_) => CollectionKind::Routes,
            LoadOutcome::Categories(_) => CollectionKind::Categories,
        }
    }
}

/// Runs the load for `collection` and wraps the result.
pub async fn load_collection<S: DataSource + ?Sized>(
    source: &S,
    collection: CollectionKind,
) -> LoadOutcome {
    match collection {
        CollectionKind::Spots => LoadOutcome::Spots(load_spots(source).await),
        CollectionKind::Routes => LoadOutcome::Routes(load_routes(source).await),
        CollectionKind::Categories => LoadOutcome::Categories(load_categories(source).await),
    }
}

/// Summary of where a collection is in its one-shot lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LoadStatus {
    Pending,
    Loaded { records: usize, skipped: usize },
    Failed { message: String },
}

#[derive(Debug)]
enum LoadState {
    Pending,
    Loaded { skipped: usize },
    Failed(FetchError),
}

#[derive(Debug)]
struct Collection<T: Record> {
    state: LoadState,
    records: Vec<T>,
    index: BTreeMap<T::Id, usize>,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self {
            state: LoadState::Pending,
            records: Vec::new(),
            index: BTreeMap::new(),
        }
    }
}

impl<T: Record> Collection<T> {
    fn settle(&mut self, result: Result<Decoded<T>, FetchError>) -> bool {
        if !matches!(self.state, LoadState::Pending) {
            debug!(collection = %T::KIND, "collection already settled; late load ignored");
            return false;
        }
        match result {
            Ok(decoded) => {
                let mut records = Vec::with_capacity(decoded.records.len());
                let mut index = BTreeMap::new();
                for record in decoded.records {
                    match index.entry(record.id()) {
                        Entry::Vacant(slot) => {
                            slot.insert(records.len());
                            records.push(record);
                        }
                        Entry::Occupied(_) => {
                            warn!(collection = %T::KIND, id = %record.id(), "duplicate id; first record wins");
                        }
                    }
                }
                info!(
                    collection = %T::KIND,
                    records = records.len(),
                    skipped = decoded.quarantined.len(),
                    "collection loaded"
                );
                self.records = records;
                self.index = index;
                self.state = LoadState::Loaded {
                    skipped: decoded.quarantined.len(),
                };
            }
            Err(err) => {
                warn!(collection = %T::KIND, "{err}");
                self.state = LoadState::Failed(err);
            }
        }
        true
    }

    fn get(&self, id: T::Id) -> Option<&T> {
        self.index.get(&id).and_then(|&pos| self.records.get(pos))
    }

    fn status(&self) -> LoadStatus {
        match &self.state {
            LoadState::Pending => LoadStatus::Pending,
            LoadState::Loaded { skipped } => LoadStatus::Loaded {
                records: self.records.len(),
                skipped: *skipped,
            },
            LoadState::Failed(err) => LoadStatus::Failed {
                message: err.to_string(),
            },
        }
    }

    fn error(&self) -> Option<&FetchError> {
        match &self.state {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Session-scoped holder of the three read-only collections.
///
/// Each collection is settled at most once: the first recorded outcome wins
/// and later outcomes are ignored. A failed collection stays empty. Records
/// are never modified after they are recorded; readers only get shared slices.
#[derive(Debug, Default)]
pub struct Repository {
    spots: Collection<Spot>,
    routes: Collection<Route>,
    categories: Collection<Category>,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a load completion. Returns `true` if the repository changed.
    pub fn record(&mut self, outcome: LoadOutcome) -> bool {
        match outcome {
            LoadOutcome::Spots(result) => self.spots.settle(result),
            LoadOutcome::Routes(result) => self.routes.settle(result),
            LoadOutcome::Categories(result) => self.categories.settle(result),
        }
    }

    pub fn spots(&self) -> &[Spot] {
        &self.spots.records
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes.records
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories.records
    }

    pub fn spot(&self, id: SpotId) -> Option<&Spot> {
        self.spots.get(id)
    }

    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(id)
    }

    pub fn status(&self, collection: CollectionKind) -> LoadStatus {
        match collection {
            CollectionKind::Spots => self.spots.status(),
            CollectionKind::Routes => self.routes.status(),
            CollectionKind::Categories => self.categories.status(),
        }
    }

    pub fn error(&self, collection: CollectionKind) -> Option<&FetchError> {
        match collection {
            CollectionKind::Spots => self.spots.error(),
            CollectionKind::Routes => self.routes.error(),
            CollectionKind::Categories => self.categories.error(),
        }
    }

    /// `true` once every collection has either loaded or failed.
    pub fn is_settled(&self) -> bool {
        CollectionKind::ALL
            .iter()
            .all(|&kind| self.status(kind) != LoadStatus::Pending)
    }
}
