use std::fmt;

use serde::Serialize;

/// The three collections served by the data service.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CollectionKind {
    Spots,
    Routes,
    Categories,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 3] = [
        CollectionKind::Spots,
        CollectionKind::Routes,
        CollectionKind::Categories,
    ];

    /// Path segment of the collection endpoint.
    pub fn path(self) -> &'static str {
        match self {
            CollectionKind::Spots => "spots",
            CollectionKind::Routes => "routes",
            CollectionKind::Categories => "categories",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Connection, DNS or transport failure.
    Network,
    /// The service answered with a non-success status code.
    Status(u16),
    /// The request did not complete within the configured timeout.
    Timeout,
    /// The body was not a JSON array of records.
    Malformed,
}

/// Failure to load one collection.
///
/// Fetch errors are isolated per collection: the failed collection stays
/// empty and the others load normally.
#[derive(Debug)]
pub struct FetchError {
    pub collection: CollectionKind,
    pub kind: FetchErrorKind,
    pub message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl FetchError {
    pub fn new(
        collection: CollectionKind,
        kind: FetchErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            collection,
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        collection: CollectionKind,
        kind: FetchErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            collection,
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn status(collection: CollectionKind, code: u16) -> Self {
        Self::new(
            collection,
            FetchErrorKind::Status(code),
            format!("service answered {code}"),
        )
    }

    pub fn malformed(collection: CollectionKind, message: impl Into<String>) -> Self {
        Self::new(collection, FetchErrorKind::Malformed, message)
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "loading {} failed: {}", self.collection, self.message)
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self
            .source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// A single record that failed validation and was left out of its collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    pub collection: CollectionKind,
    /// Position of the record in the payload array.
    pub index: usize,
    pub reason: String,
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} record #{} skipped: {}",
            self.collection, self.index, self.reason
        )
    }
}

impl std::error::Error for MalformedRecord {}
