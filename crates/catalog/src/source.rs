//! Data source abstraction for the collection endpoints.
//!
//! - [`HttpSource`]: the remote data service over HTTP.
//! - [`StaticSource`]: canned payloads, for tests and offline demos.

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

use crate::config::ServiceConfig;
use crate::error::{CollectionKind, FetchError, FetchErrorKind};

/// Type alias for a boxed future that can be sent between threads.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Read-only access to the raw collection payloads.
///
/// Implementations must be `Send + Sync` so the three loads can run as
/// independent tasks. Methods return boxed futures for dyn-compatibility.
pub trait DataSource: Send + Sync {
    /// Fetches the raw body of one collection endpoint.
    fn fetch(&self, collection: CollectionKind) -> BoxFuture<'_, Result<Vec<u8>, FetchError>>;
}

/// The data service reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    config: ServiceConfig,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(config: ServiceConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { config, client })
    }
}

fn transport_error(collection: CollectionKind, err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::with_source(collection, FetchErrorKind::Timeout, "request timed out", err)
    } else {
        FetchError::with_source(collection, FetchErrorKind::Network, "HTTP request failed", err)
    }
}

impl DataSource for HttpSource {
    fn fetch(&self, collection: CollectionKind) -> BoxFuture<'_, Result<Vec<u8>, FetchError>> {
        let url = self.config.collection_url(collection);
        Box::pin(async move {
            let resp = self
                .client
                .get(&url)
                .header(reqwest::header::ACCEPT, "application/json")
                .send()
                .await
                .map_err(|e| transport_error(collection, e))?;

            if !resp.status().is_success() {
                return Err(FetchError::status(collection, resp.status().as_u16()));
            }

            let bytes = resp
                .bytes()
                .await
                .map_err(|e| transport_error(collection, e))?;
            Ok(bytes.to_vec())
        })
    }
}

#[derive(Debug, Clone)]
enum Canned {
    Body(Vec<u8>),
    Failure(FetchErrorKind, String),
}

/// In-memory source answering from canned payloads.
///
/// A collection without a canned answer fails with a 404 status error.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    answers: BTreeMap<CollectionKind, Canned>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(mut self, collection: CollectionKind, body: impl Into<Vec<u8>>) -> Self {
        self.answers.insert(collection, Canned::Body(body.into()));
        self
    }

    pub fn with_failure(
        mut self,
        collection: CollectionKind,
        kind: FetchErrorKind,
        message: impl Into<String>,
    ) -> Self {
        self.answers
            .insert(collection, Canned::Failure(kind, message.into()));
        self
    }
}

impl DataSource for StaticSource {
    fn fetch(&self, collection: CollectionKind) -> BoxFuture<'_, Result<Vec<u8>, FetchError>> {
        let answer = match self.answers.get(&collection) {
            Some(Canned::Body(body)) => Ok(body.clone()),
            Some(Canned::Failure(kind, message)) => {
                Err(FetchError::new(collection, *kind, message.clone()))
            }
            None => Err(FetchError::status(collection, 404)),
        };
        Box::pin(async move { answer })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    async fn listener() -> (TcpListener, ServiceConfig) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        (listener, ServiceConfig::new(format!("http://{addr}")))
    }

    #[tokio::test]
    async fn error_status_maps_to_status_kind() {
        let (listener, config) = listener().await;
        tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = sock.read(&mut buf).await;
            let _ = sock
                .write_all(
                    b"HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
                )
                .await;
            let _ = sock.shutdown().await;
        });

        let source = HttpSource::new(config).unwrap();
        let err = source.fetch(CollectionKind::Spots).await.unwrap_err();
        assert_eq!(err.collection, CollectionKind::Spots);
        assert_eq!(err.kind, FetchErrorKind::Status(500));
    }

    #[tokio::test]
    async fn silent_server_maps_to_timeout_kind() {
        let (listener, config) = listener().await;
        tokio::spawn(async move {
            let (_sock, _) = listener.accept().await.unwrap();
            std::future::pending::<()>().await;
        });

        let source = HttpSource::new(config.with_timeout(Duration::from_millis(50))).unwrap();
        let err = source.fetch(CollectionKind::Routes).await.unwrap_err();
        assert_eq!(err.kind, FetchErrorKind::Timeout);
    }

    #[tokio::test]
    async fn success_body_is_returned() {
        let (listener, config) = listener().await;
        tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = sock.read(&mut buf).await;
            let _ = sock
                .write_all(
                    b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 2\r\nconnection: close\r\n\r\n[]",
                )
                .await;
            let _ = sock.shutdown().await;
        });

        let source = HttpSource::new(config).unwrap();
        let body = source.fetch(CollectionKind::Categories).await.unwrap();
        assert_eq!(body, b"[]".to_vec());
    }

    #[tokio::test]
    async fn missing_canned_answer_is_not_found() {
        let err = StaticSource::new()
            .fetch(CollectionKind::Spots)
            .await
            .unwrap_err();
        assert_eq!(err.kind, FetchErrorKind::Status(404));
    }
}
