use std::env;
use std::time::Duration;

use crate::error::CollectionKind;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const DEFAULT_API_PREFIX: &str = "/api";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Where and how to reach the data service.
///
/// Passed to the data source at construction; nothing in the workspace reads
/// service settings from global state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: String,
    pub api_prefix: String,
    pub request_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Reads `SPOTMAP_API_BASE`, `SPOTMAP_API_PREFIX` and
    /// `SPOTMAP_FETCH_TIMEOUT_MS`, falling back to the defaults.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("SPOTMAP_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            api_prefix: env::var("SPOTMAP_API_PREFIX")
                .unwrap_or_else(|_| DEFAULT_API_PREFIX.to_string()),
            request_timeout: Duration::from_millis(env_var_u64(
                "SPOTMAP_FETCH_TIMEOUT_MS",
                DEFAULT_TIMEOUT_MS,
            )),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// `{base}{prefix}/{collection}/`
    pub fn collection_url(&self, collection: CollectionKind) -> String {
        let base = self.base_url.trim_end_matches('/');
        let prefix = self.api_prefix.trim_matches('/');
        if prefix.is_empty() {
            format!("{base}/{}/", collection.path())
        } else {
            format!("{base}/{prefix}/{}/", collection.path())
        }
    }
}

fn env_var_u64(key: &str, default: u64) -> u64 {
    parse_u64_or(env::var(key).ok().as_deref(), default)
}

fn parse_u64_or(value: Option<&str>, default: u64) -> u64 {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_urls_join_base_prefix_and_path() {
        let cfg = ServiceConfig::new("http://51.195.222.251:8000/");
        assert_eq!(
            cfg.collection_url(CollectionKind::Spots),
            "http://51.195.222.251:8000/api/spots/"
        );
        assert_eq!(
            cfg.collection_url(CollectionKind::Categories),
            "http://51.195.222.251:8000/api/categories/"
        );
    }

    #[test]
    fn empty_prefix_is_allowed() {
        let mut cfg = ServiceConfig::new("http://localhost:9000");
        cfg.api_prefix = String::new();
        assert_eq!(
            cfg.collection_url(CollectionKind::Routes),
            "http://localhost:9000/routes/"
        );
    }

    #[test]
    fn timeout_setting_falls_back_on_missing_or_bad_values() {
        assert_eq!(parse_u64_or(None, DEFAULT_TIMEOUT_MS), DEFAULT_TIMEOUT_MS);
        assert_eq!(parse_u64_or(Some("soon"), DEFAULT_TIMEOUT_MS), DEFAULT_TIMEOUT_MS);
        assert_eq!(parse_u64_or(Some("-5"), DEFAULT_TIMEOUT_MS), DEFAULT_TIMEOUT_MS);
        assert_eq!(parse_u64_or(Some(" 250 "), DEFAULT_TIMEOUT_MS), 250);
        assert_eq!(env_var_u64("SPOTMAP_UNSET_FOR_TESTS", 7), 7);
    }

    #[test]
    fn default_timeout_is_bounded() {
        assert_eq!(
            ServiceConfig::default().request_timeout,
            Duration::from_secs(10)
        );
    }
}
