//! Upstream media database abstraction
//!
//! The proxy endpoints forward requests through a `MediaProvider` so the upstream
//! (TMDB in production) can be replaced in tests.

use crate::error::AppResult;

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Raw upstream response, forwarded to the client as-is
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MediaProvider: Send + Sync {
    /// Fetches a JSON API path with the server-held credential injected
    async fn fetch_json(&self, path: &str, query: &[(String, String)])
        -> AppResult<UpstreamResponse>;

    /// Fetches an image from the CDN
    async fn fetch_image(&self, path: &str) -> AppResult<UpstreamResponse>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
