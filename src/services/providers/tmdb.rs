//! TMDB provider
//!
//! API Flow:
//! 1. JSON: {api_url}/{path}?api_key=…&{query} → forwarded verbatim
//! 2. Images: {image_url}/{path} → forwarded with its content type

use crate::{
    config::Config,
    error::{AppError, AppResult},
    services::providers::{MediaProvider, UpstreamResponse},
};
use reqwest::{header::CONTENT_TYPE, Client as HttpClient, Response};

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
    image_url: String,
}

impl TmdbProvider {
    pub fn new(api_key: Option<String>, api_url: String, image_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            api_url,
            image_url,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.tmdb_api_key.clone(),
            config.tmdb_api_url.clone(),
            config.tmdb_image_url.clone(),
        )
    }

    /// Joins a base URL and a client-supplied sub-path
    fn upstream_url(base: &str, path: &str) -> String {
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn into_upstream(response: Response) -> AppResult<UpstreamResponse> {
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}

#[async_trait::async_trait]
impl MediaProvider for TmdbProvider {
    async fn fetch_json(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> AppResult<UpstreamResponse> {
        let api_key = self.api_key.as_deref().ok_or(AppError::MissingCredential)?;
        let url = Self::upstream_url(&self.api_url, path);

        tracing::debug!(path = %path, params = query.len(), "Forwarding TMDB request");

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", api_key)])
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(
                path = %path,
                status = response.status().as_u16(),
                "TMDB returned non-success status"
            );
        }

        Self::into_upstream(response).await
    }

    async fn fetch_image(&self, path: &str) -> AppResult<UpstreamResponse> {
        let url = Self::upstream_url(&self.image_url, path);

        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            tracing::warn!(
                path = %path,
                status = response.status().as_u16(),
                "TMDB image fetch failed"
            );
        }

        Self::into_upstream(response).await
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
