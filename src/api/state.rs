use std::sync::Arc;

use crate::config::Config;
use crate::services::providers::{MediaProvider, TmdbProvider};
use crate::services::Catalog;

/// Shared application state
///
/// The catalog is immutable after loading, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub media: Arc<dyn MediaProvider>,
    pub page_size: usize,
}

impl AppState {
    pub fn new(catalog: Catalog, media: Arc<dyn MediaProvider>, page_size: usize) -> Self {
        Self {
            catalog: Arc::new(catalog),
            media,
            page_size,
        }
    }

    /// Loads the datasets and builds the TMDB provider from configuration
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let catalog = Catalog::load(&config.data_dir)?;
        let media: Arc<dyn MediaProvider> = Arc::new(TmdbProvider::from_config(config));

        tracing::info!(
            provider = media.name(),
            credential = config.tmdb_api_key.is_some(),
            "Media provider configured"
        );

        Ok(Self::new(catalog, media, config.page_size))
    }
}
