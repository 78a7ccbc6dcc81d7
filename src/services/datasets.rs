use chrono::{DateTime, Utc};
use std::path::Path;
use std::sync::OnceLock;

use crate::{
    error::{AppError, AppResult},
    models::{registry, RankedListEntry, SourceId, SourceList},
    services::merge::{merge, WorkIndex},
};

/// Entries of one source list, in file order
#[derive(Debug, Clone)]
pub struct Dataset {
    pub source: SourceList,
    pub entries: Vec<RankedListEntry>,
}

impl Dataset {
    pub fn new(source: SourceList, entries: Vec<RankedListEntry>) -> Self {
        Self { source, entries }
    }

    /// Parses a JSON array of entries
    pub fn from_json(source: SourceList, json: &str) -> AppResult<Self> {
        let entries: Vec<RankedListEntry> = serde_json::from_str(json).map_err(|e| {
            AppError::Dataset(format!("{}: {}", source.id, e))
        })?;
        Ok(Self::new(source, entries))
    }
}

/// Every static dataset, loaded wholesale; the merged index is built on first use
#[derive(Debug)]
pub struct Catalog {
    datasets: Vec<Dataset>,
    index: OnceLock<WorkIndex>,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    pub fn from_datasets(datasets: Vec<Dataset>) -> Self {
        Self {
            datasets,
            index: OnceLock::new(),
            loaded_at: Utc::now(),
        }
    }

    /// Loads `<dir>/<source-id>.json` for every registered source
    ///
    /// Missing files leave the source empty; unreadable or malformed files fail the load.
    pub fn load(dir: &Path) -> AppResult<Self> {
        let mut datasets = Vec::new();

        for source in registry() {
            let path = dir.join(format!("{}.json", source.id));

            if !path.exists() {
                tracing::warn!(
                    source = %source.id,
                    path = %path.display(),
                    "Dataset file missing, source will be empty"
                );
                datasets.push(Dataset::new(source, Vec::new()));
                continue;
            }

            let json = std::fs::read_to_string(&path).map_err(|e| {
                AppError::Dataset(format!("failed to read {}: {}", path.display(), e))
            })?;
            let dataset = Dataset::from_json(source, &json)?;

            tracing::debug!(
                source = %dataset.source.id,
                entries = dataset.entries.len(),
                "Loaded dataset"
            );
            datasets.push(dataset);
        }

        tracing::info!(
            sources = datasets.len(),
            entries = datasets.iter().map(|d| d.entries.len()).sum::<usize>(),
            "Catalog loaded"
        );

        Ok(Self::from_datasets(datasets))
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    pub fn dataset(&self, source: &SourceId) -> Option<&Dataset> {
        self.datasets.iter().find(|d| &d.source.id == source)
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Merged index over all datasets, built once
    pub fn index(&self) -> &WorkIndex {
        self.index.get_or_init(|| {
            let index = merge(&self.datasets);
            tracing::info!(works = index.len(), "Built merged work index");
            index
        })
    }
}
