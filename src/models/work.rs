use serde::Serialize;
use std::collections::BTreeMap;

use super::SourceId;

/// Rank-or-year value a source recorded for a work
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceRank {
    /// Rank in a plain list, or the release year when the source has no rank
    Plain { value: u32 },
    /// Tied-rank list value; `rank` is `None` when no untied rank precedes it in its year
    YearRank { year: String, rank: Option<u32> },
    Unranked,
}

impl SourceRank {
    pub fn is_ranked(&self) -> bool {
        !matches!(self, SourceRank::Unranked)
    }
}

/// A work aggregated across every source list that mentions it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedWork {
    pub tmdb_id: u64,
    pub title: String,
    pub year: String,
    /// Source ids in the order they first contributed
    pub sources: Vec<SourceId>,
    pub ranks: BTreeMap<SourceId, SourceRank>,
    pub awards: BTreeMap<SourceId, Vec<String>>,
    pub genres: Vec<String>,
}

impl MergedWork {
    pub fn new(tmdb_id: u64, title: String, year: String) -> Self {
        Self {
            tmdb_id,
            title,
            year,
            sources: Vec::new(),
            ranks: BTreeMap::new(),
            awards: BTreeMap::new(),
            genres: Vec::new(),
        }
    }

    pub fn in_source(&self, source: &SourceId) -> bool {
        self.sources.contains(source)
    }

    pub fn add_source(&mut self, source: &SourceId) {
        if !self.in_source(source) {
            self.sources.push(source.clone());
        }
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    pub fn rank_in(&self, source: &SourceId) -> Option<&SourceRank> {
        self.ranks.get(source)
    }

    pub fn awards_in(&self, source: &SourceId) -> &[String] {
        self.awards.get(source).map(Vec::as_slice).unwrap_or(&[])
    }
}
