use std::collections::BTreeMap;

use crate::{
    models::{AwardType, MergedWork, SourceId},
    services::{awards::award_matches, merge::WorkIndex},
};

/// Active constraints of a recommendation query
#[derive(Debug, Clone, Copy)]
pub struct FilterCriteria<'q> {
    pub sources: &'q [SourceId],
    pub awards: &'q BTreeMap<AwardType, Vec<String>>,
    pub genres: &'q [String],
}

impl FilterCriteria<'_> {
    fn has_award_constraint(&self) -> bool {
        self.awards.values().any(|options| !options.is_empty())
    }

    /// No source, award, or genre constraint selected
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty() && self.genres.is_empty() && !self.has_award_constraint()
    }
}

fn passes_sources(work: &MergedWork, sources: &[SourceId]) -> bool {
    sources.iter().all(|source| work.in_source(source))
}

// AND across award types and AND across the options selected within one type
fn passes_awards(work: &MergedWork, awards: &BTreeMap<AwardType, Vec<String>>) -> bool {
    awards.iter().all(|(award_type, options)| {
        let recorded = work.awards_in(&award_type.source_id());
        options.iter().all(|option| {
            recorded
                .iter()
                .any(|award| award_matches(*award_type, option, award))
        })
    })
}

fn passes_genres(work: &MergedWork, genres: &[String]) -> bool {
    genres.iter().all(|genre| work.has_genre(genre))
}

/// Works satisfying every constraint, in index order.
///
/// Nothing is returned until at least one constraint is active.
pub fn filter<'a>(index: &'a WorkIndex, criteria: &FilterCriteria<'_>) -> Vec<&'a MergedWork> {
    if criteria.is_empty() {
        return Vec::new();
    }

    index
        .iter()
        .filter(|work| passes_sources(work, criteria.sources))
        .filter(|work| passes_awards(work, criteria.awards))
        .filter(|work| passes_genres(work, criteria.genres))
        .collect()
}
