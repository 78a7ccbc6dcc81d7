use crate::{
    models::{RankField, RankingBadge, SourceKind, SourceRank},
    services::{
        datasets::{Catalog, Dataset},
        merge::resolve_tied_rank,
    },
};

/// Rank of a work in one ranked list; first matching entry wins.
///
/// Award corpora have no ranks and always return `None`.
pub fn rank_of(dataset: &Dataset, tmdb_id: u64) -> Option<SourceRank> {
    let idx = dataset
        .entries
        .iter()
        .position(|entry| entry.tmdb_id == Some(tmdb_id))?;
    let entry = &dataset.entries[idx];

    match dataset.source.kind {
        SourceKind::Ranked => entry
            .rank
            .as_ref()
            .and_then(RankField::position)
            .map(|value| SourceRank::Plain { value }),
        SourceKind::TiedRanked => Some(SourceRank::YearRank {
            year: entry.year.clone(),
            rank: resolve_tied_rank(&dataset.entries, idx),
        }),
        SourceKind::Award(_) => None,
    }
}

/// Badges for every ranked list that ranks the work, in registry order
pub fn badges(catalog: &Catalog, tmdb_id: u64) -> Vec<RankingBadge> {
    catalog
        .datasets()
        .iter()
        .filter_map(|dataset| {
            rank_of(dataset, tmdb_id).map(|rank| RankingBadge {
                source: dataset.source.id.clone(),
                name: dataset.source.name.clone(),
                rank,
            })
        })
        .collect()
}
