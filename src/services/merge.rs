use std::collections::HashMap;

use crate::{
    models::{MergedWork, RankField, RankedListEntry, SourceKind, SourceRank},
    services::datasets::Dataset,
};

/// Multi-genre compound tags treated as noise
const EXCLUDED_GENRES: &[&str] = &["Action & Adventure", "Sci-Fi & Fantasy", "War & Politics"];

const GENRE_SYNONYMS: &[(&str, &str)] = &[
    ("Science Fiction", "Sci-Fi"),
    ("Science-Fiction", "Sci-Fi"),
    ("Musical", "Music"),
    ("Children", "Family"),
    ("Kids", "Family"),
];

/// Canonical genre label, or `None` for blank and excluded labels
pub fn normalize_genre(label: &str) -> Option<String> {
    let label = label.trim();
    if label.is_empty() || EXCLUDED_GENRES.contains(&label) {
        return None;
    }

    let canonical = GENRE_SYNONYMS
        .iter()
        .find(|(synonym, _)| *synonym == label)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(label);

    Some(canonical.to_string())
}

/// Adds normalized labels not already present, keeping first-seen order
pub fn merge_genres(genres: &mut Vec<String>, incoming: &[String]) {
    for genre in incoming.iter().filter_map(|g| normalize_genre(g)) {
        if !genres.contains(&genre) {
            genres.push(genre);
        }
    }
}

/// Effective rank of a tied-rank list entry.
///
/// A "Tied" entry takes the rank of the closest preceding non-tied entry, looking back
/// only while the year stays the same. `None` when the year group starts with "Tied".
pub fn resolve_tied_rank(entries: &[RankedListEntry], idx: usize) -> Option<u32> {
    let entry = entries.get(idx)?;

    match &entry.rank {
        Some(RankField::Tied) => entries[..idx]
            .iter()
            .rev()
            .take_while(|prev| prev.year == entry.year)
            .find(|prev| !prev.rank.as_ref().is_some_and(RankField::is_tied))
            .and_then(|prev| prev.rank.as_ref().and_then(RankField::position)),
        Some(rank) => rank.position(),
        None => None,
    }
}

/// Rank-or-year value recorded for `entries[idx]` by a source of the given kind
pub fn source_rank(kind: SourceKind, entries: &[RankedListEntry], idx: usize) -> SourceRank {
    let entry = &entries[idx];

    if kind == SourceKind::TiedRanked {
        return SourceRank::YearRank {
            year: entry.year.clone(),
            rank: resolve_tied_rank(entries, idx),
        };
    }

    entry
        .rank
        .as_ref()
        .and_then(RankField::position)
        .or_else(|| entry.year_number())
        .map(|value| SourceRank::Plain { value })
        .unwrap_or(SourceRank::Unranked)
}

/// Merged works keyed by TMDB id, iterating in first-insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkIndex {
    works: Vec<MergedWork>,
    positions: HashMap<u64, usize>,
}

impl WorkIndex {
    pub fn len(&self) -> usize {
        self.works.len()
    }

    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }

    pub fn get(&self, tmdb_id: u64) -> Option<&MergedWork> {
        self.positions.get(&tmdb_id).map(|&pos| &self.works[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &MergedWork> {
        self.works.iter()
    }

    fn entry(&mut self, tmdb_id: u64, entry: &RankedListEntry) -> &mut MergedWork {
        let pos = match self.positions.get(&tmdb_id) {
            Some(&pos) => pos,
            None => {
                self.works.push(MergedWork::new(
                    tmdb_id,
                    entry.title.clone(),
                    entry.year.clone(),
                ));
                self.positions.insert(tmdb_id, self.works.len() - 1);
                self.works.len() - 1
            }
        };
        &mut self.works[pos]
    }
}

/// Folds every dataset into one index keyed by TMDB id.
///
/// Entries without an id are dropped. Works only ever accumulate: a source's first
/// rank value for a work is kept, award names and genres are unioned.
pub fn merge(datasets: &[Dataset]) -> WorkIndex {
    let mut index = WorkIndex::default();

    for dataset in datasets {
        let source = &dataset.source;
        let mut dropped = 0usize;

        for (idx, entry) in dataset.entries.iter().enumerate() {
            let Some(tmdb_id) = entry.tmdb_id else {
                dropped += 1;
                continue;
            };

            let work = index.entry(tmdb_id, entry);
            work.add_source(&source.id);
            merge_genres(&mut work.genres, &entry.genres);

            if !work.ranks.contains_key(&source.id) {
                let rank = source_rank(source.kind, &dataset.entries, idx);
                work.ranks.insert(source.id.clone(), rank);
            }

            if let Some(award) = entry.award.as_deref().map(str::trim).filter(|a| !a.is_empty()) {
                let awards = work.awards.entry(source.id.clone()).or_default();
                if !awards.iter().any(|a| a == award) {
                    awards.push(award.to_string());
                }
            }
        }

        if dropped > 0 {
            tracing::debug!(
                source = %source.id,
                dropped,
                "Dropped entries without a TMDB id"
            );
        }
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{find_source, SourceId};

    fn dataset(source: &str, json: &str) -> Dataset {
        let source = find_source(&SourceId::from(source)).unwrap();
        Dataset::from_json(source, json).unwrap()
    }

    #[test]
    fn test_entries_without_id_are_dropped() {
        let index = merge(&[dataset(
            "imdb-top-250",
            r#"[
                {"rank": 1, "title": "The Shawshank Redemption", "year": 1994, "tmdb_id": 278},
                {"rank": 2, "title": "Unmatched Film", "year": 1972},
                {"rank": 3, "title": "Null Id", "year": 1980, "tmdb_id": null}
            ]"#,
        )]);

        assert_eq!(index.len(), 1);
        assert!(index.get(278).is_some());
    }

    #[test]
    fn test_works_are_joined_across_sources() {
        let index = merge(&[
            dataset(
                "imdb-top-250",
                r#"[{"rank": 2, "title": "The Godfather", "year": 1972, "tmdb_id": 238, "genres": ["Drama", "Crime"]}]"#,
            ),
            dataset(
                "oscars",
                r#"[
                    {"Award": "Best Picture", "Film": "Godfather, The", "Year": "1972", "tmdb_id": 238},
                    {"Award": "Best Actor", "Film": "Godfather, The", "Year": "1972", "tmdb_id": 238, "name": "Marlon Brando"},
                    {"Award": "Best Picture", "Film": "Godfather, The", "Year": "1972", "tmdb_id": 238}
                ]"#,
            ),
        ]);

        let work = index.get(238).unwrap();
        assert_eq!(work.title, "The Godfather");
        assert_eq!(
            work.sources,
            vec![SourceId::from("imdb-top-250"), SourceId::from("oscars")]
        );
        assert_eq!(
            work.rank_in(&SourceId::from("imdb-top-250")),
            Some(&SourceRank::Plain { value: 2 })
        );
        assert_eq!(
            work.rank_in(&SourceId::from("oscars")),
            Some(&SourceRank::Plain { value: 1972 })
        );
        assert_eq!(
            work.awards_in(&SourceId::from("oscars")),
            &["Best Picture".to_string(), "Best Actor".to_string()]
        );
        assert_eq!(work.genres, vec!["Drama", "Crime"]);
    }

    #[test]
    fn test_unranked_sentinel() {
        let index = merge(&[dataset(
            "afi-100",
            r#"[{"title": "Undated", "tmdb_id": 42}]"#,
        )]);
        assert_eq!(
            index.get(42).unwrap().rank_in(&SourceId::from("afi-100")),
            Some(&SourceRank::Unranked)
        );
    }

    #[test]
    fn test_first_rank_per_source_wins() {
        let index = merge(&[dataset(
            "imdb-top-250",
            r#"[
                {"rank": 4, "title": "Duplicate", "year": 2000, "tmdb_id": 7},
                {"rank": 9, "title": "Duplicate", "year": 2000, "tmdb_id": 7}
            ]"#,
        )]);
        assert_eq!(
            index.get(7).unwrap().rank_in(&SourceId::from("imdb-top-250")),
            Some(&SourceRank::Plain { value: 4 })
        );
    }

    #[test]
    fn test_tied_ranks_inherit_preceding_rank() {
        let index = merge(&[dataset(
            "cahiers-top-ten",
            r#"[
                {"year": "2020s", "rank": "5", "title": "A", "tmdb_id": 1},
                {"year": "2020s", "rank": "Tied", "title": "B", "tmdb_id": 2},
                {"year": "2020s", "rank": "Tied", "title": "C", "tmdb_id": 3}
            ]"#,
        )]);

        let source = SourceId::from("cahiers-top-ten");
        for id in [1, 2, 3] {
            assert_eq!(
                index.get(id).unwrap().rank_in(&source),
                Some(&SourceRank::YearRank {
                    year: "2020s".to_string(),
                    rank: Some(5)
                })
            );
        }
    }

    #[test]
    fn test_tied_rank_does_not_cross_year_boundary() {
        let index = merge(&[dataset(
            "cahiers-top-ten",
            r#"[
                {"year": "2019", "rank": 1, "title": "A", "tmdb_id": 1},
                {"year": "2020", "rank": "Tied", "title": "B", "tmdb_id": 2}
            ]"#,
        )]);

        assert_eq!(
            index
                .get(2)
                .unwrap()
                .rank_in(&SourceId::from("cahiers-top-ten")),
            Some(&SourceRank::YearRank {
                year: "2020".to_string(),
                rank: None
            })
        );
    }

    #[test]
    fn test_tied_scan_skips_entries_without_id() {
        let source = find_source(&SourceId::from("cahiers-top-ten")).unwrap();
        let data = Dataset::from_json(
            source,
            r#"[
                {"year": "2021", "rank": 3, "title": "Unmatched"},
                {"year": "2021", "rank": "Tied", "title": "B", "tmdb_id": 2}
            ]"#,
        )
        .unwrap();

        assert_eq!(resolve_tied_rank(&data.entries, 1), Some(3));
    }

    #[test]
    fn test_genre_normalization_is_idempotent() {
        let mut genres = Vec::new();
        merge_genres(&mut genres, &["Science Fiction".to_string(), "Sci-Fi".to_string()]);
        assert_eq!(genres, vec!["Sci-Fi"]);

        let snapshot = genres.clone();
        merge_genres(&mut genres, &snapshot);
        assert_eq!(genres, snapshot);
    }

    #[test]
    fn test_genre_synonyms_and_blocklist() {
        assert_eq!(normalize_genre("Musical").as_deref(), Some("Music"));
        assert_eq!(normalize_genre("Kids").as_deref(), Some("Family"));
        assert_eq!(normalize_genre("Children").as_deref(), Some("Family"));
        assert_eq!(normalize_genre("Action & Adventure"), None);
        assert_eq!(normalize_genre("  "), None);
        assert_eq!(normalize_genre(" Drama ").as_deref(), Some("Drama"));
    }

    #[test]
    fn test_merge_is_deterministic() {
        let build = || {
            merge(&[
                dataset(
                    "letterboxd-top-250",
                    r#"[
                        {"rank": 1, "title": "Harakiri", "year": 1962, "tmdb_id": 14537, "genres": ["Drama", "History"]},
                        {"rank": 2, "title": "Seven Samurai", "year": 1954, "tmdb_id": 346, "genres": ["Action", "Drama"]}
                    ]"#,
                ),
                dataset(
                    "sight-and-sound-2022",
                    r#"[{"rank": 20, "title": "Seven Samurai", "year": 1954, "tmdb_id": 346, "genres": ["Drama"]}]"#,
                ),
            ])
        };

        let first = build();
        let second = build();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first.iter().collect::<Vec<_>>()).unwrap(),
            serde_json::to_string(&second.iter().collect::<Vec<_>>()).unwrap()
        );
        let ids: Vec<u64> = first.iter().map(|w| w.tmdb_id).collect();
        assert_eq!(ids, vec![14537, 346]);
    }
}
