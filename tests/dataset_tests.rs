use std::path::PathBuf;

use marquee_api::models::{AwardType, RecommendationQuery, SourceId, SourceRank};
use marquee_api::services::recommendations::get_recommendations;
use marquee_api::services::Catalog;

fn bundled_catalog() -> Catalog {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data");
    Catalog::load(&dir).unwrap()
}

#[test]
fn test_bundled_datasets_load() {
    let catalog = bundled_catalog();
    assert!(catalog.datasets().iter().all(|d| !d.entries.is_empty()));

    let parasite = catalog.index().get(496243).unwrap();
    for source in ["imdb-top-250", "letterboxd-top-250", "oscars", "cannes", "bafta"] {
        assert!(parasite.in_source(&SourceId::from(source)), "missing {source}");
    }
}

#[test]
fn test_bundled_tied_ranks_resolve() {
    let catalog = bundled_catalog();
    let source = SourceId::from("cahiers-top-ten");

    let petite_maman = catalog.index().get(736069).unwrap();
    assert_eq!(
        petite_maman.rank_in(&source),
        Some(&SourceRank::YearRank {
            year: "2020s".to_string(),
            rank: Some(5)
        })
    );
}

#[test]
fn test_bundled_palme_and_best_picture() {
    let catalog = bundled_catalog();
    let query = RecommendationQuery {
        awards: [
            (AwardType::Oscar, vec!["Best Picture".to_string()]),
            (AwardType::Cannes, vec!["Palme d'Or".to_string()]),
        ]
        .into_iter()
        .collect(),
        ..Default::default()
    };

    let page = get_recommendations(&catalog, &query, 20).unwrap();
    let ids: Vec<u64> = page.works.iter().map(|w| w.tmdb_id).collect();
    assert_eq!(ids, vec![496243]);
}

#[test]
fn test_bundled_genre_synonyms_merge() {
    let catalog = bundled_catalog();
    let odyssey = catalog.index().get(62).unwrap();
    assert!(odyssey.has_genre("Sci-Fi"));
    assert!(!odyssey.has_genre("Science Fiction"));
}
