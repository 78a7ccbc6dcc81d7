use std::cmp::Ordering;

use crate::models::{MergedWork, SortOption, SourceId, SourceRank};

const TRAILING_ARTICLES: &[(&str, &str)] = &[(", The", "The"), (", An", "An"), (", A", "A")];

/// Moves a trailing article to the front: `"Godfather, The"` -> `"The Godfather"`
pub fn display_title(title: &str) -> String {
    TRAILING_ARTICLES
        .iter()
        .find_map(|(suffix, article)| {
            title
                .strip_suffix(suffix)
                .map(|rest| format!("{} {}", article, rest))
        })
        .unwrap_or_else(|| title.to_string())
}

fn compare_titles(a: &MergedWork, b: &MergedWork) -> Ordering {
    display_title(&a.title)
        .to_lowercase()
        .cmp(&display_title(&b.title).to_lowercase())
}

// Years are compared as strings ("1994/95", "2020s")
fn compare_years(a: &MergedWork, b: &MergedWork) -> Ordering {
    a.year.cmp(&b.year)
}

/// Ranked works first; plain ranks ascending, tied-rank values by year descending then rank
fn compare_source_ranks(a: Option<&SourceRank>, b: Option<&SourceRank>) -> Ordering {
    let a = a.filter(|rank| rank.is_ranked());
    let b = b.filter(|rank| rank.is_ranked());

    match (a, b) {
        (Some(SourceRank::Plain { value: x }), Some(SourceRank::Plain { value: y })) => x.cmp(y),
        (
            Some(SourceRank::YearRank { year: year_a, rank: rank_a }),
            Some(SourceRank::YearRank { year: year_b, rank: rank_b }),
        ) => year_b.cmp(year_a).then_with(|| rank_a.cmp(rank_b)),
        (Some(_), Some(_)) => Ordering::Equal,
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort of filtered works.
///
/// `Rank` uses the primary source's stored value and falls back to year descending
/// when no source is selected.
pub fn sort_works<'a>(
    mut works: Vec<&'a MergedWork>,
    option: SortOption,
    primary_source: Option<&SourceId>,
) -> Vec<&'a MergedWork> {
    match option {
        SortOption::TitleAsc => works.sort_by(|a, b| compare_titles(a, b)),
        SortOption::YearAsc => works.sort_by(|a, b| compare_years(a, b)),
        SortOption::YearDesc => works.sort_by(|a, b| compare_years(b, a)),
        SortOption::Rank => match primary_source {
            Some(source) => {
                works.sort_by(|a, b| compare_source_ranks(a.rank_in(source), b.rank_in(source)))
            }
            None => works.sort_by(|a, b| compare_years(b, a)),
        },
    }

    works
}
