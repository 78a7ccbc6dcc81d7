use crate::{
    error::{AppError, AppResult},
    models::{find_source, RecommendationPage, RecommendationQuery},
    services::{
        datasets::Catalog,
        filter::{filter, FilterCriteria},
        localization::localize_work,
        merge::merge_genres,
        pagination::Paginator,
        sort::sort_works,
    },
};

/// Runs a recommendation query against the merged catalog
///
/// Filters the merged index by the selected lists, award options and genres, sorts
/// the matches (the first selected list is the primary rank key), and reveals the
/// requested number of page increments. Award names on the returned page are
/// translated when a locale is given.
pub fn get_recommendations(
    catalog: &Catalog,
    query: &RecommendationQuery,
    page_size: usize,
) -> AppResult<RecommendationPage> {
    if let Some(unknown) = query.sources.iter().find(|id| find_source(id).is_none()) {
        return Err(AppError::InvalidInput(format!("Unknown source list: {}", unknown)));
    }

    let mut sources = query.sources.clone();
    let mut seen = std::collections::HashSet::new();
    sources.retain(|id| seen.insert(id.clone()));

    // Requested genres use the same labels as the merged works
    let mut genres = Vec::new();
    merge_genres(&mut genres, &query.genres);

    let criteria = FilterCriteria {
        sources: &sources,
        awards: &query.awards,
        genres: &genres,
    };

    let matches = if query.unknown_award_types.is_empty() {
        filter(catalog.index(), &criteria)
    } else {
        tracing::debug!(
            award_types = ?query.unknown_award_types,
            "Unknown award types match no work"
        );
        Vec::new()
    };
    let sorted = sort_works(matches, query.sort, query.primary_source());

    let paginator = Paginator::with_pages(page_size, query.pages.unwrap_or(1));
    let visible = paginator.visible(&sorted);

    let works = visible
        .iter()
        .map(|work| match query.locale.as_deref() {
            Some(locale) => localize_work(work, locale),
            None => (*work).clone(),
        })
        .collect();

    tracing::debug!(
        total = sorted.len(),
        shown = visible.len(),
        sort = ?query.sort,
        "Recommendations computed"
    );

    Ok(RecommendationPage {
        total: sorted.len(),
        shown: visible.len(),
        has_more: paginator.has_more(sorted.len()),
        works,
    })
}
