use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    api::AppState,
    error::{AppError, AppResult},
    models::{
        find_source, registry, AwardCategory, ListDetail, ListSummary, ListsResponse,
        RecommendationQuery, SortOption, SourceId,
    },
    services::{awards, recommendations},
};

#[derive(Debug, Deserialize)]
pub struct ListDetailParams {
    pages: Option<usize>,
    sort: Option<SortOption>,
    locale: Option<String>,
}

/// Registered source lists with their entry counts
pub async fn list_sources(State(state): State<AppState>) -> Json<ListsResponse> {
    let lists = registry()
        .into_iter()
        .map(|list| {
            let entry_count = state
                .catalog
                .dataset(&list.id)
                .map(|d| d.entries.len())
                .unwrap_or(0);
            ListSummary { list, entry_count }
        })
        .collect();

    Json(ListsResponse {
        lists,
        loaded_at: state.catalog.loaded_at(),
    })
}

/// One list's works, ranked by that list
pub async fn list_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ListDetailParams>,
) -> AppResult<Json<ListDetail>> {
    let id = SourceId::new(id);
    let list =
        find_source(&id).ok_or_else(|| AppError::NotFound(format!("Source list {}", id)))?;

    let query = RecommendationQuery {
        sources: vec![id],
        sort: params.sort.unwrap_or_default(),
        pages: params.pages,
        locale: params.locale,
        ..Default::default()
    };
    let page = recommendations::get_recommendations(&state.catalog, &query, state.page_size)?;

    Ok(Json(ListDetail { list, page }))
}

/// Award types and selectable options
pub async fn award_categories() -> Json<Vec<AwardCategory>> {
    Json(awards::categories())
}
