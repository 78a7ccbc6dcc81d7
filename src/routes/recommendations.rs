use axum::{extract::State, Extension, Json};

use crate::{
    api::AppState,
    error::AppResult,
    middleware::request_id::RequestId,
    models::{RecommendationPage, RecommendationQuery},
    services::recommendations,
};

/// Handler for recommendations endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(query): Json<RecommendationQuery>,
) -> AppResult<Json<RecommendationPage>> {
    tracing::info!(
        request_id = %request_id,
        sources = query.sources.len(),
        award_types = query.awards.len(),
        genres = query.genres.len(),
        "Processing recommendation request"
    );

    let page = recommendations::get_recommendations(&state.catalog, &query, state.page_size)?;

    tracing::info!(
        request_id = %request_id,
        total = page.total,
        shown = page.shown,
        "Recommendations completed"
    );

    Ok(Json(page))
}
