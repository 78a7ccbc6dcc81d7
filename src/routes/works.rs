use axum::{
    extract::{Path, State},
    Json,
};

use crate::{api::AppState, models::RankingBadge, services::rankings};

/// Handler for "ranked #N on list X" badges of a work
pub async fn rankings(
    State(state): State<AppState>,
    Path(tmdb_id): Path<u64>,
) -> Json<Vec<RankingBadge>> {
    Json(rankings::badges(&state.catalog, tmdb_id))
}
