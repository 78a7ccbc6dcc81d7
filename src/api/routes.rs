use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::AppState;
use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};
use crate::routes::{self, lists, proxy, recommendations, works};

/// Creates the application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health_check))
        .nest("/api/v1", api_routes())
        .merge(proxy_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
}

/// Engine routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/lists", get(lists::list_sources))
        .route("/lists/:id", get(lists::list_detail))
        .route("/awards", get(lists::award_categories))
        .route("/recommendations", post(recommendations::recommend))
        .route("/works/:id/rankings", get(works::rankings))
}

/// Same-origin proxies for the media database and its image CDN
fn proxy_routes() -> Router<AppState> {
    Router::new()
        .route("/api/tmdb", get(proxy::tmdb))
        .route("/api/tmdb-image", get(proxy::tmdb_image))
        .layer(CorsLayer::permissive())
}
