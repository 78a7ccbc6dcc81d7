use axum::{
    extract::{Query, State},
    http::{
        header::{CACHE_CONTROL, CONTENT_TYPE},
        HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde_json::json;

use crate::{
    api::AppState,
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    services::providers::UpstreamResponse,
};

const IMAGE_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// Splits the `path` parameter from the parameters forwarded upstream
fn split_path(params: Vec<(String, String)>) -> AppResult<(String, Vec<(String, String)>)> {
    let (path, rest): (Vec<_>, Vec<_>) = params.into_iter().partition(|(key, _)| key == "path");

    let path = path
        .into_iter()
        .map(|(_, value)| value)
        .find(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::InvalidInput("Missing required query parameter: path".to_string()))?;

    Ok((path, rest))
}

fn upstream_status(upstream: &UpstreamResponse) -> AppResult<StatusCode> {
    StatusCode::from_u16(upstream.status).map_err(|_| {
        AppError::ExternalApi(format!("Upstream returned invalid status {}", upstream.status))
    })
}

fn with_content_type(mut response: Response, content_type: &str) -> Response {
    if let Ok(value) = HeaderValue::from_str(content_type) {
        response.headers_mut().insert(CONTENT_TYPE, value);
    }
    response
}

/// Forwards `GET /api/tmdb?path=<sub-path>&…` to the media database API
///
/// The upstream body and status are returned verbatim, including non-2xx answers.
pub async fn tmdb(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<Response> {
    let (path, forwarded) = split_path(params)?;

    let upstream = state.media.fetch_json(&path, &forwarded).await?;
    let status = upstream_status(&upstream)?;

    tracing::info!(
        request_id = %request_id,
        path = %path,
        status = upstream.status,
        "Proxied media API request"
    );

    let content_type = upstream
        .content_type
        .clone()
        .unwrap_or_else(|| "application/json".to_string());

    Ok(with_content_type(
        (status, upstream.body).into_response(),
        &content_type,
    ))
}

/// Streams `GET /api/tmdb-image?path=<sub-path>` from the image CDN
pub async fn tmdb_image(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<Response> {
    let (path, _) = split_path(params)?;

    let upstream = state.media.fetch_image(&path).await?;
    let status = upstream_status(&upstream)?;

    if !upstream.is_success() {
        tracing::warn!(
            request_id = %request_id,
            path = %path,
            status = upstream.status,
            "Image proxy upstream failure"
        );
        let body = Json(json!({ "error": format!("Failed to fetch image: {}", status) }));
        return Ok((status, body).into_response());
    }

    let content_type = upstream
        .content_type
        .clone()
        .unwrap_or_else(|| "application/octet-stream".to_string());

    let mut response = with_content_type((status, upstream.body).into_response(), &content_type);
    response
        .headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static(IMAGE_CACHE_CONTROL));

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::MockMediaProvider;
    use crate::services::Catalog;
    use axum::body::to_bytes;
    use std::sync::Arc;

    fn state(media: MockMediaProvider) -> AppState {
        AppState::new(Catalog::from_datasets(Vec::new()), Arc::new(media), 20)
    }

    fn params(pairs: &[(&str, &str)]) -> Query<Vec<(String, String)>> {
        Query(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
    }

    #[test]
    fn test_split_path() {
        let (path, rest) = split_path(vec![
            ("query".to_string(), "vertigo".to_string()),
            ("path".to_string(), "search/movie".to_string()),
            ("page".to_string(), "2".to_string()),
        ])
        .unwrap();

        assert_eq!(path, "search/movie");
        assert_eq!(
            rest,
            vec![
                ("query".to_string(), "vertigo".to_string()),
                ("page".to_string(), "2".to_string())
            ]
        );
        assert!(split_path(vec![("path".to_string(), " ".to_string())]).is_err());
    }

    #[tokio::test]
    async fn test_tmdb_forwards_body_and_params() {
        let mut media = MockMediaProvider::new();
        media
            .expect_fetch_json()
            .withf(|path, query| {
                path.to_string() == "movie/238"
                    && query.to_vec() == vec![("language".to_string(), "fr-FR".to_string())]
            })
            .times(1)
            .returning(|_, _| {
                Ok(UpstreamResponse {
                    status: 200,
                    content_type: Some("application/json;charset=utf-8".to_string()),
                    body: br#"{"id":238,"title":"Le Parrain"}"#.to_vec(),
                })
            });

        let response = tmdb(
            State(state(media)),
            Extension(RequestId::generate()),
            params(&[("path", "movie/238"), ("language", "fr-FR")]),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[CONTENT_TYPE],
            "application/json;charset=utf-8"
        );
        assert_eq!(
            body_bytes(response).await,
            br#"{"id":238,"title":"Le Parrain"}"#.to_vec()
        );
    }

    #[tokio::test]
    async fn test_tmdb_passes_through_error_status() {
        let mut media = MockMediaProvider::new();
        media.expect_fetch_json().returning(|_, _| {
            Ok(UpstreamResponse {
                status: 404,
                content_type: Some("application/json".to_string()),
                body: br#"{"status_code":34}"#.to_vec(),
            })
        });

        let response = tmdb(
            State(state(media)),
            Extension(RequestId::generate()),
            params(&[("path", "movie/0")]),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_bytes(response).await, br#"{"status_code":34}"#.to_vec());
    }

    #[tokio::test]
    async fn test_tmdb_missing_credential_is_500() {
        let mut media = MockMediaProvider::new();
        media
            .expect_fetch_json()
            .returning(|_, _| Err(AppError::MissingCredential));

        let err = tmdb(
            State(state(media)),
            Extension(RequestId::generate()),
            params(&[("path", "configuration")]),
        )
        .await
        .unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_image_sets_cache_header() {
        let mut media = MockMediaProvider::new();
        media
            .expect_fetch_image()
            .withf(|path| path.to_string() == "w500/poster.jpg")
            .returning(|_| {
                Ok(UpstreamResponse {
                    status: 200,
                    content_type: Some("image/jpeg".to_string()),
                    body: vec![0xFF, 0xD8, 0xFF],
                })
            });

        let response = tmdb_image(
            State(state(media)),
            Extension(RequestId::generate()),
            params(&[("path", "w500/poster.jpg")]),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "image/jpeg");
        assert_eq!(response.headers()[CACHE_CONTROL], IMAGE_CACHE_CONTROL);
        assert_eq!(body_bytes(response).await, vec![0xFF, 0xD8, 0xFF]);
    }

    #[tokio::test]
    async fn test_image_missing_path_is_400() {
        let media = MockMediaProvider::new();
        let err = tmdb_image(
            State(state(media)),
            Extension(RequestId::generate()),
            params(&[]),
        )
        .await
        .unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_image_upstream_failure_status_passes_through() {
        let mut media = MockMediaProvider::new();
        media.expect_fetch_image().returning(|_| {
            Ok(UpstreamResponse {
                status: 503,
                content_type: None,
                body: Vec::new(),
            })
        });

        let response = tmdb_image(
            State(state(media)),
            Extension(RequestId::generate()),
            params(&[("path", "w500/poster.jpg")]),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(response.headers().get(CACHE_CONTROL).is_none());
    }
}
