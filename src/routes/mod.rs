//! Route modules for Catalog PDF Server

pub mod catalog;
pub mod health;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::limit::RequestBodyLimitLayer;

use crate::state::AppState;

/// Application router with every route and the request body limit
pub fn app(state: AppState) -> Router {
    let max_body_bytes = state.config().catalog.max_body_bytes;

    Router::new()
        .merge(health::router())
        .merge(catalog::router())
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::images::{HttpFetcher, ImageResolver};

    fn test_app() -> Router {
        let config = Config::default();
        let fetcher = HttpFetcher::new(
            std::time::Duration::from_secs(1),
            config.catalog.image_max_bytes,
        )
        .unwrap();
        let resolver = ImageResolver::new(Arc::new(fetcher), std::env::temp_dir());
        app(AppState::with_resolver(config, resolver))
    }

    #[tokio::test]
    async fn test_health_route() {
        let response = test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_get_on_generate_not_allowed() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/generate-catalog-pdf/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_missing_name_is_unprocessable() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/generate-catalog-pdf/")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"hs_code": "0901.11.00"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
