//! Health check and landing endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub service: &'static str,
}

#[derive(Serialize)]
pub struct HomeResponse {
    pub message: &'static str,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        service: "catalog-pdf-server",
    })
}

pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Catalog PDF Generator is running. Use POST /generate-catalog-pdf/",
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
}
