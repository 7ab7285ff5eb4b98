//! Catalog generation route
//!
//! `POST /generate-catalog-pdf/` takes a product JSON body and answers with
//! the rendered PDF as an attachment.

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, StatusCode},
    response::Response,
    routing::post,
    Router,
};
use chrono::{DateTime, Local, TimeZone};

use crate::catalog::parse_entry;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Create the catalog router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate-catalog-pdf/", post(generate_catalog_pdf))
        .route("/generate-catalog-pdf", post(generate_catalog_pdf))
}

/// Validate, resolve images, render
async fn generate_catalog_pdf(State(state): State<AppState>, body: Bytes) -> Result<Response> {
    let entry = parse_entry(&body)?;
    tracing::info!(
        "Generating catalog for \"{}\" with {} image(s)",
        entry.name,
        entry.images.len()
    );

    let images = state.resolver().resolve_all(&entry.images).await;

    let builder = state.builder().clone();
    let pdf = tokio::task::spawn_blocking(move || builder.build(&entry, &images))
        .await
        .map_err(|e| AppError::Internal(format!("Render task failed: {}", e)))??;

    let filename = catalog_filename(&Local::now());

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(header::CONTENT_LENGTH, pdf.len())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", filename),
        )
        .body(Body::from(pdf))
        .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)))
}

/// Download name for a catalog rendered at `now`
pub fn catalog_filename<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("Catalog_{}.pdf", now.format("%Y%m%d_%H%M%S"))
}
