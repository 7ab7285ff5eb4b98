//! Request validation
//!
//! Turns a raw JSON body into a [`ProductCatalogEntry`]. All defaulting and
//! normalization happens here, once, before any image is resolved.

use thiserror::Error;

use super::types::{CatalogRequest, CompanyInfo, ImageRef, ProductCatalogEntry};

/// Request rejected before document building
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid catalog payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Field `name` is required")]
    MissingName,

    #[error("Invalid image at index {index}: {reason}")]
    InvalidImage { index: usize, reason: String },
}

/// Parse and validate a JSON request body
pub fn parse_entry(body: &[u8]) -> Result<ProductCatalogEntry, ValidationError> {
    let request: CatalogRequest = serde_json::from_slice(body)?;
    request.try_into()
}

impl TryFrom<CatalogRequest> for ProductCatalogEntry {
    type Error = ValidationError;

    fn try_from(request: CatalogRequest) -> Result<Self, Self::Error> {
        let name = request
            .name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or(ValidationError::MissingName)?;

        let mut images = Vec::with_capacity(request.images.len() + 1);
        for (index, image) in request.images.into_iter().enumerate() {
            if let Some(image) = normalize_image(index, image)? {
                images.push(image);
            }
        }
        let legacy_index = images.len();
        if let Some(image) = normalize_image(legacy_index, ImageRef::new(request.image_path))? {
            images.push(image);
        }

        Ok(Self {
            name,
            hs_code: trimmed(request.hs_code),
            quantity: trimmed(request.quantity),
            unit: trimmed(request.unit),
            fcl_type: trimmed(request.fcl_type),
            packaging: trimmed(request.packaging),
            quantity_per_fcl: trimmed(request.quantity_per_fcl),
            description: request.description.normalized(),
            specifications: request.specifications.normalized(),
            images,
            client_name: trimmed(request.client_name),
            rate: trimmed(request.rate),
            expiry_date: trimmed(request.expiry_date),
            company: request.company.map(normalize_company),
        })
    }
}

fn trimmed(value: String) -> String {
    value.trim().to_string()
}

fn normalize_company(company: CompanyInfo) -> CompanyInfo {
    CompanyInfo {
        name: trimmed(company.name),
        website: trimmed(company.website),
        address: trimmed(company.address),
        phone: trimmed(company.phone),
        email: trimmed(company.email),
    }
}

/// Blank paths are dropped; sizes must be positive when given
fn normalize_image(index: usize, image: ImageRef) -> Result<Option<ImageRef>, ValidationError> {
    let path = image.path.trim().to_string();
    if path.is_empty() {
        return Ok(None);
    }

    for (label, value) in [("w", image.w), ("h", image.h)] {
        if let Some(value) = value {
            if !value.is_finite() || value <= 0.0 {
                return Err(ValidationError::InvalidImage {
                    index,
                    reason: format!("`{}` must be a positive number, got {}", label, value),
                });
            }
        }
    }

    Ok(Some(ImageRef { path, ..image }))
}
