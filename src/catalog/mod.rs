//! Product catalog documents
//!
//! - `types`: request and validated entry types
//! - `validate`: JSON body → [`ProductCatalogEntry`]
//! - `builder`: entry + resolved images → PDF bytes
//! - `decorator`: per-page company header and footer
//! - `samples`: fixture products

mod builder;
mod decorator;
pub mod samples;
mod types;
mod validate;

pub use builder::{BuilderOptions, CatalogBuilder};
pub use decorator::{contact_line, decorate_page, footer_identity, CATALOG_CAPTION};
pub use types::{
    CatalogRequest, CompanyInfo, ImageRef, ImageSizing, InvalidImageSizing, ProductCatalogEntry,
    TextContent, DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH, FIXED_IMAGE_HEIGHT, FIXED_IMAGE_WIDTH,
};
pub use validate::{parse_entry, ValidationError};
