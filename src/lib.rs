//! Catalog PDF Server
//!
//! Renders product data submitted as JSON into a one-product A4 catalog PDF
//! with a company header and footer on every page.
//!
//! - [`catalog`]: request validation and document composition
//! - [`images`]: local and remote image resolution
//! - [`render`]: PDF layout and serialization
//! - [`routes`]: HTTP surface

pub mod catalog;
pub mod config;
pub mod error;
pub mod images;
pub mod render;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::{AppError, Result};
pub use state::AppState;
