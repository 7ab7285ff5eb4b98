//! Catalog data types
//!
//! `CatalogRequest` is the permissive wire shape accepted by the HTTP
//! endpoint. `ProductCatalogEntry` is the validated, normalized form the
//! document builder consumes.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Default image width in points when a reference does not specify one
pub const DEFAULT_IMAGE_WIDTH: f32 = 200.0;
/// Default image height in points when a reference does not specify one
pub const DEFAULT_IMAGE_HEIGHT: f32 = 150.0;
/// Width used for every image under [`ImageSizing::Fixed`]
pub const FIXED_IMAGE_WIDTH: f32 = 240.0;
/// Height used for every image under [`ImageSizing::Fixed`]
pub const FIXED_IMAGE_HEIGHT: f32 = 160.0;

/// Company branding shown in the page header and footer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

/// Reference to an image by local path or URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub path: String,
    /// Requested width in points
    #[serde(default, alias = "width", skip_serializing_if = "Option::is_none")]
    pub w: Option<f32>,
    /// Requested height in points
    #[serde(default, alias = "height", skip_serializing_if = "Option::is_none")]
    pub h: Option<f32>,
}

impl ImageRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            w: None,
            h: None,
        }
    }

    pub fn with_size(mut self, w: f32, h: f32) -> Self {
        self.w = Some(w);
        self.h = Some(h);
        self
    }

    /// Rendered size in points under the given sizing policy
    pub fn size(&self, sizing: ImageSizing) -> (f32, f32) {
        match sizing {
            ImageSizing::PerImage => (
                self.w.unwrap_or(DEFAULT_IMAGE_WIDTH),
                self.h.unwrap_or(DEFAULT_IMAGE_HEIGHT),
            ),
            ImageSizing::Fixed => (FIXED_IMAGE_WIDTH, FIXED_IMAGE_HEIGHT),
        }
    }
}

/// How image sizes are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageSizing {
    /// Honor each reference's `w`/`h`, falling back to 200x150
    #[default]
    PerImage,
    /// Every image is rendered at 240x160
    Fixed,
}

/// Error for unrecognized sizing names
#[derive(Debug, Error)]
#[error("Invalid image sizing: {0} (expected per-image or fixed)")]
pub struct InvalidImageSizing(pub String);

impl std::fmt::Display for ImageSizing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PerImage => write!(f, "per-image"),
            Self::Fixed => write!(f, "fixed"),
        }
    }
}

impl std::str::FromStr for ImageSizing {
    type Err = InvalidImageSizing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "per-image" | "per_image" | "perimage" => Ok(Self::PerImage),
            "fixed" => Ok(Self::Fixed),
            _ => Err(InvalidImageSizing(s.to_string())),
        }
    }
}

/// Free text supplied either as separate lines or as one block
///
/// `Lines` renders one paragraph (or bullet) per entry; `Text` renders a
/// single paragraph whose newlines become line breaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextContent {
    Lines(Vec<String>),
    Text(String),
}

impl Default for TextContent {
    fn default() -> Self {
        Self::Lines(Vec::new())
    }
}

impl TextContent {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Lines(lines) => lines.is_empty(),
            Self::Text(text) => text.is_empty(),
        }
    }

    /// Trim entries and drop blank lines
    pub(crate) fn normalized(self) -> Self {
        match self {
            Self::Lines(lines) => Self::Lines(
                lines
                    .into_iter()
                    .map(|line| line.trim().to_string())
                    .filter(|line| !line.is_empty())
                    .collect(),
            ),
            Self::Text(text) => Self::Text(text.trim().replace("\r\n", "\n")),
        }
    }
}

/// Request body for `POST /generate-catalog-pdf/`
///
/// Every field except `name` may be omitted or `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hs_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fcl_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub packaging: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity_per_fcl: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: TextContent,
    #[serde(default, deserialize_with = "null_as_default")]
    pub specifications: TextContent,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<ImageRef>,
    /// Single-image shorthand, appended after `images`
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub client_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rate: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub expiry_date: String,
    #[serde(default)]
    pub company: Option<CompanyInfo>,
}

/// A validated catalog entry
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductCatalogEntry {
    pub name: String,
    pub hs_code: String,
    pub quantity: String,
    pub unit: String,
    pub fcl_type: String,
    pub packaging: String,
    pub quantity_per_fcl: String,
    pub description: TextContent,
    pub specifications: TextContent,
    pub images: Vec<ImageRef>,
    pub client_name: String,
    pub rate: String,
    pub expiry_date: String,
    pub company: Option<CompanyInfo>,
}

impl ProductCatalogEntry {
    /// Entry with only the required name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Rows of the "Additional Details" table, present values only
    pub fn additional_details(&self) -> Vec<(&'static str, &str)> {
        present_rows([
            ("Client Name", self.client_name.as_str()),
            ("Rate", self.rate.as_str()),
            ("Expiry Date", self.expiry_date.as_str()),
        ])
    }

    /// Rows of the "Product Details" table, present values only
    pub fn product_details(&self) -> Vec<(&'static str, &str)> {
        present_rows([
            ("HS Code", self.hs_code.as_str()),
            ("Quantity", self.quantity.as_str()),
            ("Unit", self.unit.as_str()),
            ("FCL Type", self.fcl_type.as_str()),
            ("Packaging", self.packaging.as_str()),
            ("Quantity per FCL", self.quantity_per_fcl.as_str()),
        ])
    }
}

fn present_rows<'a, const N: usize>(
    rows: [(&'static str, &'a str); N],
) -> Vec<(&'static str, &'a str)> {
    rows.into_iter().filter(|(_, value)| !value.is_empty()).collect()
}

/// Treat an explicit JSON `null` like an omitted field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_size_per_image_defaults() {
        let image = ImageRef::new("a.jpg");
        assert_eq!(image.size(ImageSizing::PerImage), (200.0, 150.0));

        let sized = ImageRef::new("a.jpg").with_size(320.0, 90.0);
        assert_eq!(sized.size(ImageSizing::PerImage), (320.0, 90.0));
    }

    #[test]
    fn test_image_size_fixed_ignores_request() {
        let sized = ImageRef::new("a.jpg").with_size(320.0, 90.0);
        assert_eq!(sized.size(ImageSizing::Fixed), (240.0, 160.0));
    }

    #[test]
    fn test_image_ref_accepts_width_height_aliases() {
        let image: ImageRef =
            serde_json::from_str(r#"{"path": "x.png", "width": 50, "height": 40}"#).unwrap();
        assert_eq!(image.w, Some(50.0));
        assert_eq!(image.h, Some(40.0));
    }

    #[test]
    fn test_image_sizing_from_str() {
        assert_eq!("fixed".parse::<ImageSizing>().unwrap(), ImageSizing::Fixed);
        assert_eq!("Per-Image".parse::<ImageSizing>().unwrap(), ImageSizing::PerImage);
        assert!("huge".parse::<ImageSizing>().is_err());
    }

    #[test]
    fn test_text_content_shapes() {
        let lines: TextContent = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(lines, TextContent::Lines(vec!["a".into(), "b".into()]));

        let text: TextContent = serde_json::from_str(r#""a\nb""#).unwrap();
        assert_eq!(text, TextContent::Text("a\nb".into()));
    }

    #[test]
    fn test_text_content_normalized_drops_blank_lines() {
        let lines = TextContent::Lines(vec![" a ".into(), "   ".into(), "b".into()]).normalized();
        assert_eq!(lines, TextContent::Lines(vec!["a".into(), "b".into()]));
        assert!(TextContent::Text("  ".into()).normalized().is_empty());
    }

    #[test]
    fn test_request_null_fields_default() {
        let request: CatalogRequest = serde_json::from_str(
            r#"{"name": "Tea", "hs_code": null, "description": null, "images": null}"#,
        )
        .unwrap();
        assert_eq!(request.hs_code, "");
        assert!(request.description.is_empty());
        assert!(request.images.is_empty());
    }

    #[test]
    fn test_detail_rows_keep_fixed_order() {
        let mut entry = ProductCatalogEntry::named("Coffee");
        entry.expiry_date = "2025-12-31".into();
        entry.client_name = "Acme".into();
        assert_eq!(
            entry.additional_details(),
            vec![("Client Name", "Acme"), ("Expiry Date", "2025-12-31")]
        );

        entry.packaging = "Bags".into();
        assert_eq!(entry.product_details(), vec![("Packaging", "Bags")]);
    }
}
