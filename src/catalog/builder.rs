//! Catalog document builder
//!
//! Maps one validated entry plus its resolved images to PDF bytes. Blocks are
//! emitted in a fixed order and each is skipped when its source is empty:
//! title, description, specifications, additional details, product details,
//! images. The company header/footer is applied to every page.

use super::decorator::decorate_page;
use super::types::{ImageSizing, ProductCatalogEntry, TextContent};
use crate::images::ImageError;
use crate::render::{
    Alignment, Color, DocTemplate, EmbeddedImage, Flowable, Font, PageGeometry, ParagraphStyle,
    RenderError, Table, TableStyle,
};

const TITLE_STYLE: ParagraphStyle = ParagraphStyle {
    color: Color::DARK_BLUE,
    alignment: Alignment::Center,
    space_after: 6.0,
    ..ParagraphStyle::new(Font::HelveticaBold, 18.0, 22.0)
};

const HEADING_STYLE: ParagraphStyle = ParagraphStyle {
    space_before: 12.0,
    space_after: 6.0,
    ..ParagraphStyle::new(Font::HelveticaBold, 12.0, 14.0)
};

const BODY_STYLE: ParagraphStyle = ParagraphStyle::new(Font::Helvetica, 10.0, 12.0);

const BULLET_STYLE: ParagraphStyle = ParagraphStyle {
    left_indent: 18.0,
    bullet: Some("\u{2022}"),
    ..BODY_STYLE
};

const PLACEHOLDER_STYLE: ParagraphStyle = ParagraphStyle::new(Font::HelveticaOblique, 10.0, 12.0);

const DETAIL_COLUMNS: [f32; 2] = [120.0, 300.0];

/// Options fixed for the lifetime of the service
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BuilderOptions {
    pub image_sizing: ImageSizing,
    pub geometry: PageGeometry,
}

/// Builds catalog PDFs
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    options: BuilderOptions,
}

impl CatalogBuilder {
    pub fn new(options: BuilderOptions) -> Self {
        Self { options }
    }

    /// Render the entry to PDF bytes
    ///
    /// `images` holds one resolution result per `entry.images`, in order.
    pub fn build(
        &self,
        entry: &ProductCatalogEntry,
        images: &[Result<EmbeddedImage, ImageError>],
    ) -> Result<Vec<u8>, RenderError> {
        if images.len() != entry.images.len() {
            return Err(RenderError::Layout(format!(
                "expected {} resolved images, got {}",
                entry.images.len(),
                images.len()
            )));
        }

        let flowables = self.compose(entry, images);
        let template = DocTemplate::new(self.options.geometry, entry.name.clone());
        let company = entry.company.as_ref();

        template.build(&flowables, |canvas, geometry| {
            decorate_page(canvas, geometry, company)
        })
    }

    /// The content blocks for an entry, in document order
    pub fn compose<'a>(
        &self,
        entry: &ProductCatalogEntry,
        images: &'a [Result<EmbeddedImage, ImageError>],
    ) -> Vec<Flowable<'a>> {
        let mut blocks = vec![
            paragraph(entry.name.to_uppercase(), TITLE_STYLE),
            Flowable::Spacer(20.0),
        ];

        if !entry.description.is_empty() {
            blocks.push(heading("Description:"));
            push_text(&mut blocks, &entry.description, BODY_STYLE);
            blocks.push(Flowable::Spacer(12.0));
        }

        if !entry.specifications.is_empty() {
            blocks.push(heading("Specifications:"));
            push_text(&mut blocks, &entry.specifications, BULLET_STYLE);
            blocks.push(Flowable::Spacer(12.0));
        }

        let additional = entry.additional_details();
        if !additional.is_empty() {
            blocks.push(heading("Additional Details:"));
            blocks.push(detail_table(&additional));
            blocks.push(Flowable::Spacer(12.0));
        }

        let details = entry.product_details();
        if !details.is_empty() {
            blocks.push(heading("Product Details:"));
            blocks.push(detail_table(&details));
            blocks.push(Flowable::Spacer(20.0));
        }

        if !entry.images.is_empty() {
            blocks.push(heading(if entry.images.len() == 1 {
                "Image:"
            } else {
                "Images:"
            }));

            for (reference, resolved) in entry.images.iter().zip(images) {
                match resolved {
                    Ok(image) => {
                        let (width, height) = reference.size(self.options.image_sizing);
                        blocks.push(Flowable::Image {
                            image,
                            width,
                            height,
                        });
                        blocks.push(Flowable::Spacer(10.0));
                    }
                    Err(e) => blocks.push(paragraph(e.placeholder(), PLACEHOLDER_STYLE)),
                }
            }
        }

        blocks
    }
}

fn paragraph<'a>(text: impl Into<String>, style: ParagraphStyle) -> Flowable<'a> {
    Flowable::Paragraph {
        text: text.into(),
        style,
    }
}

fn heading<'a>(text: &str) -> Flowable<'a> {
    paragraph(text, HEADING_STYLE)
}

/// Lines become one paragraph each; a text block stays one paragraph.
/// The bullet only applies to list entries.
fn push_text(blocks: &mut Vec<Flowable<'_>>, content: &TextContent, style: ParagraphStyle) {
    match content {
        TextContent::Lines(lines) => {
            blocks.extend(lines.iter().map(|line| paragraph(line.as_str(), style)))
        }
        TextContent::Text(text) => blocks.push(paragraph(text.as_str(), BODY_STYLE)),
    }
}

fn detail_table<'a>(rows: &[(&str, &str)]) -> Flowable<'a> {
    Flowable::Table(Table {
        rows: rows
            .iter()
            .map(|(label, value)| vec![label.to_string(), value.to_string()])
            .collect(),
        col_widths: DETAIL_COLUMNS.to_vec(),
        style: TableStyle::default(),
    })
}
