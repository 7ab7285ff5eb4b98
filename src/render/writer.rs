//! PDF serialization
//!
//! Builds the object graph (catalog, page tree, fonts, image XObjects,
//! content streams) with `lopdf` and writes it out. Object numbering follows
//! insertion order, which keeps output byte-stable for identical input.

use lopdf::content::Content;
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

use super::canvas::PageCanvas;
use super::fonts::{encode_win_ansi, Font};
use super::{EmbeddedImage, PageGeometry, RenderError};

/// Values written to the document information dictionary
#[derive(Debug, Clone)]
pub(super) struct DocumentInfo {
    pub title: String,
    pub producer: String,
}

pub(super) fn write_pdf(
    geometry: &PageGeometry,
    info: &DocumentInfo,
    pages: Vec<PageCanvas<'_>>,
) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version("1.4");
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for font in Font::ALL {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_name(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(font.resource_name(), font_id);
    }

    let media_box: Vec<Object> = vec![
        0.0f32.into(),
        0.0f32.into(),
        geometry.width.into(),
        geometry.height.into(),
    ];

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let (operations, images) = page.into_parts();

        let mut resources = dictionary! {
            "Font" => fonts.clone(),
        };
        if !images.is_empty() {
            let mut xobjects = Dictionary::new();
            for (name, image) in images {
                let image_id = doc.add_object(image_xobject(image));
                xobjects.set(name, image_id);
            }
            resources.set("XObject", xobjects);
        }

        let content = Content { operations }
            .encode()
            .map_err(|e| RenderError::Content(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => media_box.clone(),
            "Contents" => content_id,
            "Resources" => resources,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(encode_win_ansi(&info.title)),
        "Producer" => Object::string_literal(encode_win_ansi(&info.producer)),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| RenderError::Serialize(e.to_string()))?;
    Ok(buffer)
}

fn image_xobject(image: &EmbeddedImage) -> Stream {
    let dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => i64::from(image.width),
        "Height" => i64::from(image.height),
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8i64,
        "Filter" => "DCTDecode",
    };
    Stream::new(dict, image.jpeg.clone())
}
