//! PDF layout engine
//!
//! A small flowable-based layout engine on top of `lopdf`:
//! - `fonts`: base-14 Helvetica metrics, WinAnsi encoding, word wrap
//! - `canvas`: per-page drawing surface that records content operators
//! - `layout`: flowables (paragraphs, tables, images, spacers) and pagination
//! - `writer`: assembles pages into a PDF byte stream
//!
//! Output is a pure function of the flowables: no timestamps, no random
//! document identifiers.

mod canvas;
mod fonts;
mod layout;
mod writer;

use thiserror::Error;

pub use canvas::PageCanvas;
pub use fonts::{encode_win_ansi, wrap_text, Font};
pub use layout::{Alignment, DocTemplate, Flowable, ParagraphStyle, Table, TableStyle};

/// Failure of the PDF engine itself
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to encode page content: {0}")]
    Content(String),

    #[error("Failed to serialize PDF: {0}")]
    Serialize(String),

    #[error("Layout error: {0}")]
    Layout(String),
}

/// RGB color with components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const GREY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const DARK_BLUE: Color = Color::rgb(0.0, 0.0, 0.545);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Page size and margins in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

impl PageGeometry {
    /// A4 portrait
    pub const A4_WIDTH: f32 = 595.2756;
    pub const A4_HEIGHT: f32 = 841.8898;

    /// A4 with the catalog margins (40 left/right, 80 top, 60 bottom)
    pub const fn catalog_a4() -> Self {
        Self {
            width: Self::A4_WIDTH,
            height: Self::A4_HEIGHT,
            margin_left: 40.0,
            margin_right: 40.0,
            margin_top: 80.0,
            margin_bottom: 60.0,
        }
    }

    pub fn frame_left(&self) -> f32 {
        self.margin_left
    }

    pub fn frame_right(&self) -> f32 {
        self.width - self.margin_right
    }

    pub fn frame_top(&self) -> f32 {
        self.height - self.margin_top
    }

    pub fn frame_bottom(&self) -> f32 {
        self.margin_bottom
    }

    pub fn frame_width(&self) -> f32 {
        self.frame_right() - self.frame_left()
    }

    pub fn frame_height(&self) -> f32 {
        self.frame_top() - self.frame_bottom()
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::catalog_a4()
    }
}

/// A decoded image ready for embedding as a DCT-encoded XObject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedImage {
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
    /// Baseline JPEG bytes (DeviceRGB, 8 bits per component)
    pub jpeg: Vec<u8>,
}
