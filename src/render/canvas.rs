//! Page drawing surface
//!
//! Records PDF content-stream operators for one page. Coordinates are in
//! points with the origin at the bottom-left corner.

use lopdf::content::Operation;
use lopdf::Object;

use super::fonts::{encode_win_ansi, Font};
use super::{Color, EmbeddedImage};

/// Drawing surface for a single page
#[derive(Debug, Default)]
pub struct PageCanvas<'a> {
    operations: Vec<Operation>,
    images: Vec<(String, &'a EmbeddedImage)>,
}

impl<'a> PageCanvas<'a> {
    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
            images: Vec::new(),
        }
    }

    pub fn save_state(&mut self) {
        self.push("q", vec![]);
    }

    pub fn restore_state(&mut self) {
        self.push("Q", vec![]);
    }

    /// Draw text with its baseline starting at (x, y)
    pub fn draw_string(&mut self, x: f32, y: f32, font: Font, size: f32, color: Color, text: &str) {
        if text.is_empty() {
            return;
        }
        self.set_fill_color(color);
        self.push("BT", vec![]);
        self.push("Tf", vec![font.resource_name().into(), size.into()]);
        self.push("Td", vec![x.into(), y.into()]);
        self.push("Tj", vec![Object::string_literal(encode_win_ansi(text))]);
        self.push("ET", vec![]);
    }

    /// Draw text whose right edge ends at x
    pub fn draw_right_string(&mut self, x: f32, y: f32, font: Font, size: f32, color: Color, text: &str) {
        let width = font.text_width(text, size);
        self.draw_string(x - width, y, font, size, color, text);
    }

    /// Draw text horizontally centered on x
    pub fn draw_centred_string(&mut self, x: f32, y: f32, font: Font, size: f32, color: Color, text: &str) {
        let width = font.text_width(text, size);
        self.draw_string(x - width / 2.0, y, font, size, color, text);
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: Color) {
        self.set_stroke(width, color);
        self.push("m", vec![x1.into(), y1.into()]);
        self.push("l", vec![x2.into(), y2.into()]);
        self.push("S", vec![]);
    }

    /// Stroke a rectangle given its bottom-left corner
    pub fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, line_width: f32, color: Color) {
        self.set_stroke(line_width, color);
        self.push("re", vec![x.into(), y.into(), width.into(), height.into()]);
        self.push("S", vec![]);
    }

    /// Paint an image with its bottom-left corner at (x, y)
    pub fn draw_image(&mut self, image: &'a EmbeddedImage, x: f32, y: f32, width: f32, height: f32) {
        let name = format!("Im{}", self.images.len() + 1);
        self.save_state();
        self.push(
            "cm",
            vec![width.into(), 0.0f32.into(), 0.0f32.into(), height.into(), x.into(), y.into()],
        );
        self.push("Do", vec![name.as_str().into()]);
        self.restore_state();
        self.images.push((name, image));
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Operators recorded so far
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub(super) fn into_parts(self) -> (Vec<Operation>, Vec<(String, &'a EmbeddedImage)>) {
        (self.operations, self.images)
    }

    fn set_fill_color(&mut self, color: Color) {
        self.push("rg", vec![color.r.into(), color.g.into(), color.b.into()]);
    }

    fn set_stroke(&mut self, width: f32, color: Color) {
        self.push("w", vec![width.into()]);
        self.push("RG", vec![color.r.into(), color.g.into(), color.b.into()]);
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.operations.push(Operation::new(operator, operands));
    }
}
