//! Flowables and pagination
//!
//! Content is a linear list of [`Flowable`] blocks laid out top to bottom in
//! the page frame. A page decorator function is invoked for every page as it
//! is started, so first and later pages are decorated the same way.

use super::canvas::PageCanvas;
use super::fonts::{wrap_text, Font};
use super::writer::{write_pdf, DocumentInfo};
use super::{Color, EmbeddedImage, PageGeometry, RenderError};

/// Horizontal alignment of paragraph lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// Text style for paragraphs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParagraphStyle {
    pub font: Font,
    pub size: f32,
    pub leading: f32,
    pub color: Color,
    pub alignment: Alignment,
    /// Dropped when the paragraph starts at the top of a page
    pub space_before: f32,
    pub space_after: f32,
    pub left_indent: f32,
    /// Drawn in front of the first line, inside the indent
    pub bullet: Option<&'static str>,
}

impl ParagraphStyle {
    pub const fn new(font: Font, size: f32, leading: f32) -> Self {
        Self {
            font,
            size,
            leading,
            color: Color::BLACK,
            alignment: Alignment::Left,
            space_before: 0.0,
            space_after: 0.0,
            left_indent: 0.0,
            bullet: None,
        }
    }
}

/// Cell text and border style for tables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStyle {
    pub font: Font,
    pub size: f32,
    pub leading: f32,
    pub padding_x: f32,
    pub padding_y: f32,
    pub box_width: f32,
    pub box_color: Color,
    pub grid_width: f32,
    pub grid_color: Color,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            font: Font::Helvetica,
            size: 10.0,
            leading: 12.0,
            padding_x: 6.0,
            padding_y: 3.0,
            box_width: 1.0,
            box_color: Color::BLACK,
            grid_width: 0.5,
            grid_color: Color::GREY,
        }
    }
}

/// A bordered grid of text cells, centered in the frame
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
    pub col_widths: Vec<f32>,
    pub style: TableStyle,
}

impl Table {
    pub fn width(&self) -> f32 {
        self.col_widths.iter().sum()
    }
}

/// One block of document content
#[derive(Debug, Clone, PartialEq)]
pub enum Flowable<'a> {
    Paragraph { text: String, style: ParagraphStyle },
    Spacer(f32),
    Table(Table),
    Image {
        image: &'a EmbeddedImage,
        width: f32,
        height: f32,
    },
}

/// Page template: geometry plus document metadata
#[derive(Debug, Clone)]
pub struct DocTemplate {
    geometry: PageGeometry,
    info: DocumentInfo,
}

impl DocTemplate {
    pub fn new(geometry: PageGeometry, title: impl Into<String>) -> Self {
        Self {
            geometry,
            info: DocumentInfo {
                title: title.into(),
                producer: concat!("catalog-pdf-server ", env!("CARGO_PKG_VERSION")).to_string(),
            },
        }
    }

    /// Lay out the flowables and serialize the PDF
    pub fn build<F>(&self, flowables: &[Flowable<'_>], decorate: F) -> Result<Vec<u8>, RenderError>
    where
        F: Fn(&mut PageCanvas<'_>, &PageGeometry),
    {
        let pages = self.layout(flowables, decorate)?;
        let page_count = pages.len();
        let pdf = write_pdf(&self.geometry, &self.info, pages)?;
        tracing::info!(
            "Rendered \"{}\": {} page(s), {} bytes",
            self.info.title,
            page_count,
            pdf.len()
        );
        Ok(pdf)
    }

    /// Paginate the flowables into page canvases
    pub fn layout<'a, F>(
        &self,
        flowables: &[Flowable<'a>],
        decorate: F,
    ) -> Result<Vec<PageCanvas<'a>>, RenderError>
    where
        F: Fn(&mut PageCanvas<'_>, &PageGeometry),
    {
        if self.geometry.frame_width() <= 0.0 || self.geometry.frame_height() <= 0.0 {
            return Err(RenderError::Layout(format!(
                "page frame is empty: {:?}",
                self.geometry
            )));
        }

        let mut cursor = Cursor::new(&self.geometry, &decorate);
        for flowable in flowables {
            match flowable {
                Flowable::Paragraph { text, style } => cursor.paragraph(text, style),
                Flowable::Spacer(height) => cursor.spacer(*height),
                Flowable::Table(table) => cursor.table(table),
                Flowable::Image {
                    image,
                    width,
                    height,
                } => cursor.image(*image, *width, *height),
            }
        }
        Ok(cursor.finish())
    }
}

/// Pagination state
struct Cursor<'g, 'a, F> {
    geometry: &'g PageGeometry,
    decorate: &'g F,
    pages: Vec<PageCanvas<'a>>,
    canvas: PageCanvas<'a>,
    /// Top of the remaining free space on the current page
    y: f32,
}

impl<'g, 'a, F> Cursor<'g, 'a, F>
where
    F: Fn(&mut PageCanvas<'_>, &PageGeometry),
{
    fn new(geometry: &'g PageGeometry, decorate: &'g F) -> Self {
        let mut canvas = PageCanvas::new();
        decorate(&mut canvas, geometry);
        Self {
            geometry,
            decorate,
            pages: Vec::new(),
            canvas,
            y: geometry.frame_top(),
        }
    }

    fn start_page(&mut self) {
        let mut canvas = PageCanvas::new();
        (self.decorate)(&mut canvas, self.geometry);
        self.pages.push(std::mem::replace(&mut self.canvas, canvas));
        self.y = self.geometry.frame_top();
    }

    fn at_page_top(&self) -> bool {
        self.y >= self.geometry.frame_top()
    }

    /// Break to a new page unless `height` fits or we are already at the top
    fn ensure_space(&mut self, height: f32) {
        if self.y - height < self.geometry.frame_bottom() && !self.at_page_top() {
            self.start_page();
        }
    }

    fn paragraph(&mut self, text: &str, style: &ParagraphStyle) {
        if !self.at_page_top() {
            self.y -= style.space_before;
        }

        let left = self.geometry.frame_left() + style.left_indent;
        let width = self.geometry.frame_width() - style.left_indent;
        let lines = wrap_text(text, style.font, style.size, width);

        for (index, line) in lines.iter().enumerate() {
            self.ensure_space(style.leading);
            let baseline = self.y - style.size;

            if index == 0 {
                if let Some(bullet) = style.bullet {
                    let bullet_x = left - style.font.text_width(bullet, style.size) - 4.0;
                    self.canvas
                        .draw_string(bullet_x, baseline, style.font, style.size, style.color, bullet);
                }
            }

            match style.alignment {
                Alignment::Left => {
                    self.canvas
                        .draw_string(left, baseline, style.font, style.size, style.color, line)
                }
                Alignment::Center => self.canvas.draw_centred_string(
                    left + width / 2.0,
                    baseline,
                    style.font,
                    style.size,
                    style.color,
                    line,
                ),
            }
            self.y -= style.leading;
        }

        self.y -= style.space_after;
    }

    /// A spacer that does not fit just consumes the rest of the page
    fn spacer(&mut self, height: f32) {
        self.y = (self.y - height).max(self.geometry.frame_bottom());
    }

    fn table(&mut self, table: &Table) {
        let style = &table.style;
        let left = self.geometry.frame_left() + (self.geometry.frame_width() - table.width()) / 2.0;

        let wrapped: Vec<Vec<Vec<String>>> = table
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&table.col_widths)
                    .map(|(cell, col_width)| {
                        wrap_text(cell, style.font, style.size, col_width - 2.0 * style.padding_x)
                    })
                    .collect()
            })
            .collect();

        // Row boundaries of the segment on the current page, top down
        let mut segment: Vec<f32> = Vec::new();

        for cells in &wrapped {
            let line_count = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
            let row_height = line_count as f32 * style.leading + 2.0 * style.padding_y;

            if self.y - row_height < self.geometry.frame_bottom() && !self.at_page_top() {
                self.stroke_table_segment(table, left, &segment);
                segment.clear();
                self.start_page();
            }

            if segment.is_empty() {
                segment.push(self.y);
            }

            if self.y - row_height >= self.geometry.frame_bottom() {
                for index in 0..line_count {
                    let baseline =
                        self.y - style.padding_y - style.size - index as f32 * style.leading;
                    self.draw_row_line(table, left, cells, index, baseline);
                }
                self.y -= row_height;
            } else {
                self.split_row(table, left, cells, line_count, &mut segment);
            }
            segment.push(self.y);
        }

        self.stroke_table_segment(table, left, &segment);
    }

    /// Draw a row taller than the frame one text line at a time, closing the
    /// bordered segment at each page break
    fn split_row(
        &mut self,
        table: &Table,
        left: f32,
        cells: &[Vec<String>],
        line_count: usize,
        segment: &mut Vec<f32>,
    ) {
        let style = &table.style;
        self.y -= style.padding_y;

        for index in 0..line_count {
            if self.y - style.leading < self.geometry.frame_bottom() {
                segment.push(self.geometry.frame_bottom());
                self.stroke_table_segment(table, left, segment);
                segment.clear();
                self.start_page();
                segment.push(self.y);
                self.y -= style.padding_y;
            }
            let baseline = self.y - style.size;
            self.draw_row_line(table, left, cells, index, baseline);
            self.y -= style.leading;
        }

        self.y = (self.y - style.padding_y).max(self.geometry.frame_bottom());
    }

    /// Line `index` of every cell in a row, where present
    fn draw_row_line(
        &mut self,
        table: &Table,
        left: f32,
        cells: &[Vec<String>],
        index: usize,
        baseline: f32,
    ) {
        let style = &table.style;
        let mut x = left;
        for (lines, col_width) in cells.iter().zip(&table.col_widths) {
            if let Some(line) = lines.get(index) {
                self.canvas.draw_string(
                    x + style.padding_x,
                    baseline,
                    style.font,
                    style.size,
                    Color::BLACK,
                    line,
                );
            }
            x += col_width;
        }
    }

    fn stroke_table_segment(&mut self, table: &Table, left: f32, boundaries: &[f32]) {
        let (Some(&top), Some(&bottom)) = (boundaries.first(), boundaries.last()) else {
            return;
        };
        if boundaries.len() < 2 {
            return;
        }
        let style = &table.style;
        let width = table.width();

        for &y in &boundaries[1..boundaries.len() - 1] {
            self.canvas
                .line(left, y, left + width, y, style.grid_width, style.grid_color);
        }

        let mut x = left;
        for col_width in &table.col_widths[..table.col_widths.len().saturating_sub(1)] {
            x += col_width;
            self.canvas
                .line(x, top, x, bottom, style.grid_width, style.grid_color);
        }

        self.canvas
            .stroke_rect(left, bottom, width, top - bottom, style.box_width, style.box_color);
    }

    fn image(&mut self, image: &'a EmbeddedImage, width: f32, height: f32) {
        let (width, height) = fit_within(
            width,
            height,
            self.geometry.frame_width(),
            self.geometry.frame_height(),
        );
        self.ensure_space(height);

        let x = self.geometry.frame_left() + (self.geometry.frame_width() - width) / 2.0;
        self.canvas.draw_image(image, x, self.y - height, width, height);
        self.y -= height;
    }

    fn finish(mut self) -> Vec<PageCanvas<'a>> {
        let last = std::mem::take(&mut self.canvas);
        self.pages.push(last);
        self.pages
    }
}

/// Scale (width, height) down uniformly to fit the box
fn fit_within(width: f32, height: f32, max_width: f32, max_height: f32) -> (f32, f32) {
    let scale = (max_width / width).min(max_height / height).min(1.0);
    (width * scale, height * scale)
}
