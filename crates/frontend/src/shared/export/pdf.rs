//! PDF выгрузка таблицы продаж.
//!
//! Встроенные шрифты PDF не содержат лаосских глифов, поэтому TTF шрифт
//! обязан быть зарегистрирован до первого вывода текста, и каждый стиль
//! текста (шапка, тело) обязан ссылаться на него. Порядок закреплён типами:
//! [`PdfBuilder`] умеет только регистрировать шрифт, рисовать умеет
//! [`FontedPdf`], который возвращает регистрация, а [`TextStyle`] можно
//! собрать только из её [`FontHandle`].
//!
//! Текст ячейки переносится по ширине колонки по метрикам того же шрифта,
//! высота строки таблицы растёт вместе с числом строк текста.

use super::font::{FontMetrics, FontResource};
use super::rows::{ExportJob, ExportRow, EXPORT_COLUMNS};
use super::ExportError;
use crate::shared::config::ExportConfig;

pub const PDF_MIME: &str = "application/pdf";

/// Relative column widths: #, sell id, name, price, qty, total, seller, time
const COLUMN_WEIGHTS: [f32; EXPORT_COLUMNS] = [0.6, 1.4, 2.6, 1.3, 0.6, 1.4, 1.6, 2.5];

/// Cell padding, mm
const CELL_PADDING_H_MM: f32 = 1.0;
const CELL_PADDING_V_MM: f32 = 1.2;

const PT_TO_MM: f32 = 25.4 / 72.0;
const LINE_SPACING: f32 = 1.25;

/// A font registered in the current document
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontHandle(usize);

impl FontHandle {
    /// Registration order inside the document
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font: FontHandle,
    pub size_pt: f32,
}

/// Page geometry, mm
#[derive(Clone, Debug, PartialEq)]
pub struct PageSetup {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_mm: f32,
    /// Minimum table row height
    pub row_height_mm: f32,
    pub font_size_pt: f32,
}

impl Default for PageSetup {
    /// A4 portrait
    fn default() -> Self {
        Self {
            width_mm: 210.0,
            height_mm: 297.0,
            margin_mm: 10.0,
            row_height_mm: 7.0,
            font_size_pt: 10.0,
        }
    }
}

impl PageSetup {
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            width_mm: config.page_width_mm,
            height_mm: config.page_height_mm,
            margin_mm: config.margin_mm,
            row_height_mm: config.row_height_mm,
            font_size_pt: config.font_size_pt,
        }
    }

    pub fn column_widths(&self) -> [f32; EXPORT_COLUMNS] {
        let usable = self.width_mm - 2.0 * self.margin_mm;
        let total: f32 = COLUMN_WEIGHTS.iter().sum();
        COLUMN_WEIGHTS.map(|weight| usable * weight / total)
    }

    /// Left edge of every column
    pub fn column_x(&self) -> [f32; EXPORT_COLUMNS] {
        let mut xs = [0.0; EXPORT_COLUMNS];
        let mut x = self.margin_mm;
        for (i, width) in self.column_widths().iter().enumerate() {
            xs[i] = x;
            x += width;
        }
        xs
    }

    pub fn line_height_mm(&self, size_pt: f32) -> f32 {
        size_pt * PT_TO_MM * LINE_SPACING
    }

    /// Height of a table row holding `lines` lines of text
    pub fn row_height(&self, lines: usize, size_pt: f32) -> f32 {
        let text = lines.max(1) as f32 * self.line_height_mm(size_pt) + 2.0 * CELL_PADDING_V_MM;
        text.max(self.row_height_mm)
    }
}

/// Low-level PDF surface
///
/// Fonts are numbered in registration order; [`FontHandle::index`] refers to
/// that order. The first [`PdfBackend::begin_page`] opens the initial page.
/// PDF coordinates grow upwards from the bottom edge.
pub trait PdfBackend {
    fn register_font(&mut self, font: &FontResource) -> Result<(), ExportError>;
    fn begin_page(&mut self) -> Result<(), ExportError>;
    fn draw_text(
        &mut self,
        text: &str,
        style: &TextStyle,
        x_mm: f32,
        y_mm: f32,
    ) -> Result<(), ExportError>;
    fn finish(self) -> Result<Vec<u8>, ExportError>;
}

/// Document before any font is registered: nothing can be drawn yet
pub struct PdfBuilder<B> {
    backend: B,
}

impl<B: PdfBackend> PdfBuilder<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn register_font<'f>(
        mut self,
        font: &'f FontResource,
    ) -> Result<FontedPdf<'f, B>, ExportError> {
        let metrics = font.metrics()?;
        self.backend.register_font(font)?;
        Ok(FontedPdf {
            backend: self.backend,
            font: FontHandle(0),
            metrics,
        })
    }
}

/// Wrapped lines of every cell in a row
type RowLines = Vec<Vec<String>>;

/// Document with its font registered; accepts draw commands
pub struct FontedPdf<'f, B> {
    backend: B,
    font: FontHandle,
    metrics: FontMetrics<'f>,
}

impl<'f, B: PdfBackend> FontedPdf<'f, B> {
    pub fn style(&self, size_pt: f32) -> TextStyle {
        TextStyle {
            font: self.font,
            size_pt,
        }
    }

    /// Header row at the top of every page, then body rows while they fit.
    /// A row never splits across pages.
    pub fn draw_table(
        &mut self,
        titles: &[String],
        rows: &[[String; EXPORT_COLUMNS]],
        header: &TextStyle,
        body: &TextStyle,
        page: &PageSetup,
    ) -> Result<(), ExportError> {
        let header_lines = self.layout_row(titles, header.size_pt, page);
        let mut top = self.start_page(&header_lines, header, page)?;
        let mut on_page = 0;

        for cells in rows {
            let lines = self.layout_row(cells, body.size_pt, page);
            let height = page.row_height(line_count(&lines), body.size_pt);
            if on_page > 0 && top - height < page.margin_mm {
                top = self.start_page(&header_lines, header, page)?;
                on_page = 0;
            }
            self.draw_row(&lines, body, top, page)?;
            top -= height;
            on_page += 1;
        }
        Ok(())
    }

    pub fn finish(self) -> Result<Vec<u8>, ExportError> {
        self.backend.finish()
    }

    fn layout_row(&self, cells: &[String], size_pt: f32, page: &PageSetup) -> RowLines {
        cells
            .iter()
            .zip(page.column_widths())
            .map(|(text, width)| {
                self.metrics
                    .wrap(text, size_pt, width - 2.0 * CELL_PADDING_H_MM)
            })
            .collect()
    }

    /// New page with the header drawn; returns the top of the first body row
    fn start_page(
        &mut self,
        header_lines: &RowLines,
        style: &TextStyle,
        page: &PageSetup,
    ) -> Result<f32, ExportError> {
        self.backend.begin_page()?;
        let top = page.height_mm - page.margin_mm;
        self.draw_row(header_lines, style, top, page)?;
        Ok(top - page.row_height(line_count(header_lines), style.size_pt))
    }

    fn draw_row(
        &mut self,
        lines: &RowLines,
        style: &TextStyle,
        top: f32,
        page: &PageSetup,
    ) -> Result<(), ExportError> {
        let line_height = page.line_height_mm(style.size_pt);
        for (x, cell) in page.column_x().iter().zip(lines) {
            for (i, line) in cell.iter().enumerate() {
                if line.is_empty() {
                    continue;
                }
                let y = top - CELL_PADDING_V_MM - line_height * (i as f32 + 0.8);
                self.backend
                    .draw_text(line, style, x + CELL_PADDING_H_MM, y)?;
            }
        }
        Ok(())
    }
}

fn line_count(lines: &RowLines) -> usize {
    lines.iter().map(Vec::len).max().unwrap_or(1)
}

/// Render the whole export job as a PDF table.
/// Text the font cannot draw fails the export before anything is rendered.
pub fn render_table<B: PdfBackend>(
    backend: B,
    font: &FontResource,
    job: &ExportJob,
    page: &PageSetup,
) -> Result<Vec<u8>, ExportError> {
    let rows: Vec<[String; EXPORT_COLUMNS]> = job.rows.iter().map(ExportRow::text_cells).collect();
    font.require_glyphs(
        job.titles
            .iter()
            .chain(rows.iter().flatten())
            .map(String::as_str),
    )?;

    let mut doc = PdfBuilder::new(backend).register_font(font)?;
    let header = doc.style(page.font_size_pt);
    let body = doc.style(page.font_size_pt);
    doc.draw_table(&job.titles, &rows, &header, &body, page)?;
    doc.finish()
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Op {
        RegisterFont(String),
        BeginPage,
        Text {
            text: String,
            font: usize,
            x: f32,
            y: f32,
        },
        Finish,
    }

    /// Records every call; optionally fails on the n-th text draw
    #[derive(Default)]
    pub struct RecordingBackend {
        pub log: Rc<RefCell<Vec<Op>>>,
        pub fail_on_text: Option<usize>,
        fonts: usize,
        texts: usize,
    }

    impl RecordingBackend {
        pub fn with_log(log: Rc<RefCell<Vec<Op>>>) -> Self {
            Self {
                log,
                ..Default::default()
            }
        }
    }

    impl PdfBackend for RecordingBackend {
        fn register_font(&mut self, font: &FontResource) -> Result<(), ExportError> {
            self.fonts += 1;
            self.log
                .borrow_mut()
                .push(Op::RegisterFont(font.family().to_string()));
            Ok(())
        }

        fn begin_page(&mut self) -> Result<(), ExportError> {
            self.log.borrow_mut().push(Op::BeginPage);
            Ok(())
        }

        fn draw_text(
            &mut self,
            text: &str,
            style: &TextStyle,
            x_mm: f32,
            y_mm: f32,
        ) -> Result<(), ExportError> {
            if style.font.index() >= self.fonts {
                return Err(ExportError::Pdf("text drawn with unregistered font".into()));
            }
            if self.fail_on_text == Some(self.texts) {
                return Err(ExportError::Pdf("backend rejected text".into()));
            }
            self.texts += 1;
            self.log.borrow_mut().push(Op::Text {
                text: text.to_string(),
                font: style.font.index(),
                x: x_mm,
                y: y_mm,
            });
            Ok(())
        }

        fn finish(self) -> Result<Vec<u8>, ExportError> {
            self.log.borrow_mut().push(Op::Finish);
            Ok(b"%PDF-recorded".to_vec())
        }
    }

    pub fn test_font() -> FontResource {
        FontResource::bundled().expect("bundled font")
    }
}
