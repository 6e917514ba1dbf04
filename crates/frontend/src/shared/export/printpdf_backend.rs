/// [`PdfBackend`] поверх printpdf
use super::font::FontResource;
use super::pdf::{PageSetup, PdfBackend, TextStyle};
use super::ExportError;
use printpdf::{IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerIndex, PdfPageIndex};
use std::io::Cursor;

const LAYER_NAME: &str = "Layer 1";

pub struct PrintPdfBackend {
    doc: PdfDocumentReference,
    width: Mm,
    height: Mm,
    /// Первая страница создаётся вместе с документом
    first_page: Option<(PdfPageIndex, PdfLayerIndex)>,
    current: (PdfPageIndex, PdfLayerIndex),
    fonts: Vec<IndirectFontRef>,
}

impl PrintPdfBackend {
    pub fn new(title: &str, page: &PageSetup) -> Self {
        let width = Mm(page.width_mm);
        let height = Mm(page.height_mm);
        let (doc, page_index, layer_index) = PdfDocument::new(title, width, height, LAYER_NAME);
        Self {
            doc,
            width,
            height,
            first_page: Some((page_index, layer_index)),
            current: (page_index, layer_index),
            fonts: Vec::new(),
        }
    }
}

impl PdfBackend for PrintPdfBackend {
    fn register_font(&mut self, font: &FontResource) -> Result<(), ExportError> {
        let reference = self
            .doc
            .add_external_font(Cursor::new(font.bytes()))
            .map_err(|e| ExportError::FontRegistration(format!("{}: {}", font.family(), e)))?;
        self.fonts.push(reference);
        Ok(())
    }

    fn begin_page(&mut self) -> Result<(), ExportError> {
        self.current = match self.first_page.take() {
            Some(first) => first,
            None => self.doc.add_page(self.width, self.height, LAYER_NAME),
        };
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        style: &TextStyle,
        x_mm: f32,
        y_mm: f32,
    ) -> Result<(), ExportError> {
        let font = self
            .fonts
            .get(style.font.index())
            .ok_or_else(|| ExportError::Pdf(format!("font #{} is not registered", style.font.index())))?;
        let (page, layer) = self.current;
        self.doc
            .get_page(page)
            .get_layer(layer)
            .use_text(text, style.size_pt, Mm(x_mm), Mm(y_mm), font);
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>, ExportError> {
        self.doc
            .save_to_bytes()
            .map_err(|e| ExportError::Pdf(e.to_string()))
    }
}
