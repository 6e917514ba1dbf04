//! Выгрузка отчёта о продажах в Excel и PDF.
//!
//! Оба формата строятся из одного [`ExportJob`], поэтому колонки, строки и
//! имя файла у них совпадают. Любая ошибка рендера или скачивания
//! заканчивается ровно одним уведомлением и без скачивания.

pub mod download;
pub mod font;
pub mod pdf;
pub mod printpdf_backend;
pub mod rows;
pub mod xlsx;

pub use download::{BrowserDownload, FileSaver};
pub use font::FontResource;
pub use pdf::{PageSetup, PdfBackend};
pub use rows::{ExportJob, ExportRow};

use crate::shared::notify::{Notice, Notifier};
use printpdf_backend::PrintPdfBackend;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export font is not loaded")]
    FontMissing,
    #[error("font registration failed: {0}")]
    FontRegistration(String),
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
    #[error("pdf error: {0}")]
    Pdf(String),
    #[error("download failed: {0}")]
    Download(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Excel,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Excel, ExportFormat::Pdf];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Excel => xlsx::XLSX_MIME,
            ExportFormat::Pdf => pdf::PDF_MIME,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "Excel",
            ExportFormat::Pdf => "PDF",
        }
    }

    /// Ключ пункта меню "Export"
    pub fn menu_key(&self) -> &'static str {
        self.extension()
    }

    pub fn from_menu_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.menu_key() == key)
    }
}

/// Turns an export job into file bytes
pub trait DocumentRenderer {
    fn render(&self, job: &ExportJob, format: ExportFormat) -> Result<Vec<u8>, ExportError>;
}

/// Excel через rust_xlsxwriter, PDF через backend из фабрики
pub struct StandardRenderer<F> {
    font: Option<FontResource>,
    page: PageSetup,
    backend: F,
}

impl<F, B> StandardRenderer<F>
where
    F: Fn(&str, &PageSetup) -> B,
    B: PdfBackend,
{
    pub fn new(font: Option<FontResource>, page: PageSetup, backend: F) -> Self {
        Self {
            font,
            page,
            backend,
        }
    }
}

impl<F, B> DocumentRenderer for StandardRenderer<F>
where
    F: Fn(&str, &PageSetup) -> B,
    B: PdfBackend,
{
    fn render(&self, job: &ExportJob, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
        match format {
            ExportFormat::Excel => xlsx::write_workbook(job),
            ExportFormat::Pdf => {
                let font = self.font.as_ref().ok_or(ExportError::FontMissing)?;
                let backend = (self.backend)(&job.base_name, &self.page);
                pdf::render_table(backend, font, job, &self.page)
            }
        }
    }
}

pub type BrowserRenderer = StandardRenderer<fn(&str, &PageSetup) -> PrintPdfBackend>;

pub fn browser_renderer(font: Option<FontResource>, page: PageSetup) -> BrowserRenderer {
    StandardRenderer::new(
        font,
        page,
        PrintPdfBackend::new as fn(&str, &PageSetup) -> PrintPdfBackend,
    )
}

/// Render, save, and report failures to the user
pub struct ExportPipeline<S, N> {
    saver: S,
    notifier: N,
}

impl<S: FileSaver, N: Notifier> ExportPipeline<S, N> {
    pub fn new(saver: S, notifier: N) -> Self {
        Self { saver, notifier }
    }

    /// Returns the saved file name, or `None` after notifying the user
    pub fn run<R: DocumentRenderer>(
        &self,
        renderer: &R,
        job: &ExportJob,
        format: ExportFormat,
    ) -> Option<String> {
        let file_name = job.file_name(format.extension());
        let result = renderer
            .render(job, format)
            .and_then(|bytes| self.saver.save(&file_name, format.mime_type(), &bytes));

        match result {
            Ok(()) => {
                log::info!(
                    "Exported {} rows to {} ({})",
                    job.rows.len(),
                    file_name,
                    format.label()
                );
                Some(file_name)
            }
            Err(e) => {
                log::error!("{} export failed: {}", format.label(), e);
                self.notifier.notify(Notice::export_failed());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pdf::testing::{test_font, Op, RecordingBackend};
    use super::rows::EXPORT_TITLES;
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingSaver {
        saved: RefCell<Vec<(String, String, Vec<u8>)>>,
        fail: bool,
    }

    impl FileSaver for RecordingSaver {
        fn save(&self, file_name: &str, mime_type: &str, bytes: &[u8]) -> Result<(), ExportError> {
            if self.fail {
                return Err(ExportError::Download("blocked".into()));
            }
            self.saved
                .borrow_mut()
                .push((file_name.to_string(), mime_type.to_string(), bytes.to_vec()));
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: RefCell<Vec<Notice>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }
    }

    fn job() -> ExportJob {
        ExportJob {
            titles: EXPORT_TITLES.iter().map(|t| t.to_string()).collect(),
            rows: vec![ExportRow {
                no: 1,
                sell_id: "S-7".into(),
                name: "ນ້ຳດື່ມ".into(),
                price: "5,000".into(),
                qty: Some(4),
                total: "20,000".into(),
                seller: "ຄຳ".into(),
                sold_at: "2024-03-15 14:02".into(),
            }],
            base_name: "ລາຍການຂາຍ - 2024-03-15-140226".into(),
        }
    }

    fn pipeline() -> ExportPipeline<RecordingSaver, RecordingNotifier> {
        ExportPipeline::new(RecordingSaver::default(), RecordingNotifier::default())
    }

    fn recording_renderer(
        font: Option<FontResource>,
        log: Rc<RefCell<Vec<Op>>>,
    ) -> StandardRenderer<impl Fn(&str, &PageSetup) -> RecordingBackend> {
        StandardRenderer::new(font, PageSetup::default(), move |_: &str, _: &PageSetup| {
            RecordingBackend::with_log(log.clone())
        })
    }

    #[test]
    fn test_pdf_export_saves_once_without_notice() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let renderer = recording_renderer(Some(test_font()), log.clone());
        let pipeline = pipeline();

        let name = pipeline.run(&renderer, &job(), ExportFormat::Pdf);

        assert_eq!(name.as_deref(), Some("ລາຍການຂາຍ - 2024-03-15-140226.pdf"));
        let saved = pipeline.saver.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].1, "application/pdf");
        assert_eq!(saved[0].2, b"%PDF-recorded".to_vec());
        assert!(pipeline.notifier.notices.borrow().is_empty());
        assert_eq!(
            log.borrow()[0],
            Op::RegisterFont(font::BUNDLED_FONT_FAMILY.into())
        );
    }

    #[test]
    fn test_excel_export_does_not_need_font() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let renderer = recording_renderer(None, log.clone());
        let pipeline = pipeline();

        let name = pipeline.run(&renderer, &job(), ExportFormat::Excel);

        assert_eq!(name.as_deref(), Some("ລາຍການຂາຍ - 2024-03-15-140226.xlsx"));
        let saved = pipeline.saver.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].1, xlsx::XLSX_MIME);
        assert_eq!(&saved[0].2[..2], b"PK");
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_missing_font_notifies_once_and_saves_nothing() {
        let renderer = recording_renderer(None, Rc::default());
        let pipeline = pipeline();

        assert_eq!(pipeline.run(&renderer, &job(), ExportFormat::Pdf), None);
        assert!(pipeline.saver.saved.borrow().is_empty());
        assert_eq!(
            pipeline.notifier.notices.borrow().as_slice(),
            &[Notice::export_failed()]
        );
    }

    #[test]
    fn test_backend_failure_notifies_once_and_saves_nothing() {
        let log: Rc<RefCell<Vec<Op>>> = Rc::default();
        let renderer = StandardRenderer::new(
            Some(test_font()),
            PageSetup::default(),
            move |_: &str, _: &PageSetup| {
                let mut backend = RecordingBackend::with_log(log.clone());
                backend.fail_on_text = Some(0);
                backend
            },
        );
        let pipeline = pipeline();

        assert_eq!(pipeline.run(&renderer, &job(), ExportFormat::Pdf), None);
        assert!(pipeline.saver.saved.borrow().is_empty());
        assert_eq!(pipeline.notifier.notices.borrow().len(), 1);
    }

    #[test]
    fn test_download_failure_notifies() {
        let renderer = recording_renderer(Some(test_font()), Rc::default());
        let pipeline = ExportPipeline::new(
            RecordingSaver {
                fail: true,
                ..Default::default()
            },
            RecordingNotifier::default(),
        );

        assert_eq!(pipeline.run(&renderer, &job(), ExportFormat::Excel), None);
        assert_eq!(
            pipeline.notifier.notices.borrow()[0].description,
            "ດາວໂຫລດບໍ່ສຳເລັດ"
        );
    }

    #[test]
    fn test_format_menu_keys() {
        assert_eq!(ExportFormat::from_menu_key("xlsx"), Some(ExportFormat::Excel));
        assert_eq!(ExportFormat::from_menu_key("pdf"), Some(ExportFormat::Pdf));
        assert_eq!(ExportFormat::from_menu_key("csv"), None);
        assert_eq!(ExportFormat::Pdf.mime_type(), "application/pdf");
    }
}
