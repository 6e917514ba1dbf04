use crate::shared::export::{ExportJob, FontResource};
use crate::shared::list_state::ListState;
use chrono::{DateTime, TimeZone};
use contracts::domain::a001_sale::dto::{sales_total, SaleRecord};
use leptos::prelude::*;
use std::fmt::Display;

#[derive(Clone, Debug, Default)]
pub struct SaleListState {
    pub list: ListState<SaleRecord>,
    /// Шрифт для PDF: встроенный или загруженный по `export.font_url`
    pub font: Option<FontResource>,
}

impl SaleListState {
    /// Empty list, PDF font from the binary
    pub fn new() -> Self {
        let font = match FontResource::bundled() {
            Ok(font) => Some(font),
            Err(e) => {
                log::error!("Bundled export font rejected: {}", e);
                None
            }
        };
        Self {
            font,
            ..Default::default()
        }
    }

    /// Итог по загруженным строкам
    pub fn total(&self) -> f64 {
        sales_total(self.list.items())
    }

    /// Снимок текущих строк для выгрузки
    pub fn export_job<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> ExportJob
    where
        Tz::Offset: Display,
    {
        ExportJob::from_records(self.list.items(), now)
    }
}

// State lives in the component scope and is disposed on unmount
pub fn create_state() -> RwSignal<SaleListState> {
    RwSignal::new(SaleListState::new())
}
