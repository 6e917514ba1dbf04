//! Плоские строки отчёта о продажах для выгрузки

use crate::shared::components::table::number_format::format_amount;
use crate::shared::date_utils::{file_stamp, format_sale_time, EXPORT_DATETIME_FORMAT};
use chrono::{DateTime, TimeZone};
use contracts::domain::a001_sale::dto::SaleRecord;
use std::fmt::Display;

/// Число колонок выгрузки
pub const EXPORT_COLUMNS: usize = 8;

/// Заголовки колонок (лаосский): #, sell id, name, price, qty, total, seller, time
pub const EXPORT_TITLES: [&str; EXPORT_COLUMNS] = [
    "ລ/ດ",
    "ລະຫັດຂາຍ",
    "ຊື່ສິນຄ້າ",
    "ລາຄາ",
    "ຈ/ນ",
    "ລວມ",
    "ຜູ້ຂາຍ",
    "ເວລາຂາຍ",
];

/// "Sales list"
pub const EXPORT_BASE_NAME: &str = "ລາຍການຂາຍ";

/// Spreadsheet cell value
#[derive(Clone, Debug, PartialEq)]
pub enum ExportCell {
    Number(f64),
    Text(String),
}

impl ExportCell {
    pub fn as_text(&self) -> String {
        match self {
            ExportCell::Number(n) => format!("{}", n),
            ExportCell::Text(s) => s.clone(),
        }
    }
}

/// Одна строка выгрузки, уже отформатированная для показа
#[derive(Clone, Debug, PartialEq)]
pub struct ExportRow {
    /// 1-based
    pub no: usize,
    pub sell_id: String,
    pub name: String,
    pub price: String,
    pub qty: Option<i64>,
    pub total: String,
    pub seller: String,
    pub sold_at: String,
}

impl ExportRow {
    pub fn from_record<Tz: TimeZone>(index: usize, record: &SaleRecord, tz: &Tz) -> Self {
        Self {
            no: index + 1,
            sell_id: record.sell_id.to_string(),
            name: record.name.clone(),
            price: format_amount(record.price()),
            qty: record.qty,
            total: format_amount(record.line_total()),
            seller: record.username.clone(),
            sold_at: format_sale_time(record.selled_at.as_ref(), tz, EXPORT_DATETIME_FORMAT),
        }
    }

    /// Cells in the fixed column order
    pub fn cells(&self) -> [ExportCell; EXPORT_COLUMNS] {
        [
            ExportCell::Number(self.no as f64),
            ExportCell::Text(self.sell_id.clone()),
            ExportCell::Text(self.name.clone()),
            ExportCell::Text(self.price.clone()),
            match self.qty {
                Some(q) => ExportCell::Number(q as f64),
                None => ExportCell::Text(String::new()),
            },
            ExportCell::Text(self.total.clone()),
            ExportCell::Text(self.seller.clone()),
            ExportCell::Text(self.sold_at.clone()),
        ]
    }

    pub fn text_cells(&self) -> [String; EXPORT_COLUMNS] {
        self.cells().map(|cell| cell.as_text())
    }
}

/// Everything one export needs: titles, rows, and the shared base name
#[derive(Clone, Debug, PartialEq)]
pub struct ExportJob {
    pub titles: Vec<String>,
    pub rows: Vec<ExportRow>,
    pub base_name: String,
}

impl ExportJob {
    /// Snapshot of `records` at `now`; timestamps are shown in `now`'s zone
    pub fn from_records<Tz: TimeZone>(records: &[SaleRecord], now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: Display,
    {
        let tz = now.timezone();
        Self {
            titles: EXPORT_TITLES.iter().map(|t| t.to_string()).collect(),
            rows: records
                .iter()
                .enumerate()
                .map(|(i, r)| ExportRow::from_record(i, r, &tz))
                .collect(),
            base_name: base_name(now),
        }
    }

    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.base_name, extension)
    }
}

/// `ລາຍການຂາຍ - 2024-03-15-140226`
pub fn base_name<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!("{} - {}", EXPORT_BASE_NAME, file_stamp(now))
}
