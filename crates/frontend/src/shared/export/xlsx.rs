/// Выгрузка в Excel (.xlsx)
use super::rows::{ExportCell, ExportJob};
use super::ExportError;
use rust_xlsxwriter::Workbook;

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Sheet contents: header row of titles, then one row per record
pub fn sheet_grid(job: &ExportJob) -> Vec<Vec<ExportCell>> {
    let mut grid = Vec::with_capacity(job.rows.len() + 1);
    grid.push(
        job.titles
            .iter()
            .map(|t| ExportCell::Text(t.clone()))
            .collect(),
    );
    for row in &job.rows {
        grid.push(row.cells().to_vec());
    }
    grid
}

/// Serialize the job into an in-memory workbook
pub fn write_workbook(job: &ExportJob) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (r, cells) in sheet_grid(job).iter().enumerate() {
        let row = r as u32;
        for (c, cell) in cells.iter().enumerate() {
            let col = c as u16;
            match cell {
                ExportCell::Number(n) => {
                    worksheet.write_number(row, col, *n)?;
                }
                ExportCell::Text(s) if s.is_empty() => {}
                ExportCell::Text(s) => {
                    worksheet.write_string(row, col, s)?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::rows::{ExportRow, EXPORT_TITLES};

    fn job() -> ExportJob {
        ExportJob {
            titles: EXPORT_TITLES.iter().map(|t| t.to_string()).collect(),
            rows: vec![ExportRow {
                no: 1,
                sell_id: "S-1".into(),
                name: "ກາເຟ".into(),
                price: "20,000".into(),
                qty: Some(2),
                total: "40,000".into(),
                seller: "ແສງ".into(),
                sold_at: "2024-03-15 14:02".into(),
            }],
            base_name: "ລາຍການຂາຍ - 2024-03-15-140226".into(),
        }
    }

    #[test]
    fn test_grid_header_then_rows() {
        let grid = sheet_grid(&job());
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0][0], ExportCell::Text("ລ/ດ".into()));
        assert_eq!(grid[0][7], ExportCell::Text("ເວລາຂາຍ".into()));
        assert_eq!(grid[1][0], ExportCell::Number(1.0));
        assert_eq!(grid[1][2], ExportCell::Text("ກາເຟ".into()));
        assert_eq!(grid[1][5], ExportCell::Text("40,000".into()));
    }

    #[test]
    fn test_workbook_is_a_zip_container() {
        let bytes = write_workbook(&job()).unwrap();
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_empty_job_still_writes_headers() {
        let mut empty = job();
        empty.rows.clear();
        assert_eq!(sheet_grid(&empty).len(), 1);
        assert!(write_workbook(&empty).is_ok());
    }
}
