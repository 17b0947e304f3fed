//! calamine によるワークブック読み込み
//!
//! シートは行の順次走査でのみグリッド化する（セル単位のランダムアクセスはしない）。

use super::grid::{CellValue, Grid};
use super::WorkbookSource;
use crate::error::{Result, ScanError};
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// ディスク上の .xlsx（calamine が読める形式）
pub struct XlsxWorkbook {
    sheets: Sheets<BufReader<File>>,
    names: Vec<String>,
}

impl XlsxWorkbook {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ScanError::FileNotFound(path.display().to_string()));
        }
        let sheets = open_workbook_auto(path)?;
        let names = sheets.sheet_names();
        Ok(Self { sheets, names })
    }
}

impl WorkbookSource for XlsxWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.names.clone()
    }

    fn read_sheet(&mut self, name: &str) -> Result<Grid> {
        if !self.names.iter().any(|n| n == name) {
            return Err(ScanError::SheetNotFound(name.to_string()));
        }
        let range = self.sheets.worksheet_range(name)?;
        Ok(grid_from_range(&range))
    }
}

/// calamine の Range を疎グリッドに変換
pub fn grid_from_range(range: &Range<Data>) -> Grid {
    let mut grid = Grid::new();

    // データはA1から始まるとは限らない
    let (start_row, start_col) = range.start().unwrap_or((0, 0));

    for (row_idx, row) in range.rows().enumerate() {
        let target_row = start_row + row_idx as u32 + 1;
        for (col_idx, cell) in row.iter().enumerate() {
            let target_col = start_col + col_idx as u32 + 1;
            if let Some(value) = cell_value(cell) {
                grid.insert(target_row, target_col, value);
            }
        }
    }

    if let Some((end_row, _)) = range.end() {
        grid.set_row_count(end_row + 1);
    }

    grid
}

fn cell_value(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(CellValue::Text(s.clone())),
        Data::Float(n) => Some(CellValue::Number(*n)),
        Data::Int(n) => Some(CellValue::Number(*n as f64)),
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        Data::DateTime(dt) => Some(
            excel_serial_to_datetime(dt.as_f64())
                .map(CellValue::Date)
                .unwrap_or(CellValue::Number(dt.as_f64())),
        ),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
        Data::Error(e) => Some(CellValue::Error(format!("#{:?}", e))),
    }
}

/// Excelのシリアル値（1900年方式）を日時に変換
fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let millis = (serial * 86_400_000.0).round() as i64;
    epoch.checked_add_signed(Duration::milliseconds(millis))
}
