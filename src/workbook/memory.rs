//! メモリ上のワークブック（組み立て済みグリッドから作る）

use super::grid::Grid;
use super::WorkbookSource;
use crate::error::{Result, ScanError};

#[derive(Debug, Clone, Default)]
pub struct MemoryWorkbook {
    sheets: Vec<(String, Grid)>,
}

impl MemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, name: &str, grid: Grid) -> Self {
        self.sheets.push((name.to_string(), grid));
        self
    }
}

impl WorkbookSource for MemoryWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|(name, _)| name.clone()).collect()
    }

    fn read_sheet(&mut self, name: &str) -> Result<Grid> {
        self.sheets
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, grid)| grid.clone())
            .ok_or_else(|| ScanError::SheetNotFound(name.to_string()))
    }
}
