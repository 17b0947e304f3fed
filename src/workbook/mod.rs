//! ワークブックアクセス
//!
//! シート一覧とシートごとの疎グリッドを提供する。グリッドは必要になった
//! シートだけ読み込み、ワークブックを破棄するまでキャッシュする。

pub mod grid;
pub mod memory;
pub mod xlsx;

pub use grid::{CellValue, Grid};
pub use memory::MemoryWorkbook;
pub use xlsx::XlsxWorkbook;

use crate::error::Result;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

/// シートを読み出せる文書
pub trait WorkbookSource {
    /// シート名（文書内の順序）
    fn sheet_names(&self) -> Vec<String>;

    /// シート全体を順次走査してグリッド化する
    fn read_sheet(&mut self, name: &str) -> Result<Grid>;
}

/// グリッドを遅延読み込みするワークブック
pub struct Workbook<S> {
    source: S,
    names: Vec<String>,
    grids: HashMap<String, Rc<Grid>>,
}

impl Workbook<XlsxWorkbook> {
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(XlsxWorkbook::open(path)?))
    }
}

impl<S: WorkbookSource> Workbook<S> {
    pub fn new(source: S) -> Self {
        let names = source.sheet_names();
        Self {
            source,
            names,
            grids: HashMap::new(),
        }
    }

    pub fn sheet_names(&self) -> &[String] {
        &self.names
    }

    /// シートのグリッド（初回のみ読み込み）
    pub fn grid(&mut self, name: &str) -> Result<Rc<Grid>> {
        if let Some(grid) = self.grids.get(name) {
            return Ok(Rc::clone(grid));
        }
        let grid = Rc::new(self.source.read_sheet(name)?);
        self.grids.insert(name.to_string(), Rc::clone(&grid));
        Ok(grid)
    }

    /// 読み込み済みのシート数
    pub fn loaded_sheets(&self) -> usize {
        self.grids.len()
    }
}
