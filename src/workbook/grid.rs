//! シートの疎グリッド
//!
//! (行, 列) → セル値 の疎マップ。行・列は1始まり。
//! 空セルは格納しない（暗黙の0や空文字を作らない）。

use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::fmt;

/// セル値
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDateTime),
    Error(String),
}

impl CellValue {
    /// 数値として解釈する
    ///
    /// 数値セルはそのまま、文字列は `$` と `,` を除いてパースする。
    /// 日付・真偽値・エラーは数値扱いしない。
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => {
                let cleaned = s.replace(['$', ','], "");
                let cleaned = cleaned.trim();
                if cleaned.is_empty() {
                    None
                } else {
                    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
                }
            }
            _ => None,
        }
    }

    /// GLコードの形（小数点を含み 1000〜9999.99 の数値）か
    pub fn is_gl_code(&self) -> bool {
        let value = match self {
            CellValue::Number(n) => *n,
            CellValue::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) => n,
                Err(_) => return false,
            },
            _ => return false,
        };
        self.to_string().contains('.') && (1000.0..=9999.99).contains(&value)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            // 整数値は小数点なしで表示
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => f.write_str(if *b { "TRUE" } else { "FALSE" }),
            CellValue::Date(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Error(e) => f.write_str(e),
        }
    }
}

/// 1シート分の疎グリッド
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    cells: HashMap<(u32, u32), CellValue>,
    max_row: u32,
    row_count: u32,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// セルを設定する（空文字列は格納しない）
    pub fn insert(&mut self, row: u32, col: u32, value: CellValue) {
        if let CellValue::Text(s) = &value {
            if s.is_empty() {
                return;
            }
        }
        self.max_row = self.max_row.max(row);
        self.row_count = self.row_count.max(row);
        self.cells.insert((row, col), value);
    }

    pub fn with_text(mut self, row: u32, col: u32, text: &str) -> Self {
        self.insert(row, col, CellValue::Text(text.to_string()));
        self
    }

    pub fn with_number(mut self, row: u32, col: u32, value: f64) -> Self {
        self.insert(row, col, CellValue::Number(value));
        self
    }

    pub fn get(&self, row: u32, col: u32) -> Option<&CellValue> {
        self.cells.get(&(row, col))
    }

    /// trim済みの文字列表現（空なら None）
    pub fn text(&self, row: u32, col: u32) -> Option<String> {
        let text = self.get(row, col)?.to_string();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub fn number(&self, row: u32, col: u32) -> Option<f64> {
        self.get(row, col).and_then(CellValue::as_f64)
    }

    /// 値のある最終行
    pub fn max_row(&self) -> u32 {
        self.max_row
    }

    /// シートの行数（末尾の空行を含む範囲）
    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    pub(crate) fn set_row_count(&mut self, rows: u32) {
        self.row_count = self.row_count.max(rows);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
