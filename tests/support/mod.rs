//! テスト用の見積ワークブック生成
//!
//! 行・列は抽出側と同じく1始まりで指定する。

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::Path;

pub enum Cell {
    Text(String),
    Number(f64),
}

pub struct Sheet {
    pub name: String,
    pub cells: Vec<(u32, u32, Cell)>,
}

impl Sheet {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cells: Vec::new(),
        }
    }

    pub fn text(mut self, row: u32, col: u32, text: &str) -> Self {
        self.cells.push((row, col, Cell::Text(text.to_string())));
        self
    }

    pub fn number(mut self, row: u32, col: u32, value: f64) -> Self {
        self.cells.push((row, col, Cell::Number(value)));
        self
    }
}

pub fn write_workbook(path: &Path, sheets: &[Sheet]) {
    let mut workbook = Workbook::new();
    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name).unwrap();
        for (row, col, cell) in &sheet.cells {
            let (r, c) = (row - 1, (col - 1) as u16);
            match cell {
                Cell::Text(text) => worksheet.write_string(r, c, text.as_str()).unwrap(),
                Cell::Number(value) => worksheet.write_number(r, c, *value).unwrap(),
            };
        }
    }
    workbook.save(path).unwrap();
}

/// FORMAT_A の見積（Overview + Templates + 版違いの2シート）
pub fn format_a_workbook(path: &Path) {
    let main = Sheet::new("Acme Launch 3-4")
        .number(4, 11, 12000.0)
        .number(5, 11, 9000.0)
        .number(4, 12, 3000.0)
        .number(4, 13, 0.25)
        .number(4, 14, 500.0)
        .number(4, 24, 11000.0)
        .number(5, 24, 8500.0)
        .text(10, 2, "PLANNING & ADMINISTRATION")
        .text(11, 2, "Event Manager")
        .text(14, 2, "Total Planning")
        .number(14, 8, 1500.0)
        .text(20, 2, "ONSITE LABOR ACTIVITY")
        .number(21, 1, 4000.16)
        .text(21, 2, "Vehicle Manader (OT)")
        .number(21, 5, 97.5)
        .number(21, 13, 60.0)
        .number(22, 1, 4000.16)
        .text(22, 2, "VEHICLE MANAGER (/HR)")
        .number(22, 5, 65.0)
        .number(22, 13, 40.0)
        .text(23, 2, "---")
        .number(23, 5, 10.0)
        .number(24, 1, 4000.2)
        .text(24, 2, "Greeters (/hr)")
        .number(24, 5, 35.0)
        .text(25, 2, "TOTAL LABOR")
        .number(25, 8, 5000.0)
        .number(25, 22, 4800.0)
        .text(40, 2, "GRAND TOTAL")
        .number(40, 8, 12000.0);

    let older = Sheet::new("Acme Launch 3-11")
        .text(20, 2, "ONSITE LABOR ACTIVITY")
        .text(21, 2, "Photographer")
        .number(21, 5, 150.0)
        .text(22, 2, "TOTAL LABOR")
        .text(30, 2, "GRAND TOTAL")
        .number(30, 8, 8000.0);

    write_workbook(
        path,
        &[
            Sheet::new("Overview").text(1, 1, "Client overview"),
            Sheet::new("Templates").text(1, 1, "template rows"),
            main,
            older,
        ],
    );
}

/// FORMAT_B の見積（P&L キーワード付きの1シート）
pub fn format_b_workbook(path: &Path) {
    let sheet = Sheet::new("Budget")
        .text(4, 15, "Revenue")
        .number(4, 16, 20000.0)
        .text(5, 15, "Net Rev")
        .number(5, 16, 18000.0)
        .number(7, 16, 0.3)
        .text(10, 2, "ONSITE LABOR ACTIVITY")
        .text(11, 2, "Vehicle Manager (Weekend Rate)")
        .number(11, 5, 80.0)
        .text(12, 2, "Greeter(s) (per hour)")
        .text(12, 5, "$32.50")
        .text(13, 2, "Driver OT")
        .number(13, 5, 0.0)
        .text(15, 2, "TOTAL ONSITE LABOR")
        .number(15, 8, 7000.0)
        .text(30, 2, "GRAND TOTAL")
        .number(30, 8, 20000.0);

    write_workbook(path, &[sheet]);
}

/// xlsx として開けないファイル
pub fn corrupt_workbook(path: &Path) {
    std::fs::write(path, b"this is not a zip archive").unwrap();
}
