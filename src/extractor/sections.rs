//! セクション見出しと合計行の探索

use super::layout::{
    BID_TOTAL_COL, GRAND_TOTAL_LABEL, LABEL_COL, RECAP_TOTAL_COL, SECTION_TOTAL_WINDOW,
};
use crate::workbook::Grid;
use estimate_scan_common::alias::header_key;
use estimate_scan_common::{canonical_section, is_section_header, Dialect, SectionInfo};
use std::collections::BTreeMap;

/// B列の見出しを探し、正規名 → 開始行 を返す
///
/// 同じ正規名が複数回現れた場合は最後の行を採用する。
pub fn find_sections(grid: &Grid) -> BTreeMap<String, u32> {
    let mut sections = BTreeMap::new();
    for row in 1..=grid.max_row() {
        if let Some(text) = grid.text(row, LABEL_COL) {
            if let Some(canonical) = canonical_section(&text) {
                sections.insert(canonical.to_string(), row);
            }
        }
    }
    sections
}

/// 各セクションの合計行と合計値を求める
pub fn find_section_totals(
    grid: &Grid,
    sections: &BTreeMap<String, u32>,
    dialect: Dialect,
) -> BTreeMap<String, SectionInfo> {
    sections
        .iter()
        .map(|(name, &start_row)| {
            let total_row = find_total_row(grid, start_row);
            let bid_total = total_row.and_then(|row| grid.number(row, BID_TOTAL_COL));
            let recap_total = match (total_row, dialect) {
                (Some(row), Dialect::A) => grid.number(row, RECAP_TOTAL_COL),
                _ => None,
            };
            let info = SectionInfo {
                canonical_name: name.clone(),
                section_exists: true,
                start_row,
                total_row,
                bid_total,
                recap_total,
            };
            (name.clone(), info)
        })
        .collect()
}

/// 見出し行の下から "TOTAL" で始まる行を探す
///
/// 最大 `SECTION_TOTAL_WINDOW` 行まで。先に別の見出しが現れたら打ち切る。
pub fn find_total_row(grid: &Grid, start_row: u32) -> Option<u32> {
    let last_row = start_row.saturating_add(SECTION_TOTAL_WINDOW).min(grid.max_row());
    for row in start_row + 1..=last_row {
        let text = match grid.text(row, LABEL_COL) {
            Some(text) => text,
            None => continue,
        };
        if header_key(&text).starts_with("TOTAL") {
            return Some(row);
        }
        if is_section_header(&text) {
            return None;
        }
    }
    None
}

/// "GRAND TOTAL" 行のH列の値
pub fn find_grand_total(grid: &Grid) -> Option<f64> {
    (1..=grid.max_row())
        .find(|&row| {
            grid.text(row, LABEL_COL)
                .map(|text| header_key(&text) == GRAND_TOTAL_LABEL)
                .unwrap_or(false)
        })
        .and_then(|row| grid.number(row, BID_TOTAL_COL))
}
