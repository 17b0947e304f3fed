//! 労務セクションの明細行抽出

use super::layout::{
    COST_RATE_COL, GL_COL, LABEL_COL, LABOR_FALLBACK_WINDOW, PLACEHOLDER_LABEL, UNIT_RATE_COL,
};
use crate::workbook::Grid;
use estimate_scan_common::alias::{header_key, LABOR_SECTION};
use estimate_scan_common::{is_section_header, Dialect, LaborRoleRow, SectionInfo};
use regex::Regex;
use std::collections::BTreeMap;

/// 労務セクションの見出し行と合計行の間にある明細を取り出す
///
/// 単価が正の数でない行（小見出し・小計の説明など）は捨てる。
pub fn extract_labor_roles(
    grid: &Grid,
    sections: &BTreeMap<String, SectionInfo>,
    dialect: Dialect,
) -> Vec<LaborRoleRow> {
    let section = match sections.get(LABOR_SECTION) {
        Some(section) => section,
        None => return Vec::new(),
    };

    let start_row = section.start_row;
    let end_row = section
        .total_row
        .unwrap_or_else(|| start_row.saturating_add(LABOR_FALLBACK_WINDOW));

    let mut roles = Vec::new();
    for row in start_row + 1..end_row {
        let label = match grid.text(row, LABEL_COL) {
            Some(label) => label,
            None => continue,
        };
        if label == PLACEHOLDER_LABEL
            || is_section_header(&label)
            || header_key(&label).starts_with("TOTAL")
        {
            continue;
        }

        let unit_rate = match grid.number(row, UNIT_RATE_COL) {
            Some(rate) if rate > 0.0 => rate,
            _ => continue,
        };

        let gl_code = match dialect {
            Dialect::A => grid.text(row, GL_COL),
            _ => None,
        };

        roles.push(LaborRoleRow {
            has_ot_variant: has_overtime_marker(&label),
            role: label,
            unit_rate,
            gl_code,
            cost_rate: grid.number(row, COST_RATE_COL),
        });
    }

    roles
}

/// 残業を示す表記（"OT" トークン、">10 hrs" 形式）を含むか
pub fn has_overtime_marker(label: &str) -> bool {
    lazy_static::lazy_static! {
        static ref OVERTIME_RE: Regex = Regex::new(r"\bOT\b|(?i:>\s*10\s*hrs?)").unwrap();
    }
    OVERTIME_RE.is_match(label)
}
