//! レイアウト方言の判定
//!
//! 判定は短絡的で、シート順・行順に最初に見つかった手掛かりで決まる。
//! 1. "Overview" シートと名前に "Template" を含むシートがあり、かつ
//!    データシートのA列（先頭200行）にGLコード形の値がある → FORMAT_A
//! 2. スキップ対象以外のシートの 4〜13行 B/O列 に P&L キーワードがある → FORMAT_B
//! 3. それ以外 → FORMAT_UNKNOWN

use super::layout::{FORMAT_B_KEYWORDS, GL_COL, GL_SCAN_ROWS, KEYWORD_COLS, KEYWORD_ROWS};
use crate::error::Result;
use crate::workbook::{Workbook, WorkbookSource};
use estimate_scan_common::{is_client_tab, is_skip_tab, Dialect};
use tracing::debug;

/// ワークブックの方言を判定する
pub fn detect_dialect<S: WorkbookSource>(workbook: &mut Workbook<S>) -> Result<Dialect> {
    let names = workbook.sheet_names().to_vec();

    if has_template_structure(&names) {
        for name in names.iter().filter(|n| is_client_tab(n)) {
            let grid = workbook.grid(name)?;
            let hit = (1..=GL_SCAN_ROWS)
                .find(|&row| grid.get(row, GL_COL).map(|v| v.is_gl_code()).unwrap_or(false));
            if let Some(row) = hit {
                debug!(sheet = %name, row, "GLコードを検出");
                return Ok(Dialect::A);
            }
        }
    }

    for name in names.iter().filter(|n| !is_skip_tab(n)) {
        let grid = workbook.grid(name)?;
        for row in KEYWORD_ROWS {
            for col in KEYWORD_COLS {
                let keyword = match grid.text(row, col) {
                    Some(text) => text.to_lowercase(),
                    None => continue,
                };
                if FORMAT_B_KEYWORDS.contains(&keyword.as_str()) {
                    debug!(sheet = %name, row, col, keyword = %keyword, "P&Lキーワードを検出");
                    return Ok(Dialect::B);
                }
            }
        }
    }

    Ok(Dialect::Unknown)
}

/// "Overview" とテンプレートシートが揃っているか
fn has_template_structure(names: &[String]) -> bool {
    let has_overview = names.iter().any(|n| n == "Overview");
    let has_templates = names.iter().any(|n| n.contains("Template"));
    has_overview && has_templates
}
