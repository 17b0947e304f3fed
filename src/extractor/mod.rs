//! 見積ワークブックの抽出
//!
//! ## 処理フロー
//! 1. 方言判定（FORMAT_A / FORMAT_B / FORMAT_UNKNOWN）
//! 2. メインシート選択（総合計が最大のシート）
//! 3. セクション見出し・合計行の探索
//! 4. ヘッダ財務値・労務明細の読み取り
//!
//! 1ファイルの失敗はそのファイルの `error` に記録し、バッチは継続する。

pub mod dialect;
pub mod financials;
pub mod labor;
pub mod layout;
pub mod sections;
pub mod versions;

pub use dialect::detect_dialect;
pub use labor::has_overtime_marker;

use crate::error::Result;
use crate::scanner::EstimateFile;
use crate::workbook::{Grid, Workbook, WorkbookSource};
use estimate_scan_common::{is_client_tab, ScanBatch, ScanResult};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// メインシート
struct MainSheet {
    name: String,
    grid: Rc<Grid>,
    sections: BTreeMap<String, u32>,
}

/// バッチ抽出のオプション
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// 先頭N件だけ処理する
    pub limit: Option<usize>,
    /// 進捗バーを表示する
    pub show_progress: bool,
}

/// ファイル1件を抽出する（失敗は結果の `error` に入る）
pub fn scan_file(file: &EstimateFile) -> ScanResult {
    let outcome = Workbook::open(&file.path)
        .and_then(|mut workbook| scan_workbook(&file.file_name, &mut workbook));

    match outcome {
        Ok(result) => result,
        Err(e) => {
            warn!(file = %file.file_name, error = %e, "見積ファイルを読み込めません");
            ScanResult::failed(&file.file_name, e.to_string())
        }
    }
}

/// 開いたワークブックから抽出する
pub fn scan_workbook<S: WorkbookSource>(
    filename: &str,
    workbook: &mut Workbook<S>,
) -> Result<ScanResult> {
    let sheet_names = workbook.sheet_names().to_vec();
    let dialect = detect_dialect(workbook)?;
    debug!(file = %filename, %dialect, "方言を判定");

    let client_tabs: Vec<String> = sheet_names
        .iter()
        .filter(|n| is_client_tab(n))
        .cloned()
        .collect();

    let mut result = ScanResult {
        filename: filename.to_string(),
        format: Some(dialect),
        version_tabs: versions::detect_versions(&sheet_names),
        ..Default::default()
    };

    match select_main_sheet(workbook, &client_tabs)? {
        Some(main) => {
            debug!(file = %filename, sheet = %main.name, "メインシートを選択");
            let sections = sections::find_section_totals(&main.grid, &main.sections, dialect);
            result.grand_total = sections::find_grand_total(&main.grid);
            result.financials = financials::extract_financials(&main.grid, dialect);
            result.labor_roles = labor::extract_labor_roles(&main.grid, &sections, dialect);
            result.has_recap_data = financials::has_recap_data(&main.grid);
            result.sections = sections;
            result.main_tab = Some(main.name);
        }
        None => {
            // セクションのあるシートがなくても、先頭シートから財務値は読む
            if let Some(first) = client_tabs.first() {
                let grid = workbook.grid(first)?;
                result.grand_total = sections::find_grand_total(&grid);
                result.financials = financials::extract_financials(&grid, dialect);
                result.has_recap_data = financials::has_recap_data(&grid);
            }
        }
    }

    for name in &sheet_names {
        let rows = workbook.grid(name)?.row_count();
        result.sheet_row_counts.insert(name.clone(), rows);
    }
    result.sheet_names = sheet_names;
    result.client_tabs = client_tabs;

    Ok(result)
}

/// 総合計が最大のシートを選ぶ
///
/// セクションを持つシートだけが候補。総合計がすべて0・なしなら
/// 最初の候補を使う。他の版のシートのデータは使わない。
fn select_main_sheet<S: WorkbookSource>(
    workbook: &mut Workbook<S>,
    client_tabs: &[String],
) -> Result<Option<MainSheet>> {
    let mut best: Option<(f64, MainSheet)> = None;

    for name in client_tabs {
        let grid = workbook.grid(name)?;
        let found = sections::find_sections(&grid);
        if found.is_empty() {
            continue;
        }

        let grand_total = sections::find_grand_total(&grid)
            .filter(|gt| *gt > 0.0)
            .unwrap_or(0.0);
        let replace = match &best {
            None => true,
            Some((best_total, _)) => grand_total > *best_total,
        };
        if replace {
            best = Some((
                grand_total,
                MainSheet {
                    name: name.clone(),
                    grid,
                    sections: found,
                },
            ));
        }
    }

    Ok(best.map(|(_, main)| main))
}

/// 複数ファイルを順に抽出して scan_results の外枠にまとめる
pub fn scan_documents(files: &[EstimateFile], options: &ScanOptions) -> ScanBatch {
    let files = match options.limit {
        Some(limit) => &files[..limit.min(files.len())],
        None => files,
    };
    info!(count = files.len(), "見積ファイルの抽出を開始");

    let progress = if options.show_progress {
        let bar = ProgressBar::new(files.len() as u64);
        if let Ok(style) =
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {per_sec} {msg}")
        {
            bar.set_style(style);
        }
        bar
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut results = Vec::with_capacity(files.len());
    for file in files {
        progress.set_message(file.file_name.clone());
        // ワークブックとグリッドはこの呼び出しの中で解放される
        results.push(scan_file(file));
        progress.inc(1);
    }
    progress.finish_and_clear();

    let batch = ScanBatch::from_results(results, start.elapsed().as_secs_f64());
    info!(
        scanned = batch.total_scanned,
        errors = batch.errors,
        "見積ファイルの抽出が完了"
    );
    batch
}
