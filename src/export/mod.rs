//! 成果物ファイルの書き出し

pub mod excel;

use crate::error::{Result, ScanError};
use crate::matcher::JoinOutput;
use estimate_scan_common::json::{read_json, write_json_pretty};
use estimate_scan_common::{RateCardEntry, ScanBatch};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const SCAN_RESULTS_FILE: &str = "scan_results.json";
pub const RATE_CARD_FILE: &str = "rate_card_master.json";
pub const RATE_CARD_EXCEL_FILE: &str = "rate_card_master.xlsx";
pub const ENRICHED_INDEX_FILE: &str = "enriched_master_index.json";
pub const JOIN_REPORT_FILE: &str = "join_report.json";

/// 出力先がフォルダ（または拡張子なし）ならその中の既定ファイル名を使う
pub fn output_path(output: &Path, default_name: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(default_name)
    } else {
        output.to_path_buf()
    }
}

/// 複数の成果物を書くディレクトリを確かめる
///
/// 既存のディレクトリか拡張子のないパスだけを受け付ける。
pub fn artifact_dir(output: &Path) -> Result<PathBuf> {
    if output.is_dir() || output.extension().is_none() {
        Ok(output.to_path_buf())
    } else {
        Err(ScanError::Config(format!(
            "出力先にはディレクトリを指定してください: {}",
            output.display()
        )))
    }
}

/// scan_results.json を書き出す
pub fn write_scan_batch(output: &Path, batch: &ScanBatch) -> Result<PathBuf> {
    let path = output_path(output, SCAN_RESULTS_FILE);
    write_json_pretty(&path, batch)?;
    debug!(path = %path.display(), results = batch.results.len(), "抽出結果を保存");
    Ok(path)
}

/// scan_results.json を読み込む
pub fn read_scan_batch(path: &Path) -> Result<ScanBatch> {
    Ok(read_json(path)?)
}

/// rate_card_master.json を書き出す（必要ならExcelも）
pub fn write_rate_card(
    output_dir: &Path,
    entries: &[RateCardEntry],
    with_excel: bool,
) -> Result<Vec<PathBuf>> {
    let json_path = output_dir.join(RATE_CARD_FILE);
    write_json_pretty(&json_path, entries)?;
    let mut written = vec![json_path];

    if with_excel {
        let excel_path = output_dir.join(RATE_CARD_EXCEL_FILE);
        excel::generate_rate_card_excel(entries, &excel_path)?;
        written.push(excel_path);
    }

    debug!(roles = entries.len(), files = written.len(), "役職カードを保存");
    Ok(written)
}

/// enriched_master_index.json と join_report.json を書き出す
pub fn write_join_output(output_dir: &Path, output: &JoinOutput) -> Result<(PathBuf, PathBuf)> {
    let index_path = output_dir.join(ENRICHED_INDEX_FILE);
    let report_path = output_dir.join(JOIN_REPORT_FILE);
    write_json_pretty(&index_path, &output.records)?;
    write_json_pretty(&report_path, &output.report)?;
    Ok((index_path, report_path))
}
