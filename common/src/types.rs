//! 出力レコードの型定義
//!
//! CLIとライブラリで共有される型:
//! - ScanResult: 見積ファイル1件の抽出結果
//! - ScanBatch: scan_results.json の外枠
//! - RateCardEntry: 正規化後の役職カード
//! - EnrichedRecord / JoinReport: 案件台帳との突合結果
//!
//! フィールド名は下流の利用者と互換を保つため変更しないこと。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// 見積シートのレイアウト方言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dialect {
    #[serde(rename = "FORMAT_A")]
    A,
    #[serde(rename = "FORMAT_B")]
    B,
    #[serde(rename = "FORMAT_UNKNOWN")]
    Unknown,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::A => "FORMAT_A",
            Dialect::B => "FORMAT_B",
            Dialect::Unknown => "FORMAT_UNKNOWN",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// セクション1件分の位置と合計
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionInfo {
    pub canonical_name: String,
    #[serde(default = "default_true")]
    pub section_exists: bool,
    pub start_row: u32,
    #[serde(default)]
    pub total_row: Option<u32>,
    #[serde(default)]
    pub bid_total: Option<f64>,
    #[serde(default)]
    pub recap_total: Option<f64>,
}

fn default_true() -> bool {
    true
}

/// FORMAT_A のヘッダ財務値（K〜N列・X〜Z列）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatAFinancials {
    pub bid_gross: Option<f64>,
    pub bid_net: Option<f64>,
    pub bid_margin_dollars: Option<f64>,
    pub bid_margin_pct: Option<f64>,
    pub recap_gross: Option<f64>,
    pub recap_net: Option<f64>,
    pub recap_margin_dollars: Option<f64>,
    pub recap_margin_pct: Option<f64>,
    pub payout: Option<f64>,
}

/// FORMAT_B のP&L財務値（P列）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatBFinancials {
    pub revenue: Option<f64>,
    pub net_rev: Option<f64>,
    pub gm: Option<f64>,
}

/// 方言不明時の空レコード（`{}`）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoFinancials {}

/// 方言ごとの財務レコード
///
/// untagged のため、デシリアライズ時は空 → B → A の順に照合する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Financials {
    Empty(NoFinancials),
    FormatB(FormatBFinancials),
    FormatA(FormatAFinancials),
}

impl Default for Financials {
    fn default() -> Self {
        Financials::Empty(NoFinancials {})
    }
}

impl Financials {
    pub fn is_empty(&self) -> bool {
        matches!(self, Financials::Empty(_))
    }
}

/// 労務セクションの生の1行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborRoleRow {
    pub role: String,
    pub unit_rate: f64,
    #[serde(default)]
    pub gl_code: Option<String>,
    #[serde(default)]
    pub cost_rate: Option<f64>,
    #[serde(default)]
    pub has_ot_variant: bool,
}

/// 見積ファイル1件の抽出結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanResult {
    pub filename: String,
    pub error: Option<String>,
    pub format: Option<Dialect>,
    pub sheet_names: Vec<String>,
    pub sheet_row_counts: BTreeMap<String, u32>,
    pub client_tabs: Vec<String>,
    pub version_tabs: Vec<String>,
    pub main_tab: Option<String>,
    pub sections: BTreeMap<String, SectionInfo>,
    pub grand_total: Option<f64>,
    pub financials: Financials,
    pub labor_roles: Vec<LaborRoleRow>,
    pub has_recap_data: bool,
}

impl ScanResult {
    /// 読み込みに失敗したファイルの結果
    pub fn failed(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            error: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// scan_results.json の外枠
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanBatch {
    pub total_scanned: usize,
    pub errors: usize,
    pub format_counts: BTreeMap<Dialect, usize>,
    pub elapsed_seconds: f64,
    pub results: Vec<ScanResult>,
}

impl ScanBatch {
    /// 結果リストから件数を集計して外枠を作る
    pub fn from_results(results: Vec<ScanResult>, elapsed_seconds: f64) -> Self {
        let mut format_counts = BTreeMap::new();
        let mut errors = 0;
        for result in &results {
            if result.is_error() {
                errors += 1;
            } else {
                *format_counts
                    .entry(result.format.unwrap_or(Dialect::Unknown))
                    .or_insert(0) += 1;
            }
        }

        Self {
            total_scanned: results.len(),
            errors,
            format_counts,
            elapsed_seconds: (elapsed_seconds * 10.0).round() / 10.0,
            results,
        }
    }
}

/// 単価の分布
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateRange {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub median: f64,
}

/// 正規化後の役職カード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateCardEntry {
    pub role: String,
    /// 末尾の単位括弧から取り出した単位（昇順）。"(/ day)" も "/day" として数える
    /// ため、"Per Diem" のカードには "/day" が載る。
    pub rate_units: Vec<String>,
    pub gl_codes: Vec<String>,
    pub occurrences: usize,
    pub has_ot_variant: bool,
    pub has_dt_variant: bool,
    pub has_weekend_variant: bool,
    pub has_afterhours_variant: bool,
    pub unit_rate_range: RateRange,
    pub cost_rate_range: Option<RateRange>,
}

/// 突合ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinStatus {
    Matched,
    ScanOnly,
    ListOnly,
}

/// 台帳レコードと抽出結果をマージしたレコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub join_status: JoinStatus,
}

/// 突合レポート
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JoinReport {
    pub matched: usize,
    pub scan_only: usize,
    pub list_only: usize,
    pub duplicate_filenames: BTreeMap<String, usize>,
    pub duplicate_count: usize,
    pub total_enriched_records: usize,
    #[serde(default)]
    pub scan_only_files: Vec<String>,
    #[serde(default)]
    pub list_only_files: Vec<String>,
}
