//! 見積シートのセル位置定数
//!
//! 行・列はすべて1始まり（A列 = 1）。

use std::ops::RangeInclusive;

/// GLコード列（A）。FORMAT_A のみ意味を持つ
pub const GL_COL: u32 = 1;
/// 見出し・役職名の列（B）
pub const LABEL_COL: u32 = 2;
/// 単価列（E）
pub const UNIT_RATE_COL: u32 = 5;
/// 見積合計列（H）
pub const BID_TOTAL_COL: u32 = 8;
/// 原価単価列（M）
pub const COST_RATE_COL: u32 = 13;
/// 実績合計列（V）。FORMAT_A のみ
pub const RECAP_TOTAL_COL: u32 = 22;

/// 方言判定: GLコードを探す行数
pub const GL_SCAN_ROWS: u32 = 200;
/// 方言判定: FORMAT_B キーワードを探す行
pub const KEYWORD_ROWS: RangeInclusive<u32> = 4..=13;
/// 方言判定: FORMAT_B キーワードの列（B, O）
pub const KEYWORD_COLS: [u32; 2] = [2, 15];
/// FORMAT_B キーワード（小文字・完全一致）
pub const FORMAT_B_KEYWORDS: &[&str] = &["revenue", "net rev", "per activation total"];

/// セクション見出しから合計行を探す最大行数
pub const SECTION_TOTAL_WINDOW: u32 = 100;
/// 労務セクションに合計行がないときの走査行数
pub const LABOR_FALLBACK_WINDOW: u32 = 80;
/// 労務明細のプレースホルダ
pub const PLACEHOLDER_LABEL: &str = "---";
/// 総合計行のラベル
pub const GRAND_TOTAL_LABEL: &str = "GRAND TOTAL";

/// 実績データ判定の範囲（T〜Z列, 10〜110行）
pub const RECAP_ROWS: RangeInclusive<u32> = 10..=110;
pub const RECAP_COLS: RangeInclusive<u32> = 20..=26;

/// FORMAT_A ヘッダ財務値の位置
pub mod format_a {
    pub const BID_GROSS: (u32, u32) = (4, 11); // K4
    pub const BID_NET: (u32, u32) = (5, 11); // K5
    pub const BID_MARGIN_DOLLARS: (u32, u32) = (4, 12); // L4
    pub const BID_MARGIN_PCT: (u32, u32) = (4, 13); // M4
    pub const PAYOUT: (u32, u32) = (4, 14); // N4
    pub const RECAP_GROSS: (u32, u32) = (4, 24); // X4
    pub const RECAP_NET: (u32, u32) = (5, 24); // X5
    pub const RECAP_MARGIN_DOLLARS: (u32, u32) = (4, 25); // Y4
    pub const RECAP_MARGIN_PCT: (u32, u32) = (4, 26); // Z4
}

/// FORMAT_B P&L 財務値の位置
pub mod format_b {
    pub const REVENUE: (u32, u32) = (4, 16); // P4
    pub const NET_REV: (u32, u32) = (5, 16); // P5
    pub const GM: (u32, u32) = (7, 16); // P7
}
