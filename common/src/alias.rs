//! セクション見出しの語彙とエイリアス
//!
//! 見積シートのB列に現れるセクション見出しの完全一致リストと、
//! 同義の見出しを正規名へ畳み込む対応表。新しい表記は表への追加で対応する。

/// セクション見出しとして認識する文字列（大文字・trim済みで比較）
pub const SECTION_HEADERS: &[&str] = &[
    "PLANNING & ADMINISTRATION",
    "ACCESS/SPONSORSHIP FEES",
    "VENUE ACCESS & FEES",
    "ONSITE LABOR ACTIVITY",
    "TRAVEL EXPENSES",
    "TRAVEL EXPENSES & FEES",
    "CREATIVE COSTS",
    "CREATIVE EXPENSES",
    "PRODUCTION EXPENSES",
    "MISC EXPENSES",
    "LOGISTICS EXPENSES",
    "OTHER",
    "AGENCY FEES",
];

/// 見出しエイリアス → 正規名
pub const SECTION_ALIASES: &[(&str, &str)] = &[
    ("VENUE ACCESS & FEES", "ACCESS/SPONSORSHIP FEES"),
    ("TRAVEL EXPENSES & FEES", "TRAVEL EXPENSES"),
    ("CREATIVE EXPENSES", "CREATIVE COSTS"),
    ("MISC EXPENSES", "PRODUCTION EXPENSES"),
];

/// 労務明細を持つセクションの正規名
pub const LABOR_SECTION: &str = "ONSITE LABOR ACTIVITY";

/// データを持たないシート名（完全一致）
pub const SKIP_TABS: &[&str] = &[
    "Overview",
    "Templates",
    "ROS",
    "Labor Log",
    "Template",
    "Run of Show",
];

/// セル文字列を見出しとして照合する形に揃える
pub fn header_key(text: &str) -> String {
    text.trim().to_uppercase()
}

/// 見出し文字列ならその正規名を返す
///
/// 語彙にない文字列は見出しではない（あいまい一致はしない）。
pub fn canonical_section(text: &str) -> Option<&'static str> {
    let key = header_key(text);
    let header = SECTION_HEADERS.iter().find(|h| **h == key)?;
    let canonical = SECTION_ALIASES
        .iter()
        .find(|(alias, _)| alias == header)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(header);
    Some(canonical)
}

/// 見出し語彙に含まれるか
pub fn is_section_header(text: &str) -> bool {
    let key = header_key(text);
    SECTION_HEADERS.iter().any(|h| *h == key)
}

/// スキップ対象のシート名か
pub fn is_skip_tab(name: &str) -> bool {
    SKIP_TABS.contains(&name)
}

/// 見積本体のシート（スキップ対象でもテンプレートでもない）か
pub fn is_client_tab(name: &str) -> bool {
    !is_skip_tab(name) && !name.contains("Template")
}
