//! 末尾の単価単位 "(/hr)" 等の取り出し

use regex::Regex;

/// 末尾の単位括弧を取り除き、(基本名, 単位) に分ける
///
/// 認識する単位は `/hr`、`/hr >10hrs`、`/hr >8hrs`、
/// `/hr >10hrs or shared hourly`、`/N hr day`、`/day`、`Flat Rate`。
pub fn extract_rate_unit(text: &str) -> (String, Option<String>) {
    lazy_static::lazy_static! {
        static ref RATE_UNIT_RE: Regex = Regex::new(
            r"(?i)\s*\((/hr(?:\s+>(?:10|8)hrs(?:\s+or\s+shared\s+hourly)?)?|/\d+\s+hr\s+day|/day|flat\s+rate)\)\s*$"
        ).unwrap();
    }

    match RATE_UNIT_RE.captures(text) {
        Some(caps) => {
            let whole = caps.get(0).map(|m| m.start()).unwrap_or(text.len());
            let unit = caps.get(1).map(|m| normalize_unit(m.as_str()));
            (text[..whole].trim().to_string(), unit)
        }
        None => (text.trim().to_string(), None),
    }
}

/// 単位表記を統一する（空白の詰め、小文字化。"Flat Rate" だけは固定表記）
fn normalize_unit(unit: &str) -> String {
    let collapsed = unit.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.eq_ignore_ascii_case("flat rate") {
        "Flat Rate".to_string()
    } else {
        collapsed.to_lowercase()
    }
}
