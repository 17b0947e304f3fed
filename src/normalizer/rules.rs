//! 役職名の書き換え規則
//!
//! (名前, パターン, 置換) の順序付きリストを先頭から順に適用する。
//! 規則の順序には意味がある。例えば "(Weekend Rate)" の除去は
//! 残骸 "(Rate)" の掃除より先に行う必要がある。

use regex::Regex;
use std::borrow::Cow;

/// 書き換え規則1件
#[derive(Debug)]
pub struct RewriteRule {
    pub name: &'static str,
    pub pattern: Regex,
    pub replacement: &'static str,
}

impl RewriteRule {
    /// 静的な規則表からコンパイルする（パターン不正はパニック）
    pub fn compile(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        }
    }

    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(text, self.replacement)
    }
}

/// 規則を順に適用する
pub fn apply_rules(rules: &[RewriteRule], text: &str) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc).into_owned())
}

/// 修飾語・日付・番号の除去と単位表記の整形
///
/// 単位の括弧そのものはここでは残し、最後に `rate_unit` で取り出す。
pub const QUALIFIER_RULES: &[(&str, &str, &str)] = &[
    // 単位括弧の中に混ざった修飾語
    ("unit-slash-weekend-rate", r"/Weekend\s*Rate\s*\)", ")"),
    ("unit-dash-weekend", r"\s*-\s*Weekend\s*\)", ")"),
    ("unit-pipe-weekend-rate", r"\s*\|\s*Weekend\s*Rate\s*\)", ")"),
    // 修飾語だけの括弧
    ("paren-weekend-rate", r"\s*\(\s*Weekend(?:\s+Rate)?\s*\)", ""),
    ("paren-holiday-rate", r"\s*\(\s*Holiday\s*Rate\s*\)", ""),
    ("paren-after-hours", r"(?i)\s*\(\s*After\s*Hours?\s*\)", ""),
    ("paren-afterhours-rate", r"(?i)\s*\(\s*Afterhours\s*Rate\s*\)", ""),
    ("paren-overtime", r"\s*\(\s*(?:OT|DT|Overtime|Double\s*Time)(?:\s+Rate)?\s*\)", ""),
    ("paren-six-hour-minimum", r"(?i)\s*\(\s*Six\s+Hour\s+Minimum\s*\)", ""),
    ("paren-rate-leftover", r"\s*\(\s*Rate\s*\)", ""),
    ("paren-day-count", r"(?i)\s*\(\d+-days?\)", ""),
    ("paren-after-hours-day", r"(?i)\s*\(\s*After\s*Hours?\s*/\s*day\s*\)", ""),
    ("paren-spaced-day", r"\(/\s+day\s*\)", "(/day)"),
    // 末尾の OT / DT
    ("trailing-ot-rate", r"\s+OT\s*Rate\s*$", ""),
    ("trailing-ot", r"\s+OT\s*$", ""),
    ("trailing-dt", r"\s+DT\s*$", ""),
    // 名前と単位の間の修飾語
    ("word-weekend-rate", r"\s+Weekend\s+Rate\b", ""),
    ("word-weekend", r"\s+Weekend\b", ""),
    ("word-afterhours-weekend", r"(?i)\s+Afterhours/Weekend\s*Rate?\b", ""),
    ("word-afterhours", r"(?i)\s+Afterhours\b", ""),
    ("word-after-hours", r"(?i)\s+After\s+Hours?\b", ""),
    ("word-overtime", r"\bOvertime\s+", ""),
    // スラッシュ付きの修飾語
    ("slash-after-hours-before-unit", r"(?i)/After\s+Hours?\s*\(", " ("),
    ("slash-weekend-before-unit", r"(?i)/Weekend\s*Rate?\s*\(", " ("),
    ("slash-weekend", r"/Weekend\b", ""),
    ("per-diem-chauffeur", r"Per Diem/Chauffeur\s+Drivers", "Per Diem"),
    ("six-hour-minimum", r"(?i)\bSix\s+Hour\s+Minimum\b", ""),
    // 単位表記の統一
    ("unit-hr-period", r"(?i)hr\.", "hr"),
    ("unit-per-hour", r"(?i)\(per hour\)", "(/hr)"),
    ("unit-days-per-hour", r"(?i)\(days/per hour\)", "(/hr)"),
    ("unit-bare-hr", r"(?i)\(hr\)", "(/hr)"),
    ("unit-ten-hour-day", r"\(10hrs?\s*day\)", "(/10 hr day)"),
    ("unit-over-ten-day", r"(/hr\s*>10hrs)\s+day\)", "${1})"),
    ("unit-over-ten-malformed", r"\(/hr\s*>/10\s*hr\s*day\)", "(/hr >10hrs)"),
    ("unit-over-ten", r"(?i)>\s*10\s*hrs?", ">10hrs"),
    ("unit-over-eight", r"(?i)>\s*8\s*hrs?", ">8hrs"),
    // 単位括弧の後ろの日付・番号
    ("after-unit-date", r"(?s)\)\s+\d{1,2}/\d{1,2}.*$", ")"),
    ("after-unit-ordinal", r"(?s)\)\s+\d{1,2}(?:st|nd|rd|th).*$", ")"),
    ("after-unit-numbers", r"\)\s+\d{1,2}(?:,\s*\d{1,2})*\s*$", ")"),
    ("after-unit-hour-day", r"(?is)\)\s+\d+\s+HOURS?\s+DAY.*$", ")"),
    // 単位括弧の後ろの語
    ("after-unit-dispatcher", r"\)\s+Dispatcher\b.*$", ")"),
    ("after-unit-drivers", r"\)\s+Drivers?\b.*$", ")"),
    ("after-unit-onsite-coordinator", r"\)\s+On-site\s+Coordinator\b.*$", ")"),
    ("after-unit-total", r"\)\s+Total\b.*$", ")"),
    ("after-unit-request", r"\)\s+Request\b.*$", ")"),
    ("after-unit-dash-after-hours", r"(?i)\)\s*-\s*After\s+Hours?\b", ")"),
    // ダッシュ付きの修飾語
    ("dash-site-inspection", r"\s*-\s*Site Inspection", ""),
    ("dash-staff-vendor", r"\s*-\s*DriveShop Staff", ""),
    ("dash-dispatcher", r"\s*-\s*Dispatcher(?:/Chauffeur Drivers)?", ""),
    ("dash-other-markets", r"\s*-\s*all other markets", ""),
    ("dash-markets", r"\s*-\s*LA\.?,?\s*SF,?\s*NY", ""),
    // 番号・複数形マーカー・Excelの残骸
    ("numbering", r"\s*#\d+(?:\s*&\s*#\d+)?", ""),
    ("plural-marker", r"\s*\(s\)", ""),
    ("excel-time-artifact", r"\+\d+:\d+", ""),
    ("vehicle-count", r"/Vehs\.?", ""),
    // 名前中のスラッシュ
    ("slash-spacing", r"(\w)\s*/\s*(\w)", "${1}/${2}"),
    // 後片付け
    ("empty-parens", r"\s*\(\s*\)", ""),
    ("trailing-slash", r"/\s*$", ""),
    ("trailing-dash", r"-\s*$", ""),
    ("slash-before-paren", r"/\s*\(", " ("),
    ("collapse-whitespace", r"\s+", " "),
    ("paren-open-space", r"\(\s+", "("),
    ("paren-close-space", r"\s+\)", ")"),
    ("space-before-paren", r"(\w)\(", "${1} ("),
    ("unit-over-spacing", r"\(/hr>", "(/hr >"),
    ("labor-capitalization", r"\blabor\b", "Labor"),
];

lazy_static::lazy_static! {
    /// コンパイル済みの修飾語規則
    pub static ref COMPILED_QUALIFIER_RULES: Vec<RewriteRule> = QUALIFIER_RULES
        .iter()
        .map(|(name, pattern, replacement)| RewriteRule::compile(*name, *pattern, *replacement))
        .collect();
}
