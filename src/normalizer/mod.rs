//! 役職名の正規化
//!
//! 入力者ごとに表記の揺れる明細ラベルを、集計キーとなる基本名と
//! 単価単位に分ける。
//!
//! ## 処理フロー
//! 1. 空白の統一、全大文字ラベルの大小文字整形
//! 2. 誤字訂正（`tables::TYPO_CORRECTIONS`）
//! 3. 修飾語の除去と単位表記の整形（`rules::QUALIFIER_RULES`、順序依存）
//! 4. 末尾の単位括弧の取り出し、残った括弧の破棄
//! 5. 同義語の統合（`tables::SYNONYMS`）
//!
//! 結果が変わらなくなるまで 1〜5 を繰り返す。このため正規化済みの名前を
//! 再度通しても同じ基本名になる。
//!
//! 残業・休日などの区分フラグは除去で失われる前に元のラベルから読む。

pub mod rate_unit;
pub mod rules;
pub mod tables;

use regex::{Captures, Regex};
use rules::{apply_rules, COMPILED_QUALIFIER_RULES};
use std::borrow::Cow;
use tables::{SYNONYM_RULES, TYPO_RULES};

/// 収束しない入力に対する繰り返しの上限
const MAX_PASSES: usize = 8;

/// 正規化結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalName {
    /// 集計キーとなる基本名
    pub base_name: String,
    /// 末尾から取り出した単価単位
    pub rate_unit: Option<String>,
}

/// ラベルに含まれていた区分
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VariantFlags {
    /// 残業（OT / Overtime）
    pub ot: bool,
    /// 深夜・倍額（DT / Double Time）
    pub dt: bool,
    pub weekend: bool,
    pub afterhours: bool,
}

impl VariantFlags {
    /// 論理和で合成する
    pub fn merge(&mut self, other: VariantFlags) {
        self.ot |= other.ot;
        self.dt |= other.dt;
        self.weekend |= other.weekend;
        self.afterhours |= other.afterhours;
    }

    pub fn any(&self) -> bool {
        self.ot || self.dt || self.weekend || self.afterhours
    }
}

/// 元のラベルから区分フラグを読む
///
/// 誤字訂正後の文字列でも判定する（"Weeknd" → weekend）。
pub fn detect_flags(raw: &str) -> VariantFlags {
    let mut flags = flags_in(raw);
    let corrected = apply_rules(&TYPO_RULES, raw);
    if corrected != raw {
        flags.merge(flags_in(&corrected));
    }
    flags
}

fn flags_in(text: &str) -> VariantFlags {
    lazy_static::lazy_static! {
        static ref OT_RE: Regex = Regex::new(r"\bOT\b|(?i:\bovertime\b)").unwrap();
        static ref DT_RE: Regex = Regex::new(r"\bDT\b|(?i:\bdouble\s*time\b)").unwrap();
        static ref WEEKEND_RE: Regex = Regex::new(r"(?i)\bweekend\b").unwrap();
        static ref AFTERHOURS_RE: Regex = Regex::new(r"(?i)\bafter\s*hours?\b").unwrap();
    }

    VariantFlags {
        ot: OT_RE.is_match(text),
        dt: DT_RE.is_match(text),
        weekend: WEEKEND_RE.is_match(text),
        afterhours: AFTERHOURS_RE.is_match(text),
    }
}

/// ラベルを基本名と単価単位に正規化する
///
/// 基本名が空になる場合（修飾語だけのラベル）は空白を整えた元の文字列を
/// 基本名にする。単位を取り出したうえで空になった場合（"(/hr)" など）は
/// 基本名を空のままにする。
pub fn canonicalize(raw: &str) -> CanonicalName {
    let cleaned = collapse_whitespace(raw);
    let mut current = cleaned.clone();
    let mut rate_unit = None;

    for _ in 0..MAX_PASSES {
        let (base, unit) = canonical_pass(&current);
        // 最初に見つかった単位を採用
        if rate_unit.is_none() {
            rate_unit = unit;
        }
        if base == current {
            break;
        }
        current = base;
    }

    if current.is_empty() && rate_unit.is_none() {
        current = cleaned;
    }

    CanonicalName {
        base_name: current,
        rate_unit,
    }
}

/// 1回分の書き換え
fn canonical_pass(text: &str) -> (String, Option<String>) {
    let folded = fold_shouting_case(text);
    let corrected = apply_rules(&TYPO_RULES, &folded);
    let rewritten = apply_rules(&COMPILED_QUALIFIER_RULES, corrected.trim());
    let (base, unit) = rate_unit::extract_rate_unit(&rewritten);
    let base = discard_parentheticals(&base);
    let base = apply_rules(&SYNONYM_RULES, &base);
    (collapse_whitespace(&base), unit)
}

/// 小文字を含まないラベルは3文字以上の英大文字語を先頭大文字にする
///
/// "OT" "DT" などの2文字の略号はそのまま残る。
/// 全大文字で書かれた名前は元の表記に戻らない（"VIP HOST" は "Vip Host"）。
/// 大文字の頭字語を含む役職名は、小文字を含む表記で入力されたものだけが保たれる。
fn fold_shouting_case(text: &str) -> Cow<'_, str> {
    lazy_static::lazy_static! {
        static ref SHOUTED_WORD_RE: Regex = Regex::new(r"\b[A-Z]{3,}\b").unwrap();
    }

    if text.chars().any(char::is_lowercase) {
        return Cow::Borrowed(text);
    }
    SHOUTED_WORD_RE.replace_all(text, |caps: &Captures| {
        let word = &caps[0];
        format!("{}{}", &word[..1], word[1..].to_lowercase())
    })
}

/// 単位として認識されなかった括弧書きを捨てる
fn discard_parentheticals(text: &str) -> String {
    lazy_static::lazy_static! {
        static ref CLOSED_RE: Regex = Regex::new(r"\s*\([^()]*\)").unwrap();
        static ref UNCLOSED_RE: Regex = Regex::new(r"\s*\(.*$").unwrap();
    }

    let mut result = text.to_string();
    // 入れ子は内側から順に消える
    while CLOSED_RE.is_match(&result) {
        result = CLOSED_RE.replace_all(&result, "").into_owned();
    }
    let result = UNCLOSED_RE.replace(&result, "");
    result.replace(')', "").trim().to_string()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
