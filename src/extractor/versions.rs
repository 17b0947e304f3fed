//! 版違いシートの検出
//!
//! 先頭5文字以上が共通するシート同士を同じ見積の別版とみなす。
//! 情報提供のみで、メインシートの選択には影響しない。

use estimate_scan_common::is_client_tab;
use std::collections::{BTreeMap, BTreeSet};

const MIN_COMMON_PREFIX: usize = 5;

pub fn detect_versions(sheet_names: &[String]) -> Vec<String> {
    let client_tabs: Vec<&String> = sheet_names.iter().filter(|n| is_client_tab(n)).collect();
    if client_tabs.len() <= 1 {
        return Vec::new();
    }

    let mut groups: BTreeMap<String, BTreeSet<&str>> = BTreeMap::new();
    for (i, first) in client_tabs.iter().enumerate() {
        for second in &client_tabs[i + 1..] {
            let prefix_len = common_prefix_len(first, second);
            if prefix_len >= MIN_COMMON_PREFIX {
                let prefix: String = first.chars().take(prefix_len).collect();
                let group = groups.entry(prefix.trim_end().to_string()).or_default();
                group.insert(first.as_str());
                group.insert(second.as_str());
            }
        }
    }

    let versions: BTreeSet<&str> = groups
        .values()
        .filter(|tabs| tabs.len() >= 2)
        .flat_map(|tabs| tabs.iter().copied())
        .collect();
    versions.into_iter().map(str::to_string).collect()
}

/// 先頭から一致する文字数
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}
