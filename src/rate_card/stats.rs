//! 単価の要約統計

use estimate_scan_common::RateRange;

/// 小数第2位に丸める
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 最小・最大・平均・中央値（値がなければ None）
pub fn rate_range(values: &[f64]) -> Option<RateRange> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let sum: f64 = sorted.iter().sum();
    let avg = sum / sorted.len() as f64;

    Some(RateRange {
        min: round2(sorted[0]),
        max: round2(sorted[sorted.len() - 1]),
        avg: round2(avg),
        median: round2(median(&sorted)),
    })
}

/// 整列済みの値の中央値（偶数個なら中央2つの平均）
fn median(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
