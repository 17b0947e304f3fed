//! 役職カードの集計
//!
//! 抽出済みの労務明細を正規化後の基本名ごとにまとめ、
//! 出現回数・単位・GLコード・区分フラグ・単価統計を出す。
//! 出力は出現回数の降順（同数は最初に現れた順）。

pub mod stats;

use crate::normalizer::{canonicalize, detect_flags, VariantFlags};
use estimate_scan_common::{LaborRoleRow, RateCardEntry, ScanResult};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info};

/// 役職1つ分の集計途中の値
#[derive(Debug, Default)]
struct RoleAccumulator {
    role: String,
    rate_units: BTreeSet<String>,
    gl_codes: BTreeSet<String>,
    occurrences: usize,
    flags: VariantFlags,
    unit_rates: Vec<f64>,
    cost_rates: Vec<f64>,
}

impl RoleAccumulator {
    fn into_entry(self) -> RateCardEntry {
        RateCardEntry {
            role: self.role,
            rate_units: self.rate_units.into_iter().collect(),
            gl_codes: self.gl_codes.into_iter().collect(),
            occurrences: self.occurrences,
            has_ot_variant: self.flags.ot,
            has_dt_variant: self.flags.dt,
            has_weekend_variant: self.flags.weekend,
            has_afterhours_variant: self.flags.afterhours,
            unit_rate_range: stats::rate_range(&self.unit_rates).unwrap_or_default(),
            cost_rate_range: stats::rate_range(&self.cost_rates),
        }
    }
}

/// 役職カードの組み立て
///
/// 挿入順を保つため、値は Vec に持ち、基本名からの索引を別に持つ。
#[derive(Debug, Default)]
pub struct RateCardBuilder {
    roles: Vec<RoleAccumulator>,
    index: HashMap<String, usize>,
}

impl RateCardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 明細1行を取り込む
    pub fn observe(&mut self, row: &LaborRoleRow) {
        let canonical = canonicalize(&row.role);
        let mut flags = detect_flags(&row.role);
        flags.ot |= row.has_ot_variant;

        let slot = match self.index.get(&canonical.base_name) {
            Some(&slot) => slot,
            None => {
                self.roles.push(RoleAccumulator {
                    role: canonical.base_name.clone(),
                    ..Default::default()
                });
                self.index
                    .insert(canonical.base_name.clone(), self.roles.len() - 1);
                self.roles.len() - 1
            }
        };
        let acc = &mut self.roles[slot];

        acc.occurrences += 1;
        acc.flags.merge(flags);
        if let Some(unit) = canonical.rate_unit {
            acc.rate_units.insert(unit);
        }
        if let Some(gl) = row.gl_code.as_deref().filter(|gl| !gl.is_empty()) {
            acc.gl_codes.insert(gl.to_string());
        }
        if row.unit_rate > 0.0 {
            acc.unit_rates.push(row.unit_rate);
        }
        if let Some(cost) = row.cost_rate.filter(|c| *c > 0.0) {
            acc.cost_rates.push(cost);
        }
    }

    /// エラーのない抽出結果の明細をすべて取り込む
    pub fn add_results(&mut self, results: &[ScanResult]) {
        for result in results.iter().filter(|r| !r.is_error()) {
            debug!(file = %result.filename, rows = result.labor_roles.len(), "労務明細を集計");
            for row in &result.labor_roles {
                self.observe(row);
            }
        }
    }

    /// 集計済みの役職数
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// 出現回数の降順に並べた役職カードを返す
    pub fn build(self) -> Vec<RateCardEntry> {
        let mut entries: Vec<RateCardEntry> =
            self.roles.into_iter().map(RoleAccumulator::into_entry).collect();
        // 安定ソートなので同数は挿入順のまま
        entries.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
        entries
    }
}

/// 抽出結果から役職カードを作る
pub fn build_rate_card(results: &[ScanResult]) -> Vec<RateCardEntry> {
    let mut builder = RateCardBuilder::new();
    builder.add_results(results);
    let entries = builder.build();
    info!(roles = entries.len(), "役職カードを作成");
    entries
}
