//! 抽出結果と案件台帳のファイル名突合
//!
//! - 台帳に1件以上あるファイルは `matched`（先頭レコードを使う）
//! - 台帳にないファイルは `scan_only`
//! - 抽出されていない台帳ファイルは `list_only`（全レコードを出力）
//!
//! 同名フィールドは抽出結果の値で上書きする。
//! 台帳に2件以上あるファイル名は重複としてレポートに残す。

pub mod registry;

pub use registry::{filename_from_url, filename_key, load_registry, RegistryRecord};

use crate::error::{Result, ScanError};
use estimate_scan_common::{EnrichedRecord, JoinReport, JoinStatus, ScanResult};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use tracing::{info, warn};

/// レポートに載せるファイル名の上限
const REPORT_FILE_LIMIT: usize = 20;

/// 突合結果
#[derive(Debug, Clone)]
pub struct JoinOutput {
    pub records: Vec<EnrichedRecord>,
    pub report: JoinReport,
}

/// ファイル名ごとに値を集める（最初に現れた順を保つ）
struct Grouped<T> {
    order: Vec<String>,
    values: HashMap<String, T>,
}

impl<T> Grouped<T> {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            values: HashMap::new(),
        }
    }

    fn entry(&mut self, key: &str, default: impl FnOnce() -> T) -> &mut T {
        if !self.values.contains_key(key) {
            self.order.push(key.to_string());
        }
        self.values.entry(key.to_string()).or_insert_with(default)
    }

    fn get(&self, key: &str) -> Option<&T> {
        self.values.get(key)
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.order
            .iter()
            .filter_map(|k| self.values.get(k).map(|v| (k.as_str(), v)))
    }
}

/// 抽出結果と台帳をファイル名で突合する
pub fn join(scan_results: &[ScanResult], registry: &[RegistryRecord]) -> Result<JoinOutput> {
    // 同じファイル名の抽出結果は後勝ち（位置は最初のもの）
    let mut scans: Grouped<&ScanResult> = Grouped::new();
    for result in scan_results.iter().filter(|r| !r.filename.is_empty()) {
        *scans.entry(&result.filename, || result) = result;
    }

    let mut listed: Grouped<Vec<&RegistryRecord>> = Grouped::new();
    let mut unkeyed = 0usize;
    for record in registry {
        match filename_key(record) {
            Some(key) => listed.entry(&key, Vec::new).push(record),
            None => unkeyed += 1,
        }
    }
    if unkeyed > 0 {
        warn!(count = unkeyed, "ファイル名を特定できない台帳レコードを無視");
    }

    let mut records = Vec::new();
    let mut report = JoinReport::default();
    let mut scan_only_files = Vec::new();

    for (filename, scan) in scans.iter() {
        let scan_fields = scan_fields(scan)?;
        match listed.get(filename).and_then(|entries| entries.first()) {
            Some(first) => {
                records.push(enrich((*first).clone(), scan_fields, JoinStatus::Matched));
                report.matched += 1;
            }
            None => {
                records.push(enrich(Map::new(), scan_fields, JoinStatus::ScanOnly));
                scan_only_files.push(filename.to_string());
            }
        }
    }

    let mut list_only_files = Vec::new();
    for (filename, entries) in listed.iter() {
        if scans.get(filename).is_some() {
            continue;
        }
        for entry in entries {
            records.push(enrich((*entry).clone(), Map::new(), JoinStatus::ListOnly));
        }
        list_only_files.push(filename.to_string());
    }

    report.duplicate_filenames = listed
        .iter()
        .filter(|(_, entries)| entries.len() > 1)
        .map(|(filename, entries)| (filename.to_string(), entries.len()))
        .collect::<BTreeMap<_, _>>();
    report.duplicate_count = report.duplicate_filenames.len();
    report.scan_only = scan_only_files.len();
    report.list_only = list_only_files.len();
    report.total_enriched_records = records.len();
    report.scan_only_files = first_sorted(scan_only_files);
    report.list_only_files = first_sorted(list_only_files);

    info!(
        matched = report.matched,
        scan_only = report.scan_only,
        list_only = report.list_only,
        duplicates = report.duplicate_count,
        "台帳との突合が完了"
    );

    Ok(JoinOutput { records, report })
}

/// 抽出結果をフィールドのマップにする
fn scan_fields(result: &ScanResult) -> Result<Map<String, Value>> {
    match serde_json::to_value(result)? {
        Value::Object(map) => Ok(map),
        _ => Err(ScanError::InvalidRegistry(format!(
            "抽出結果をオブジェクトにできません: {}",
            result.filename
        ))),
    }
}

/// 台帳フィールドに抽出フィールドを重ねる
fn enrich(
    mut fields: Map<String, Value>,
    overrides: Map<String, Value>,
    join_status: JoinStatus,
) -> EnrichedRecord {
    fields.extend(overrides);
    // join_status は突合結果の値だけを出力する
    fields.remove("join_status");
    EnrichedRecord {
        fields,
        join_status,
    }
}

fn first_sorted(mut files: Vec<String>) -> Vec<String> {
    files.sort();
    files.truncate(REPORT_FILE_LIMIT);
    files
}
