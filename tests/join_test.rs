//! 案件台帳突合の統合テスト

mod support;

use estimate_scan::export;
use estimate_scan::extractor::{scan_documents, ScanOptions};
use estimate_scan::matcher::{join, load_registry};
use estimate_scan::scanner;
use estimate_scan_common::JoinStatus;
use serde_json::{json, Value};
use tempfile::tempdir;

#[test]
fn test_join_scanned_folder_with_registry_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("estimates");
    std::fs::create_dir_all(&input).unwrap();
    support::format_a_workbook(&input.join("Acme Launch.xlsx"));
    support::format_b_workbook(&input.join("Budget.xlsx"));

    let registry_path = dir.path().join("project_list.json");
    let registry = json!({
        "records": [
            {
                "client": "Acme",
                "download_url": "https://files.test/u/1/old.xlsx\nhttps://files.test/u/2/Acme%20Launch.xlsx",
                "grand_total": "stale"
            },
            {"client": "Acme again", "filename": "Acme Launch.xlsx"},
            {"client": "Zeta", "filename": "Zeta.xlsx"},
            {"client": "No link", "download_url": "see email"}
        ],
        "total_records": 4
    });
    std::fs::write(&registry_path, serde_json::to_string_pretty(&registry).unwrap()).unwrap();

    let files = scanner::scan_folder(&input).unwrap();
    let batch = scan_documents(
        &files,
        &ScanOptions {
            limit: None,
            show_progress: false,
        },
    );
    let records = load_registry(&registry_path).unwrap();
    assert_eq!(records.len(), 4);

    let output = join(&batch.results, &records).unwrap();
    let report = &output.report;

    // 抽出した全ファイルが matched か scan_only のどちらか1回だけに入る
    assert_eq!(report.matched + report.scan_only, batch.total_scanned);
    assert_eq!(report.matched, 1);
    assert_eq!(report.scan_only, 1);
    assert_eq!(report.list_only, 1);
    assert_eq!(report.duplicate_count, 1);
    assert_eq!(report.duplicate_filenames.get("Acme Launch.xlsx"), Some(&2));
    assert_eq!(report.total_enriched_records, 3);
    assert_eq!(report.scan_only_files, vec!["Budget.xlsx".to_string()]);
    assert_eq!(report.list_only_files, vec!["Zeta.xlsx".to_string()]);

    let matched = &output.records[0];
    assert_eq!(matched.join_status, JoinStatus::Matched);
    assert_eq!(matched.fields["client"], json!("Acme"));
    assert_eq!(matched.fields["grand_total"], json!(12000.0));
    assert_eq!(matched.fields["format"], json!("FORMAT_A"));

    let (index_path, report_path) = export::write_join_output(dir.path(), &output).unwrap();
    assert_eq!(index_path, dir.path().join(export::ENRICHED_INDEX_FILE));

    let index: Value = serde_json::from_str(&std::fs::read_to_string(&index_path).unwrap()).unwrap();
    let statuses: Vec<&str> = index
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["join_status"].as_str().unwrap())
        .collect();
    assert_eq!(statuses, vec!["matched", "scan_only", "list_only"]);

    let report_json: Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    for key in [
        "matched",
        "scan_only",
        "list_only",
        "duplicate_filenames",
        "duplicate_count",
        "total_enriched_records",
    ] {
        assert!(report_json.get(key).is_some(), "missing key {}", key);
    }
}

#[test]
fn test_bare_array_registry() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("list.json");
    std::fs::write(&path, r#"[{"filename": "a.xlsx"}, {"filename": "b.xlsx"}]"#).unwrap();

    let records = load_registry(&path).unwrap();
    let output = join(&[], &records).unwrap();
    assert_eq!(output.report.matched, 0);
    assert_eq!(output.report.list_only, 2);
    assert!(output
        .records
        .iter()
        .all(|r| r.join_status == JoinStatus::ListOnly));
}
