//! 抽出から役職カード出力までの統合テスト

mod support;

use estimate_scan::export;
use estimate_scan::extractor::{scan_documents, ScanOptions};
use estimate_scan::rate_card::build_rate_card;
use estimate_scan::scanner;
use serde_json::Value;
use tempfile::tempdir;

#[test]
fn test_rate_card_from_scanned_workbooks() {
    let dir = tempdir().expect("Failed to create temp dir");
    support::format_a_workbook(&dir.path().join("acme.xlsx"));
    support::format_b_workbook(&dir.path().join("budget.xlsx"));
    support::corrupt_workbook(&dir.path().join("broken.xlsx"));

    let files = scanner::scan_folder(dir.path()).unwrap();
    let batch = scan_documents(
        &files,
        &ScanOptions {
            limit: None,
            show_progress: false,
        },
    );
    let entries = build_rate_card(&batch.results);

    // acme: Vehicle Manager x2, Greeter x1 / budget: Vehicle Manager x1, Greeter x1
    assert_eq!(entries.len(), 2);

    let manager = &entries[0];
    assert_eq!(manager.role, "Vehicle Manager");
    assert_eq!(manager.occurrences, 3);
    assert!(manager.has_ot_variant);
    assert!(manager.has_weekend_variant);
    assert!(!manager.has_dt_variant);
    assert_eq!(manager.rate_units, vec!["/hr".to_string()]);
    assert_eq!(manager.gl_codes, vec!["4000.16".to_string()]);
    assert_eq!(manager.unit_rate_range.min, 65.0);
    assert_eq!(manager.unit_rate_range.max, 97.5);
    assert_eq!(manager.unit_rate_range.median, 80.0);
    assert_eq!(manager.unit_rate_range.avg, 80.83);
    let cost = manager.cost_rate_range.as_ref().unwrap();
    assert_eq!(cost.min, 40.0);
    assert_eq!(cost.max, 60.0);

    let greeter = &entries[1];
    assert_eq!(greeter.role, "Greeter");
    assert_eq!(greeter.occurrences, 2);
    assert_eq!(greeter.rate_units, vec!["/hr".to_string()]);
    assert_eq!(greeter.unit_rate_range.median, 33.75);
    assert_eq!(greeter.cost_rate_range, None);
}

#[test]
fn test_rate_card_json_field_names() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("budget.xlsx");
    support::format_b_workbook(&path);

    let files = scanner::scan_folder(dir.path()).unwrap();
    let batch = scan_documents(
        &files,
        &ScanOptions {
            limit: None,
            show_progress: false,
        },
    );
    let entries = build_rate_card(&batch.results);
    let written = export::write_rate_card(dir.path(), &entries, false).unwrap();
    assert_eq!(written, vec![dir.path().join(export::RATE_CARD_FILE)]);

    let text = std::fs::read_to_string(&written[0]).unwrap();
    let json: Value = serde_json::from_str(&text).unwrap();
    let first = &json[0];
    for key in [
        "role",
        "rate_units",
        "gl_codes",
        "occurrences",
        "has_ot_variant",
        "has_dt_variant",
        "has_weekend_variant",
        "has_afterhours_variant",
        "unit_rate_range",
        "cost_rate_range",
    ] {
        assert!(first.get(key).is_some(), "missing key {}", key);
    }
    assert!(first["cost_rate_range"].is_null());
    assert!(first["unit_rate_range"]["median"].is_number());
}
