//! 案件台帳（レジストリ）の読み込みとファイル名キー

use crate::error::{Result, ScanError};
use estimate_scan_common::json::read_json;
use percent_encoding::percent_decode_str;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::warn;

/// 台帳レコード（任意のフィールドを持つオブジェクト）
pub type RegistryRecord = Map<String, Value>;

/// 台帳JSONの形（`{"records": [...]}` またはレコードの配列）
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RegistryDocument {
    Wrapped { records: Vec<Value> },
    Bare(Vec<Value>),
}

/// 台帳JSONファイルを読み込む
pub fn load_registry(path: &Path) -> Result<Vec<RegistryRecord>> {
    if !path.exists() {
        return Err(ScanError::FileNotFound(path.display().to_string()));
    }
    let value: Value = read_json(path)?;
    registry_from_value(value)
}

/// 読み込み済みJSONから台帳レコードを取り出す
///
/// オブジェクトでない要素は警告して読み飛ばす。
pub fn registry_from_value(value: Value) -> Result<Vec<RegistryRecord>> {
    let document: RegistryDocument = serde_json::from_value(value).map_err(|e| {
        ScanError::InvalidRegistry(format!("records 配列またはレコード配列が必要です: {}", e))
    })?;
    let items = match document {
        RegistryDocument::Wrapped { records } => records,
        RegistryDocument::Bare(records) => records,
    };

    let mut records = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(map) => records.push(map),
            other => warn!(index = i, kind = %json_kind(&other), "オブジェクトでない台帳レコードを無視"),
        }
    }
    Ok(records)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// レコードのファイル名キー
///
/// `filename` があればそれを、なければ `download_url` から導く。
pub fn filename_key(record: &RegistryRecord) -> Option<String> {
    let explicit = record
        .get("filename")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty());
    if let Some(name) = explicit {
        return Some(name.to_string());
    }

    record
        .get("download_url")
        .and_then(Value::as_str)
        .and_then(filename_from_url)
}

/// ダウンロードURLのセルからファイル名を取り出す
///
/// 改行区切りで複数URLがある場合は最後のものを使う。
/// 最後の `/` より後ろをパーセントデコードして返す。
/// ファイル名には生の `#` や `?` が含まれうるので、URLとしては解釈しない。
pub fn filename_from_url(cell: &str) -> Option<String> {
    let last = cell.trim().lines().last()?.trim();
    if !last.starts_with("http") {
        return None;
    }

    let segment = last.rsplit('/').next()?;
    let decoded = percent_decode_str(segment).decode_utf8_lossy().into_owned();
    if decoded.is_empty() {
        None
    } else {
        Some(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> RegistryRecord {
        match value {
            Value::Object(map) => map,
            _ => panic!("object expected"),
        }
    }

    #[test]
    fn test_filename_from_url() {
        assert_eq!(
            filename_from_url("https://files.example.com/uploads/123/Acme%20Launch%20Estimate.xlsx"),
            Some("Acme Launch Estimate.xlsx".to_string())
        );
        assert_eq!(
            filename_from_url("https://x.test/a/old.xlsx\nhttps://x.test/b/New%20v2.xlsx"),
            Some("New v2.xlsx".to_string())
        );
        assert_eq!(
            filename_from_url("https://x.test/a/Estimate.xlsx?dl=1"),
            Some("Estimate.xlsx?dl=1".to_string())
        );
        assert_eq!(filename_from_url("not a url"), None);
        assert_eq!(filename_from_url("https://x.test/a/\nftp://x.test/b.xlsx"), None);
        assert_eq!(filename_from_url("https://x.test/folder/"), None);
        assert_eq!(filename_from_url(""), None);
    }

    #[test]
    fn test_filename_from_url_keeps_hash_and_question_mark() {
        assert_eq!(
            filename_from_url("https://x.test/a/Acme #2 Estimate.xlsx"),
            Some("Acme #2 Estimate.xlsx".to_string())
        );
        assert_eq!(
            filename_from_url("https://x.test/a/Acme%20Q&A?.xlsx"),
            Some("Acme Q&A?.xlsx".to_string())
        );
        assert_eq!(
            filename_from_url("https://x.test/a/Acme%20%232%20Estimate.xlsx"),
            Some("Acme #2 Estimate.xlsx".to_string())
        );
    }

    #[test]
    fn test_filename_key_prefers_explicit_field() {
        let r = record(json!({
            "filename": "Explicit.xlsx",
            "download_url": "https://x.test/Other.xlsx"
        }));
        assert_eq!(filename_key(&r).as_deref(), Some("Explicit.xlsx"));

        let r = record(json!({"filename": "  ", "download_url": "https://x.test/Other.xlsx"}));
        assert_eq!(filename_key(&r).as_deref(), Some("Other.xlsx"));

        let r = record(json!({"client": "Acme"}));
        assert_eq!(filename_key(&r), None);
    }

    #[test]
    fn test_registry_shapes() {
        let wrapped = registry_from_value(json!({
            "records": [{"filename": "a.xlsx"}, 42],
            "total": 2
        }))
        .unwrap();
        assert_eq!(wrapped.len(), 1);

        let bare = registry_from_value(json!([{"filename": "a.xlsx"}, {"filename": "b.xlsx"}])).unwrap();
        assert_eq!(bare.len(), 2);

        let err = registry_from_value(json!({"rows": []})).unwrap_err();
        assert!(matches!(err, ScanError::InvalidRegistry(_)));
    }

    #[test]
    fn test_load_registry_missing_file() {
        let err = load_registry(Path::new("/nonexistent/registry.json")).unwrap_err();
        assert!(matches!(err, ScanError::FileNotFound(_)));
    }
}
