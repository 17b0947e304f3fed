use crate::error::{Result, ScanError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct EstimateFile {
    pub path: PathBuf,
    pub file_name: String,
}

const WORKBOOK_EXTENSION: &str = "xlsx";

pub fn scan_folder(folder: &Path) -> Result<Vec<EstimateFile>> {
    if !folder.is_dir() {
        return Err(ScanError::FolderNotFound(folder.display().to_string()));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() || !is_workbook_path(path) {
            continue;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        // Excelの一時ファイル（~$foo.xlsx）は対象外
        if file_name.starts_with("~$") {
            continue;
        }

        files.push(EstimateFile {
            path: path.to_path_buf(),
            file_name,
        });
    }

    // ファイル名でソート
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(files)
}

/// Check if a path has the workbook extension (case-insensitive)
fn is_workbook_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(WORKBOOK_EXTENSION))
        .unwrap_or(false)
}
