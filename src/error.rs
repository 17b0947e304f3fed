use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("ワークブック読み込みエラー: {0}")]
    Workbook(String),

    #[error("シートが見つかりません: {0}")]
    SheetNotFound(String),

    #[error("案件台帳が不正: {0}")]
    InvalidRegistry(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("見積ファイルが見つかりません: {0}")]
    NoWorkbooksFound(String),
}

impl From<estimate_scan_common::Error> for ScanError {
    fn from(err: estimate_scan_common::Error) -> Self {
        match err {
            estimate_scan_common::Error::Io(e) => ScanError::Io(e),
            estimate_scan_common::Error::Json(e) => ScanError::JsonParse(e),
        }
    }
}

impl From<calamine::Error> for ScanError {
    fn from(err: calamine::Error) -> Self {
        ScanError::Workbook(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ScanError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ScanError::ExcelGeneration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
