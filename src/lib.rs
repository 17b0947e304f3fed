//! estimate-scan
//!
//! 見積ワークブック（.xlsx）から財務値・労務明細を抽出し、
//! 役職名を正規化して役職カードにまとめ、案件台帳と突合する。

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod matcher;
pub mod normalizer;
pub mod rate_card;
pub mod scanner;
pub mod workbook;

pub use error::{Result, ScanError};
