//! Estimate Scan Common Library
//!
//! 抽出結果・役職カード・突合結果の型と、セクション語彙の表

pub mod types;
pub mod alias;
pub mod error;
pub mod json;

pub use types::{
    Dialect, EnrichedRecord, Financials, FormatAFinancials, FormatBFinancials, JoinReport,
    JoinStatus, LaborRoleRow, NoFinancials, RateCardEntry, RateRange, ScanBatch, ScanResult,
    SectionInfo,
};
pub use alias::{canonical_section, is_client_tab, is_section_header, is_skip_tab};
pub use error::{Error, Result};
