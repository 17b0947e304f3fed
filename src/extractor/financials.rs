//! ヘッダ財務値の読み取り
//!
//! 方言ごとに固定位置のセルを読む。方言不明なら推測せず空レコードを返す。

use super::layout::{format_a, format_b, RECAP_COLS, RECAP_ROWS};
use crate::workbook::Grid;
use estimate_scan_common::{Dialect, Financials, FormatAFinancials, FormatBFinancials};

pub fn extract_financials(grid: &Grid, dialect: Dialect) -> Financials {
    let read = |(row, col): (u32, u32)| grid.number(row, col);

    match dialect {
        Dialect::A => Financials::FormatA(FormatAFinancials {
            bid_gross: read(format_a::BID_GROSS),
            bid_net: read(format_a::BID_NET),
            bid_margin_dollars: read(format_a::BID_MARGIN_DOLLARS),
            bid_margin_pct: read(format_a::BID_MARGIN_PCT),
            recap_gross: read(format_a::RECAP_GROSS),
            recap_net: read(format_a::RECAP_NET),
            recap_margin_dollars: read(format_a::RECAP_MARGIN_DOLLARS),
            recap_margin_pct: read(format_a::RECAP_MARGIN_PCT),
            payout: read(format_a::PAYOUT),
        }),
        Dialect::B => Financials::FormatB(FormatBFinancials {
            revenue: read(format_b::REVENUE),
            net_rev: read(format_b::NET_REV),
            gm: read(format_b::GM),
        }),
        Dialect::Unknown => Financials::default(),
    }
}

/// 実績列（T〜Z）に0以外の数値があるか
pub fn has_recap_data(grid: &Grid) -> bool {
    RECAP_ROWS.into_iter().any(|row| {
        RECAP_COLS
            .into_iter()
            .any(|col| grid.number(row, col).map(|n| n != 0.0).unwrap_or(false))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_a_offsets() {
        let grid = Grid::new()
            .with_number(4, 11, 50000.0)
            .with_number(5, 11, 42000.0)
            .with_number(4, 13, 0.16)
            .with_text(4, 14, "$3,000")
            .with_number(4, 24, 48000.0);

        match extract_financials(&grid, Dialect::A) {
            Financials::FormatA(fin) => {
                assert_eq!(fin.bid_gross, Some(50000.0));
                assert_eq!(fin.bid_net, Some(42000.0));
                assert_eq!(fin.bid_margin_pct, Some(0.16));
                assert_eq!(fin.payout, Some(3000.0));
                assert_eq!(fin.recap_gross, Some(48000.0));
                assert_eq!(fin.recap_net, None);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_format_b_offsets() {
        let grid = Grid::new()
            .with_number(4, 16, 9000.0)
            .with_number(5, 16, 7000.0)
            .with_number(7, 16, 0.3);

        assert_eq!(
            extract_financials(&grid, Dialect::B),
            Financials::FormatB(FormatBFinancials {
                revenue: Some(9000.0),
                net_rev: Some(7000.0),
                gm: Some(0.3),
            })
        );
    }

    #[test]
    fn test_unknown_dialect_is_empty() {
        let grid = Grid::new().with_number(4, 11, 1.0).with_number(4, 16, 1.0);
        assert!(extract_financials(&grid, Dialect::Unknown).is_empty());
    }

    #[test]
    fn test_has_recap_data() {
        assert!(!has_recap_data(&Grid::new()));
        assert!(!has_recap_data(&Grid::new().with_number(50, 22, 0.0)));
        assert!(!has_recap_data(&Grid::new().with_number(111, 22, 5.0)));
        assert!(!has_recap_data(&Grid::new().with_text(50, 22, "n/a")));
        assert!(has_recap_data(&Grid::new().with_number(110, 26, 5.0)));
        assert!(has_recap_data(&Grid::new().with_text(10, 20, "$12")));
    }
}
