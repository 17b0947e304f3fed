//! 役職カードのExcel出力

use crate::error::Result;
use estimate_scan_common::{RateCardEntry, RateRange};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::path::Path;

const SHEET_NAME: &str = "Rate Card";

const HEADERS: &[(&str, f64)] = &[
    ("Role", 36.0),
    ("Occurrences", 12.0),
    ("Rate Units", 24.0),
    ("GL Codes", 18.0),
    ("OT", 6.0),
    ("DT", 6.0),
    ("Weekend", 9.0),
    ("After Hours", 11.0),
    ("Unit Min", 10.0),
    ("Unit Max", 10.0),
    ("Unit Avg", 10.0),
    ("Unit Median", 12.0),
    ("Cost Min", 10.0),
    ("Cost Max", 10.0),
    ("Cost Avg", 10.0),
    ("Cost Median", 12.0),
];

/// 役職カードを1役職1行のシートとして保存
pub fn generate_rate_card_excel(entries: &[RateCardEntry], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));
    let money_format = Format::new().set_num_format("#,##0.00");

    for (col, (title, width)) in HEADERS.iter().enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *title, &header_format)?;
        worksheet.set_column_width(col, *width)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    for (i, entry) in entries.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_string(row, 0, &entry.role)?;
        worksheet.write_number(row, 1, entry.occurrences as f64)?;
        worksheet.write_string(row, 2, entry.rate_units.join(", "))?;
        worksheet.write_string(row, 3, entry.gl_codes.join(", "))?;
        worksheet.write_boolean(row, 4, entry.has_ot_variant)?;
        worksheet.write_boolean(row, 5, entry.has_dt_variant)?;
        worksheet.write_boolean(row, 6, entry.has_weekend_variant)?;
        worksheet.write_boolean(row, 7, entry.has_afterhours_variant)?;
        write_range(worksheet, row, 8, Some(&entry.unit_rate_range), &money_format)?;
        write_range(worksheet, row, 12, entry.cost_rate_range.as_ref(), &money_format)?;
    }

    if !entries.is_empty() {
        worksheet.autofilter(0, 0, entries.len() as u32, HEADERS.len() as u16 - 1)?;
    }

    workbook.save(output_path)?;
    Ok(())
}

/// min / max / avg / median の4列（範囲がなければ空欄）
fn write_range(
    worksheet: &mut Worksheet,
    row: u32,
    first_col: u16,
    range: Option<&RateRange>,
    format: &Format,
) -> Result<()> {
    if let Some(range) = range {
        for (offset, value) in [range.min, range.max, range.avg, range.median]
            .into_iter()
            .enumerate()
        {
            worksheet.write_number_with_format(row, first_col + offset as u16, value, format)?;
        }
    }
    Ok(())
}
