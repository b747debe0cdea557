//! Styled two-sheet spreadsheet export.
//!
//! Sheet 1 (`Current_Status`) holds the summary; sheet 2 (`History_Logs`)
//! draws a thick outline box around each record block. Block boundaries come
//! from the block structure itself, never from re-parsing cell text.

use std::path::Path;

use anyhow::Context;
use domain_recon_core::report::{ReportBlock, ReportRow};
use rust_xlsxwriter::{Format, FormatBorder, Workbook, Worksheet};

const SHEET_HEADER: [&str; 2] = ["PARAMETER", "DETAILS"];
const LABEL_COLUMN_WIDTH: f64 = 30.0;
const VALUE_COLUMN_WIDTH: f64 = 60.0;

/// Write the report as `Current_Status` + `History_Logs` sheets at `path`.
pub fn write_workbook(
    path: &Path,
    current: &ReportBlock,
    history: &[ReportBlock],
) -> anyhow::Result<()> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Current_Status")?;
    write_sheet_header(sheet)?;
    write_plain_rows(sheet, &current.rows)?;

    let sheet = workbook.add_worksheet();
    sheet.set_name("History_Logs")?;
    write_sheet_header(sheet)?;
    write_boxed_blocks(sheet, history)?;

    workbook
        .save(path)
        .with_context(|| format!("Failed to save workbook to {}", path.display()))?;
    Ok(())
}

fn write_sheet_header(sheet: &mut Worksheet) -> anyhow::Result<()> {
    let header_format = Format::new().set_bold();
    for (col, title) in SHEET_HEADER.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header_format)?;
    }
    sheet.set_column_width(0, LABEL_COLUMN_WIDTH)?;
    sheet.set_column_width(1, VALUE_COLUMN_WIDTH)?;
    Ok(())
}

/// Label column bold, value column plain; no boxes.
fn write_plain_rows(sheet: &mut Worksheet, rows: &[ReportRow]) -> anyhow::Result<()> {
    let label_format = Format::new().set_bold();
    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        sheet.write_string_with_format(r, 0, &row.parameter, &label_format)?;
        sheet.write_string(r, 1, &row.details)?;
    }
    Ok(())
}

/// One thick black outline box per block, label column bold.
fn write_boxed_blocks(sheet: &mut Worksheet, blocks: &[ReportBlock]) -> anyhow::Result<()> {
    let mut r: u32 = 1;
    for block in blocks {
        let last = block.rows.len().saturating_sub(1);
        for (i, row) in block.rows.iter().enumerate() {
            let label_format = boxed_format(i == 0, i == last, true).set_bold();
            let value_format = boxed_format(i == 0, i == last, false);
            sheet.write_string_with_format(r, 0, &row.parameter, &label_format)?;
            sheet.write_string_with_format(r, 1, &row.details, &value_format)?;
            r += 1;
        }
    }
    Ok(())
}

/// Outline-only borders: the box edges are thick, interior edges are left
/// unset.
fn boxed_format(is_top: bool, is_bottom: bool, is_label_column: bool) -> Format {
    let mut format = Format::new();
    if is_top {
        format = format.set_border_top(FormatBorder::Thick);
    }
    if is_bottom {
        format = format.set_border_bottom(FormatBorder::Thick);
    }
    format = if is_label_column {
        format.set_border_left(FormatBorder::Thick)
    } else {
        format.set_border_right(FormatBorder::Thick)
    };
    format
}
