// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{DATE_FORMAT, parse_to_excel_date};
use crate::export::model::{Cell, LOG_HEADERS, ReportData, TOOL_HEADERS};
use crate::export::{LOGS_SHEET, TOOLS_SHEET, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Two-sheet report workbook with styled headers, banded rows and
/// auto-sized columns.
pub(crate) fn export_xlsx(report: &ReportData, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let logs: Vec<Vec<Cell>> = report.machine_logs.iter().map(|r| r.cells()).collect();
    let tools: Vec<Vec<Cell>> = report.spare_tools.iter().map(|r| r.cells()).collect();

    let mut workbook = Workbook::new();
    workbook.push_worksheet(build_sheet(LOGS_SHEET, &LOG_HEADERS, &logs)?);
    workbook.push_worksheet(build_sheet(TOOLS_SHEET, &TOOL_HEADERS, &tools)?);

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn build_sheet(name: &str, headers: &[&str], rows: &[Vec<Cell>]) -> AppResult<Worksheet> {
    let mut worksheet = Worksheet::new();
    worksheet.set_name(name).map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x1E3A8A))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    if rows.is_empty() {
        worksheet
            .write(1, 0, "No data available")
            .map_err(to_export_error)?;
    }

    // ---------------------------
    // Rows
    // ---------------------------
    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, cells) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, cell) in cells.iter().enumerate() {
            let width = write_cell(&mut worksheet, row, col as u16, cell, band_color)?;
            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(width);
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    Ok(worksheet)
}

/// Write one cell and return its display width.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    bg: Color,
) -> AppResult<usize> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match cell {
        Cell::Date(s) => {
            if let Some(serial) = parse_to_excel_date(s) {
                let fmt = base.set_num_format(DATE_FORMAT);
                worksheet
                    .write_with_format(row, col, serial, &fmt)
                    .map_err(to_export_error)?;
            } else {
                worksheet
                    .write_with_format(row, col, s.as_str(), &base)
                    .map_err(to_export_error)?;
            }
            Ok(UnicodeWidthStr::width(s.as_str()))
        }
        Cell::Number(n) => {
            let fmt = base.set_align(FormatAlign::Right);
            worksheet
                .write_with_format(row, col, *n, &fmt)
                .map_err(to_export_error)?;
            Ok(crate::utils::fmt_number(*n).len())
        }
        Cell::Text(s) => {
            worksheet
                .write_with_format(row, col, s.as_str(), &base)
                .map_err(to_export_error)?;
            Ok(UnicodeWidthStr::width(s.as_str()))
        }
    }
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
