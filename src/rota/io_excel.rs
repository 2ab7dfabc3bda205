// Participants stored in one column of an Excel worksheet.

use calamine::{open_workbook, DataType, Range, Reader, Xlsx};

use crate::rota::*;

pub fn read_excel_roster(path: &str, src: &ParticipantSource) -> RotaResult<Vec<String>> {
    info!("Attempting to read participant file {:?}", path);
    let wrange = get_range(path, src)?;
    let name_col = src.name_column_index()?;
    let first_row = src.first_row_index()?;
    debug!(
        "read_excel_roster: size: {:?} name_col: {:?} first_row: {:?}",
        wrange.get_size(),
        name_col,
        first_row
    );

    // The range only covers the used cells: it may not start at A1.
    let (row_start, col_start) = wrange.start().unwrap_or((0, 0));
    let mut res: Vec<String> = Vec::new();
    for (idx, row) in wrange.rows().enumerate() {
        let abs_row = row_start as usize + idx;
        if abs_row < first_row {
            continue;
        }
        let lineno = abs_row + 1;
        let cell = name_col
            .checked_sub(col_start as usize)
            .and_then(|col| row.get(col))
            .context(ExcelMissingColumnSnafu { lineno })?;
        if let Some(name) = cell_text(cell, lineno)? {
            res.push(name);
        }
    }
    Ok(res)
}

/// The text of a cell. Empty cells give `None`.
fn cell_text(cell: &DataType, lineno: usize) -> RotaResult<Option<String>> {
    match cell {
        DataType::String(s) => Ok(Some(s.clone())),
        DataType::Int(i) => Ok(Some(i.to_string())),
        // Employee numbers are often stored as floats.
        DataType::Float(f) if f.fract() == 0.0 => Ok(Some(format!("{:.0}", f))),
        DataType::Float(f) => Ok(Some(f.to_string())),
        DataType::Bool(b) => Ok(Some(b.to_string())),
        DataType::Empty => Ok(None),
        _ => ExcelWrongCellTypeSnafu {
            lineno,
            content: format!("{:?}", cell),
        }
        .fail(),
    }
}

fn get_range(path: &str, src: &ParticipantSource) -> RotaResult<Range<DataType>> {
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu { path })?;

    // A worksheet name was provided, use it.
    if let Some(worksheet_name) = src.excel_worksheet_name.as_deref() {
        debug!(
            "get_range: path: {:?} worksheet: {:?}",
            path, worksheet_name
        );
        let wrange = workbook
            .worksheet_range(worksheet_name)
            .context(MissingWorksheetSnafu {
                path,
                name: worksheet_name,
            })?
            .context(OpeningExcelSnafu { path })?;
        Ok(wrange)
    } else {
        let all_worksheets = workbook.worksheets();
        match all_worksheets.as_slice() {
            [] => EmptyExcelSnafu { path }.fail(),
            [(worksheet_name, wrange)] => {
                debug!("get_range: path: {:?} worksheet: {:?}", path, worksheet_name);
                Ok(wrange.clone())
            }
            _ => AmbiguousWorksheetSnafu { path }.fail(),
        }
    }
}
