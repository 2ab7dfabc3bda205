// Spreadsheet export of a schedule.
//
// Layout, for every group in order: a header row with the time slot, then
// the members over two columns (the first half, rounded up, in the first
// column). Consecutive groups are separated by a blank row.
//
// The workbook has a single `Schedule` sheet. Headers are merged over both
// columns. A `.csv` target (or `stdout`) gets the same rows as plain CSV.

use std::io;
use std::path::Path;

use chrono::NaiveDate;
use rust_xlsxwriter::{Format, FormatAlign, Workbook};

use crate::rota::time_slot::{slot_for_group, TimeSlot};
use crate::rota::*;

pub const NUM_COLUMNS: usize = 2;
pub const SHEET_NAME: &str = "Schedule";
pub const COLUMN_WIDTH: f64 = 30.0;

pub fn default_file_name(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => format!("Rota_Schedule_{}.xlsx", d.format("%Y-%m-%d")),
        None => "Rota_Schedule.xlsx".to_string(),
    }
}

fn header_text(slot: Option<&TimeSlot>) -> String {
    match slot {
        Some(s) => s.label(),
        None => "N/A - N/A".to_string(),
    }
}

fn member_rows(members: &[String]) -> Vec<Vec<String>> {
    let mid = (members.len() + 1) / 2;
    let (col1, col2) = members.split_at(mid);
    col1.iter()
        .enumerate()
        .map(|(idx, first)| vec![first.clone(), col2.get(idx).cloned().unwrap_or_default()])
        .collect()
}

/// The cells of the sheet, row by row. Every row has exactly two cells.
pub fn schedule_rows(groups: &[Group], slots: &[TimeSlot]) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    for group in groups.iter() {
        if !rows.is_empty() {
            rows.push(vec![String::new(); NUM_COLUMNS]);
        }
        rows.push(vec![
            header_text(slot_for_group(slots, group.id)),
            String::new(),
        ]);
        rows.append(&mut member_rows(&group.members));
    }
    rows
}

pub fn write_rows<W: io::Write>(writer: W, rows: &[Vec<String>]) -> RotaResult<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    for row in rows.iter() {
        wtr.write_record(row).context(CsvWriteSnafu {})?;
    }
    wtr.flush().context(WritingFileSnafu { path: "<csv>" })?;
    Ok(())
}

/// Builds the workbook: same rows as [`schedule_rows`], with merged headers.
pub fn build_workbook(groups: &[Group], slots: &[TimeSlot]) -> RotaResult<Workbook> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold().set_align(FormatAlign::Center);
    let last_col = (NUM_COLUMNS - 1) as u16;

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).context(XlsxWriteSnafu {})?;
    for col in 0..=last_col {
        worksheet
            .set_column_width(col, COLUMN_WIDTH)
            .context(XlsxWriteSnafu {})?;
    }

    let mut row: u32 = 0;
    for (idx, group) in groups.iter().enumerate() {
        if idx > 0 {
            // Blank separator.
            row += 1;
        }
        let header = header_text(slot_for_group(slots, group.id));
        worksheet
            .merge_range(row, 0, row, last_col, &header, &header_format)
            .context(XlsxWriteSnafu {})?;
        row += 1;
        for cells in member_rows(&group.members) {
            for (col, value) in cells.iter().enumerate() {
                if !value.is_empty() {
                    worksheet
                        .write_string(row, col as u16, value)
                        .context(XlsxWriteSnafu {})?;
                }
            }
            row += 1;
        }
    }
    debug!("build_workbook: {} groups over {} rows", groups.len(), row);
    Ok(workbook)
}

/// Writes the schedule to `path`: an Excel workbook, or CSV when the path ends
/// with `.csv`. `stdout` prints the CSV rows instead.
pub fn write_schedule(path: &str, groups: &[Group], slots: &[TimeSlot]) -> RotaResult<()> {
    if path == "stdout" {
        return write_rows(io::stdout(), &schedule_rows(groups, slots));
    }
    info!("Writing schedule to {:?}", path);
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context(WritingFileSnafu { path })?;
        }
    }
    if path.to_lowercase().ends_with(".csv") {
        let file = fs::File::create(path).context(WritingFileSnafu { path })?;
        return write_rows(file, &schedule_rows(groups, slots));
    }
    let mut workbook = build_workbook(groups, slots)?;
    workbook.save(path).context(XlsxWriteSnafu {})
}
