// Primitives for reading participants from CSV files.

use crate::rota::*;

/// Reads the name column of a CSV file, starting at the configured first row.
pub fn read_csv_roster(path: &str, src: &ParticipantSource) -> RotaResult<Vec<String>> {
    info!("Attempting to read participant file {:?}", path);
    let name_col = src.name_column_index()?;
    let first_row = src.first_row_index()?;

    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .context(CsvOpenSnafu { path })?;

    let mut res: Vec<String> = Vec::new();
    for (idx, line_r) in rdr.into_records().enumerate().skip(first_row) {
        // The line numbers start at 1 to respect most conventions in the spreadsheet world
        let lineno = idx + 1;
        let line = line_r.context(CsvLineParseSnafu { lineno })?;
        debug!("read_csv_roster: lineno: {:?} row: {:?}", lineno, line);
        let name = line
            .get(name_col)
            .context(CsvLineTooShortSnafu { lineno })?;
        res.push(name.to_string());
    }
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_tmp(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "{}", contents).unwrap();
        f
    }

    #[test]
    fn first_column_by_default() {
        let f = write_tmp("Ann\nBob\n Cleo \n");
        let path = f.path().display().to_string();
        let src = ParticipantSource::new("csv", &path);
        assert_eq!(read_csv_roster(&path, &src).unwrap(), vec!["Ann", "Bob", " Cleo "]);
    }

    #[test]
    fn selected_column_with_header() {
        let f = write_tmp("team,name\nblue,Ann\nred,\"Bob, Jr\"\n");
        let path = f.path().display().to_string();
        let src = ParticipantSource::new("csv", &path)
            .with_name_column("B")
            .with_first_row(2);
        assert_eq!(read_csv_roster(&path, &src).unwrap(), vec!["Ann", "Bob, Jr"]);
    }

    #[test]
    fn short_line() {
        let f = write_tmp("team,name\nblue\n");
        let path = f.path().display().to_string();
        let src = ParticipantSource::new("csv", &path).with_name_column("2");
        assert!(matches!(
            read_csv_roster(&path, &src),
            Err(RotaError::CsvLineTooShort { lineno: 2 })
        ));
    }
}
