// Plain text rosters: one participant per line.

use crate::rota::{io_common::split_lines, *};

pub fn read_text_roster(path: &str) -> RotaResult<Vec<String>> {
    info!("Attempting to read participant file {:?}", path);
    let contents = fs::read_to_string(path).context(OpeningFileSnafu { path })?;
    let res = split_lines(&contents);
    debug!("read_text_roster: {} lines in {:?}", res.len(), path);
    Ok(res)
}
