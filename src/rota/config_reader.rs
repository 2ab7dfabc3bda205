use crate::rota::time_slot::TimeSlot;
use crate::rota::*;

use serde::{Deserialize, Serialize};
use serde_json::Value as JSValue;

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(rename = "scheduleName")]
    pub schedule_name: Option<String>,
    #[serde(rename = "outputDirectory")]
    pub output_directory: Option<String>,
}

/// A file that contributes participants to the roster.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantSource {
    /// One of `text`, `csv`, `xlsx`
    pub provider: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
    #[serde(rename = "nameColumnIndex")]
    _name_column_index: Option<JSValue>,
    #[serde(rename = "firstRowIndex")]
    _first_row_index: Option<JSValue>,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
}

impl ParticipantSource {
    pub fn new(provider: &str, file_path: &str) -> ParticipantSource {
        ParticipantSource {
            provider: provider.to_string(),
            file_path: file_path.to_string(),
            _name_column_index: None,
            _first_row_index: None,
            excel_worksheet_name: None,
        }
    }

    /// Guesses the provider from the file extension. Anything that is not a
    /// spreadsheet is read as plain text.
    pub fn from_path(file_path: &str) -> ParticipantSource {
        let lower = file_path.to_lowercase();
        let provider = if lower.ends_with(".csv") {
            "csv"
        } else if lower.ends_with(".xlsx") {
            "xlsx"
        } else {
            "text"
        };
        ParticipantSource::new(provider, file_path)
    }

    pub fn with_name_column(self, column: &str) -> ParticipantSource {
        ParticipantSource {
            _name_column_index: Some(JSValue::String(column.to_string())),
            ..self
        }
    }

    pub fn with_first_row(self, row: usize) -> ParticipantSource {
        ParticipantSource {
            _first_row_index: Some(JSValue::from(row)),
            ..self
        }
    }

    /// The column holding the names, starting at 0. Defaults to the first column.
    pub fn name_column_index(&self) -> RotaResult<usize> {
        if self._name_column_index.is_none() {
            return Ok(0);
        }
        let x = read_js_int(&self._name_column_index)?;
        Ok(x - 1)
    }

    /// The first row holding a name, starting at 0. Defaults to the first row.
    pub fn first_row_index(&self) -> RotaResult<usize> {
        if self._first_row_index.is_none() {
            return Ok(0);
        }
        let x = read_js_int(&self._first_row_index)?;
        Ok(x - 1)
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct RotaRules {
    #[serde(rename = "numGroups")]
    pub num_groups: Option<usize>,
    #[serde(rename = "maxGroups")]
    pub max_groups: Option<usize>,
    #[serde(rename = "rotationPolicy")]
    pub rotation_policy: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct RotaConfig {
    #[serde(rename = "outputSettings", default)]
    pub output_settings: OutputSettings,
    #[serde(rename = "participantSources", default)]
    pub participant_sources: Vec<ParticipantSource>,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub unavailable: Vec<String>,
    #[serde(default)]
    pub rules: RotaRules,
    #[serde(rename = "timeSlots")]
    pub time_slots: Option<Vec<TimeSlot>>,
}

pub fn parse_rotation_policy(name: &str) -> RotaResult<RotationPolicy> {
    RotationPolicy::from_name(name).context(UnknownRotationPolicySnafu { name })
}

pub fn read_config(path: &str) -> RotaResult<RotaConfig> {
    let contents = fs::read_to_string(path).context(OpeningFileSnafu { path })?;
    let config: RotaConfig =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    debug!("read_config: {:?}", config);
    Ok(config)
}

pub fn read_reference(path: &str) -> RotaResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningFileSnafu { path })?;
    serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })
}

// Returns a 1-based index.
fn read_js_int(x: &Option<JSValue>) -> RotaResult<usize> {
    let res = match x {
        Some(JSValue::Number(n)) => n
            .as_u64()
            .map(|x| x as usize)
            .context(ParsingJsonNumberSnafu {})?,
        // Excel-style columns: A, B, ..., Z, AA, AB, ...
        Some(JSValue::String(s)) if !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic()) => {
            s.to_ascii_uppercase()
                .chars()
                .try_fold(0usize, |acc, c| {
                    acc.checked_mul(26)?
                        .checked_add(c as usize - 'A' as usize + 1)
                })
                .context(ParsingJsonNumberSnafu {})?
        }
        Some(JSValue::String(s)) => s
            .trim()
            .parse::<usize>()
            .ok()
            .context(ParsingJsonNumberSnafu {})?,
        _ => return ParsingJsonNumberSnafu {}.fail(),
    };
    ensure!(res >= 1, ParsingJsonNumberSnafu {});
    Ok(res)
}
