use log::{debug, info, warn};

use group_rotation::*;
use snafu::{prelude::*, Snafu};

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::rota::clock::DaySource;
use crate::rota::config_reader::*;
use crate::rota::time_slot::{align_time_slots, default_time_slots, slot_for_group, TimeSlot};

pub mod clock;
pub mod config_reader;
pub mod export;
pub mod io_common;
pub mod io_csv;
pub mod io_excel;
pub mod io_text;
pub mod time_slot;

pub const DEFAULT_NUM_GROUPS: usize = 3;
pub const DEFAULT_MAX_GROUPS: usize = 10;
pub const DEFAULT_SCHEDULE_NAME: &str = "Schedule";

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum RotaError {
    #[snafu(display("Error opening file {path}"))]
    OpeningFile {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error writing file {path}"))]
    WritingFile {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON file {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error serializing the summary"))]
    SerializingJson { source: serde_json::Error },
    #[snafu(display("Expected a positive number or a column letter"))]
    ParsingJsonNumber {},
    #[snafu(display("Error opening file {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("The workbook {path} has no worksheet"))]
    EmptyExcel { path: String },
    #[snafu(display("The workbook {path} has no worksheet named {name}"))]
    MissingWorksheet { path: String, name: String },
    #[snafu(display(
        "The workbook {path} has several worksheets: excelWorksheetName must be provided"
    ))]
    AmbiguousWorksheet { path: String },
    #[snafu(display("Line {lineno}: the name column is missing"))]
    ExcelMissingColumn { lineno: usize },
    #[snafu(display("Line {lineno}: cannot read a name from cell {content}"))]
    ExcelWrongCellType { lineno: usize, content: String },
    #[snafu(display("Error opening CSV file {path}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Error parsing CSV line {lineno}"))]
    CsvLineParse { source: csv::Error, lineno: usize },
    #[snafu(display("Line {lineno} is too short: the name column is missing"))]
    CsvLineTooShort { lineno: usize },
    #[snafu(display("Error writing CSV record"))]
    CsvWrite { source: csv::Error },
    #[snafu(display("Error writing the workbook"))]
    XlsxWrite {
        source: rust_xlsxwriter::XlsxError,
    },
    #[snafu(display("Cannot find the directory of the configuration file"))]
    MissingParentDir {},
    #[snafu(display("Unknown participant source provider {provider:?}"))]
    UnknownProvider { provider: String },
    #[snafu(display("Unknown rotation policy {name:?} (expected dayShift or seededShuffle)"))]
    UnknownRotationPolicy { name: String },
    #[snafu(display("Invalid time {value:?}: expected HH:MM (24-hour)"))]
    InvalidTimeSlot { value: String },
    #[snafu(display("Invalid date {value:?}: expected YYYY-MM-DD"))]
    InvalidDate {
        source: chrono::ParseError,
        value: String,
    },
    #[snafu(display("Invalid move {value:?}: expected NAME:FROM:TO"))]
    InvalidMove { value: String },
    #[snafu(display("The number of groups must be between 1 and {max}, but it was {count}"))]
    InvalidGroupCount { count: usize, max: usize },
    #[snafu(display("Please enter at least one participant"))]
    NoParticipants {},
    #[snafu(display("{source}"))]
    Scheduling { source: SchedulingErrors },
    #[snafu(display("Difference detected between the generated schedule and the reference"))]
    ReferenceMismatch {},
}

pub type RotaResult<T> = Result<T, RotaError>;

/// A manual reassignment requested on the command line.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ManualMove {
    pub participant: String,
    pub from_group: usize,
    pub to_group: usize,
}

impl ManualMove {
    /// Parses `NAME:FROM:TO`. The name itself may contain colons.
    pub fn parse(value: &str) -> RotaResult<ManualMove> {
        let mut parts = value.rsplitn(3, ':');
        let to = parts.next().and_then(|s| s.trim().parse::<usize>().ok());
        let from = parts.next().and_then(|s| s.trim().parse::<usize>().ok());
        let name = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());
        match (name, from, to) {
            (Some(participant), Some(from_group), Some(to_group)) => Ok(ManualMove {
                participant: participant.to_string(),
                from_group,
                to_group,
            }),
            _ => InvalidMoveSnafu { value }.fail(),
        }
    }
}

/// All the inputs of a run, once the configuration file and the command line are merged.
#[derive(PartialEq, Debug, Clone)]
pub struct RotaSettings {
    pub schedule_name: String,
    pub sources: Vec<ParticipantSource>,
    pub participants: Vec<String>,
    pub unavailable: Vec<String>,
    pub num_groups: usize,
    pub max_groups: usize,
    pub policy: RotationPolicy,
    pub time_slots: Vec<TimeSlot>,
    pub day: DaySource,
    pub moves: Vec<ManualMove>,
    pub output_directory: Option<String>,
}

impl RotaSettings {
    pub fn new(participants: &[&str], num_groups: usize, day: DaySource) -> RotaSettings {
        RotaSettings {
            schedule_name: DEFAULT_SCHEDULE_NAME.to_string(),
            sources: Vec::new(),
            participants: participants.iter().map(|s| s.to_string()).collect(),
            unavailable: Vec::new(),
            num_groups,
            max_groups: DEFAULT_MAX_GROUPS,
            policy: RotationPolicy::DEFAULT,
            time_slots: default_time_slots(),
            day,
            moves: Vec::new(),
            output_directory: None,
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    #[serde(rename = "scheduleName")]
    pub schedule_name: String,
    pub date: Option<String>,
    #[serde(rename = "dayIndex")]
    pub day_index: DayIndex,
    #[serde(rename = "rotationPolicy")]
    pub rotation_policy: String,
    #[serde(rename = "numGroups")]
    pub num_groups: usize,
}

/// The result of a run.
#[derive(PartialEq, Debug, Clone)]
pub struct RotaOutcome {
    pub groups: Vec<Group>,
    pub time_slots: Vec<TimeSlot>,
    pub day_index: DayIndex,
    pub summary: JSValue,
}

/// Merges the configuration file (if any) with the command line. The command line wins.
pub fn resolve_settings(args: &Args) -> RotaResult<RotaSettings> {
    let (config, root) = match args.config.as_deref() {
        Some(config_path) => {
            let config = read_config(config_path)?;
            let root: PathBuf = Path::new(config_path)
                .parent()
                .context(MissingParentDirSnafu {})?
                .to_path_buf();
            (config, root)
        }
        None => (RotaConfig::default(), PathBuf::new()),
    };

    let mut sources: Vec<ParticipantSource> = config
        .participant_sources
        .iter()
        .map(|src| {
            let mut src = src.clone();
            src.file_path = io_common::resolve_path(&root, &src.file_path);
            src
        })
        .collect();
    if let Some(input) = args.input.as_deref() {
        let mut src = match args.input_type.as_deref() {
            Some(provider) => ParticipantSource::new(provider, input),
            None => ParticipantSource::from_path(input),
        };
        if let Some(col) = args.name_column.as_deref() {
            src = src.with_name_column(col);
        }
        if let Some(row) = args.first_row {
            src = src.with_first_row(row);
        }
        src.excel_worksheet_name = args.excel_worksheet_name.clone();
        sources.push(src);
    }

    let mut participants = config.participants.clone();
    participants.extend(args.participants.clone().unwrap_or_default());
    let mut unavailable = config.unavailable.clone();
    unavailable.extend(args.unavailable.clone().unwrap_or_default());

    let policy = match args.policy.as_deref().or(config.rules.rotation_policy.as_deref()) {
        Some(name) => parse_rotation_policy(name)?,
        None => RotationPolicy::DEFAULT,
    };

    let time_slots: Vec<TimeSlot> = match (&args.slots, &config.time_slots) {
        (Some(slots), _) => slots
            .iter()
            .map(|s| TimeSlot::parse(s))
            .collect::<RotaResult<Vec<TimeSlot>>>()?,
        (None, Some(slots)) => slots.clone(),
        (None, None) => default_time_slots(),
    };

    let day = match (args.day_index, args.date.as_deref()) {
        (Some(idx), Some(date)) => {
            warn!("Both a day index and a date were given, ignoring the date {:?}", date);
            DaySource::Index(idx)
        }
        (Some(idx), None) => DaySource::Index(idx),
        (None, Some(date)) => DaySource::parse_date(date)?,
        (None, None) => DaySource::Today,
    }
    .resolved();

    let moves = args
        .moves
        .clone()
        .unwrap_or_default()
        .iter()
        .map(|m| ManualMove::parse(m))
        .collect::<RotaResult<Vec<ManualMove>>>()?;

    Ok(RotaSettings {
        schedule_name: config
            .output_settings
            .schedule_name
            .clone()
            .unwrap_or_else(|| DEFAULT_SCHEDULE_NAME.to_string()),
        sources,
        participants,
        unavailable,
        num_groups: args
            .groups
            .or(config.rules.num_groups)
            .unwrap_or(DEFAULT_NUM_GROUPS),
        max_groups: args
            .max_groups
            .or(config.rules.max_groups)
            .unwrap_or(DEFAULT_MAX_GROUPS),
        policy,
        time_slots,
        day,
        moves,
        output_directory: config
            .output_settings
            .output_directory
            .as_deref()
            .map(|d| io_common::resolve_path(&root, d)),
    })
}

fn read_roster(src: &ParticipantSource) -> RotaResult<Vec<String>> {
    let path = src.file_path.as_str();
    match src.provider.as_str() {
        "text" => io_text::read_text_roster(path),
        "csv" => io_csv::read_csv_roster(path, src),
        "xlsx" | "excel" => io_excel::read_excel_roster(path, src),
        provider => UnknownProviderSnafu { provider }.fail(),
    }
}

/// Checks the form-level rules that sit in front of the scheduler.
fn validate_settings(settings: &RotaSettings) -> RotaResult<()> {
    ensure!(
        settings.num_groups >= 1 && settings.num_groups <= settings.max_groups,
        InvalidGroupCountSnafu {
            count: settings.num_groups,
            max: settings.max_groups,
        }
    );
    for slot in settings.time_slots.iter() {
        slot.validate()?;
    }
    Ok(())
}

pub fn run_with_settings(settings: &RotaSettings) -> RotaResult<RotaOutcome> {
    validate_settings(settings)?;

    let mut raw: Vec<String> = settings.participants.clone();
    for src in settings.sources.iter() {
        let mut entries = read_roster(src)?;
        debug!(
            "run_with_settings: {} entries from {:?}",
            entries.len(),
            io_common::simplify_file_name(&src.file_path)
        );
        raw.append(&mut entries);
    }

    let roster = normalize_participants(&raw);
    ensure!(!roster.is_empty(), NoParticipantsSnafu {});

    let excluded: HashSet<String> = settings
        .unavailable
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    let known: HashSet<&String> = roster.iter().collect();
    let mut unknown: Vec<&String> = excluded.iter().filter(|x| !known.contains(x)).collect();
    unknown.sort();
    for name in unknown {
        warn!("Unavailable participant {:?} is not in the roster, ignoring", name);
    }

    let available = filter_available(&roster, &excluded);
    let day_index = settings.day.day_index();
    info!(
        "Processing {} participants ({} unavailable), {} groups, day {}, policy {}",
        roster.len(),
        roster.len() - available.len(),
        settings.num_groups,
        day_index,
        settings.policy.name()
    );

    let mut groups = schedule(&available, settings.num_groups, day_index, settings.policy)
        .context(SchedulingSnafu {})?;

    for m in settings.moves.iter() {
        info!(
            "Manual move: {} from group {} to group {}",
            m.participant, m.from_group, m.to_group
        );
        groups = move_participant(&groups, &m.participant, m.from_group, m.to_group)
            .context(SchedulingSnafu {})?;
    }

    let time_slots = align_time_slots(&settings.time_slots, settings.num_groups);
    for g in groups.iter() {
        let label = slot_for_group(&time_slots, g.id)
            .map(|s| s.label())
            .unwrap_or_default();
        info!(
            "Group {} ({}): {} participant(s): {}",
            g.id,
            label,
            g.len(),
            g.members.join(", ")
        );
    }
    info!(
        "Successfully scheduled {} participants into {} groups",
        available.len(),
        settings.num_groups
    );

    let summary = build_summary_js(settings, day_index, &groups, &time_slots);
    Ok(RotaOutcome {
        groups,
        time_slots,
        day_index,
        summary,
    })
}

fn build_summary_js(
    settings: &RotaSettings,
    day_index: DayIndex,
    groups: &[Group],
    time_slots: &[TimeSlot],
) -> JSValue {
    let c = SummaryConfig {
        schedule_name: settings.schedule_name.clone(),
        date: settings
            .day
            .date()
            .map(|d| d.format("%Y-%m-%d").to_string()),
        day_index,
        rotation_policy: settings.policy.name().to_string(),
        num_groups: settings.num_groups,
    };
    let groups_js: Vec<JSValue> = groups
        .iter()
        .map(|g| {
            let slot = slot_for_group(time_slots, g.id);
            json!({
                "id": g.id,
                "start": slot.map(|s| s.start.clone()),
                "end": slot.map(|s| s.end.clone()),
                "employees": g.members,
            })
        })
        .collect();
    json!({
        "config": c,
        "groups": groups_js })
}

/// Compares the summary with a reference summary and prints the differences.
pub fn check_reference(summary: &JSValue, reference_path: &str) -> RotaResult<()> {
    let reference = read_reference(reference_path)?;
    info!("reference: {:?}", reference);
    let pretty_ref = serde_json::to_string_pretty(&reference).context(SerializingJsonSnafu {})?;
    let pretty_summary = serde_json::to_string_pretty(summary).context(SerializingJsonSnafu {})?;
    if pretty_ref != pretty_summary {
        warn!("Found differences with the reference summary");
        print_diff(pretty_ref.as_str(), pretty_summary.as_str(), "\n");
        return ReferenceMismatchSnafu {}.fail();
    }
    Ok(())
}

fn write_summary(summary: &JSValue, path: &str) -> RotaResult<()> {
    let pretty = serde_json::to_string_pretty(summary).context(SerializingJsonSnafu {})?;
    if path == "stdout" {
        println!("{}", pretty);
        return Ok(());
    }
    info!("Writing summary to {:?}", path);
    fs::write(path, pretty).context(WritingFileSnafu { path })
}

// Where the spreadsheet goes: an explicit path, a directory, or the configured output directory.
fn spreadsheet_path(args_out: Option<&str>, settings: &RotaSettings) -> Option<String> {
    let file_name = export::default_file_name(settings.day.date());
    match args_out {
        Some("stdout") => Some("stdout".to_string()),
        Some(p) if Path::new(p).is_dir() => Some(io_common::resolve_path(Path::new(p), &file_name)),
        Some(p) => Some(p.to_string()),
        None => settings
            .output_directory
            .as_deref()
            .map(|d| io_common::resolve_path(Path::new(d), &file_name)),
    }
}

pub fn run_rota(args: &Args) -> RotaResult<()> {
    let settings = resolve_settings(args)?;
    debug!("run_rota: settings: {:?}", settings);
    let outcome = run_with_settings(&settings)?;

    let out_path = spreadsheet_path(args.out.as_deref(), &settings);
    if let Some(p) = out_path.as_deref() {
        export::write_schedule(p, &outcome.groups, &outcome.time_slots)?;
    }

    match args.summary.as_deref() {
        Some(p) => write_summary(&outcome.summary, p)?,
        // Without any output, show the summary.
        None if out_path.is_none() => write_summary(&outcome.summary, "stdout")?,
        None => {}
    }

    if let Some(reference_path) = args.reference.as_deref() {
        check_reference(&outcome.summary, reference_path)?;
    }
    Ok(())
}
