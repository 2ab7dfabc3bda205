use clap::Parser;

/// This program splits a roster into daily rotating groups.
#[derive(Parser, Debug, Clone, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) The JSON configuration of the schedule: participant sources, unavailable
    /// participants, rules and time slots. Paths inside the file are relative to the file itself.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path, optional) A file with the roster. Setting this option adds a source on top of the sources
    /// specified with the --config option.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (text, csv or xlsx) The type of the input. If not specified, it is guessed from the file extension.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// (number or column letter, default 1) For csv and xlsx inputs, the column with the names.
    #[clap(long, value_parser)]
    pub name_column: Option<String>,

    /// (number, default 1) For csv and xlsx inputs, the first row with a name. Use 2 to skip a header.
    #[clap(long, value_parser)]
    pub first_row: Option<usize>,

    /// When using an Excel file with several worksheets, indicates the name of the worksheet to use.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// (name, repeatable) A participant added to the roster.
    #[clap(short, long = "participant", value_parser)]
    pub participants: Option<Vec<String>>,

    /// (name, repeatable) A participant who is not available today.
    #[clap(short = 'x', long, value_parser)]
    pub unavailable: Option<Vec<String>>,

    /// (number, default 3) The number of groups.
    #[clap(short, long, value_parser)]
    pub groups: Option<usize>,

    /// (number, default 10) The largest number of groups accepted.
    #[clap(long, value_parser)]
    pub max_groups: Option<usize>,

    /// (dayShift or seededShuffle, default dayShift) How participants rotate from one day to the next.
    #[clap(long, value_parser)]
    pub policy: Option<String>,

    /// (HH:MM-HH:MM, repeatable) The time slot of the next group. Overrides the time slots of the configuration.
    #[clap(long = "slot", value_parser)]
    pub slots: Option<Vec<String>>,

    /// (YYYY-MM-DD, default today) The day to schedule.
    #[clap(short, long, value_parser)]
    pub date: Option<String>,

    /// (integer) The day to schedule, as a number of days since 1970-01-01. Takes precedence over --date.
    #[clap(long, value_parser, allow_hyphen_values = true)]
    pub day_index: Option<i64>,

    /// (NAME:FROM:TO, repeatable) Moves a participant to another group after the rotation.
    #[clap(long = "move", value_parser)]
    pub moves: Option<Vec<String>>,

    /// (file path, directory or 'stdout') If specified, the schedule will be written as an Excel workbook to the
    /// given location (CSV if the path ends with .csv or is 'stdout'). Setting this option overrides the
    /// directory that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path or 'stdout') If specified, the summary of the schedule will be written in JSON format to the
    /// given location. Without any output, the summary is printed.
    #[clap(short, long, value_parser)]
    pub summary: Option<String>,

    /// (file path) A reference summary in JSON format. If provided, rota will check that the generated schedule
    /// matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
