// Where the day index of a run comes from. This is the only place that reads the clock.

use chrono::{Days, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::rota::*;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum DaySource {
    /// The current day, in UTC.
    Today,
    /// A calendar day, starting at midnight UTC.
    Date(NaiveDate),
    /// An explicit day index.
    Index(DayIndex),
}

impl DaySource {
    /// Parses a `YYYY-MM-DD` date.
    pub fn parse_date(value: &str) -> RotaResult<DaySource> {
        let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .context(InvalidDateSnafu { value })?;
        Ok(DaySource::Date(date))
    }

    /// Pins `Today` to the current date, so that every later use of the
    /// day (index, summary date, file name) agrees even across midnight.
    pub fn resolved(self) -> DaySource {
        match self {
            DaySource::Today => DaySource::Date(Utc::now().date_naive()),
            other => other,
        }
    }

    pub fn day_index(&self) -> DayIndex {
        match self {
            DaySource::Today => day_index_from_millis(Utc::now().timestamp_millis()),
            DaySource::Date(date) => day_index_from_millis(midnight_millis(*date)),
            DaySource::Index(idx) => *idx,
        }
    }

    /// The calendar day of the run, when it can be represented.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DaySource::Today => Some(Utc::now().date_naive()),
            DaySource::Date(date) => Some(*date),
            DaySource::Index(idx) if *idx >= 0 => {
                epoch_date().checked_add_days(Days::new(*idx as u64))
            }
            DaySource::Index(idx) => epoch_date().checked_sub_days(Days::new(idx.unsigned_abs())),
        }
    }
}

fn epoch_date() -> NaiveDate {
    NaiveDate::default()
}

fn midnight_millis(date: NaiveDate) -> i64 {
    let midnight = date.and_time(NaiveTime::default());
    Utc.from_utc_datetime(&midnight).timestamp_millis()
}
