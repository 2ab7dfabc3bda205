// Time slots attached to groups, in 24-hour HH:MM notation.

use crate::rota::*;

use serde::{Deserialize, Serialize};

/// The time window of one group. Group `id` uses slot `id - 1`.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: String,
    pub end: String,
}

impl TimeSlot {
    pub fn new(start: &str, end: &str) -> TimeSlot {
        TimeSlot {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// The filler used when there are more groups than slots.
    pub fn placeholder() -> TimeSlot {
        TimeSlot::new("00:00", "00:00")
    }

    /// Parses the command line notation `12:00-12:30`.
    pub fn parse(value: &str) -> RotaResult<TimeSlot> {
        let (start, end) = value
            .split_once('-')
            .context(InvalidTimeSlotSnafu { value })?;
        let slot = TimeSlot::new(start.trim(), end.trim());
        slot.validate()?;
        Ok(slot)
    }

    pub fn validate(&self) -> RotaResult<()> {
        for t in [&self.start, &self.end] {
            ensure!(is_valid_time(t), InvalidTimeSlotSnafu { value: t.as_str() });
        }
        Ok(())
    }

    /// The header used in exports, for example `12:00PM - 12:30PM`.
    pub fn label(&self) -> String {
        format!("{} - {}", format_12h(&self.start), format_12h(&self.end))
    }
}

fn two_digits(s: &str) -> Option<u32> {
    if s.len() == 2 && s.chars().all(|c| c.is_ascii_digit()) {
        s.parse::<u32>().ok()
    } else {
        None
    }
}

fn split_time(t: &str) -> Option<(u32, u32)> {
    let (h, m) = t.split_once(':')?;
    Some((two_digits(h)?, two_digits(m)?))
}

/// `HH:MM` with hours in 00..23 and minutes in 00..59.
pub fn is_valid_time(t: &str) -> bool {
    matches!(split_time(t), Some((h, m)) if h < 24 && m < 60)
}

/// Formats `HH:MM` as `h:MMAM`/`h:MMPM`. Anything that does not look like
/// `HH:MM` gives an empty string.
pub fn format_12h(t: &str) -> String {
    match split_time(t) {
        Some((hour, minute)) => {
            let ampm = if hour >= 12 { "PM" } else { "AM" };
            let hour12 = match hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{}:{:02}{}", hour12, minute, ampm)
        }
        None => "".to_string(),
    }
}

pub fn default_time_slots() -> Vec<TimeSlot> {
    vec![
        TimeSlot::new("12:00", "12:30"),
        TimeSlot::new("12:30", "13:00"),
        TimeSlot::new("13:00", "13:30"),
    ]
}

/// Returns exactly `num_groups` slots: extra ones are dropped, missing ones
/// are filled with the placeholder.
pub fn align_time_slots(slots: &[TimeSlot], num_groups: usize) -> Vec<TimeSlot> {
    let mut res: Vec<TimeSlot> = slots.iter().take(num_groups).cloned().collect();
    while res.len() < num_groups {
        res.push(TimeSlot::placeholder());
    }
    res
}

/// The slot of a group, if there is one.
pub fn slot_for_group(slots: &[TimeSlot], group_id: usize) -> Option<&TimeSlot> {
    group_id.checked_sub(1).and_then(|idx| slots.get(idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation() {
        assert!(is_valid_time("00:00"));
        assert!(is_valid_time("23:59"));
        assert!(!is_valid_time("24:00"));
        assert!(!is_valid_time("12:60"));
        assert!(!is_valid_time("9:30"));
        assert!(!is_valid_time("09:3"));
        assert!(!is_valid_time("ab:cd"));
        assert!(!is_valid_time(""));
    }

    #[test]
    fn twelve_hour_format() {
        assert_eq!(format_12h("12:00"), "12:00PM");
        assert_eq!(format_12h("12:30"), "12:30PM");
        assert_eq!(format_12h("13:05"), "1:05PM");
        assert_eq!(format_12h("00:05"), "12:05AM");
        assert_eq!(format_12h("09:45"), "9:45AM");
        assert_eq!(format_12h("N/A"), "");
        assert_eq!(TimeSlot::new("12:00", "12:30").label(), "12:00PM - 12:30PM");
    }

    #[test]
    fn parse_cli_notation() {
        assert_eq!(
            TimeSlot::parse("12:00-12:30").unwrap(),
            TimeSlot::new("12:00", "12:30")
        );
        assert_eq!(
            TimeSlot::parse(" 08:15 - 09:00 ").unwrap(),
            TimeSlot::new("08:15", "09:00")
        );
        assert!(matches!(
            TimeSlot::parse("12:00"),
            Err(RotaError::InvalidTimeSlot { .. })
        ));
        assert!(matches!(
            TimeSlot::parse("12:00-25:00"),
            Err(RotaError::InvalidTimeSlot { .. })
        ));
    }

    #[test]
    fn alignment() {
        let slots = default_time_slots();
        assert_eq!(align_time_slots(&slots, 2), slots[..2].to_vec());
        let five = align_time_slots(&slots, 5);
        assert_eq!(five.len(), 5);
        assert_eq!(five[2], TimeSlot::new("13:00", "13:30"));
        assert_eq!(five[3], TimeSlot::placeholder());
        assert_eq!(five[4], TimeSlot::placeholder());
    }

    #[test]
    fn slot_lookup() {
        let slots = default_time_slots();
        assert_eq!(slot_for_group(&slots, 1), Some(&slots[0]));
        assert_eq!(slot_for_group(&slots, 0), None);
        assert_eq!(slot_for_group(&slots, 4), None);
    }
}
