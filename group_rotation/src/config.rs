// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// Number of milliseconds in one calendar day (UTC, no leap seconds).
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// A day counted from the Unix epoch. It is the only source of variation
/// between two runs with the same participants.
pub type DayIndex = i64;

// ******** Output data structures *********

/// A numbered bucket of participants for one run.
///
/// `id` is 1-based. `members` is never absent: a group that received nobody
/// holds an empty list.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Group {
    pub id: usize,
    pub members: Vec<String>,
}

impl Group {
    pub fn new(id: usize) -> Group {
        Group {
            id,
            members: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Errors that prevent a schedule from being produced or edited.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum SchedulingErrors {
    /// The number of groups must be at least 1.
    InvalidConfiguration { group_count: usize },
    /// A manual move referenced a group id outside of the schedule.
    UnknownGroup(usize),
    /// A manual move referenced a participant that is not in the source group.
    NotAMember { participant: String, group: usize },
}

impl Error for SchedulingErrors {}

impl Display for SchedulingErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchedulingErrors::InvalidConfiguration { group_count } => write!(
                f,
                "invalid configuration: the number of groups must be at least 1 (got {})",
                group_count
            ),
            SchedulingErrors::UnknownGroup(id) => write!(f, "unknown group {}", id),
            SchedulingErrors::NotAMember { participant, group } => {
                write!(f, "{} is not a member of group {}", participant, group)
            }
        }
    }
}

// ********* Configuration **********

/// The rule that turns a day index into a partition.
///
/// - DayShift sorts participants and shifts every one of them to the next
/// group each day. Over `g` consecutive days each participant visits each
/// group exactly once.
///
/// - SeededShuffle reshuffles the participants every day with a small linear
/// congruential generator seeded by the day index, then deals them out in
/// order. Group composition changes more, but there is no full-cycle guarantee.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum RotationPolicy {
    DayShift,
    SeededShuffle,
}

impl RotationPolicy {
    pub const DEFAULT: RotationPolicy = RotationPolicy::DayShift;

    /// The name used in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            RotationPolicy::DayShift => "dayShift",
            RotationPolicy::SeededShuffle => "seededShuffle",
        }
    }

    pub fn from_name(name: &str) -> Option<RotationPolicy> {
        match name {
            "dayShift" | "shift" => Some(RotationPolicy::DayShift),
            "seededShuffle" | "shuffle" => Some(RotationPolicy::SeededShuffle),
            _ => None,
        }
    }
}

impl Default for RotationPolicy {
    fn default() -> Self {
        RotationPolicy::DEFAULT
    }
}
