use std::collections::HashSet;

pub use crate::config::*;

/// A builder for assembling a roster and producing the groups of one day.
///
/// The builder only collects inputs: all the work happens in the same pure
/// functions as the rest of the library.
///
/// ```
/// pub use group_rotation::builder::Builder;
/// pub use group_rotation::RotationPolicy;
/// # use group_rotation::SchedulingErrors;
///
/// let mut builder = Builder::new(2)?.policy(RotationPolicy::DayShift);
///
/// builder.add_participants(&["Anna", "Bob", "Clara", "Dora"]);
/// builder.exclude("Bob");
///
/// let groups = builder.schedule(0)?;
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].members, vec!["Anna", "Dora"]);
/// assert_eq!(groups[1].members, vec!["Clara"]);
///
/// # Ok::<(), SchedulingErrors>(())
/// ```
pub struct Builder {
    pub(crate) _group_count: usize,
    pub(crate) _policy: RotationPolicy,
    pub(crate) _participants: Vec<String>,
    pub(crate) _excluded: HashSet<String>,
}

impl Builder {
    pub fn new(group_count: usize) -> Result<Builder, SchedulingErrors> {
        if group_count == 0 {
            return Err(SchedulingErrors::InvalidConfiguration { group_count });
        }
        Ok(Builder {
            _group_count: group_count,
            _policy: RotationPolicy::DEFAULT,
            _participants: Vec::new(),
            _excluded: HashSet::new(),
        })
    }

    pub fn policy(self, policy: RotationPolicy) -> Builder {
        Builder {
            _policy: policy,
            ..self
        }
    }

    /// Adds raw entries to the roster.
    ///
    /// Entries do not need to be trimmed or unique: they are normalized
    /// when the groups are built.
    pub fn add_participants<S: AsRef<str>>(&mut self, raw: &[S]) {
        self._participants
            .extend(raw.iter().map(|s| s.as_ref().to_string()));
    }

    /// Adds a free-text block with one participant per line.
    pub fn add_lines(&mut self, text: &str) {
        self._participants.extend(text.lines().map(|l| l.to_string()));
    }

    /// Marks a participant as unavailable for this run.
    pub fn exclude(&mut self, name: &str) {
        self._excluded.insert(name.to_string());
    }

    /// The normalized roster minus the excluded participants, in canonical order.
    pub fn available(&self) -> Vec<String> {
        crate::filter_available(&self._participants, &self._excluded)
    }

    pub fn schedule(&self, day_index: DayIndex) -> Result<Vec<Group>, SchedulingErrors> {
        crate::schedule(&self.available(), self._group_count, day_index, self._policy)
    }
}
