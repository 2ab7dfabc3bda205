/*!
Deterministic daily rotation of participants across a fixed number of groups.

The whole library is a handful of pure functions:

* [`filter_available`] normalizes a raw list of names (trim, drop blanks,
  deduplicate, sort) and removes the unavailable ones.
* [`assign`] deals the available participants into `group_count` groups,
  shifting everybody by one group per day.
* [`schedule`] does the same for any [`RotationPolicy`].

```
use group_rotation::*;
use std::collections::HashSet;

let names = ["Eve", "Ann", " Bob ", "Dan", "Cleo", "", "Ann"];
let excluded: HashSet<String> = HashSet::new();
let available = filter_available(&names, &excluded);
let groups = assign(&available, 2, 10)?;

assert_eq!(groups[0].members, vec!["Ann", "Cleo", "Eve"]);
assert_eq!(groups[1].members, vec!["Bob", "Dan"]);
# Ok::<(), SchedulingErrors>(())
```

Nothing here reads the clock: the day index is an input. Use
[`day_index_from_millis`] to derive it from a timestamp.
*/

mod config;
use log::debug;

use std::collections::{BTreeSet, HashSet};

pub use crate::config::*;

pub mod builder;
pub mod manual;

/// Trims every entry, drops blank ones and collapses duplicates.
///
/// The result is in canonical order (sorted), so that the same set of names
/// always produces the same rotation, whatever order it was typed in.
pub fn normalize_participants<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let unique: BTreeSet<String> = raw
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect();
    unique.into_iter().collect()
}

/// Normalizes the participants and removes the excluded ones.
///
/// Exclusion is an exact match against the normalized names. Excluding
/// everybody is not an error: the result is simply empty.
pub fn filter_available<S: AsRef<str>>(participants: &[S], excluded: &HashSet<String>) -> Vec<String> {
    let normalized = normalize_participants(participants);
    let total = normalized.len();
    let available: Vec<String> = normalized
        .into_iter()
        .filter(|p| !excluded.contains(p))
        .collect();
    debug!(
        "filter_available: {} participants, {} available after exclusion",
        total,
        available.len()
    );
    available
}

/// Converts a timestamp in milliseconds since the Unix epoch (UTC) to a day index.
///
/// Uses floor division, so instants before the epoch map to negative days.
pub fn day_index_from_millis(epoch_millis: i64) -> DayIndex {
    epoch_millis.div_euclid(MILLIS_PER_DAY)
}

/// Deals the available participants into groups with the day-shift rotation.
///
/// Participant `i` (in the order given) goes to group `((i + day_index) mod group_count) + 1`.
/// The input is expected to come from [`filter_available`]: it is not deduplicated again.
///
/// Always returns exactly `group_count` groups, numbered from 1, even when
/// nobody is available.
pub fn assign(
    available: &[String],
    group_count: usize,
    day_index: DayIndex,
) -> Result<Vec<Group>, SchedulingErrors> {
    let mut groups = empty_groups(group_count)?;
    // Euclidean remainder keeps negative day indexes in range.
    let offset = day_index.rem_euclid(group_count as i64) as usize;
    for (idx, participant) in available.iter().enumerate() {
        let slot = (idx + offset) % group_count;
        groups[slot].members.push(participant.clone());
    }
    debug!(
        "assign: day {} offset {} sizes {:?}",
        day_index,
        offset,
        group_sizes(&groups)
    );
    Ok(groups)
}

/// Builds the groups for the given policy.
pub fn schedule(
    available: &[String],
    group_count: usize,
    day_index: DayIndex,
    policy: RotationPolicy,
) -> Result<Vec<Group>, SchedulingErrors> {
    match policy {
        RotationPolicy::DayShift => assign(available, group_count, day_index),
        RotationPolicy::SeededShuffle => assign_shuffled(available, group_count, day_index),
    }
}

fn assign_shuffled(
    available: &[String],
    group_count: usize,
    day_index: DayIndex,
) -> Result<Vec<Group>, SchedulingErrors> {
    let mut groups = empty_groups(group_count)?;
    let shuffled = seeded_shuffle(available, day_index);
    debug!("assign_shuffled: day {} order {:?}", day_index, shuffled);
    for (idx, participant) in shuffled.into_iter().enumerate() {
        groups[idx % group_count].members.push(participant);
    }
    Ok(groups)
}

fn empty_groups(group_count: usize) -> Result<Vec<Group>, SchedulingErrors> {
    if group_count == 0 {
        return Err(SchedulingErrors::InvalidConfiguration { group_count });
    }
    Ok((1..=group_count).map(Group::new).collect())
}

fn group_sizes(groups: &[Group]) -> Vec<usize> {
    groups.iter().map(|g| g.len()).collect()
}

// Linear congruential generator. The constants are part of the
// observable output of the shuffle policy and must not change.
struct Lcg {
    state: i64,
}

impl Lcg {
    const MULTIPLIER: i64 = 9301;
    const INCREMENT: i64 = 49297;
    const MODULUS: i64 = 233280;

    fn new(seed: i64) -> Lcg {
        Lcg {
            state: seed.rem_euclid(Lcg::MODULUS),
        }
    }

    /// Next value in [0, 1).
    fn next_unit(&mut self) -> f64 {
        self.state = (self.state * Lcg::MULTIPLIER + Lcg::INCREMENT) % Lcg::MODULUS;
        self.state as f64 / Lcg::MODULUS as f64
    }
}

/// Fisher-Yates shuffle driven by the generator, walking from the back.
fn seeded_shuffle(available: &[String], seed: i64) -> Vec<String> {
    let mut rng = Lcg::new(seed);
    let mut res = available.to_vec();
    let mut current = res.len();
    while current != 0 {
        let picked = (rng.next_unit() * current as f64).floor() as usize;
        current -= 1;
        res.swap(current, picked);
    }
    res
}

/// Moves one participant to another group, on a copy of the schedule.
///
/// This is a manual override: the result no longer follows the rotation and
/// group sizes may become unbalanced. The participant is appended at the end
/// of the target group.
pub fn move_participant(
    groups: &[Group],
    participant: &str,
    from_group: usize,
    to_group: usize,
) -> Result<Vec<Group>, SchedulingErrors> {
    let from_pos = groups
        .iter()
        .position(|g| g.id == from_group)
        .ok_or(SchedulingErrors::UnknownGroup(from_group))?;
    let to_pos = groups
        .iter()
        .position(|g| g.id == to_group)
        .ok_or(SchedulingErrors::UnknownGroup(to_group))?;
    if !groups[from_pos].members.iter().any(|m| m == participant) {
        return Err(SchedulingErrors::NotAMember {
            participant: participant.to_string(),
            group: from_group,
        });
    }

    let mut res = groups.to_vec();
    if from_pos == to_pos {
        return Ok(res);
    }
    res[from_pos].members.retain(|m| m != participant);
    res[to_pos].members.push(participant.to_string());
    debug!(
        "move_participant: {} moved from group {} to group {}",
        participant, from_group, to_group
    );
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn generator_first_values() {
        let mut rng = Lcg::new(0);
        assert_eq!(rng.state, 0);
        let first = rng.next_unit();
        assert_eq!(rng.state, 49297);
        assert!((first - 49297.0 / 233280.0).abs() < 1e-12);
        rng.next_unit();
        assert_eq!(rng.state, (49297 * 9301 + 49297) % 233280);
    }

    #[test]
    fn generator_negative_seed_stays_in_range() {
        let mut rng = Lcg::new(-3);
        for _ in 0..100 {
            let x = rng.next_unit();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn shuffle_known_orders() {
        let a = names(&["Ann", "Bob", "Cleo", "Dan", "Eve"]);
        assert_eq!(seeded_shuffle(&a, 0), names(&["Ann", "Dan", "Eve", "Cleo", "Bob"]));
        assert_eq!(seeded_shuffle(&a, 10), names(&["Eve", "Cleo", "Bob", "Ann", "Dan"]));
        assert_eq!(
            seeded_shuffle(&a, 20000),
            names(&["Bob", "Cleo", "Ann", "Eve", "Dan"])
        );
    }

    #[test]
    fn shuffle_of_empty_and_single() {
        assert!(seeded_shuffle(&[], 42).is_empty());
        assert_eq!(seeded_shuffle(&names(&["Solo"]), 42), names(&["Solo"]));
    }

    #[test]
    fn normalize_trims_dedups_and_sorts() {
        let raw = ["  Dan", "Ann", "", "   ", "Dan ", "Bob", "Ann"];
        assert_eq!(normalize_participants(&raw), names(&["Ann", "Bob", "Dan"]));
    }

    #[test]
    fn empty_groups_rejects_zero() {
        assert_eq!(
            empty_groups(0),
            Err(SchedulingErrors::InvalidConfiguration { group_count: 0 })
        );
        let gs = empty_groups(3).unwrap();
        assert_eq!(gs.iter().map(|g| g.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
