use group_rotation::*;
use std::collections::HashSet;

fn names(xs: &[&str]) -> Vec<String> {
    xs.iter().map(|s| s.to_string()).collect()
}

fn roster(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("p{:03}", i)).collect()
}

fn group_of(groups: &[Group], name: &str) -> usize {
    groups
        .iter()
        .find(|g| g.members.iter().any(|m| m == name))
        .map(|g| g.id)
        .unwrap()
}

const POLICIES: [RotationPolicy; 2] = [RotationPolicy::DayShift, RotationPolicy::SeededShuffle];

#[test]
fn two_groups_day_10() {
    let _ = env_logger::try_init();
    let available = names(&["Ann", "Bob", "Cleo", "Dan", "Eve"]);
    let groups = assign(&available, 2, 10).unwrap();
    assert_eq!(
        groups,
        vec![
            Group {
                id: 1,
                members: names(&["Ann", "Cleo", "Eve"])
            },
            Group {
                id: 2,
                members: names(&["Bob", "Dan"])
            },
        ]
    );
}

#[test]
fn two_groups_day_11_flips() {
    let available = names(&["Ann", "Bob", "Cleo", "Dan", "Eve"]);
    let groups = assign(&available, 2, 11).unwrap();
    assert_eq!(groups[0].members, names(&["Bob", "Dan"]));
    assert_eq!(groups[1].members, names(&["Ann", "Cleo", "Eve"]));
}

#[test]
fn nobody_available_gives_empty_groups() {
    for policy in POLICIES {
        let groups = schedule(&[], 3, 20745, policy).unwrap();
        assert_eq!(groups.iter().map(|g| g.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(groups.iter().all(|g| g.members.is_empty()));
    }
}

#[test]
fn zero_groups_is_invalid() {
    for policy in POLICIES {
        assert_eq!(
            schedule(&names(&["Ann"]), 0, 1, policy),
            Err(SchedulingErrors::InvalidConfiguration { group_count: 0 })
        );
    }
}

#[test]
fn shape_and_completeness() {
    for policy in POLICIES {
        for n in [0, 1, 2, 7, 10, 23] {
            let available = roster(n);
            for g in 1..=10 {
                for day in [-5, 0, 1, 19999, 20745] {
                    let groups = schedule(&available, g, day, policy).unwrap();
                    assert_eq!(groups.len(), g);
                    for (i, grp) in groups.iter().enumerate() {
                        assert_eq!(grp.id, i + 1);
                    }
                    let mut all: Vec<String> =
                        groups.iter().flat_map(|grp| grp.members.clone()).collect();
                    all.sort();
                    assert_eq!(all, available);
                }
            }
        }
    }
}

#[test]
fn balance() {
    for policy in POLICIES {
        for n in 0..30 {
            let available = roster(n);
            for g in 1..=10 {
                let groups = schedule(&available, g, 20745, policy).unwrap();
                let sizes: Vec<usize> = groups.iter().map(|grp| grp.len()).collect();
                let max = sizes.iter().max().unwrap();
                let min = sizes.iter().min().unwrap();
                assert!(max - min <= 1, "n={} g={} sizes={:?}", n, g, sizes);
            }
        }
    }
}

#[test]
fn determinism() {
    let available = roster(17);
    for policy in POLICIES {
        let a = schedule(&available, 4, 20100, policy).unwrap();
        let b = schedule(&available, 4, 20100, policy).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn full_cycle_after_group_count_days() {
    let available = roster(11);
    for g in 1..=6 {
        for day in [0, 3, 20745] {
            assert_eq!(
                assign(&available, g, day).unwrap(),
                assign(&available, g, day + g as i64).unwrap()
            );
        }
    }
}

#[test]
fn next_day_shifts_everybody_by_one_group() {
    let available = roster(9);
    let g = 4;
    let today = assign(&available, g, 20745).unwrap();
    let tomorrow = assign(&available, g, 20746).unwrap();
    for p in available.iter() {
        let old = group_of(&today, p);
        let new = group_of(&tomorrow, p);
        assert_eq!(new, (old % g) + 1);
    }
}

#[test]
fn every_group_visited_over_a_cycle() {
    let available = roster(5);
    let g = 3;
    for p in available.iter() {
        let visited: HashSet<usize> = (100..100 + g as i64)
            .map(|day| group_of(&assign(&available, g, day).unwrap(), p))
            .collect();
        assert_eq!(visited.len(), g);
    }
}

#[test]
fn negative_days_follow_the_same_cycle() {
    let available = roster(7);
    assert_eq!(assign(&available, 3, -1).unwrap(), assign(&available, 3, 2).unwrap());
}

#[test]
fn excluded_never_scheduled() {
    let raw = ["Ann", "Bob", " Cleo", "Dan", "Eve", "Bob", ""];
    let excluded: HashSet<String> = ["Bob", "Eve", "Nobody"].iter().map(|s| s.to_string()).collect();
    let available = filter_available(&raw, &excluded);
    assert_eq!(available, names(&["Ann", "Cleo", "Dan"]));
    for policy in POLICIES {
        let groups = schedule(&available, 2, 7, policy).unwrap();
        for grp in groups.iter() {
            assert!(grp.members.iter().all(|m| !excluded.contains(m)));
        }
    }
}

#[test]
fn everybody_excluded() {
    let excluded: HashSet<String> = ["Ann", "Bob"].iter().map(|s| s.to_string()).collect();
    assert!(filter_available(&["Ann", "Bob", "Ann"], &excluded).is_empty());
}

#[test]
fn input_order_does_not_matter() {
    let excluded = HashSet::new();
    let a = filter_available(&["Eve", "Ann", "Dan"], &excluded);
    let b = filter_available(&["Dan", "Eve", "Ann"], &excluded);
    assert_eq!(a, b);
}

#[test]
fn shuffle_policy_known_output() {
    let available = names(&["Ann", "Bob", "Cleo", "Dan", "Eve"]);
    let groups = schedule(&available, 2, 10, RotationPolicy::SeededShuffle).unwrap();
    assert_eq!(groups[0].members, names(&["Eve", "Bob", "Dan"]));
    assert_eq!(groups[1].members, names(&["Cleo", "Ann"]));

    let groups = schedule(&available, 3, 20745, RotationPolicy::SeededShuffle).unwrap();
    assert_eq!(groups[0].members, names(&["Eve", "Cleo"]));
    assert_eq!(groups[1].members, names(&["Ann", "Bob"]));
    assert_eq!(groups[2].members, names(&["Dan"]));
}

#[test]
fn day_index_from_timestamps() {
    assert_eq!(day_index_from_millis(0), 0);
    assert_eq!(day_index_from_millis(MILLIS_PER_DAY - 1), 0);
    assert_eq!(day_index_from_millis(MILLIS_PER_DAY), 1);
    assert_eq!(day_index_from_millis(-1), -1);
    // 2026-10-19T08:30:00Z
    assert_eq!(day_index_from_millis(1_792_398_600_000), 20745);
}

#[test]
fn move_between_groups() {
    let available = names(&["Ann", "Bob", "Cleo", "Dan", "Eve"]);
    let groups = assign(&available, 2, 10).unwrap();
    let moved = move_participant(&groups, "Cleo", 1, 2).unwrap();
    assert_eq!(moved[0].members, names(&["Ann", "Eve"]));
    assert_eq!(moved[1].members, names(&["Bob", "Dan", "Cleo"]));
    // The input groups are untouched.
    assert_eq!(groups[0].members, names(&["Ann", "Cleo", "Eve"]));
}

#[test]
fn move_errors() {
    let groups = assign(&names(&["Ann", "Bob"]), 2, 0).unwrap();
    assert_eq!(
        move_participant(&groups, "Ann", 1, 3),
        Err(SchedulingErrors::UnknownGroup(3))
    );
    assert_eq!(
        move_participant(&groups, "Ann", 0, 1),
        Err(SchedulingErrors::UnknownGroup(0))
    );
    assert_eq!(
        move_participant(&groups, "Bob", 1, 2),
        Err(SchedulingErrors::NotAMember {
            participant: "Bob".to_string(),
            group: 1
        })
    );
    assert_eq!(move_participant(&groups, "Ann", 1, 1).unwrap(), groups);
}
