use periodize_types::{MuscleGroup, SplitTemplate, TrainingDay};

/// Weekly split for a number of training days.
pub fn template_for_days(days_per_week: u8) -> SplitTemplate {
    match days_per_week {
        // 0 is treated as a single full-body day
        0..=3 => SplitTemplate::FullBody,
        4 => SplitTemplate::UpperLower,
        _ => SplitTemplate::PushPullLegs,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Push,
    Pull,
    Legs,
}

const ALL: &[Slot] = &[Slot::Push, Slot::Pull, Slot::Legs];
const UPPER: &[Slot] = &[Slot::Push, Slot::Pull];
const PUSH: &[Slot] = &[Slot::Push];
const PULL: &[Slot] = &[Slot::Pull];
const LEGS: &[Slot] = &[Slot::Legs];

/// Abs and unrecognised groups are trained with the legs.
fn slot(group: &MuscleGroup) -> Slot {
    match group {
        MuscleGroup::Chest | MuscleGroup::Shoulders | MuscleGroup::Triceps => Slot::Push,
        MuscleGroup::Back | MuscleGroup::Biceps => Slot::Pull,
        MuscleGroup::Quads
        | MuscleGroup::Hamstrings
        | MuscleGroup::Glutes
        | MuscleGroup::Calves
        | MuscleGroup::Abs
        | MuscleGroup::Other(_) => Slot::Legs,
    }
}

fn day_letter(round: usize) -> char {
    char::from(b'A' + (round % 26) as u8)
}

/// Names the days of a split and the groups each one trains. Exercise
/// selection is left to the caller.
pub fn training_days(template: SplitTemplate, days_per_week: u8, groups: &[MuscleGroup]) -> Vec<TrainingDay> {
    let count = usize::from(days_per_week.max(1));
    let focus = |slots: &[Slot]| -> Vec<MuscleGroup> {
        groups
            .iter()
            .filter(|g| slots.contains(&slot(g)))
            .cloned()
            .collect()
    };

    (0..count)
        .map(|i| {
            let (name, slots): (&str, &[Slot]) = match template {
                SplitTemplate::FullBody => ("Full Body", ALL),
                SplitTemplate::UpperLower if i % 2 == 0 => ("Upper", UPPER),
                SplitTemplate::UpperLower => ("Lower", LEGS),
                SplitTemplate::PushPullLegs => match i % 3 {
                    0 => ("Push", PUSH),
                    1 => ("Pull", PULL),
                    _ => ("Legs", LEGS),
                },
            };
            let round = match template {
                SplitTemplate::FullBody => i,
                SplitTemplate::UpperLower => i / 2,
                SplitTemplate::PushPullLegs => i / 3,
            };

            TrainingDay {
                day: (i + 1) as u8,
                name: format!("{name} {}", day_letter(round)),
                focus: focus(slots),
            }
        })
        .collect()
}

/// How many days of the split train `group`.
pub fn weekly_frequency(days: &[TrainingDay], group: &MuscleGroup) -> u8 {
    days.iter().filter(|d| d.focus.contains(group)).count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(days: &[TrainingDay]) -> Vec<&str> {
        days.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn template_by_days() {
        assert_eq!(template_for_days(0), SplitTemplate::FullBody);
        assert_eq!(template_for_days(2), SplitTemplate::FullBody);
        assert_eq!(template_for_days(3), SplitTemplate::FullBody);
        assert_eq!(template_for_days(4), SplitTemplate::UpperLower);
        assert_eq!(template_for_days(5), SplitTemplate::PushPullLegs);
        assert_eq!(template_for_days(7), SplitTemplate::PushPullLegs);
    }

    #[test]
    fn upper_lower_days() {
        let groups = MuscleGroup::NAMED.to_vec();
        let days = training_days(SplitTemplate::UpperLower, 4, &groups);
        assert_eq!(names(&days), ["Upper A", "Lower A", "Upper B", "Lower B"]);
        assert!(days[0].focus.contains(&MuscleGroup::Chest));
        assert!(!days[0].focus.contains(&MuscleGroup::Quads));
        assert!(days[1].focus.contains(&MuscleGroup::Abs));
        for group in &groups {
            assert_eq!(weekly_frequency(&days, group), 2, "{group}");
        }
    }

    #[test]
    fn push_pull_legs_days() {
        let groups = MuscleGroup::NAMED.to_vec();
        let days = training_days(SplitTemplate::PushPullLegs, 5, &groups);
        assert_eq!(names(&days), ["Push A", "Pull A", "Legs A", "Push B", "Pull B"]);
        assert_eq!(weekly_frequency(&days, &MuscleGroup::Chest), 2);
        assert_eq!(weekly_frequency(&days, &MuscleGroup::Back), 2);
        assert_eq!(weekly_frequency(&days, &MuscleGroup::Quads), 1);
        assert_eq!(days[1].focus, vec![MuscleGroup::Back, MuscleGroup::Biceps]);
    }

    #[test]
    fn full_body_trains_everything_every_day() {
        let groups = vec![MuscleGroup::Chest, MuscleGroup::Other("neck".into())];
        let days = training_days(SplitTemplate::FullBody, 3, &groups);
        assert_eq!(names(&days), ["Full Body A", "Full Body B", "Full Body C"]);
        assert_eq!(weekly_frequency(&days, &groups[1]), 3);
    }

    #[test]
    fn zero_days_yields_one_day() {
        let days = training_days(SplitTemplate::FullBody, 0, &[MuscleGroup::Back]);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].day, 1);
    }
}
