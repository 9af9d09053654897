use periodize_types::{MuscleGroup, TrainingAge, VolumeLandmarks};

use crate::{config::LandmarkTable, helpers::math::round_sets, profile_metrics::ProfileMetrics};

/// Derives MV/MEV/MAV/MRV for one user from their profile metrics.
pub struct LandmarkCalculator<'a> {
    table: &'a LandmarkTable,
    metrics: ProfileMetrics,
}

impl<'a> LandmarkCalculator<'a> {
    pub const DEFAULT_FREQUENCY: u8 = 2;

    pub fn new(table: &'a LandmarkTable, metrics: ProfileMetrics) -> Self {
        Self { table, metrics }
    }

    /// Landmarks for `group` trained `frequency` times per week.
    ///
    /// 1. mev = base_mev * (1 + size_factor) * training_age_factor^0.3
    /// 2. mrv = mev * (2.5 + recovery_capacity) * frequency_factor
    /// 3. mav = mev + (mrv - mev) * 0.7
    /// 4. mv  = mev * 0.6
    pub fn calculate(&self, group: &MuscleGroup, frequency: u8) -> VolumeLandmarks {
        let mev = self.table.base_mev(group)
            * (1.0 + self.table.size_factor(group))
            * self.metrics.training_age_factor.powf(0.3);
        let mrv = mev * (2.5 + self.metrics.recovery_capacity) * frequency_factor(frequency);
        let mav = mev + (mrv - mev) * 0.7;
        let mv = mev * 0.6;

        let landmarks = VolumeLandmarks {
            mv: round_sets(mv),
            mev: round_sets(mev),
            mav: round_sets(mav),
            mrv: round_sets(mrv),
        };
        trace!("{group} x{frequency}/week: {landmarks:?}");
        landmarks
    }

    pub fn calculate_default(&self, group: &MuscleGroup) -> VolumeLandmarks {
        self.calculate(group, Self::DEFAULT_FREQUENCY)
    }
}

/// MRV multiplier for how often a muscle is trained per week.
pub fn frequency_factor(frequency: u8) -> f64 {
    match frequency {
        0 | 1 => 0.8,
        2 => 1.0,
        3 => 1.2,
        // 4+ sessions per week
        _ => 1.3,
    }
}

/// Typical per-muscle weekly landmarks for an experience category,
/// independent of any individual profile.
pub fn baseline_landmarks(training_age: TrainingAge) -> VolumeLandmarks {
    match training_age {
        TrainingAge::Novice => VolumeLandmarks {
            mv: 4,
            mev: 6,
            mav: 12,
            mrv: 16,
        },
        TrainingAge::Beginner => VolumeLandmarks {
            mv: 5,
            mev: 8,
            mav: 14,
            mrv: 18,
        },
        TrainingAge::Intermediate => VolumeLandmarks {
            mv: 6,
            mev: 10,
            mav: 16,
            mrv: 22,
        },
        TrainingAge::Advanced => VolumeLandmarks {
            mv: 8,
            mev: 12,
            mav: 20,
            mrv: 26,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use strum::IntoEnumIterator;

    fn metrics(training_age_factor: f64, recovery_capacity: f64) -> ProfileMetrics {
        ProfileMetrics {
            training_age_factor,
            recovery_capacity,
        }
    }

    #[test]
    fn chest_at_default_frequency() {
        let table = LandmarkTable::default();
        let calc = LandmarkCalculator::new(&table, metrics(1.0, 1.0));
        // mev = 10 * 1.3 = 13, mrv = 13 * 3.5 = 45.5, mav = 13 + 32.5 * 0.7 = 35.75, mv = 7.8
        let lm = calc.calculate_default(&MuscleGroup::Chest);
        assert_eq!(
            lm,
            VolumeLandmarks {
                mv: 8,
                mev: 13,
                mav: 36,
                mrv: 46,
            }
        );
    }

    #[test]
    fn unknown_group_uses_defaults() {
        let table = LandmarkTable::default();
        let calc = LandmarkCalculator::new(&table, metrics(1.0, 0.5));
        // mev = 8 * 1.2 = 9.6, mrv = 9.6 * 3.0 = 28.8, mav = 9.6 + 19.2 * 0.7 = 23.04
        let lm = calc.calculate(&MuscleGroup::Other("forearms".into()), 2);
        assert_eq!(lm.mev, 10);
        assert_eq!(lm.mrv, 29);
        assert_eq!(lm.mav, 23);
        assert_eq!(lm.mv, 6);
    }

    #[test]
    fn frequency_table() {
        assert_eq!(frequency_factor(0), 0.8);
        assert_eq!(frequency_factor(1), 0.8);
        assert_eq!(frequency_factor(2), 1.0);
        assert_eq!(frequency_factor(3), 1.2);
        assert_eq!(frequency_factor(4), 1.3);
        assert_eq!(frequency_factor(7), 1.3);
    }

    #[test]
    fn higher_frequency_raises_mrv_only() {
        let table = LandmarkTable::default();
        let calc = LandmarkCalculator::new(&table, metrics(1.2, 1.0));
        let once = calc.calculate(&MuscleGroup::Quads, 1);
        let four = calc.calculate(&MuscleGroup::Quads, 4);
        assert_eq!(once.mev, four.mev);
        assert_eq!(once.mv, four.mv);
        assert!(four.mrv > once.mrv);
    }

    #[test]
    fn landmarks_are_ordered_for_every_group_and_frequency() {
        let table = LandmarkTable::default();
        let mut rng = rand::rng();
        let mut groups = MuscleGroup::NAMED.to_vec();
        groups.push(MuscleGroup::Other("neck".into()));

        for _ in 0..200 {
            let m = metrics(rng.random_range(1.0..=3.0), rng.random_range(0.0..=1.66));
            let calc = LandmarkCalculator::new(&table, m);
            for group in &groups {
                for frequency in 0..=7 {
                    let lm = calc.calculate(group, frequency);
                    assert!(lm.is_ordered(), "{group} x{frequency}: {lm:?}");
                }
            }
        }
    }

    #[test]
    fn calculation_is_idempotent() {
        let table = LandmarkTable::default();
        let calc = LandmarkCalculator::new(&table, metrics(1.7, 0.9));
        let first = calc.calculate(&MuscleGroup::Back, 3);
        let second = calc.calculate(&MuscleGroup::Back, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn baseline_table_is_ordered_and_grows_with_experience() {
        let mut previous: Option<VolumeLandmarks> = None;
        for age in TrainingAge::iter() {
            let lm = baseline_landmarks(age);
            assert!(lm.is_ordered());
            if let Some(prev) = previous {
                assert!(lm.mev >= prev.mev && lm.mrv >= prev.mrv);
            }
            previous = Some(lm);
        }
    }
}
