use crate::profile_metrics::ProfileMetrics;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyVolume {
    pub target_volume: f64,
    pub deload_volume: f64,
    pub deload_triggered: bool,
}

/// Ramps weekly volume from a starting point toward a ceiling.
#[derive(Debug, Clone, Copy)]
pub struct VolumePlanner {
    rate: f64,
}

impl VolumePlanner {
    const NOVICE_RATE: f64 = 0.10;
    const EXPERIENCED_RATE: f64 = 0.05;
    /// Share of the ceiling at which a deload is flagged.
    const DELOAD_THRESHOLD: f64 = 0.95;
    const DELOAD_FRACTION: f64 = 0.6;

    pub fn new(metrics: &ProfileMetrics) -> Self {
        let rate = if metrics.is_experienced() {
            Self::EXPERIENCED_RATE
        } else {
            Self::NOVICE_RATE
        };
        Self { rate }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Target volume for `week_number` (1-based; 0 is treated as week 1),
    /// pinned at `max_volume`.
    pub fn weekly_volume(&self, starting_volume: f64, week_number: u32, max_volume: f64) -> WeeklyVolume {
        let weeks_in = f64::from(week_number.max(1) - 1);
        let target_volume = (starting_volume * (1.0 + weeks_in * self.rate)).min(max_volume);
        let deload_triggered = target_volume >= Self::DELOAD_THRESHOLD * max_volume;

        if deload_triggered {
            debug!(
                "week {week_number}: {target_volume:.1} sets reached {:.0}% of ceiling {max_volume}",
                Self::DELOAD_THRESHOLD * 100.0
            );
        }

        WeeklyVolume {
            target_volume,
            deload_volume: Self::DELOAD_FRACTION * starting_volume,
            deload_triggered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planner(training_age_factor: f64) -> VolumePlanner {
        VolumePlanner::new(&ProfileMetrics {
            training_age_factor,
            recovery_capacity: 1.0,
        })
    }

    #[test]
    fn rate_depends_on_experience() {
        assert_eq!(planner(1.0).rate(), 0.10);
        assert_eq!(planner(1.49).rate(), 0.10);
        assert_eq!(planner(1.5).rate(), 0.05);
        assert_eq!(planner(3.0).rate(), 0.05);
    }

    #[test]
    fn first_week_is_starting_volume() {
        let v = planner(1.0).weekly_volume(10.0, 1, 20.0);
        assert_eq!(v.target_volume, 10.0);
        assert!(!v.deload_triggered);
        assert_eq!(v.deload_volume, 6.0);
    }

    #[test]
    fn week_zero_treated_as_first() {
        let p = planner(1.0);
        assert_eq!(p.weekly_volume(10.0, 0, 20.0), p.weekly_volume(10.0, 1, 20.0));
    }

    #[test]
    fn grows_monotonically_then_pins_at_ceiling() {
        let p = planner(1.0);
        let mut last = 0.0;
        let mut pinned = false;
        for week in 1..=20 {
            let v = p.weekly_volume(10.0, week, 20.0);
            assert!(v.target_volume >= last);
            assert!(v.target_volume <= 20.0);
            if v.target_volume == 20.0 {
                pinned = true;
                assert!(v.deload_triggered);
            }
            last = v.target_volume;
        }
        assert!(pinned);
        // 10 * (1 + 10 * 0.1) = 20 at week 11
        assert_eq!(p.weekly_volume(10.0, 11, 20.0).target_volume, 20.0);
    }

    #[test]
    fn deload_triggers_at_ninety_five_percent() {
        let p = planner(2.0);
        // 10 * (1 + 8 * 0.05) = 14 of 14.5 (96.6%)
        let v = p.weekly_volume(10.0, 9, 14.5);
        assert!(v.deload_triggered);
        // 10 * (1 + 6 * 0.05) = 13 of 14.5 (89.7%)
        let v = p.weekly_volume(10.0, 7, 14.5);
        assert!(!v.deload_triggered);
    }

    #[test]
    fn deload_volume_independent_of_week() {
        let p = planner(1.0);
        for week in 1..=8 {
            assert_eq!(p.weekly_volume(15.0, week, 30.0).deload_volume, 9.0);
        }
    }

    #[test]
    fn start_above_ceiling_is_clamped() {
        let v = planner(1.0).weekly_volume(25.0, 1, 20.0);
        assert_eq!(v.target_volume, 20.0);
        assert!(v.deload_triggered);
    }
}
