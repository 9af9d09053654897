use periodize_types::{AdjustedWorkout, PlannedWorkout, ReadinessCheckin};

use crate::{
    adjust::{AdjustmentPolicy, DailyState, WorkoutAdjuster},
    helpers::math::mean,
};

/// Readiness below this drops sets and reps.
pub const LOW_READINESS: f64 = 6.0;
/// Readiness above this adds a rep.
pub const HIGH_READINESS: f64 = 8.0;
/// Used when no check-in was submitted for the day.
pub const NEUTRAL_READINESS: f64 = 7.0;

const MIN_SETS_TO_DROP: u32 = 3;
const MIN_REPS: u32 = 5;

/// Unweighted mean of sleep quality, energy, motivation and inverted soreness.
pub fn recovery_score(checkin: &ReadinessCheckin) -> f64 {
    mean(&[
        checkin.sleep_quality,
        checkin.energy_level,
        checkin.motivation,
        11.0 - checkin.muscle_soreness,
    ])
}

/// Blends the recovery score with a warm-up indicator in {-1, 0, 1}.
pub fn daily_readiness(recovery_score: f64, performance_indicator: f64) -> f64 {
    (recovery_score + (performance_indicator + 10.0)) / 2.0
}

/// Three-band readiness adjustment of a planned workout.
pub fn adjust_workout(planned: &PlannedWorkout, readiness_score: f64) -> AdjustedWorkout {
    let mut workout = planned.clone();

    let adjustment_note = if readiness_score < LOW_READINESS {
        for exercise in &mut workout.exercises {
            if exercise.target_sets > MIN_SETS_TO_DROP {
                exercise.target_sets -= 1;
            }
            exercise.target_reps = exercise.target_reps.saturating_sub(2).max(MIN_REPS);
        }
        format!(
            "Low readiness ({readiness_score:.1}): dropped the last set of exercises with more than {MIN_SETS_TO_DROP} sets and cut reps by 2"
        )
    } else if readiness_score > HIGH_READINESS {
        for exercise in &mut workout.exercises {
            exercise.target_reps += 1;
        }
        format!("High readiness ({readiness_score:.1}): +1 rep on every exercise")
    } else {
        format!("Readiness {readiness_score:.1} is in the normal range, workout unchanged")
    };

    debug!("{}: {adjustment_note}", workout.name);

    AdjustedWorkout {
        workout,
        readiness: readiness_score,
        policy: AdjustmentPolicy::ReadinessBands.to_string(),
        adjustment_note,
    }
}

/// [`WorkoutAdjuster`] for the three readiness bands.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadinessAdjuster;

impl WorkoutAdjuster for ReadinessAdjuster {
    fn policy(&self) -> AdjustmentPolicy {
        AdjustmentPolicy::ReadinessBands
    }

    fn adjust(&self, workout: &PlannedWorkout, state: &DailyState) -> AdjustedWorkout {
        let readiness = match &state.checkin {
            Some(checkin) => daily_readiness(recovery_score(checkin), state.warmup.indicator()),
            None => {
                debug!("no check-in for {}, assuming neutral readiness", workout.name);
                NEUTRAL_READINESS
            }
        };
        adjust_workout(workout, readiness)
    }
}
