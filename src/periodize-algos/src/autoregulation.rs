use periodize_types::{AdjustedWorkout, FatigueInputs, PlannedWorkout};

use crate::{
    adjust::{AdjustmentPolicy, DailyState, WorkoutAdjuster},
    config::FatigueMask,
    helpers::math::{round_float, round_sets},
};

/// Multipliers applied to a workout for one fatigue tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustmentFactors {
    pub volume: f64,
    pub intensity: f64,
    pub rir_delta: i32,
}

impl AdjustmentFactors {
    /// Four-tier table keyed by the weighted recovery score.
    pub fn for_score(score: f64) -> Self {
        let (volume, intensity, rir_delta) = if score >= 8.0 {
            (1.10, 1.05, -1)
        } else if score >= 6.0 {
            (1.00, 1.00, 0)
        } else if score >= 4.0 {
            (0.85, 0.95, 1)
        } else {
            (0.70, 0.90, 2)
        };
        Self {
            volume,
            intensity,
            rir_delta,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FatigueScore {
    pub score: f64,
    /// Inputs whose oriented value fell below their threshold.
    pub limiting: Vec<&'static str>,
}

/// Autoregulation from a weighted mask over five fatigue inputs.
///
/// Stress and soreness are inverted (`11 - v`) so that every input reads
/// "higher is better" before weighting. Values are clamped to 1-10.
#[derive(Debug, Clone, Copy)]
pub struct AutoRegulationEngine {
    mask: FatigueMask,
}

impl AutoRegulationEngine {
    /// Score used when no input carries any weight.
    pub const DEFAULT_SCORE: f64 = 7.0;

    pub fn new(mask: FatigueMask) -> Self {
        Self { mask }
    }

    /// `sum(value * weight) / sum(weight used)` over the inputs present.
    pub fn recovery_score(&self, inputs: &FatigueInputs) -> FatigueScore {
        let mut weighted = 0.0;
        let mut weight_used = 0.0;
        let mut limiting = Vec::new();

        for (name, factor) in self.mask.factors() {
            let Some(oriented) = oriented_input(inputs, name) else {
                continue;
            };

            weighted += oriented * factor.weight;
            weight_used += factor.weight;
            if oriented < factor.threshold {
                limiting.push(name);
            }
        }

        let score = if weight_used > 0.0 {
            weighted / weight_used
        } else {
            Self::DEFAULT_SCORE
        };

        FatigueScore { score, limiting }
    }

    /// Scales target sets, load and RIR of every exercise by the tier the
    /// fatigue score falls in.
    pub fn adjust_workout(&self, planned: &PlannedWorkout, inputs: &FatigueInputs) -> AdjustedWorkout {
        let FatigueScore { score, limiting } = self.recovery_score(inputs);
        let factors = AdjustmentFactors::for_score(score);
        trace!("fatigue score {score:.2} -> {factors:?}");

        let mut workout = planned.clone();
        for exercise in &mut workout.exercises {
            if exercise.target_sets > 0 {
                exercise.target_sets =
                    round_sets(f64::from(exercise.target_sets) * factors.volume).max(1);
            }
            exercise.target_load = round_float(exercise.target_load * factors.intensity);
            exercise.target_rir = (exercise.target_rir + f64::from(factors.rir_delta)).max(0.0);
        }

        let mut adjustment_note = format!(
            "Fatigue score {score:.1}: sets x{:.2}, load x{:.2}, RIR {:+}",
            factors.volume, factors.intensity, factors.rir_delta
        );
        if !limiting.is_empty() {
            adjustment_note.push_str(&format!(" (limiting: {})", limiting.join(", ")));
        }
        debug!("{}: {adjustment_note}", workout.name);

        AdjustedWorkout {
            workout,
            readiness: round_float(score),
            policy: AdjustmentPolicy::FatigueMask.to_string(),
            adjustment_note,
        }
    }
}

/// Input named by a mask factor, clamped to 1-10 and oriented so that
/// higher is better.
fn oriented_input(inputs: &FatigueInputs, name: &str) -> Option<f64> {
    let (value, inverted) = match name {
        "sleep" => (inputs.sleep, false),
        "stress" => (inputs.stress, true),
        "soreness" => (inputs.soreness, true),
        "motivation" => (inputs.motivation, false),
        "lifestyle" => (inputs.lifestyle, false),
        _ => return None,
    };
    let clamped = value?.clamp(1.0, 10.0);
    Some(if inverted { 11.0 - clamped } else { clamped })
}

impl WorkoutAdjuster for AutoRegulationEngine {
    fn policy(&self) -> AdjustmentPolicy {
        AdjustmentPolicy::FatigueMask
    }

    /// Uses the day's fatigue inputs, falling back to the fields shared with
    /// the check-in when none were given.
    fn adjust(&self, workout: &PlannedWorkout, state: &DailyState) -> AdjustedWorkout {
        let inputs = match (&state.checkin, state.fatigue.is_empty()) {
            (Some(checkin), true) => FatigueInputs::from(checkin),
            _ => state.fatigue,
        };
        self.adjust_workout(workout, &inputs)
    }
}
