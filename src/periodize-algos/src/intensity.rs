use periodize_types::{CompletedSet, Exercise, ExerciseKind, Progression, ProgressionAction};
use serde::{Deserialize, Serialize};

use crate::helpers::math::{mean, round_float};

pub const COMPOUND_BASE_RPE: f64 = 8.0;
pub const ISOLATION_BASE_RPE: f64 = 8.5;

/// Target RPE for an exercise class given how close weekly volume is to MRV.
///
/// Near the ceiling (> 80% of MRV) sets are pushed harder since volume
/// can't grow; at low volume (< 40% of MRV) effort is eased. An `mrv` of zero
/// or less counts as being at the ceiling.
pub fn target_rpe(kind: ExerciseKind, current_volume: f64, mrv: f64) -> f64 {
    let base = match kind {
        ExerciseKind::Compound => COMPOUND_BASE_RPE,
        ExerciseKind::Isolation => ISOLATION_BASE_RPE,
    };
    let ratio = if mrv > 0.0 { current_volume / mrv } else { 1.0 };

    if ratio > 0.8 {
        base + 0.5
    } else if ratio < 0.4 {
        base - 0.5
    } else {
        base
    }
}

/// Load for the next session from the last session's RPE.
///
/// Moves by at most 2.5% per call: up when the last session was more than
/// half a point easier than targeted, down when more than half a point
/// harder.
pub fn load_progression(previous_load: f64, last_session_rpe: f64, target_rpe: f64) -> f64 {
    const STEP: f64 = 0.025;
    const TOLERANCE: f64 = 0.5;

    let diff = target_rpe - last_session_rpe;
    let load = if diff > TOLERANCE {
        previous_load + previous_load * STEP
    } else if diff < -TOLERANCE {
        previous_load - previous_load * STEP
    } else {
        previous_load
    };
    round_float(load)
}

/// Load and effort actually recorded for the previous session of a lift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreviousSession {
    pub load: f64,
    pub rpe: f64,
}

/// Next load from an optional previous session; without a record the
/// current load is returned unchanged.
pub fn adjust_load(current_load: f64, previous: Option<&PreviousSession>, target_rpe: f64) -> f64 {
    match previous {
        Some(session) => load_progression(session.load, session.rpe, target_rpe),
        None => current_load,
    }
}

/// Double progression for a single exercise: reps first, then load.
pub struct ExerciseProgressor;

impl ExerciseProgressor {
    pub const LOAD_STEP: f64 = 5.0;
    pub const MICRO_LOAD_STEP: f64 = 2.5;
    pub const REP_CEILING: u32 = 10;
    pub const REP_FLOOR: u32 = 6;
    /// Stalled sessions after which a too-hard session regresses the load.
    pub const STALL_LIMIT: u32 = 2;

    pub fn progress(exercise: &Exercise, completed_sets: &[CompletedSet]) -> Progression {
        let hold = |stall_count: u32, mean_rir: Option<f64>, note: String| Progression {
            exercise: exercise.name.clone(),
            action: ProgressionAction::Hold,
            next_load: exercise.target_load,
            next_reps: exercise.target_reps,
            stall_count,
            mean_rir,
            note,
        };

        if completed_sets.is_empty() {
            return hold(
                exercise.stall_count,
                None,
                "No completed sets recorded, keeping the current prescription".to_owned(),
            );
        }

        let rirs = completed_sets
            .iter()
            .map(|s| s.effort.as_rir())
            .collect::<Vec<_>>();
        let raw_rir = mean(&rirs);
        let diff = raw_rir - exercise.target_rir;
        let mean_rir = round_float(raw_rir);
        let target = exercise.target_rir;

        let progression = if diff > 1.0 {
            Progression {
                exercise: exercise.name.clone(),
                action: ProgressionAction::IncreaseLoad,
                next_load: exercise.target_load + Self::LOAD_STEP,
                next_reps: exercise.target_reps,
                stall_count: 0,
                mean_rir: Some(mean_rir),
                note: format!(
                    "Easier than prescribed ({mean_rir} RIR vs target {target}), load +{}",
                    Self::LOAD_STEP
                ),
            }
        } else if diff < -1.0 {
            if exercise.stall_count >= Self::STALL_LIMIT {
                Progression {
                    exercise: exercise.name.clone(),
                    action: ProgressionAction::Regress,
                    next_load: (exercise.target_load - Self::LOAD_STEP).max(0.0),
                    next_reps: exercise.target_reps,
                    stall_count: 0,
                    mean_rir: Some(mean_rir),
                    note: format!(
                        "Regression after {} stalled sessions, load -{}",
                        exercise.stall_count,
                        Self::LOAD_STEP
                    ),
                }
            } else {
                hold(
                    exercise.stall_count + 1,
                    Some(mean_rir),
                    format!("Harder than prescribed ({mean_rir} RIR vs target {target}), holding load"),
                )
            }
        } else if exercise.target_reps < Self::REP_CEILING {
            Progression {
                exercise: exercise.name.clone(),
                action: ProgressionAction::AddRep,
                next_load: exercise.target_load,
                next_reps: exercise.target_reps + 1,
                stall_count: 0,
                mean_rir: Some(mean_rir),
                note: "On target, +1 rep".to_owned(),
            }
        } else {
            let next_reps = Self::REP_FLOOR.max(exercise.target_reps - 2);
            Progression {
                exercise: exercise.name.clone(),
                action: ProgressionAction::IncreaseLoadResetReps,
                next_load: exercise.target_load + Self::MICRO_LOAD_STEP,
                next_reps,
                stall_count: 0,
                mean_rir: Some(mean_rir),
                note: format!(
                    "On target at {} reps, load +{} and reset to {next_reps} reps",
                    exercise.target_reps,
                    Self::MICRO_LOAD_STEP
                ),
            }
        };

        debug!("{}: {} ({})", exercise.name, progression.action, progression.note);
        progression
    }
}

/// Progression for `exercise` from the sets completed in its last session.
pub fn progress_exercise(exercise: &Exercise, completed_sets: &[CompletedSet]) -> Progression {
    ExerciseProgressor::progress(exercise, completed_sets)
}
