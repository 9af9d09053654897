use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::TypesError;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExerciseKind {
    #[default]
    Compound,
    Isolation,
}

/// Subjective note a lifter can attach to a completed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FeedbackTag {
    GoodPump,
    NoPump,
    JointPain,
    FormBreakdown,
    TooEasy,
    TooHard,
}

/// Measured effort of a set, on whichever scale the lifter logged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    Rir(f64),
    Rpe(f64),
}

impl Effort {
    /// RIR equivalent, using RIR = 10 - RPE.
    pub fn as_rir(self) -> f64 {
        match self {
            Effort::Rir(rir) => rir,
            Effort::Rpe(rpe) => 10.0 - rpe,
        }
    }

    pub fn as_rpe(self) -> f64 {
        match self {
            Effort::Rir(rir) => 10.0 - rir,
            Effort::Rpe(rpe) => rpe,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedSet {
    pub reps: u32,
    pub weight: f64,
    pub effort: Effort,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feedback: Vec<FeedbackTag>,
}

fn default_target_rir() -> f64 {
    2.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    #[serde(default)]
    pub kind: ExerciseKind,
    pub target_sets: u32,
    pub target_reps: u32,
    pub target_load: f64,
    #[serde(default = "default_target_rir")]
    pub target_rir: f64,
    /// Consecutive sessions that failed to progress.
    #[serde(default)]
    pub stall_count: u32,
    #[serde(default)]
    pub completed_sets: Vec<CompletedSet>,
}

/// A single planned training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedWorkout {
    pub name: String,
    pub exercises: Vec<Exercise>,
}

impl PlannedWorkout {
    /// Session-store side check that exercises were chosen before the
    /// workout is handed to an adjuster.
    pub fn validate(&self) -> Result<(), TypesError> {
        if self.exercises.is_empty() {
            return Err(TypesError::NoExercises(self.name.clone()));
        }
        Ok(())
    }

    pub fn total_sets(&self) -> u32 {
        self.exercises.iter().map(|e| e.target_sets).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustedWorkout {
    pub workout: PlannedWorkout,
    pub readiness: f64,
    pub policy: String,
    pub adjustment_note: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProgressionAction {
    IncreaseLoad,
    AddRep,
    IncreaseLoadResetReps,
    Hold,
    Regress,
}

/// Prescription for the next session of an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progression {
    pub exercise: String,
    pub action: ProgressionAction,
    pub next_load: f64,
    pub next_reps: u32,
    pub stall_count: u32,
    pub mean_rir: Option<f64>,
    pub note: String,
}
