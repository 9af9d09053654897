mod error;
pub use error::TypesError;

pub mod profile;
pub use profile::{Goal, Sex, TrainingAge, UserProfile};

pub mod muscle;
pub use muscle::MuscleGroup;

pub mod exercise;
pub use exercise::{
    AdjustedWorkout, CompletedSet, Effort, Exercise, ExerciseKind, FeedbackTag, PlannedWorkout,
    Progression, ProgressionAction,
};

pub mod readiness;
pub use readiness::{FatigueInputs, ReadinessCheckin, WarmupFeedback};

pub mod plan;
pub use plan::{Mesocycle, MuscleWeek, SplitPlan, SplitTemplate, TrainingDay, VolumeLandmarks, WeeklyPlan};
