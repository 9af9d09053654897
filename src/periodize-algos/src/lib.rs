#[macro_use]
extern crate log;

pub mod config;
pub use config::{ConfigError, EngineConfig, FatigueFactor, FatigueMask, LandmarkTable};

pub(crate) mod profile_metrics;
pub use profile_metrics::{ProfileMetrics, recovery_capacity_score, training_age_factor};

pub(crate) mod landmarks;
pub use landmarks::{LandmarkCalculator, baseline_landmarks, frequency_factor};

pub(crate) mod progression;
pub use progression::{VolumePlanner, WeeklyVolume};

pub(crate) mod intensity;
pub use intensity::{
    ExerciseProgressor, PreviousSession, adjust_load, load_progression, progress_exercise,
    target_rpe,
};

pub(crate) mod adjust;
pub use adjust::{AdjustmentPolicy, DailyState, WorkoutAdjuster};

pub(crate) mod readiness;
pub use readiness::{ReadinessAdjuster, adjust_workout, daily_readiness, recovery_score};

pub(crate) mod autoregulation;
pub use autoregulation::{AdjustmentFactors, AutoRegulationEngine, FatigueScore};

pub(crate) mod split;
pub use split::{template_for_days, training_days, weekly_frequency};

pub(crate) mod mesocycle;
pub use mesocycle::{MesocycleGenerator, MesocycleOptions};

mod engine;
pub use engine::PeriodizationEngine;

pub mod helpers;
