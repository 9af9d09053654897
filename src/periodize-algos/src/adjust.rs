use periodize_types::{AdjustedWorkout, FatigueInputs, PlannedWorkout, ReadinessCheckin, WarmupFeedback};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{autoregulation::AutoRegulationEngine, config::EngineConfig, readiness::ReadinessAdjuster};

/// Everything known about the lifter on the day of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyState {
    #[serde(default)]
    pub checkin: Option<ReadinessCheckin>,
    #[serde(default)]
    pub warmup: WarmupFeedback,
    #[serde(default)]
    pub fatigue: FatigueInputs,
}

/// Adjusts an already planned workout to today's state. Implementations
/// return a new workout and never modify the planned one.
pub trait WorkoutAdjuster {
    fn policy(&self) -> AdjustmentPolicy;

    fn adjust(&self, workout: &PlannedWorkout, state: &DailyState) -> AdjustedWorkout;
}

/// Which autoregulation policy governs a session.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AdjustmentPolicy {
    /// Three readiness bands from the daily check-in.
    #[default]
    ReadinessBands,
    /// Weighted five-input fatigue mask with a four-tier factor table.
    FatigueMask,
}

impl AdjustmentPolicy {
    pub fn adjuster(self, config: &EngineConfig) -> Box<dyn WorkoutAdjuster> {
        match self {
            AdjustmentPolicy::ReadinessBands => Box::new(ReadinessAdjuster),
            AdjustmentPolicy::FatigueMask => Box::new(AutoRegulationEngine::new(config.fatigue_mask)),
        }
    }
}
