use std::collections::BTreeMap;

use periodize_types::{
    AdjustedWorkout, CompletedSet, Exercise, Mesocycle, MuscleGroup, PlannedWorkout, Progression,
    UserProfile, VolumeLandmarks,
};

use crate::{
    adjust::{DailyState, WorkoutAdjuster},
    config::{ConfigError, EngineConfig},
    intensity::progress_exercise,
    landmarks::LandmarkCalculator,
    mesocycle::{MesocycleGenerator, MesocycleOptions},
    profile_metrics::ProfileMetrics,
    progression::{VolumePlanner, WeeklyVolume},
};

/// Entry point tying the calculators to one immutable configuration.
///
/// Holds no per-user state: every call is a function of its arguments and
/// the configuration, so one engine can serve any number of users.
#[derive(Debug, Clone, Default)]
pub struct PeriodizationEngine {
    config: EngineConfig,
}

impl PeriodizationEngine {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn metrics(&self, profile: &UserProfile) -> ProfileMetrics {
        ProfileMetrics::from_profile(profile)
    }

    pub fn landmarks(&self, profile: &UserProfile, group: &MuscleGroup, frequency: u8) -> VolumeLandmarks {
        LandmarkCalculator::new(&self.config.landmarks, self.metrics(profile)).calculate(group, frequency)
    }

    /// Landmarks of every tracked group; `frequency` defaults to the
    /// configured one.
    pub fn tracked_landmarks(
        &self,
        profile: &UserProfile,
        frequency: Option<u8>,
    ) -> BTreeMap<MuscleGroup, VolumeLandmarks> {
        let calc = LandmarkCalculator::new(&self.config.landmarks, self.metrics(profile));
        let frequency = frequency.unwrap_or(self.config.default_frequency);
        self.config
            .tracked_groups
            .iter()
            .map(|g| (g.clone(), calc.calculate(g, frequency)))
            .collect()
    }

    pub fn weekly_volume(
        &self,
        profile: &UserProfile,
        starting_volume: f64,
        week_number: u32,
        max_volume: f64,
    ) -> WeeklyVolume {
        VolumePlanner::new(&self.metrics(profile)).weekly_volume(starting_volume, week_number, max_volume)
    }

    pub fn default_options(&self) -> MesocycleOptions {
        MesocycleOptions::from_config(&self.config)
    }

    pub fn generate_mesocycle(&self, profile: &UserProfile, options: &MesocycleOptions) -> Mesocycle {
        MesocycleGenerator::new(&self.config).generate(profile, &self.config.tracked_groups, options)
    }

    pub fn generate_split_mesocycle(&self, profile: &UserProfile, options: &MesocycleOptions) -> Mesocycle {
        MesocycleGenerator::new(&self.config).generate_with_split(
            profile,
            &self.config.tracked_groups,
            options,
        )
    }

    pub fn progress_exercise(&self, exercise: &Exercise, completed_sets: &[CompletedSet]) -> Progression {
        progress_exercise(exercise, completed_sets)
    }

    /// Adjuster for the configured policy.
    pub fn adjuster(&self) -> Box<dyn WorkoutAdjuster> {
        self.config.policy.adjuster(&self.config)
    }

    pub fn adjust_workout(&self, workout: &PlannedWorkout, state: &DailyState) -> AdjustedWorkout {
        self.adjuster().adjust(workout, state)
    }
}
