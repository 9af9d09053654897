use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeDelta};
use periodize_types::{
    ExerciseKind, Mesocycle, MuscleGroup, MuscleWeek, SplitPlan, UserProfile, VolumeLandmarks,
    WeeklyPlan,
};

use crate::{
    config::EngineConfig,
    helpers::math::round_sets,
    intensity::target_rpe,
    landmarks::LandmarkCalculator,
    profile_metrics::ProfileMetrics,
    progression::VolumePlanner,
    split::{template_for_days, training_days, weekly_frequency},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MesocycleOptions {
    /// Accumulation weeks before the deload week.
    pub weeks: u32,
    pub start_date: Option<NaiveDate>,
    /// Cut accumulation short once every tracked muscle triggered a deload.
    pub deload_on_trigger: bool,
    /// In split mode, derive each group's landmark frequency from the split
    /// instead of the configured default.
    pub split_frequency: bool,
}

impl Default for MesocycleOptions {
    fn default() -> Self {
        Self {
            weeks: 4,
            start_date: None,
            deload_on_trigger: false,
            split_frequency: true,
        }
    }
}

impl MesocycleOptions {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            weeks: config.mesocycle_weeks,
            ..Default::default()
        }
    }
}

/// Builds mesocycles: accumulation weeks ramping from MEV toward MAV,
/// followed by a fixed deload week.
pub struct MesocycleGenerator<'a> {
    config: &'a EngineConfig,
}

impl<'a> MesocycleGenerator<'a> {
    pub const STARTING_VOLUME_FACTOR: f64 = 1.1;
    pub const DELOAD_VOLUME_FACTOR: f64 = 0.6;
    pub const DELOAD_RPE_COMPOUND: f64 = 7.0;
    pub const DELOAD_RPE_ISOLATION: f64 = 7.5;
    pub const DELOAD_RIR: u32 = 4;
    pub const START_RIR: u32 = 3;

    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Plan for `groups`, each trained at the configured default frequency.
    pub fn generate(&self, profile: &UserProfile, groups: &[MuscleGroup], options: &MesocycleOptions) -> Mesocycle {
        let metrics = ProfileMetrics::from_profile(profile);
        let calc = LandmarkCalculator::new(&self.config.landmarks, metrics);
        let landmarks = groups
            .iter()
            .map(|g| (g.clone(), calc.calculate(g, self.config.default_frequency)))
            .collect::<Vec<_>>();

        let weeks = self.build_weeks(&metrics, &landmarks, options, false);
        Mesocycle { weeks, split: None }
    }

    /// Plan laid out over a split chosen from the profile's training days.
    /// Each group's frequency comes from the split unless
    /// `options.split_frequency` is off, and every week carries a target RIR
    /// that ramps down toward the deload.
    pub fn generate_with_split(
        &self,
        profile: &UserProfile,
        groups: &[MuscleGroup],
        options: &MesocycleOptions,
    ) -> Mesocycle {
        let template = template_for_days(profile.days_per_week);
        let days = training_days(template, profile.days_per_week, groups);
        debug!("{} days/week -> {template} split", profile.days_per_week);

        let metrics = ProfileMetrics::from_profile(profile);
        let calc = LandmarkCalculator::new(&self.config.landmarks, metrics);
        let landmarks = groups
            .iter()
            .map(|g| {
                let frequency = if options.split_frequency {
                    weekly_frequency(&days, g)
                } else {
                    self.config.default_frequency
                };
                (g.clone(), calc.calculate(g, frequency))
            })
            .collect::<Vec<_>>();

        let weeks = self.build_weeks(&metrics, &landmarks, options, true);
        Mesocycle {
            weeks,
            split: Some(SplitPlan { template, days }),
        }
    }

    fn build_weeks(
        &self,
        metrics: &ProfileMetrics,
        landmarks: &[(MuscleGroup, VolumeLandmarks)],
        options: &MesocycleOptions,
        with_rir: bool,
    ) -> Vec<WeeklyPlan> {
        let planner = VolumePlanner::new(metrics);
        let length = options.weeks.max(1);
        let mut weeks = Vec::with_capacity(length as usize + 1);

        for week in 1..=length {
            let muscles = landmarks
                .iter()
                .map(|(group, lm)| (group.clone(), Self::accumulation_week(&planner, lm, week)))
                .collect::<BTreeMap<_, _>>();
            let deload_triggered = !muscles.is_empty() && muscles.values().all(|m| m.deload_triggered);

            weeks.push(WeeklyPlan {
                week,
                starts_on: Self::week_start(options.start_date, week),
                is_deload: false,
                deload_triggered,
                target_rir: with_rir.then(|| Self::ramp_rir(week, length)),
                muscles,
            });

            if options.deload_on_trigger && deload_triggered && week < length {
                info!("all muscles reached their deload trigger in week {week}, deloading early");
                break;
            }
        }

        let deload = weeks.len() as u32 + 1;
        let muscles = landmarks
            .iter()
            .map(|(group, lm)| {
                let week = MuscleWeek {
                    landmarks: *lm,
                    target_sets: round_sets(f64::from(lm.mev) * Self::DELOAD_VOLUME_FACTOR),
                    rpe_compound: Self::DELOAD_RPE_COMPOUND,
                    rpe_isolation: Self::DELOAD_RPE_ISOLATION,
                    deload_triggered: false,
                };
                (group.clone(), week)
            })
            .collect();

        weeks.push(WeeklyPlan {
            week: deload,
            starts_on: Self::week_start(options.start_date, deload),
            is_deload: true,
            deload_triggered: false,
            target_rir: with_rir.then_some(Self::DELOAD_RIR),
            muscles,
        });

        weeks
    }

    fn accumulation_week(planner: &VolumePlanner, lm: &VolumeLandmarks, week: u32) -> MuscleWeek {
        let starting_volume = f64::from(lm.mev) * Self::STARTING_VOLUME_FACTOR;
        let volume = planner.weekly_volume(starting_volume, week, f64::from(lm.mav));
        let mrv = f64::from(lm.mrv);

        MuscleWeek {
            landmarks: *lm,
            target_sets: round_sets(volume.target_volume),
            rpe_compound: target_rpe(ExerciseKind::Compound, volume.target_volume, mrv),
            rpe_isolation: target_rpe(ExerciseKind::Isolation, volume.target_volume, mrv),
            deload_triggered: volume.deload_triggered,
        }
    }

    /// `max(0, 3 - floor(progress * 3))` with `progress = (week - 1) / length`.
    fn ramp_rir(week: u32, length: u32) -> u32 {
        let progress = f64::from(week - 1) / f64::from(length);
        let drop = (progress * 3.0).floor() as u32;
        Self::START_RIR.saturating_sub(drop)
    }

    fn week_start(start: Option<NaiveDate>, week: u32) -> Option<NaiveDate> {
        start?.checked_add_signed(TimeDelta::weeks(i64::from(week - 1)))
    }
}
