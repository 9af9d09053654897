#[macro_use]
extern crate log;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use dotenv::dotenv;
use periodize_algos::{
    AdjustmentPolicy, AutoRegulationEngine, DailyState, EngineConfig, MesocycleOptions,
    PeriodizationEngine, baseline_landmarks, daily_readiness, recovery_score,
};
use periodize_types::{
    Exercise, FatigueInputs, PlannedWorkout, ReadinessCheckin, UserProfile, WarmupFeedback,
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::json;

#[derive(Parser)]
pub struct PeriodizeCli {
    /// JSON file overriding the engine's tables
    #[arg(env = "PERIODIZE_CONFIG", long = "config")]
    pub config: Option<PathBuf>,
    #[clap(subcommand)]
    pub subcommand: PeriodizeCommand,
}

#[derive(Subcommand)]
pub enum PeriodizeCommand {
    ///
    /// Print training-age factor and recovery capacity for a profile
    ///
    Metrics { profile: PathBuf },
    ///
    /// Print volume landmarks for every tracked muscle group
    ///
    Landmarks {
        profile: PathBuf,
        /// Sessions per week for each muscle
        #[arg(long)]
        frequency: Option<u8>,
        /// Also print the reference landmarks for the profile's training age
        #[arg(long)]
        baseline: bool,
    },
    ///
    /// Generate a mesocycle ending in a deload week
    ///
    Plan {
        profile: PathBuf,
        /// Accumulation weeks before the deload
        #[arg(long)]
        weeks: Option<u32>,
        /// Lay the plan out over a weekly split with a target RIR per week
        #[arg(long)]
        split: bool,
        /// Date of the first training week (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,
        /// End accumulation early once every muscle hits its deload trigger
        #[arg(long)]
        deload_on_trigger: bool,
        /// In split mode, keep the configured frequency for every muscle
        #[arg(long)]
        default_frequency: bool,
    },
    ///
    /// Score a daily readiness check-in
    ///
    Readiness {
        checkin: PathBuf,
        #[arg(long, default_value = "as_expected")]
        warmup: WarmupFeedback,
    },
    ///
    /// Adjust a planned workout to today's state
    ///
    Adjust {
        workout: PathBuf,
        /// JSON file with `checkin`, `warmup` and `fatigue` fields
        #[arg(long)]
        state: Option<PathBuf>,
        /// Overrides the configured policy
        #[arg(long)]
        policy: Option<AdjustmentPolicy>,
    },
    ///
    /// Prescribe the next session of an exercise from its completed sets
    ///
    Progress { exercise: PathBuf },
    ///
    /// Print shell completions
    ///
    Completions { shell: Shell },
}

fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenv() {
        println!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = PeriodizeCli::parse();
    let config = match cli.config {
        Some(path) => read_json::<EngineConfig>(&path)?,
        None => EngineConfig::default(),
    };

    match cli.subcommand {
        PeriodizeCommand::Metrics { profile } => {
            let engine = PeriodizationEngine::new(config)?;
            let profile = read_profile(&profile)?;
            let metrics = engine.metrics(&profile);
            print_json(&json!({
                "training_age_factor": metrics.training_age_factor,
                "recovery_capacity": metrics.recovery_capacity,
                "experienced": metrics.is_experienced(),
            }))
        }
        PeriodizeCommand::Landmarks {
            profile,
            frequency,
            baseline,
        } => {
            let engine = PeriodizationEngine::new(config)?;
            let profile = read_profile(&profile)?;
            let landmarks = engine.tracked_landmarks(&profile, frequency);
            if baseline {
                print_json(&json!({
                    "landmarks": landmarks,
                    "baseline": {
                        "training_age": profile.training_age,
                        "landmarks": baseline_landmarks(profile.training_age),
                    },
                }))
            } else {
                print_json(&landmarks)
            }
        }
        PeriodizeCommand::Plan {
            profile,
            weeks,
            split,
            start_date,
            deload_on_trigger,
            default_frequency,
        } => {
            let engine = PeriodizationEngine::new(config)?;
            let profile = read_profile(&profile)?;
            let options = MesocycleOptions {
                weeks: weeks.unwrap_or(engine.config().mesocycle_weeks),
                start_date,
                deload_on_trigger,
                split_frequency: !default_frequency,
            };

            let mesocycle = if split {
                engine.generate_split_mesocycle(&profile, &options)
            } else {
                engine.generate_mesocycle(&profile, &options)
            };
            info!(
                "generated {} weeks for {} muscle groups",
                mesocycle.weeks.len(),
                engine.config().tracked_groups.len()
            );
            print_json(&mesocycle)
        }
        PeriodizeCommand::Readiness { checkin, warmup } => {
            let checkin: ReadinessCheckin = read_json(&checkin)?;
            let recovery = recovery_score(&checkin);
            let fatigue =
                AutoRegulationEngine::new(config.fatigue_mask).recovery_score(&FatigueInputs::from(&checkin));
            print_json(&json!({
                "recovery_score": recovery,
                "daily_readiness": daily_readiness(recovery, warmup.indicator()),
                "fatigue_score": fatigue.score,
                "limiting": fatigue.limiting,
            }))
        }
        PeriodizeCommand::Adjust {
            workout,
            state,
            policy,
        } => {
            let policy = policy.unwrap_or(config.policy);
            let engine = PeriodizationEngine::new(EngineConfig { policy, ..config })?;

            let workout: PlannedWorkout = read_json(&workout)?;
            workout.validate()?;
            let state: DailyState = match state {
                Some(path) => read_json(&path)?,
                None => {
                    warn!("no daily state given, adjusting with neutral defaults");
                    DailyState::default()
                }
            };

            print_json(&engine.adjust_workout(&workout, &state))
        }
        PeriodizeCommand::Progress { exercise } => {
            let engine = PeriodizationEngine::new(config)?;
            let exercise: Exercise = read_json(&exercise)?;
            print_json(&engine.progress_exercise(&exercise, &exercise.completed_sets))
        }
        PeriodizeCommand::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut PeriodizeCli::command(),
                "periodize",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

fn read_profile(path: &Path) -> anyhow::Result<UserProfile> {
    let profile: UserProfile = read_json(path)?;
    profile
        .validate()
        .with_context(|| format!("invalid profile in {}", path.display()))?;
    debug!(
        "profile: {} months trained, {} days/week, goal {}",
        profile.training_months, profile.days_per_week, profile.goal
    );
    Ok(profile)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
