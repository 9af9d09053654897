use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::TypesError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Sex {
    Male,
    Female,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Goal {
    #[default]
    Hypertrophy,
    Strength,
    GeneralFitness,
}

/// Experience category used for the reference landmark lookup.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TrainingAge {
    #[default]
    Novice,
    Beginner,
    Intermediate,
    Advanced,
}

/// Static physiological profile, supplied by the profile store and never
/// modified by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub age: f64,
    pub sex: Sex,
    pub training_months: f64,
    pub sleep_hours: f64,
    pub stress_level: f64,
    pub days_per_week: u8,
    #[serde(default)]
    pub goal: Goal,
    #[serde(default)]
    pub training_age: TrainingAge,
}

impl UserProfile {
    /// Checks the ranges a profile form is expected to enforce before the
    /// profile reaches the engine. The engine itself never calls this.
    pub fn validate(&self) -> Result<(), TypesError> {
        let checks = [
            ("age", self.age, self.age > 0.0),
            ("trainingMonths", self.training_months, self.training_months >= 0.0),
            ("sleepHours", self.sleep_hours, (0.0..=24.0).contains(&self.sleep_hours)),
            ("stressLevel", self.stress_level, (1.0..=10.0).contains(&self.stress_level)),
            (
                "daysPerWeek",
                f64::from(self.days_per_week),
                (1..=7).contains(&self.days_per_week),
            ),
        ];

        match checks.into_iter().find(|(_, _, ok)| !ok) {
            Some((field, value, _)) => Err(TypesError::OutOfRange { field, value }),
            None => Ok(()),
        }
    }
}
