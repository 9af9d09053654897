use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Daily subjective check-in, each field on a 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadinessCheckin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub sleep_quality: f64,
    pub energy_level: f64,
    pub motivation: f64,
    pub muscle_soreness: f64,
}

/// How the warm-up sets felt compared to usual.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WarmupFeedback {
    Worse,
    #[default]
    AsExpected,
    Better,
}

impl WarmupFeedback {
    pub fn indicator(self) -> f64 {
        match self {
            WarmupFeedback::Worse => -1.0,
            WarmupFeedback::AsExpected => 0.0,
            WarmupFeedback::Better => 1.0,
        }
    }
}

/// Inputs of the weighted fatigue mask. Each is on its natural 1-10 scale
/// (high stress and high soreness are bad) and may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FatigueInputs {
    #[serde(default)]
    pub sleep: Option<f64>,
    #[serde(default)]
    pub stress: Option<f64>,
    #[serde(default)]
    pub soreness: Option<f64>,
    #[serde(default)]
    pub motivation: Option<f64>,
    #[serde(default)]
    pub lifestyle: Option<f64>,
}

impl FatigueInputs {
    pub fn is_empty(&self) -> bool {
        self.sleep.is_none()
            && self.stress.is_none()
            && self.soreness.is_none()
            && self.motivation.is_none()
            && self.lifestyle.is_none()
    }
}

impl From<&ReadinessCheckin> for FatigueInputs {
    /// Maps the fields a check-in shares with the fatigue mask; stress and
    /// lifestyle are not part of a check-in and stay missing.
    fn from(checkin: &ReadinessCheckin) -> Self {
        Self {
            sleep: Some(checkin.sleep_quality),
            stress: None,
            soreness: Some(checkin.muscle_soreness),
            motivation: Some(checkin.motivation),
            lifestyle: None,
        }
    }
}
