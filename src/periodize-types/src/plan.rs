use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::MuscleGroup;

/// Weekly set-count landmarks of a muscle group: `mv <= mev <= mav <= mrv`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeLandmarks {
    pub mv: u32,
    pub mev: u32,
    pub mav: u32,
    pub mrv: u32,
}

impl VolumeLandmarks {
    pub fn is_ordered(&self) -> bool {
        self.mv <= self.mev && self.mev <= self.mav && self.mav <= self.mrv
    }
}

/// Targets for one muscle group in one week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MuscleWeek {
    pub landmarks: VolumeLandmarks,
    pub target_sets: u32,
    pub rpe_compound: f64,
    pub rpe_isolation: f64,
    pub deload_triggered: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub week: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_on: Option<NaiveDate>,
    pub is_deload: bool,
    /// Set once every tracked muscle has reached its deload trigger.
    pub deload_triggered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_rir: Option<u32>,
    pub muscles: BTreeMap<MuscleGroup, MuscleWeek>,
}

impl WeeklyPlan {
    pub fn total_sets(&self) -> u32 {
        self.muscles.values().map(|m| m.target_sets).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SplitTemplate {
    FullBody,
    UpperLower,
    PushPullLegs,
}

/// A named training day of a split. Exercise selection for the day is left
/// to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingDay {
    pub day: u8,
    pub name: String,
    pub focus: Vec<MuscleGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitPlan {
    pub template: SplitTemplate,
    pub days: Vec<TrainingDay>,
}

/// A training block. The last week is always the deload week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesocycle {
    pub weeks: Vec<WeeklyPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split: Option<SplitPlan>,
}

impl Mesocycle {
    pub fn deload_week(&self) -> Option<&WeeklyPlan> {
        self.weeks.last().filter(|w| w.is_deload)
    }

    pub fn accumulation_weeks(&self) -> impl Iterator<Item = &WeeklyPlan> {
        self.weeks.iter().filter(|w| !w.is_deload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week(week: u32, is_deload: bool) -> WeeklyPlan {
        WeeklyPlan {
            week,
            starts_on: None,
            is_deload,
            deload_triggered: false,
            target_rir: None,
            muscles: BTreeMap::new(),
        }
    }

    #[test]
    fn landmark_ordering() {
        let ordered = VolumeLandmarks {
            mv: 5,
            mev: 8,
            mav: 16,
            mrv: 20,
        };
        assert!(ordered.is_ordered());
        let broken = VolumeLandmarks { mav: 25, ..ordered };
        assert!(!broken.is_ordered());
    }

    #[test]
    fn deload_week_is_last() {
        let meso = Mesocycle {
            weeks: vec![week(1, false), week(2, false), week(3, true)],
            split: None,
        };
        assert_eq!(meso.deload_week().map(|w| w.week), Some(3));
        assert_eq!(meso.accumulation_weeks().count(), 2);

        let no_deload = Mesocycle {
            weeks: vec![week(1, false)],
            split: None,
        };
        assert!(no_deload.deload_week().is_none());
    }
}
