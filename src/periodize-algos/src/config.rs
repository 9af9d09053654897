use std::collections::BTreeMap;

use periodize_types::MuscleGroup;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adjust::AdjustmentPolicy;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{table} entry for `{group}` must be a finite, non-negative number (got {value})")]
    InvalidTableValue {
        table: &'static str,
        group: MuscleGroup,
        value: f64,
    },
    #[error("fatigue factor `{factor}` has invalid {field}: {value}")]
    InvalidFatigueFactor {
        factor: &'static str,
        field: &'static str,
        value: f64,
    },
    #[error("mesocycle must have at least one accumulation week")]
    EmptyMesocycle,
    #[error("default training frequency must be at least once per week")]
    ZeroFrequency,
}

/// Per-group base MEV and muscle size factor.
///
/// Entries in `base_mev` / `size_factor` override the built-in tables; groups
/// found in neither use `default_base_mev` / `default_size_factor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandmarkTable {
    pub base_mev: BTreeMap<MuscleGroup, f64>,
    pub size_factor: BTreeMap<MuscleGroup, f64>,
    pub default_base_mev: f64,
    pub default_size_factor: f64,
}

impl Default for LandmarkTable {
    fn default() -> Self {
        Self {
            base_mev: BTreeMap::new(),
            size_factor: BTreeMap::new(),
            default_base_mev: 8.0,
            default_size_factor: 0.2,
        }
    }
}

impl LandmarkTable {
    pub fn base_mev(&self, group: &MuscleGroup) -> f64 {
        self.base_mev
            .get(group)
            .copied()
            .or_else(|| builtin_base_mev(group))
            .unwrap_or(self.default_base_mev)
    }

    pub fn size_factor(&self, group: &MuscleGroup) -> f64 {
        self.size_factor
            .get(group)
            .copied()
            .or_else(|| builtin_size_factor(group))
            .unwrap_or(self.default_size_factor)
    }
}

fn builtin_base_mev(group: &MuscleGroup) -> Option<f64> {
    match group {
        MuscleGroup::Chest => Some(10.0),
        MuscleGroup::Back => Some(10.0),
        MuscleGroup::Quads => Some(8.0),
        MuscleGroup::Hamstrings => Some(6.0),
        MuscleGroup::Glutes => Some(4.0),
        MuscleGroup::Shoulders => Some(8.0),
        MuscleGroup::Biceps => Some(8.0),
        MuscleGroup::Triceps => Some(6.0),
        MuscleGroup::Calves => Some(8.0),
        MuscleGroup::Abs => Some(6.0),
        MuscleGroup::Other(_) => None,
    }
}

fn builtin_size_factor(group: &MuscleGroup) -> Option<f64> {
    match group {
        MuscleGroup::Chest => Some(0.3),
        MuscleGroup::Back => Some(0.35),
        MuscleGroup::Quads => Some(0.35),
        MuscleGroup::Hamstrings => Some(0.25),
        MuscleGroup::Glutes => Some(0.3),
        MuscleGroup::Shoulders => Some(0.15),
        MuscleGroup::Biceps => Some(0.1),
        MuscleGroup::Triceps => Some(0.1),
        MuscleGroup::Calves => Some(0.1),
        MuscleGroup::Abs => Some(0.05),
        MuscleGroup::Other(_) => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FatigueFactor {
    pub weight: f64,
    /// Oriented scores below this are reported as limiting.
    pub threshold: f64,
}

impl FatigueFactor {
    pub const fn new(weight: f64, threshold: f64) -> Self {
        Self { weight, threshold }
    }
}

/// Weights of the five fatigue-mask inputs. They need not sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FatigueMask {
    pub sleep: FatigueFactor,
    pub stress: FatigueFactor,
    pub soreness: FatigueFactor,
    pub motivation: FatigueFactor,
    pub lifestyle: FatigueFactor,
}

impl Default for FatigueMask {
    fn default() -> Self {
        Self {
            sleep: FatigueFactor::new(0.30, 6.0),
            stress: FatigueFactor::new(0.20, 5.0),
            soreness: FatigueFactor::new(0.20, 5.0),
            motivation: FatigueFactor::new(0.15, 5.0),
            lifestyle: FatigueFactor::new(0.15, 5.0),
        }
    }
}

impl FatigueMask {
    pub fn factors(&self) -> [(&'static str, FatigueFactor); 5] {
        [
            ("sleep", self.sleep),
            ("stress", self.stress),
            ("soreness", self.soreness),
            ("motivation", self.motivation),
            ("lifestyle", self.lifestyle),
        ]
    }
}

/// Static tables an engine instance is built from. Never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub landmarks: LandmarkTable,
    pub fatigue_mask: FatigueMask,
    pub default_frequency: u8,
    pub tracked_groups: Vec<MuscleGroup>,
    pub mesocycle_weeks: u32,
    pub policy: AdjustmentPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            landmarks: LandmarkTable::default(),
            fatigue_mask: FatigueMask::default(),
            default_frequency: 2,
            tracked_groups: MuscleGroup::NAMED.to_vec(),
            mesocycle_weeks: 4,
            policy: AdjustmentPolicy::default(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mesocycle_weeks == 0 {
            return Err(ConfigError::EmptyMesocycle);
        }
        if self.default_frequency == 0 {
            return Err(ConfigError::ZeroFrequency);
        }

        let valid = |v: f64| v.is_finite() && v >= 0.0;

        let tables = [
            ("base_mev", &self.landmarks.base_mev),
            ("size_factor", &self.landmarks.size_factor),
        ];
        for (table, entries) in tables {
            if let Some((group, &value)) = entries.iter().find(|(_, v)| !valid(**v)) {
                return Err(ConfigError::InvalidTableValue {
                    table,
                    group: group.clone(),
                    value,
                });
            }
        }

        for (factor, f) in self.fatigue_mask.factors() {
            if !valid(f.weight) {
                return Err(ConfigError::InvalidFatigueFactor {
                    factor,
                    field: "weight",
                    value: f.weight,
                });
            }
            if !(0.0..=10.0).contains(&f.threshold) {
                return Err(ConfigError::InvalidFatigueFactor {
                    factor,
                    field: "threshold",
                    value: f.threshold,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(EngineConfig::default().validate(), Ok(()));
    }

    #[test]
    fn unknown_group_uses_defaults() {
        let table = LandmarkTable::default();
        let forearms = MuscleGroup::Other("forearms".into());
        assert_eq!(table.base_mev(&forearms), 8.0);
        assert_eq!(table.size_factor(&forearms), 0.2);
    }

    #[test]
    fn overrides_win_over_builtin() {
        let mut table = LandmarkTable::default();
        table.base_mev.insert(MuscleGroup::Chest, 12.0);
        assert_eq!(table.base_mev(&MuscleGroup::Chest), 12.0);
        assert_eq!(table.base_mev(&MuscleGroup::Back), 10.0);
        assert_eq!(table.size_factor(&MuscleGroup::Chest), 0.3);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{
            "mesocycle_weeks": 5,
            "landmarks": { "base_mev": { "neck": 4 } },
            "fatigue_mask": { "sleep": { "weight": 0.5, "threshold": 7 } }
        }"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.mesocycle_weeks, 5);
        assert_eq!(config.default_frequency, 2);
        assert_eq!(config.landmarks.default_base_mev, 8.0);
        assert_eq!(
            config.landmarks.base_mev(&MuscleGroup::Other("neck".into())),
            4.0
        );
        assert_eq!(config.fatigue_mask.sleep.weight, 0.5);
        assert_eq!(config.fatigue_mask.stress, FatigueMask::default().stress);
        assert_eq!(config.tracked_groups.len(), 10);
    }

    #[test]
    fn rejects_bad_values() {
        let config = EngineConfig {
            mesocycle_weeks: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyMesocycle));

        let mut config = EngineConfig::default();
        config.fatigue_mask.stress.weight = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidFatigueFactor {
                factor: "stress",
                field: "weight",
                ..
            })
        ));

        let mut config = EngineConfig::default();
        config.landmarks.size_factor.insert(MuscleGroup::Calves, f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTableValue {
                table: "size_factor",
                ..
            })
        ));
    }
}
