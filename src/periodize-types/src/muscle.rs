use std::{convert::Infallible, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Muscle group a volume landmark is tracked for.
///
/// Unrecognised names are kept as [`MuscleGroup::Other`] instead of being
/// rejected, so callers can track any group and fall back to default tables.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MuscleGroup {
    Chest,
    Back,
    Quads,
    Hamstrings,
    Glutes,
    Shoulders,
    Biceps,
    Triceps,
    Calves,
    Abs,
    Other(String),
}

impl MuscleGroup {
    pub const NAMED: [MuscleGroup; 10] = [
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Quads,
        MuscleGroup::Hamstrings,
        MuscleGroup::Glutes,
        MuscleGroup::Shoulders,
        MuscleGroup::Biceps,
        MuscleGroup::Triceps,
        MuscleGroup::Calves,
        MuscleGroup::Abs,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Quads => "quads",
            MuscleGroup::Hamstrings => "hamstrings",
            MuscleGroup::Glutes => "glutes",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Calves => "calves",
            MuscleGroup::Abs => "abs",
            MuscleGroup::Other(name) => name,
        }
    }

    pub fn is_lower_body(&self) -> bool {
        matches!(
            self,
            MuscleGroup::Quads | MuscleGroup::Hamstrings | MuscleGroup::Glutes | MuscleGroup::Calves
        )
    }
}

impl Display for MuscleGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MuscleGroup {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let group = match name.as_str() {
            "chest" | "pecs" => MuscleGroup::Chest,
            "back" | "lats" => MuscleGroup::Back,
            "quads" | "quadriceps" => MuscleGroup::Quads,
            "hamstrings" | "hams" => MuscleGroup::Hamstrings,
            "glutes" => MuscleGroup::Glutes,
            "shoulders" | "delts" => MuscleGroup::Shoulders,
            "biceps" => MuscleGroup::Biceps,
            "triceps" => MuscleGroup::Triceps,
            "calves" => MuscleGroup::Calves,
            "abs" | "core" => MuscleGroup::Abs,
            _ => MuscleGroup::Other(name),
        };
        Ok(group)
    }
}

impl From<String> for MuscleGroup {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(group) => group,
            Err(never) => match never {},
        }
    }
}

impl From<MuscleGroup> for String {
    fn from(value: MuscleGroup) -> Self {
        value.as_str().to_owned()
    }
}
