//! What a goal targets and how its amounts are measured.

use serde::{Deserialize, Serialize};

/// Metric a goal targets, together with its measurement basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalType {
    /// Dietary energy
    Energy(EnergyGoalType),
    /// A macronutrient
    Macro(NutrientGoalType, Macro),
    /// A micronutrient, identified by name
    Micro(NutrientGoalType, String, NutrientUnit),
}

impl GoalType {
    /// Label text for the goal, e.g. "Protein".
    pub fn name(&self) -> &str {
        match self {
            GoalType::Energy(_) => "Energy",
            GoalType::Macro(_, macro_) => macro_.display_name(),
            GoalType::Micro(_, name, _) => name.as_str(),
        }
    }

    /// Unit string attached to the final amount of a rendered range.
    pub fn unit_string(&self) -> String {
        match self {
            GoalType::Energy(energy) => energy.unit_string(),
            GoalType::Macro(basis, _) => basis.unit_string(NutrientUnit::G),
            GoalType::Micro(basis, _, unit) => basis.unit_string(*unit),
        }
    }

    /// Whether the goal amount scales with workout duration.
    pub fn is_workout_duration_dependent(&self) -> bool {
        match self {
            GoalType::Energy(_) => false,
            GoalType::Macro(basis, _) | GoalType::Micro(basis, _, _) => {
                matches!(basis, NutrientGoalType::QuantityPerWorkoutDuration(_))
            }
        }
    }
}

impl std::fmt::Display for GoalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Measurement basis for an energy goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnergyGoalType {
    /// Absolute amount
    Fixed(EnergyUnit),
    /// Absolute offset from maintenance energy
    FromMaintenance(EnergyUnit, EnergyDelta),
    /// Percentage offset from maintenance energy
    PercentFromMaintenance(EnergyDelta),
}

impl EnergyGoalType {
    fn unit_string(&self) -> String {
        match self {
            EnergyGoalType::Fixed(unit) => unit.short_name().to_string(),
            EnergyGoalType::FromMaintenance(unit, delta) => {
                format!("{} {}", unit.short_name(), delta.description())
            }
            EnergyGoalType::PercentFromMaintenance(delta) => {
                format!("% {}", delta.description())
            }
        }
    }
}

/// Energy unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnergyUnit {
    Kcal,
    Kj,
}

impl EnergyUnit {
    pub fn short_name(&self) -> &'static str {
        match self {
            EnergyUnit::Kcal => "kcal",
            EnergyUnit::Kj => "kJ",
        }
    }
}

/// Direction of an offset from maintenance energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnergyDelta {
    Surplus,
    Deficit,
}

impl EnergyDelta {
    pub fn description(&self) -> &'static str {
        match self {
            EnergyDelta::Surplus => "above maintenance",
            EnergyDelta::Deficit => "below maintenance",
        }
    }
}

/// Measurement basis for a nutrient goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NutrientGoalType {
    /// Absolute amount
    Fixed,
    /// Amount per unit of body mass
    QuantityPerBodyMass(BodyMassType, WeightUnit),
    /// Share of total energy
    PercentageOfEnergy,
    /// Amount per unit of workout time
    QuantityPerWorkoutDuration(WorkoutDurationUnit),
}

impl NutrientGoalType {
    fn unit_string(&self, nutrient_unit: NutrientUnit) -> String {
        let unit = nutrient_unit.short_name();
        match self {
            NutrientGoalType::Fixed => unit.to_string(),
            NutrientGoalType::QuantityPerBodyMass(BodyMassType::Weight, weight) => {
                format!("{}/{}", unit, weight.short_name())
            }
            NutrientGoalType::QuantityPerBodyMass(BodyMassType::LeanMass, weight) => {
                format!("{}/{} LBM", unit, weight.short_name())
            }
            NutrientGoalType::PercentageOfEnergy => "%".to_string(),
            NutrientGoalType::QuantityPerWorkoutDuration(duration) => {
                format!("{}/{}", unit, duration.short_name())
            }
        }
    }
}

/// Which body mass a per-mass goal is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyMassType {
    Weight,
    LeanMass,
}

/// Body mass unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WeightUnit {
    Kg,
    Lb,
}

impl WeightUnit {
    pub fn short_name(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lb => "lb",
        }
    }
}

/// Workout time unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorkoutDurationUnit {
    Min,
    Hour,
}

impl WorkoutDurationUnit {
    pub fn short_name(&self) -> &'static str {
        match self {
            WorkoutDurationUnit::Min => "min",
            WorkoutDurationUnit::Hour => "h",
        }
    }
}

/// Mass unit of a nutrient amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NutrientUnit {
    G,
    Mg,
    Mcg,
    Iu,
}

impl NutrientUnit {
    pub fn short_name(&self) -> &'static str {
        match self {
            NutrientUnit::G => "g",
            NutrientUnit::Mg => "mg",
            NutrientUnit::Mcg => "mcg",
            NutrientUnit::Iu => "IU",
        }
    }
}

/// Macronutrient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Macro {
    Carb,
    Fat,
    Protein,
}

impl Macro {
    pub fn display_name(&self) -> &'static str {
        match self {
            Macro::Carb => "Carb",
            Macro::Fat => "Fat",
            Macro::Protein => "Protein",
        }
    }
}
