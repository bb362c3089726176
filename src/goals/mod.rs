//! Goal set model.
//!
//! Defines the nutritional targets a user can apply to a day or a meal:
//! - Goal sets (diets and meal types) with their ordered goals
//! - Goal types with their measurement basis and units
//! - Rendering of a goal's lower/upper bounds as display segments

pub mod goal_type;
pub mod range;
pub mod types;

// Re-exports for convenience
pub use goal_type::{
    BodyMassType, EnergyDelta, EnergyGoalType, EnergyUnit, GoalType, Macro, NutrientGoalType,
    NutrientUnit, WeightUnit, WorkoutDurationUnit,
};
pub use range::{BoundRangeFormatter, GoalValueFormatter, RangeSegment, RangeText, ValueFormatter};
pub use types::{Goal, GoalSet, GoalSetType, SyncStatus};
