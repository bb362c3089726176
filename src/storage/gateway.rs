//! Persistence boundary for goal sets and day records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::goals::{GoalSet, GoalSetType};
use crate::selection::Day;

/// Body measurements that per-mass and maintenance-relative goals depend on.
///
/// Computing these values happens elsewhere; they are only carried along when
/// a new goal set is saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Lean body mass in kilograms
    pub lean_body_mass_kg: Option<f64>,
    /// Maintenance energy in kcal
    pub maintenance_kcal: Option<f64>,
    pub updated_at: DateTime<Utc>,
}

impl Default for BodyProfile {
    fn default() -> Self {
        Self {
            weight_kg: None,
            lean_body_mass_kg: None,
            maintenance_kcal: None,
            updated_at: Utc::now(),
        }
    }
}

/// Storage operations the goal set screens rely on.
pub trait GoalSetGateway {
    /// All live goal sets of a kind, in display order.
    fn goal_sets(&self, kind: GoalSetType) -> Result<Vec<GoalSet>, GatewayError>;

    /// Apply `goal_set` to the day at `date`, creating the day if needed.
    fn set_goal_set(&mut self, goal_set: &GoalSet, date: NaiveDate) -> Result<Day, GatewayError>;

    /// Clear the goal set of the day at `date`.
    fn remove_goal_set(&mut self, date: NaiveDate) -> Result<(), GatewayError>;

    /// Save a newly authored goal set, and the body profile it was built with.
    fn add_goal_set_and_body_profile(
        &mut self,
        goal_set: &GoalSet,
        body_profile: Option<&BodyProfile>,
    ) -> Result<(), GatewayError>;
}

/// Persistence errors.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Goal set not found: {0}")]
    NotFound(Uuid),
}
