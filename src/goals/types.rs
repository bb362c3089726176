//! Goal set type definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::goal_type::GoalType;

/// A named collection of nutritional targets applied to a day or a meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSet {
    /// Unique identifier
    pub id: Uuid,
    /// Whether this set applies to a whole day or a single meal
    #[serde(rename = "type")]
    pub kind: GoalSetType,
    /// Display name
    pub name: String,
    /// Display emoji
    pub emoji: String,
    /// Goals in display order
    pub goals: Vec<Goal>,
    /// Sync state, owned by the persistence layer
    pub sync_status: SyncStatus,
    /// Last modification timestamp, owned by the persistence layer
    pub updated_at: DateTime<Utc>,
    /// Soft-deletion timestamp, owned by the persistence layer
    pub deleted_at: Option<DateTime<Utc>>,
}

impl GoalSet {
    /// Create a new, empty goal set.
    pub fn new(kind: GoalSetType, name: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            name: name.into(),
            emoji: emoji.into(),
            goals: Vec::new(),
            sync_status: SyncStatus::NotSynced,
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    /// Builder-style helper to append a goal.
    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goals.push(goal);
        self
    }

    /// Label shown next to the name, e.g. "3 goals".
    pub fn goal_count_label(&self) -> String {
        let count = self.goals.len();
        if count == 1 {
            "1 goal".to_string()
        } else {
            format!("{} goals", count)
        }
    }

    /// Whether any goal scales with the length of a workout.
    ///
    /// Picker cells show a duration picker for these sets.
    pub fn contains_workout_duration_dependent_goal(&self) -> bool {
        self.goals
            .iter()
            .any(|goal| goal.goal_type.is_workout_duration_dependent())
    }

    /// Whether the persistence layer has soft-deleted this set.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// A single target with optional lower and upper bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// What the goal targets
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    /// Minimum amount, if any
    pub lower_bound: Option<f64>,
    /// Maximum amount, if any
    pub upper_bound: Option<f64>,
    /// Goal was derived by the app rather than entered by the user
    #[serde(default)]
    pub is_auto_generated: bool,
}

impl Goal {
    /// Create a user-entered goal.
    pub fn new(goal_type: GoalType, lower_bound: Option<f64>, upper_bound: Option<f64>) -> Self {
        Self {
            goal_type,
            lower_bound,
            upper_bound,
            is_auto_generated: false,
        }
    }

    /// A goal needs at least one bound to mean anything.
    pub fn has_bounds(&self) -> bool {
        self.lower_bound.is_some() || self.upper_bound.is_some()
    }

    /// Unit string for this goal's amounts.
    pub fn unit_string(&self) -> String {
        self.goal_type.unit_string()
    }
}

/// Target context of a goal set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalSetType {
    /// Applies to a whole day (a diet)
    Day,
    /// Applies to a single meal (a meal type)
    Meal,
}

impl GoalSetType {
    /// Human-readable name of this kind of goal set.
    pub fn description(&self) -> &'static str {
        match self {
            GoalSetType::Day => "Diet",
            GoalSetType::Meal => "Meal Type",
        }
    }

    /// Title for a screen listing this kind, e.g. "Diets".
    pub fn plural_description(&self) -> String {
        format!("{}s", self.description())
    }

    /// Placeholder shown when none of this kind exist.
    pub fn empty_message(&self) -> String {
        format!(
            "You haven't created any {}s",
            self.description().to_lowercase()
        )
    }

    pub fn add_button_title(&self) -> String {
        format!("Add a {}", self.description())
    }
}

impl std::fmt::Display for GoalSetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Sync state of a persisted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SyncStatus {
    /// Local changes not yet pushed
    #[default]
    NotSynced,
    /// Push in flight
    Syncing,
    /// Matches the server copy
    Synced,
}
