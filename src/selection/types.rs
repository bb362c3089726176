//! Selection inputs and outcomes.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::goals::{GoalSet, GoalSetType};

use super::controller::GoalSetError;

/// A day record, returned by the persistence layer after a selection change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub id: Uuid,
    pub date: NaiveDate,
    /// Diet applied to this day
    pub goal_set: Option<GoalSet>,
    pub updated_at: DateTime<Utc>,
}

impl Day {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            goal_set: None,
            updated_at: Utc::now(),
        }
    }
}

/// Reference to a meal on a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayMeal {
    pub id: Uuid,
    pub name: String,
    pub time: NaiveTime,
}

impl DayMeal {
    pub fn new(name: impl Into<String>, time: NaiveTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            time,
        }
    }
}

/// Everything the controller needs to decide what a tap means.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionContext {
    pub target_context: GoalSetType,
    /// Present for day selections
    pub date: Option<NaiveDate>,
    /// Present for meal selections, unless picking inside a meal form
    pub meal: Option<DayMeal>,
    pub current_selection: Option<GoalSet>,
}

impl SelectionContext {
    /// Context for choosing the diet of a day.
    pub fn for_day(date: NaiveDate, current_selection: Option<GoalSet>) -> Self {
        Self {
            target_context: GoalSetType::Day,
            date: Some(date),
            meal: None,
            current_selection,
        }
    }

    /// Context for choosing the meal type of a meal.
    pub fn for_meal(meal: Option<DayMeal>, current_selection: Option<GoalSet>) -> Self {
        Self {
            target_context: GoalSetType::Meal,
            date: None,
            meal,
            current_selection,
        }
    }

    /// Resolve where a selection change lands.
    pub fn target(&self) -> Result<SelectionTarget, GoalSetError> {
        match self.target_context {
            GoalSetType::Day => self
                .date
                .map(SelectionTarget::Day)
                .ok_or(GoalSetError::InvalidContext),
            GoalSetType::Meal => Ok(SelectionTarget::Meal(self.meal.clone())),
        }
    }

    /// Whether `goal_set` is the current selection.
    pub fn is_selected(&self, goal_set: &GoalSet) -> bool {
        self.current_selection
            .as_ref()
            .map(|current| current.id == goal_set.id)
            .unwrap_or(false)
    }
}

/// Record a selection change applies to.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionTarget {
    Day(NaiveDate),
    Meal(Option<DayMeal>),
}

/// What the caller must do in response to a tap.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome {
    /// Persist `goal_set` as the selection for `target`
    Select {
        goal_set: GoalSet,
        target: SelectionTarget,
    },
    /// Clear the selection for `target`
    Deselect { target: SelectionTarget },
    /// Nothing to do
    NoOp,
}

impl SelectionOutcome {
    /// Persistence call the caller has to make, if any.
    ///
    /// Meal selections are not persisted yet.
    pub fn persistence_call(&self) -> Option<PersistenceCall> {
        match self {
            SelectionOutcome::Select {
                goal_set,
                target: SelectionTarget::Day(date),
            } => Some(PersistenceCall::SetGoalSet {
                goal_set: goal_set.clone(),
                date: *date,
            }),
            SelectionOutcome::Deselect {
                target: SelectionTarget::Day(date),
            } => Some(PersistenceCall::RemoveGoalSet { date: *date }),
            _ => None,
        }
    }

    /// Selection after the outcome is applied, given the one before it.
    pub fn resulting_selection(&self, previous: Option<&GoalSet>) -> Option<GoalSet> {
        match self {
            SelectionOutcome::Select { goal_set, .. } => Some(goal_set.clone()),
            SelectionOutcome::Deselect { .. } => None,
            SelectionOutcome::NoOp => previous.cloned(),
        }
    }

    /// Completion to report once persistence (if any) succeeded.
    ///
    /// `day` is the container returned by the persistence layer.
    pub fn completion(&self, day: Option<Day>) -> Option<Completion> {
        match self {
            SelectionOutcome::Select {
                goal_set,
                target: SelectionTarget::Day(_),
            } => Some(Completion {
                goal_set: Some(goal_set.clone()),
                day,
            }),
            SelectionOutcome::Select { goal_set, .. } => Some(Completion {
                goal_set: Some(goal_set.clone()),
                day: None,
            }),
            SelectionOutcome::Deselect { .. } => Some(Completion::cleared()),
            SelectionOutcome::NoOp => None,
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, SelectionOutcome::NoOp)
    }
}

/// A call into the persistence layer.
#[derive(Debug, Clone, PartialEq)]
pub enum PersistenceCall {
    SetGoalSet { goal_set: GoalSet, date: NaiveDate },
    RemoveGoalSet { date: NaiveDate },
}

/// Values handed back to whoever opened the picker.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Completion {
    pub goal_set: Option<GoalSet>,
    pub day: Option<Day>,
}

impl Completion {
    /// Completion for a removed selection.
    pub fn cleared() -> Self {
        Self::default()
    }
}
