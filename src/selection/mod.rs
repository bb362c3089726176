//! Goal set selection.
//!
//! Pure decision logic for choosing or removing the goal set of a day or a
//! meal, plus the values describing the resulting persistence call and
//! completion.

pub mod controller;
pub mod types;

pub use controller::{GoalSetError, SelectionController};
pub use types::{
    Completion, Day, DayMeal, PersistenceCall, SelectionContext, SelectionOutcome,
    SelectionTarget,
};
