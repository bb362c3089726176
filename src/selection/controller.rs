//! Goal set selection state machine.
//!
//! Tapping the active goal set removes it; tapping any other goal set selects
//! it. The controller only describes the change, callers perform it.

use thiserror::Error;

use crate::goals::GoalSet;
use crate::storage::GatewayError;

use super::types::{SelectionContext, SelectionOutcome};

/// Decides selection changes for a day or a meal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionController;

impl SelectionController {
    pub fn new() -> Self {
        Self
    }

    /// Decide what tapping `tapped` does in `context`.
    pub fn decide(&self, tapped: &GoalSet, context: &SelectionContext) -> SelectionOutcome {
        let target = match context.target() {
            Ok(target) => target,
            Err(e) => {
                tracing::debug!("Ignoring tap on goal set {}: {}", tapped.id, e);
                return SelectionOutcome::NoOp;
            }
        };

        if context.is_selected(tapped) {
            SelectionOutcome::Deselect { target }
        } else {
            SelectionOutcome::Select {
                goal_set: tapped.clone(),
                target,
            }
        }
    }

    /// Decide what removing the current selection does.
    pub fn remove_selection(&self, context: &SelectionContext) -> SelectionOutcome {
        match &context.current_selection {
            Some(current) => self.decide(current, context),
            None => SelectionOutcome::NoOp,
        }
    }
}

/// Goal set selection errors.
#[derive(Debug, Error)]
pub enum GoalSetError {
    #[error("Persistence failure: {0}")]
    PersistenceFailure(#[from] GatewayError),

    #[error("Invalid context: day selection without a date")]
    InvalidContext,
}
