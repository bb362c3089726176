//! Goal set management list.
//!
//! Lists every goal set of a kind without selecting any, lets the user add
//! new ones, and re-reads the store a short while after it reports a change.

use chrono::{DateTime, Duration, Utc};

use crate::goals::{BoundRangeFormatter, GoalSet, GoalSetType, ValueFormatter};
use crate::storage::{GatewayError, GoalSetGateway};

use super::cell::GoalSetCell;
use super::form::NewGoalSet;
use super::refresh::RefreshDebouncer;

/// State of the goal set list.
#[derive(Debug)]
pub struct GoalSetsList {
    kind: GoalSetType,
    goal_sets: Vec<GoalSet>,
    refresh: RefreshDebouncer,
}

impl GoalSetsList {
    pub fn new(kind: GoalSetType, refresh_delay: Duration) -> Self {
        Self {
            kind,
            goal_sets: Vec::new(),
            refresh: RefreshDebouncer::new(refresh_delay),
        }
    }

    /// Read the goal sets for this list's kind.
    pub fn load<G: GoalSetGateway>(&mut self, gateway: &G) -> Result<(), GatewayError> {
        self.goal_sets = gateway.goal_sets(self.kind)?;
        Ok(())
    }

    pub fn kind(&self) -> GoalSetType {
        self.kind
    }

    pub fn goal_sets(&self) -> &[GoalSet] {
        &self.goal_sets
    }

    pub fn is_empty(&self) -> bool {
        self.goal_sets.is_empty()
    }

    pub fn navigation_title(&self) -> String {
        self.kind.plural_description()
    }

    pub fn empty_message(&self) -> String {
        self.kind.empty_message()
    }

    pub fn add_button_title(&self) -> String {
        self.kind.add_button_title()
    }

    pub fn cells<F: ValueFormatter>(&self, formatter: &BoundRangeFormatter<F>) -> Vec<GoalSetCell> {
        self.goal_sets
            .iter()
            .map(|goal_set| GoalSetCell::new(goal_set, formatter))
            .collect()
    }

    /// Save a goal set coming back from the form and append it.
    pub fn add_goal_set<G: GoalSetGateway>(
        &mut self,
        new: NewGoalSet,
        gateway: &mut G,
    ) -> Result<(), GatewayError> {
        gateway
            .add_goal_set_and_body_profile(&new.goal_set, new.body_profile.as_ref())
            .map_err(|e| {
                tracing::error!("Error adding goal set {}: {}", new.goal_set.name, e);
                e
            })?;

        self.goal_sets.push(new.goal_set);
        Ok(())
    }

    /// Note that the store announced a change at `now`.
    pub fn notify_updated(&mut self, now: DateTime<Utc>) {
        self.refresh.notify(now);
    }

    pub fn is_refresh_pending(&self) -> bool {
        self.refresh.is_pending()
    }

    /// Re-read goal sets if a change notification has waited long enough.
    ///
    /// Returns whether a refresh happened. A failed read keeps the refresh
    /// pending so the next poll tries again.
    pub fn refresh_if_due<G: GoalSetGateway>(
        &mut self,
        now: DateTime<Utc>,
        gateway: &G,
    ) -> Result<bool, GatewayError> {
        if !self.refresh.is_due(now) {
            return Ok(false);
        }

        self.load(gateway)?;
        self.refresh.take_due(now);
        tracing::debug!("Refreshed {} {} goal sets", self.goal_sets.len(), self.kind);
        Ok(true)
    }
}
