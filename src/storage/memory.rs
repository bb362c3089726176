//! In-memory goal set store.
//!
//! Backs the demo binary and tests. Write failures can be switched on to
//! exercise error paths.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};

use crate::goals::{GoalSet, GoalSetType};
use crate::selection::Day;

use super::gateway::{BodyProfile, GatewayError, GoalSetGateway};

/// Goal set store held in memory.
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    goal_sets: Vec<GoalSet>,
    days: BTreeMap<NaiveDate, Day>,
    body_profile: Option<BodyProfile>,
    fail_writes: bool,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with goal sets.
    pub fn with_goal_sets(goal_sets: Vec<GoalSet>) -> Self {
        Self {
            goal_sets,
            ..Default::default()
        }
    }

    /// Make every write fail with a storage error.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Day record for a date, if one exists.
    pub fn day(&self, date: NaiveDate) -> Option<&Day> {
        self.days.get(&date)
    }

    /// Last saved body profile.
    pub fn body_profile(&self) -> Option<&BodyProfile> {
        self.body_profile.as_ref()
    }

    /// Soft-delete a goal set.
    pub fn delete_goal_set(&mut self, id: uuid::Uuid) -> Result<(), GatewayError> {
        self.check_writable()?;

        let goal_set = self
            .goal_sets
            .iter_mut()
            .find(|goal_set| goal_set.id == id)
            .ok_or(GatewayError::NotFound(id))?;

        let now = Utc::now();
        goal_set.deleted_at = Some(now);
        goal_set.updated_at = now;
        Ok(())
    }

    fn check_writable(&self) -> Result<(), GatewayError> {
        if self.fail_writes {
            return Err(GatewayError::Storage("writes are disabled".to_string()));
        }
        Ok(())
    }
}

impl GoalSetGateway for InMemoryGateway {
    fn goal_sets(&self, kind: GoalSetType) -> Result<Vec<GoalSet>, GatewayError> {
        Ok(self
            .goal_sets
            .iter()
            .filter(|goal_set| goal_set.kind == kind && !goal_set.is_deleted())
            .cloned()
            .collect())
    }

    fn set_goal_set(&mut self, goal_set: &GoalSet, date: NaiveDate) -> Result<Day, GatewayError> {
        self.check_writable()?;

        let day = self.days.entry(date).or_insert_with(|| Day::new(date));
        day.goal_set = Some(goal_set.clone());
        day.updated_at = Utc::now();

        Ok(day.clone())
    }

    fn remove_goal_set(&mut self, date: NaiveDate) -> Result<(), GatewayError> {
        self.check_writable()?;

        match self.days.get_mut(&date) {
            Some(day) => {
                day.goal_set = None;
                day.updated_at = Utc::now();
            }
            None => tracing::warn!("No day on {} to remove a goal set from", date),
        }

        Ok(())
    }

    fn add_goal_set_and_body_profile(
        &mut self,
        goal_set: &GoalSet,
        body_profile: Option<&BodyProfile>,
    ) -> Result<(), GatewayError> {
        self.check_writable()?;

        match self.goal_sets.iter_mut().find(|existing| existing.id == goal_set.id) {
            Some(existing) => *existing = goal_set.clone(),
            None => self.goal_sets.push(goal_set.clone()),
        }

        if let Some(profile) = body_profile {
            self.body_profile = Some(profile.clone());
        }

        Ok(())
    }
}
