//! Result handed back by the goal set form.

use crate::goals::GoalSet;
use crate::storage::BodyProfile;

/// A goal set authored in the form, with any body profile edits made alongside.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGoalSet {
    pub goal_set: GoalSet,
    pub body_profile: Option<BodyProfile>,
}

impl NewGoalSet {
    pub fn new(goal_set: GoalSet) -> Self {
        Self {
            goal_set,
            body_profile: None,
        }
    }

    pub fn with_body_profile(mut self, body_profile: BodyProfile) -> Self {
        self.body_profile = Some(body_profile);
        self
    }
}
