//! Goal set picker state.
//!
//! Backs the screen for choosing the diet of a day or the meal type of a meal.
//! Selection changes are applied optimistically and rolled back when the
//! store rejects them.

use chrono::NaiveDate;
use crossbeam::channel::Receiver;

use crate::goals::{BoundRangeFormatter, GoalSet, GoalSetType, ValueFormatter};
use crate::selection::{
    Completion, DayMeal, GoalSetError, PersistenceCall, SelectionContext, SelectionController,
    SelectionOutcome,
};
use crate::storage::{GatewayError, GoalSetGateway};

use super::cell::GoalSetPickerCell;
use super::events::{EventOutlet, GoalSetEvent};
use super::form::NewGoalSet;

/// State of the goal set picker.
#[derive(Debug)]
pub struct GoalSetPicker {
    kind: GoalSetType,
    date: Option<NaiveDate>,
    meal: Option<DayMeal>,
    allows_selection: bool,
    show_close_button: bool,
    goal_sets: Vec<GoalSet>,
    selected: Option<GoalSet>,
    is_dismissing: bool,
    controller: SelectionController,
    events: EventOutlet,
}

impl GoalSetPicker {
    /// Picker for the diet of the day at `date`.
    pub fn for_day(date: NaiveDate, selected: Option<GoalSet>) -> Self {
        Self::new(GoalSetType::Day, Some(date), None, true, selected)
    }

    /// Picker for the meal type of `meal`.
    ///
    /// `meal` is absent when picking from inside a meal form.
    pub fn for_meal(meal: Option<DayMeal>, selected: Option<GoalSet>) -> Self {
        Self::new(GoalSetType::Meal, None, meal, true, selected)
    }

    /// Read-only listing of goal sets of a kind.
    pub fn browsing(kind: GoalSetType) -> Self {
        Self::new(kind, None, None, false, None)
    }

    fn new(
        kind: GoalSetType,
        date: Option<NaiveDate>,
        meal: Option<DayMeal>,
        allows_selection: bool,
        selected: Option<GoalSet>,
    ) -> Self {
        Self {
            kind,
            date,
            meal,
            allows_selection,
            show_close_button: false,
            goal_sets: Vec::new(),
            selected,
            is_dismissing: false,
            controller: SelectionController::new(),
            events: EventOutlet::default(),
        }
    }

    pub fn with_close_button(mut self, show: bool) -> Self {
        self.show_close_button = show;
        self
    }

    /// Read the goal sets for this picker's kind.
    pub fn load<G: GoalSetGateway>(&mut self, gateway: &G) -> Result<(), GatewayError> {
        self.goal_sets = gateway.goal_sets(self.kind)?;
        tracing::debug!("Loaded {} {} goal sets", self.goal_sets.len(), self.kind);
        Ok(())
    }

    /// Get an event receiver for change notifications.
    pub fn event_receiver(&mut self) -> Receiver<GoalSetEvent> {
        self.events.receiver()
    }

    pub fn kind(&self) -> GoalSetType {
        self.kind
    }

    pub fn goal_sets(&self) -> &[GoalSet] {
        &self.goal_sets
    }

    pub fn selected(&self) -> Option<&GoalSet> {
        self.selected.as_ref()
    }

    pub fn allows_selection(&self) -> bool {
        self.allows_selection
    }

    pub fn show_close_button(&self) -> bool {
        self.show_close_button
    }

    pub fn is_dismissing(&self) -> bool {
        self.is_dismissing
    }

    pub fn is_empty(&self) -> bool {
        self.goal_sets.is_empty()
    }

    /// Current selection state as controller input.
    pub fn context(&self) -> SelectionContext {
        SelectionContext {
            target_context: self.kind,
            date: self.date,
            meal: self.meal.clone(),
            current_selection: self.selected.clone(),
        }
    }

    pub fn navigation_title(&self) -> String {
        if self.allows_selection {
            format!("Choose a {}", self.kind.description())
        } else {
            self.kind.plural_description()
        }
    }

    pub fn empty_message(&self) -> String {
        self.kind.empty_message()
    }

    pub fn add_button_title(&self) -> String {
        self.kind.add_button_title()
    }

    /// The remove button shows while something is selected, until dismissal.
    pub fn shows_remove_button(&self) -> bool {
        self.selected.is_some() && !self.is_dismissing
    }

    pub fn remove_button_title(&self) -> String {
        format!("Remove {}", self.kind.description())
    }

    /// Cells for every goal set, marking the selected one.
    pub fn cells<F: ValueFormatter>(&self, formatter: &BoundRangeFormatter<F>) -> Vec<GoalSetPickerCell> {
        self.goal_sets
            .iter()
            .map(|goal_set| {
                let is_selected = self
                    .selected
                    .as_ref()
                    .map(|selected| selected.id == goal_set.id)
                    .unwrap_or(false);
                GoalSetPickerCell::new(goal_set, is_selected, formatter)
            })
            .collect()
    }

    /// Handle a tap on `goal_set`.
    ///
    /// Returns the completion for whoever opened the picker, or `None` when the
    /// tap changed nothing.
    pub fn tap<G: GoalSetGateway>(
        &mut self,
        goal_set: &GoalSet,
        gateway: &mut G,
    ) -> Result<Option<Completion>, GoalSetError> {
        if !self.allows_selection {
            tracing::debug!("Selection disabled, ignoring tap on {}", goal_set.name);
            return Ok(None);
        }

        let outcome = self.controller.decide(goal_set, &self.context());
        self.apply(outcome, gateway)
    }

    /// Handle the remove button.
    pub fn remove<G: GoalSetGateway>(
        &mut self,
        gateway: &mut G,
    ) -> Result<Option<Completion>, GoalSetError> {
        let outcome = self.controller.remove_selection(&self.context());
        self.apply(outcome, gateway)
    }

    /// Save a goal set coming back from the form and, when this picker
    /// selects, select it straight away.
    pub fn add_goal_set<G: GoalSetGateway>(
        &mut self,
        new: NewGoalSet,
        gateway: &mut G,
    ) -> Result<Option<Completion>, GoalSetError> {
        if let Err(e) = gateway.add_goal_set_and_body_profile(&new.goal_set, new.body_profile.as_ref()) {
            tracing::error!("Error adding goal set {}: {}", new.goal_set.name, e);
            return Err(e.into());
        }

        tracing::info!("Added {} '{}'", self.kind, new.goal_set.name);
        self.events.send(GoalSetEvent::GoalSetAdded {
            kind: self.kind,
            goal_set_id: new.goal_set.id,
        });

        let goal_set = new.goal_set;
        self.goal_sets.push(goal_set.clone());

        if self.allows_selection {
            self.tap(&goal_set, gateway)
        } else {
            Ok(None)
        }
    }

    fn apply<G: GoalSetGateway>(
        &mut self,
        outcome: SelectionOutcome,
        gateway: &mut G,
    ) -> Result<Option<Completion>, GoalSetError> {
        if outcome.is_noop() {
            return Ok(None);
        }

        self.is_dismissing = true;
        let previous = self.selected.take();
        self.selected = outcome.resulting_selection(previous.as_ref());

        let persisted = match outcome.persistence_call() {
            Some(PersistenceCall::SetGoalSet { goal_set, date }) => {
                gateway.set_goal_set(&goal_set, date).map(Some)
            }
            Some(PersistenceCall::RemoveGoalSet { date }) => {
                gateway.remove_goal_set(date).map(|_| None)
            }
            None => Ok(None),
        };

        let day = match persisted {
            Ok(day) => day,
            Err(e) => {
                tracing::error!("Error setting GoalSet: {}", e);
                self.selected = previous;
                self.is_dismissing = false;
                return Err(e.into());
            }
        };

        let goal_set_id = self.selected.as_ref().map(|goal_set| goal_set.id);
        match &self.selected {
            Some(goal_set) => tracing::info!("Selected {} '{}'", self.kind, goal_set.name),
            None => tracing::info!("Removed {}", self.kind),
        }
        self.events.send(GoalSetEvent::DidUpdateDiet {
            kind: self.kind,
            goal_set_id,
        });

        Ok(outcome.completion(day))
    }
}
