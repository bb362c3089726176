//! Display rows for goal sets and their goals.

use crate::goals::{BoundRangeFormatter, Goal, GoalSet, RangeText, ValueFormatter};

/// One goal line, e.g. "Protein: 20 to 25g".
#[derive(Debug, Clone, PartialEq)]
pub struct GoalRow {
    pub label: String,
    pub range: RangeText,
    /// Rendered muted
    pub is_auto_generated: bool,
}

impl GoalRow {
    pub fn new<F: ValueFormatter>(goal: &Goal, formatter: &BoundRangeFormatter<F>) -> Self {
        Self {
            label: format!("{}:", goal.goal_type.name()),
            range: formatter.format(goal),
            is_auto_generated: goal.is_auto_generated,
        }
    }
}

impl std::fmt::Display for GoalRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.range.is_empty() {
            write!(f, "{}", self.label)
        } else {
            write!(f, "{} {}", self.label, self.range)
        }
    }
}

/// A goal set with its goals.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalSetCell {
    pub emoji: String,
    pub name: String,
    pub goal_count_label: String,
    pub rows: Vec<GoalRow>,
}

impl GoalSetCell {
    pub fn new<F: ValueFormatter>(goal_set: &GoalSet, formatter: &BoundRangeFormatter<F>) -> Self {
        Self {
            emoji: goal_set.emoji.clone(),
            name: goal_set.name.clone(),
            goal_count_label: goal_set.goal_count_label(),
            rows: goal_set
                .goals
                .iter()
                .map(|goal| GoalRow::new(goal, formatter))
                .collect(),
        }
    }

    /// Heading line, e.g. "🍞 Pre-Workout Meal (3 goals)".
    pub fn title(&self) -> String {
        format!("{} {} ({})", self.emoji, self.name, self.goal_count_label)
    }
}

impl std::fmt::Display for GoalSetCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())?;
        for row in &self.rows {
            write!(f, "\n    {}", row)?;
        }
        Ok(())
    }
}

/// A goal set as shown in the picker, with its selection mark.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalSetPickerCell {
    pub cell: GoalSetCell,
    pub is_selected: bool,
    /// Set when a goal depends on workout duration
    pub shows_duration_picker: bool,
}

impl GoalSetPickerCell {
    pub fn new<F: ValueFormatter>(
        goal_set: &GoalSet,
        is_selected: bool,
        formatter: &BoundRangeFormatter<F>,
    ) -> Self {
        Self {
            cell: GoalSetCell::new(goal_set, formatter),
            is_selected,
            shows_duration_picker: goal_set.contains_workout_duration_dependent_goal(),
        }
    }
}

impl std::fmt::Display for GoalSetPickerCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mark = if self.is_selected { "[x]" } else { "[ ]" };
        write!(f, "{} {}", mark, self.cell)
    }
}
