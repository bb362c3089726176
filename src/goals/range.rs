//! Rendering of a goal's bounds as display segments.
//!
//! A goal with only a lower bound reads "at least 1g", one with only an upper
//! bound reads "below 500kcal", and one with both reads "20 to 25g". The unit
//! is attached to the final amount only, with no space between them.

use serde::{Deserialize, Serialize};

use super::types::Goal;

/// Qualifier shown before a lone lower bound.
pub const AT_LEAST: &str = "at least";
/// Qualifier shown before a lone upper bound.
pub const BELOW: &str = "below";
/// Separator between a lower and an upper bound.
pub const TO: &str = "to";

/// One piece of a rendered range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeSegment {
    /// Connective text such as "at least"
    Qualifier(String),
    /// A formatted number
    Amount(String),
    /// Unit of the preceding amount
    Unit(String),
}

impl RangeSegment {
    pub fn text(&self) -> &str {
        match self {
            RangeSegment::Qualifier(text)
            | RangeSegment::Amount(text)
            | RangeSegment::Unit(text) => text,
        }
    }
}

/// Ordered segments describing a goal's range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeText {
    pub segments: Vec<RangeSegment>,
}

impl RangeText {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment texts in order.
    pub fn texts(&self) -> Vec<&str> {
        self.segments.iter().map(RangeSegment::text).collect()
    }

    fn qualifier(&mut self, text: &str) {
        self.segments.push(RangeSegment::Qualifier(text.to_string()));
    }

    fn amount(&mut self, text: String, unit: Option<&str>) {
        self.segments.push(RangeSegment::Amount(text));
        if let Some(unit) = unit {
            self.segments.push(RangeSegment::Unit(unit.to_string()));
        }
    }
}

impl std::fmt::Display for RangeText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 && !matches!(segment, RangeSegment::Unit(_)) {
                write!(f, " ")?;
            }
            write!(f, "{}", segment.text())?;
        }
        Ok(())
    }
}

/// Turns a goal amount into display text.
pub trait ValueFormatter {
    fn format_value(&self, value: f64) -> String;
}

/// Default amount formatting: round to a fixed number of fraction digits and
/// drop trailing zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalValueFormatter {
    pub max_fraction_digits: usize,
}

impl Default for GoalValueFormatter {
    fn default() -> Self {
        Self {
            max_fraction_digits: 1,
        }
    }
}

impl GoalValueFormatter {
    pub fn new(max_fraction_digits: usize) -> Self {
        Self {
            max_fraction_digits,
        }
    }
}

impl ValueFormatter for GoalValueFormatter {
    fn format_value(&self, value: f64) -> String {
        let mut text = format!("{:.*}", self.max_fraction_digits, value);
        if text.contains('.') {
            let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
            text.truncate(trimmed);
        }
        // Small negatives round to "-0"
        if text == "-0" {
            text = "0".to_string();
        }
        text
    }
}

/// Decides which range phrasing a goal gets.
pub struct BoundRangeFormatter<F = GoalValueFormatter> {
    values: F,
}

impl BoundRangeFormatter {
    /// Range formatter with the default amount formatting.
    pub fn standard() -> Self {
        Self::new(GoalValueFormatter::default())
    }
}

impl Default for BoundRangeFormatter {
    fn default() -> Self {
        Self::standard()
    }
}

impl<F: ValueFormatter> BoundRangeFormatter<F> {
    /// Create a range formatter using the given number formatting.
    pub fn new(values: F) -> Self {
        Self { values }
    }

    /// Render a goal's bounds using the unit of its goal type.
    pub fn format(&self, goal: &Goal) -> RangeText {
        self.format_bounds(goal.lower_bound, goal.upper_bound, &goal.unit_string())
    }

    /// Render an explicit bound pair with the given unit.
    pub fn format_bounds(&self, lower: Option<f64>, upper: Option<f64>, unit: &str) -> RangeText {
        let mut text = RangeText::default();

        match (lower, upper) {
            (Some(lower), None) => {
                text.qualifier(AT_LEAST);
                text.amount(self.values.format_value(lower), Some(unit));
            }
            (None, Some(upper)) => {
                text.qualifier(BELOW);
                text.amount(self.values.format_value(upper), Some(unit));
            }
            (Some(lower), Some(upper)) => {
                text.amount(self.values.format_value(lower), None);
                text.qualifier(TO);
                text.amount(self.values.format_value(upper), Some(unit));
            }
            (None, None) => {}
        }

        text
    }
}
