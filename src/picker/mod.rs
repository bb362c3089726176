//! Goal set screens.
//!
//! UI-facing state for choosing and managing goal sets:
//! - The picker that applies a diet to a day or a meal type to a meal
//! - The management list with delayed refresh after store updates
//! - Display cells built from goal sets and their ranges

pub mod cell;
pub mod events;
pub mod form;
pub mod goal_set_picker;
pub mod list;
pub mod refresh;

// Re-exports for convenience
pub use cell::{GoalRow, GoalSetCell, GoalSetPickerCell};
pub use events::{EventOutlet, GoalSetEvent};
pub use form::NewGoalSet;
pub use goal_set_picker::GoalSetPicker;
pub use list::GoalSetsList;
pub use refresh::RefreshDebouncer;
