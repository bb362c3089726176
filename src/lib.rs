//! GoalSets - Nutrition Goal Set Selection
//!
//! Choose, create, list, and apply named goal sets (diets for a day, meal
//! types for a meal) in a nutrition tracking application. Selection decisions
//! and range rendering are pure; storage is reached through a gateway trait.

pub mod goals;
pub mod picker;
pub mod selection;
pub mod storage;

// Re-export commonly used types
pub use goals::range::BoundRangeFormatter;
pub use goals::types::{Goal, GoalSet, GoalSetType};
pub use picker::goal_set_picker::GoalSetPicker;
pub use selection::controller::SelectionController;
pub use storage::config::AppConfig;
pub use storage::gateway::GoalSetGateway;
