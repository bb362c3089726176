//! Change notifications emitted by the goal set screens.

use crossbeam::channel::{Receiver, Sender};
use uuid::Uuid;

use crate::goals::GoalSetType;

/// Something changed that other screens may want to react to.
#[derive(Debug, Clone, PartialEq)]
pub enum GoalSetEvent {
    /// The goal set applied to a day or meal changed
    DidUpdateDiet {
        kind: GoalSetType,
        goal_set_id: Option<Uuid>,
    },
    /// A new goal set was saved
    GoalSetAdded { kind: GoalSetType, goal_set_id: Uuid },
}

/// Optional sending half of an event channel.
#[derive(Debug, Default)]
pub struct EventOutlet {
    tx: Option<Sender<GoalSetEvent>>,
}

impl EventOutlet {
    /// Create a channel and keep its sending half. Replaces any earlier one.
    pub fn receiver(&mut self) -> Receiver<GoalSetEvent> {
        let (tx, rx) = crossbeam::channel::unbounded();
        self.tx = Some(tx);
        rx
    }

    /// Send an event if a receiver was requested.
    pub fn send(&self, event: GoalSetEvent) {
        if let Some(tx) = &self.tx {
            if tx.send(event).is_err() {
                tracing::debug!("Goal set event receiver dropped");
            }
        }
    }
}
