//! Single-threaded timer queue.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::cards::SlotIndex;

/// A deferred state change and the data it needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduledTask {
    /// End of the intro reveal: hide every unmatched slot, open input.
    IntroHide,

    /// End of a mismatch: hide both slots, open input.
    MismatchHide { first: SlotIndex, second: SlotIndex },
}

/// A task with the clock time it becomes due.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingTask {
    pub due: f64,
    pub task: ScheduledTask,
}

/// Timer queue driven by an external clock.
///
/// Tasks fire in due order; tasks due at the same time fire in the order
/// they were scheduled. There is no cancellation.
///
/// ```
/// use memory_match::schedule::{Scheduler, ScheduledTask};
///
/// let mut scheduler = Scheduler::new();
/// scheduler.schedule(2.0, ScheduledTask::IntroHide);
///
/// assert!(scheduler.advance(1.5).is_empty());
/// assert_eq!(scheduler.advance(0.5), vec![ScheduledTask::IntroHide]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: f64,
    pending: VecDeque<PendingTask>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock time.
    #[must_use]
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Queue `task` to fire `delay` time-units from now.
    pub fn schedule(&mut self, delay: f64, task: ScheduledTask) {
        let due = self.now + delay.max(0.0);
        let position = self
            .pending
            .iter()
            .position(|p| p.due > due)
            .unwrap_or(self.pending.len());
        self.pending.insert(position, PendingTask { due, task });
    }

    /// Move the clock forward and return every task that came due.
    pub fn advance(&mut self, dt: f64) -> Vec<ScheduledTask> {
        self.now += dt.max(0.0);
        let mut due = Vec::new();
        while let Some(next) = self.pending.front() {
            if next.due > self.now {
                break;
            }
            if let Some(next) = self.pending.pop_front() {
                due.push(next.task);
            }
        }
        due
    }

    /// Outstanding tasks, soonest first.
    pub fn pending(&self) -> impl Iterator<Item = &PendingTask> {
        self.pending.iter()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop every outstanding task.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
