//! Cancellable one-shot timers over a logical clock

use std::time::{Duration, Instant};

/// Handle for cancelling a scheduled timer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct TimerEntry {
    id: TimerId,
    deadline: Instant,
}

/// Pending one-shot timers. `poll` drains everything due at or before `now`
/// in deadline order; a cancelled timer never fires.
#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    timers: Vec<TimerEntry>,
}

impl Scheduler {
    pub fn new() -> Self {
        Scheduler::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.timers.push(TimerEntry {
            id,
            deadline: now + delay,
        });
        id
    }

    pub fn cancel(&mut self, id: TimerId) {
        self.timers.retain(|t| t.id != id);
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    /// Remove and return every timer due at or before `now`, earliest first
    pub fn poll(&mut self, now: Instant) -> Vec<TimerId> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.timers.drain(..).partition(|t| t.deadline <= now);
        self.timers = pending;
        due.sort_by_key(|t| t.deadline);
        due.into_iter().map(|t| t.id).collect()
    }
}
