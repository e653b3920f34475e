//! Deferred-action scheduler.
//!
//! All of the game's "later" lives here: overlay flash phases, the mismatch
//! un-reveal, cooldown end, the summary request. Actions are enqueued with a
//! delay and fire when the presentation layer advances the scheduler past
//! their due time. Due actions are returned ordered by due time, then by
//! enqueue order - deferred work fires in the order it was scheduled, which
//! is the only ordering guarantee the engine needs.
//!
//! This is the explicit replacement for nested timeout chains: one queue of
//! `(delay, action)` pairs, driven by one clock.

/// A single scheduled action.
#[derive(Clone, Debug)]
struct Entry<A> {
    due_ms: u64,
    seq: u64,
    action: A,
}

/// Millisecond-resolution queue of deferred actions.
///
/// ## Example
///
/// ```
/// use concentration::schedule::Scheduler;
///
/// let mut scheduler: Scheduler<&str> = Scheduler::new();
/// scheduler.after(300, "flash");
/// scheduler.after(1100, "restore input");
///
/// assert_eq!(scheduler.advance(500), vec!["flash"]);
/// assert_eq!(scheduler.advance(600), vec!["restore input"]);
/// ```
#[derive(Clone, Debug)]
pub struct Scheduler<A> {
    now_ms: u64,
    next_seq: u64,
    queue: Vec<Entry<A>>,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            queue: Vec::new(),
        }
    }
}

impl<A> Scheduler<A> {
    /// Create an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue `action` to fire `delay_ms` from now.
    pub fn after(&mut self, delay_ms: u64, action: A) {
        let entry = Entry {
            due_ms: self.now_ms + delay_ms,
            seq: self.next_seq,
            action,
        };
        self.next_seq += 1;
        self.queue.push(entry);
    }

    /// Advance time by `delta_ms` and return every action now due,
    /// ordered by (due time, enqueue order).
    pub fn advance(&mut self, delta_ms: u64) -> Vec<A> {
        self.now_ms += delta_ms;
        let now = self.now_ms;

        let mut due = Vec::new();
        let mut rest = Vec::new();
        for entry in self.queue.drain(..) {
            if entry.due_ms <= now {
                due.push(entry);
            } else {
                rest.push(entry);
            }
        }
        self.queue = rest;

        due.sort_by_key(|entry| (entry.due_ms, entry.seq));
        due.into_iter().map(|entry| entry.action).collect()
    }

    /// Drop every pending action (replay).
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Number of actions still pending.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Milliseconds advanced so far.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }
}
