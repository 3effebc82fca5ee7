//! Page-relative timer queue and debouncer
//!
//! All timed behaviour on the page (toast lifecycle, debounce windows,
//! typewriter steps) is scheduled here instead of on wall-clock callbacks.
//! Time is a `Duration` measured from page load, so handlers stay
//! deterministic and tests can step time explicitly.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Handle to a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Ordered queue of pending timer events
#[derive(Debug)]
pub struct TimerQueue<E> {
    now: Duration,
    next_id: u64,
    /// Pending events keyed by (deadline, id) so equal deadlines fire in schedule order
    pending: BTreeMap<(Duration, TimerId), E>,
    deadlines: HashMap<TimerId, Duration>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }

    /// Current page time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `event` to fire `delay` from now
    pub fn schedule(&mut self, delay: Duration, event: impl Into<E>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let deadline = self.now + delay;
        self.pending.insert((deadline, id), event.into());
        self.deadlines.insert(id, deadline);
        id
    }

    /// Cancel a pending timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.deadlines.remove(&id) {
            Some(deadline) => self.pending.remove(&(deadline, id)).is_some(),
            None => false,
        }
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Deadline of the earliest pending timer
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to its deadline.
    ///
    /// Callers loop on this so that timers scheduled by a fired handler are
    /// still picked up in deadline order within the same advance.
    pub fn pop_due(&mut self, until: Duration) -> Option<E> {
        let key = *self.pending.keys().next()?;
        if key.0 > until {
            return None;
        }
        let event = self.pending.remove(&key)?;
        self.deadlines.remove(&key.1);
        self.now = self.now.max(key.0);
        Some(event)
    }

    /// Move the clock forward without firing anything. Never moves backwards.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}

/// Holds at most one pending timer; scheduling again cancels the previous one
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<TimerId>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `event` after the quiet period, dropping any earlier pending one
    pub fn schedule<E>(&mut self, timers: &mut TimerQueue<E>, event: impl Into<E>) -> TimerId {
        self.cancel(timers);
        let id = timers.schedule(self.delay, event);
        self.pending = Some(id);
        id
    }

    pub fn cancel<E>(&mut self, timers: &mut TimerQueue<E>) {
        if let Some(id) = self.pending.take() {
            timers.cancel(id);
        }
    }

    /// Mark the pending timer as consumed; call when it fires
    pub fn fired(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
