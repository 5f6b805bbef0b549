//! One-shot timers over a virtual millisecond clock.
//!
//! Callbacks that need to repeat (spawn, frame) re-arm themselves after they
//! run. Nothing is ever cancelled; a callback guards itself by checking state.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerEvent {
    SpawnEnemy,
    AdvanceFrame,
    DisableLaser,
}

#[derive(Debug, PartialEq, Eq)]
struct Entry {
    fire_at: u64,
    /// Insertion order; breaks ties so equal deadlines fire FIFO.
    seq: u64,
    event: TimerEvent,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.fire_at, self.seq).cmp(&(other.fire_at, other.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub struct Scheduler {
    queue: BinaryHeap<Reverse<Entry>>,
    now: u64,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Move the clock forward. Going backwards is ignored.
    pub fn advance_to(&mut self, now: u64) {
        self.now = self.now.max(now);
    }

    /// Arm `event` to fire `delay_ms` after the current virtual time.
    pub fn schedule(&mut self, delay_ms: u64, event: TimerEvent) {
        let entry = Entry {
            fire_at: self.now + delay_ms,
            seq: self.next_seq,
            event,
        };
        self.next_seq += 1;
        self.queue.push(Reverse(entry));
    }

    /// Deadline of the earliest pending timer.
    pub fn next_deadline(&self) -> Option<u64> {
        self.queue.peek().map(|Reverse(e)| e.fire_at)
    }

    /// Pop the earliest timer if it is due at or before `now`, moving the
    /// clock to its fire time.
    pub fn pop_due(&mut self, now: u64) -> Option<TimerEvent> {
        match self.queue.peek() {
            Some(Reverse(e)) if e.fire_at <= now => {}
            _ => return None,
        }
        let Reverse(entry) = self.queue.pop()?;
        self.advance_to(entry.fire_at);
        Some(entry.event)
    }

    pub fn pending(&self, event: TimerEvent) -> usize {
        self.queue.iter().filter(|Reverse(e)| e.event == event).count()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_deadline_order() {
        let mut s = Scheduler::new();
        s.schedule(150, TimerEvent::DisableLaser);
        s.schedule(33, TimerEvent::AdvanceFrame);
        s.schedule(2750, TimerEvent::SpawnEnemy);

        assert_eq!(s.next_deadline(), Some(33));
        assert_eq!(s.pop_due(10_000), Some(TimerEvent::AdvanceFrame));
        assert_eq!(s.now(), 33);
        assert_eq!(s.pop_due(10_000), Some(TimerEvent::DisableLaser));
        assert_eq!(s.now(), 150);
        assert_eq!(s.pop_due(10_000), Some(TimerEvent::SpawnEnemy));
        assert!(s.is_empty());
    }

    #[test]
    fn equal_deadlines_fire_fifo() {
        let mut s = Scheduler::new();
        s.schedule(10, TimerEvent::SpawnEnemy);
        s.schedule(10, TimerEvent::AdvanceFrame);
        assert_eq!(s.pop_due(10), Some(TimerEvent::SpawnEnemy));
        assert_eq!(s.pop_due(10), Some(TimerEvent::AdvanceFrame));
    }

    #[test]
    fn nothing_fires_early() {
        let mut s = Scheduler::new();
        s.schedule(33, TimerEvent::AdvanceFrame);
        assert_eq!(s.pop_due(32), None);
        assert_eq!(s.now(), 0);
        assert_eq!(s.pop_due(33), Some(TimerEvent::AdvanceFrame));
    }

    #[test]
    fn reschedule_is_relative_to_fire_time() {
        let mut s = Scheduler::new();
        s.schedule(33, TimerEvent::AdvanceFrame);
        // Driver woke up late; successor still lands on the 33 ms grid.
        assert_eq!(s.pop_due(40), Some(TimerEvent::AdvanceFrame));
        s.schedule(33, TimerEvent::AdvanceFrame);
        assert_eq!(s.next_deadline(), Some(66));
    }

    #[test]
    fn clock_never_goes_backwards() {
        let mut s = Scheduler::new();
        s.advance_to(100);
        s.advance_to(50);
        assert_eq!(s.now(), 100);
    }
}
