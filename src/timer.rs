//! Delayed-callback queue for the driving clock
//!
//! "Call me again in N ms" is re-registration on this queue, never a thread.
//! Timers are not cancelled; a callback that fires after the session ended
//! is expected to check the session itself and return without work.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Callbacks the driver knows how to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Run the enemy spawn scheduler
    SpawnEnemies,
}

#[derive(Debug, PartialEq, Eq)]
struct Pending {
    due_ms: u64,
    /// Insertion order; breaks ties between equal deadlines
    seq: u64,
    timer: Timer,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap on (due, seq)
        (other.due_ms, other.seq).cmp(&(self.due_ms, self.seq))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Pending one-shot callbacks ordered by due time
#[derive(Debug, Default)]
pub struct TimerQueue {
    now_ms: u64,
    next_seq: u64,
    pending: BinaryHeap<Pending>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock reading
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Schedule `timer` to fire once, `delay_ms` from now
    pub fn after(&mut self, delay_ms: u64, timer: Timer) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending {
            due_ms: self.now_ms.saturating_add(delay_ms),
            seq,
            timer,
        });
    }

    /// Move the clock forward and pop every timer that is now due, in
    /// deadline order.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<Timer> {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
        let mut due = Vec::new();
        while self.pending.peek().is_some_and(|p| p.due_ms <= self.now_ms) {
            if let Some(p) = self.pending.pop() {
                due.push(p.timer);
            }
        }
        due
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_fires_once_when_due() {
        let mut q = TimerQueue::new();
        q.after(50, Timer::SpawnEnemies);
        assert!(q.advance(20).is_empty());
        assert!(q.advance(20).is_empty());
        assert_eq!(q.advance(20), vec![Timer::SpawnEnemies]);
        assert!(q.advance(1000).is_empty());
        assert_eq!(q.now_ms(), 1060);
    }

    #[test]
    fn test_multiple_due_in_one_advance() {
        let mut q = TimerQueue::new();
        q.after(30, Timer::SpawnEnemies);
        q.after(10, Timer::SpawnEnemies);
        assert_eq!(q.len(), 2);
        assert_eq!(q.advance(40).len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn test_delay_is_relative_to_now() {
        let mut q = TimerQueue::new();
        q.advance(100);
        q.after(10, Timer::SpawnEnemies);
        assert!(q.advance(9).is_empty());
        assert_eq!(q.advance(1).len(), 1);
    }
}
