//! Tick clock seam.
//!
//! The engine never owns a timer. It tells a [`Clock`] when ticks should flow
//! (`arm`) and when they must stop (`disarm`); the host decides how ticks are
//! produced and calls [`SnakeGame::tick`](crate::SnakeGame::tick) for each one.

use std::time::{Duration, Instant};

/// Arm/disarm hooks implemented by the host's scheduler.
pub trait Clock {
    /// Start (or restart) periodic ticks.
    fn arm(&mut self);

    /// Stop ticks. Must be idempotent.
    fn disarm(&mut self);

    fn is_armed(&self) -> bool;
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn arm(&mut self) {
        (**self).arm()
    }

    fn disarm(&mut self) {
        (**self).disarm()
    }

    fn is_armed(&self) -> bool {
        (**self).is_armed()
    }
}

/// Clock that only records what it was told. Ticks are driven by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualClock {
    armed: bool,
    arm_count: u32,
    disarm_count: u32,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm_count(&self) -> u32 {
        self.arm_count
    }

    pub fn disarm_count(&self) -> u32 {
        self.disarm_count
    }
}

impl Clock for ManualClock {
    fn arm(&mut self) {
        self.armed = true;
        self.arm_count += 1;
    }

    fn disarm(&mut self) {
        self.armed = false;
        self.disarm_count += 1;
    }

    fn is_armed(&self) -> bool {
        self.armed
    }
}

/// Deadline-based clock for poll loops.
///
/// The host asks [`IntervalClock::timeout`] how long it may block on input,
/// then calls [`IntervalClock::poll_due`] to learn whether a tick is due.
#[derive(Debug, Clone)]
pub struct IntervalClock {
    period: Duration,
    next_due: Option<Instant>,
}

impl IntervalClock {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn from_millis(ms: u32) -> Self {
        Self::new(Duration::from_millis(ms as u64))
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left before the next tick, or `None` while disarmed.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|due| due.checked_duration_since(now).unwrap_or(Duration::ZERO))
    }

    /// Consume one due tick, scheduling the next one.
    ///
    /// A late poll yields a single tick; missed ticks are not replayed.
    pub fn poll_due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.period);
                true
            }
            _ => false,
        }
    }

    fn arm_at(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }
}

impl Clock for IntervalClock {
    fn arm(&mut self) {
        self.arm_at(Instant::now());
    }

    fn disarm(&mut self) {
        self.next_due = None;
    }

    fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }
}
