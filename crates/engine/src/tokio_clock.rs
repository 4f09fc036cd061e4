//! Tokio-backed clock for async hosts.
//!
//! Arming spawns an interval task that sends one [`TickSignal`] per period.
//! The host awaits [`TokioClock::next_tick`] and calls `tick` on the game it
//! owns, so ticks are serialized by that single owner.
//!
//! Every arm starts a new generation. Signals from an earlier generation can
//! still be queued after a disarm; they are dropped on receipt.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::clock::Clock;

/// One clock signal, tagged with the arm generation that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSignal {
    generation: u64,
}

impl TickSignal {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

pub struct TokioClock {
    handle: Handle,
    period: Duration,
    generation: u64,
    tx: mpsc::UnboundedSender<TickSignal>,
    rx: mpsc::UnboundedReceiver<TickSignal>,
    task: Option<JoinHandle<()>>,
}

impl TokioClock {
    /// Create a disarmed clock.
    pub fn new(handle: Handle, period: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            handle,
            period,
            generation: 0,
            tx,
            rx,
            task: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Wait for the next tick of the current arm. Pending while disarmed.
    pub async fn next_tick(&mut self) -> TickSignal {
        loop {
            match self.rx.recv().await {
                Some(signal) if self.is_current(signal) => return signal,
                Some(_) => continue,
                // The clock holds a sender, so the channel never closes.
                None => std::future::pending::<()>().await,
            }
        }
    }

    /// Non-blocking variant of [`TokioClock::next_tick`] for poll loops.
    pub fn try_next_tick(&mut self) -> Option<TickSignal> {
        while let Ok(signal) = self.rx.try_recv() {
            if self.is_current(signal) {
                return Some(signal);
            }
        }
        None
    }

    fn is_current(&self, signal: TickSignal) -> bool {
        self.task.is_some() && signal.generation == self.generation
    }
}

impl Clock for TokioClock {
    fn arm(&mut self) {
        self.disarm();

        self.generation = self.generation.wrapping_add(1);
        let signal = TickSignal {
            generation: self.generation,
        };
        let tx = self.tx.clone();
        let period = self.period;
        self.task = Some(self.handle.spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(signal).is_err() {
                    break;
                }
            }
        }));
    }

    fn disarm(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        while self.rx.try_recv().is_ok() {}
    }

    fn is_armed(&self) -> bool {
        self.task.is_some()
    }
}

impl Drop for TokioClock {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{sleep, timeout};

    const PERIOD: Duration = Duration::from_millis(500);

    #[tokio::test(start_paused = true)]
    async fn armed_clock_ticks_after_one_period() {
        let mut clock = TokioClock::new(Handle::current(), PERIOD);
        let start = Instant::now();
        clock.arm();

        let first = clock.next_tick().await;
        assert_eq!(first.generation(), 1);
        assert!(start.elapsed() >= PERIOD);

        clock.next_tick().await;
        assert!(start.elapsed() >= PERIOD * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn disarmed_clock_is_silent() {
        let mut clock = TokioClock::new(Handle::current(), PERIOD);
        clock.arm();
        clock.next_tick().await;

        clock.disarm();
        assert!(!clock.is_armed());

        let waited = timeout(PERIOD * 4, clock.next_tick()).await;
        assert!(waited.is_err(), "tick arrived after disarm");
    }

    #[tokio::test(start_paused = true)]
    async fn rearm_restarts_the_period() {
        let mut clock = TokioClock::new(Handle::current(), PERIOD);
        clock.arm();
        clock.arm();
        assert!(clock.is_armed());
        assert_eq!(clock.generation(), 2);

        clock.next_tick().await;
        // Only one task is running: no second tick within the same period.
        let extra = timeout(PERIOD / 2, clock.next_tick()).await;
        assert!(extra.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn queued_tick_does_not_survive_rearm() {
        let mut clock = TokioClock::new(Handle::current(), PERIOD);
        clock.arm();

        // Let a tick land in the channel without consuming it.
        sleep(PERIOD + Duration::from_millis(1)).await;

        clock.disarm();
        clock.arm();
        assert_eq!(clock.try_next_tick(), None);

        let early = timeout(PERIOD - Duration::from_millis(1), clock.next_tick()).await;
        assert!(early.is_err(), "tick arrived before a full period");

        let signal = clock.next_tick().await;
        assert_eq!(signal.generation(), clock.generation());
    }

    #[tokio::test(start_paused = true)]
    async fn stale_signal_is_skipped_on_receipt() {
        let mut clock = TokioClock::new(Handle::current(), PERIOD);
        clock.arm();
        let stale = TickSignal {
            generation: clock.generation() - 1,
        };
        clock.tx.send(stale).unwrap();

        assert_eq!(clock.try_next_tick(), None);
    }
}
