/// Fixed-cadence tick scheduling.
///
/// The host loop polls a `Ticker` with the current time; when an interval
/// has elapsed the ticker advances the engine once.  A tick that ends the
/// round stops the ticker, and a stopped ticker never fires again.

use std::time::{Duration, Instant};

use crate::engine::GameEngine;
use crate::entities::TickOutcome;
use crate::high_score::ScoreStore;

#[derive(Clone, Debug)]
pub struct Ticker {
    interval: Duration,
    next_due: Instant,
    running: bool,
}

impl Ticker {
    /// First tick is due one interval after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// How long the host may sleep before the next tick is due.
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    /// Returns `true` at most once per interval.  A host that falls behind
    /// fires once and resynchronises instead of bursting.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.running || now < self.next_due {
            return false;
        }
        self.next_due += self.interval;
        if self.next_due <= now {
            self.next_due = now + self.interval;
        }
        true
    }

    /// Tick `engine` if due.  Stops itself when the round ends.
    pub fn drive<S, R>(&mut self, engine: &mut GameEngine<S, R>, now: Instant) -> Option<TickOutcome>
    where
        S: ScoreStore,
        R: rand::Rng,
    {
        if !self.poll(now) {
            return None;
        }
        let outcome = engine.tick();
        if matches!(outcome, TickOutcome::GameOver(_) | TickOutcome::Idle) {
            self.stop();
        }
        Some(outcome)
    }
}
