use std::time::{Duration, Instant};

/// Keeps the loop at or below the target tick rate
pub trait Pacer {
    /// Block until the current tick's time slot is over
    fn wait(&mut self);
}

/// Frame-rate cap: sleeps away whatever is left of each tick interval
#[derive(Debug)]
pub struct FramePacer {
    interval: Duration,
    last: Option<Instant>,
}

impl FramePacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Time left in the current slot at `now`
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last {
            Some(last) => self.interval.saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }
}

impl Pacer for FramePacer {
    fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.last = Some(Instant::now());
    }
}
