//! Testimonial rotation driven by a runtime interval.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

/// Rotation counter shared between the ticker task and request handlers
#[derive(Debug, Default)]
pub struct Rotator {
    tick: AtomicUsize,
}

impl Rotator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self) {
        self.tick.fetch_add(1, Ordering::Relaxed);
    }

    /// Index into a collection of `len` entries, `None` when empty
    pub fn current(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.tick.load(Ordering::Relaxed) % len)
    }
}

/// Advance `rotator` every `period` for the lifetime of the process
pub async fn start_rotation(rotator: Arc<Rotator>, period: Duration) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // First tick completes immediately
    ticker.tick().await;

    loop {
        ticker.tick().await;
        rotator.advance();
        debug!("Rotation advanced");
    }
}
