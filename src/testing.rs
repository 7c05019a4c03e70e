//! Deterministic tick pump for tests.
//!
//! Enable with the `test-harness` feature.

use std::time::Duration;

use tokio::time::sleep;

use crate::{TickHandle, Ticker};

const SETTLE: Duration = Duration::from_millis(1);

/// A [`Ticker`] wrapper whose `tick` waits for the runtime to quiesce
/// after publishing, so every driver task has observed the tick before
/// the test continues.
///
/// Settling is a short sleep. Under `#[tokio::test(start_paused = true)]`
/// the clock only advances once all tasks are parked, which makes the
/// sleep a reliable quiescence point and the test instant.
///
/// ```rust,ignore
/// let mut ticker = TestTicker::new();
/// let mut handle = seq.start(&ticker.handle());
/// ticker.tick_many(5, Duration::from_secs(1)).await;
/// assert!(!handle.is_active());
/// ```
pub struct TestTicker {
    ticker: Ticker,
}

impl TestTicker {
    pub fn new() -> Self {
        Self {
            ticker: Ticker::new(),
        }
    }

    pub fn handle(&self) -> TickHandle {
        self.ticker.handle()
    }

    /// Publish one tick of `dt` and wait for drivers to observe it.
    pub async fn tick(&mut self, dt: Duration) {
        self.ticker.advance(dt);
        self.settle().await;
    }

    /// Publish `n` ticks of `dt` each, settling after every one.
    pub async fn tick_many(&mut self, n: usize, dt: Duration) {
        for _ in 0..n {
            self.tick(dt).await;
        }
    }

    /// Let spawned drivers run without publishing a tick.
    pub async fn settle(&self) {
        sleep(SETTLE).await;
    }

    /// Accumulated tick-clock time.
    #[inline]
    pub fn now(&self) -> Duration {
        self.ticker.now()
    }

    /// Ticks published so far.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticker.ticks()
    }
}

impl Default for TestTicker {
    fn default() -> Self {
        Self::new()
    }
}
