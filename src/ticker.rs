use std::time::Duration;

use tokio::{
    select,
    sync::watch,
    time::{self, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;

/// A single published tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tick {
    /// Ticks published so far.
    pub seq: u64,
    /// Accumulated tick-clock time.
    pub now: Duration,
}

/// The tick source all sequences run against.
///
/// Every suspended sequence wakes only when the ticker publishes, so the
/// owner of the ticker decides the cadence of the whole system:
/// - `advance(dt)`: publish one tick by hand. This is the core primitive,
///   suited to game loops, turn-based hosts and tests.
/// - `run(period, token)`: a wall-clock pump that publishes the real
///   elapsed time every `period` until the token is cancelled.
///
/// Sequences register through [`handle`](Ticker::handle). Handles are
/// weak in the ownership sense: they never keep the ticker alive, and
/// dropping the ticker ends every still-running sequence with
/// [`Outcome::Detached`](crate::Outcome::Detached).
///
/// Sequences that miss ticks (a slow host) simply observe the latest one;
/// ticks coalesce rather than queue.
///
/// ```rust,ignore
/// let mut ticker = Ticker::new();
/// let handle = seq.start(&ticker.handle());
/// loop {
///     let dt = frame_time();
///     ticker.advance(dt);
/// }
/// ```
pub struct Ticker {
    sender: watch::Sender<Tick>,
    tick: Tick,
}

impl Ticker {
    pub fn new() -> Self {
        let tick = Tick::default();
        Self {
            sender: watch::Sender::new(tick),
            tick,
        }
    }

    /// Registration point for sequences. Cheap to clone and pass around.
    pub fn handle(&self) -> TickHandle {
        TickHandle {
            receiver: self.sender.subscribe(),
        }
    }

    /// Publish the next tick, moving the tick clock forward by `dt`.
    /// The clock saturates at `Duration::MAX`.
    pub fn advance(&mut self, dt: Duration) {
        self.tick.seq += 1;
        self.tick.now = self.tick.now.saturating_add(dt);
        self.sender.send_replace(self.tick);
    }

    /// Accumulated tick-clock time.
    #[inline]
    pub fn now(&self) -> Duration {
        self.tick.now
    }

    /// Ticks published so far.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.tick.seq
    }

    /// Publish ticks at a fixed wall-clock period until `cancel` fires.
    ///
    /// Each tick carries the real elapsed time since the previous one, so
    /// the tick clock tracks the wall clock even when ticks are missed
    /// (missed ticks are skipped, not replayed). `period` must be
    /// non-zero.
    pub async fn run(&mut self, period: Duration, cancel: CancellationToken) {
        tracing::debug!(?period, "Ticker running");
        let mut interval = time::interval_at(time::Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut last = time::Instant::now();
        loop {
            select! {
                _ = cancel.cancelled() => break,
                at = interval.tick() => {
                    self.advance(at.duration_since(last));
                    last = at;
                }
            }
        }
        tracing::debug!(ticks = self.tick.seq, "Ticker stopped");
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

/// A sequence's registration point on a [`Ticker`].
///
/// Obtained from [`Ticker::handle`] and passed to
/// [`Sequence::start`](crate::Sequence::start). Holding one does not keep
/// the ticker alive.
#[derive(Clone)]
pub struct TickHandle {
    pub(crate) receiver: watch::Receiver<Tick>,
}

impl TickHandle {
    /// The most recently published tick.
    pub fn current(&self) -> Tick {
        *self.receiver.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates_time() {
        let mut ticker = Ticker::new();
        ticker.advance(Duration::from_millis(16));
        ticker.advance(Duration::from_millis(16));
        assert_eq!(ticker.ticks(), 2);
        assert_eq!(ticker.now(), Duration::from_millis(32));
        assert_eq!(ticker.handle().current().seq, 2);
    }

    #[test]
    fn test_advance_saturates_at_the_clock_ceiling() {
        let mut ticker = Ticker::new();
        ticker.advance(Duration::MAX);
        ticker.advance(Duration::from_secs(1));
        assert_eq!(ticker.ticks(), 2);
        assert_eq!(ticker.now(), Duration::MAX);
    }

    #[test]
    fn test_handle_sees_published_ticks() {
        let mut ticker = Ticker::new();
        let handle = ticker.handle();
        assert_eq!(handle.current(), Tick::default());
        ticker.advance(Duration::from_secs(1));
        assert_eq!(handle.current().now, Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_publishes_until_cancelled() {
        let mut ticker = Ticker::new();
        let cancel = CancellationToken::new();
        let c = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(35)).await;
            c.cancel();
        });
        ticker.run(Duration::from_millis(10), cancel).await;
        assert_eq!(ticker.ticks(), 3);
        assert_eq!(ticker.now(), Duration::from_millis(30));
    }
}
