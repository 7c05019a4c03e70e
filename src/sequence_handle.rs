use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::{Error, Outcome, Result, internal::Shared};

/// Control surface for a started sequence.
///
/// - `pause()` / `resume()`: hold and release the run at step boundaries.
/// - `stop()`: end the run at the next step boundary; remaining steps are
///   dropped.
/// - `join()`: await the driver task and learn the [`Outcome`].
/// - `is_active()`, `is_paused()`, `remaining()`, `name()`: observe state.
///
/// All controls are fire-and-forget flag writes. None of them interrupts
/// the step currently in flight: a pause or stop issued mid-step takes
/// effect once that step finishes. A pause or stop issued while the run
/// is already over does nothing.
///
/// Dropping the handle detaches the run; it keeps going as long as its
/// ticker does.
pub struct SequenceHandle {
    shared: Arc<Shared>,
    task: Option<JoinHandle<Outcome>>,
    outcome: Option<Outcome>,
}

impl SequenceHandle {
    pub(crate) fn new(shared: Arc<Shared>, task: JoinHandle<Outcome>) -> Self {
        Self {
            shared,
            task: Some(task),
            outcome: None,
        }
    }

    /// The name given at build time.
    #[inline]
    pub fn name(&self) -> &str {
        &self.shared.name
    }

    /// Whether the run is still going (not finished, stopped or detached).
    #[inline]
    pub fn is_active(&self) -> bool {
        self.shared.is_active()
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.shared.is_paused()
    }

    /// Steps not yet completed. Zero once the run is over, however it
    /// ended.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.shared.remaining()
    }

    /// Hold the run at the next step boundary.
    pub fn pause(&self) {
        self.shared.pause();
    }

    /// Let a paused run proceed. Takes effect at the next tick.
    pub fn resume(&self) {
        self.shared.resume();
    }

    /// End the run at the next step boundary. The in-flight step, if any,
    /// still finishes; everything after it is dropped.
    pub fn stop(&self) {
        self.shared.stop();
    }

    /// Await the end of the run and report how it ended.
    ///
    /// If a step effect panicked, the first call returns the join error
    /// and later calls report [`Outcome::Failed`]. Calling again after a
    /// normal end returns the same outcome.
    ///
    /// A run that is waiting on ticks only ends once those ticks are
    /// published (or the ticker is dropped), so keep the ticker going
    /// while joining.
    pub async fn join(&mut self) -> Result<Outcome> {
        if let Some(task) = self.task.take() {
            match task.await {
                Ok(outcome) => self.outcome = Some(outcome),
                Err(e) => {
                    self.shared.finish();
                    self.outcome = Some(Outcome::Failed);
                    return Err(Error::Driver(e));
                }
            }
        }
        Ok(self.outcome.unwrap_or(Outcome::Failed))
    }
}
