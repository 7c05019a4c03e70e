use std::{collections::VecDeque, sync::Arc, time::Duration};

use crate::{
    AsyncHandle, SequenceHandle, Step, TickHandle,
    internal::{Driver, Shared},
    steps::{Action, Delay, ExternalWait, NextTick, Until},
};

/// An ordered list of steps, assembled fluently and run by
/// [`start`](Sequence::start).
///
/// - Append work with `then(callback)` or `then_step(step)`.
/// - Append waits with `delay`, `wait_until`, `wait_next_tick` and
///   `wait_for_handle`.
/// - Compose with `chain(&other)`, which copies the other sequence's
///   steps in at this position.
/// - `start(&tick_handle)` consumes the builder, spawns the driver task
///   and returns a [`SequenceHandle`] for pause/resume/stop.
///
/// Steps run strictly in insertion order, one at a time. A `Sequence` is
/// a template: it can be cloned, and chaining copies rather than moves,
/// so the same steps can back several runs.
///
/// ```rust,ignore
/// let seq = Sequence::named("intro")
///     .then(|| show_banner())
///     .delay(Duration::from_secs(2))
///     .then(|| hide_banner());
/// let mut handle = seq.start(&ticker.handle());
/// ```
///
/// See also: [`SequenceHandle`], [`Ticker`](crate::Ticker),
/// [`crate::steps`].
#[derive(Clone)]
pub struct Sequence {
    name: Arc<str>,
    steps: Vec<Box<dyn Step>>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::named("sequence")
    }

    /// A sequence with a name, used in trace output.
    pub fn named<N: Into<Arc<str>>>(name: N) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Append a callback that runs exactly once, without suspending.
    pub fn then<F>(mut self, effect: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.steps.push(Box::new(Action::new(effect)));
        self
    }

    /// Append a caller-built step.
    pub fn then_step(mut self, step: impl Step) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Append a copy of every step of `other`, in order.
    ///
    /// The copy is taken now: later appends to `other` do not show up
    /// here, and `other` stays independently usable.
    pub fn chain(mut self, other: &Sequence) -> Self {
        self.steps.extend(other.steps.iter().cloned());
        self
    }

    /// Append a wait of `duration` tick-clock time.
    pub fn delay(mut self, duration: Duration) -> Self {
        self.steps.push(Box::new(Delay::new(duration)));
        self
    }

    /// Append a wait until `predicate` reports true.
    pub fn wait_until<P>(mut self, predicate: P) -> Self
    where
        P: Fn() -> bool + Send + Sync + 'static,
    {
        self.steps.push(Box::new(Until::new(predicate)));
        self
    }

    /// Append a wait of exactly one tick.
    pub fn wait_next_tick(mut self) -> Self {
        self.steps.push(Box::new(NextTick::new()));
        self
    }

    /// Append a wait for an operation running outside the sequencer.
    pub fn wait_for_handle<H: AsyncHandle>(mut self, handle: H) -> Self {
        self.steps.push(Box::new(ExternalWait::new(handle)));
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Spawn the driver task and hand back the control handle.
    ///
    /// The run wakes only on ticks published after this call. Dropping
    /// the handle detaches the run rather than ending it; dropping the
    /// ticker ends it with [`Outcome::Detached`](crate::Outcome::Detached).
    pub fn start(self, ticks: &TickHandle) -> SequenceHandle {
        let mut receiver = ticks.receiver.clone();
        receiver.mark_unchanged();
        let shared = Arc::new(Shared::new(self.name, self.steps.len()));
        let steps: VecDeque<_> = self.steps.into();
        tracing::debug!(name = %shared.name, steps = steps.len(), "Sequence started");
        let task = tokio::spawn(Driver::new(steps, shared.clone(), receiver).run());
        SequenceHandle::new(shared, task)
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}
