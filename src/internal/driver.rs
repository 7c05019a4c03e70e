use std::{collections::VecDeque, sync::Arc};

use tokio::sync::watch;

use super::Shared;
use crate::{Outcome, Progress, Signal, Step, Tick};

/// What the boundary gate decided for the upcoming step.
enum Gate {
    Proceed,
    Stopped,
    Detached,
}

/// Per-sequence task. Walks the step list, sampling the control flags at
/// step boundaries and holding on the tick channel while a step is
/// suspended.
pub(crate) struct Driver {
    steps: VecDeque<Box<dyn Step>>,
    shared: Arc<Shared>,
    ticks: watch::Receiver<Tick>,
}

impl Driver {
    pub fn new(
        steps: VecDeque<Box<dyn Step>>,
        shared: Arc<Shared>,
        ticks: watch::Receiver<Tick>,
    ) -> Self {
        Self {
            steps,
            shared,
            ticks,
        }
    }

    pub async fn run(mut self) -> Outcome {
        let outcome = self.consume().await;
        self.steps.clear();
        self.shared.finish();
        tracing::debug!(name = %self.shared.name, ?outcome, "Sequence finished");
        outcome
    }

    async fn consume(&mut self) -> Outcome {
        while let Some(mut step) = self.steps.pop_front() {
            match self.boundary().await {
                Gate::Proceed => {}
                Gate::Stopped => return Outcome::Stopped,
                Gate::Detached => return Outcome::Detached,
            }
            if !self.complete(step.as_mut()).await {
                return Outcome::Detached;
            }
            self.shared.step_done();
            tracing::trace!(name = %self.shared.name, label = step.label(), "Step done");
        }
        Outcome::Completed
    }

    /// Samples the control flags between steps. `active` is re-checked
    /// after every pause wake, so a stop issued while paused never lets
    /// another step begin.
    async fn boundary(&mut self) -> Gate {
        loop {
            if !self.shared.is_active() {
                return Gate::Stopped;
            }
            if !self.shared.is_paused() {
                return Gate::Proceed;
            }
            if self.next_tick().await.is_none() {
                return Gate::Detached;
            }
        }
    }

    /// Drives one step until it reports `Done`. The control flags are
    /// deliberately not sampled in here: an in-flight step always finishes
    /// on its own terms. Returns false if the ticker went away mid-step.
    async fn complete(&mut self, step: &mut dyn Step) -> bool {
        loop {
            match step.drive() {
                Progress::Done => return true,
                Progress::Suspend(signal) => {
                    if !self.pend(signal).await {
                        return false;
                    }
                }
            }
        }
    }

    /// Holds until the signal resolves at a tick boundary. Returns false
    /// if the ticker went away first.
    async fn pend(&mut self, signal: Signal) -> bool {
        match signal {
            Signal::NextTick => self.next_tick().await.is_some(),
            Signal::Timer(duration) => {
                // Saturates: an overlong delay never resolves.
                let deadline = self.ticks.borrow().now.saturating_add(duration);
                loop {
                    match self.next_tick().await {
                        Some(tick) if tick.now >= deadline => return true,
                        Some(_) => {}
                        None => return false,
                    }
                }
            }
            Signal::Until(predicate) => loop {
                match self.next_tick().await {
                    Some(_) if predicate() => return true,
                    Some(_) => {}
                    None => return false,
                }
            },
            Signal::External(handle) => loop {
                match self.next_tick().await {
                    Some(_) if handle.is_complete() => return true,
                    Some(_) => {}
                    None => return false,
                }
            },
        }
    }

    async fn next_tick(&mut self) -> Option<Tick> {
        match self.ticks.changed().await {
            Ok(()) => Some(*self.ticks.borrow_and_update()),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ticker, steps::Action};
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };

    fn driver_for(steps: Vec<Box<dyn Step>>, ticker: &Ticker) -> (Driver, Arc<Shared>) {
        let shared = Arc::new(Shared::new(Arc::from("test"), steps.len()));
        let mut rx = ticker.handle().receiver;
        rx.mark_unchanged();
        (Driver::new(steps.into(), shared.clone(), rx), shared)
    }

    #[tokio::test]
    async fn test_empty_run_completes_without_ticks() {
        let ticker = Ticker::new();
        let (driver, shared) = driver_for(Vec::new(), &ticker);
        assert_eq!(driver.run().await, Outcome::Completed);
        assert!(!shared.is_active());
        assert_eq!(shared.remaining(), 0);
    }

    #[tokio::test]
    async fn test_actions_run_without_ticks() {
        let ticker = Ticker::new();
        let count = Arc::new(AtomicUsize::new(0));
        let steps: Vec<Box<dyn Step>> = (0..3)
            .map(|_| {
                let c = count.clone();
                Box::new(Action::new(move || {
                    c.fetch_add(1, Ordering::SeqCst);
                })) as Box<dyn Step>
            })
            .collect();
        let (driver, shared) = driver_for(steps, &ticker);
        assert_eq!(driver.run().await, Outcome::Completed);
        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert_eq!(shared.remaining(), 0);
    }

    #[tokio::test]
    async fn test_stop_before_run_skips_all_steps() {
        let ticker = Ticker::new();
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        let steps: Vec<Box<dyn Step>> = vec![Box::new(Action::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }))];
        let (driver, shared) = driver_for(steps, &ticker);
        shared.stop();
        assert_eq!(driver.run().await, Outcome::Stopped);
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(shared.remaining(), 0);
    }

    #[tokio::test]
    async fn test_dropped_ticker_detaches_suspended_run() {
        let ticker = Ticker::new();
        let steps: Vec<Box<dyn Step>> =
            vec![Box::new(crate::steps::Delay::new(Duration::from_secs(5)))];
        let (driver, shared) = driver_for(steps, &ticker);
        drop(ticker);
        assert_eq!(driver.run().await, Outcome::Detached);
        assert!(!shared.is_active());
    }
}
