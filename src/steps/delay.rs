use std::time::Duration;

use crate::{Progress, Signal, Step};

/// Waits the given amount of tick-clock time, then completes.
///
/// Time is measured on the [`Ticker`](crate::Ticker)'s clock, so the wait
/// resolves at a tick boundary. A zero duration still spans one tick.
pub struct Delay {
    duration: Option<Duration>,
}

impl Delay {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration: Some(duration),
        }
    }
}

impl Step for Delay {
    fn drive(&mut self) -> Progress {
        match self.duration.take() {
            Some(d) => Progress::Suspend(Signal::Timer(d)),
            None => Progress::Done,
        }
    }

    fn clone_step(&self) -> Box<dyn Step> {
        Box::new(Self {
            duration: self.duration,
        })
    }

    fn label(&self) -> &'static str {
        "delay"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suspends_once_then_completes() {
        let mut delay = Delay::new(Duration::from_secs(2));
        match delay.drive() {
            Progress::Suspend(Signal::Timer(d)) => assert_eq!(d, Duration::from_secs(2)),
            other => panic!("expected a timer suspension, got {other:?}"),
        }
        assert!(matches!(delay.drive(), Progress::Done));
    }
}
