use crate::{Progress, Signal, Step};

/// Spans exactly one tick, then completes.
pub struct NextTick {
    pending: bool,
}

impl NextTick {
    pub fn new() -> Self {
        Self { pending: true }
    }
}

impl Default for NextTick {
    fn default() -> Self {
        Self::new()
    }
}

impl Step for NextTick {
    fn drive(&mut self) -> Progress {
        if self.pending {
            self.pending = false;
            Progress::Suspend(Signal::NextTick)
        } else {
            Progress::Done
        }
    }

    fn clone_step(&self) -> Box<dyn Step> {
        Box::new(Self {
            pending: self.pending,
        })
    }

    fn label(&self) -> &'static str {
        "next-tick"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suspends_once_then_completes() {
        let mut step = NextTick::new();
        assert!(matches!(step.drive(), Progress::Suspend(Signal::NextTick)));
        assert!(matches!(step.drive(), Progress::Done));
    }
}
