use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

/// Control state shared between a [`SequenceHandle`](crate::SequenceHandle)
/// and its driver task. All mutation is fire-and-forget flag writes; the
/// driver observes them cooperatively at step boundaries.
pub(crate) struct Shared {
    pub(crate) name: Arc<str>,
    active: AtomicBool,
    paused: AtomicBool,
    remaining: AtomicUsize,
}

impl Shared {
    pub fn new(name: Arc<str>, steps: usize) -> Self {
        Self {
            name,
            active: AtomicBool::new(true),
            paused: AtomicBool::new(false),
            remaining: AtomicUsize::new(steps),
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Only an active sequence counts as paused, so a terminal run never
    /// reads as paused even if a `pause` raced its completion.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.is_active() && self.paused.load(Ordering::Acquire)
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::Acquire)
    }

    pub fn pause(&self) {
        if self.is_active() {
            self.paused.store(true, Ordering::Release);
        }
    }

    pub fn resume(&self) {
        self.paused.store(false, Ordering::Release);
    }

    pub fn stop(&self) {
        self.active.store(false, Ordering::Release);
        self.paused.store(false, Ordering::Release);
    }

    pub fn step_done(&self) {
        self.remaining.fetch_sub(1, Ordering::AcqRel);
    }

    /// Terminal transition: no steps left, no flags set.
    pub fn finish(&self) {
        self.remaining.store(0, Ordering::Release);
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pause_after_stop_is_inert() {
        let shared = Shared::new(Arc::from("test"), 3);
        shared.stop();
        shared.pause();
        assert!(!shared.is_active());
        assert!(!shared.is_paused());
    }

    #[test]
    fn test_finish_clears_everything() {
        let shared = Shared::new(Arc::from("test"), 3);
        shared.pause();
        shared.finish();
        assert!(!shared.is_active());
        assert!(!shared.is_paused());
        assert_eq!(shared.remaining(), 0);
    }
}
