use std::sync::Arc;

use crate::{Predicate, Progress, Signal, Step};

/// Waits until a predicate reports true, then completes.
///
/// The predicate is polled once per tick while the sequence is suspended.
/// A predicate that is already true resolves on the first tick after
/// suspension, never synchronously.
pub struct Until {
    predicate: Option<Predicate>,
}

impl Until {
    pub fn new<P>(predicate: P) -> Self
    where
        P: Fn() -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Some(Arc::new(predicate)),
        }
    }
}

impl Step for Until {
    fn drive(&mut self) -> Progress {
        match self.predicate.take() {
            Some(p) => Progress::Suspend(Signal::Until(p)),
            None => Progress::Done,
        }
    }

    fn clone_step(&self) -> Box<dyn Step> {
        Box::new(Self {
            predicate: self.predicate.clone(),
        })
    }

    fn label(&self) -> &'static str {
        "until"
    }
}
