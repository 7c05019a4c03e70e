use std::sync::Arc;

use crate::{Progress, Step};

/// Runs a callback exactly once, completing without suspension.
///
/// The callback is shared behind an `Arc`, so copies made by
/// [`chain`](crate::Sequence::chain) or `Clone` invoke the same closure.
pub struct Action {
    effect: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl Action {
    pub fn new<F>(effect: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            effect: Some(Arc::new(effect)),
        }
    }

    /// A step that completes immediately without doing anything.
    pub fn noop() -> Self {
        Self { effect: None }
    }
}

impl Step for Action {
    fn drive(&mut self) -> Progress {
        if let Some(effect) = self.effect.take() {
            effect();
        }
        Progress::Done
    }

    fn clone_step(&self) -> Box<dyn Step> {
        Box::new(Self {
            effect: self.effect.clone(),
        })
    }

    fn label(&self) -> &'static str {
        "action"
    }
}
