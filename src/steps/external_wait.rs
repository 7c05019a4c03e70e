use std::sync::Arc;

use crate::{AsyncHandle, Progress, Signal, Step};

/// Waits for an external operation to report completion, then completes.
///
/// The handle is only polled, once per tick. Copies of this step share
/// the handle, so a chained sequence waits on the same operation.
pub struct ExternalWait {
    handle: Option<Arc<dyn AsyncHandle>>,
}

impl ExternalWait {
    pub fn new<H: AsyncHandle>(handle: H) -> Self {
        Self {
            handle: Some(Arc::new(handle)),
        }
    }
}

impl Step for ExternalWait {
    fn drive(&mut self) -> Progress {
        match self.handle.take() {
            Some(h) => Progress::Suspend(Signal::External(h)),
            None => Progress::Done,
        }
    }

    fn clone_step(&self) -> Box<dyn Step> {
        Box::new(Self {
            handle: self.handle.clone(),
        })
    }

    fn label(&self) -> &'static str {
        "external-wait"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_util::sync::CancellationToken;

    #[test]
    fn test_hands_the_handle_to_the_signal() {
        let token = CancellationToken::new();
        let mut step = ExternalWait::new(token.clone());
        let handle = match step.drive() {
            Progress::Suspend(Signal::External(h)) => h,
            other => panic!("expected an external suspension, got {other:?}"),
        };
        assert!(!handle.is_complete());
        token.cancel();
        assert!(handle.is_complete());
        assert!(matches!(step.drive(), Progress::Done));
    }
}
