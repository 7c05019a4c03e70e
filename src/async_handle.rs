use std::sync::Arc;

use tokio::task::{AbortHandle, JoinHandle};
use tokio_util::sync::CancellationToken;

/// Completion check for an operation running outside the sequencer.
///
/// A sequence never drives, awaits or cancels the operation behind the
/// handle; it only asks "done yet?" once per tick while suspended on
/// [`Signal::External`](crate::Signal::External). Completion must be
/// monotonic: once `is_complete` returns true it keeps returning true.
///
/// Implemented for the usual Tokio handles, so a spawned task or a
/// cancellation token can be waited on directly:
///
/// ```rust,ignore
/// let task = tokio::spawn(load_assets());
/// let seq = Sequence::new()
///     .wait_for_handle(task)
///     .then(|| println!("assets ready"));
/// ```
pub trait AsyncHandle: Send + Sync + 'static {
    /// Whether the operation has finished.
    fn is_complete(&self) -> bool;
}

impl<T: Send + 'static> AsyncHandle for JoinHandle<T> {
    fn is_complete(&self) -> bool {
        self.is_finished()
    }
}

impl AsyncHandle for AbortHandle {
    fn is_complete(&self) -> bool {
        self.is_finished()
    }
}

/// Complete once the token is cancelled.
impl AsyncHandle for CancellationToken {
    fn is_complete(&self) -> bool {
        self.is_cancelled()
    }
}

impl<H: AsyncHandle + ?Sized> AsyncHandle for Arc<H> {
    fn is_complete(&self) -> bool {
        (**self).is_complete()
    }
}
