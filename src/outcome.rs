/// How a sequence run ended.
///
/// Returned by [`SequenceHandle::join`](crate::SequenceHandle::join).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every step ran to completion.
    Completed,
    /// [`stop`](crate::SequenceHandle::stop) ended the run at a step boundary.
    Stopped,
    /// The [`Ticker`](crate::Ticker) was dropped while steps remained.
    Detached,
    /// The driver task panicked (a step effect panicked).
    Failed,
}
