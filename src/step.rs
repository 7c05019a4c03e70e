use crate::Signal;

/// A unit of sequential work, driven to completion by a sequence's
/// driver task.
///
/// A step runs in slices: each call to [`drive`](Step::drive) does some
/// synchronous work and either finishes ([`Progress::Done`]) or suspends
/// with a [`Signal`] describing when it wants to be driven again. The
/// driver honours the signal at tick boundaries and calls `drive` again
/// once it resolves. A step that returned `Done` is never driven again.
///
/// Most users never implement this trait; the constructors on
/// [`Sequence`](crate::Sequence) cover the usual cases. Implement it for
/// multi-phase steps that interleave work with waits:
///
/// ```rust,ignore
/// struct FadeOut {
///     remaining: u32,
/// }
///
/// impl Step for FadeOut {
///     fn drive(&mut self) -> Progress {
///         if self.remaining == 0 {
///             return Progress::Done;
///         }
///         self.remaining -= 1;
///         dim_by_one_level();
///         Progress::Suspend(Signal::NextTick)
///     }
///
///     fn clone_step(&self) -> Box<dyn Step> {
///         Box::new(FadeOut { remaining: self.remaining })
///     }
/// }
/// ```
///
/// `clone_step` exists so step lists can be copied when sequences are
/// [`chain`](crate::Sequence::chain)ed or cloned; it clones the step as
/// built, not mid-run state.
///
/// See also: [`crate::steps`], [`Signal`].
pub trait Step: Send + 'static {
    /// Run the next slice of work.
    fn drive(&mut self) -> Progress;

    /// Clone this step into a new box.
    fn clone_step(&self) -> Box<dyn Step>;

    /// Short name used in trace output.
    fn label(&self) -> &'static str {
        "step"
    }
}

impl Clone for Box<dyn Step> {
    fn clone(&self) -> Self {
        self.clone_step()
    }
}

/// Result of a single [`Step::drive`] call.
#[derive(Debug, Clone)]
pub enum Progress {
    /// The step is finished; the driver moves on to the next one.
    Done,
    /// The step has more work once the signal resolves.
    Suspend(Signal),
}
