use std::{fmt, sync::Arc, time::Duration};

use crate::AsyncHandle;

/// A condition polled once per tick. Used by [`Signal::Until`].
pub type Predicate = Arc<dyn Fn() -> bool + Send + Sync>;

/// Suspension instruction returned by a [`Step`](crate::Step) to influence
/// when it is driven again.
///
/// Every signal resolves at a tick boundary, so even an immediately
/// satisfiable wait spans at least one tick.
#[derive(Clone)]
pub enum Signal {
    /// Resume on the next published tick.
    NextTick,
    /// Resume on the first tick at or after this much tick-clock time.
    Timer(Duration),
    /// Resume on the first tick where the predicate returns true.
    Until(Predicate),
    /// Resume on the first tick where the handle reports completion.
    External(Arc<dyn AsyncHandle>),
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::NextTick => write!(f, "NextTick"),
            Signal::Timer(d) => f.debug_tuple("Timer").field(d).finish(),
            Signal::Until(_) => write!(f, "Until(..)"),
            Signal::External(_) => write!(f, "External(..)"),
        }
    }
}
