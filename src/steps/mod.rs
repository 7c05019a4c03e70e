//! Built-in steps.
//!
//! Each of these does its work in a single slice, suspends at most once,
//! and then completes. [`Sequence`](crate::Sequence) has convenience
//! appenders for all of them; use the types directly with
//! [`then_step`](crate::Sequence::then_step) when a step is built ahead
//! of time.

mod action;
mod delay;
mod external_wait;
mod next_tick;
mod until;

pub use action::Action;
pub use delay::Delay;
pub use external_wait::ExternalWait;
pub use next_tick::NextTick;
pub use until::Until;
