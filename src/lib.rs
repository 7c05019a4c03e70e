//! Rensa - tick-driven cooperative step sequencer
//!
//! Chains of steps (callbacks, delays, waits on conditions or external
//! handles) that run one after another on a shared tick source, with
//! pause/resume/stop control at step boundaries. Built for game loops,
//! scripted scenes and other hosts that already have a heartbeat.
//!
//! See `demos/delayed_action.rs` and `demos/chained.rs`.

mod async_handle;
mod error;
mod outcome;
mod sequence;
mod sequence_handle;
mod signal;
mod step;
mod ticker;

pub mod steps;

mod internal;

#[cfg(feature = "test-harness")]
pub mod testing;

pub use async_handle::AsyncHandle;
pub use error::Error;
pub use outcome::Outcome;
pub use sequence::Sequence;
pub use sequence_handle::SequenceHandle;
pub use signal::{Predicate, Signal};
pub use step::{Progress, Step};
pub use ticker::{Tick, TickHandle, Ticker};

pub type Result<T = ()> = std::result::Result<T, Error>;
