//! Utilities shared by the adapters of this crate.

mod countdown;
mod lifecycle;

pub use countdown::Countdown;
pub(crate) use lifecycle::Lifecycle;
