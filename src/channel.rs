//! Support for various bounded channel implementations. A maximum of one channel feature may be
//! enabled. If no channel feature is enabled, then `crossbeam-channel` is used.
//!
//! The work queue is consumed by every worker thread, so the channel must be multi-consumer,
//! which rules out `std::sync::mpsc`.
pub(crate) use prelude::*;

#[cfg(all(feature = "flume", feature = "loole"))]
compile_error!("at most one of the `flume` and `loole` features may be enabled");

#[cfg(not(any(feature = "flume", feature = "loole")))]
mod prelude {
    pub use crossbeam_channel::{bounded, Receiver, Sender};
}

#[cfg(all(feature = "flume", not(feature = "loole")))]
mod prelude {
    pub use flume::{bounded, Receiver, Sender};
}

#[cfg(all(feature = "loole", not(feature = "flume")))]
mod prelude {
    pub use loole::{bounded, Receiver, Sender};
}
