//! The collector drains the outcome queue.
use crate::channel::Receiver;

/// Receives from `outcome_rx` until it is closed and empty, and returns everything received.
/// `capacity` is only a hint for the size of the returned `Vec`.
pub fn collect<T>(outcome_rx: Receiver<T>, capacity: usize) -> Vec<T> {
    let mut outcomes = Vec::with_capacity(capacity);
    outcomes.extend(outcome_rx.iter());
    outcomes
}
