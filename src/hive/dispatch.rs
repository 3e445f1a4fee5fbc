//! The dispatcher feeds inputs into the work queue.
use super::{Config, HiveError, HiveResult};
use crate::channel::Sender;
use std::thread::{Scope, ScopedJoinHandle};

/// Spawns a thread that sends every input to the work queue, in iteration order, then closes the
/// queue by dropping `work_tx`. Each send blocks while the queue is full.
///
/// Returns the number of inputs sent when joined. Sending only fails if every worker has exited,
/// which can only happen if they all panicked; in that case the remaining inputs are dropped.
pub fn dispatch<'scope, 'env, T>(
    scope: &'scope Scope<'scope, 'env>,
    config: &Config,
    inputs: T,
    work_tx: Sender<T::Item>,
) -> HiveResult<ScopedJoinHandle<'scope, usize>>
where
    T: Iterator + Send + 'scope,
    T::Item: Send + 'scope,
{
    config
        .thread_builder(Some("dispatch"))
        .spawn_scoped(scope, move || {
            let mut sent = 0;
            for input in inputs {
                if work_tx.send(input).is_err() {
                    tracing::debug!(sent, "all workers exited; abandoning remaining inputs");
                    break;
                }
                sent += 1;
            }
            drop(work_tx);
            tracing::debug!(sent, "closed work queue");
            sent
        })
        .map_err(HiveError::spawn("dispatch"))
}
