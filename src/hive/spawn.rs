//! Worker threads and the watcher that detects when they have all finished.
use super::{Config, HiveError, HiveResult};
use crate::bee::{Queen, Worker, WorkerOutcome};
use crate::channel::{Receiver, Sender};
use crate::hive::Outcome;
use crate::panic::Panic;
use std::thread::{Scope, ScopedJoinHandle};

type InputOf<Q> = <<Q as Queen>::Kind as Worker>::Input;
type OutcomeOf<Q> = WorkerOutcome<<Q as Queen>::Kind>;

/// Handle to a spawned worker thread, along with a label for reporting panics.
pub struct WorkerHandle<'scope> {
    label: String,
    handle: ScopedJoinHandle<'scope, usize>,
}

/// Spawns `num_workers` worker threads that all pull inputs from `work_rx` and send outcomes to
/// `outcome_tx`.
///
/// Each worker creates its own `Worker` from `queen` before receiving its first input, and exits
/// once the work queue is closed and empty. `work_rx` and `outcome_tx` are consumed: the caller
/// must not keep its own copies, otherwise the queues could never close.
///
/// If spawning any thread fails, the workers that were already spawned are left to exit on their
/// own once the queues they hold are closed.
pub fn brood<'scope, 'env, Q: Queen>(
    scope: &'scope Scope<'scope, 'env>,
    queen: &'scope Q,
    config: &Config,
    num_workers: usize,
    work_rx: Receiver<InputOf<Q>>,
    outcome_tx: Sender<OutcomeOf<Q>>,
) -> HiveResult<Vec<WorkerHandle<'scope>>> {
    (0..num_workers)
        .map(|index| {
            let label = format!("worker {index}");
            let work_rx = work_rx.clone();
            let outcome_tx = outcome_tx.clone();
            config
                .thread_builder(None)
                .spawn_scoped(scope, move || work(index, queen, work_rx, outcome_tx))
                .map(|handle| WorkerHandle { label, handle })
                .map_err(HiveError::spawn("worker"))
        })
        .collect()
}

/// The main loop of a worker thread. Returns the number of inputs processed.
fn work<Q: Queen>(
    index: usize,
    queen: &Q,
    work_rx: Receiver<InputOf<Q>>,
    outcome_tx: Sender<OutcomeOf<Q>>,
) -> usize {
    let mut worker = queen.create();
    let mut processed = 0;
    for input in work_rx.iter() {
        let product = worker.apply(&input);
        tracing::trace!(worker = index, failed = !product.is_ok(), "applied worker");
        // the collector only goes away if `swarm` is unwinding
        if outcome_tx.send(Outcome::new(input, product)).is_err() {
            break;
        }
        processed += 1;
    }
    tracing::debug!(worker = index, processed, "worker exiting");
    processed
}

/// Spawns a thread that waits for every worker thread to finish and then closes the outcome queue
/// by dropping `outcome_tx`, which must be the last sender apart from the workers' own.
///
/// When joined, returns the total number of inputs processed, or the first worker panic, if any.
/// All workers are joined even if one of them panicked.
pub fn watch<'scope, 'env, T: Send + 'scope>(
    scope: &'scope Scope<'scope, 'env>,
    config: &Config,
    workers: Vec<WorkerHandle<'scope>>,
    outcome_tx: Sender<T>,
) -> HiveResult<ScopedJoinHandle<'scope, Result<usize, Panic<String>>>> {
    config
        .thread_builder(Some("watch"))
        .spawn_scoped(scope, move || {
            let mut processed = 0;
            let mut first_panic = None;
            for WorkerHandle { label, handle } in workers {
                match handle.join() {
                    Ok(count) => processed += count,
                    Err(payload) => {
                        tracing::debug!(%label, "worker panicked");
                        first_panic.get_or_insert_with(|| Panic::new(payload, Some(label)));
                    }
                }
            }
            drop(outcome_tx);
            tracing::debug!(processed, "all workers finished; closed outcome queue");
            first_panic.map_or(Ok(processed), Err)
        })
        .map_err(HiveError::spawn("watch"))
}
