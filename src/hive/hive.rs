use super::{collect, dispatch, spawn, Config, HiveResult};
use crate::bee::{Queen, Worker, WorkerOutcome};
use crate::channel;
use std::fmt;
use std::thread;

/// A pool of worker threads, plus the [`Queen`] that creates a [`Worker`] for each of them.
///
/// A `Hive` holds no threads while idle. Each call to [`swarm`](Hive::swarm) spawns the workers,
/// runs a single batch of inputs to completion, and joins every thread before returning.
pub struct Hive<Q: Queen> {
    queen: Q,
    config: Config,
}

impl<W: Worker, Q: Queen<Kind = W>> Hive<Q> {
    /// Creates a new `Hive` with the given `Queen` and `Config`. Typically, a `Hive` is created
    /// with a [`Builder`](crate::hive::Builder) instead.
    pub fn new(queen: Q, config: Config) -> Self {
        Self { queen, config }
    }

    /// Returns a reference to the `Queen`.
    pub fn queen(&self) -> &Q {
        &self.queen
    }

    /// Returns a reference to the `Config`.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Processes every input and returns one [`Outcome`](crate::hive::Outcome) per input, once all
    /// inputs have been processed.
    ///
    /// Inputs are fed to the workers through a bounded work queue by a dispatcher thread, and
    /// outcomes are returned through a bounded outcome queue that is drained on the calling
    /// thread. Outcomes are in no particular order; use each outcome's `input` to match it with
    /// its input.
    ///
    /// A failing input never prevents other inputs from being processed. If a worker panics, the
    /// remaining workers still finish the batch, and then the panic is resumed on this thread.
    ///
    /// Returns an error only if a thread could not be spawned, in which case no outcomes are
    /// returned.
    pub fn swarm<T>(&self, inputs: T) -> HiveResult<Vec<WorkerOutcome<W>>>
    where
        T: IntoIterator<Item = W::Input>,
        T::IntoIter: Send,
    {
        let inputs = inputs.into_iter();
        let (capacity, _) = inputs.size_hint();
        let num_workers = self.config.num_workers();
        let buffer_size = self.config.buffer_size();
        tracing::debug!(num_workers, buffer_size, capacity, "starting batch");
        let outcomes = thread::scope(|scope| -> HiveResult<_> {
            // the queues are created inside the scope so that, on error, they are closed before
            // the scope joins the threads that have already been spawned
            let (work_tx, work_rx) = channel::bounded(buffer_size);
            let (outcome_tx, outcome_rx) = channel::bounded(buffer_size);
            let workers = spawn::brood(
                scope,
                &self.queen,
                &self.config,
                num_workers,
                work_rx,
                outcome_tx.clone(),
            )?;
            let watcher = spawn::watch(scope, &self.config, workers, outcome_tx)?;
            let dispatcher = dispatch::dispatch(scope, &self.config, inputs, work_tx)?;
            let outcomes = collect::collect(outcome_rx, capacity);
            if let Err(payload) = dispatcher.join() {
                std::panic::resume_unwind(payload)
            }
            match watcher.join() {
                Ok(Ok(_)) => Ok(outcomes),
                Ok(Err(panic)) => panic.resume(),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        })?;
        tracing::debug!(num_outcomes = outcomes.len(), "finished batch");
        Ok(outcomes)
    }
}

impl<Q: Queen + fmt::Debug> fmt::Debug for Hive<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hive")
            .field("queen", &self.queen)
            .field("config", &self.config)
            .finish()
    }
}
