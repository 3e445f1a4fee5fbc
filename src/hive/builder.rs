use super::{Config, Hive};
use crate::bee::{CloneQueen, DefaultQueen, Queen, Worker};

/// A builder for a [`Hive`].
///
/// Calling [`Builder::new()`] creates an unconfigured `Builder`, while calling
/// [`Builder::default()`] creates a `Builder` with fields preset to the global default values.
/// Global defaults can be changed using the [`drudge::hive::set_*_default`](crate::hive#functions)
/// functions.
///
/// The configuration options available:
/// * [`Builder::num_workers`]: number of worker threads that will be spawned for each batch. If
///   unset (or `0`), a single worker is used.
/// * [`Builder::buffer_size`]: capacity of the work and outcome queues. If unset, the queues are
///   rendezvous channels (capacity `0`). The capacity only affects throughput and memory use,
///   never the outcomes.
/// * [`Builder::thread_name`]: thread name for each of the worker threads spawned by the `Hive`.
///   The dispatcher and watcher threads get the same name with a `-dispatch` or `-watch` suffix.
/// * [`Builder::thread_stack_size`]: stack size (in bytes) for each of the threads spawned by the
///   `Hive`.
///
/// To create the [`Hive`], call one of the `build*` methods.
///
/// # Examples
///
/// Build a [`Hive`] that uses eight worker threads, each with an 8 MB stack size:
///
/// ```
/// # use drudge::hive::Builder;
/// type MyWorker = drudge::bee::stock::Echo<u32>;
///
/// let hive = Builder::new()
///     .num_workers(8)
///     .thread_stack_size(8_000_000)
///     .build_with_default::<MyWorker>();
/// let outcomes = hive.swarm(0..100u32).unwrap();
/// assert_eq!(outcomes.len(), 100);
/// ```
#[derive(Clone, Default)]
pub struct Builder(Config);

impl Builder {
    /// Returns a new `Builder` with no options configured.
    pub fn new() -> Self {
        Self(Config::empty())
    }

    /// Sets the number of worker threads a `Hive` spawns for each batch.
    pub fn num_workers(mut self, num: usize) -> Self {
        self.0.num_workers = Some(num);
        self
    }

    /// Sets the number of worker threads to the number of available CPU cores.
    pub fn with_all_workers(self) -> Self {
        self.num_workers(num_cpus::get())
    }

    /// Sets the capacity of the work and outcome queues.
    pub fn buffer_size(mut self, size: usize) -> Self {
        self.0.buffer_size = Some(size);
        self
    }

    /// Sets the thread name for each of the threads spawned by the `Hive`.
    pub fn thread_name<T: Into<String>>(mut self, name: T) -> Self {
        self.0.thread_name = Some(name.into());
        self
    }

    /// Sets the stack size (in bytes) for each of the threads spawned by the `Hive`.
    pub fn thread_stack_size(mut self, size: usize) -> Self {
        self.0.thread_stack_size = Some(size);
        self
    }

    /// Consumes this `Builder` and returns a new [`Hive`] that uses the given [`Queen`] to
    /// create a [`Worker`] for each thread.
    pub fn build<Q: Queen>(self, queen: Q) -> Hive<Q> {
        Hive::new(queen, self.0)
    }

    /// Consumes this `Builder` and returns a new [`Hive`] whose workers are clones of `worker`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use drudge::hive::{Builder, OutcomeIteratorExt};
    /// # use drudge::bee::stock::Caller;
    /// let hive = Builder::new()
    ///     .num_workers(4)
    ///     .build_with(Caller::of(|s: &&str| Ok::<_, ()>(s.len())));
    /// let mut lengths: Vec<usize> = hive
    ///     .swarm(["a", "bb", "ccc"])
    ///     .unwrap()
    ///     .into_outputs()
    ///     .collect();
    /// lengths.sort();
    /// assert_eq!(lengths, vec![1, 2, 3]);
    /// ```
    pub fn build_with<W>(self, worker: W) -> Hive<CloneQueen<W>>
    where
        W: Worker + Clone + Sync,
    {
        self.build(CloneQueen::new(worker))
    }

    /// Consumes this `Builder` and returns a new [`Hive`] whose workers are created with
    /// `W::default()`.
    pub fn build_with_default<W>(self) -> Hive<DefaultQueen<W>>
    where
        W: Worker + Default,
    {
        self.build(DefaultQueen::default())
    }
}

impl From<Config> for Builder {
    fn from(config: Config) -> Self {
        Self(config)
    }
}
