use parking_lot::Mutex;
use std::sync::LazyLock;
use std::thread;

const DEFAULT_NUM_WORKERS: usize = 4;
const DEFAULT_BUFFER_SIZE: usize = 16;

static DEFAULTS: LazyLock<Mutex<Config>> = LazyLock::new(|| {
    let mut config = Config::empty();
    config.set_const_defaults();
    Mutex::new(config)
});

/// Sets the number of workers a `Builder` is configured with when using `Builder::default()`.
pub fn set_num_workers_default(num_workers: usize) {
    DEFAULTS.lock().num_workers = Some(num_workers);
}

/// Sets the number of workers a `Builder` is configured with when using `Builder::default()` to
/// the number of available CPU cores.
pub fn set_num_workers_default_all() {
    set_num_workers_default(num_cpus::get());
}

/// Sets the capacity of the work and outcome queues a `Builder` is configured with when using
/// `Builder::default()`.
pub fn set_buffer_size_default(buffer_size: usize) {
    DEFAULTS.lock().buffer_size = Some(buffer_size);
}

/// Resets all builder defaults to their original values.
pub fn reset_defaults() {
    DEFAULTS.lock().set_const_defaults();
}

/// Configuration for a [`Hive`](crate::hive::Hive). Unset values fall back to the values
/// described on each getter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub(crate) num_workers: Option<usize>,
    pub(crate) buffer_size: Option<usize>,
    pub(crate) thread_name: Option<String>,
    pub(crate) thread_stack_size: Option<usize>,
}

impl Config {
    /// Creates a new `Config` with all values unset.
    pub fn empty() -> Self {
        Self {
            num_workers: None,
            buffer_size: None,
            thread_name: None,
            thread_stack_size: None,
        }
    }

    /// Resets config values to their pre-configured defaults.
    fn set_const_defaults(&mut self) {
        self.num_workers = Some(DEFAULT_NUM_WORKERS);
        self.buffer_size = Some(DEFAULT_BUFFER_SIZE);
    }

    /// The number of worker threads to spawn for each batch. Always at least `1`: a `Hive` with
    /// no workers could never drain its work queue.
    pub fn num_workers(&self) -> usize {
        match self.num_workers {
            Some(0) | None => {
                tracing::warn!(
                    configured = ?self.num_workers,
                    "a hive needs at least one worker; using 1"
                );
                1
            }
            Some(n) => n,
        }
    }

    /// The capacity of the work and outcome queues. Defaults to `0` (rendezvous channels) if
    /// unset.
    pub fn buffer_size(&self) -> usize {
        self.buffer_size.unwrap_or(0)
    }

    /// The name given to worker threads, if any.
    pub fn thread_name(&self) -> Option<&str> {
        self.thread_name.as_deref()
    }

    /// The stack size (in bytes) of worker threads, if set.
    pub fn thread_stack_size(&self) -> Option<usize> {
        self.thread_stack_size
    }

    /// Returns a `thread::Builder` configured with this `Config`'s thread name and stack size.
    /// The name of auxiliary (non-worker) threads is suffixed with `-{role}`.
    pub(crate) fn thread_builder(&self, role: Option<&str>) -> thread::Builder {
        let mut builder = thread::Builder::new();
        if let Some(name) = self.thread_name.as_ref() {
            builder = match role {
                Some(role) => builder.name(format!("{name}-{role}")),
                None => builder.name(name.clone()),
            };
        }
        if let Some(size) = self.thread_stack_size {
            builder = builder.stack_size(size);
        }
        builder
    }
}

impl Default for Config {
    /// Creates a new `Config` with default values. This simply clones `DEFAULTS`.
    fn default() -> Self {
        DEFAULTS.lock().clone()
    }
}
