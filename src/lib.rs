//! A [`Hive`] is a pool of threads used to execute a (possibly) stateful function in parallel on a
//! batch of inputs.
//!
//! Processing a batch is a run-to-completion operation: a dispatcher thread feeds the inputs into
//! a bounded work queue, a fixed number of worker threads pull inputs from the queue and push an
//! [`Outcome`] for each one onto a bounded outcome queue, and the calling thread collects every
//! outcome before returning. An `Outcome` pairs each input with the output and (optional) error
//! that the worker produced for it. Outcomes are returned in no particular order.
//!
//! The simplest way to process a batch is with [`apply`]:
//!
//! ```
//! use std::hash::{DefaultHasher, Hash, Hasher};
//!
//! fn hash(s: &String) -> Result<u64, std::fmt::Error> {
//!     let mut hasher = DefaultHasher::new();
//!     s.hash(&mut hasher);
//!     Ok(hasher.finish())
//! }
//!
//! let work: Vec<String> = (0..3).map(|i| format!("work{i}")).collect();
//! let outcomes = drudge::apply(work, hash, 2, 2).unwrap();
//! assert_eq!(outcomes.len(), 3);
//! for outcome in outcomes {
//!     assert_eq!(outcome.error(), None);
//!     assert_eq!(*outcome.output(), hash(outcome.input()).unwrap());
//! }
//! ```
//!
//! When each worker needs its own state, such as a scratch buffer that should be allocated once
//! per thread rather than once per input, use [`apply_with_state`].
//!
//! For more control, implement [`Worker`] and [`Queen`] yourself (or use the stock implementations
//! in [`bee::stock`]), and use a [`Builder`] to build a reusable `Hive`. If your `Worker`
//! implements `Default`, then you can use `Builder::build_with_default` rather than manually
//! implementing `Queen`. Alternatively, if your `Worker` implements `Clone`, then you can use
//! `Builder::build_with` with a `Worker` instance, and new `Worker`s will be created by cloning
//! it.
//!
//! ```
//! use drudge::bee::prelude::*;
//! use drudge::hive::Builder;
//!
//! /// Counts how many inputs each worker has seen.
//! #[derive(Debug, Default)]
//! struct CountingWorker {
//!     seen: usize,
//! }
//!
//! impl Worker for CountingWorker {
//!     type Input = u8;
//!     type Output = usize;
//!     type Error = ();
//!
//!     fn apply(&mut self, _: &Self::Input) -> WorkerProduct<Self> {
//!         self.seen += 1;
//!         Product::ok(self.seen)
//!     }
//! }
//!
//! let hive = Builder::new()
//!     .num_workers(1)
//!     .build_with_default::<CountingWorker>();
//! let mut counts: Vec<usize> = hive
//!     .swarm(0..5)
//!     .unwrap()
//!     .into_iter()
//!     .map(|outcome| *outcome.output())
//!     .collect();
//! counts.sort();
//! assert_eq!(counts, vec![1, 2, 3, 4, 5]);
//! ```
//!
//! There are several optional features available:
//! * `flume`: use `flume`'s channels rather than `crossbeam-channel` for the work and outcome
//!   queues.
//! * `loole`: use `loole`'s channels rather than `crossbeam-channel` for the work and outcome
//!   queues.
//!
//! [`Worker`]: bee::Worker
//! [`Queen`]: bee::Queen
//! [`Hive`]: hive::Hive
//! [`Builder`]: hive::Builder
//! [`Outcome`]: hive::Outcome

pub mod bee;
mod channel;
pub mod hive;
mod panic;
pub mod util;

pub use panic::Panic;
pub use util::{apply, apply_with_state};
