//! A `Hive` is populated by bees:
//! * The workers process the inputs submitted to the `Hive`.
//! * The queen creates a new worker for each thread in the `Hive`.
//!
//! # Worker
//!
//! A worker is defined by implementing the [`Worker`] trait. A `Worker` implementation has three
//! associated types:
//! * `Input`: the type of the input to the worker.
//! * `Output`: the type of the output produced by the worker.
//! * `Error`: the type of error that can occur during the execution of the worker.
//!
//! Note that all of a `Worker`'s associated types must be `Send`; however, the `Worker` itself
//! will only ever exist within the context of a single worker thread, and thus does not itself
//! need to be `Send`. This is what makes a `Worker` a natural home for per-thread state, such as a
//! scratch buffer that is reused for every input the thread processes.
//!
//! The `Worker` trait has a single required method, [`apply`](Worker::apply), which takes a
//! reference to an input and returns a [`Product`]: an output together with an optional error.
//! Both may be present at once. A `Hive` never inspects the error; it is simply returned to the
//! caller in the input's [`Outcome`](crate::hive::Outcome).
//!
//! A `Worker` should not panic. If it does, the panic is re-raised on the thread that called
//! [`Hive::swarm`](crate::hive::Hive::swarm) once the rest of the inputs have been processed.
//!
//! ## Stock Workers
//!
//! The [`stock`] submodule provides some commonly used worker implementations:
//! * `Caller`: wraps a callable (function or closure) that takes `&Input` and returns anything
//!   that implements [`IntoProduct`], such as `Result<Output, Error>`.
//! * `StateCaller`: like `Caller`, but owns a state value and passes `&mut` state to its callable.
//! * `Echo`: simply returns a copy of its input. This is primarily useful for testing.
//!
//! # Queen
//!
//! A queen is defined by implementing the [`Queen`] trait. A single `Queen` instance is shared by
//! all the worker threads of a `Hive`, and each thread calls [`Queen::create`] once on startup to
//! obtain its own `Worker`.
//!
//! It is often not necessary to manually implement the `Queen` trait:
//! * If your `Worker` implements `Default`, use [`DefaultQueen`] (or
//!   [`Builder::build_with_default`](crate::hive::Builder::build_with_default)).
//! * If your `Worker` implements `Clone`, use [`CloneQueen`] (or
//!   [`Builder::build_with`](crate::hive::Builder::build_with)).
//! * Otherwise, wrap a factory closure in a [`FnQueen`].
//!
//! A `Queen` should never panic when creating `Worker`s.
//!
//! # Implementation Notes
//!
//! It is easiest to use the [`prelude`] when implementing your bees:
//!
//! ```
//! use drudge::bee::prelude::*;
//! ```
mod product;
mod queen;
pub mod stock;
mod worker;

pub use product::{IntoProduct, Product};
pub use queen::{CloneQueen, DefaultQueen, FnQueen, Queen};
pub use worker::{Worker, WorkerOutcome, WorkerProduct};

pub mod prelude {
    pub use super::{IntoProduct, Product, Queen, Worker, WorkerOutcome, WorkerProduct};
}
