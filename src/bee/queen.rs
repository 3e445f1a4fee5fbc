//! The Queen bee trait.
use super::Worker;
use derive_more::Debug;
use std::any;
use std::marker::PhantomData;

/// A trait for factories that create `Worker`s.
///
/// A single `Queen` is shared (by reference) by all the worker threads of a `Hive`. Each thread
/// calls `create` exactly once when it starts, so `create` may be called concurrently.
pub trait Queen: Sync {
    /// The kind of `Worker` created by this factory.
    type Kind: Worker;

    /// Creates and returns a new instance of `Self::Kind`.
    fn create(&self) -> Self::Kind;
}

/// A `Queen` that can create a `Worker` type that implements `Default`.
#[derive(Debug)]
pub struct DefaultQueen<W>(#[debug("{}", any::type_name::<W>())] PhantomData<fn() -> W>);

impl<W> Default for DefaultQueen<W> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<W: Worker + Default> Queen for DefaultQueen<W> {
    type Kind = W;

    fn create(&self) -> Self::Kind {
        Self::Kind::default()
    }
}

/// A `Queen` that can create a `Worker` type that implements `Clone`, by making copies of
/// an existing instance of that `Worker` type.
#[derive(Debug)]
pub struct CloneQueen<W>(W);

impl<W: Worker + Clone> CloneQueen<W> {
    pub fn new(worker: W) -> Self {
        CloneQueen(worker)
    }
}

impl<W: Worker + Clone + Sync> Queen for CloneQueen<W> {
    type Kind = W;

    fn create(&self) -> Self::Kind {
        self.0.clone()
    }
}

impl<W: Worker + Clone> From<W> for CloneQueen<W> {
    fn from(worker: W) -> Self {
        Self::new(worker)
    }
}

/// A `Queen` that creates `Worker`s by calling a closure or function pointer.
///
/// This is the most flexible way to give each worker thread its own private state, e.g. a scratch
/// buffer that is reused across all the inputs the thread processes.
#[derive(Debug)]
pub struct FnQueen<F>(#[debug(skip)] F);

impl<W: Worker, F: Fn() -> W + Sync> FnQueen<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<W: Worker, F: Fn() -> W + Sync> Queen for FnQueen<F> {
    type Kind = W;

    fn create(&self) -> Self::Kind {
        (self.0)()
    }
}
