//! Worker implementations that wrap callables (closures or function pointers that are `Fn`).
use crate::bee::{IntoProduct, Worker, WorkerProduct};
use derive_more::Debug;
use std::any;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

/// Wraps a closure or function pointer and calls it when applied.
///
/// The wrapped function may be called concurrently from several worker threads, so it must be
/// `Fn` rather than `FnMut`. A reference to an `Fn` is also `Fn`, which makes `&F` a cheap
/// `Clone`able callable for functions that capture non-`Clone` values.
#[derive(Debug)]
struct Callable<I, F> {
    #[debug(skip)]
    f: F,
    #[debug("{}", any::type_name::<I>())]
    i: PhantomData<fn(&I)>,
}

impl<I, F> Callable<I, F> {
    fn of(f: F) -> Self {
        Self { f, i: PhantomData }
    }

    fn into_inner(self) -> F {
        self.f
    }
}

impl<I, F: Clone> Clone for Callable<I, F> {
    fn clone(&self) -> Self {
        Self::of(self.f.clone())
    }
}

impl<I, F> Deref for Callable<I, F> {
    type Target = F;

    fn deref(&self) -> &Self::Target {
        &self.f
    }
}

/// A stateless `Worker` that calls its function on a reference to each input.
///
/// The function may return anything that implements [`IntoProduct`]: a `Result<O, E>` (where
/// an `Err` is paired with `O::default()`), an `(O, Option<E>)` pair, or a
/// [`Product`](crate::bee::Product).
#[derive(Debug)]
pub struct Caller<I, F> {
    callable: Callable<I, F>,
}

impl<I, F> Caller<I, F> {
    /// Wraps the given callable.
    pub fn of<R>(f: F) -> Self
    where
        F: Fn(&I) -> R,
    {
        Self {
            callable: Callable::of(f),
        }
    }

    /// Returns the wrapped callable.
    pub fn into_inner(self) -> F {
        self.callable.into_inner()
    }
}

impl<I, R, F: Fn(&I) -> R> From<F> for Caller<I, F> {
    fn from(f: F) -> Self {
        Self::of(f)
    }
}

impl<I, F: Clone> Clone for Caller<I, F> {
    fn clone(&self) -> Self {
        Self {
            callable: self.callable.clone(),
        }
    }
}

impl<I, R, F> Worker for Caller<I, F>
where
    I: Send,
    R: IntoProduct,
    R::Output: Send,
    R::Error: Send + fmt::Debug,
    F: Fn(&I) -> R,
{
    type Input = I;
    type Output = R::Output;
    type Error = R::Error;

    #[inline]
    fn apply(&mut self, input: &Self::Input) -> WorkerProduct<Self> {
        (self.callable)(input).into_product()
    }
}

/// A stateful `Worker` that owns a value of type `S` and passes a mutable reference to it, along
/// with a reference to each input, to its function.
///
/// The state is never shared: each worker thread gets its own `StateCaller` (typically from a
/// [`FnQueen`](crate::bee::FnQueen)), and the state is dropped when the thread exits.
#[derive(Debug)]
pub struct StateCaller<S, I, F> {
    #[debug("{}", any::type_name::<S>())]
    state: S,
    callable: Callable<I, F>,
}

impl<S, I, F> StateCaller<S, I, F> {
    /// Creates a new `StateCaller` with the given initial state and callable.
    pub fn new<R>(state: S, f: F) -> Self
    where
        F: Fn(&mut S, &I) -> R,
    {
        Self {
            state,
            callable: Callable::of(f),
        }
    }

    /// Returns a reference to the current state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Consumes this `StateCaller` and returns the state.
    pub fn into_state(self) -> S {
        self.state
    }
}

impl<S, I, R, F> Worker for StateCaller<S, I, F>
where
    I: Send,
    R: IntoProduct,
    R::Output: Send,
    R::Error: Send + fmt::Debug,
    F: Fn(&mut S, &I) -> R,
{
    type Input = I;
    type Output = R::Output;
    type Error = R::Error;

    #[inline]
    fn apply(&mut self, input: &Self::Input) -> WorkerProduct<Self> {
        (self.callable.f)(&mut self.state, input).into_product()
    }
}
