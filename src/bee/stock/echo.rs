use crate::bee::{Product, Worker, WorkerProduct};
use std::fmt::Debug;
use std::marker::PhantomData;

/// A `Worker` that simply returns (a copy of) the input.
#[derive(Debug)]
pub struct Echo<T>(PhantomData<fn(&T) -> T>);

impl<T> Default for Echo<T> {
    fn default() -> Self {
        Echo(PhantomData)
    }
}

impl<T> Clone for Echo<T> {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl<T: Clone + Send + Debug> Worker for Echo<T> {
    type Input = T;
    type Output = T;
    type Error = ();

    #[inline]
    fn apply(&mut self, input: &Self::Input) -> WorkerProduct<Self> {
        Product::ok(input.clone())
    }
}
