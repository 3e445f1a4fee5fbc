use crate::bee::Product;

/// The outcome of processing a single input: the input itself, paired with the output and
/// optional error produced by the `Worker` that processed it.
///
/// An `Outcome` is created exactly once per input and is immutable. Since both the output and
/// the error are taken verbatim from the worker's [`Product`], an `Outcome` may carry an output
/// *and* an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Outcome<I, O, E> {
    input: I,
    output: O,
    error: Option<E>,
}

impl<I, O, E> Outcome<I, O, E> {
    /// Creates a new `Outcome` from an input and the `Product` of applying a worker to it.
    pub fn new(input: I, product: Product<O, E>) -> Self {
        let (output, error) = product.into_parts();
        Self {
            input,
            output,
            error,
        }
    }

    /// Returns a reference to the input.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Returns a reference to the output.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Returns a reference to the error, if any.
    pub fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }

    /// Returns `true` if the worker reported an error for this input.
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    /// Consumes this `Outcome` and returns its input, output, and error.
    pub fn into_parts(self) -> (I, O, Option<E>) {
        (self.input, self.output, self.error)
    }

    /// Consumes this `Outcome` and returns the input along with a `Result` that is `Err` if there
    /// was an error. The output is discarded in that case.
    pub fn into_result(self) -> (I, Result<O, E>) {
        match self.error {
            Some(error) => (self.input, Err(error)),
            None => (self.input, Ok(self.output)),
        }
    }
}

/// Extension trait for iterators over `Outcome`s, such as the `Vec` returned by
/// [`Hive::swarm`](crate::hive::Hive::swarm).
pub trait OutcomeIteratorExt<I, O, E>: IntoIterator<Item = Outcome<I, O, E>> + Sized {
    /// Consumes this iterator and returns an iterator over `(input, Result)` pairs.
    fn into_results(self) -> impl Iterator<Item = (I, Result<O, E>)> {
        self.into_iter().map(Outcome::into_result)
    }

    /// Consumes this iterator and returns an iterator over the outcomes that have an error.
    fn into_failures(self) -> impl Iterator<Item = Outcome<I, O, E>> {
        self.into_iter().filter(Outcome::is_failure)
    }

    /// Consumes this iterator and returns an iterator over the outputs. Panics if any outcome
    /// has an error.
    fn into_outputs(self) -> impl Iterator<Item = O>
    where
        E: std::fmt::Debug,
    {
        self.into_iter().map(|outcome| match outcome.error {
            None => outcome.output,
            Some(e) => panic!("unexpected error: {e:?}"),
        })
    }
}

impl<I, O, E, T: IntoIterator<Item = Outcome<I, O, E>>> OutcomeIteratorExt<I, O, E> for T {}
