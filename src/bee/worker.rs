use super::Product;
use crate::hive::Outcome;
use std::fmt::Debug;

/// Alias for the `Product` of applying a `Worker`, with its parameters taken from `W::Output` and
/// `W::Error`.
pub type WorkerProduct<W> = Product<<W as Worker>::Output, <W as Worker>::Error>;

/// Alias for the `Outcome` of applying a `Worker`, with its parameters taken from `W::Input`,
/// `W::Output` and `W::Error`.
pub type WorkerOutcome<W> =
    Outcome<<W as Worker>::Input, <W as Worker>::Output, <W as Worker>::Error>;

/// A trait for stateful, fallible functions.
///
/// A `Worker` is created on, and never leaves, the thread that uses it, so it does not need to be
/// `Send` or `Sync`. Its associated types cross threads and must be `Send`.
pub trait Worker: Debug + Sized {
    /// The type of the input to this function.
    type Input: Send;
    /// The type of the output from this function.
    type Output: Send;
    /// The type of error produced by this function.
    type Error: Send + Debug;

    /// Applies this `Worker`'s function to the given input and returns the output along with an
    /// optional error.
    ///
    /// The input is borrowed so that it can be paired with the `Product` in an `Outcome`.
    fn apply(&mut self, input: &Self::Input) -> WorkerProduct<Self>;

    /// Applies this `Worker`'s function sequentially to an iterator of inputs and returns an
    /// iterator over the outcomes, in input order.
    fn map(
        &mut self,
        inputs: impl IntoIterator<Item = Self::Input>,
    ) -> impl Iterator<Item = WorkerOutcome<Self>> {
        inputs.into_iter().map(move |input| {
            let product = self.apply(&input);
            Outcome::new(input, product)
        })
    }
}
