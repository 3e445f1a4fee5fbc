//! The value produced by applying a `Worker` to a single input.

/// The result of applying a work function to one input: an output and an optional error.
///
/// Unlike `Result`, both fields may be populated at the same time. What it means for a function
/// to return an output *and* an error is up to the function's author; a `Hive` never interprets
/// either field and passes both through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Product<O, E> {
    output: O,
    error: Option<E>,
}

impl<O, E> Product<O, E> {
    /// Creates a new `Product` from an output and an optional error.
    pub fn new(output: O, error: Option<E>) -> Self {
        Self { output, error }
    }

    /// Creates a `Product` with the given output and no error.
    pub fn ok(output: O) -> Self {
        Self::new(output, None)
    }

    /// Creates a `Product` with the given output and error.
    pub fn failed(output: O, error: E) -> Self {
        Self::new(output, Some(error))
    }

    /// Returns a reference to the output.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Returns a reference to the error, if any.
    pub fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }

    /// Returns `true` if there is no error.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Consumes this `Product` and returns its output and error.
    pub fn into_parts(self) -> (O, Option<E>) {
        (self.output, self.error)
    }
}

/// Conversion of a work function's return value into a [`Product`].
///
/// The associated types let the output and error types be inferred from a closure's return type,
/// so that e.g. a closure returning `Result<u64, io::Error>` yields a `Worker` with
/// `Output = u64` and `Error = io::Error`.
pub trait IntoProduct {
    type Output;
    type Error;

    fn into_product(self) -> Product<Self::Output, Self::Error>;
}

impl<O, E> IntoProduct for Product<O, E> {
    type Output = O;
    type Error = E;

    #[inline]
    fn into_product(self) -> Product<O, E> {
        self
    }
}

/// An `Err` is paired with the default ("zero") value of the output type.
impl<O: Default, E> IntoProduct for Result<O, E> {
    type Output = O;
    type Error = E;

    #[inline]
    fn into_product(self) -> Product<O, E> {
        match self {
            Ok(output) => Product::ok(output),
            Err(error) => Product::failed(O::default(), error),
        }
    }
}

impl<O, E> IntoProduct for (O, Option<E>) {
    type Output = O;
    type Error = E;

    #[inline]
    fn into_product(self) -> Product<O, E> {
        Product::new(self.0, self.1)
    }
}
