use std::any::Any;
use std::fmt::Debug;

pub type PanicPayload = Box<dyn Any + Send + 'static>;

/// Wraps a payload from a caught `panic` with an optional `detail`, e.g. the label of the thread
/// that panicked.
#[derive(Debug)]
pub struct Panic<T: Send + Debug> {
    payload: PanicPayload,
    detail: Option<T>,
}

impl<T: Send + Debug> Panic<T> {
    pub(crate) fn new(payload: PanicPayload, detail: Option<T>) -> Self {
        Self { payload, detail }
    }

    /// Returns the payload of the panic.
    pub fn payload(&self) -> &PanicPayload {
        &self.payload
    }

    /// Returns the panic message if the payload is a string, which is the case for panics raised
    /// with `panic!`.
    pub fn message(&self) -> Option<&str> {
        self.payload
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| self.payload.downcast_ref::<String>().map(String::as_str))
    }

    /// Returns the optional detail of the panic.
    pub fn detail(&self) -> Option<&T> {
        self.detail.as_ref()
    }

    /// Consumes this `Panic` and resumes unwinding the thread.
    pub fn resume(self) -> ! {
        std::panic::resume_unwind(self.payload)
    }
}
