use std::io;

pub type HiveResult<T> = Result<T, HiveError>;

/// The errors that can occur while running a batch in a `Hive`.
///
/// Failures of individual inputs are not `HiveError`s; they are reported in the `error` field of
/// each input's [`Outcome`](crate::hive::Outcome).
#[derive(thiserror::Error, Debug)]
pub enum HiveError {
    #[error("Failed to spawn {role} thread")]
    Spawn {
        role: &'static str,
        #[source]
        source: io::Error,
    },
}

impl HiveError {
    pub(crate) fn spawn(role: &'static str) -> impl FnOnce(io::Error) -> Self {
        move |source| Self::Spawn { role, source }
    }
}
