//! Convenience functions that build a single-use [`Hive`](crate::hive::Hive) and run one batch.
use crate::bee::stock::{Caller, StateCaller};
use crate::bee::{FnQueen, IntoProduct};
use crate::hive::{Builder, HiveResult, Outcome};
use std::fmt::Debug;

/// Alias for the `Vec` of outcomes returned when applying a function that returns `R`.
pub type Outcomes<I, R> = Vec<Outcome<I, <R as IntoProduct>::Output, <R as IntoProduct>::Error>>;

/// Applies `f` to every input using `num_workers` worker threads and work/outcome queues of
/// capacity `buffer_size`, and returns one [`Outcome`] per input once all inputs have been
/// processed.
///
/// `f` may return a `Result<O, E>` (an `Err` is paired with `O::default()`), an
/// `(O, Option<E>)` pair, or a [`Product`](crate::bee::Product). It is called concurrently from
/// multiple threads. Outcomes are returned in no particular order.
///
/// A `num_workers` of `0` is treated as `1`.
///
/// # Examples
///
/// ```
/// use drudge::hive::OutcomeIteratorExt;
///
/// let outcomes = drudge::apply(
///     0..10u32,
///     |i| if *i == 5 { Err("no fives") } else { Ok(i * i) },
///     4,
///     2,
/// )
/// .unwrap();
/// assert_eq!(outcomes.len(), 10);
/// let failures: Vec<_> = outcomes.into_failures().map(|o| *o.input()).collect();
/// assert_eq!(failures, vec![5]);
/// ```
pub fn apply<I, R, T, F>(
    inputs: T,
    f: F,
    num_workers: usize,
    buffer_size: usize,
) -> HiveResult<Outcomes<I, R>>
where
    I: Send,
    T: IntoIterator<Item = I>,
    T::IntoIter: Send,
    R: IntoProduct,
    R::Output: Send,
    R::Error: Send + Debug,
    F: Fn(&I) -> R + Sync,
{
    Builder::default()
        .num_workers(num_workers)
        .buffer_size(buffer_size)
        .build_with(Caller::of(&f))
        .swarm(inputs)
}

/// Like [`apply`], but each worker thread first calls `state_fn` once to create its own private
/// state, and then passes a mutable reference to that state to `f` for every input it processes.
///
/// The state is never shared between threads, so it does not need to be `Send` or `Sync`. It is
/// dropped when its worker thread exits.
///
/// # Examples
///
/// ```
/// use drudge::hive::OutcomeIteratorExt;
///
/// // each worker reuses a single buffer rather than allocating one per input
/// let outcomes = drudge::apply_with_state(
///     vec!["a", "bb", "ccc"],
///     || String::with_capacity(64),
///     |buf: &mut String, s: &&str| {
///         buf.clear();
///         buf.push_str(s);
///         buf.push_str(s);
///         Ok::<_, ()>(buf.len())
///     },
///     2,
///     0,
/// )
/// .unwrap();
/// let mut lengths: Vec<_> = outcomes.into_outputs().collect();
/// lengths.sort();
/// assert_eq!(lengths, vec![2, 4, 6]);
/// ```
pub fn apply_with_state<I, S, R, T, SF, F>(
    inputs: T,
    state_fn: SF,
    f: F,
    num_workers: usize,
    buffer_size: usize,
) -> HiveResult<Outcomes<I, R>>
where
    I: Send,
    T: IntoIterator<Item = I>,
    T::IntoIter: Send,
    R: IntoProduct,
    R::Output: Send,
    R::Error: Send + Debug,
    SF: Fn() -> S + Sync,
    F: Fn(&mut S, &I) -> R + Sync,
{
    let queen = FnQueen::new(|| StateCaller::new(state_fn(), &f));
    Builder::default()
        .num_workers(num_workers)
        .buffer_size(buffer_size)
        .build(queen)
        .swarm(inputs)
}
