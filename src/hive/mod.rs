//! A bounded, run-to-completion worker pool.
//!
//! A [`Hive<Q>`](crate::hive::Hive) has a [`Queen`](crate::bee::Queen) of type `Q`, which it uses
//! to create a [`Worker`](crate::bee::Worker) for each worker thread it starts.
//!
//! Each call to [`Hive::swarm`] processes one batch of inputs:
//!
//! 1. A *dispatcher* thread sends every input, in order, into a bounded work queue, and closes
//!    the queue once the inputs are exhausted.
//! 2. Each of the `num_workers` *worker* threads creates its `Worker`, then receives inputs from
//!    the work queue until it is closed and empty. For each input it calls `Worker::apply` and
//!    sends the resulting [`Outcome`] to a bounded outcome queue.
//! 3. A *watcher* thread joins every worker thread and then closes the outcome queue.
//! 4. The calling thread *collects* outcomes until the outcome queue is closed and empty.
//!
//! The outcome queue can only close after every worker has exited, and the workers can only
//! exit once the work queue is closed and drained, so every input yields exactly one `Outcome`
//! regardless of the number of workers or the capacity of the queues.
//!
//! All threads are scoped to the call to `swarm`, so inputs, workers and queens may borrow data
//! from the caller.
//!
//! # Creating a `Hive`
//!
//! The typical way to create a `Hive` is using a [`Builder`]. Use [`Builder::new()`] to create an
//! empty (completely unconfigured) `Builder`, or [`Builder::default()`] to create a `Builder`
//! configured with the global default values (see below).
//!
//! ```
//! use drudge::hive::Builder;
//! # type MyWorker = drudge::bee::stock::Echo<usize>;
//!
//! let hive = Builder::default()
//!     .num_workers(2)
//!     .buffer_size(8)
//!     .build_with_default::<MyWorker>();
//! assert_eq!(hive.swarm(0..10).unwrap().len(), 10);
//! ```
//!
//! ## Global defaults
//!
//! The [`set_num_workers_default`], [`set_num_workers_default_all`] and
//! [`set_buffer_size_default`] functions change the values used by `Builder::default()`, and
//! [`reset_defaults`] restores the built-in defaults (4 workers, buffer size 16).
mod builder;
mod collect;
mod config;
mod dispatch;
mod error;
#[allow(clippy::module_inception)]
mod hive;
mod outcome;
mod spawn;

pub use self::builder::Builder;
pub use self::config::{
    reset_defaults, set_buffer_size_default, set_num_workers_default,
    set_num_workers_default_all, Config,
};
pub use self::error::{HiveError, HiveResult};
pub use self::hive::Hive;
pub use self::outcome::{Outcome, OutcomeIteratorExt};

pub mod prelude {
    pub use super::{Builder, Hive, HiveError, HiveResult, Outcome, OutcomeIteratorExt};
}

#[cfg(test)]
mod tests {
    use super::{Builder, Outcome, OutcomeIteratorExt};
    use crate::bee::stock::{Caller, Echo, StateCaller};
    use crate::bee::{FnQueen, Product, Worker};
    use itertools::iproduct;
    use std::collections::HashSet;
    use std::hash::{DefaultHasher, Hash, Hasher};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::thread::{self, ThreadId};
    use std::time::Duration;

    const TEST_TASKS: usize = 4;

    fn hash(input: &String) -> Result<u64, String> {
        let mut hasher = DefaultHasher::new();
        input.hash(&mut hasher);
        Ok(hasher.finish())
    }

    fn sorted<I: Ord, O, E>(mut outcomes: Vec<Outcome<I, O, E>>) -> Vec<Outcome<I, O, E>> {
        outcomes.sort_by(|a, b| a.input().cmp(b.input()));
        outcomes
    }

    #[test]
    fn test_works() {
        let work: Vec<String> = (0..3).map(|i| format!("work{i}")).collect();
        let expected: Vec<_> = work.iter().map(|s| hash(s).unwrap()).collect();
        let outcomes = sorted(crate::apply(work.clone(), hash, 2, 2).unwrap());
        assert_eq!(outcomes.len(), 3);
        for ((outcome, input), expected) in outcomes.iter().zip(&work).zip(expected) {
            assert_eq!(outcome.input(), input);
            assert_eq!(*outcome.output(), expected);
            assert_eq!(outcome.error(), None);
        }
    }

    #[test]
    fn test_empty() {
        let outcomes = crate::apply(Vec::<String>::new(), hash, 4, 0).unwrap();
        assert!(outcomes.is_empty());
        let outcomes = crate::apply_with_state(
            Vec::<u8>::new(),
            Vec::<u8>::new,
            |_: &mut Vec<u8>, i: &u8| Ok::<_, ()>(*i),
            4,
            0,
        )
        .unwrap();
        assert!(outcomes.is_empty());
    }

    #[test]
    fn test_many_inputs() {
        let outcomes = crate::apply(0..500usize, |i| Ok::<_, ()>(i + 1), 10, 100).unwrap();
        assert_eq!(outcomes.len(), 500);
        let inputs: HashSet<usize> = outcomes.iter().map(|o| *o.input()).collect();
        assert_eq!(inputs, (0..500).collect());
        assert!(outcomes.iter().all(|o| *o.output() == *o.input() + 1));
    }

    #[test]
    fn test_worker_and_buffer_invariance() {
        let work: Vec<String> = (0..50).map(|i| format!("work{i}")).collect();
        let expected: Vec<_> = Caller::of(hash).map(work.clone()).collect();
        for (num_workers, buffer_size) in iproduct!([1, 2, 10, 75], [0, 1, 1000]) {
            let outcomes = crate::apply(work.clone(), hash, num_workers, buffer_size).unwrap();
            assert_eq!(
                sorted(outcomes),
                sorted(expected.clone()),
                "num_workers={num_workers}, buffer_size={buffer_size}"
            );
        }
    }

    #[test]
    fn test_zero_workers() {
        let outcomes = crate::apply(0..20u8, |i| Ok::<_, ()>(*i), 0, 0).unwrap();
        assert_eq!(outcomes.len(), 20);
    }

    #[test]
    fn test_failures_do_not_stop_other_inputs() {
        let outcomes = crate::apply(
            0..100u32,
            |i| {
                if i % 10 == 0 {
                    Err(format!("{i} is a multiple of 10"))
                } else {
                    Ok(i * 2)
                }
            },
            TEST_TASKS,
            1,
        )
        .unwrap();
        assert_eq!(outcomes.len(), 100);
        let mut failures: Vec<_> = outcomes
            .iter()
            .filter(|o| o.is_failure())
            .map(|o| (*o.input(), *o.output(), o.error().cloned()))
            .collect();
        failures.sort();
        let expected: Vec<_> = (0..100u32)
            .step_by(10)
            .map(|i| (i, 0, Some(format!("{i} is a multiple of 10"))))
            .collect();
        assert_eq!(failures, expected);
        let successes = outcomes.into_results().filter(|(_, r)| r.is_ok()).count();
        assert_eq!(successes, 90);
    }

    #[test]
    fn test_output_and_error_both_kept() {
        let outcomes = crate::apply(
            0..10u8,
            |i| {
                let error = (i % 2 == 1).then(|| "odd");
                (u16::from(*i) * 3, error)
            },
            3,
            0,
        )
        .unwrap();
        for outcome in outcomes {
            let (input, output, error) = outcome.into_parts();
            assert_eq!(output, u16::from(input) * 3);
            assert_eq!(error.is_some(), input % 2 == 1);
        }
    }

    #[derive(Debug)]
    struct Scratch {
        id: usize,
        owner: ThreadId,
        buf: Vec<u8>,
        applied: usize,
    }

    #[test]
    fn test_state_created_once_per_worker() {
        let num_workers = 6;
        let created = AtomicUsize::new(0);
        let outcomes = crate::apply_with_state(
            0..300usize,
            || Scratch {
                id: created.fetch_add(1, Ordering::SeqCst),
                owner: thread::current().id(),
                buf: Vec::with_capacity(16),
                applied: 0,
            },
            |scratch: &mut Scratch, input: &usize| {
                // the state is only ever used on the thread that created it
                assert_eq!(scratch.owner, thread::current().id());
                scratch.buf.clear();
                scratch.buf.extend_from_slice(&input.to_le_bytes());
                scratch.applied += 1;
                Ok::<_, ()>((scratch.id, scratch.applied, scratch.buf.len()))
            },
            num_workers,
            4,
        )
        .unwrap();
        assert_eq!(created.load(Ordering::SeqCst), num_workers);
        assert_eq!(outcomes.len(), 300);
        // every state saw a gap-free sequence of applications, so no two inputs were applied to
        // the same state at once
        let mut per_worker = vec![Vec::new(); num_workers];
        for outcome in &outcomes {
            let (id, applied, len) = *outcome.output();
            assert_eq!(len, std::mem::size_of::<usize>());
            per_worker[id].push(applied);
        }
        for mut counts in per_worker {
            counts.sort();
            assert_eq!(counts, (1..=counts.len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_state_not_send() {
        use std::rc::Rc;
        let outcomes = crate::apply_with_state(
            vec![1u32, 2, 3],
            || Rc::new(10u32),
            |state: &mut Rc<u32>, i: &u32| Ok::<_, ()>(**state + i),
            2,
            0,
        )
        .unwrap();
        let mut outputs: Vec<_> = outcomes.into_outputs().collect();
        outputs.sort();
        assert_eq!(outputs, vec![11, 12, 13]);
    }

    #[test]
    fn test_workers_run_concurrently() {
        // each worker blocks until all of them have received an input, which is only possible
        // if they run in parallel
        let barrier = Barrier::new(TEST_TASKS);
        let outcomes = crate::apply(
            0..TEST_TASKS,
            |_| {
                barrier.wait();
                (thread::current().id(), None::<()>)
            },
            TEST_TASKS,
            0,
        )
        .unwrap();
        let threads: HashSet<ThreadId> = outcomes.into_outputs().collect();
        assert_eq!(threads.len(), TEST_TASKS);
    }

    #[test]
    fn test_more_workers_than_inputs() {
        let hive = Builder::new()
            .num_workers(32)
            .buffer_size(0)
            .build_with_default::<Echo<u8>>();
        let outcomes = hive.swarm([1u8, 2, 3]).unwrap();
        let mut outputs: Vec<_> = outcomes.into_outputs().collect();
        outputs.sort();
        assert_eq!(outputs, vec![1, 2, 3]);
    }

    #[test]
    fn test_hive_is_reusable() {
        let hive = Builder::new()
            .num_workers(TEST_TASKS)
            .buffer_size(2)
            .build_with(Caller::of(|i: &u32| Ok::<_, ()>(i * i)));
        for n in [0u32, 1, 10, 100] {
            let sum: u32 = hive.swarm(0..n).unwrap().into_outputs().sum();
            assert_eq!(sum, (0..n).map(|i| i * i).sum::<u32>());
        }
    }

    #[test]
    fn test_borrowed_inputs() {
        let owned: Vec<String> = (0..20).map(|i| i.to_string()).collect();
        let prefix = String::from("#");
        let outcomes = crate::apply(
            owned.iter().map(String::as_str),
            |s: &&str| Ok::<_, ()>(format!("{prefix}{s}")),
            3,
            1,
        )
        .unwrap();
        assert_eq!(outcomes.len(), owned.len());
        assert!(outcomes.iter().all(|o| *o.output() == format!("#{}", o.input())));
    }

    #[test]
    fn test_slow_workers() {
        let outcomes = crate::apply(
            0..TEST_TASKS * 3,
            |i| {
                thread::sleep(Duration::from_millis(10));
                Ok::<_, ()>(*i)
            },
            TEST_TASKS,
            0,
        )
        .unwrap();
        assert_eq!(outcomes.len(), TEST_TASKS * 3);
    }

    #[test]
    fn test_fn_queen() {
        let hive = Builder::new().num_workers(2).build(FnQueen::new(|| {
            StateCaller::new(0usize, |count: &mut usize, _: &u8| {
                *count += 1;
                Product::<_, ()>::ok(*count)
            })
        }));
        let total: usize = hive.swarm(0..10).unwrap().len();
        assert_eq!(total, 10);
    }

    #[test]
    #[should_panic(expected = "intentional panic")]
    fn test_panic_is_propagated() {
        let _ = crate::apply(
            0..TEST_TASKS * 4,
            |i| {
                if *i == 5 {
                    panic!("intentional panic");
                }
                Ok::<_, ()>(*i)
            },
            TEST_TASKS,
            0,
        );
    }

    #[test]
    #[should_panic(expected = "intentional panic")]
    fn test_every_worker_panics() {
        let _ = crate::apply(
            0..TEST_TASKS * 4,
            |_: &usize| -> Result<usize, ()> { panic!("intentional panic") },
            TEST_TASKS,
            0,
        );
    }

    #[test]
    fn test_panic_does_not_lose_other_inputs() {
        let processed = AtomicUsize::new(0);
        let result = thread::scope(|scope| {
            scope
                .spawn(|| {
                    crate::apply(
                        0..100usize,
                        |i| {
                            if *i == 50 {
                                panic!("intentional panic");
                            }
                            processed.fetch_add(1, Ordering::SeqCst);
                            Ok::<_, ()>(*i)
                        },
                        TEST_TASKS,
                        0,
                    )
                })
                .join()
        });
        assert!(result.is_err());
        assert_eq!(processed.load(Ordering::SeqCst), 99);
    }

    #[test]
    fn test_name() {
        let name = "test";
        let hive = Builder::new()
            .thread_name(name)
            .num_workers(2)
            .build_with(Caller::of(|_: &u8| {
                Ok::<_, ()>(thread::current().name().map(str::to_owned))
            }));
        let outcomes = hive.swarm(0..10).unwrap();
        for thread_name in outcomes.into_outputs() {
            assert_eq!(thread_name.as_deref(), Some(name));
        }
    }

    #[test]
    fn test_stack_size() {
        let stack_size = 4_000_000;

        let hive = Builder::new()
            .num_workers(1)
            .thread_stack_size(stack_size)
            .build_with(Caller::of(|_: &u8| {
                Ok::<_, ()>(stacker::remaining_stack().unwrap_or(0))
            }));

        let actual_stack_size = hive
            .swarm([0])
            .unwrap()
            .into_outputs()
            .next()
            .unwrap() as f64;

        // measured value should be within 1% of actual
        assert!(actual_stack_size > (stack_size as f64 * 0.99));
        assert!(actual_stack_size < (stack_size as f64 * 1.01));
    }

    #[test]
    fn test_debug() {
        let hive = Builder::new()
            .num_workers(2)
            .build_with_default::<Echo<u8>>();
        let s = format!("{hive:?}");
        assert!(s.starts_with("Hive { queen: DefaultQueen("));
        assert!(s.contains("num_workers: Some(2)"));
    }

    #[test]
    fn test_matches_sequential_map() {
        let f = |i: &u64| -> Result<u64, String> {
            if i % 7 == 3 {
                Err(format!("bad {i}"))
            } else {
                Ok(i.wrapping_mul(2654435761))
            }
        };
        let expected: Vec<_> = Caller::of(&f).map(0..200).collect();
        let actual = crate::apply(0..200, &f, 5, 3).unwrap();
        assert_eq!(sorted(actual), expected);
    }
}
