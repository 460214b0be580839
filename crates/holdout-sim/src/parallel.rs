//! Fork-join coordinator for per-system entity batches.
//!
//! Each parallelizable system owns a dedicated fixed-size pool so a slow
//! stage cannot starve an unrelated one. Batches are contiguous and
//! roughly equal-sized; `scope` is the join barrier, so a stage is fully
//! complete before the next one starts. A panicking batch is caught and
//! logged; its siblings and the frame keep running.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Mutex, PoisonError};
use std::thread;

use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use tracing::error;

use holdout_core::constants::MIN_WORKER_THREADS;

/// Worker threads per pool: available parallelism minus one (the frame
/// driver keeps a core), floored at two.
pub fn worker_count() -> usize {
    let available = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(MIN_WORKER_THREADS + 1);
    available.saturating_sub(1).max(MIN_WORKER_THREADS)
}

/// Contiguous batch length for `len` items across `workers` threads.
pub fn batch_len(len: usize, workers: usize) -> usize {
    (len / workers.max(1) + 1).max(1)
}

/// One dedicated pool per parallelizable system.
pub struct WorkerPools {
    pub physics: ThreadPool,
    pub collision: ThreadPool,
}

impl WorkerPools {
    pub fn new() -> Result<Self, ThreadPoolBuildError> {
        let workers = worker_count();
        Ok(Self {
            physics: build_pool("holdout-physics", workers)?,
            collision: build_pool("holdout-collision", workers)?,
        })
    }

    pub fn workers(&self) -> usize {
        self.physics.current_num_threads()
    }
}

fn build_pool(name: &'static str, workers: usize) -> Result<ThreadPool, ThreadPoolBuildError> {
    ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(move |i| format!("{name}-{i}"))
        .build()
}

/// Run one batch body, containing any panic at the task boundary.
pub fn run_task<F: FnOnce()>(body: F) {
    if catch_unwind(AssertUnwindSafe(body)).is_err() {
        error!("batch task panicked; remaining batches continue");
    }
}

/// Run `work` over contiguous chunks of `items` on the pool and collect
/// each batch's outcome. Returns only after every batch has finished. A
/// batch that panics contributes no outcome.
pub fn run_chunked<T, R, F>(pool: &ThreadPool, items: &[T], work: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&[T]) -> R + Sync,
{
    if items.is_empty() {
        return Vec::new();
    }

    let chunk = batch_len(items.len(), pool.current_num_threads());
    let outcomes = Mutex::new(Vec::new());
    pool.scope(|scope| {
        let outcomes = &outcomes;
        let work = &work;
        for batch in items.chunks(chunk) {
            scope.spawn(move |_| match catch_unwind(AssertUnwindSafe(|| work(batch))) {
                Ok(outcome) => outcomes
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(outcome),
                Err(_) => error!("batch task panicked; remaining batches continue"),
            });
        }
    });
    outcomes.into_inner().unwrap_or_else(PoisonError::into_inner)
}
