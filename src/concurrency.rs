//! Worker pool sizing for leaf digest computation.

use std::thread;

/// Number of worker threads to use for `task_count` independent units of work.
///
/// Sized to the available hardware execution units, capped at the task count,
/// with a floor of one.
pub fn worker_count(task_count: usize) -> usize {
    let hardware = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    hardware.min(task_count).max(1)
}
