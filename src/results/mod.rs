//! Result slot shared between the run worker and reader threads
//!
//! The slot is the only state shared across threads during a benchmark run.
//! It holds zero or one [`RunResult`] and transitions exactly once, from
//! empty to populated; it never reverts and never holds more than one result.

use crate::error::{AppError, Result};
use crate::models::RunResult;
use std::sync::Mutex;

/// Single-writer, multi-reader cell holding the outcome of one run
///
/// The guard is held only for the duration of a slot read or write, never
/// across a send call, so contention stays bounded and brief.
#[derive(Debug, Default)]
pub struct ResultSlot {
    inner: Mutex<Option<RunResult>>,
}

impl ResultSlot {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish the run's result
    ///
    /// The first write wins; once populated the slot is immutable and any
    /// further publication is ignored.
    pub fn publish(&self, result: RunResult) {
        let mut slot = self.lock();
        if slot.is_none() {
            *slot = Some(result);
        }
    }

    /// Non-blocking point-in-time read of the result
    ///
    /// Fails with a not-ready error while the run is still in progress;
    /// returns the same immutable result on every call once populated.
    pub fn try_get(&self) -> Result<RunResult> {
        self.lock()
            .clone()
            .ok_or_else(|| AppError::not_ready("benchmark run has not completed"))
    }

    /// Check whether a result has been published
    pub fn is_ready(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<RunResult>> {
        // A reader panicking while holding the guard cannot corrupt an
        // Option, so a poisoned lock is still readable.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}
