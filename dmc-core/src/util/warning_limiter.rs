use std::sync::atomic::{AtomicUsize, Ordering};

/// counts occurrences of a recurring warning so that only the first `limit`
/// of them are written to the log. shared across worker threads via `Arc`.
#[derive(Debug)]
pub struct WarningLimiter {
    limit: usize,
    count: AtomicUsize,
}

impl WarningLimiter {
    pub const fn new(limit: usize) -> Self {
        Self {
            limit,
            count: AtomicUsize::new(0),
        }
    }

    /// registers one occurrence. returns true if the caller should still log it.
    pub fn try_acquire(&self) -> bool {
        self.count.fetch_add(1, Ordering::Relaxed) < self.limit
    }

    /// number of occurrences registered since construction or the last reset.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn reset(&self) {
        self.count.store(0, Ordering::Relaxed);
    }
}
